use crate::api_client::{ApiClient, ApiError};
use crate::models::candidate::AdminCandidate;

impl ApiClient {
    /// GET {candidates}
    pub async fn list_candidates(&self) -> Result<Vec<AdminCandidate>, ApiError> {
        self.get_json(&self.candidates_url).await
    }

    /// DELETE {candidates}/{id}
    pub async fn delete_candidate(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", self.candidates_url, id))
            .await
    }
}
