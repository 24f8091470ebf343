use tracing::debug;

use crate::api_client::{check_status, ApiClient, ApiError};

impl ApiClient {
    /// GET {candidates}/chatbot?message=…; the reply is plain text.
    pub async fn ask_chatbot(&self, message: &str) -> Result<String, ApiError> {
        let url = format!("{}/chatbot", self.candidates_url);
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .query(&[("message", message)])
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }
}
