use tracing::debug;

use crate::api_client::{check_status, decode_json, ApiClient, ApiError};
use crate::models::job_match::AdminJobMatch;

impl ApiClient {
    /// GET {job-matches}, optionally narrowed with `?candidateId=`.
    pub async fn list_job_matches(
        &self,
        candidate_id: Option<&str>,
    ) -> Result<Vec<AdminJobMatch>, ApiError> {
        match candidate_id {
            Some(candidate_id) => {
                debug!("GET {}?candidateId={}", self.job_matches_url, candidate_id);
                let response = self
                    .client
                    .get(&self.job_matches_url)
                    .query(&[("candidateId", candidate_id)])
                    .send()
                    .await?;
                decode_json(check_status(response).await?).await
            }
            None => self.get_json(&self.job_matches_url).await,
        }
    }

    /// DELETE {job-matches}/{id}
    pub async fn delete_job_match(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", self.job_matches_url, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api_client::testing::{client_for, serve};
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{delete, get},
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    fn router() -> Router {
        Router::new()
            .route(
                "/api/job-matches",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    let all = vec![
                        json!({"id": 1, "candidateId": "ada@example.com", "jobId": 3, "matchPercentage": 88.5}),
                        json!({"id": 2, "candidateId": "alan@example.com", "jobId": 3, "matchPercentage": 41.0,
                               "createdAt": "2024-05-01T10:20:30"}),
                    ];
                    let filtered: Vec<_> = match params.get("candidateId") {
                        Some(c) => all.into_iter().filter(|m| m["candidateId"] == c.as_str()).collect(),
                        None => all,
                    };
                    Json(json!(filtered))
                }),
            )
            .route(
                "/api/job-matches/:id",
                delete(|Path(_id): Path<i64>| async { StatusCode::NO_CONTENT }),
            )
    }

    #[tokio::test]
    async fn test_list_all_and_by_candidate() {
        let client = client_for(&serve(router()).await);

        let all = client.list_job_matches(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].created_at.as_deref(), Some("2024-05-01T10:20:30"));

        let one = client.list_job_matches(Some("ada@example.com")).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].job_id, 3);
        assert!((one[0].match_percentage - 88.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_delete_match() {
        let client = client_for(&serve(router()).await);
        client.delete_job_match(2).await.unwrap();
    }
}
