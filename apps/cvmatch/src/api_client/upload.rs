use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tracing::{debug, info};

use crate::api_client::{check_status, decode_json, ApiClient, ApiError};
use crate::models::upload::UploadResponse;
use crate::submission::{skills::form_skills, CandidateForm, CvFile};

/// Receives upload progress as a percentage (0–100).
pub type ProgressSink = Arc<dyn Fn(u8) + Send + Sync>;

const CHUNK_SIZE: usize = 64 * 1024;

/// The upload seam the submission flow depends on. `ApiClient` is the real implementation.
#[async_trait]
pub trait CvUploader: Send + Sync {
    async fn upload_cv(
        &self,
        form: &CandidateForm,
        cv: &CvFile,
        progress: ProgressSink,
    ) -> Result<UploadResponse, ApiError>;
}

#[async_trait]
impl CvUploader for ApiClient {
    /// POST {candidates}/upload as multipart: `cv`, `firstName`, `lastName`, `email`, `phone`, `skills`.
    async fn upload_cv(
        &self,
        form: &CandidateForm,
        cv: &CvFile,
        progress: ProgressSink,
    ) -> Result<UploadResponse, ApiError> {
        let content = cv.read().await?;
        let length = content.len() as u64;
        info!("Uploading {} ({} bytes)", cv.name(), length);

        let part = Part::stream_with_length(progress_body(content, progress), length)
            .file_name(cv.name().to_string())
            .mime_str(cv.mime_type())?;

        let multipart = Form::new()
            .part("cv", part)
            .text("firstName", form.first_name.clone())
            .text("lastName", form.last_name.clone())
            .text("email", form.email.clone())
            .text("phone", form.phone.clone())
            .text("skills", form_skills(&form.skills).join(","));

        let url = format!("{}/upload", self.candidates_url);
        debug!("POST {url}");
        let response = self.client.post(&url).multipart(multipart).send().await?;
        let response = check_status(response).await?;
        decode_json(response).await
    }
}

/// Streams `content` in chunks, reporting the share handed to the transport so far.
fn progress_body(content: Bytes, progress: ProgressSink) -> Body {
    let total = content.len();
    let chunks: Vec<Bytes> = (0..total)
        .step_by(CHUNK_SIZE)
        .map(|start| content.slice(start..(start + CHUNK_SIZE).min(total)))
        .collect();

    let mut sent = 0usize;
    let stream = futures_util::stream::iter(chunks).map(move |chunk| {
        sent += chunk.len();
        progress(percent(sent, total));
        Ok::<Bytes, std::io::Error>(chunk)
    });
    Body::wrap_stream(stream)
}

pub fn percent(sent: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((sent as f64 / total as f64) * 100.0).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::testing::{client_for, serve};
    use axum::{extract::Multipart, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Map, Value};
    use std::sync::Mutex;

    fn form() -> CandidateForm {
        CandidateForm {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "0612345678".to_string(),
            skills: " Cobol ,, Fortran ".to_string(),
        }
    }

    /// Echoes every multipart field back as `{name: text}` plus file metadata.
    async fn echo_upload(mut multipart: Multipart) -> Json<Value> {
        let mut fields = Map::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            if name == "cv" {
                fields.insert("cvName".into(), json!(field.file_name()));
                fields.insert("cvType".into(), json!(field.content_type()));
                fields.insert("cvSize".into(), json!(field.bytes().await.unwrap().len()));
            } else {
                fields.insert(name, json!(field.text().await.unwrap()));
            }
        }
        Json(json!({
            "success": true,
            "candidateId": 5,
            "skills": [fields["skills"].clone()],
            "experience": 2,
            "echo": fields,
        }))
    }

    #[test]
    fn test_percent_rounds_and_handles_empty() {
        assert_eq!(percent(0, 0), 100);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(3, 3), 100);
    }

    #[tokio::test]
    async fn test_upload_sends_all_fields() {
        let router = Router::new().route("/api/candidates/upload", post(echo_upload));
        let client = client_for(&serve(router).await);
        let cv = CvFile::from_bytes("grace.pdf", vec![7u8; 200_000]);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let progress: ProgressSink = Arc::new(move |p| sink.lock().unwrap().push(p));

        let response = client.upload_cv(&form(), &cv, progress).await.unwrap();
        assert!(response.success);
        assert_eq!(response.candidate_id, Some(5));
        // skills are re-joined without the blanks and padding
        assert_eq!(response.skills, Some(vec!["Cobol,Fortran".to_string()]));

        let progress = seen.lock().unwrap().clone();
        assert!(!progress.is_empty());
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(progress.last(), Some(&100));
    }

    #[tokio::test]
    async fn test_upload_error_status_is_surfaced() {
        let router = Router::new().route(
            "/api/candidates/upload",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "AI processing failed: timeout"})),
                )
            }),
        );
        let client = client_for(&serve(router).await);
        let cv = CvFile::from_bytes("cv.docx", "hello");

        let err = client
            .upload_cv(&form(), &cv, Arc::new(|_| {}))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(
            err.body().and_then(|b| b.message.as_deref()),
            Some("AI processing failed: timeout")
        );
    }

    #[tokio::test]
    async fn test_upload_reports_file_metadata() {
        async fn inspect(mut multipart: Multipart) -> Json<Value> {
            let mut meta = json!({});
            while let Some(field) = multipart.next_field().await.unwrap() {
                if field.name() == Some("cv") {
                    meta = json!({
                        "name": field.file_name(),
                        "type": field.content_type(),
                    });
                }
            }
            Json(json!({"success": false, "message": meta.to_string()}))
        }
        let router = Router::new().route("/api/candidates/upload", post(inspect));
        let client = client_for(&serve(router).await);
        let cv = CvFile::from_bytes("cv.docx", "hello");

        let response = client
            .upload_cv(&form(), &cv, Arc::new(|_| {}))
            .await
            .unwrap();
        assert!(!response.success);
        let meta: Value = serde_json::from_str(response.error.message.as_deref().unwrap()).unwrap();
        assert_eq!(meta["name"], "cv.docx");
        assert_eq!(
            meta["type"],
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }
}
