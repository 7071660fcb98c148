// src/core/service_client.rs
//! HTTP client for the analysis service - one round trip per operation

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use tracing::{error, info, trace};

use crate::error::ClientError;
use crate::types::AnalysisResult;
use crate::utils::content_type_for;

const UPLOAD_RESUME_ENDPOINT: &str = "/upload-resume";
const ANALYZE_LINKEDIN_ENDPOINT: &str = "/analyze-linkedin-url";
const ANALYSES_ENDPOINT: &str = "/analyses";
const ANALYSIS_ENDPOINT: &str = "/analysis";

// Non-2xx bodies carry a human-readable message under this shape.
#[derive(Deserialize)]
struct ApiError {
    error: String,
}

pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Create a new client against a fixed base endpoint. No timeout is
    /// configured: a submission runs to completion or failure.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 1. Resume upload - sends the file as multipart form data under the
    /// `file` field, receives the full analysis.
    pub async fn upload_resume(&self, file_path: &Path) -> Result<AnalysisResult, ClientError> {
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ClientError::validation(format!("Invalid file path: {}", file_path.display()))
            })?
            .to_string();
        let content_type = content_type_for(&file_name)?;
        let url = format!("{}{}", self.base_url, UPLOAD_RESUME_ENDPOINT);

        let file_content = tokio::fs::read(file_path)
            .await
            .map_err(|source| ClientError::Io {
                path: file_path.to_path_buf(),
                source,
            })?;

        let form = Form::new().part(
            "file",
            Part::bytes(file_content)
                .file_name(file_name)
                .mime_str(content_type)?,
        );

        info!("Uploading resume to analysis service: {}", url);

        let response = self.client.post(&url).multipart(form).send().await?;
        self.read_json(response).await
    }

    /// 2. LinkedIn profile analysis - sends the URL as JSON.
    pub async fn analyze_linkedin_url(
        &self,
        profile_url: &str,
    ) -> Result<AnalysisResult, ClientError> {
        let url = format!("{}{}", self.base_url, ANALYZE_LINKEDIN_ENDPOINT);
        let payload = serde_json::json!({ "url": profile_url });

        info!("Calling LinkedIn analysis service: {}", url);

        let response = self.client.post(&url).json(&payload).send().await?;
        self.read_json(response).await
    }

    /// 3. Stored analyses, newest first as ordered by the service.
    pub async fn get_analyses(&self) -> Result<Vec<AnalysisResult>, ClientError> {
        let url = format!("{}{}", self.base_url, ANALYSES_ENDPOINT);

        trace!("Fetching stored analyses: {}", url);

        let response = self.client.get(&url).send().await?;
        self.read_json(response).await
    }

    /// 4. A single stored analysis by id.
    pub async fn get_analysis(&self, id: &str) -> Result<AnalysisResult, ClientError> {
        let url = format!("{}{}/{}", self.base_url, ANALYSIS_ENDPOINT, id);

        trace!("Fetching stored analysis: {}", url);

        let response = self.client.get(&url).send().await?;
        self.read_json(response).await
    }

    async fn read_json<R>(&self, response: reqwest::Response) -> Result<R, ClientError>
    where
        R: serde::de::DeserializeOwned,
    {
        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            let response_text = response.text().await?;
            Ok(serde_json::from_str(&response_text)?)
        } else {
            Err(self.error_from_body(status, response).await)
        }
    }

    /// Extract the service's structured `error` message when the body has
    /// one; fall back to the raw body, then to a generic message.
    async fn error_from_body(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ClientError {
        let body = response.text().await.unwrap_or_default();

        error!("Analysis service error response ({}): {}", status, body);

        let message = match serde_json::from_str::<ApiError>(&body) {
            Ok(api_error) => api_error.error,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => format!("Analysis service returned status {status}"),
        };

        ClientError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AnalysisClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[tokio::test]
    async fn test_upload_rejects_unknown_extension_before_any_request() {
        let client = AnalysisClient::new("http://127.0.0.1:9/api").unwrap();
        let err = client
            .upload_resume(Path::new("notes.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
