//! `reqwest`-backed classification client.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::{ApiError, ClassificationClient, decode_response};
use crate::{PendingFile, PredictionResult};

/// The production classification service.
pub const DEFAULT_BASE_URL: &str =
    "https://fake-news-detector-api-786177988089.asia-south1.run.app";

/// HTTP client for the classification service.
///
/// One request per call; timeouts are enforced per request via `reqwest`
/// rather than by the state machine.
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn finish(resp: reqwest::Response) -> Result<PredictionResult, ApiError> {
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        decode_response(status, &body)
    }
}

impl ClassificationClient for HttpClient {
    fn classify_text<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, ApiError>> + Send + 'a>> {
        Box::pin(async move {
            // The service takes the text as a query parameter on POST; that
            // is its actual wire contract, odd as it looks.
            let url = format!(
                "{}/predict_from_text?text={}",
                self.base_url,
                urlencoding::encode(text)
            );
            tracing::debug!(chars = text.len(), "dispatching text classification");

            let resp = self
                .client
                .post(&url)
                .timeout(self.timeout)
                .send()
                .await?;
            Self::finish(resp).await
        })
    }

    fn classify_file<'a>(
        &'a self,
        file: &'a PendingFile,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, ApiError>> + Send + 'a>> {
        Box::pin(async move {
            let data = tokio::fs::read(&file.path)
                .await
                .map_err(|e| ApiError::FileRead {
                    name: file.name.clone(),
                    source: e,
                })?;

            let part = reqwest::multipart::Part::bytes(data).file_name(file.name.clone());
            let form = reqwest::multipart::Form::new().part("file", part);

            let url = format!("{}/predict_files", self.base_url);
            tracing::debug!(
                file = %file.name,
                bytes = file.size_bytes,
                "dispatching file classification"
            );

            let resp = self
                .client
                .post(&url)
                .multipart(form)
                .timeout(self.timeout)
                .send()
                .await?;
            Self::finish(resp).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = HttpClient::new("http://localhost:8000/", Duration::from_secs(5));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
