//! HTTP client for the analysis backend.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::ingest::MediaFile;
use crate::types::{AppError, AppResult, DeleteResponse, ErrorBody, RecentEntry, UploadResponse};

/// The four backend operations the controller depends on.
///
/// Implemented over HTTP by [`HttpApi`]; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait AnalysisApi {
    /// Binary payload carried by an accepted [`MediaFile`].
    type Payload;

    /// `GET /recent_entries`
    async fn recent_entries(&self) -> AppResult<Vec<RecentEntry>>;

    /// `GET /analysis/{analysis_html}`
    async fn analysis(&self, analysis_html: &str) -> AppResult<String>;

    /// `POST /upload`, multipart with a single `file` field.
    async fn upload(&self, file: MediaFile<Self::Payload>) -> AppResult<UploadResponse>;

    /// `DELETE /delete_entry/{filename}`
    async fn delete_entry(&self, filename: &str) -> AppResult<DeleteResponse>;
}

/// [`AnalysisApi`] over `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

/// Join a base URL and an absolute path without doubling the slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn path_segment(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}

/// URL of a stored artifact (`.html` rendering or `.txt` transcript).
pub fn analysis_url(base_url: &str, artifact: &str) -> String {
    endpoint(base_url, &format!("/analysis/{}", path_segment(artifact)))
}

fn network(e: gloo_net::Error) -> AppError {
    AppError::Network(format!("HTTP request failed: {}", e))
}

/// Build a [`AppError::Server`] from a non-2xx body, preferring the
/// backend's `{"error": ...}` field when there is one.
pub fn server_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body.trim().to_string()
            }
        });
    AppError::Server { status, message }
}

async fn ensure_ok(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(server_error(response.status(), &body))
}

impl AnalysisApi for HttpApi {
    type Payload = File;

    async fn recent_entries(&self) -> AppResult<Vec<RecentEntry>> {
        let response = Request::get(&self.url("/recent_entries"))
            .send()
            .await
            .map_err(network)?;

        let response = ensure_ok(response).await?;
        response
            .json::<Vec<RecentEntry>>()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to parse entries: {}", e)))
    }

    async fn analysis(&self, analysis_html: &str) -> AppResult<String> {
        let url = analysis_url(&self.base_url, analysis_html);
        let response = Request::get(&url).send().await.map_err(network)?;

        let response = ensure_ok(response).await?;
        response
            .text()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to read analysis: {}", e)))
    }

    async fn upload(&self, file: MediaFile<File>) -> AppResult<UploadResponse> {
        let form_data =
            FormData::new().map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename("file", &file.payload, &file.name)
            .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;

        log::debug!("Uploading {} ({})", file.name, file.media_type);

        let request = Request::post(&self.url("/upload"))
            .body(form_data)
            .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?;
        let response = request.send().await.map_err(network)?;

        let response = ensure_ok(response).await?;
        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to parse response: {}", e)))
    }

    async fn delete_entry(&self, filename: &str) -> AppResult<DeleteResponse> {
        let url = self.url(&format!("/delete_entry/{}", path_segment(filename)));
        let response = Request::delete(&url).send().await.map_err(network)?;

        // Refusals come back as 404/500 with a regular body.
        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.map_err(network)?;
        decode_delete(status, ok, &body)
    }
}

/// Decode a delete body whatever the status; only an unreadable body
/// counts as a failure of the request itself.
pub fn decode_delete(status: u16, ok: bool, body: &str) -> AppResult<DeleteResponse> {
    match serde_json::from_str::<DeleteResponse>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) if ok => Err(AppError::Decode(format!("Failed to parse response: {}", e))),
        Err(_) => Err(server_error(status, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        assert_eq!(endpoint("", "/upload"), "/upload");
        assert_eq!(endpoint("http://localhost:5000", "/upload"), "http://localhost:5000/upload");
        assert_eq!(endpoint("http://localhost:5000/", "/recent_entries"), "http://localhost:5000/recent_entries");
    }

    #[test]
    fn test_server_error_uses_backend_reason() {
        let err = server_error(400, r#"{"error": "Invalid file type"}"#);
        assert_eq!(err, AppError::Server { status: 400, message: "Invalid file type".into() });
    }

    #[test]
    fn test_server_error_falls_back_to_body() {
        assert_eq!(
            server_error(502, "Bad Gateway\n"),
            AppError::Server { status: 502, message: "Bad Gateway".into() }
        );
        assert_eq!(
            server_error(500, ""),
            AppError::Server { status: 500, message: "Unknown error".into() }
        );
    }

    #[test]
    fn test_delete_refusal_decoded_on_error_status() {
        let refused = decode_delete(404, false, r#"{"success": false, "message": "Entry not found"}"#).unwrap();
        assert!(!refused.success);
        assert_eq!(refused.message.as_deref(), Some("Entry not found"));
    }

    #[test]
    fn test_delete_unreadable_body() {
        assert!(matches!(decode_delete(200, true, "<html>"), Err(AppError::Decode(_))));
        assert!(matches!(
            decode_delete(503, false, "Service Unavailable"),
            Err(AppError::Server { status: 503, .. })
        ));
    }
}
