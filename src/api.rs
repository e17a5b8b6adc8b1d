//! Remote Sync Engine
//!
//! HTTP bindings for the `/todos` collection. Each operation is a single
//! round-trip with no retry, timeout, or cancellation; callers own all
//! view-state bookkeeping.

use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::ToDo;

/// Failure of one API round-trip, surfaced to the UI as its message text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Client for the to-do collection under one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn entry_url(&self, id: &str) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    /// GET the full list, in server order.
    pub async fn fetch_all(&self) -> Result<Vec<ToDo>, ApiError> {
        let response = Request::get(&self.collection_url())
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = require_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST one entry; the server assigns the id.
    pub async fn create(&self, entry: &ToDo) -> Result<ToDo, ApiError> {
        let response = Request::post(&self.collection_url())
            .json(entry)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = require_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// DELETE one entry by id.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.entry_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        require_success(response).await?;
        Ok(())
    }
}

fn status_is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Reject non-2xx responses, keeping the body for the error message.
async fn require_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status_is_success(status) {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig::new("http://localhost:3000"))
    }

    #[test]
    fn collection_url_joins_todos() {
        assert_eq!(client().collection_url(), "http://localhost:3000/todos");
    }

    #[test]
    fn entry_url_includes_id() {
        assert_eq!(client().entry_url("1"), "http://localhost:3000/todos/1");
    }

    #[test]
    fn trailing_slash_base_is_normalized() {
        let client = ApiClient::new(&ApiConfig::new("http://localhost:3000/"));
        assert_eq!(client.collection_url(), "http://localhost:3000/todos");
    }

    #[test]
    fn success_statuses_pass() {
        assert!(status_is_success(200));
        assert!(status_is_success(201));
        assert!(status_is_success(204));
        assert!(!status_is_success(199));
        assert!(!status_is_success(404));
        assert!(!status_is_success(500));
    }

    #[test]
    fn status_error_message_carries_code_and_body() {
        let err = ApiError::Status {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }

    #[test]
    fn request_error_message_carries_cause() {
        let err = ApiError::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
