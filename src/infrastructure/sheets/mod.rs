//! # Google Sheets
//!
//! Read-only access to the recipe spreadsheet through the Sheets and Drive REST APIs,
//! authenticated as a Google service account.

pub mod auth;
pub mod client;

pub use client::SheetsClient;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("Service account key not found; tried: {}", .tried.join(", "))]
    CredentialsNotFound { tried: Vec<String> },

    #[error("Failed to read service account key {path}: {source}")]
    ReadKey {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid service account key {path}: {source}")]
    InvalidKey {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to sign token request: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Google API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Spreadsheet '{0}' not found or not shared with the service account")]
    SpreadsheetNotFound(String),
}

/// Turns a non-2xx response into [`SheetsError::Api`].
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, SheetsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SheetsError::Api {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_every_path() {
        let err = SheetsError::CredentialsNotFound {
            tried: vec!["google_key.json".to_string(), "/etc/secrets/google_key.json".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Service account key not found; tried: google_key.json, /etc/secrets/google_key.json"
        );
    }
}
