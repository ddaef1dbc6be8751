//! # Service Account Auth
//!
//! Locates the service-account key file and exchanges a signed JWT for an OAuth
//! access token. The token is reused until shortly before it expires.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::{SheetsError, check_status};

pub const SCOPES: &str = "https://www.googleapis.com/auth/spreadsheets.readonly \
https://www.googleapis.com/auth/drive.readonly";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Refresh this long before the token actually expires.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// First existing file among `paths`.
pub fn find_credentials(paths: &[String]) -> Result<PathBuf, SheetsError> {
    paths
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
        .ok_or_else(|| SheetsError::CredentialsNotFound {
            tried: paths.to_vec(),
        })
}

/// The fields of a Google service-account JSON key that token exchange needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self, SheetsError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| SheetsError::ReadKey {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SheetsError::InvalidKey {
            path: display,
            source,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    scope: String,
    aud: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    refresh_at: DateTime<Utc>,
}

pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    http: reqwest::Client,
    token: Mutex<Option<CachedToken>>,
}

impl ServiceAccountAuth {
    pub fn new(key: ServiceAccountKey, http: reqwest::Client) -> Self {
        Self {
            key,
            http,
            token: Mutex::new(None),
        }
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    /// A valid bearer token, fetching a new one when the cached one is about to expire.
    pub async fn access_token(&self) -> Result<String, SheetsError> {
        let mut cached = self.token.lock().await;
        let now = Utc::now();
        if let Some(token) = cached.as_ref()
            && token.refresh_at > now
        {
            return Ok(token.value.clone());
        }

        let assertion = self.assertion(now)?;
        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let token: TokenResponse = check_status(response).await?.json().await?;
        tracing::debug!("Obtained access token valid for {}s", token.expires_in);

        let fresh = CachedToken {
            value: token.access_token,
            refresh_at: now + Duration::seconds(token.expires_in - EXPIRY_MARGIN_SECS),
        };
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    /// Signed RS256 JWT asserting the service account's identity.
    fn assertion(&self, now: DateTime<Utc>) -> Result<String, SheetsError> {
        let claims = Claims {
            iss: self.key.client_email.clone(),
            scope: SCOPES.to_string(),
            aud: self.key.token_uri.clone(),
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
    }
}
