//! # Sheets Client
//!
//! Implements [`CatalogSource`] over the Google Sheets v4 API. The spreadsheet is
//! located once at startup (by id, or by name through Drive v3); tab titles and
//! cell values are fetched on every call.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::SheetsError;
use super::auth::{ServiceAccountAuth, ServiceAccountKey, find_credentials};
use super::check_status;
use crate::domain::config::SheetsConfig;
use crate::domain::traits::CatalogSource;
use crate::domain::types::Sheet;

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const DRIVE_FILES_API: &str = "https://www.googleapis.com/drive/v3/files";
const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    // Absent for an empty tab.
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

pub struct SheetsClient {
    http: reqwest::Client,
    auth: ServiceAccountAuth,
    spreadsheet_id: String,
}

impl SheetsClient {
    /// Finds the key file, then opens the configured spreadsheet.
    /// Fails before any chat request is served if either step fails.
    pub async fn connect(config: &SheetsConfig) -> Result<Self, SheetsError> {
        let key_path = find_credentials(&config.credentials_paths)?;
        tracing::info!(
            "{}",
            crate::strings::logs::credentials_found(&key_path.display().to_string())
        );
        let key = ServiceAccountKey::from_file(&key_path)?;

        let http = reqwest::Client::new();
        let auth = ServiceAccountAuth::new(key, http.clone());
        tracing::debug!("Authenticating as {}", auth.client_email());

        let spreadsheet_id = match &config.spreadsheet_id {
            Some(id) => id.clone(),
            None => find_spreadsheet(&http, &auth, &config.table_name).await?,
        };
        tracing::info!(
            "{}",
            crate::strings::logs::spreadsheet_opened(&config.table_name, &spreadsheet_id)
        );

        Ok(Self {
            http,
            auth,
            spreadsheet_id,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, SheetsError> {
        get_json(&self.http, &self.auth, url, query).await
    }

    async fn titles(&self) -> Result<Vec<String>, SheetsError> {
        let url = spreadsheet_url(&self.spreadsheet_id, &[])?;
        let meta: SpreadsheetMeta = self
            .get_json(url, &[("fields", "sheets.properties.title")])
            .await?;
        Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    async fn values(&self, title: &str) -> Result<Sheet, SheetsError> {
        let range = sheet_range(title);
        let url = spreadsheet_url(&self.spreadsheet_id, &["values", range.as_str()])?;
        let values: ValueRange = self.get_json(url, &[]).await?;
        Ok(Sheet::new(title, cells_to_rows(values.values)))
    }
}

#[async_trait]
impl CatalogSource for SheetsClient {
    async fn sheet_titles(&self) -> Result<Vec<String>> {
        Ok(self.titles().await?)
    }

    async fn sheet(&self, title: &str) -> Result<Sheet> {
        Ok(self.values(title).await?)
    }
}

async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    auth: &ServiceAccountAuth,
    url: Url,
    query: &[(&str, &str)],
) -> Result<T, SheetsError> {
    let token = auth.access_token().await?;
    let response = http.get(url).query(query).bearer_auth(token).send().await?;
    Ok(check_status(response).await?.json().await?)
}

/// Id of the first spreadsheet named `name` visible to the service account.
async fn find_spreadsheet(
    http: &reqwest::Client,
    auth: &ServiceAccountAuth,
    name: &str,
) -> Result<String, SheetsError> {
    let url = Url::parse(DRIVE_FILES_API).map_err(|e| SheetsError::InvalidUrl(e.to_string()))?;
    let q = drive_query(name);
    let list: FileList = get_json(
        http,
        auth,
        url,
        &[
            ("q", q.as_str()),
            ("fields", "files(id)"),
            ("supportsAllDrives", "true"),
            ("includeItemsFromAllDrives", "true"),
        ],
    )
    .await?;
    list.files
        .into_iter()
        .next()
        .map(|f| f.id)
        .ok_or_else(|| SheetsError::SpreadsheetNotFound(name.to_string()))
}

/// Drive search expression for a spreadsheet with exactly this name.
fn drive_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name = '{escaped}' and mimeType = '{SPREADSHEET_MIME}' and trashed = false")
}

/// A1 range covering a whole tab: the title, quoted.
fn sheet_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// `SHEETS_API/<id>/<segments...>`, with each segment percent-encoded.
fn spreadsheet_url(id: &str, segments: &[&str]) -> Result<Url, SheetsError> {
    let mut url = Url::parse(SHEETS_API).map_err(|e| SheetsError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| SheetsError::InvalidUrl(SHEETS_API.to_string()))?
        .push(id)
        .extend(segments);
    Ok(url)
}

fn cells_to_rows(values: Vec<Vec<serde_json::Value>>) -> Vec<Vec<String>> {
    values
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect()
}
