//! In-memory implementations of the domain traits for unit tests.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::traits::{CatalogSource, ChatProvider};
use crate::domain::types::Sheet;

/// A catalog backed by fixed tabs. Records which tabs were fetched.
pub struct MemoryCatalog {
    sheets: Vec<Sheet>,
    fetched: Mutex<Vec<String>>,
    failing: bool,
}

impl MemoryCatalog {
    pub fn new(tabs: Vec<(&str, Vec<Vec<&str>>)>) -> Self {
        let sheets = tabs
            .into_iter()
            .map(|(title, rows)| {
                let rows = rows
                    .into_iter()
                    .map(|row| row.into_iter().map(str::to_string).collect())
                    .collect();
                Sheet::new(title, rows)
            })
            .collect();
        Self {
            sheets,
            fetched: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// A catalog whose every read fails, like an unreachable spreadsheet.
    pub fn failing() -> Self {
        Self {
            sheets: Vec::new(),
            fetched: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn sheet_titles(&self) -> Result<Vec<String>> {
        if self.failing {
            return Err(anyhow!("spreadsheet unavailable"));
        }
        Ok(self.sheets.iter().map(|s| s.title.clone()).collect())
    }

    async fn sheet(&self, title: &str) -> Result<Sheet> {
        self.fetched.lock().unwrap().push(title.to_string());
        self.sheets
            .iter()
            .find(|s| s.title == title)
            .cloned()
            .ok_or_else(|| anyhow!("no tab named {title}"))
    }
}

/// A chat room that keeps every message sent to it.
#[derive(Default)]
pub struct RecordingChat {
    room: String,
    sent: Mutex<Vec<String>>,
    attempts: Mutex<usize>,
    refusing: bool,
}

impl RecordingChat {
    pub fn new(room: &str) -> Self {
        Self {
            room: room.to_string(),
            ..Self::default()
        }
    }

    /// A room that rejects every message, like a homeserver that is down.
    pub fn refusing(room: &str) -> Self {
        Self {
            room: room.to_string(),
            refusing: true,
            ..Self::default()
        }
    }

    /// Number of send calls, accepted or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> String {
        self.sent().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        *self.attempts.lock().unwrap() += 1;
        if self.refusing {
            return Err("homeserver unavailable".to_string());
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    fn room_id(&self) -> String {
        self.room.clone()
    }
}
