//! # Domain Types
//!
//! Common data structures used across the application logic.

use std::sync::Arc;

/// One tab of the spreadsheet. `rows[0]` is the header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub title: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(title: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    /// Splits the tab into its header row and data rows.
    /// Returns `None` for a tab without any rows.
    pub fn split_header(&self) -> Option<(&[String], &[Vec<String>])> {
        let (headers, data) = self.rows.split_first()?;
        Some((headers.as_slice(), data))
    }
}

/// A recipe row matched by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub sheet_title: String,
    /// Header row of the tab, shared by every result from that tab.
    pub headers: Arc<Vec<String>>,
    pub row: Vec<String>,
    /// Normalized item name, used for exact-match checks and sorting.
    pub normalized_name: String,
}

impl SearchResult {
    /// Raw item name (first cell of the row).
    pub fn name(&self) -> &str {
        self.row.first().map(String::as_str).unwrap_or_default()
    }
}
