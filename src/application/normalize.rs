//! # Text Normalization
//!
//! Makes drink names comparable regardless of case and punctuation.

use regex::Regex;
use std::sync::OnceLock;

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"))
}

/// Strips punctuation, trims, and lowercases `text`.
pub fn normalize(text: &str) -> String {
    punctuation().replace_all(text, "").trim().to_lowercase()
}

/// [`normalize`] for a cell that may be missing; a missing cell is empty.
pub fn normalize_cell(cell: Option<&str>) -> String {
    cell.map(normalize).unwrap_or_default()
}
