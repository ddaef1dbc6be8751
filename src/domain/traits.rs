//! # Domain Traits
//!
//! Abstract interfaces for the two outside systems the bot talks to (Chat, Catalog).
//! Allows for pluggable implementations in the Infrastructure layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::types::Sheet;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a markdown message to the room, returning its event id
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Read-only access to the recipe spreadsheet.
///
/// Implementations must not cache: every call reflects the current remote data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Titles of all tabs, in spreadsheet order.
    async fn sheet_titles(&self) -> Result<Vec<String>>;

    /// All cells of one tab. The first row is the header row.
    async fn sheet(&self, title: &str) -> Result<Sheet>;
}
