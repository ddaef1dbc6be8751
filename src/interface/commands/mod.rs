//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., /tabs, /list, /all)
//! and for free-text drink lookups. These handlers are invoked by the Router.

pub mod all;
pub mod help;
pub mod list;
pub mod lookup;
pub mod tabs;

use anyhow::Result;
use thiserror::Error;

use crate::domain::traits::ChatProvider;
use crate::domain::types::SearchResult;
use crate::strings::messages;

/// The chat provider refused a message.
#[derive(Debug, Error)]
#[error("Failed to send message: {0}")]
pub struct SendError(pub String);

/// Sends `content` to the room, turning the provider's error into a [`SendError`].
pub(crate) async fn reply(chat: &impl ChatProvider, content: &str) -> Result<()> {
    chat.send_message(content)
        .await
        .map(|_| ())
        .map_err(|e| SendError(e).into())
}

/// Numbered `N. name (🗂 sheet)` lines. With a `limit`, the rest is replaced
/// by a hint pointing at `/all <query>`.
pub(crate) fn numbered_list(results: &[SearchResult], limit: Option<usize>, query: &str) -> String {
    let shown = limit.unwrap_or(results.len()).min(results.len());
    let mut lines: Vec<String> = results[..shown]
        .iter()
        .enumerate()
        .map(|(i, r)| messages::numbered_entry(i, r))
        .collect();
    if shown < results.len() {
        // keeps the hint out of the last list item
        lines.push(String::new());
        lines.push(messages::list_overflow(results.len() - shown, query));
    }
    lines.join("\n")
}
