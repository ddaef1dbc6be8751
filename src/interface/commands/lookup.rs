//! # Drink Lookup
//!
//! Handles free-text messages: a bare number picks from the session's last
//! list, anything else is searched by drink name.

use anyhow::Result;
use tokio::sync::Mutex;

use crate::application::recipe::format_result;
use crate::application::search;
use crate::application::state::{SessionKey, SessionStore};
use crate::domain::config::ReplyConfig;
use crate::domain::traits::{CatalogSource, ChatProvider};
use crate::strings::messages;

pub async fn handle_lookup(
    reply: &ReplyConfig,
    catalog: &dyn CatalogSource,
    sessions: &Mutex<SessionStore>,
    key: &SessionKey,
    chat: &impl ChatProvider,
    text: &str,
) -> Result<()> {
    let text = text.trim();

    if let Some(number) = parse_selection(text) {
        let selected = sessions.lock().await.select(key, number).cloned();
        if let Some(result) = selected {
            return super::reply(chat, &format_result(&result)).await;
        }
        // Out of range: treat the number as a drink name.
        tracing::debug!("Selection {} out of range for {:?}", number, key);
    }

    let matches = search::find_matches(catalog, text).await?;
    if matches.is_empty() {
        return super::reply(chat, messages::DRINK_NOT_FOUND).await;
    }
    if let Some(exact) = search::exact_match(&matches, text) {
        return super::reply(chat, &format_result(exact)).await;
    }

    let listing = super::numbered_list(&matches, Some(reply.list_limit), text);
    sessions.lock().await.remember(key.clone(), matches);
    super::reply(chat, &format!("{}\n{}", messages::SEVERAL_MATCHES_HEADER, listing)).await
}

/// A message made only of ASCII digits, as a list number.
fn parse_selection(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
