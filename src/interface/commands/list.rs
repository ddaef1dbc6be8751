//! # List Command
//!
//! Handles `/list <word>`: every drink whose name contains the word, numbered
//! so the user can pick one by replying with its number.

use anyhow::Result;
use tokio::sync::Mutex;

use crate::application::search;
use crate::application::state::{SessionKey, SessionStore};
use crate::domain::traits::{CatalogSource, ChatProvider};
use crate::strings::messages;

pub async fn handle_list(
    catalog: &dyn CatalogSource,
    sessions: &Mutex<SessionStore>,
    key: &SessionKey,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    let query = args.trim();
    if query.is_empty() {
        return super::reply(chat, messages::LIST_USAGE).await;
    }

    let matches = search::find_matches(catalog, query).await?;
    if matches.is_empty() {
        return super::reply(chat, messages::NOTHING_FOUND).await;
    }

    let text = format!(
        "{}\n{}",
        messages::MATCHES_HEADER,
        super::numbered_list(&matches, None, query)
    );
    sessions.lock().await.remember(key.clone(), matches);
    super::reply(chat, &text).await
}
