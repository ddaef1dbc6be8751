//! # Tabs Command
//!
//! Handles `/tabs` and `/tabs <category>`.
//! Lists the spreadsheet tabs, or every drink in the tabs matching a category.

use anyhow::Result;
use tokio::sync::Mutex;

use crate::application::search;
use crate::application::state::{SessionKey, SessionStore};
use crate::domain::traits::{CatalogSource, ChatProvider};
use crate::strings::messages;

pub async fn handle_tabs(
    catalog: &dyn CatalogSource,
    sessions: &Mutex<SessionStore>,
    key: &SessionKey,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    let query = args.trim();
    if query.is_empty() {
        let titles = catalog.sheet_titles().await?;
        let text = format!("{}\n{}", messages::TABS_HEADER, bullets(&titles));
        return super::reply(chat, &text).await;
    }

    let matches = search::list_by_sheet(catalog, query).await?;
    if matches.is_empty() {
        let titles = catalog.sheet_titles().await?;
        let text = format!("{}\n{}", messages::CATEGORY_NOT_FOUND, bullets(&titles));
        return super::reply(chat, &text).await;
    }

    let text = format!(
        "{}\n{}",
        messages::category_header(query),
        super::numbered_list(&matches, None, query)
    );
    sessions.lock().await.remember(key.clone(), matches);
    super::reply(chat, &text).await
}

fn bullets(titles: &[String]) -> String {
    titles
        .iter()
        .map(|t| messages::bullet(t))
        .collect::<Vec<_>>()
        .join("\n")
}
