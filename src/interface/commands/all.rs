//! # All Command
//!
//! Handles `/all <word>`: sends the card of every match, exact matches first,
//! packed into as few messages as the message budget allows.

use anyhow::Result;

use crate::application::packing::pack_messages;
use crate::application::recipe::format_result;
use crate::application::search;
use crate::domain::config::ReplyConfig;
use crate::domain::traits::{CatalogSource, ChatProvider};
use crate::strings::messages;

pub async fn handle_all(
    reply: &ReplyConfig,
    catalog: &dyn CatalogSource,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    let query = args.trim();
    if query.is_empty() {
        return super::reply(chat, messages::ALL_USAGE).await;
    }

    let mut matches = search::find_matches(catalog, query).await?;
    if matches.is_empty() {
        return super::reply(chat, messages::NOTHING_FOUND).await;
    }
    search::sort_exact_first(&mut matches, query);

    let cards = matches.iter().map(format_result);
    for message in pack_messages(cards, reply.message_budget) {
        super::reply(chat, &message).await?;
    }
    Ok(())
}
