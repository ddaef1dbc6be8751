//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `/list`) and dispatches it with the necessary context.
//! Anything that is not a command is a drink lookup.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::state::{SessionKey, SessionStore};
use crate::domain::config::ReplyConfig;
use crate::domain::traits::{CatalogSource, ChatProvider};
use crate::interface::commands;
use crate::strings::messages;

/// Always starts a command.
const COMMAND_PREFIX: char = '/';
/// Starts a command only when a letter follows, so `...` or `.5` stay free text.
const ALT_COMMAND_PREFIX: char = '.';

pub struct CommandRouter {
    reply: ReplyConfig,
    catalog: Arc<dyn CatalogSource>,
    sessions: Arc<Mutex<SessionStore>>,
}

impl CommandRouter {
    pub fn new(
        reply: ReplyConfig,
        catalog: Arc<dyn CatalogSource>,
        sessions: Arc<Mutex<SessionStore>>,
    ) -> Self {
        Self {
            reply,
            catalog,
            sessions,
        }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let msg = message.trim();
        if msg.is_empty() {
            return Ok(());
        }
        let key = SessionKey::new(chat.room_id(), sender);

        let result = match parse_command(msg) {
            Some((cmd, args)) => {
                tracing::info!(
                    "Router dispatching cmd='{}' args='{}' sender='{}'",
                    cmd,
                    args,
                    sender
                );
                self.dispatch(chat, &key, &cmd, &args).await
            }
            None => {
                tracing::info!("Router lookup '{}' sender='{}'", msg, sender);
                commands::lookup::handle_lookup(
                    &self.reply,
                    self.catalog.as_ref(),
                    &self.sessions,
                    &key,
                    chat,
                    msg,
                )
                .await
            }
        };

        if let Err(e) = &result {
            tracing::error!("Request '{}' from {} failed: {:#}", msg, sender, e);
            if e.downcast_ref::<commands::SendError>().is_none()
                && let Err(send_err) = chat.send_message(messages::FETCH_FAILED).await
            {
                tracing::warn!("Failed to send failure notice: {}", send_err);
            }
        }
        result
    }

    async fn dispatch<C>(&self, chat: &C, key: &SessionKey, cmd: &str, args: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let catalog = self.catalog.as_ref();
        match cmd {
            "start" | "help" => commands::help::handle_help(chat).await,
            "tabs" => commands::tabs::handle_tabs(catalog, &self.sessions, key, chat, args).await,
            "list" => commands::list::handle_list(catalog, &self.sessions, key, chat, args).await,
            "all" => commands::all::handle_all(&self.reply, catalog, chat, args).await,
            _ => commands::reply(chat, messages::UNKNOWN_COMMAND).await,
        }
    }
}

/// Splits `/cmd@bot args` into a lowercase command name and its arguments,
/// with runs of whitespace between arguments collapsed to one space.
/// Returns `None` for messages without a command prefix.
fn parse_command(msg: &str) -> Option<(String, String)> {
    let rest = match msg.strip_prefix(COMMAND_PREFIX) {
        Some(rest) => rest,
        None => msg
            .strip_prefix(ALT_COMMAND_PREFIX)
            .filter(|rest| rest.starts_with(|c: char| c.is_ascii_alphabetic()))?,
    };
    let mut words = rest.split_whitespace();
    let head = words.next().unwrap_or_default();
    let name = head.split('@').next().unwrap_or_default();
    let args = words.collect::<Vec<_>>().join(" ");
    Some((name.to_lowercase(), args))
}
