//! # Help Command
//!
//! Handles `/start` and `/help`.
//! Displays the greeting and command overview to the user.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_help(chat: &impl ChatProvider) -> Result<()> {
    super::reply(chat, crate::strings::help::MAIN).await
}
