//! # Domain Layer
//!
//! Core definitions, types, and traits that define the business domain of the bot.
//! Independent of the chat platform and of the spreadsheet backend.

pub mod config;
pub mod traits;
pub mod types;
