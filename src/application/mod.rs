//! # Application Layer
//!
//! Contains the core logic of the bot: name normalization, search, recipe card
//! formatting, message packing, per-session state, and command routing.

pub mod normalize;
pub mod packing;
pub mod recipe;
pub mod router;
pub mod search;
pub mod state;

#[cfg(test)]
pub mod testing;
