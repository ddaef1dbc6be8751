//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, CatalogSource)
//! and hosts the liveness endpoint.

pub mod health;
pub mod matrix;
pub mod sheets;
