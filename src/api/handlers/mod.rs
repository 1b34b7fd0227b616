//! API request handlers.

/// Analysis workflow handler.
pub mod analyze;
/// Health probe handler.
pub mod health;
