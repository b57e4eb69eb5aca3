//! Shared request extractors.

pub mod auth;

pub use auth::AuthUser;
