//! Errors raised by the collaborator adapters.
//!
//! The navbar itself cannot fail; only building a message catalog or parsing
//! a locale tag can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavbarError {
    #[error("invalid message catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
    #[error("message catalog has no `{0}` namespace")]
    MissingNamespace(String),
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
}

pub type Result<T, E = NavbarError> = core::result::Result<T, E>;
