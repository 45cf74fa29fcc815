//! CLI command implementations.

pub mod cache;
pub mod document;

use thiserror::Error;

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] lumen_site::config::ConfigError),

    /// The remote document store refused or failed the operation.
    #[error("remote store error: {0}")]
    Remote(#[from] lumen_site::remote::RemoteStoreError),

    /// The on-device store could not be modified.
    #[error("storage error: {0}")]
    Store(#[from] lumen_site::store::StoreError),

    /// The command refused to run without explicit confirmation.
    #[error("{0}")]
    Rejected(String),
}
