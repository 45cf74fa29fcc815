//! Remote document commands.

use lumen_core::Document;
use lumen_site::config::SyncConfig;
use lumen_site::remote::{HttpRemoteStore, RemoteStore};

use super::CommandError;

/// Fetch and pretty-print the current remote document.
#[allow(clippy::print_stdout)]
pub async fn show() -> Result<(), CommandError> {
    let config = SyncConfig::from_env()?;
    let remote = HttpRemoteStore::new(&config);

    let value = remote.fetch().await?;
    let pretty = serde_json::to_string_pretty(&value)
        .unwrap_or_else(|_| value.to_string());
    println!("{pretty}");

    Ok(())
}

/// Replace the remote document with schema defaults.
///
/// Destructive: overwrites whatever the store currently holds, so it
/// requires `--force`.
pub async fn seed(force: bool) -> Result<(), CommandError> {
    if !force {
        return Err(CommandError::Rejected(
            "seed overwrites the remote document; re-run with --force".to_string(),
        ));
    }

    let config = SyncConfig::from_env()?;
    let remote = HttpRemoteStore::new(&config);

    remote.replace(&Document::default()).await?;
    tracing::info!("remote document replaced with schema defaults");

    Ok(())
}
