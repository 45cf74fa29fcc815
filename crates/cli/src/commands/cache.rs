//! On-device cache commands.

use lumen_site::config::data_dir_from_env;
use lumen_site::store::{FileStore, KeyValueStore, keys};

use super::CommandError;

/// Remove the cached document from the data directory.
///
/// Session flags are left untouched; the next site start reconciles from
/// the remote store (or schema defaults).
pub fn clear() -> Result<(), CommandError> {
    let data_dir = data_dir_from_env();
    let store = FileStore::new(&data_dir);

    store.remove(keys::DOCUMENT)?;
    tracing::info!(data_dir = %data_dir.display(), "cached document removed");

    Ok(())
}
