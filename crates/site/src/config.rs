//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SYNC_API_URL` - Base URL of the shared remote document store
//!   (e.g., <https://kvdb.io/YourBucketId>)
//! - `LUMEN_ADMIN_ID` - Owner login identifier
//! - `LUMEN_ADMIN_PASSWORD` - Owner login password (shared static credential)
//!
//! ## Optional
//! - `LUMEN_HOST` - Bind address (default: 127.0.0.1)
//! - `LUMEN_PORT` - Listen port (default: 3000)
//! - `LUMEN_DATA_DIR` - Directory for the on-device store (default: ./data)
//! - `SYNC_DOCUMENT_KEY` - Key of the shared document within the remote
//!   store (default: data)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the on-device key/value store
    pub data_dir: PathBuf,
    /// Owner credential for the editor
    pub admin: AdminCredentials,
    /// Remote document store configuration
    pub sync: SyncConfig,
}

/// The owner's shared static credential.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    /// Login identifier
    pub id: String,
    /// Login password
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("id", &self.id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Remote document store configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Fully resolved URL of the shared document
    pub document_url: Url,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the admin password looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("LUMEN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUMEN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LUMEN_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUMEN_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("LUMEN_DATA_DIR", "./data"));

        let admin = AdminCredentials::from_env()?;
        let sync = SyncConfig::from_env()?;

        Ok(Self {
            host,
            port,
            data_dir,
            admin,
            sync,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AdminCredentials {
    fn from_env() -> Result<Self, ConfigError> {
        let id = get_required_env("LUMEN_ADMIN_ID")?;
        let password = get_required_env("LUMEN_ADMIN_PASSWORD")?;
        validate_not_placeholder(&password, "LUMEN_ADMIN_PASSWORD")?;

        Ok(Self {
            id,
            password: SecretString::from(password),
        })
    }
}

impl SyncConfig {
    /// Load just the remote store configuration from the environment.
    ///
    /// Used by the CLI, which needs the remote document but not the serving
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SYNC_API_URL` is missing or unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("SYNC_API_URL")?;
        let document_key = get_env_or_default("SYNC_DOCUMENT_KEY", "data");
        let document_url = resolve_document_url(&api_url, &document_key)?;

        Ok(Self { document_url })
    }
}

/// The configured on-device data directory (default: ./data).
#[must_use]
pub fn data_dir_from_env() -> PathBuf {
    let _ = dotenvy::dotenv();
    PathBuf::from(get_env_or_default("LUMEN_DATA_DIR", "./data"))
}

/// Join the remote store base URL and the document key.
fn resolve_document_url(api_url: &str, document_key: &str) -> Result<Url, ConfigError> {
    let joined = format!("{}/{}", api_url.trim_end_matches('/'), document_key);
    Url::parse(&joined)
        .map_err(|e| ConfigError::InvalidEnvVar("SYNC_API_URL".to_string(), e.to_string()))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reject secrets that are obviously placeholders left in a template.
fn validate_not_placeholder(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_placeholder_rejects_template_values() {
        assert!(validate_not_placeholder("your-password-here", "TEST_VAR").is_err());
        assert!(validate_not_placeholder("changeme123", "TEST_VAR").is_err());
        assert!(validate_not_placeholder("s3cure-Value-85565", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_resolve_document_url_joins_key() {
        let url = resolve_document_url("https://kvdb.io/Bucket123", "data").unwrap();
        assert_eq!(url.as_str(), "https://kvdb.io/Bucket123/data");

        // Trailing slash on the base URL is tolerated
        let url = resolve_document_url("https://kvdb.io/Bucket123/", "data").unwrap();
        assert_eq!(url.as_str(), "https://kvdb.io/Bucket123/data");
    }

    #[test]
    fn test_resolve_document_url_rejects_garbage() {
        assert!(resolve_document_url("not a url", "data").is_err());
    }

    #[test]
    fn test_admin_credentials_debug_redacts_password() {
        let creds = AdminCredentials {
            id: "Admin".to_string(),
            password: SecretString::from("super-secret-85565"),
        };

        let debug_output = format!("{creds:?}");
        assert!(debug_output.contains("Admin"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-85565"));
    }

    #[test]
    fn test_socket_addr() {
        let config = SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            data_dir: PathBuf::from("./data"),
            admin: AdminCredentials {
                id: "Admin".to_string(),
                password: SecretString::from("s3cure-Value-85565"),
            },
            sync: SyncConfig {
                document_url: Url::parse("https://kvdb.io/Bucket123/data").unwrap(),
            },
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
