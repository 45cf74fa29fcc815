//! Process-wide session and locale state.
//!
//! Two flags owned by this device: whether the owner is logged in, and the
//! selected display language. Both persist through the injected key/value
//! port, never synchronize remotely, and never expire. Mutations are
//! synchronous.

use std::sync::RwLock;

use lumen_core::Language;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config::AdminCredentials;
use crate::store::{KeyValueStore, keys};

/// The current session flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFlags {
    pub logged_in: bool,
    pub language: Language,
}

/// Session state over an injected persistence port.
pub struct SessionState<S> {
    store: S,
    admin: AdminCredentials,
    flags: RwLock<SessionFlags>,
}

impl<S: KeyValueStore> SessionState<S> {
    /// Build the state, restoring persisted flags. Missing or unreadable
    /// values fall back to defaults (logged out, English).
    pub fn load(store: S, admin: AdminCredentials) -> Self {
        let logged_in = read_flag(&store, keys::LOGGED_IN)
            .is_some_and(|raw| raw == "true");
        let language = read_flag(&store, keys::LANGUAGE)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        Self {
            store,
            admin,
            flags: RwLock::new(SessionFlags {
                logged_in,
                language,
            }),
        }
    }

    /// The current flags.
    #[must_use]
    pub fn flags(&self) -> SessionFlags {
        *self.flags.read().expect("session lock poisoned")
    }

    /// Attempt to log the owner in with the shared static credential.
    /// Returns whether the attempt succeeded.
    pub fn log_in(&self, id: &str, password: &str) -> bool {
        let ok = id == self.admin.id && password == self.admin.password.expose_secret();
        if ok {
            self.set_logged_in(true);
        } else {
            tracing::warn!("rejected login attempt");
        }
        ok
    }

    /// Log the owner out.
    pub fn log_out(&self) {
        self.set_logged_in(false);
    }

    /// Select the display language.
    pub fn set_language(&self, language: Language) {
        self.flags
            .write()
            .expect("session lock poisoned")
            .language = language;
        self.persist(keys::LANGUAGE, &language.to_string());
    }

    fn set_logged_in(&self, logged_in: bool) {
        self.flags
            .write()
            .expect("session lock poisoned")
            .logged_in = logged_in;
        self.persist(keys::LOGGED_IN, if logged_in { "true" } else { "false" });
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.write(key, value) {
            tracing::warn!(error = %e, key, "failed to persist session flag");
        }
    }
}

fn read_flag<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.read(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, key, "failed to read session flag");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use secrecy::SecretString;

    fn admin() -> AdminCredentials {
        AdminCredentials {
            id: "Admin".to_string(),
            password: SecretString::from("s3cure-Value-85565"),
        }
    }

    #[test]
    fn test_defaults_when_nothing_persisted() {
        let session = SessionState::load(MemoryStore::new(), admin());
        let flags = session.flags();
        assert!(!flags.logged_in);
        assert_eq!(flags.language, Language::En);
    }

    #[test]
    fn test_log_in_requires_exact_credential() {
        let session = SessionState::load(MemoryStore::new(), admin());

        assert!(!session.log_in("Admin", "wrong"));
        assert!(!session.flags().logged_in);

        assert!(!session.log_in("admin", "s3cure-Value-85565"));
        assert!(!session.flags().logged_in);

        assert!(session.log_in("Admin", "s3cure-Value-85565"));
        assert!(session.flags().logged_in);
    }

    #[test]
    fn test_flags_survive_a_state_rebuild() {
        let store = MemoryStore::new();

        let session = SessionState::load(store.clone(), admin());
        assert!(session.log_in("Admin", "s3cure-Value-85565"));
        session.set_language(Language::Bn);

        // A rebuild over the same store observes the persisted flags.
        let restored = SessionState::load(store, admin());
        let flags = restored.flags();
        assert!(flags.logged_in);
        assert_eq!(flags.language, Language::Bn);
    }

    #[test]
    fn test_log_out_persists() {
        let store = MemoryStore::new();
        let session = SessionState::load(store.clone(), admin());
        assert!(session.log_in("Admin", "s3cure-Value-85565"));
        session.log_out();

        let restored = SessionState::load(store, admin());
        assert!(!restored.flags().logged_in);
    }

    #[test]
    fn test_unparsable_language_falls_back_to_default() {
        let store = MemoryStore::new();
        store.write(keys::LANGUAGE, "klingon").unwrap();

        let session = SessionState::load(store, admin());
        assert_eq!(session.flags().language, Language::En);
    }
}
