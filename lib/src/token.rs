//! Storage of the session token returned by the server on login.
//!
//! The token is an opaque string, stored under the [`TOKEN_KEY`] key. The store
//! doesn't validate it and doesn't contact the server, so [`TokenStore::is_logged_in`]
//! can't tell whether the token has expired or has been revoked.

use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::Error;

/// The key under which the session token is stored.
pub const TOKEN_KEY: &str = "token";

/// Single point of access to the persisted session token.
pub trait TokenStore: Send + Sync {
    /// Stores the token, replacing any previous value.
    fn save_token(&self, token: &str) -> crate::Result<()>;

    /// Returns the stored token, `None` if there is none.
    fn get_token(&self) -> Option<String>;

    /// Removes the stored token. Removing an absent token is a no-op.
    fn clear_token(&self) -> crate::Result<()>;

    /// Whether a non empty token is stored.
    fn is_logged_in(&self) -> bool {
        self.get_token().map_or(false, |token| !token.is_empty())
    }
}

/// Keeps the token in memory, for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: Mutex<HashMap<&'static str, String>>,
}

impl MemoryTokenStore {
    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<&'static str, String>> {
        // a poisoned lock still holds a consistent map
        self.values.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn save_token(&self, token: &str) -> crate::Result<()> {
        self.values().insert(TOKEN_KEY, token.to_string());
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        self.values().get(TOKEN_KEY).cloned()
    }

    fn clear_token(&self) -> crate::Result<()> {
        self.values().remove(TOKEN_KEY);
        Ok(())
    }
}

/// Persists the token in a JSON file, as a `{"token": "..."}` object.
///
/// Other keys present in the file are preserved.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> crate::Result<serde_json::Map<String, serde_json::Value>> {
        match std::fs::read(&self.path) {
            Ok(content) if content.is_empty() => Ok(Default::default()),
            Ok(content) => Ok(serde_json::from_slice(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(Error::TokenStore(err)),
        }
    }

    fn write(&self, values: &serde_json::Map<String, serde_json::Value>) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(Error::TokenStore)?;
            }
        }
        let content = serde_json::to_vec_pretty(values)?;
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // only readable by the owner of the session
        #[cfg(unix)]
        std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o600);
        let mut file = options.open(&self.path).map_err(Error::TokenStore)?;
        file.write_all(&content).map_err(Error::TokenStore)
    }
}

impl TokenStore for FileTokenStore {
    #[tracing::instrument(skip_all, fields(path = ?self.path))]
    fn save_token(&self, token: &str) -> crate::Result<()> {
        let mut values = self.read()?;
        values.insert(TOKEN_KEY.to_string(), token.into());
        self.write(&values)
    }

    fn get_token(&self) -> Option<String> {
        match self.read() {
            Ok(mut values) => match values.remove(TOKEN_KEY) {
                Some(serde_json::Value::String(token)) => Some(token),
                _ => None,
            },
            Err(err) => {
                tracing::warn!(message = "unable to read token storage", path = ?self.path, cause = %err);
                None
            }
        }
    }

    #[tracing::instrument(skip_all, fields(path = ?self.path))]
    fn clear_token(&self) -> crate::Result<()> {
        let mut values = match self.read() {
            Ok(values) => values,
            // unreadable content can't hold a usable token
            Err(Error::SerdeJson(_)) => Default::default(),
            Err(err) => return Err(err),
        };
        if values.remove(TOKEN_KEY).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::{FileTokenStore, MemoryTokenStore, TokenStore};

    fn check_lifecycle(store: &dyn TokenStore) {
        assert!(!store.is_logged_in());
        assert_eq!(store.get_token(), None);

        store.save_token("first").unwrap();
        assert!(store.is_logged_in());
        assert_eq!(store.get_token().as_deref(), Some("first"));

        store.save_token("second").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("second"));

        store.clear_token().unwrap();
        assert!(!store.is_logged_in());
        assert_eq!(store.get_token(), None);

        store.clear_token().unwrap();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn memory_lifecycle() {
        check_lifecycle(&MemoryTokenStore::default());
    }

    #[test]
    fn file_lifecycle() {
        let root = temp_dir::TempDir::new().unwrap();
        check_lifecycle(&FileTokenStore::new(root.child("nested/session.json")));
    }

    #[test]
    fn empty_token_is_not_logged_in() {
        let store = MemoryTokenStore::default();
        store.save_token("").unwrap();
        assert_eq!(store.get_token().as_deref(), Some(""));
        assert!(!store.is_logged_in());
    }

    #[test]
    fn file_is_shared_between_instances() {
        let root = temp_dir::TempDir::new().unwrap();
        let path = root.child("session.json");
        FileTokenStore::new(&path).save_token("abc").unwrap();
        assert_eq!(
            FileTokenStore::new(&path).get_token().as_deref(),
            Some("abc")
        );
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({ "token": "abc" }));
    }

    #[cfg(unix)]
    #[test]
    fn file_is_private_to_owner() {
        use std::os::unix::fs::PermissionsExt;

        let root = temp_dir::TempDir::new().unwrap();
        let path = root.child("session.json");
        FileTokenStore::new(&path).save_token("abc").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn file_keeps_other_keys() {
        let root = temp_dir::TempDir::new().unwrap();
        let path = root.child("session.json");
        std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();
        let store = FileTokenStore::new(&path);
        store.save_token("abc").unwrap();
        store.clear_token().unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({ "theme": "dark" }));
    }

    #[test]
    fn clearing_missing_file_creates_nothing() {
        let root = temp_dir::TempDir::new().unwrap();
        let path = root.child("session.json");
        FileTokenStore::new(&path).clear_token().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn corrupted_file_is_not_logged_in() {
        let root = temp_dir::TempDir::new().unwrap();
        let path = root.child("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileTokenStore::new(&path);
        assert!(!store.is_logged_in());
        store.clear_token().unwrap();
        store.save_token("abc").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("abc"));
    }
}
