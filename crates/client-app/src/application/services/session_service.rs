//! Bearer token persistence
//!
//! The token is written by whatever login flow the deployment uses; this
//! service only reads it back into an [`AuthContext`] for authenticated calls.

use arena_client_ports::outbound::{storage_keys, AuthContext, StorageProvider};
use arena_domain::BearerToken;

/// Service for the locally stored credential
pub struct SessionService<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SessionService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Auth context for the stored token, anonymous when there is none.
    pub fn auth_context(&self) -> AuthContext {
        AuthContext::from_token(
            self.storage
                .load(storage_keys::AUTH_TOKEN)
                .and_then(BearerToken::new),
        )
    }

    pub fn has_token(&self) -> bool {
        self.auth_context().is_authenticated()
    }

    pub fn store_token(&self, token: &BearerToken) {
        self.storage.save(storage_keys::AUTH_TOKEN, token.as_str());
    }

    pub fn clear_token(&self) {
        self.storage.remove(storage_keys::AUTH_TOKEN);
    }
}

impl<S: StorageProvider + Clone> Clone for SessionService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    use arena_client_ports::outbound::MockStorageProvider;
    use mockall::predicate::*;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        data: Arc<RwLock<HashMap<String, String>>>,
    }

    impl StorageProvider for MemoryStorage {
        fn save(&self, key: &str, value: &str) {
            self.data
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn load(&self, key: &str) -> Option<String> {
            self.data.read().unwrap().get(key).cloned()
        }

        fn remove(&self, key: &str) {
            self.data.write().unwrap().remove(key);
        }
    }

    #[test]
    fn test_missing_token_is_anonymous() {
        let service = SessionService::new(MemoryStorage::default());
        assert!(!service.has_token());
        assert_eq!(service.auth_context().authorization_header(), None);
    }

    #[test]
    fn test_store_and_clear_token() {
        let storage = MemoryStorage::default();
        let service = SessionService::new(storage.clone());

        service.store_token(&BearerToken::new("abc").unwrap());
        assert_eq!(storage.load("jwtToken").as_deref(), Some("abc"));
        assert_eq!(
            service.auth_context().authorization_header().as_deref(),
            Some("Bearer abc")
        );

        service.clear_token();
        assert!(!service.has_token());
    }

    #[test]
    fn test_blank_stored_token_is_ignored() {
        let mut storage = MockStorageProvider::new();
        storage
            .expect_load()
            .with(eq("jwtToken"))
            .returning(|_| Some("   ".to_string()));

        let service = SessionService::new(storage);
        assert!(!service.auth_context().is_authenticated());
    }
}
