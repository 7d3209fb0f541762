use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Key/value store the client reads its session token from.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage.set_item(ACCESS_TOKEN_KEY, token);
        storage
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_lifecycle() {
        let storage = MemoryStorage::default();
        assert!(storage.get_item(ACCESS_TOKEN_KEY).is_none());

        storage.set_item(ACCESS_TOKEN_KEY, "abc");
        assert_eq!(storage.get_item(ACCESS_TOKEN_KEY).as_deref(), Some("abc"));

        storage.remove_item(ACCESS_TOKEN_KEY);
        assert!(storage.get_item(ACCESS_TOKEN_KEY).is_none());
    }
}
