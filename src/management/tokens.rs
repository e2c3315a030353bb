use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::Mutex;

use crate::types::TokenBundle;

/// Key under which the auth callback records the most recent exchange.
pub const LATEST_SESSION: &str = "latest";

/// Seconds before the real expiry at which a token is treated as expired.
const EXPIRY_MARGIN_SECS: i64 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredToken {
    pub bundle: TokenBundle,
    pub obtained_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn new(bundle: TokenBundle) -> Self {
        Self {
            bundle,
            obtained_at: Utc::now(),
        }
    }

    /// Saturates at the latest representable time for absurd lifetimes.
    pub fn expires_at(&self) -> DateTime<Utc> {
        let lifetime = i64::try_from(self.bundle.expires_in_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        self.obtained_at
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// True once the token is within the expiry margin.
    pub fn is_expired(&self) -> bool {
        let margin = TimeDelta::seconds(EXPIRY_MARGIN_SECS);
        let deadline = self
            .expires_at()
            .checked_sub_signed(margin)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Utc::now() >= deadline
    }
}

/// Key-value storage for tokens handed out by the gateway.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn put(&self, key: &str, token: StoredToken);
    async fn get(&self, key: &str) -> Option<StoredToken>;
    /// Removes and returns the entry.
    async fn take(&self, key: &str) -> Option<StoredToken>;
}

/// Process-local store. Contents are gone when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<String, StoredToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn put(&self, key: &str, token: StoredToken) {
        self.tokens.lock().await.insert(key.to_string(), token);
    }

    async fn get(&self, key: &str) -> Option<StoredToken> {
        self.tokens.lock().await.get(key).cloned()
    }

    async fn take(&self, key: &str) -> Option<StoredToken> {
        self.tokens.lock().await.remove(key)
    }
}
