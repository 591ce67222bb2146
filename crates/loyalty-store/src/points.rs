//! Loyalty points balance of a customer.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::store::KeyValueStore;
use crate::Result;

/// Balance of a customer who has never earned or spent points.
pub const DEFAULT_POINTS: u64 = 850;

/// Store key of a user's balance.
pub fn points_key(user_id: &str) -> String {
    format!("user_points_{}", user_id)
}

/// Loyalty points balance, persisted per user.
///
/// Without a user the balance lives in memory only.
pub struct LoyaltyPoints {
    store: Arc<dyn KeyValueStore>,
    user_id: Option<String>,
    points: u64,
}

impl LoyaltyPoints {
    /// Load the balance of `user_id`, defaulting to [`DEFAULT_POINTS`].
    ///
    /// The default is not written back; the key is created by the first
    /// mutation. A stored value that is not a non-negative integer is
    /// treated as missing.
    pub async fn load(store: Arc<dyn KeyValueStore>, user_id: Option<&str>) -> Result<Self> {
        let points = match user_id {
            Some(user_id) => read_points(store.as_ref(), user_id).await?,
            None => DEFAULT_POINTS,
        };

        Ok(Self {
            store,
            user_id: user_id.map(str::to_string),
            points,
        })
    }

    /// Current balance.
    pub fn points(&self) -> u64 {
        self.points
    }

    /// The user this balance belongs to.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Replace the balance.
    pub async fn set(&mut self, value: u64) -> Result<u64> {
        if let Some(user_id) = &self.user_id {
            self.store
                .set(&points_key(user_id), &value.to_string())
                .await?;
            debug!(user_id = %user_id, points = value, "Saved loyalty points");
        }
        self.points = value;
        Ok(value)
    }

    /// Add earned points.
    pub async fn add(&mut self, delta: u64) -> Result<u64> {
        self.set(self.points.saturating_add(delta)).await
    }

    /// Spend points. The balance never drops below zero.
    pub async fn deduct(&mut self, delta: u64) -> Result<u64> {
        self.set(self.points.saturating_sub(delta)).await
    }
}

impl std::fmt::Debug for LoyaltyPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoyaltyPoints")
            .field("user_id", &self.user_id)
            .field("points", &self.points)
            .finish()
    }
}

async fn read_points(store: &dyn KeyValueStore, user_id: &str) -> Result<u64> {
    let key = points_key(user_id);
    let Some(raw) = store.get(&key).await? else {
        return Ok(DEFAULT_POINTS);
    };

    match raw.trim().parse::<u64>() {
        Ok(points) => Ok(points),
        Err(e) => {
            warn!(key = %key, value = %raw, "Ignoring unreadable points value: {}", e);
            Ok(DEFAULT_POINTS)
        }
    }
}
