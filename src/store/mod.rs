//! In-memory mock data store.
//!
//! There is no server and no persistence: everything lives in maps seeded
//! from a JSON fixture and is gone on exit. Data access goes through free
//! functions per area (`account`, `receivers`, `cards`, `transactions`)
//! taking a `&MockStore` handle.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::{Card, Receiver, Transaction, UserProfile};
use crate::utils::BankError;

pub mod account;
pub mod cards;
pub mod receivers;
pub mod transactions;

const DEFAULT_SEED: &str = include_str!("../../seed/mock_data.json");
const DEFAULT_LATENCY_MS: u64 = 1500;

#[derive(Debug, Deserialize)]
struct SeedData {
    user: UserProfile,
    balances: BTreeMap<String, f64>,
    receivers: Vec<Receiver>,
    cards: Vec<Card>,
    transactions: Vec<Transaction>,
}

pub struct MockStore {
    latency: Duration,
    profile: UserProfile,
    balances: Mutex<BTreeMap<String, f64>>,
    receivers: Vec<Receiver>,
    cards: Mutex<Vec<Card>>,
    transactions: Mutex<Vec<Transaction>>,
}

/// Seed the store: the bundled fixture by default, `MBONGO_SEED_FILE` to
/// point somewhere else. `MBONGO_LATENCY_MS` tunes the simulated round trip.
pub fn init_store() -> Result<MockStore, BankError> {
    let raw = match std::env::var("MBONGO_SEED_FILE") {
        Ok(path) => std::fs::read_to_string(&path)
            .map_err(|e| BankError::Seed(format!("failed to read {}: {}", path, e)))?,
        Err(_) => DEFAULT_SEED.to_string(),
    };

    let latency_ms = std::env::var("MBONGO_LATENCY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LATENCY_MS);

    MockStore::from_json(&raw, Duration::from_millis(latency_ms))
}

impl MockStore {
    pub fn from_json(raw: &str, latency: Duration) -> Result<Self, BankError> {
        let seed: SeedData = serde_json::from_str(raw)?;
        Ok(MockStore {
            latency,
            profile: seed.user,
            balances: Mutex::new(seed.balances),
            receivers: seed.receivers,
            cards: Mutex::new(seed.cards),
            transactions: Mutex::new(seed.transactions),
        })
    }

    /// Fixture-seeded store with zero latency, for tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::from_json(DEFAULT_SEED, Duration::ZERO).expect("bundled seed data must parse")
    }

    /// The seeded account holder.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Pretend a network round trip happened.
    pub async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            debug!(
                "simulating network round trip ({} ms)",
                self.latency.as_millis()
            );
            tokio::time::sleep(self.latency).await;
        }
    }
}
