//! Balance reads. Reads are instant; only submissions pay the simulated
//! round trip.

use crate::store::{self, MockStore};

pub struct BalanceResult {
    pub currency: String,
    pub balance: f64,
}

pub async fn get_balance(store: &MockStore, currency: &str) -> BalanceResult {
    BalanceResult {
        currency: currency.to_string(),
        balance: store::account::get_balance(store, currency).await,
    }
}

pub async fn get_all_balances(store: &MockStore) -> Vec<BalanceResult> {
    store::account::all_balances(store)
        .await
        .into_iter()
        .map(|(currency, balance)| BalanceResult { currency, balance })
        .collect()
}
