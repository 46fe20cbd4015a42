//! Per-currency balance access.

use super::MockStore;
use crate::utils::BankError;

/// Balance for one currency; unknown codes read as zero.
pub async fn get_balance(store: &MockStore, currency: &str) -> f64 {
    let balances = store.balances.lock().await;
    balances.get(currency).copied().unwrap_or(0.0)
}

/// All balances, sorted by currency code.
pub async fn all_balances(store: &MockStore) -> Vec<(String, f64)> {
    let balances = store.balances.lock().await;
    balances.iter().map(|(c, b)| (c.clone(), *b)).collect()
}

/// Credit an amount, creating the balance entry on demand. Returns the new
/// balance.
pub async fn credit(store: &MockStore, currency: &str, amount: f64) -> f64 {
    let mut balances = store.balances.lock().await;
    let balance = balances.entry(currency.to_string()).or_insert(0.0);
    *balance += amount;
    *balance
}

/// Debit an amount. Fails without mutating anything when funds are short.
pub async fn debit(store: &MockStore, currency: &str, amount: f64) -> Result<f64, BankError> {
    let mut balances = store.balances.lock().await;
    let balance = balances.entry(currency.to_string()).or_insert(0.0);
    if *balance < amount {
        return Err(BankError::InsufficientBalance {
            currency: currency.to_string(),
            amount,
            available: *balance,
        });
    }
    *balance -= amount;
    Ok(*balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_balances() {
        let store = MockStore::for_tests();
        assert_eq!(get_balance(&store, "USD").await, 1500.44);
        assert_eq!(get_balance(&store, "CDF").await, 3000880.0);
        assert_eq!(get_balance(&store, "XYZ").await, 0.0);
    }

    #[tokio::test]
    async fn test_credit_and_debit_round_trip() {
        let store = MockStore::for_tests();
        let after_credit = credit(&store, "USD", 100.0).await;
        assert!((after_credit - 1600.44).abs() < 1e-9);

        let after_debit = debit(&store, "USD", 600.44).await.unwrap();
        assert!((after_debit - 1000.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_debit_beyond_funds_fails_without_mutating() {
        let store = MockStore::for_tests();
        let result = debit(&store, "USD", 2000.0).await;
        assert!(matches!(
            result,
            Err(BankError::InsufficientBalance { .. })
        ));
        assert_eq!(get_balance(&store, "USD").await, 1500.44);
    }

    #[tokio::test]
    async fn test_credit_creates_unknown_currency() {
        let store = MockStore::for_tests();
        assert_eq!(credit(&store, "XYZ", 25.0).await, 25.0);
        assert_eq!(get_balance(&store, "XYZ").await, 25.0);
    }
}
