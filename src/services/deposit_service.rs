//! Deposit processing.

use tracing::info;

use crate::models::{Transaction, TransactionKind, TransactionStatus};
use crate::store::{self, MockStore};
use crate::utils::BankError;

pub struct DepositResult {
    pub amount: f64,
    pub currency: String,
    pub new_balance: f64,
    pub reference: String,
}

/// Credit the account and record the activity. The amount is assumed
/// field-validated by the caller; this layer owns the balance effects.
pub async fn execute_deposit(
    store: &MockStore,
    amount: f64,
    currency: &str,
) -> Result<DepositResult, BankError> {
    store.simulate_latency().await;

    let new_balance = store::account::credit(store, currency, amount).await;

    let transaction = Transaction::record(
        TransactionKind::Deposit,
        amount,
        currency,
        None,
        TransactionStatus::Completed,
        "Dépôt sur compte",
    );
    let reference = transaction.id.clone();
    store::transactions::record(store, transaction).await;

    info!(
        "deposit of {:.2} {} confirmed (ref {})",
        amount, currency, reference
    );

    Ok(DepositResult {
        amount,
        currency: currency.to_string(),
        new_balance,
        reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deposit_credits_and_records() {
        let store = MockStore::for_tests();
        let result = execute_deposit(&store, 500.0, "USD").await.unwrap();

        assert_eq!(result.amount, 500.0);
        assert!((result.new_balance - 2000.44).abs() < 1e-9);
        assert!(!result.reference.is_empty());

        let feed = store::transactions::list(&store, Some(TransactionKind::Deposit)).await;
        assert_eq!(feed[0].id, result.reference);
        assert_eq!(feed[0].description, "Dépôt sur compte");
    }

    #[tokio::test]
    async fn test_deposit_to_new_currency_opens_balance() {
        let store = MockStore::for_tests();
        let result = execute_deposit(&store, 10.0, "EUR").await.unwrap();
        assert_eq!(result.new_balance, 10.0);
    }
}
