//! Withdrawal processing.

use tracing::info;

use crate::models::{Transaction, TransactionKind, TransactionStatus};
use crate::store::{self, MockStore};
use crate::utils::BankError;

pub struct WithdrawResult {
    pub amount: f64,
    pub currency: String,
    pub new_balance: f64,
    pub reference: String,
}

/// Debit the account and record the activity. Fails with the itemized
/// insufficient-balance error when funds are short, leaving state untouched.
pub async fn execute_withdraw(
    store: &MockStore,
    amount: f64,
    currency: &str,
) -> Result<WithdrawResult, BankError> {
    store.simulate_latency().await;

    let new_balance = store::account::debit(store, currency, amount).await?;

    let transaction = Transaction::record(
        TransactionKind::Withdraw,
        amount,
        currency,
        None,
        TransactionStatus::Completed,
        "Retrait d'argent",
    );
    let reference = transaction.id.clone();
    store::transactions::record(store, transaction).await;

    info!(
        "withdrawal of {:.2} {} confirmed (ref {})",
        amount, currency, reference
    );

    Ok(WithdrawResult {
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
    async fn test_withdraw_debits_and_records() {
        let store = MockStore::for_tests();
        let result = execute_withdraw(&store, 500.44, "USD").await.unwrap();
        assert!((result.new_balance - 1000.0).abs() < 1e-9);

        let feed = store::transactions::list(&store, Some(TransactionKind::Withdraw)).await;
        assert_eq!(feed[0].description, "Retrait d'argent");
    }

    #[tokio::test]
    async fn test_withdraw_beyond_funds_fails() {
        let store = MockStore::for_tests();
        let result = execute_withdraw(&store, 1.0, "EUR").await;
        assert!(matches!(
            result,
            Err(BankError::InsufficientBalance { .. })
        ));

        // Nothing was recorded for the failed attempt.
        let feed = store::transactions::list(&store, Some(TransactionKind::Withdraw)).await;
        assert_eq!(feed.len(), 1);
    }
}
