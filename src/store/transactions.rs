//! Account activity feed access.

use super::MockStore;
use crate::models::{Transaction, TransactionKind};

/// Record a new entry at the head of the feed (newest first).
pub async fn record(store: &MockStore, transaction: Transaction) {
    let mut transactions = store.transactions.lock().await;
    transactions.insert(0, transaction);
}

/// List the feed, optionally restricted to one kind.
pub async fn list(store: &MockStore, filter: Option<TransactionKind>) -> Vec<Transaction> {
    let transactions = store.transactions.lock().await;
    transactions
        .iter()
        .filter(|t| filter.map_or(true, |kind| t.kind == kind))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionStatus;

    #[tokio::test]
    async fn test_seeded_feed() {
        let store = MockStore::for_tests();
        let feed = list(&store, None).await;
        assert_eq!(feed.len(), 6);
        assert_eq!(feed[0].counterparty.as_deref(), Some("Marie Dubois"));
    }

    #[tokio::test]
    async fn test_filter_by_kind() {
        let store = MockStore::for_tests();
        let sends = list(&store, Some(TransactionKind::Send)).await;
        assert_eq!(sends.len(), 2);
        assert!(sends.iter().all(|t| t.kind == TransactionKind::Send));
    }

    #[tokio::test]
    async fn test_record_prepends() {
        let store = MockStore::for_tests();
        record(
            &store,
            Transaction::record(
                TransactionKind::Deposit,
                42.0,
                "USD",
                None,
                TransactionStatus::Completed,
                "Dépôt sur compte",
            ),
        )
        .await;

        let feed = list(&store, None).await;
        assert_eq!(feed.len(), 7);
        assert_eq!(feed[0].amount, 42.0);
    }
}
