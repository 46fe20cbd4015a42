//! Peer transfer processing.

use tracing::info;

use crate::models::{Receiver, Transaction, TransactionKind, TransactionStatus};
use crate::store::{self, MockStore};
use crate::utils::BankError;

pub struct SendResult {
    pub receiver: Receiver,
    pub amount: f64,
    pub currency: String,
    pub new_balance: f64,
    pub reference: String,
}

/// Transfer to a directory contact: debit the sender and record the
/// activity naming the receiver.
pub async fn execute_send(
    store: &MockStore,
    receiver: &Receiver,
    amount: f64,
    currency: &str,
) -> Result<SendResult, BankError> {
    store.simulate_latency().await;

    let new_balance = store::account::debit(store, currency, amount).await?;

    let transaction = Transaction::record(
        TransactionKind::Send,
        amount,
        currency,
        Some(receiver.name.clone()),
        TransactionStatus::Completed,
        "Envoi d'argent",
    );
    let reference = transaction.id.clone();
    store::transactions::record(store, transaction).await;

    info!(
        "sent {:.2} {} to {} (ref {})",
        amount, currency, receiver.name, reference
    );

    Ok(SendResult {
        receiver: receiver.clone(),
        amount,
        currency: currency.to_string(),
        new_balance,
        reference,
    })
}
