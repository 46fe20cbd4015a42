//! Currency exchange processing.

use tracing::info;

use crate::models::{Transaction, TransactionKind, TransactionStatus};
use crate::rates;
use crate::store::{self, MockStore};
use crate::utils::BankError;

pub struct ExchangeResult {
    pub origin_amount: f64,
    pub origin_currency: String,
    pub destination_amount: f64,
    pub destination_currency: String,
    pub rate: f64,
    pub origin_balance: f64,
    pub destination_balance: f64,
    pub reference: String,
}

/// Convert `amount` of `from` into `to` at the table rate: debit the origin
/// balance, credit the destination with the converted amount, record the
/// activity.
pub async fn execute_exchange(
    store: &MockStore,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<ExchangeResult, BankError> {
    let rate = rates::exchange_rate(from, to);
    let converted = rates::convert(amount, from, to);

    store.simulate_latency().await;

    let origin_balance = store::account::debit(store, from, amount).await?;
    let destination_balance = store::account::credit(store, to, converted).await;

    let transaction = Transaction::record(
        TransactionKind::Exchange,
        amount,
        from,
        None,
        TransactionStatus::Completed,
        &format!("Échange {} → {}", from, to),
    );
    let reference = transaction.id.clone();
    store::transactions::record(store, transaction).await;

    info!(
        "exchanged {:.2} {} into {:.2} {} at {} (ref {})",
        amount, from, converted, to, rate, reference
    );

    Ok(ExchangeResult {
        origin_amount: amount,
        origin_currency: from.to_string(),
        destination_amount: converted,
        destination_currency: to.to_string(),
        rate,
        origin_balance,
        destination_balance,
        reference,
    })
}
