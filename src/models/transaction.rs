//! Account activity models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Send,
    Receive,
    Deposit,
    Withdraw,
    Exchange,
}

impl TransactionKind {
    /// Parse a history filter argument; `None` for unknown input.
    pub fn parse(arg: &str) -> Option<Self> {
        match arg.to_lowercase().as_str() {
            "send" => Some(TransactionKind::Send),
            "receive" => Some(TransactionKind::Receive),
            "deposit" => Some(TransactionKind::Deposit),
            "withdraw" => Some(TransactionKind::Withdraw),
            "exchange" => Some(TransactionKind::Exchange),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Send => "send",
            TransactionKind::Receive => "receive",
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
            TransactionKind::Exchange => "exchange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

/// One entry in the account activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    /// The other party, when there is one (sender or recipient name).
    pub counterparty: Option<String>,
    pub date: String,
    pub status: TransactionStatus,
    pub description: String,
}

impl Transaction {
    /// Build a freshly recorded entry with a uuid reference and a current
    /// timestamp.
    pub fn record(
        kind: TransactionKind,
        amount: f64,
        currency: &str,
        counterparty: Option<String>,
        status: TransactionStatus,
        description: &str,
    ) -> Self {
        Transaction {
            id: Uuid::new_v4().to_string(),
            kind,
            amount,
            currency: currency.to_string(),
            counterparty,
            date: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            status,
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(TransactionKind::parse("send"), Some(TransactionKind::Send));
        assert_eq!(
            TransactionKind::parse("EXCHANGE"),
            Some(TransactionKind::Exchange)
        );
        assert_eq!(TransactionKind::parse("everything"), None);
    }

    #[test]
    fn test_record_stamps_reference_and_date() {
        let tx = Transaction::record(
            TransactionKind::Deposit,
            500.0,
            "USD",
            None,
            TransactionStatus::Completed,
            "Dépôt sur compte",
        );
        assert_eq!(tx.currency, "USD");
        assert!(!tx.id.is_empty());
        assert!(!tx.date.is_empty());
    }
}
