//! Payment card models.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTransactionKind {
    Purchase,
    Withdrawal,
    Refund,
}

impl CardTransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            CardTransactionKind::Purchase => "purchase",
            CardTransactionKind::Withdrawal => "withdrawal",
            CardTransactionKind::Refund => "refund",
        }
    }
}

/// One entry on a card statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTransaction {
    pub id: String,
    pub kind: CardTransactionKind,
    pub amount: f64,
    pub merchant: String,
    pub date: String,
    pub status: TransactionStatus,
}

/// A card attached to the account, statement included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub card_type: String,
    pub balance: f64,
    pub card_number: String,
    pub holder_name: String,
    pub expiry_date: String,
    pub cvv: String,
    pub is_active: bool,
    pub currency: String,
    pub limit: f64,
    pub spent: f64,
    pub transactions: Vec<CardTransaction>,
}
