//! Data models for Mbongo commands and services.
//!
//! This module holds the domain data shared across commands, services and
//! the mock store; operation result structs live next to the service that
//! produces them.

pub mod auth;
pub mod card;
pub mod currency;
pub mod receiver;
pub mod transaction;
pub mod user;

// Re-export commonly used types for convenience
pub use auth::{KycProgress, OtpChallenge, OtpPurpose, Session, SignupDetails};
pub use card::{Card, CardTransaction, CardTransactionKind};
pub use currency::CurrencyInfo;
pub use receiver::Receiver;
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
pub use user::{UserProfile, VerificationStatus};
