use thiserror::Error;

/// Errors raised by services and the mock store.
///
/// Field-level input problems never reach this type: the command layer runs
/// the validators and reports their messages inline; only business-rule
/// failures become errors.
#[derive(Debug, Error)]
pub enum BankError {
    #[error(
        "Insufficient {currency} balance\nAmount: {amount:.2} {currency}\nAvailable: {available:.2} {currency}"
    )]
    InsufficientBalance {
        currency: String,
        amount: f64,
        available: f64,
    },

    #[error("Card {0} not found")]
    UnknownCard(String),

    #[error("The OTP code you entered is incorrect")]
    IncorrectOtp,

    #[error("Please wait {0} seconds before requesting a new code")]
    ResendCooldown(u64),

    #[error("Upload your identity document before taking the selfie")]
    KycOutOfOrder,

    #[error("Failed to load seed data: {0}")]
    Seed(String),

    #[error("Invalid seed data: {0}")]
    SeedParse(#[from] serde_json::Error),
}
