//! Account holder profile.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Unverified,
}

impl VerificationStatus {
    /// Display badge text.
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Vérifié",
            VerificationStatus::Pending => "En attente",
            VerificationStatus::Unverified => "Non vérifié",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub account_number: String,
    pub member_since: String,
    pub verification_status: VerificationStatus,
}
