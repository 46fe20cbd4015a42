//! Receiver directory entry for peer transfers.

use serde::{Deserialize, Serialize};

/// A contact money can be sent to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receiver {
    pub id: String,
    pub name: String,
    pub phone: String,
}
