//! Card access.

use super::MockStore;
use crate::models::Card;
use crate::utils::BankError;

pub async fn list(store: &MockStore) -> Vec<Card> {
    store.cards.lock().await.clone()
}

pub async fn get(store: &MockStore, id: &str) -> Option<Card> {
    store.cards.lock().await.iter().find(|c| c.id == id).cloned()
}

/// Flip the active flag (freeze / unfreeze). Returns the updated card.
pub async fn set_active(store: &MockStore, id: &str, active: bool) -> Result<Card, BankError> {
    let mut cards = store.cards.lock().await;
    let card = cards
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| BankError::UnknownCard(id.to_string()))?;
    card.is_active = active;
    Ok(card.clone())
}
