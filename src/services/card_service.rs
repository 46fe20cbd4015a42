//! Card management.

use tracing::info;

use crate::models::Card;
use crate::store::{self, MockStore};
use crate::utils::BankError;

pub async fn list_cards(store: &MockStore) -> Vec<Card> {
    store::cards::list(store).await
}

pub async fn get_card(store: &MockStore, id: &str) -> Result<Card, BankError> {
    store::cards::get(store, id)
        .await
        .ok_or_else(|| BankError::UnknownCard(id.to_string()))
}

/// Freeze or unfreeze a card. Goes through the simulated round trip like
/// any other submission.
pub async fn set_card_active(
    store: &MockStore,
    id: &str,
    active: bool,
) -> Result<Card, BankError> {
    store.simulate_latency().await;
    let card = store::cards::set_active(store, id, active).await?;
    info!(
        "card {} {}",
        card.id,
        if active { "unfrozen" } else { "frozen" }
    );
    Ok(card)
}
