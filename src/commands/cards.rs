use crate::models::Card;
use crate::services::card_service;
use crate::utils::format::{format_money, mask_card_number};
use crate::utils::Table;
use crate::AppState;

pub async fn execute_list(state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    let cards = card_service::list_cards(&state.store).await;
    if cards.is_empty() {
        println!("No cards on this account");
        return Ok(());
    }

    let mut table = Table::new(vec!["Id", "Type", "Number", "Balance", "Status"]).right_align(3);
    for card in &cards {
        table.add_row(vec![
            card.id.clone(),
            card.card_type.clone(),
            mask_card_number(&card.card_number),
            format_money(card.balance, &card.currency),
            (if card.is_active { "active" } else { "frozen" }).to_string(),
        ]);
    }
    println!("{}", table.render());
    println!("Details with `card <id>`, full numbers with `card <id> reveal`.");
    Ok(())
}

pub async fn execute_detail(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if args.is_empty() || args[0] == "help" {
        println!("💳 Card Command");
        println!("Inspect and manage one card");
        println!();
        println!("Usage: `card <id> [reveal|freeze|unfreeze]`");
        return Ok(());
    }

    let id = args[0];
    match args.get(1).copied() {
        None => {
            let card = card_service::get_card(&state.store, id)
                .await
                .map_err(|e| e.to_string())?;
            render_card(&card, false);
            Ok(())
        }
        Some("reveal") => {
            let card = card_service::get_card(&state.store, id)
                .await
                .map_err(|e| e.to_string())?;
            render_card(&card, true);
            Ok(())
        }
        Some("freeze") => {
            println!("Processing...");
            let card = card_service::set_card_active(&state.store, id, false)
                .await
                .map_err(|e| e.to_string())?;
            println!("🧊 Card {} is now frozen", card.id);
            Ok(())
        }
        Some("unfreeze") => {
            println!("Processing...");
            let card = card_service::set_card_active(&state.store, id, true)
                .await
                .map_err(|e| e.to_string())?;
            println!("✅ Card {} is active again", card.id);
            Ok(())
        }
        Some(other) => Err(format!(
            "Unknown card subcommand '{}'. Try `card help`.",
            other
        )),
    }
}

fn render_card(card: &Card, reveal: bool) {
    let number = if reveal {
        card.card_number.clone()
    } else {
        mask_card_number(&card.card_number)
    };
    let cvv = if reveal { card.cvv.as_str() } else { "***" };

    println!("💳 {} card {}", card.card_type, card.id);
    println!("   Balance:  {}", format_money(card.balance, &card.currency));
    println!("   Number:   {}", number);
    println!("   Holder:   {}", card.holder_name);
    println!("   Expires:  {}", card.expiry_date);
    println!("   CVV:      {}", cvv);
    println!(
        "   Limit:    {}  (spent {})",
        format_money(card.limit, &card.currency),
        format_money(card.spent, &card.currency)
    );
    println!(
        "   Status:   {}",
        if card.is_active { "active" } else { "frozen" }
    );

    if card.transactions.is_empty() {
        return;
    }
    println!();
    let mut table = Table::new(vec!["Date", "Type", "Merchant", "Amount", "Status"]).right_align(3);
    for tx in &card.transactions {
        table.add_row(vec![
            tx.date.clone(),
            tx.kind.label().to_string(),
            tx.merchant.clone(),
            format_money(tx.amount, &card.currency),
            tx.status.label().to_string(),
        ]);
    }
    println!("{}", table.render());
}
