use crate::models::TransactionKind;
use crate::store;
use crate::utils::format::format_money;
use crate::utils::Table;
use crate::AppState;

pub async fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    let filter = match args.first() {
        None => None,
        Some(&"all") => None,
        Some(&"help") => {
            println!("📋 Transactions Command");
            println!("View your account activity");
            println!();
            println!("Usage: `transactions [filter]` or `tx [filter]`");
            println!("Filters: all, send, receive, deposit, withdraw, exchange");
            return Ok(());
        }
        Some(arg) => match TransactionKind::parse(arg) {
            Some(kind) => Some(kind),
            None => {
                return Err(format!(
                    "Unknown filter '{}'. Filters: all, send, receive, deposit, withdraw, exchange",
                    arg
                ))
            }
        },
    };

    let feed = store::transactions::list(&state.store, filter).await;
    if feed.is_empty() {
        println!("No transactions found");
        return Ok(());
    }

    let mut table = Table::new(vec!["Date", "Type", "Amount", "Status", "Description"])
        .right_align(2);
    for tx in &feed {
        let description = match &tx.counterparty {
            Some(name) => format!("{} - {}", tx.description, name),
            None => tx.description.clone(),
        };
        table.add_row(vec![
            tx.date.clone(),
            tx.kind.label().to_string(),
            format_money(tx.amount, &tx.currency),
            tx.status.label().to_string(),
            description,
        ]);
    }
    println!("{}", table.render());
    println!("{} transaction(s)", feed.len());
    Ok(())
}
