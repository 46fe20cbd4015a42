use crate::services::send_service;
use crate::store;
use crate::utils::format::format_money;
use crate::utils::validation;
use crate::AppState;

pub async fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if args.len() < 2 || args[0] == "help" {
        println!("💸 Send Command");
        println!("Transfer money to a contact from the receiver directory");
        println!();
        println!("Usage: `send <receiver-id> <amount> [currency]`");
        println!("Examples:");
        println!("  `send 2 150`       (150 USD to Jane Smith)");
        println!("  `send 3 2500 CDF`");
        println!();
        println!("Find receiver ids with `receivers [query]`.");
        return Ok(());
    }

    let receiver_id = args[0];
    let amount_raw = args[1];
    let currency = args
        .get(2)
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| "USD".to_string());

    let receiver = match store::receivers::get(&state.store, receiver_id) {
        Some(r) => r.clone(),
        None => {
            return Err(format!(
                "Please select a receiver (no contact with id '{}'; try `receivers`)",
                receiver_id
            ))
        }
    };
    let receiver_check = validation::validate_receiver(Some(&receiver));
    if !receiver_check.is_valid {
        return Err(receiver_check.message().to_string());
    }

    let amount_check = validation::validate_amount(amount_raw);
    if !amount_check.is_valid {
        return Err(amount_check.message().to_string());
    }
    let currency_check = validation::validate_currency(&currency);
    if !currency_check.is_valid {
        return Err(currency_check.message().to_string());
    }

    let amount: f64 = amount_raw
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid number".to_string())?;

    println!("Processing...");
    match send_service::execute_send(&state.store, &receiver, amount, &currency).await {
        Ok(result) => {
            println!("✅ Transfer successful");
            println!(
                "   To:          {} ({})",
                result.receiver.name, result.receiver.phone
            );
            println!("   Amount:      {}", format_money(result.amount, &result.currency));
            println!(
                "   New balance: {}",
                format_money(result.new_balance, &result.currency)
            );
            println!("   Reference:   {}", result.reference);
            Ok(())
        }
        Err(e) => Err(format!("Transfer failed: {}", e)),
    }
}
