use crate::services::deposit_service;
use crate::utils::format::format_money;
use crate::utils::validation;
use crate::AppState;

pub async fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if args.is_empty() || args[0] == "help" {
        println!("💵 Deposit Command");
        println!("Add money to a balance");
        println!();
        println!("Usage: `deposit <amount> [currency]`");
        println!("Examples:");
        println!("  `deposit 100`       (defaults to USD)");
        println!("  `deposit 50.25 CDF`");
        return Ok(());
    }

    let amount_raw = args[0];
    let currency = args
        .get(1)
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| "USD".to_string());

    // Field validation happens here; the service only owns balance effects.
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
    match deposit_service::execute_deposit(&state.store, amount, &currency).await {
        Ok(result) => {
            println!("✅ Deposit confirmed");
            println!("   Amount:      {}", format_money(result.amount, &result.currency));
            println!(
                "   New balance: {}",
                format_money(result.new_balance, &result.currency)
            );
            println!("   Reference:   {}", result.reference);
            Ok(())
        }
        Err(e) => Err(format!("Deposit failed: {}", e)),
    }
}
