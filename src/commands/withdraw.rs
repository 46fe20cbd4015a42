use crate::services::withdraw_service;
use crate::utils::format::format_money;
use crate::utils::validation;
use crate::AppState;

pub async fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if args.is_empty() || args[0] == "help" {
        println!("🏧 Withdraw Command");
        println!("Take money out of a balance");
        println!();
        println!("Usage: `withdraw <amount> [currency]` or `wd <amount> [currency]`");
        println!("Examples:");
        println!("  `withdraw 100`      (defaults to USD)");
        println!("  `wd 5000 CDF`");
        return Ok(());
    }

    let amount_raw = args[0];
    let currency = args
        .get(1)
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| "USD".to_string());

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
    match withdraw_service::execute_withdraw(&state.store, amount, &currency).await {
        Ok(result) => {
            println!("✅ Withdrawal confirmed");
            println!("   Amount:      {}", format_money(result.amount, &result.currency));
            println!(
                "   New balance: {}",
                format_money(result.new_balance, &result.currency)
            );
            println!("   Reference:   {}", result.reference);
            Ok(())
        }
        Err(e) => Err(format!("Withdrawal failed: {}", e)),
    }
}
