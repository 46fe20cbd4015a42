use crate::services::balance_service;
use crate::utils::format::format_money;
use crate::utils::validation;
use crate::utils::Table;
use crate::AppState;

pub async fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if args.first() == Some(&"help") {
        println!("💰 Balance Command");
        println!("Check your balances");
        println!();
        println!("Usage: `balance [currency]` or `bal [currency]`");
        println!("Examples:");
        println!("  `balance`      (all balances)");
        println!("  `bal CDF`");
        return Ok(());
    }

    if let Some(code) = args.first() {
        let code = code.to_uppercase();
        let check = validation::validate_currency(&code);
        if !check.is_valid {
            return Err(check.message().to_string());
        }
        let result = balance_service::get_balance(&state.store, &code).await;
        println!("💰 {}", format_money(result.balance, &result.currency));
        return Ok(());
    }

    let mut table = Table::new(vec!["Currency", "Balance"]).right_align(1);
    for result in balance_service::get_all_balances(&state.store).await {
        table.add_row(vec![
            result.currency.clone(),
            format_money(result.balance, &result.currency),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
