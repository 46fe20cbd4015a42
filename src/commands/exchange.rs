use crate::services::exchange_service;
use crate::utils::format::format_money;
use crate::utils::validation;
use crate::AppState;

pub async fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if args.is_empty() {
        render_form(state);
        return Ok(());
    }

    match args[0] {
        "help" => {
            println!("💱 Exchange Command");
            println!("Convert between currencies. The form keeps both sides in sync:");
            println!("edit one amount and the other is derived from the rate table.");
            println!();
            println!("Usage:");
            println!("  `exchange`                    (show the form)");
            println!("  `exchange from <amount>`      (edit the origin amount)");
            println!("  `exchange to <amount>`        (edit the destination amount)");
            println!("  `exchange from-currency <ccy>`");
            println!("  `exchange to-currency <ccy>`");
            println!("  `exchange confirm`");
            println!("  `exchange cancel`");
            Ok(())
        }
        "from" => {
            let raw = args[1..].join("");
            state.exchange_form.edit_origin_amount(&raw);
            render_form(state);
            Ok(())
        }
        "to" => {
            let raw = args[1..].join("");
            state.exchange_form.edit_destination_amount(&raw);
            render_form(state);
            Ok(())
        }
        "from-currency" => {
            let code = args
                .get(1)
                .ok_or_else(|| "Usage: `exchange from-currency <ccy>`".to_string())?;
            let check = validation::validate_currency(code);
            if !check.is_valid {
                return Err(check.message().to_string());
            }
            state.exchange_form.set_origin_currency(code);
            render_form(state);
            Ok(())
        }
        "to-currency" => {
            let code = args
                .get(1)
                .ok_or_else(|| "Usage: `exchange to-currency <ccy>`".to_string())?;
            let check = validation::validate_currency(code);
            if !check.is_valid {
                return Err(check.message().to_string());
            }
            state.exchange_form.set_destination_currency(code);
            render_form(state);
            Ok(())
        }
        "confirm" => confirm(state).await,
        "cancel" => {
            state.exchange_form.reset();
            println!("Exchange cancelled.");
            Ok(())
        }
        other => Err(format!(
            "Unknown exchange subcommand '{}'. Try `exchange help`.",
            other
        )),
    }
}

async fn confirm(state: &mut AppState) -> Result<(), String> {
    let form = &state.exchange_form;

    let amount_check = validation::validate_amount(form.origin_amount());
    if !amount_check.is_valid {
        return Err(amount_check.message().to_string());
    }

    let pair_check =
        validation::validate_currency_exchange(form.origin_currency(), form.destination_currency());
    if !pair_check.is_valid {
        return Err(pair_check.message().to_string());
    }

    let amount: f64 = form
        .origin_amount()
        .parse()
        .map_err(|_| "Please enter a valid number".to_string())?;
    let from = form.origin_currency().to_string();
    let to = form.destination_currency().to_string();

    println!("Processing...");
    match exchange_service::execute_exchange(&state.store, amount, &from, &to).await {
        Ok(result) => {
            println!("✅ Exchange confirmed");
            println!(
                "   Converted:   {} → {}",
                format_money(result.origin_amount, &result.origin_currency),
                format_money(result.destination_amount, &result.destination_currency)
            );
            println!(
                "   Rate:        1 {} = {:.4} {}",
                result.origin_currency, result.rate, result.destination_currency
            );
            println!(
                "   Balances:    {} | {}",
                format_money(result.origin_balance, &result.origin_currency),
                format_money(result.destination_balance, &result.destination_currency)
            );
            println!("   Reference:   {}", result.reference);
            state.exchange_form.reset();
            Ok(())
        }
        Err(e) => Err(format!("Exchange failed: {}", e)),
    }
}

fn render_form(state: &AppState) {
    let form = &state.exchange_form;
    let origin = if form.origin_amount().is_empty() {
        "0.00"
    } else {
        form.origin_amount()
    };
    let destination = if form.destination_amount().is_empty() {
        "0.00"
    } else {
        form.destination_amount()
    };

    println!("💱 Exchange - convert between currencies");
    println!("   From: {:>14} {}", origin, form.origin_currency());
    println!(
        "    ⇅   1 {} = {:.4} {}",
        form.origin_currency(),
        form.rate(),
        form.destination_currency()
    );
    println!("   To:   {:>14} {}", destination, form.destination_currency());
    println!("Confirm with `exchange confirm`, abort with `exchange cancel`.");
}
