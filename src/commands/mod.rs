pub mod auth;
pub mod balance;
pub mod cards;
pub mod currencies;
pub mod deposit;
pub mod exchange;
pub mod help;
pub mod profile;
pub mod receivers;
pub mod send;
pub mod status;
pub mod transactions;
pub mod withdraw;

use tracing::error;

use crate::models::Session;
use crate::AppState;

/// Commands that work without a signed-in session.
fn is_open_command(command: &str) -> bool {
    matches!(
        command,
        "help" | "status" | "login" | "signup" | "otp" | "resend-otp" | "upload-id" | "selfie"
            | "logout"
    )
}

pub async fn handle_line(state: &mut AppState, line: &str) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return;
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    if !is_open_command(&command) && !matches!(state.session, Session::SignedIn(_)) {
        println!("🔒 Please sign in first (try `login <phone>` or `signup`).");
        return;
    }

    let result = match command.as_str() {
        "help" => help::execute(state, args).await,
        "status" => status::execute(state, args).await,
        "login" => auth::execute_login(state, args).await,
        "signup" => auth::execute_signup(state, args).await,
        "otp" => auth::execute_otp(state, args).await,
        "resend-otp" => auth::execute_resend(state, args).await,
        "upload-id" => auth::execute_upload_id(state, args).await,
        "selfie" => auth::execute_selfie(state, args).await,
        "logout" => auth::execute_logout(state, args).await,
        "profile" | "me" => profile::execute(state, args).await,
        "balance" | "bal" => balance::execute(state, args).await,
        "currencies" => currencies::execute(state, args).await,
        "deposit" => deposit::execute(state, args).await,
        "withdraw" | "wd" => withdraw::execute(state, args).await,
        "exchange" | "fx" => exchange::execute(state, args).await,
        "send" | "transfer" => send::execute(state, args).await,
        "receivers" | "contacts" => receivers::execute(state, args).await,
        "transactions" | "tx" => transactions::execute(state, args).await,
        "cards" => cards::execute_list(state, args).await,
        "card" => cards::execute_detail(state, args).await,
        _ => {
            println!("Unknown command '{}'. Type `help` for the list.", command);
            return;
        }
    };

    if let Err(e) = result {
        error!("command {} failed: {}", command, e);
        println!("❌ {}", e);
    }
}
