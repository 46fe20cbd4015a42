use std::io::Write;
use std::time::Instant;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod forms;
mod models;
mod rates;
mod services;
mod store;
mod utils;

use forms::ExchangeForm;
use models::Session;
use store::MockStore;

/// Everything a command can reach: the seeded store plus the interactive
/// state that belongs to the session rather than the data (auth state, the
/// open exchange form).
pub struct AppState {
    pub store: MockStore,
    pub session: Session,
    pub exchange_form: ExchangeForm,
    pub started: Instant,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("mbongo=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("🏦 Starting Mbongo sandbox...");
    info!("  __  __  ____    ___   _   _   ____    ___  ");
    info!(" |  \\/  || __ )  / _ \\ | \\ | | / ___|  / _ \\ ");
    info!(" | |\\/| ||  _ \\ | | | ||  \\| || |  _  | | | |");
    info!(" | |  | || |_) || |_| || |\\  || |_| | | |_| |");
    info!(" |_|  |_||____/  \\___/ |_| \\_| \\____|  \\___/ ");
    info!("  Mbongo v0.1.0 - Mock mobile money sandbox");
    info!("");

    info!("Seeding mock store...");
    let store = match store::init_store() {
        Ok(s) => {
            info!("Mock store seeded successfully");
            s
        }
        Err(e) => {
            error!("Failed to seed mock store: {}", e);
            return;
        }
    };

    // Boot straight into the seeded account; the auth flow stays reachable
    // through `logout`.
    let profile = store.profile().clone();
    let mut state = AppState {
        store,
        session: Session::SignedIn(profile.clone()),
        exchange_form: ExchangeForm::new(),
        started: Instant::now(),
    };

    println!("Bonjour, {} 👋", profile.name);
    println!("Type `help` for the command list, `quit` to exit.");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        match lines.next_line().await {
            Ok(Some(line)) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if matches!(trimmed, "quit" | "exit") {
                    println!("Au revoir 👋");
                    break;
                }
                commands::handle_line(&mut state, trimmed).await;
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }
}
