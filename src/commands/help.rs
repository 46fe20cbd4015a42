use crate::AppState;

pub async fn execute(_state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    println!("🏦 Mbongo - mock mobile money sandbox");
    println!();
    println!("Money:");
    println!("  balance [ccy]                 Check balances (`bal`)");
    println!("  deposit <amount> [ccy]        Add money");
    println!("  withdraw <amount> [ccy]       Take money out (`wd`)");
    println!("  exchange [subcommand]         Convert currencies (`fx`), see `exchange help`");
    println!("  send <id> <amount> [ccy]      Transfer to a contact (`transfer`)");
    println!("  receivers [query]             Search the contact directory (`contacts`)");
    println!("  transactions [filter]         Account activity (`tx`)");
    println!("  currencies                    Supported currencies");
    println!();
    println!("Cards:");
    println!("  cards                         List your cards");
    println!("  card <id> [reveal|freeze|unfreeze]");
    println!();
    println!("Account:");
    println!("  login <phone> / signup / otp <code> / resend-otp");
    println!("  upload-id / selfie            Onboarding steps after signup");
    println!("  profile                       Account details (`me`)");
    println!("  logout");
    println!();
    println!("  status / help / quit");
    println!();
    println!("All calls are simulated; nothing leaves this process.");
    Ok(())
}
