use crate::models::currency;
use crate::utils::Table;
use crate::AppState;

pub async fn execute(_state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    let mut table = Table::new(vec!["Code", "Name", "Symbol"]);
    for info in currency::supported() {
        table.add_row(vec![
            info.code.to_string(),
            info.name.to_string(),
            info.symbol.unwrap_or("-").to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
