use crate::store;
use crate::utils::format::initials;
use crate::utils::Table;
use crate::AppState;

pub async fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    let query = args.join(" ");
    let hits = store::receivers::search(&state.store, &query);

    if hits.is_empty() {
        println!("No contact matches '{}'.", query);
        return Ok(());
    }

    let mut table = Table::new(vec!["Id", "", "Name", "Phone"]);
    for receiver in hits {
        table.add_row(vec![
            receiver.id.clone(),
            initials(&receiver.name),
            receiver.name.clone(),
            receiver.phone.clone(),
        ]);
    }
    println!("{}", table.render());
    println!("Send with `send <id> <amount> [currency]`.");
    Ok(())
}
