use crate::models::Session;
use crate::AppState;

pub async fn execute(state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    let profile = match &state.session {
        Session::SignedIn(profile) => profile.clone(),
        _ => return Err("Please sign in first.".to_string()),
    };

    println!(
        "👤 {}  [{}]",
        profile.name,
        profile.verification_status.label()
    );
    println!();
    println!("Informations du compte");
    println!("   Téléphone:         {}", profile.phone);
    println!("   Email:             {}", profile.email);
    if !profile.address.is_empty() {
        println!("   Adresse:           {}", profile.address);
    }
    if !profile.date_of_birth.is_empty() {
        println!("   Date de naissance: {}", profile.date_of_birth);
    }
    if !profile.nationality.is_empty() {
        println!("   Nationalité:       {}", profile.nationality);
    }
    println!();
    println!("Détails du compte");
    println!("   Numéro de compte:  {}", profile.account_number);
    println!("   Membre depuis:     {}", profile.member_since);
    Ok(())
}
