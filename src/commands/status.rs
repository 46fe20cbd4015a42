use crate::models::Session;
use crate::AppState;

pub async fn execute(state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    let session = match &state.session {
        Session::SignedOut => "signed out".to_string(),
        Session::AwaitingOtp(challenge) => format!("waiting for OTP ({})", challenge.phone),
        Session::AwaitingKyc(_) => "onboarding (identity verification)".to_string(),
        Session::SignedIn(profile) => format!("signed in as {}", profile.name),
    };

    println!("🏦 Mbongo sandbox");
    println!("   Uptime:  {}s", state.started.elapsed().as_secs());
    println!(
        "   Latency: {} ms simulated round trip",
        state.store.latency().as_millis()
    );
    println!("   Session: {}", session);
    Ok(())
}
