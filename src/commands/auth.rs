use crate::models::{Session, SignupDetails};
use crate::services::auth_service::{self, AuthOutcome};
use crate::utils::validation;
use crate::AppState;

pub async fn execute_login(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if let Session::SignedIn(profile) = &state.session {
        return Err(format!(
            "Already signed in as {}. `logout` first.",
            profile.name
        ));
    }

    if args.is_empty() || args[0] == "help" {
        println!("🔑 Login Command");
        println!("Sign in with your phone number");
        println!();
        println!("Usage: `login <phone>`");
        println!("Example: `login +243123456789`");
        return Ok(());
    }

    let phone = args.join(" ");
    let check = validation::validate_phone_number(&phone);
    if !check.is_valid {
        return Err(check.message().to_string());
    }

    println!("Processing...");
    let challenge = auth_service::request_login_otp(&state.store, &phone)
        .await
        .map_err(|e| e.to_string())?;
    state.session = Session::AwaitingOtp(challenge);
    println!(
        "📲 A 6-digit code was sent to {}. Enter it with `otp <code>`.",
        phone
    );
    Ok(())
}

pub async fn execute_signup(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if let Session::SignedIn(profile) = &state.session {
        return Err(format!(
            "Already signed in as {}. `logout` first.",
            profile.name
        ));
    }

    if args.len() < 4 || args[0] == "help" {
        println!("📝 Signup Command");
        println!("Create an account");
        println!();
        println!("Usage: `signup <first-name> <last-name> <phone> <email>`");
        println!("Example: `signup Amina Kalenga +243970000001 amina@example.com`");
        return Ok(());
    }

    let details = SignupDetails {
        first_name: args[0].to_string(),
        last_name: args[1].to_string(),
        phone: args[2].to_string(),
        email: args[3].to_string(),
    };

    let phone_check = validation::validate_phone_number(&details.phone);
    if !phone_check.is_valid {
        return Err(phone_check.message().to_string());
    }
    let email_check = validation::validate_email(&details.email);
    if !email_check.is_valid {
        return Err(email_check.message().to_string());
    }

    println!("Processing...");
    let phone = details.phone.clone();
    let challenge = auth_service::request_signup_otp(&state.store, details)
        .await
        .map_err(|e| e.to_string())?;
    state.session = Session::AwaitingOtp(challenge);
    println!(
        "📲 A 6-digit code was sent to {}. Enter it with `otp <code>`.",
        phone
    );
    Ok(())
}

pub async fn execute_otp(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    let code = match args.first() {
        Some(c) => *c,
        None => return Err("Usage: `otp <code>`".to_string()),
    };

    let check = validation::validate_otp(code);
    if !check.is_valid {
        return Err(check.message().to_string());
    }

    let challenge = match &state.session {
        Session::AwaitingOtp(challenge) => challenge.clone(),
        _ => {
            return Err(
                "No code is pending. Start with `login <phone>` or `signup`.".to_string(),
            )
        }
    };

    println!("Verifying...");
    match auth_service::verify_otp(&state.store, &challenge, code.trim()).await {
        Ok(AuthOutcome::SignedIn(profile)) => {
            println!("✅ Bienvenue, {} 👋", profile.name);
            state.session = Session::SignedIn(profile);
            Ok(())
        }
        Ok(AuthOutcome::KycRequired(kyc)) => {
            println!("✅ Code verified. Two steps left: `upload-id`, then `selfie`.");
            state.session = Session::AwaitingKyc(kyc);
            Ok(())
        }
        // The challenge stays pending so the user can retry or resend.
        Err(e) => Err(e.to_string()),
    }
}

pub async fn execute_resend(state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    let challenge = match &state.session {
        Session::AwaitingOtp(challenge) => challenge.clone(),
        _ => return Err("No code is pending.".to_string()),
    };

    match auth_service::resend_otp(&state.store, &challenge).await {
        Ok(reissued) => {
            println!("📲 A new code was sent to {}.", reissued.phone);
            state.session = Session::AwaitingOtp(reissued);
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

pub async fn execute_upload_id(state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    let mut kyc = match &state.session {
        Session::AwaitingKyc(kyc) => kyc.clone(),
        _ => return Err("No onboarding in progress. Start with `signup`.".to_string()),
    };

    if kyc.id_uploaded {
        println!("Document already uploaded. Next: `selfie`.");
        return Ok(());
    }

    println!("Uploading...");
    auth_service::upload_identity_document(&state.store, &mut kyc)
        .await
        .map_err(|e| e.to_string())?;
    state.session = Session::AwaitingKyc(kyc);
    println!("🪪 Identity document uploaded. Next: `selfie`.");
    Ok(())
}

pub async fn execute_selfie(state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    let kyc = match &state.session {
        Session::AwaitingKyc(kyc) => kyc.clone(),
        _ => return Err("No onboarding in progress. Start with `signup`.".to_string()),
    };

    println!("Processing...");
    match auth_service::capture_selfie(&state.store, &kyc).await {
        Ok(profile) => {
            println!(
                "🎉 Bienvenue, {} 👋 Account {} created; verification is pending review.",
                profile.name, profile.account_number
            );
            state.session = Session::SignedIn(profile);
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

pub async fn execute_logout(state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    let name = match &state.session {
        Session::SignedIn(profile) => Some(profile.name.clone()),
        _ => None,
    };

    match name {
        Some(name) => {
            state.session = Session::SignedOut;
            // Screen state does not survive the session.
            state.exchange_form.reset();
            println!("👋 À bientôt, {}. You are signed out.", name);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
