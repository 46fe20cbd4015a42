//! Mock authentication and onboarding.
//!
//! No real identity checks happen anywhere: one hardcoded OTP code
//! verifies, documents "upload" by waiting out the simulated round trip,
//! and the resulting profile is marked pending review.

use tracing::info;
use uuid::Uuid;

use crate::models::{
    KycProgress, OtpChallenge, OtpPurpose, SignupDetails, UserProfile, VerificationStatus,
};
use crate::store::MockStore;
use crate::utils::BankError;

/// The only code the mock verifier accepts.
pub const MOCK_OTP_CODE: &str = "123456";

/// Seconds before a new code may be requested.
const RESEND_COOLDOWN_SECS: u64 = 60;

/// What a verified OTP leads to.
pub enum AuthOutcome {
    SignedIn(UserProfile),
    KycRequired(KycProgress),
}

/// Dispatch a login code to an existing account's phone.
pub async fn request_login_otp(
    store: &MockStore,
    phone: &str,
) -> Result<OtpChallenge, BankError> {
    store.simulate_latency().await;
    info!("OTP dispatched to {} (login)", phone);
    Ok(OtpChallenge::new(phone, OtpPurpose::Login))
}

/// Dispatch a signup code; the collected details ride along on the
/// challenge until verification.
pub async fn request_signup_otp(
    store: &MockStore,
    details: SignupDetails,
) -> Result<OtpChallenge, BankError> {
    store.simulate_latency().await;
    info!("OTP dispatched to {} (signup)", details.phone);
    let phone = details.phone.clone();
    Ok(OtpChallenge::new(&phone, OtpPurpose::Signup(details)))
}

/// Check the code against the mock verifier. Login challenges sign straight
/// in with the seeded profile; signup challenges move on to KYC.
pub async fn verify_otp(
    store: &MockStore,
    challenge: &OtpChallenge,
    code: &str,
) -> Result<AuthOutcome, BankError> {
    store.simulate_latency().await;

    if code != MOCK_OTP_CODE {
        return Err(BankError::IncorrectOtp);
    }

    match &challenge.purpose {
        OtpPurpose::Login => {
            info!("login verified for {}", challenge.phone);
            Ok(AuthOutcome::SignedIn(store.profile().clone()))
        }
        OtpPurpose::Signup(details) => {
            info!("signup verified for {}", challenge.phone);
            Ok(AuthOutcome::KycRequired(KycProgress::new(details.clone())))
        }
    }
}

/// Reissue a challenge, refusing until the cooldown has elapsed.
pub async fn resend_otp(
    store: &MockStore,
    challenge: &OtpChallenge,
) -> Result<OtpChallenge, BankError> {
    let elapsed = challenge.sent_at.elapsed().as_secs();
    if elapsed < RESEND_COOLDOWN_SECS {
        return Err(BankError::ResendCooldown(RESEND_COOLDOWN_SECS - elapsed));
    }

    store.simulate_latency().await;
    info!("OTP re-dispatched to {}", challenge.phone);
    Ok(OtpChallenge::new(
        &challenge.phone,
        challenge.purpose.clone(),
    ))
}

/// First KYC step: identity document upload.
pub async fn upload_identity_document(
    store: &MockStore,
    kyc: &mut KycProgress,
) -> Result<(), BankError> {
    store.simulate_latency().await;
    kyc.id_uploaded = true;
    info!("identity document accepted for {}", kyc.details.phone);
    Ok(())
}

/// Second KYC step: selfie capture. Requires the document upload first and
/// completes onboarding with a pending-review profile.
pub async fn capture_selfie(
    store: &MockStore,
    kyc: &KycProgress,
) -> Result<UserProfile, BankError> {
    if !kyc.id_uploaded {
        return Err(BankError::KycOutOfOrder);
    }

    store.simulate_latency().await;
    let profile = build_profile(&kyc.details);
    info!(
        "onboarding complete for {} ({})",
        profile.name, profile.account_number
    );
    Ok(profile)
}

fn build_profile(details: &SignupDetails) -> UserProfile {
    use chrono::Datelike;

    let now = chrono::Local::now();
    let fragment = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
    UserProfile {
        name: format!("{} {}", details.first_name, details.last_name),
        email: details.email.clone(),
        phone: details.phone.clone(),
        address: String::new(),
        date_of_birth: String::new(),
        nationality: String::new(),
        account_number: format!("PL-{}-{}", now.year(), fragment),
        member_since: format!("{} {}", french_month(now.month()), now.year()),
        verification_status: VerificationStatus::Pending,
    }
}

fn french_month(month: u32) -> &'static str {
    match month {
        1 => "Janvier",
        2 => "Février",
        3 => "Mars",
        4 => "Avril",
        5 => "Mai",
        6 => "Juin",
        7 => "Juillet",
        8 => "Août",
        9 => "Septembre",
        10 => "Octobre",
        11 => "Novembre",
        12 => "Décembre",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn signup_details() -> SignupDetails {
        SignupDetails {
            first_name: "Amina".to_string(),
            last_name: "Kalenga".to_string(),
            phone: "+243970000001".to_string(),
            email: "amina.kalenga@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_flow() {
        let store = MockStore::for_tests();
        let challenge = request_login_otp(&store, "+243123456789").await.unwrap();

        let wrong = verify_otp(&store, &challenge, "000000").await;
        assert!(matches!(wrong, Err(BankError::IncorrectOtp)));

        match verify_otp(&store, &challenge, MOCK_OTP_CODE).await.unwrap() {
            AuthOutcome::SignedIn(profile) => assert_eq!(profile.name, "John Doe"),
            AuthOutcome::KycRequired(_) => panic!("login must not require KYC"),
        }
    }

    #[tokio::test]
    async fn test_signup_flow_runs_kyc_in_order() {
        let store = MockStore::for_tests();
        let challenge = request_signup_otp(&store, signup_details()).await.unwrap();

        let mut kyc = match verify_otp(&store, &challenge, MOCK_OTP_CODE).await.unwrap() {
            AuthOutcome::KycRequired(kyc) => kyc,
            AuthOutcome::SignedIn(_) => panic!("signup must require KYC"),
        };

        // Selfie before the document upload is refused.
        assert!(matches!(
            capture_selfie(&store, &kyc).await,
            Err(BankError::KycOutOfOrder)
        ));

        upload_identity_document(&store, &mut kyc).await.unwrap();
        let profile = capture_selfie(&store, &kyc).await.unwrap();

        assert_eq!(profile.name, "Amina Kalenga");
        assert_eq!(profile.verification_status, VerificationStatus::Pending);
        assert!(profile.account_number.starts_with("PL-"));
    }

    #[tokio::test]
    async fn test_resend_respects_cooldown() {
        let store = MockStore::for_tests();
        let mut challenge = request_login_otp(&store, "+243123456789").await.unwrap();

        assert!(matches!(
            resend_otp(&store, &challenge).await,
            Err(BankError::ResendCooldown(_))
        ));

        challenge.sent_at = Instant::now() - Duration::from_secs(61);
        let reissued = resend_otp(&store, &challenge).await.unwrap();
        assert_eq!(reissued.phone, challenge.phone);
    }
}
