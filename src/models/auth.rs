//! Session and onboarding state.

use std::time::Instant;

use super::user::UserProfile;

/// Where the user is in the auth lifecycle. Held by the REPL, reset on exit.
#[derive(Debug)]
pub enum Session {
    SignedOut,
    AwaitingOtp(OtpChallenge),
    AwaitingKyc(KycProgress),
    SignedIn(UserProfile),
}

/// Details collected by the signup form.
#[derive(Debug, Clone)]
pub struct SignupDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// What a pending OTP unlocks once verified.
#[derive(Debug, Clone)]
pub enum OtpPurpose {
    Login,
    Signup(SignupDetails),
}

/// A one-time password in flight.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    pub phone: String,
    pub purpose: OtpPurpose,
    pub sent_at: Instant,
}

impl OtpChallenge {
    pub fn new(phone: &str, purpose: OtpPurpose) -> Self {
        OtpChallenge {
            phone: phone.to_string(),
            purpose,
            sent_at: Instant::now(),
        }
    }
}

/// Signup identity-verification steps, in order: ID upload, then selfie.
#[derive(Debug, Clone)]
pub struct KycProgress {
    pub details: SignupDetails,
    pub id_uploaded: bool,
}

impl KycProgress {
    pub fn new(details: SignupDetails) -> Self {
        KycProgress {
            details,
            id_uploaded: false,
        }
    }
}
