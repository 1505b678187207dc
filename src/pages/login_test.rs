use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@b.com  ", "pw"),
        Ok(("a@b.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn login_outcome_message_success_is_silent() {
    assert_eq!(login_outcome_message(&Ok(true)), "");
}

#[test]
fn login_outcome_message_rejected_credentials() {
    assert_eq!(login_outcome_message(&Ok(false)), "Invalid email or password.");
    assert_eq!(
        login_outcome_message(&Err(AuthError::Status { status: 400 })),
        "Invalid email or password."
    );
}

#[test]
fn login_outcome_message_reports_other_failures() {
    assert_eq!(
        login_outcome_message(&Err(AuthError::Status { status: 502 })),
        "Sign-in failed: request failed with status 502"
    );
    assert_eq!(
        login_outcome_message(&Err(AuthError::Transport("offline".to_owned()))),
        "Sign-in failed: request failed: offline"
    );
}
