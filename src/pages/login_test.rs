use super::*;

#[test]
fn empty_email_is_required() {
    assert_eq!(validate_email(""), Err("Email is required".to_owned()));
}

#[test]
fn malformed_emails_are_rejected() {
    for bad in ["plain", "no-domain@", "@no-local.org", "a@b", "a@.org", "a@org."] {
        assert!(validate_email(bad).is_err(), "{bad} should be invalid");
    }
}

#[test]
fn plausible_emails_pass() {
    for ok in ["ada@example.edu", "first.last@sub.example.org"] {
        assert_eq!(validate_email(ok), Ok(()), "{ok} should be valid");
    }
}

#[test]
fn empty_password_is_required() {
    assert_eq!(validate_password(""), Err("Password is required".to_owned()));
    assert_eq!(validate_password("hunter2"), Ok(()));
}
