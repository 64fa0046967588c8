use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  amira@example.tn ", "s3cret"),
        Ok(Credentials { username: "amira@example.tn".to_owned(), password: "s3cret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("a@b.tn", "  spaced  ").unwrap();
    assert_eq!(creds.password, "  spaced  ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.tn", ""), Err("Enter both email and password."));
}
