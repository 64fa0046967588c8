use super::*;

#[test]
fn validate_register_input_builds_request() {
    assert_eq!(
        validate_register_input(" Acme SARL ", " hr@acme.tn ", "hunter22", Role::Company),
        Ok(RegisterRequest {
            name: "Acme SARL".to_owned(),
            email: "hr@acme.tn".to_owned(),
            password: "hunter22".to_owned(),
            role: Role::Company,
        })
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(
        validate_register_input("", "a@b.tn", "hunter22", Role::Stagiaire),
        Err("Fill in name, email and password.")
    );
    assert_eq!(
        validate_register_input("Sami", "  ", "hunter22", Role::Stagiaire),
        Err("Fill in name, email and password.")
    );
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("Sami", "s@b.tn", "12345", Role::Stagiaire),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_register_input("Sami", "s@b.tn", "123456", Role::Stagiaire).is_ok());
}

#[test]
fn validate_register_input_refuses_admin_self_signup() {
    assert!(validate_register_input("Root", "root@b.tn", "hunter22", Role::Admin).is_err());
}
