use super::*;

fn valid_sign_up() -> SignUpForm {
    SignUpForm {
        name: "Jane Doe".to_owned(),
        username: "janed".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret123".to_owned(),
        phone: "9876543210".to_owned(),
    }
}

// =============================================================
// Shape rules
// =============================================================

#[test]
fn email_shape_requires_at_and_dot() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("jane.doe+tag@mail.example.com"));
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
}

#[test]
fn phone_requires_ten_to_fifteen_digits() {
    assert!(is_valid_phone("9876543210"));
    assert!(is_valid_phone("123456789012345"));
    assert!(!is_valid_phone("123456789"));
    assert!(!is_valid_phone("1234567890123456"));
    assert!(!is_valid_phone("+19876543210"));
    assert!(!is_valid_phone("98765 43210"));
}

#[test]
fn phone_accepts_ascii_digits_only() {
    assert!(!is_valid_phone("٩٨٧٦٥٤٣٢١٠"));
    assert!(!is_valid_phone("９８７６５４３２１０"));
    assert!(!is_valid_phone("98765४३२१०"));
}

// =============================================================
// Sign-in
// =============================================================

#[test]
fn sign_in_valid_form_has_no_errors() {
    let form = SignInForm { email: "a@b.com".to_owned(), password: "x".to_owned() };
    assert!(validate_sign_in(&form).is_empty());
}

#[test]
fn sign_in_collects_every_error() {
    let errors = validate_sign_in(&SignInForm::default());
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("email"), Some("Email is required."));
    assert_eq!(errors.get("password"), Some("Password is required."));
}

#[test]
fn sign_in_reports_invalid_email_alongside_missing_password() {
    let form = SignInForm { email: "nope".to_owned(), password: "   ".to_owned() };
    let errors = validate_sign_in(&form);
    assert_eq!(errors.get("email"), Some("Email is invalid."));
    assert_eq!(errors.get("password"), Some("Password is required."));
}

// =============================================================
// Sign-up
// =============================================================

#[test]
fn sign_up_valid_form_has_no_errors() {
    assert!(validate_sign_up(&valid_sign_up()).is_empty());
}

#[test]
fn sign_up_short_password_is_reported() {
    for password in ["a", "1234567", "seven77"] {
        let form = SignUpForm { password: password.to_owned(), ..valid_sign_up() };
        let errors = validate_sign_up(&form);
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters."), "{password}");
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn sign_up_collects_every_error() {
    let form = SignUpForm {
        name: "Jo".to_owned(),
        username: "  ".to_owned(),
        email: "jane@".to_owned(),
        password: String::new(),
        phone: "12ab".to_owned(),
    };
    let errors = validate_sign_up(&form);
    assert_eq!(errors.len(), 5);
    assert_eq!(errors.get("name"), Some("Name must be at least 3 characters."));
    assert_eq!(errors.get("username"), Some("User name is required."));
    assert_eq!(errors.get("email"), Some("Mail ID is invalid."));
    assert_eq!(errors.get("password"), Some("Password is required."));
    assert_eq!(errors.get("phone"), Some("Phone number must be 10 to 15 digits."));
}

#[test]
fn sign_up_length_counts_characters_not_bytes() {
    let form = SignUpForm { name: "Zoë".to_owned(), ..valid_sign_up() };
    assert!(!validate_sign_up(&form).contains("name"));
}

#[test]
fn errors_iterate_in_field_order() {
    let errors = validate_sign_up(&SignUpForm::default());
    let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec!["email", "name", "password", "phone", "username"]);
}

// =============================================================
// Contact
// =============================================================

#[test]
fn contact_requires_all_fields() {
    let errors = validate_contact(&ContactForm::default());
    assert_eq!(errors.get("name"), Some("Name is required."));
    assert_eq!(errors.get("email"), Some("Email is required."));
    assert_eq!(errors.get("message"), Some("Message is required."));
}

#[test]
fn contact_valid_form_passes() {
    let form = ContactForm {
        name: "Ravi".to_owned(),
        email: "ravi@example.in".to_owned(),
        message: "Tell me about your services.".to_owned(),
    };
    assert!(validate_contact(&form).is_empty());
}
