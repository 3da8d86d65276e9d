//! Client-side form validation.
//!
//! Every rule of a form is evaluated on each submit so the page can show all
//! problems at once. An empty `ValidationErrors` means the form may be sent.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{SignInForm, SignUpForm};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("valid phone regex"));

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Field name to message map; iteration is ordered by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Contact form body. Never sent anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Digits only, 10 to 15 of them.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn shorter_than(value: &str, min: usize) -> bool {
    value.chars().count() < min
}

fn check_email(errors: &mut ValidationErrors, email: &str, required: &str, invalid: &str) {
    if is_blank(email) {
        errors.insert("email", required);
    } else if !is_valid_email(email) {
        errors.insert("email", invalid);
    }
}

pub fn validate_sign_in(form: &SignInForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, &form.email, "Email is required.", "Email is invalid.");
    if is_blank(&form.password) {
        errors.insert("password", "Password is required.");
    }
    errors
}

pub fn validate_sign_up(form: &SignUpForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&form.name) {
        errors.insert("name", "Name is required.");
    } else if shorter_than(&form.name, MIN_NAME_LEN) {
        errors.insert("name", "Name must be at least 3 characters.");
    }

    if is_blank(&form.username) {
        errors.insert("username", "User name is required.");
    } else if shorter_than(&form.username, MIN_USERNAME_LEN) {
        errors.insert("username", "User name must be at least 3 characters.");
    }

    check_email(&mut errors, &form.email, "Mail ID is required.", "Mail ID is invalid.");

    if is_blank(&form.password) {
        errors.insert("password", "Password is required.");
    } else if shorter_than(&form.password, MIN_PASSWORD_LEN) {
        errors.insert("password", "Password must be at least 8 characters.");
    }

    if is_blank(&form.phone) {
        errors.insert("phone", "Phone number is required.");
    } else if !is_valid_phone(&form.phone) {
        errors.insert("phone", "Phone number must be 10 to 15 digits.");
    }

    errors
}

pub fn validate_contact(form: &ContactForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if is_blank(&form.name) {
        errors.insert("name", "Name is required.");
    }
    check_email(&mut errors, &form.email, "Email is required.", "Email is invalid.");
    if is_blank(&form.message) {
        errors.insert("message", "Message is required.");
    }
    errors
}
