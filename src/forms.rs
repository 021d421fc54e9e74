//! Form-level validation: runs every field rule and collects the messages.
//!
//! Field checks are independent, so a form reports all failing fields at
//! once, one message per field. The password rule differs between the two
//! forms: sign-up requires a special character, login does not.

use std::fmt;

use thiserror::Error;

use crate::models::{EmailAddress, FieldKind, LoginPassword, Password, Username};
use crate::utils::input_validation::{
    validate_email, validate_login_password, validate_password, validate_username,
    ValidationResult,
};

/// All messages a form produced, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct FormErrors(pub Vec<(FieldKind, &'static str)>);

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl FormErrors {
    pub fn message_for(&self, field: FieldKind) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(kind, _)| *kind == field)
            .map(|(_, message)| *message)
    }
}

fn collect(checks: Vec<(FieldKind, ValidationResult)>) -> Result<(), FormErrors> {
    let failures: Vec<(FieldKind, &'static str)> = checks
        .into_iter()
        .filter(|(_, result)| !result.is_valid())
        .map(|(field, result)| (field, result.message()))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(FormErrors(failures))
    }
}

/// The sign-up form: username, email and a full-strength password.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A sign-up form whose every field passed its rule.
#[derive(Debug, Clone)]
pub struct ValidatedSignup {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl SignupForm {
    /// Runs all three field rules and reports every failing field.
    pub fn validate(&self) -> Result<(), FormErrors> {
        collect(vec![
            (FieldKind::Username, validate_username(&self.username)),
            (FieldKind::Email, validate_email(&self.email)),
            (FieldKind::Password, validate_password(&self.password)),
        ])
    }

    /// Validates and converts the raw fields into their wrapper types.
    pub fn into_validated(self) -> Result<ValidatedSignup, FormErrors> {
        self.validate()?;
        Ok(ValidatedSignup {
            username: Username::try_from(self.username)
                .map_err(|e| FormErrors(vec![(FieldKind::Username, e.0)]))?,
            email: EmailAddress::try_from(self.email)
                .map_err(|e| FormErrors(vec![(FieldKind::Email, e.0)]))?,
            password: Password::try_from(self.password)
                .map_err(|e| FormErrors(vec![(FieldKind::Password, e.0)]))?,
        })
    }
}

/// The login form: username and a length-only password check.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// A login form whose every field passed its rule.
#[derive(Debug, Clone)]
pub struct ValidatedLogin {
    pub username: Username,
    pub password: LoginPassword,
}

impl LoginForm {
    /// Runs the username rule and the weaker login password rule.
    pub fn validate(&self) -> Result<(), FormErrors> {
        collect(vec![
            (FieldKind::Username, validate_username(&self.username)),
            (FieldKind::Password, validate_login_password(&self.password)),
        ])
    }

    /// Validates and converts the raw fields into their wrapper types.
    pub fn into_validated(self) -> Result<ValidatedLogin, FormErrors> {
        self.validate()?;
        Ok(ValidatedLogin {
            username: Username::try_from(self.username)
                .map_err(|e| FormErrors(vec![(FieldKind::Username, e.0)]))?,
            password: LoginPassword::try_from(self.password)
                .map_err(|e| FormErrors(vec![(FieldKind::Password, e.0)]))?,
        })
    }
}
