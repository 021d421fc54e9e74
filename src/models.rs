//! Validated field types and the love-toggle state.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::utils::input_validation::{
    validate_email, validate_login_password, validate_password, validate_username, InvalidField,
};

/// Names the form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum FieldKind {
    Username,
    Email,
    Password,
}

/// Wrapper type for a username that has been validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = InvalidField;

    fn try_from(username: String) -> Result<Self, Self::Error> {
        validate_username(&username).into_result()?;
        Ok(Self(username))
    }
}

impl TryFrom<&str> for Username {
    type Error = InvalidField;

    fn try_from(username: &str) -> Result<Self, Self::Error> {
        validate_username(username).into_result()?;
        Ok(Self(username.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for an email address that has been validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct EmailAddress(String);

impl TryFrom<String> for EmailAddress {
    type Error = InvalidField;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        validate_email(&email).into_result()?;
        Ok(Self(email))
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = InvalidField;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        validate_email(email).into_result()?;
        Ok(Self(email.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for a registration password that passed both the length and
/// the special-character check. Deliberately never printed or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Password(String);

impl TryFrom<String> for Password {
    type Error = InvalidField;

    fn try_from(password: String) -> Result<Self, Self::Error> {
        validate_password(&password).into_result()?;
        Ok(Self(password))
    }
}

impl TryFrom<&str> for Password {
    type Error = InvalidField;

    fn try_from(password: &str) -> Result<Self, Self::Error> {
        validate_password(password).into_result()?;
        Ok(Self(password.to_owned()))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for a login password. Login only checks the length, so this
/// accepts values [`Password`] would reject. Do not unify the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoginPassword(String);

impl TryFrom<String> for LoginPassword {
    type Error = InvalidField;

    fn try_from(password: String) -> Result<Self, Self::Error> {
        validate_login_password(&password).into_result()?;
        Ok(Self(password))
    }
}

impl TryFrom<&str> for LoginPassword {
    type Error = InvalidField;

    fn try_from(password: &str) -> Result<Self, Self::Error> {
        validate_login_password(password).into_result()?;
        Ok(Self(password.to_owned()))
    }
}

impl AsRef<str> for LoginPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The state of the love button. Independent of every validation outcome:
/// only an explicit toggle ever changes it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub enum ToggleState {
    #[default]
    Off,
    On,
}

impl ToggleState {
    pub fn is_on(self) -> bool {
        matches!(self, ToggleState::On)
    }
}

/// Flips the love toggle. Applying it twice returns the original state.
pub fn toggle_love(state: ToggleState) -> ToggleState {
    match state {
        ToggleState::Off => ToggleState::On,
        ToggleState::On => ToggleState::Off,
    }
}
