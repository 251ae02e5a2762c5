use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::fields::FieldId;

/// A user-facing validation message, rendered inline under its field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn required(field: FieldId) -> Self {
        match field {
            // The password message carries a trailing period in the deployed form.
            FieldId::Password => Self::new("Password is required."),
            other => Self::new(format!("{} is required", other.label())),
        }
    }

    pub fn invalid(field: FieldId) -> Self {
        Self::new(format!("Please input a valid {}", field.label()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for ErrorMessage {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
