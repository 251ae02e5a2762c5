//! Account registry domain types.

use serde::{Deserialize, Serialize};

/// Answer from the registry for one email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    AlreadyRegistered,
}

/// Registry identity for an email: lower-cased, nothing else.
///
/// Surrounding whitespace is not stripped here; callers decide what they pass.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
