use serde::Serialize;

use crate::fields::CardType;

/// `first + " " + last`, each side trimmed and internal runs of whitespace
/// collapsed. A blank side contributes nothing, so no dangling separator.
pub fn preferred_full_name(first_name: &str, last_name: &str) -> String {
    first_name
        .split_whitespace()
        .chain(last_name.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub address_line1: String,
    pub postcode: String,
    pub city: String,
    pub state: String,
    pub preferred_full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub card_holder_name: String,
    pub card_type: Option<CardType>,
    /// Only the last four digits leave the session.
    pub card_number_last4: String,
    pub card_expiry_month: String,
    pub card_expiry_year: String,
}

/// What a successful submission hands to the account registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredAccount {
    pub email: String,
    pub contact: ContactInfo,
    pub payment: PaymentInfo,
}

impl RegisteredAccount {
    pub fn confirmation_message(&self) -> String {
        format!(
            "Your user account {} has been successfully registered.",
            self.email
        )
    }
}
