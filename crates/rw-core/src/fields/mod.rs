//! Field identifiers bound by the presentation layer.
//!
//! The serialized names are the stable contract: they match the element ids the
//! form renders (`emailAddress`, `cardCVV`, ...).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::WizardStep;

/// Every input the wizard collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    #[serde(rename = "emailAddress")]
    EmailAddress,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "confirmPassword")]
    ConfirmPassword,
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "middleName")]
    MiddleName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "addressLine1")]
    AddressLine1,
    #[serde(rename = "postcode")]
    Postcode,
    #[serde(rename = "city")]
    City,
    #[serde(rename = "state")]
    State,
    #[serde(rename = "cardHolderName")]
    CardHolderName,
    #[serde(rename = "cardType")]
    CardType,
    #[serde(rename = "cardNumber")]
    CardNumber,
    #[serde(rename = "cardCVV")]
    CardCvv,
    #[serde(rename = "cardExpiryMonth")]
    CardExpiryMonth,
    #[serde(rename = "cardExpiryYear")]
    CardExpiryYear,
    #[serde(rename = "agreedToTerms")]
    AgreedToTerms,
}

impl FieldId {
    pub const ALL: [FieldId; 17] = [
        FieldId::EmailAddress,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::FirstName,
        FieldId::MiddleName,
        FieldId::LastName,
        FieldId::AddressLine1,
        FieldId::Postcode,
        FieldId::City,
        FieldId::State,
        FieldId::CardHolderName,
        FieldId::CardType,
        FieldId::CardNumber,
        FieldId::CardCvv,
        FieldId::CardExpiryMonth,
        FieldId::CardExpiryYear,
        FieldId::AgreedToTerms,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::EmailAddress => "emailAddress",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::FirstName => "firstName",
            FieldId::MiddleName => "middleName",
            FieldId::LastName => "lastName",
            FieldId::AddressLine1 => "addressLine1",
            FieldId::Postcode => "postcode",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::CardHolderName => "cardHolderName",
            FieldId::CardType => "cardType",
            FieldId::CardNumber => "cardNumber",
            FieldId::CardCvv => "cardCVV",
            FieldId::CardExpiryMonth => "cardExpiryMonth",
            FieldId::CardExpiryYear => "cardExpiryYear",
            FieldId::AgreedToTerms => "agreedToTerms",
        }
    }

    /// Human label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::EmailAddress => "Email Address",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
            FieldId::FirstName => "First Name",
            FieldId::MiddleName => "Middle Name",
            FieldId::LastName => "Last Name",
            FieldId::AddressLine1 => "Address Line 1",
            FieldId::Postcode => "Postcode",
            FieldId::City => "City",
            FieldId::State => "State",
            FieldId::CardHolderName => "Cardholder Name",
            FieldId::CardType => "Card Type",
            FieldId::CardNumber => "Card Number",
            FieldId::CardCvv => "Card CVV",
            FieldId::CardExpiryMonth => "Card Expiry Month",
            FieldId::CardExpiryYear => "Card Expiry Year",
            FieldId::AgreedToTerms => "Terms and Conditions",
        }
    }

    /// The wizard step that renders this field.
    pub fn step(&self) -> WizardStep {
        match self {
            FieldId::EmailAddress | FieldId::Password | FieldId::ConfirmPassword => {
                WizardStep::Email
            }
            FieldId::FirstName
            | FieldId::MiddleName
            | FieldId::LastName
            | FieldId::AddressLine1
            | FieldId::Postcode
            | FieldId::City
            | FieldId::State => WizardStep::Contact,
            FieldId::CardHolderName
            | FieldId::CardType
            | FieldId::CardNumber
            | FieldId::CardCvv
            | FieldId::CardExpiryMonth
            | FieldId::CardExpiryYear => WizardStep::Payment,
            FieldId::AgreedToTerms => WizardStep::Terms,
        }
    }

    /// Fields of `step` in render order.
    pub fn for_step(step: WizardStep) -> impl Iterator<Item = FieldId> {
        Self::ALL.into_iter().filter(move |field| field.step() == step)
    }

    pub fn is_name(&self) -> bool {
        matches!(
            self,
            FieldId::FirstName | FieldId::MiddleName | FieldId::LastName | FieldId::CardHolderName
        )
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field id: {0}")]
pub struct UnknownFieldId(pub String);

impl FromStr for FieldId {
    type Err = UnknownFieldId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldId(s.to_string()))
    }
}

/// Card scheme chosen on the payment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[serde(rename = "VISA")]
    Visa,
    #[serde(rename = "Mastercard")]
    Mastercard,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Visa => "VISA",
            CardType::Mastercard => "Mastercard",
        }
    }
}

impl Display for CardType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card type: {0}")]
pub struct UnknownCardType(pub String);

impl FromStr for CardType {
    type Err = UnknownCardType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(CardType::Visa),
            "mastercard" => Ok(CardType::Mastercard),
            _ => Err(UnknownCardType(s.to_string())),
        }
    }
}
