use once_cell::sync::Lazy;
use regex::Regex;

use crate::fields::{CardType, FieldId};
use crate::payment::{card_number_valid, cvv_valid, expiry_year_valid, parse_expiry_month};

use super::{ErrorMessage, ValidationPolicy};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L} ]+$").expect("name pattern must compile"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Australian states and territories, as `(name, abbreviation)`.
const STATES: [(&str, &str); 8] = [
    ("Australian Capital Territory", "ACT"),
    ("New South Wales", "NSW"),
    ("Northern Territory", "NT"),
    ("Queensland", "QLD"),
    ("South Australia", "SA"),
    ("Tasmania", "TAS"),
    ("Victoria", "VIC"),
    ("Western Australia", "WA"),
];

pub fn is_required(field: FieldId) -> bool {
    !matches!(field, FieldId::MiddleName | FieldId::AgreedToTerms)
}

/// Checks a single field in isolation.
///
/// The value is trimmed first, so whitespace-only input counts as absent.
/// Cross-field rules (password confirmation) and the terms gate live in
/// [`super::StepValidator`].
pub fn validate(field: FieldId, raw: &str, policy: &ValidationPolicy) -> Option<ErrorMessage> {
    if field == FieldId::AgreedToTerms {
        return None;
    }

    let value = raw.trim();
    if value.is_empty() {
        return is_required(field).then(|| ErrorMessage::required(field));
    }

    let valid = match field {
        FieldId::EmailAddress => EMAIL_PATTERN.is_match(value),
        FieldId::FirstName
        | FieldId::MiddleName
        | FieldId::LastName
        | FieldId::CardHolderName => NAME_PATTERN.is_match(value),
        FieldId::Postcode => {
            value.len() == policy.postcode_length && value.bytes().all(|b| b.is_ascii_digit())
        }
        FieldId::State => STATES.iter().any(|(name, abbr)| {
            value.eq_ignore_ascii_case(name) || value.eq_ignore_ascii_case(abbr)
        }),
        FieldId::CardType => value.parse::<CardType>().is_ok(),
        FieldId::CardNumber => card_number_valid(value),
        FieldId::CardCvv => cvv_valid(value),
        FieldId::CardExpiryMonth => parse_expiry_month(value).is_some(),
        FieldId::CardExpiryYear => {
            expiry_year_valid(value, policy.current_year, policy.expiry_year_horizon)
        }
        FieldId::Password
        | FieldId::ConfirmPassword
        | FieldId::AddressLine1
        | FieldId::City
        | FieldId::AgreedToTerms => true,
    };

    if valid {
        return None;
    }

    Some(match field {
        FieldId::Postcode => ErrorMessage::new("Please enter a valid postcode"),
        FieldId::State | FieldId::CardType => {
            ErrorMessage::new(format!("Please select a valid {}", field.label()))
        }
        FieldId::CardCvv => ErrorMessage::new("Please input a valid card CVV"),
        FieldId::CardExpiryMonth => ErrorMessage::new("Please input a valid card expiry month"),
        FieldId::CardExpiryYear => ErrorMessage::new("Please input a valid card expiry year"),
        other => ErrorMessage::invalid(other),
    })
}
