//! Payment checks: Luhn checksum, CVV and expiry ranges.

mod card;
mod luhn;

pub use card::{
    card_number_valid, cvv_valid, expiry_year_valid, parse_expiry_month, CARD_NUMBER_MAX_LEN,
    CARD_NUMBER_MIN_LEN, CVV_LEN,
};
pub use luhn::is_luhn_valid;
