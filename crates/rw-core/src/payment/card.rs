use super::luhn::is_luhn_valid;

pub const CARD_NUMBER_MIN_LEN: usize = 13;
pub const CARD_NUMBER_MAX_LEN: usize = 19;
pub const CVV_LEN: usize = 3;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Length in `[13, 19]`, digits only, and Luhn-valid.
pub fn card_number_valid(value: &str) -> bool {
    (CARD_NUMBER_MIN_LEN..=CARD_NUMBER_MAX_LEN).contains(&value.len())
        && all_digits(value)
        && is_luhn_valid(value)
}

pub fn cvv_valid(value: &str) -> bool {
    value.len() == CVV_LEN && all_digits(value)
}

/// A four digit year within `[current_year, current_year + horizon]`.
pub fn expiry_year_valid(value: &str, current_year: i32, horizon: u16) -> bool {
    if value.len() != 4 || !all_digits(value) {
        return false;
    }
    match value.parse::<i32>() {
        Ok(year) => year >= current_year && year <= current_year + i32::from(horizon),
        Err(_) => false,
    }
}

/// Accepts `August`, `Aug`, `8` or `08`; returns the month number.
pub fn parse_expiry_month(value: &str) -> Option<u32> {
    if all_digits(value) {
        return value
            .parse::<u32>()
            .ok()
            .filter(|month| (1..=12).contains(month));
    }

    let lowered = value.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|name| *name == lowered || (lowered.len() == 3 && name.starts_with(&lowered)))
        .map(|idx| idx as u32 + 1)
}
