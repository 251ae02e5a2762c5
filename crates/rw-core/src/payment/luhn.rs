/// Luhn (mod 10) checksum.
///
/// Walks the digits right to left, doubling every second one and folding
/// doubled values above 9 back into a single digit. Anything that is not a
/// non-empty run of ASCII digits fails.
pub fn is_luhn_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(idx, digit)| {
            if idx % 2 == 1 {
                let doubled = digit * 2;
                if doubled >= 10 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}
