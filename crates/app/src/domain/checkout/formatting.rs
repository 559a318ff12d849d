//! Card input formatting.
//!
//! These only change how input is displayed and stored. Whether a field is
//! filled in is decided on the raw value.

const MAX_CARD_DIGITS: usize = 19;
const EXPIRY_DIGITS: usize = 4;

/// ASCII digits of `input`, in order.
#[must_use]
pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Groups the card number into blocks of four digits separated by single spaces.
#[must_use]
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = digits(input).chars().take(MAX_CARD_DIGITS).collect();

    digits
        .chunks(4)
        .map(|block| block.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats expiry input as `MM/YY` once more than two digits are entered.
#[must_use]
pub fn format_expiry(input: &str) -> String {
    let digits: String = digits(input).chars().take(EXPIRY_DIGITS).collect();

    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}
