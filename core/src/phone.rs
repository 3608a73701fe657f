//! Phone number normalization and masking.
//!
//! Numbers follow the Brazilian layout: a two-digit area code followed by an
//! eight or nine digit subscriber number. Every function here is total and
//! never fails; input it cannot format comes back as-is.

const MAX_DIGITS: usize = 11;

/// Strips every character that is not an ASCII digit.
pub fn clean_phone_number(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Masks a number while it is being typed.
///
/// At most 11 digits are kept. Up to two digits are returned bare, up to
/// seven become `(DD) NNNNN`, and longer input becomes `(DD) NNNNN-NNNN`.
/// Feeding the output back in yields the same output.
pub fn format_phone_input(input: &str) -> String {
    let mut digits = clean_phone_number(input);
    digits.truncate(MAX_DIGITS);

    match digits.len() {
        0..=2 => digits,
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Formats a complete number for display.
///
/// Dispatches on the digit count: 11 and 10 digits carry an area code, 9 and
/// 8 do not. Any other length returns `input` untouched.
pub fn format_phone_display(input: &str) -> String {
    let d = clean_phone_number(input);

    match d.len() {
        11 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        9 => format!("{}-{}", &d[..5], &d[5..]),
        8 => format!("{}-{}", &d[..4], &d[4..]),
        _ => input.to_string(),
    }
}
