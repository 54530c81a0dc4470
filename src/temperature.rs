//! Fixed-point parsing of `-?\d+\.\d` measurements into tenths of a degree.

/// Longest accepted measurement, sign and point included
pub const MAX_LEN: usize = 10;

/// Parse a measurement without looking at what the bytes are.
///
/// Relies on the input carrying exactly one fractional digit: the decimal
/// point is skipped and every other byte is folded in as a digit. Anything
/// that is not `-?\d+\.\d` produces an unspecified value (arithmetic wraps,
/// it never panics).
#[inline]
pub fn parse_temperature(bytes: &[u8]) -> i32 {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };

    let value = digits
        .iter()
        .filter(|&&b| b != b'.')
        .fold(0i32, |acc, &b| {
            acc.wrapping_mul(10)
                .wrapping_add(b.wrapping_sub(b'0') as i32)
        });

    if negative { value.wrapping_neg() } else { value }
}

/// Checked variant of [`parse_temperature`], `None` unless the bytes are `-?\d+\.\d`.
pub fn try_parse_temperature(bytes: &[u8]) -> Option<i32> {
    if bytes.is_empty() || bytes.len() > MAX_LEN {
        return None;
    }
    let digits = bytes.strip_prefix(b"-").unwrap_or(bytes);
    let (fraction, rest) = digits.split_last()?;
    let (point, integer) = rest.split_last()?;

    let valid = *point == b'.'
        && fraction.is_ascii_digit()
        && !integer.is_empty()
        && integer.iter().all(u8::is_ascii_digit);

    valid.then(|| parse_temperature(bytes))
}
