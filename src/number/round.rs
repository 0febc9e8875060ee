//! Decimal rounding.

/// Round to `places` decimal places, ties away from zero.
///
/// Rounding works on the shortest decimal form of `value`, the one it
/// prints as, so `round(2.345, 2)` is `2.35` even though the nearest
/// double to 2.345 lies slightly below it. Negative `places` rounds to
/// tens, hundreds and so on.
///
/// Zero, NaN and infinities come back unchanged, and so do integral values
/// when `places >= 0`. A finite value whose rounded result would overflow to
/// infinity also comes back unchanged. A result of zero is always positive
/// zero.
///
/// ```
/// use cliutil::number::round;
///
/// assert_eq!(round(2.345, 2), 2.35);
/// assert_eq!(round(-2.345, 2), -2.35);
/// assert_eq!(round(1250.0, -2), 1300.0);
/// ```
pub fn round(value: f64, places: i32) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    if !value.is_finite() || (places >= 0 && value == value.trunc()) {
        return value;
    }

    let (mut digits, exponent) = decimal_digits(value.abs());

    // Digits whose place value is at least 10^-places.
    let keep = i64::from(exponent) + i64::from(places) + 1;
    if keep >= digits.len() as i64 {
        return value;
    }
    if keep < 0 {
        return 0.0;
    }

    let keep = keep as usize;
    let round_up = digits[keep] >= 5;
    digits.truncate(keep);
    if round_up {
        increment(&mut digits);
    }
    if digits.iter().all(|&d| d == 0) {
        return 0.0;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let mantissa: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    match format!("{sign}{mantissa}e{}", -i64::from(places)).parse::<f64>() {
        Ok(rounded) if rounded.is_finite() => rounded,
        _ => value,
    }
}

/// Split a positive finite value into its shortest decimal digits and the
/// power of ten of the first digit.
fn decimal_digits(value: f64) -> (Vec<u8>, i32) {
    let repr = format!("{value:e}");
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((&repr, "0"));
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Add one to a big-endian digit string, growing it on carry out.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}
