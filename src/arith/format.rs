//! Result rounding and display formatting.

/// Number of decimal places results are rounded to.
pub const RESULT_DECIMALS: usize = 8;

/// Digits needed to print any finite `f64` exactly in fixed-point form.
const EXACT_DIGITS: usize = 1100;

/// Round a value to [`RESULT_DECIMALS`] decimal places.
///
/// Non-ties round to the nearest value. A value lying exactly halfway
/// between two candidates rounds away from zero.
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };
    let (kept, rest) = fraction.split_at(RESULT_DECIMALS);

    let mut digits = format!("{whole}{kept}");
    if matches!(rest.as_bytes().first(), Some(b'5'..=b'9')) {
        digits = increment_digits(&digits);
    }

    let split = digits.len() - RESULT_DECIMALS;
    let magnitude = format!("{}.{}", &digits[..split], &digits[split..])
        .parse::<f64>()
        .unwrap_or(value.abs());

    magnitude.copysign(value)
}

/// Add one to a string of ASCII decimal digits.
fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Round and render a value as the shortest string that parses back to the
/// rounded value.
///
/// Non-finite values render as `NaN`, `Infinity` and `-Infinity`; negative
/// zero renders as `0`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    let rounded = round_result(value);
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Read the longest numeric prefix of `text`, like a lenient float parse.
///
/// Returns NaN when no number can be read (`"Error"`, `""`).
pub fn parse_leading_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let sign = if negative { -1.0 } else { 1.0 };

    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let mut digits = String::new();
    let mut seen_point = false;
    let mut seen_digit = false;
    for c in rest.chars() {
        if c.is_ascii_digit() {
            seen_digit = true;
            digits.push(c);
        } else if c == '.' && !seen_point {
            seen_point = true;
            digits.push(c);
        } else {
            break;
        }
    }

    if !seen_digit {
        return f64::NAN;
    }

    let mut normalized = String::with_capacity(digits.len() + 1);
    if digits.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(digits.trim_end_matches('.'));

    normalized
        .parse::<f64>()
        .map(|magnitude| sign * magnitude)
        .unwrap_or(f64::NAN)
}
