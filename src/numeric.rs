//! Rounding and lenient decimal parsing shared by both calculators.

/// Rounds `value` to `decimals` fractional digits, half away from zero.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Two-decimal rounding used for currency amounts.
pub fn round(value: f64) -> f64 {
    round_to_decimals(value, 2)
}

/// Parses user-typed numbers where `,` may stand in for the decimal point.
///
/// Every comma becomes a period, then the longest numeric prefix is parsed, so
/// `"12 EUR"` reads as `12` and `"1.5.3"` as `1.5`. Returns `NaN` when no
/// number can be read at all.
pub fn parse_decimal(value: &str) -> f64 {
    let normalized = value.replace(',', ".");
    let trimmed = normalized.trim_start();
    let prefix = numeric_prefix(trimmed);
    if prefix.is_empty() {
        return f64::NAN;
    }
    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

/// Coalesces an unparseable amount to zero.
pub fn amount_or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Coalesces a missing or zero count to a multiplier of one.
pub fn count_or_one(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        1.0
    } else {
        value
    }
}

fn numeric_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;
    let mut valid_end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
        valid_end = end;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
            valid_end = end;
        }
    }

    if !seen_digit {
        return "";
    }

    // exponent only counts when followed by digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            valid_end = exp_end;
        }
    }

    &input[..valid_end]
}
