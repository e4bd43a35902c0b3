use crate::domain::market_data::{TotalSupply, UsdAmount};

/// Label shown for an unknown total supply
pub const UNKNOWN_LABEL: &str = "N/A";

/// Fixed-point rendering with `,` between thousands groups.
///
/// - `group_thousands(1234567.891, 2)` -> `1,234,567.89`
/// - `group_thousands(999.6, 0)` -> `1,000`
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Dollar amount with `decimals` fraction digits
pub fn format_usd(amount: UsdAmount, decimals: usize) -> String {
    format!("${}", group_thousands(amount.value(), decimals))
}

/// Whole units, or [`UNKNOWN_LABEL`]
pub fn format_supply(supply: TotalSupply) -> String {
    match supply {
        TotalSupply::Known(units) => group_thousands(units, 0),
        TotalSupply::Unknown => UNKNOWN_LABEL.to_string(),
    }
}
