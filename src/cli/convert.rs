use super::ui;
use crate::core::config::AppConfig;
use crate::{ConvertRequest, convert};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

pub async fn run(request: &ConvertRequest, decimals: u32, config: &AppConfig) -> Result<()> {
    let conversions = convert(request, config).await?;
    for conversion in &conversions {
        println!("{}", ui::format_conversion(conversion, decimals));
    }
    Ok(())
}

/// Parses an amount typed by the user: optional sign, digits and a `.` decimal
/// point. Thousands separators are rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let trimmed = raw.trim();
    let unsigned = trimmed
        .strip_prefix(['-', '+'])
        .unwrap_or(trimmed);
    let valid = !unsigned.is_empty()
        && unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;
    if !valid {
        return Err(format!("'{raw}' is not a valid amount"));
    }

    let normalized = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(normalized).map_err(|e| format!("'{raw}' is not a valid amount: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10"), Ok(dec!(10)));
        assert_eq!(parse_amount("3.141596"), Ok(dec!(3.141596)));
        assert_eq!(parse_amount("-2.5"), Ok(dec!(-2.5)));
        assert_eq!(parse_amount("+7"), Ok(dec!(7)));
        assert_eq!(parse_amount(".5"), Ok(dec!(0.5)));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for raw in ["", "-", ".", "1,000", "1.000.000", "1e5", "ten", "1_000"] {
            assert!(parse_amount(raw).is_err(), "{raw} should be rejected");
        }
    }
}
