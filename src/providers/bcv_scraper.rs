//! Pulls the USD rate out of the BCV reference rate page.
//!
//! Only two anchors are relied upon: the `#dolar` block holding the multiplier in a
//! `<strong>`, and the element right after it holding a `xsd:dateTime` span.

use crate::core::Rate;
use crate::core::error::ExtractError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use std::str::FromStr;
use std::sync::LazyLock;

static DOLAR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#dolar").expect("valid selector"));
static STRONG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong").expect("valid selector"));
static DATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"span[datatype="xsd:dateTime"]"#).expect("valid selector")
});

pub fn extract_rate(html: &str) -> Result<Rate, ExtractError> {
    let document = Html::parse_document(html);

    let dolar = document
        .select(&DOLAR_SELECTOR)
        .next()
        .ok_or(ExtractError::NoRateElement)?;

    let strong = dolar
        .select(&STRONG_SELECTOR)
        .next()
        .ok_or_else(|| ExtractError::MultiplierParse("No strong element".to_string()))?;
    let text: String = strong.text().collect();
    let multiplier = parse_es_ve_decimal(&text)
        .filter(|m| *m >= Decimal::ZERO)
        .ok_or_else(|| ExtractError::MultiplierParse(format!("'{}'", text.trim())))?;

    let sibling = dolar
        .next_siblings()
        .find_map(ElementRef::wrap)
        .ok_or_else(|| ExtractError::NoDateElement("No sibling for dolar element".to_string()))?;
    let span = sibling
        .select(&DATE_SELECTOR)
        .next()
        .ok_or_else(|| ExtractError::NoDateElement("No date found".to_string()))?;
    let content = span
        .value()
        .attr("content")
        .ok_or_else(|| ExtractError::DateParse("No content attribute".to_string()))?;
    let date = parse_timestamp_date(content)
        .ok_or_else(|| ExtractError::DateParse(format!("'{content}'")))?;

    Ok(Rate::new(multiplier, date))
}

/// Parses numbers written the es-VE way: `.` groups thousands, `,` separates decimals.
pub fn parse_es_ve_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace());
    if trimmed.is_empty() {
        return None;
    }

    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (integer, fraction) = match digits.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let groups: Vec<&str> = integer.split('.').collect();
    let well_grouped = groups.len() == 1
        || (!groups[0].is_empty()
            && groups[0].len() <= 3
            && groups[1..].iter().all(|g| g.len() == 3));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !well_grouped || !groups.iter().all(|&g| all_digits(g)) {
        return None;
    }
    let integer = groups.concat();

    let normalized = match fraction {
        Some(f) if f.is_empty() || !all_digits(f) => return None,
        Some(f) if integer.is_empty() => format!("{sign}0.{f}"),
        Some(f) => format!("{sign}{integer}.{f}"),
        None if integer.is_empty() => return None,
        None => format!("{sign}{integer}"),
    };
    Decimal::from_str(&normalized).ok()
}

/// Calendar date of a timestamp, as written (offset and time are dropped).
fn parse_timestamp_date(content: &str) -> Option<NaiveDate> {
    let content = content.trim();
    DateTime::parse_from_rfc3339(content)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(content, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(content, "%Y-%m-%d"))
        .ok()
}
