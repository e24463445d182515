use crate::core::Conversion;
use console::style;

const SEPARATOR: &str = "|";

/// Defines different styles for text elements.
pub enum StyleType {
    Amount,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Amount => style(text).green().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// One line per conversion: `<amount> | <rate date>`.
pub fn format_conversion(conversion: &Conversion, decimals: u32) -> String {
    format!(
        "{} {} {}",
        style_text(
            &conversion.amount.with_decimals(decimals).to_string(),
            StyleType::Amount
        ),
        style_text(SEPARATOR, StyleType::Subtle),
        conversion.date
    )
}
