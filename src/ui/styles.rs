use eframe::egui::{Color32, RichText};

use crate::models::QuoteRecord;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{ICON_DOWN, ICON_UP};

fn change_color(quote: &QuoteRecord) -> Color32 {
    if quote.is_up() {
        UI_CONFIG.colors.price_up
    } else {
        UI_CONFIG.colors.price_down
    }
}

/// `$412.80`, `$1,234.56`: always two decimals, grouped thousands.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}${}.{:02}", format_thousands(cents / 100), cents % 100)
}

pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `▲ $2.15 (1.22%)` / `▼ $8.45 (3.37%)`: direction glyph plus magnitudes.
pub fn format_change_line(change: f64, change_percent: f64) -> String {
    let arrow = if change >= 0.0 { ICON_UP } else { ICON_DOWN };
    format!(
        "{arrow} {} ({:.2}%)",
        format_price(change.abs()),
        change_percent.abs()
    )
}

pub fn change_text(quote: &QuoteRecord) -> RichText {
    RichText::new(format_change_line(quote.change, quote.change_percent))
        .color(change_color(quote))
}

pub fn subdued_text(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.label).small()
}

pub fn heading_text(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.heading)
}
