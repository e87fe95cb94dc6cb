use crate::board::BrandCard;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use yieldboard_common::form::ValidationErrors;

/// Spinner shown while a request is in flight.
pub fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prices and yields as the cards print them; "not applicable" is `---`.
pub fn figure(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "---".to_string(),
    }
}

/// A card: green when the brand meets its desired yield, red otherwise.
pub fn render_card(card: &BrandCard) -> String {
    let record = &card.record;
    let metrics = &card.metrics;

    let body = format!(
        "  price: {} | target price: {}\n  yield: {}% | desired yield: {}%\n  dividend: {}",
        record.current_price,
        figure(metrics.target_price),
        figure(metrics.realized_yield),
        metrics.desired_yield,
        record.dividend,
    );
    let (heading, body) = if card.meets_target() {
        (record.brand_name.green().bold(), body.green())
    } else {
        (record.brand_name.red().bold(), body.red())
    };

    format!("{heading} [{}]\n{body}\n", record.ticker_code)
}

pub fn render_board(cards: &[BrandCard]) -> String {
    if cards.is_empty() {
        return "no brands registered yet\n".dimmed().to_string();
    }
    cards
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per rejected field.
pub fn render_field_errors(errors: &ValidationErrors) -> String {
    errors
        .0
        .iter()
        .map(|e| format!("{} {}\n", format!("{}:", e.field).yellow(), e.message))
        .collect()
}
