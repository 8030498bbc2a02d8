//! Price and discount field arithmetic.
//!
//! The record keeps price fields as raw form text; these helpers are the
//! single place that text is parsed, shared by the step gates and by shells
//! that want to display the effective price.

/// Parses a form-entered numeric field as a finite, non-negative amount.
#[must_use]
pub fn parse_non_negative(text: &str) -> Option<f64> {
	let value: f64 = text.trim().parse().ok()?;
	(value.is_finite() && value >= 0.0).then_some(value)
}

/// Parses a percentage field, accepting `0..=100`.
#[must_use]
pub fn parse_percent(text: &str) -> Option<f64> {
	let value = parse_non_negative(text)?;
	(value <= 100.0).then_some(value)
}

/// Price after applying a discount percentage, rounded to cents.
#[must_use]
pub fn discounted_price(price: f64, percent: f64) -> f64 {
	(price * (1.0 - percent / 100.0) * 100.0).round() / 100.0
}
