pub mod commands;
pub mod render;

use chrono::NaiveDate;

/// Accept only ISO-8601 calendar dates (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("'{s}' is not a YYYY-MM-DD date: {e}"))
}

/// Accept only finite, non-negative amounts.
pub fn parse_amount(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{s}' must be a non-negative amount"));
    }
    Ok(value)
}
