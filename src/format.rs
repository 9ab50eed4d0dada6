//! Number formatting for KPIs and tables.

use crate::data::compare::YoyChange;

/// `1234567.891` → `"1,234,567.89"` with `decimals = 2`.
pub fn thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Whole units, truncated toward zero.
pub fn count(value: f64) -> String {
    thousands(value.trunc(), 0)
}

/// `-1234.5` → `"-$1,234.50"`.
pub fn currency(value: f64) -> String {
    let body = thousands(value.abs(), 2);
    if value < 0.0 && body != "0.00" {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

pub fn optional(value: Option<f64>) -> String {
    value.map(|v| thousands(v, 2)).unwrap_or_else(|| "–".to_string())
}

pub fn yoy(change: YoyChange) -> String {
    match change {
        YoyChange::Change(pct) => format!("{pct:.2}%"),
        YoyChange::MissingPeriod => "–".to_string(),
        YoyChange::ZeroBaseline => "n/a".to_string(),
    }
}
