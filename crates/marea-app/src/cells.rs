// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{CellValue, Tone};

/// Display form of one cell: empty for null, grouped digits for numbers,
/// text as-is. Never fails on partial data.
pub fn format_cell(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::Integer(value) => format_grouped_i64(*value),
        CellValue::Float(value) => format_grouped_f64(*value),
        CellValue::Text(value) => value.clone(),
    }
}

fn format_grouped_i64(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_digits(value.unsigned_abs()))
}

// Fractions round to at most three digits with trailing zeros trimmed,
// matching default locale number formatting.
fn format_grouped_f64(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let absolute = value.abs();
    if absolute >= 9.0e15 {
        return format!("{sign}{absolute}");
    }

    let scaled = (absolute * 1000.0).round() as u64;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;
    if fraction == 0 {
        return format!("{sign}{}", group_digits(whole));
    }

    let mut digits = format!("{fraction:03}");
    while digits.ends_with('0') {
        digits.pop();
    }
    format!("{sign}{}.{digits}", group_digits(whole))
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == offset % 3 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Columns whose key mentions "status" render a tone badge instead of the
/// formatted scalar.
pub fn is_status_column(key: &str) -> bool {
    key.to_lowercase().contains("status")
}

pub fn classify_status(value: &str) -> Tone {
    match value.trim().to_lowercase().as_str() {
        "complete" | "success" | "paid" => Tone::Success,
        "pending" | "hold" | "processing" => Tone::Info,
        "failed" | "error" | "canceled" => Tone::Danger,
        _ => Tone::Neutral,
    }
}
