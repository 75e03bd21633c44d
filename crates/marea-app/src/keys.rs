// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::Message;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const DATETIME_WITH_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATETIME_WITHOUT_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
const HOUR_MINUTE: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// Stable identity for a message record. Priority: explicit id, then the
/// RFC 3339 rendering of a parseable timestamp, then a content hash. Total:
/// malformed timestamps fall through to the hash instead of failing.
pub fn derive_message_key(message: &Message) -> String {
    if let Some(id) = &message.id {
        return id.clone();
    }

    if let Some(raw) = &message.timestamp
        && let Some(parsed) = parse_timestamp(raw)
        && let Ok(iso) = parsed.format(&Rfc3339)
    {
        return iso;
    }

    let timestamp = message.timestamp.as_deref().unwrap_or_default();
    let seed = format!(
        "{}:{}:{}",
        message.role.as_str(),
        message.content,
        timestamp
    );
    format!("msg_{}", stable_hash(&seed))
}

/// Rolling multiply-add hash (seed 5381, multiplier 33) over UTF-16 code
/// units, folded into a 32-bit signed value and rendered in base-36.
pub fn stable_hash(input: &str) -> String {
    let mut hash: i32 = 5381;
    for unit in input.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(i32::from(unit));
    }
    to_base36(u64::from(hash.unsigned_abs()))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_owned();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM[:SS]` (assumed UTC), or integer unix
/// seconds. Anything else is None, never an error.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(parsed);
    }
    if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, DATETIME_WITH_SECONDS) {
        return Some(parsed.assume_utc());
    }
    if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, DATETIME_WITHOUT_SECONDS) {
        return Some(parsed.assume_utc());
    }
    if let Ok(seconds) = trimmed.parse::<i64>() {
        return OffsetDateTime::from_unix_timestamp(seconds).ok();
    }

    None
}

/// Hour:minute in 24-hour form; unparseable input yields an empty string.
pub fn format_time(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|parsed| parsed.format(HOUR_MINUTE).ok())
        .unwrap_or_default()
}
