// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use marea_app::{Align, CellValue, ColumnSpec, Message, Role, Row, TableSpec};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Built-in orders fixture shown when no data files are configured.
pub fn demo_table() -> TableSpec {
    let columns = vec![
        ColumnSpec::new("id", "ID").sized(8),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("quantity", "Quantity")
            .aligned(Align::Right)
            .sized(12),
        ColumnSpec::new("price", "Price").aligned(Align::Right).sized(12),
        ColumnSpec::new("status", "Status")
            .aligned(Align::Center)
            .sized(14),
    ];

    let rows = [
        (1001, "Atlantic Salmon", 12, 199.99, "Complete"),
        (1002, "Pacific Mackerel", 8, 89.50, "Pending"),
        (1003, "Yellowfin Tuna", 4, 349.00, "Failed"),
        (1004, "Swordfish Steaks", 22, 129.00, "Processing"),
        (1005, "Sea Scallops", 16, 249.00, "Paid"),
        (1006, "Halibut Fillet", 6, 279.00, "Pending"),
    ]
    .into_iter()
    .map(|(id, name, quantity, price, status)| {
        let mut row = Row::new();
        row.insert("id", CellValue::Integer(id));
        row.insert("name", CellValue::from(name));
        row.insert("quantity", CellValue::Integer(quantity));
        row.insert("price", CellValue::Float(price));
        row.insert("status", CellValue::from(status));
        row
    })
    .collect();

    TableSpec::new(columns, rows)
        .captioned("Orders")
        .labeled("Orders table")
}

/// Built-in conversation fixture: one exchange per role, plus a loading
/// result and an empty result.
pub fn demo_conversation() -> Vec<Message> {
    let result_rows = demo_table().rows.into_iter().take(3).collect::<Vec<_>>();

    vec![
        Message::text(Role::System, "Connected to the orders warehouse.")
            .timestamped("2026-08-25T14:05:12Z"),
        Message::text(Role::User, "Which orders came in this morning?")
            .timestamped("2026-08-25T14:06:41Z"),
        Message::text(Role::Assistant, "Three orders so far; full rows below.")
            .timestamped("2026-08-25T14:06:58Z"),
        Message::result(
            Some("SELECT id, name, quantity, price, status FROM orders WHERE created_at >= date('now')"),
            result_rows,
        )
        .timestamped("2026-08-25T14:07:02Z"),
        Message::text(Role::Error, "Upstream query timed out; showing cached rows.")
            .timestamped("2026-08-25T14:08:10Z"),
        Message {
            role: Role::Result,
            sql: Some("SELECT * FROM orders WHERE status = 'Refunded'".to_owned()),
            rows: Some(Vec::new()),
            timestamp: Some("2026-08-25T14:09:27Z".to_owned()),
            ..Message::default()
        },
        Message {
            role: Role::Result,
            is_loading: true,
            timestamp: Some("2026-08-25T14:10:00Z".to_owned()),
            ..Message::default()
        },
    ]
}

pub fn load_table(path: &Path) -> Result<TableSpec> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read table file {}", path.display()))?;
    let table: TableSpec = serde_json::from_str(&raw)
        .with_context(|| format!("parse table JSON {}", path.display()))?;
    validate_table(&table).with_context(|| format!("validate table {}", path.display()))?;
    Ok(table)
}

pub fn load_conversation(path: &Path) -> Result<Vec<Message>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read conversation file {}", path.display()))?;
    let messages: Vec<Message> = serde_json::from_str(&raw)
        .with_context(|| format!("parse conversation JSON {}", path.display()))?;
    Ok(messages)
}

/// Column keys must be non-empty and unique within the table; rows may carry
/// extra keys (they are simply never displayed).
pub fn validate_table(table: &TableSpec) -> Result<()> {
    if table.columns.is_empty() {
        bail!("table has no columns");
    }

    let mut seen = BTreeSet::new();
    for column in &table.columns {
        if column.key.trim().is_empty() {
            bail!("column with header {:?} has an empty key", column.header);
        }
        if !seen.insert(column.key.as_str()) {
            bail!("duplicate column key {:?}", column.key);
        }
    }

    Ok(())
}
