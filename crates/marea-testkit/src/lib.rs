// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use marea_app::{CellValue, Message, Role, Row};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

const SPECIES: [&str; 14] = [
    "Atlantic Salmon",
    "Pacific Mackerel",
    "Yellowfin Tuna",
    "Swordfish Steaks",
    "Sea Scallops",
    "Halibut Fillet",
    "Arctic Char",
    "Dover Sole",
    "King Crab Legs",
    "Rainbow Trout",
    "Branzino",
    "Monkfish Tail",
    "Red Snapper",
    "Blue Mussels",
];

const STATUSES: [&str; 8] = [
    "Complete",
    "Pending",
    "Failed",
    "Processing",
    "Paid",
    "Hold",
    "Canceled",
    "Shipped",
];

const QUESTION_TEMPLATES: [&str; 6] = [
    "What were the top sellers last week?",
    "Show revenue by status for this month.",
    "Which orders are still pending?",
    "How many units of salmon did we move?",
    "List failed orders with their totals.",
    "What is the average order value by species?",
];

const ANSWER_TEMPLATES: [&str; 4] = [
    "Here is the breakdown you asked for.",
    "Pulled the latest numbers from the orders ledger.",
    "These rows match your filter.",
    "Summary is below; totals exclude canceled orders.",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

fn reference_now() -> OffsetDateTime {
    // Fixed anchor keeps generated timestamps reproducible across runs.
    OffsetDateTime::from_unix_timestamp(1_756_080_000).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// Deterministic generator for order rows and conversation fixtures. Same
/// seed, same output, across platforms and runs.
#[derive(Debug, Clone)]
pub struct MarketFaker {
    rng: DeterministicRng,
    next_order_id: i64,
}

impl MarketFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_order_id: 1001,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    fn pick<'a>(&mut self, values: &[&'a str]) -> &'a str {
        values[self.rng.int_n(values.len())]
    }

    pub fn order_row(&mut self) -> Row {
        let id = self.next_order_id;
        self.next_order_id += 1;

        let name = self.pick(&SPECIES);
        let quantity = 1 + self.rng.int_n(40) as i64;
        let price_cents = 1_000 + self.rng.int_n(100_000) as i64;
        let status = self.pick(&STATUSES);

        let mut row = Row::new();
        row.insert("id", CellValue::Integer(id));
        row.insert("name", CellValue::from(name));
        row.insert("quantity", CellValue::Integer(quantity));
        row.insert("price", CellValue::Float((price_cents as f64) / 100.0));
        row.insert("status", CellValue::from(status));
        row
    }

    pub fn order_rows(&mut self, count: usize) -> Vec<Row> {
        (0..count).map(|_| self.order_row()).collect()
    }

    pub fn timestamp(&mut self) -> String {
        let offset_minutes = self.rng.int_n(60 * 24 * 30) as i64;
        let moment = reference_now() - Duration::minutes(offset_minutes);
        moment
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
    }

    pub fn question(&mut self) -> Message {
        let content = self.pick(&QUESTION_TEMPLATES).to_owned();
        let timestamp = self.timestamp();
        Message {
            role: Role::User,
            content,
            timestamp: Some(timestamp),
            ..Message::default()
        }
    }

    pub fn answer(&mut self) -> Message {
        let content = self.pick(&ANSWER_TEMPLATES).to_owned();
        let timestamp = self.timestamp();
        Message {
            role: Role::Assistant,
            content,
            timestamp: Some(timestamp),
            ..Message::default()
        }
    }

    pub fn result_message(&mut self, row_count: usize) -> Message {
        let rows = self.order_rows(row_count);
        let timestamp = self.timestamp();
        Message {
            role: Role::Result,
            sql: Some("SELECT id, name, quantity, price, status FROM orders".to_owned()),
            rows: Some(rows),
            timestamp: Some(timestamp),
            ..Message::default()
        }
    }

    /// A question/answer/result exchange per turn.
    pub fn conversation(&mut self, turns: usize) -> Vec<Message> {
        let mut messages = Vec::with_capacity(turns * 3);
        for _ in 0..turns {
            messages.push(self.question());
            messages.push(self.answer());
            let rows = 2 + self.rng.int_n(4);
            messages.push(self.result_message(rows));
        }
        messages
    }
}

pub fn species() -> &'static [&'static str] {
    &SPECIES
}

pub fn statuses() -> &'static [&'static str] {
    &STATUSES
}
