// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{CellValue, Row, SortDirection};
use std::cmp::Ordering;

/// The single active sort column and direction for one table instance.
/// Recomputed per interaction, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }
}

/// Result of toggling a sort column: the next state plus the human-readable
/// announcement surfaced for assistive consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortActivation {
    pub state: SortState,
    pub announcement: String,
}

/// Toggle contract: activating the active key flips direction, activating a
/// different key starts ascending.
pub fn activate(current: &SortState, key: &str) -> SortActivation {
    let direction = if current.key.as_deref() == Some(key) {
        current.direction.toggled()
    } else {
        SortDirection::Asc
    };
    SortActivation {
        state: SortState {
            key: Some(key.to_owned()),
            direction,
        },
        announcement: format!("Sorted by {key} {}", direction.as_str()),
    }
}

/// Ascending comparison of two cells: missing/null sorts before any value,
/// two numbers compare numerically, everything else compares as
/// case-insensitive text on the string coercion.
pub fn compare_cells(left: Option<&CellValue>, right: Option<&CellValue>) -> Ordering {
    match (non_null(left), non_null(right)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => match (left.as_number(), right.as_number()) {
            (Some(left), Some(right)) => left.total_cmp(&right),
            _ => left
                .coerce_string()
                .to_lowercase()
                .cmp(&right.coerce_string().to_lowercase()),
        },
    }
}

fn non_null(cell: Option<&CellValue>) -> Option<&CellValue> {
    cell.filter(|value| !value.is_null())
}

/// Pure ordered view of the rows under the given sort state. No active key
/// means identity order. The sort is stable, so equal keys keep their
/// relative input order across re-renders.
pub fn sort_rows(rows: &[Row], state: &SortState) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    let Some(key) = &state.key else {
        return sorted;
    };

    sorted.sort_by(|left, right| {
        let order = compare_cells(left.get(key), right.get(key));
        match state.direction {
            SortDirection::Asc => order,
            SortDirection::Desc => order.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::{SortState, activate, sort_rows};
    use crate::model::{CellValue, Row, SortDirection};

    fn row(pairs: &[(&str, CellValue)]) -> Row {
        let mut row = Row::new();
        for (key, value) in pairs {
            row.insert(key, value.clone());
        }
        row
    }

    fn status_rows() -> Vec<Row> {
        vec![
            row(&[("id", 1.into()), ("status", "Pending".into())]),
            row(&[("id", 2.into()), ("status", "Complete".into())]),
            row(&[("id", 3.into()), ("status", "Failed".into())]),
        ]
    }

    fn column_values(rows: &[Row], key: &str) -> Vec<CellValue> {
        rows.iter()
            .map(|row| row.get(key).cloned().unwrap_or(CellValue::Null))
            .collect()
    }

    #[test]
    fn no_active_key_keeps_input_order() {
        let rows = status_rows();
        let sorted = sort_rows(&rows, &SortState::default());
        assert_eq!(sorted, rows);
    }

    #[test]
    fn string_sort_is_case_insensitive_ascending() {
        let rows = vec![
            row(&[("name", "pacific mackerel".into())]),
            row(&[("name", "Atlantic Salmon".into())]),
            row(&[("name", "halibut".into())]),
        ];
        let state = SortState {
            key: Some("name".to_owned()),
            direction: SortDirection::Asc,
        };

        let sorted = sort_rows(&rows, &state);
        assert_eq!(
            column_values(&sorted, "name"),
            vec![
                "Atlantic Salmon".into(),
                "halibut".into(),
                "pacific mackerel".into(),
            ],
        );
    }

    #[test]
    fn status_sort_matches_expected_order() {
        let state = SortState {
            key: Some("status".to_owned()),
            direction: SortDirection::Asc,
        };
        let sorted = sort_rows(&status_rows(), &state);
        assert_eq!(
            column_values(&sorted, "status"),
            vec!["Complete".into(), "Failed".into(), "Pending".into()],
        );
    }

    #[test]
    fn numeric_sort_orders_by_value_both_directions() {
        let rows = vec![
            row(&[("qty", 12.into())]),
            row(&[("qty", 4.into())]),
            row(&[("qty", CellValue::Float(8.5))]),
        ];
        let ascending = sort_rows(
            &rows,
            &SortState {
                key: Some("qty".to_owned()),
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(
            column_values(&ascending, "qty"),
            vec![4.into(), CellValue::Float(8.5), 12.into()],
        );

        let descending = sort_rows(
            &rows,
            &SortState {
                key: Some("qty".to_owned()),
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(
            column_values(&descending, "qty"),
            vec![12.into(), CellValue::Float(8.5), 4.into()],
        );
    }

    #[test]
    fn nulls_sort_first_ascending_and_last_descending() {
        let rows = vec![
            row(&[("price", 10.into())]),
            row(&[("price", CellValue::Null)]),
            row(&[("id", 99.into())]),
            row(&[("price", 2.into())]),
        ];

        let ascending = sort_rows(
            &rows,
            &SortState {
                key: Some("price".to_owned()),
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(
            column_values(&ascending, "price"),
            vec![CellValue::Null, CellValue::Null, 2.into(), 10.into()],
        );

        let descending = sort_rows(
            &rows,
            &SortState {
                key: Some("price".to_owned()),
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(
            column_values(&descending, "price"),
            vec![10.into(), 2.into(), CellValue::Null, CellValue::Null],
        );
    }

    #[test]
    fn equal_keys_keep_relative_input_order() {
        let rows = vec![
            row(&[("id", 1.into()), ("status", "Pending".into())]),
            row(&[("id", 2.into()), ("status", "pending".into())]),
            row(&[("id", 3.into()), ("status", "Complete".into())]),
            row(&[("id", 4.into()), ("status", "PENDING".into())]),
        ];
        let state = SortState {
            key: Some("status".to_owned()),
            direction: SortDirection::Asc,
        };

        let sorted = sort_rows(&rows, &state);
        assert_eq!(
            column_values(&sorted, "id"),
            vec![3.into(), 1.into(), 2.into(), 4.into()],
        );
    }

    #[test]
    fn activation_starts_ascending_then_flips() {
        let first = activate(&SortState::default(), "price");
        assert_eq!(first.state.key.as_deref(), Some("price"));
        assert_eq!(first.state.direction, SortDirection::Asc);
        assert_eq!(first.announcement, "Sorted by price asc");

        let second = activate(&first.state, "price");
        assert_eq!(second.state.direction, SortDirection::Desc);
        assert_eq!(second.announcement, "Sorted by price desc");

        let third = activate(&second.state, "price");
        assert_eq!(third.state.direction, SortDirection::Asc);
    }

    #[test]
    fn activating_another_key_resets_to_ascending() {
        let state = SortState {
            key: Some("price".to_owned()),
            direction: SortDirection::Desc,
        };
        let toggled = activate(&state, "status");
        assert_eq!(toggled.state.key.as_deref(), Some("status"));
        assert_eq!(toggled.state.direction, SortDirection::Asc);
    }

    #[test]
    fn sorting_does_not_mutate_input() {
        let rows = status_rows();
        let before = rows.clone();
        let _ = sort_rows(
            &rows,
            &SortState {
                key: Some("status".to_owned()),
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(rows, before);
    }
}
