//! Page view-models: pure derivations of display rows from the catalog.

pub mod dashboard;
pub mod detail;
pub mod marketplace;
pub mod news;
pub mod p2p;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Column value a table can be sorted by.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Sorts rows by a column.
///
/// Ascending is a stable sort. Descending is the exact reverse of the
/// ascending order, so flipping the direction always mirrors the table.
pub fn sort_rows<T, F>(rows: &mut [T], key: F, direction: SortDirection)
where
    F: Fn(&T) -> SortValue,
{
    rows.sort_by(|a, b| key(a).compare(&key(b)));
    if direction == SortDirection::Desc {
        rows.reverse();
    }
}

/// Case-insensitive substring match over any of the fields. Blank queries match everything.
pub fn matches_query(query: Option<&str>, fields: &[&str]) -> bool {
    let needle = match query.map(str::trim) {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return true,
    };
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_mirrors_ascending() {
        let values = vec![3.0, 1.0, 2.0, 1.0, 5.0, 2.0];
        let mut asc: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
        let mut desc = asc.clone();
        sort_rows(&mut asc, |r| SortValue::Number(r.1), SortDirection::Asc);
        sort_rows(&mut desc, |r| SortValue::Number(r.1), SortDirection::Asc.toggle());

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn ascending_sort_is_stable_on_ties() {
        let mut rows = vec![(0, 2.0), (1, 1.0), (2, 2.0), (3, 1.0)];
        sort_rows(&mut rows, |r| SortValue::Number(r.1), SortDirection::Asc);
        let order: Vec<usize> = rows.iter().map(|r| r.0).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let mut rows = vec!["berlin", "Austin", "Cancun"];
        sort_rows(&mut rows, |r| SortValue::Text(r.to_string()), SortDirection::Asc);
        assert_eq!(rows, vec!["Austin", "berlin", "Cancun"]);
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches_query(None, &["x"]));
        assert!(matches_query(Some("  "), &["x"]));
        assert!(matches_query(Some("DUB"), &["L-1001", "Dubai"]));
        assert!(!matches_query(Some("porto"), &["Lisbon"]));
    }

    #[test]
    fn direction_toggles_back_and_forth() {
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggle().toggle(), SortDirection::Desc);
    }
}
