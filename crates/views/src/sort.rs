use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::lenient;
use thiserror::Error;

use crate::columns::OrderColumn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Descending is the ascending result reversed, never a separate comparator.
    pub fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort direction '{0}', expected 'asc' or 'desc'")]
pub struct UnknownDirection(pub String);

impl FromStr for SortDirection {
    type Err = UnknownDirection;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(UnknownDirection(raw.to_string())),
        }
    }
}

/// Comparable type a column is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Number,
    Text,
    Date,
}

/// A cell value reduced to something with a total order.
///
/// Variant order matters: keys of different kinds never meet in one column,
/// and `Missing` sorts after every present value when ascending.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number(Decimal),
    Text(String),
    Date(NaiveDate),
    Missing,
}

impl SortKey {
    pub fn number(value: Option<Decimal>) -> Self {
        value.map_or(SortKey::Missing, SortKey::Number)
    }

    pub fn text(value: Option<&str>) -> Self {
        value.map_or(SortKey::Missing, |raw| SortKey::Text(raw.to_string()))
    }

    pub fn date(value: Option<NaiveDate>) -> Self {
        value.map_or(SortKey::Missing, SortKey::Date)
    }

    /// Reads raw text as the declared kind. Text that does not parse as that
    /// kind is `Missing`.
    pub fn parse(kind: ColumnKind, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return SortKey::Missing;
        };
        match kind {
            ColumnKind::Text => SortKey::Text(raw.to_string()),
            ColumnKind::Number => SortKey::number(Decimal::from_str(raw.trim()).ok()),
            ColumnKind::Date => SortKey::date(lenient::parse_date(raw)),
        }
    }
}

pub trait Sortable {
    type Column: Copy;

    fn sort_key(&self, column: Self::Column) -> SortKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: OrderColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: OrderColumn::OrderId,
            direction: SortDirection::Asc,
        }
    }
}

/// Sorts `items` with `compare`, breaking ties by input position in both
/// directions.
pub fn stable_sort_by<T, F>(items: Vec<T>, direction: SortDirection, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut indexed: Vec<(usize, T)> = items.into_iter().enumerate().collect();
    indexed.sort_by(|(left_index, left), (right_index, right)| {
        direction
            .apply(compare(left, right))
            .then_with(|| left_index.cmp(right_index))
    });
    indexed.into_iter().map(|(_, item)| item).collect()
}

/// Sorts rows by one column, computing each row's key once.
pub fn sort_rows<T: Sortable>(rows: Vec<T>, column: T::Column, direction: SortDirection) -> Vec<T> {
    let keyed: Vec<(SortKey, T)> = rows
        .into_iter()
        .map(|row| (row.sort_key(column), row))
        .collect();
    stable_sort_by(keyed, direction, |(left, _), (right, _)| left.cmp(right))
        .into_iter()
        .map(|(_, row)| row)
        .collect()
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
