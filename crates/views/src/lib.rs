//! Renderer-agnostic view models for the sales dashboard.
//!
//! Everything here is synchronous: rows are projected from fetched orders,
//! sorted by a typed column and turned into formatted cells that the CLI and
//! the desktop GUI draw as they see fit.

pub mod cards;
pub mod columns;
pub mod format;
pub mod projection;
pub mod sort;
pub mod table;

pub use cards::{summary_cards, CardTone, SummaryCard};
pub use columns::{OrderColumn, UnknownColumn};
pub use projection::{project_rows, row_count};
pub use sort::{
    sort_rows, stable_sort_by, ColumnKind, SortDirection, SortKey, SortSpec, Sortable,
    UnknownDirection,
};
pub use table::{legacy_orders_table, orders_table, Align, HeaderCell, TableView};
