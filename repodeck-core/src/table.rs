//! Tabular view over listed repositories
//!
//! `RepoTable` presents repositories as a grid with a fixed set of labelled
//! columns. Columns are described by a static schema of `(label, accessor)`
//! pairs; column `i` always reads the same field and carries the same label.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::repository::RepositoryRecord;
use crate::dto::repository::RawRepository;

/// Which index of a table access was out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors raised by table accessors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{axis} index {index} out of range (count {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
}

/// Value of a single cell
///
/// Variants are ordered so that `Empty` (a null in a nullable column) sorts
/// before any value. Within one column all non-empty cells share a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cell<'a> {
    Empty,
    Flag(bool),
    Integer(u64),
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Flag(true) => f.write_str("yes"),
            Cell::Flag(false) => f.write_str("no"),
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Text(text) => f.write_str(text),
            Cell::Timestamp(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// A labelled column bound to one record field
pub struct Column {
    pub label: &'static str,
    accessor: fn(&RepositoryRecord) -> Cell<'_>,
}

impl Column {
    pub fn value<'a>(&self, record: &'a RepositoryRecord) -> Cell<'a> {
        (self.accessor)(record)
    }
}

fn name(r: &RepositoryRecord) -> Cell<'_> {
    Cell::Text(&r.name)
}

fn is_private(r: &RepositoryRecord) -> Cell<'_> {
    Cell::Flag(r.is_private)
}

fn size_kb(r: &RepositoryRecord) -> Cell<'_> {
    Cell::Integer(r.size_kb)
}

fn owner_login(r: &RepositoryRecord) -> Cell<'_> {
    Cell::Text(&r.owner_login)
}

fn html_url(r: &RepositoryRecord) -> Cell<'_> {
    Cell::Text(&r.html_url)
}

fn clone_url(r: &RepositoryRecord) -> Cell<'_> {
    Cell::Text(&r.clone_url)
}

fn created_at(r: &RepositoryRecord) -> Cell<'_> {
    Cell::Timestamp(r.created_at)
}

fn pushed_at(r: &RepositoryRecord) -> Cell<'_> {
    r.pushed_at.map_or(Cell::Empty, Cell::Timestamp)
}

fn description(r: &RepositoryRecord) -> Cell<'_> {
    r.description.as_deref().map_or(Cell::Empty, Cell::Text)
}

/// Column schema, in display order
pub static COLUMNS: [Column; 9] = [
    Column { label: "Name", accessor: name },
    Column { label: "Private?", accessor: is_private },
    Column { label: "Size", accessor: size_kb },
    Column { label: "Owner", accessor: owner_login },
    Column { label: "URL", accessor: html_url },
    Column { label: "Clone URL", accessor: clone_url },
    Column { label: "Date Created", accessor: created_at },
    Column { label: "Last Pushed?", accessor: pushed_at },
    Column { label: "Description", accessor: description },
];

/// Repositories arranged as rows under the fixed column schema
#[derive(Debug, Clone, Default)]
pub struct RepoTable {
    rows: Vec<RepositoryRecord>,
}

impl RepoTable {
    pub fn new(rows: Vec<RepositoryRecord>) -> Self {
        Self { rows }
    }

    /// Build a table from raw listing entries, keeping API order
    pub fn from_raw(raw: impl IntoIterator<Item = RawRepository>) -> Self {
        Self::new(raw.into_iter().map(RepositoryRecord::from).collect())
    }

    pub fn column_count(&self) -> usize {
        COLUMNS.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_label(&self, column: usize) -> Result<&'static str, TableError> {
        Ok(self.column(column)?.label)
    }

    /// Find a column by its label, ignoring case
    pub fn column_index(&self, label: &str) -> Option<usize> {
        COLUMNS
            .iter()
            .position(|c| c.label.eq_ignore_ascii_case(label))
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<Cell<'_>, TableError> {
        let record = self.record(row)?;
        Ok(self.column(column)?.value(record))
    }

    pub fn record(&self, row: usize) -> Result<&RepositoryRecord, TableError> {
        self.rows.get(row).ok_or(TableError::IndexOutOfRange {
            axis: Axis::Row,
            index: row,
            len: self.rows.len(),
        })
    }

    /// Rows in their current order
    pub fn records(&self) -> &[RepositoryRecord] {
        &self.rows
    }

    /// Sort rows in place by one column
    ///
    /// The sort is stable in both directions: rows with equal values keep
    /// their previous relative order.
    pub fn sort(&mut self, column: usize, descending: bool) -> Result<(), TableError> {
        let column = self.column(column)?;
        self.rows
            .sort_by(|a, b| directed(column.value(a).cmp(&column.value(b)), descending));
        Ok(())
    }

    /// Sort rows in place by a key computed from the whole record
    pub fn sort_by<K, F>(&mut self, mut key: F, descending: bool)
    where
        K: Ord,
        F: FnMut(&RepositoryRecord) -> K,
    {
        self.rows
            .sort_by(|a, b| directed(key(a).cmp(&key(b)), descending));
    }

    fn column(&self, column: usize) -> Result<&'static Column, TableError> {
        COLUMNS.get(column).ok_or(TableError::IndexOutOfRange {
            axis: Axis::Column,
            index: column,
            len: COLUMNS.len(),
        })
    }
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(name: &str, size_kb: u64, pushed_day: Option<u32>) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            is_private: false,
            size_kb,
            owner_login: "nklkli".to_string(),
            html_url: format!("https://github.com/nklkli/{}", name),
            clone_url: format!("https://github.com/nklkli/{}.git", name),
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 12, 18, 52).unwrap(),
            pushed_at: pushed_day.map(|d| Utc.with_ymd_and_hms(2024, 7, d, 10, 0, 0).unwrap()),
            description: None,
        }
    }

    fn names(table: &RepoTable) -> Vec<&str> {
        table.records().iter().map(|r| r.name.as_str()).collect()
    }

    fn sizes(table: &RepoTable) -> Vec<u64> {
        table.records().iter().map(|r| r.size_kb).collect()
    }

    #[test]
    fn test_counts() {
        let table = RepoTable::new(vec![record("a", 1, None), record("b", 2, None)]);
        assert_eq!(table.column_count(), 9);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_column_labels() {
        let table = RepoTable::default();
        assert_eq!(table.column_label(0), Ok("Name"));
        assert_eq!(table.column_label(1), Ok("Private?"));
        assert_eq!(table.column_label(7), Ok("Last Pushed?"));
        assert_eq!(table.column_label(8), Ok("Description"));
    }

    #[test]
    fn test_column_label_out_of_range() {
        let table = RepoTable::default();
        assert_eq!(
            table.column_label(9),
            Err(TableError::IndexOutOfRange {
                axis: Axis::Column,
                index: 9,
                len: 9
            })
        );
    }

    #[test]
    fn test_cell_values() {
        let mut repo = record("webedifact", 8, None);
        repo.description = Some("EDIFACT tools".to_string());
        let table = RepoTable::new(vec![repo]);

        assert_eq!(table.cell(0, 0), Ok(Cell::Text("webedifact")));
        assert_eq!(table.cell(0, 1), Ok(Cell::Flag(false)));
        assert_eq!(table.cell(0, 2), Ok(Cell::Integer(8)));
        assert_eq!(table.cell(0, 7), Ok(Cell::Empty));
        assert_eq!(table.cell(0, 8), Ok(Cell::Text("EDIFACT tools")));
    }

    #[test]
    fn test_cell_out_of_range() {
        let table = RepoTable::new(vec![record("a", 1, None)]);
        assert!(matches!(
            table.cell(1, 0),
            Err(TableError::IndexOutOfRange { axis: Axis::Row, .. })
        ));
        assert!(matches!(
            table.cell(0, 9),
            Err(TableError::IndexOutOfRange { axis: Axis::Column, .. })
        ));
        assert!(table.record(1).is_err());
    }

    #[test]
    fn test_sort_by_name_is_stable() {
        let mut table = RepoTable::new(vec![
            record("b", 1, None),
            record("a", 2, None),
            record("a", 3, None),
        ]);

        table.sort(0, false).unwrap();

        assert_eq!(names(&table), vec!["a", "a", "b"]);
        assert_eq!(sizes(&table), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let mut table = RepoTable::new(vec![
            record("a", 1, None),
            record("b", 2, None),
            record("b", 3, None),
        ]);

        table.sort(0, true).unwrap();

        assert_eq!(names(&table), vec!["b", "b", "a"]);
        assert_eq!(sizes(&table), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_desc_then_asc_is_ascending() {
        let mut table = RepoTable::new(vec![
            record("c", 1, None),
            record("a", 2, None),
            record("b", 3, None),
        ]);

        table.sort(2, true).unwrap();
        assert_eq!(sizes(&table), vec![3, 2, 1]);

        table.sort(2, false).unwrap();
        assert_eq!(sizes(&table), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_puts_nulls_first() {
        let mut table = RepoTable::new(vec![
            record("late", 1, Some(20)),
            record("never", 2, None),
            record("early", 3, Some(5)),
        ]);

        table.sort(7, false).unwrap();

        assert_eq!(names(&table), vec!["never", "early", "late"]);
    }

    #[test]
    fn test_sort_invalid_column_leaves_rows() {
        let mut table = RepoTable::new(vec![record("b", 1, None), record("a", 2, None)]);
        assert!(table.sort(42, false).is_err());
        assert_eq!(names(&table), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_by_computed_key() {
        let mut table = RepoTable::new(vec![
            record("short", 10, None),
            record("much-longer", 10, None),
            record("mid-len", 5, None),
        ]);

        table.sort_by(|r| (r.size_kb, r.name.len()), true);

        assert_eq!(names(&table), vec!["much-longer", "short", "mid-len"]);
    }

    #[test]
    fn test_column_index_lookup() {
        let table = RepoTable::default();
        assert_eq!(table.column_index("size"), Some(2));
        assert_eq!(table.column_index("Last Pushed?"), Some(7));
        assert_eq!(table.column_index("stars"), None);
    }

    #[test]
    fn test_cell_display() {
        let at = Utc.with_ymd_and_hms(2024, 10, 2, 10, 1, 0).unwrap();
        assert_eq!(Cell::Timestamp(at).to_string(), "2024-10-02 10:01");
        assert_eq!(Cell::Flag(true).to_string(), "yes");
        assert_eq!(Cell::Empty.to_string(), "");
    }
}
