use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::FieldName;

/// One dated row of a historical result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    date: NaiveDate,
    cells: Vec<Option<Decimal>>,
}

impl TableRow {
    pub(crate) fn new(date: NaiveDate, cells: Vec<Option<Decimal>>) -> Self {
        Self { date, cells }
    }

    /// The date of this row.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The cells of this row, in the column order of the table.
    /// `None` marks a point for which the service has no history.
    pub fn cells(&self) -> &[Option<Decimal>] {
        &self.cells
    }
}

/// Result of a historical range lookup: a table indexed by date with one
/// column per requested field, in the order requested.
///
/// Rows keep the ordering of the response (ascending dates). Missing
/// historical points are `None` cells, never an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatedTable {
    fields: Vec<FieldName>,
    rows: Vec<TableRow>,
}

impl DatedTable {
    pub(crate) fn new(fields: Vec<FieldName>, rows: Vec<TableRow>) -> Self {
        debug_assert!(rows.iter().all(|r| r.cells.len() == fields.len()));
        Self { fields, rows }
    }

    /// The column names, in request order.
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// The rows, in response order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// The dates of the rows, in response order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.rows.iter().map(TableRow::date)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cell for a given date and field, if both exist in the table.
    ///
    /// The outer `Option` is presence in the table; the inner one is the
    /// missing-value marker.
    pub fn cell(&self, date: NaiveDate, field: &str) -> Option<Option<Decimal>> {
        let col = self.column_index(field)?;
        let row = self.rows.iter().find(|r| r.date == date)?;
        Some(row.cells[col])
    }

    /// All cells of one column, in row order.
    pub fn column(&self, field: &str) -> Option<Vec<Option<Decimal>>> {
        let col = self.column_index(field)?;
        Some(self.rows.iter().map(|r| r.cells[col]).collect())
    }

    fn column_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }
}
