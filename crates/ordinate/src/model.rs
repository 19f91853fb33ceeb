//! Tabular data models.

use crate::signal::Signal;

/// What changed in a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChange {
    /// Values in the inclusive cell range changed.
    DataChanged {
        top_left: (usize, usize),
        bottom_right: (usize, usize),
    },
    RowsInserted { first: usize, count: usize },
    RowsRemoved { first: usize, count: usize },
    ColumnsInserted { first: usize, count: usize },
    ColumnsRemoved { first: usize, count: usize },
    /// Everything changed.
    Reset,
}

/// Row/column data source a diagram reads from.
pub trait DataModel {
    fn row_count(&self) -> usize;
    fn column_count(&self) -> usize;
    /// Value at `(row, column)`; `None` for missing or out-of-range cells.
    fn value(&self, row: usize, column: usize) -> Option<f64>;
    /// Emitted after every change.
    fn changed(&self) -> &Signal<ModelChange>;
}

/// Dense in-memory table.
#[derive(Debug, Default)]
pub struct TableModel {
    rows: usize,
    columns: usize,
    cells: Vec<Option<f64>>,
    changed: Signal<ModelChange>,
}

impl TableModel {
    /// Empty table of the given shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
            changed: Signal::new(),
        }
    }

    /// Table with one column per inner vector, in order.
    pub fn from_columns(columns: &[Vec<f64>]) -> Self {
        let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
        let mut model = Self::new(rows, columns.len());
        for (c, column) in columns.iter().enumerate() {
            for (r, value) in column.iter().enumerate() {
                model.cells[r * model.columns + c] = Some(*value);
            }
        }
        model
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Set one cell. Out-of-range cells are ignored.
    pub fn set_value(&mut self, row: usize, column: usize, value: Option<f64>) {
        let Some(index) = self.index(row, column) else {
            tracing::debug!(row, column, "set_value out of range");
            return;
        };
        if self.cells[index] == value {
            return;
        }
        self.cells[index] = value;
        self.changed.emit(&ModelChange::DataChanged {
            top_left: (row, column),
            bottom_right: (row, column),
        });
    }

    /// Insert `count` empty rows before `first`. `first` may equal the row
    /// count to append.
    pub fn insert_rows(&mut self, first: usize, count: usize) {
        if first > self.rows || count == 0 {
            return;
        }
        let at = first * self.columns;
        self.cells
            .splice(at..at, std::iter::repeat_n(None, count * self.columns));
        self.rows += count;
        self.changed.emit(&ModelChange::RowsInserted { first, count });
    }

    pub fn remove_rows(&mut self, first: usize, count: usize) {
        if count == 0 || first.checked_add(count).is_none_or(|end| end > self.rows) {
            return;
        }
        let start = first * self.columns;
        self.cells.drain(start..start + count * self.columns);
        self.rows -= count;
        self.changed.emit(&ModelChange::RowsRemoved { first, count });
    }

    /// Insert `count` empty columns before `first`.
    pub fn insert_columns(&mut self, first: usize, count: usize) {
        if first > self.columns || count == 0 {
            return;
        }
        let columns = self.columns + count;
        let mut cells = Vec::with_capacity(self.rows * columns);
        if self.columns == 0 {
            cells.resize(self.rows * columns, None);
        } else {
            for row in self.cells.chunks(self.columns) {
                cells.extend_from_slice(&row[..first]);
                cells.extend(std::iter::repeat_n(None, count));
                cells.extend_from_slice(&row[first..]);
            }
        }
        self.cells = cells;
        self.columns = columns;
        self.changed.emit(&ModelChange::ColumnsInserted { first, count });
    }

    pub fn remove_columns(&mut self, first: usize, count: usize) {
        if count == 0 || first.checked_add(count).is_none_or(|end| end > self.columns) {
            return;
        }
        let old = self.columns;
        let mut column = 0;
        self.cells.retain(|_| {
            let keep = !(first..first + count).contains(&(column % old));
            column += 1;
            keep
        });
        self.columns -= count;
        self.changed.emit(&ModelChange::ColumnsRemoved { first, count });
    }

    /// Replace every value with `columns`, emitting a single reset.
    pub fn reset(&mut self, columns: &[Vec<f64>]) {
        let fresh = Self::from_columns(columns);
        self.rows = fresh.rows;
        self.columns = fresh.columns;
        self.cells = fresh.cells;
        self.changed.emit(&ModelChange::Reset);
    }
}

impl DataModel for TableModel {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.index(row, column).and_then(|i| self.cells[i])
    }

    fn changed(&self) -> &Signal<ModelChange> {
        &self.changed
    }
}
