/// GridState - an immutable snapshot of a tabular view
///
/// Navigation never talks to a live widget. The host adapter builds a fresh
/// snapshot per keypress, the navigator computes against it, and the result
/// is handed back to the host to apply. This keeps the core free of any
/// shared mutable state.
use std::collections::HashSet;

/// Stable logical identifier of a column's underlying data, distinct from
/// its current visual position (columns may be dragged or hidden).
pub type ColumnId = usize;

/// The cell a navigation operation wants selected next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub row: usize,
    pub column: ColumnId,
}

/// Read-only description of the grid at the moment of a keypress.
#[derive(Debug, Clone)]
pub struct GridState {
    /// Total number of rows in the view
    row_count: usize,

    /// Currently selected cell, if any
    current: Option<(usize, ColumnId)>,

    /// Number of fully visible rows in the viewport, never below 1
    page_size: usize,

    /// Logical column ids ordered by visual (left-to-right) position,
    /// hidden columns excluded
    column_order: Vec<ColumnId>,
}

impl GridState {
    /// Create a snapshot with no selection, a one-row page, and no columns.
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            current: None,
            page_size: 1,
            column_order: Vec::new(),
        }
    }

    /// Set the currently selected cell.
    pub fn with_selection(mut self, row: usize, column: ColumnId) -> Self {
        self.current = Some((row, column));
        self
    }

    /// Set the viewport page size. Values below 1 are clamped to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the visual column order. A column's visual position must be
    /// well-defined, so repeated ids keep their first occurrence only.
    pub fn with_column_order(mut self, order: Vec<ColumnId>) -> Self {
        let mut seen = HashSet::with_capacity(order.len());
        self.column_order = order.into_iter().filter(|id| seen.insert(*id)).collect();
        self
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn current(&self) -> Option<(usize, ColumnId)> {
        self.current
    }

    pub fn current_row(&self) -> Option<usize> {
        self.current.map(|(row, _)| row)
    }

    pub fn current_column(&self) -> Option<ColumnId> {
        self.current.map(|(_, column)| column)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Visible columns in visual (left-to-right) order.
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Visual index of a column, or None when the column is hidden or
    /// unknown to this snapshot.
    pub fn visual_position(&self, column: ColumnId) -> Option<usize> {
        self.column_order.iter().position(|&id| id == column)
    }
}
