/// TableView - an in-memory table with a visible-column projection
///
/// The demo's stand-in for a host grid widget: headers plus string rows,
/// with a projection of visible columns kept in visual order so columns can
/// be hidden and dragged without touching the underlying data. Implements
/// [`GridHost`], which is all the navigation layer ever sees of it.
use tracing::debug;

use crate::grid::ColumnId;
use crate::provider::GridHost;

pub struct TableView {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,

    /// Logical column ids in visual (left-to-right) order; hidden columns
    /// are simply absent
    visible_columns: Vec<ColumnId>,

    /// Currently selected cell as (row, logical column)
    selected: Option<(usize, ColumnId)>,

    /// First row shown in the viewport
    scroll_offset: usize,

    /// Rows the viewport can show at once
    viewport_rows: usize,
}

impl TableView {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let visible_columns = (0..headers.len()).collect();
        let selected = if rows.is_empty() { None } else { Some((0, 0)) };
        Self {
            headers,
            rows,
            visible_columns,
            selected,
            scroll_offset: 0,
            viewport_rows: 1,
        }
    }

    /// Total number of columns, hidden ones included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn header(&self, column: ColumnId) -> Option<&str> {
        self.headers.get(column).map(String::as_str)
    }

    pub fn cell(&self, row: usize, column: ColumnId) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Visible columns in visual order.
    pub fn visible_column_indices(&self) -> &[ColumnId] {
        &self.visible_columns
    }

    pub fn selected(&self) -> Option<(usize, ColumnId)> {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Tell the view how tall its viewport currently is. Called by the
    /// renderer before each frame; re-clamps the scroll position.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.scroll_to_selection();
    }

    /// Hide the selected column. The selection moves to the nearest column
    /// that is still visible (preferring the one to the left).
    pub fn hide_selected_column(&mut self) {
        let Some((row, column)) = self.selected else {
            return;
        };
        let Some(position) = self.visual_position(column) else {
            return;
        };
        if self.visible_columns.len() == 1 {
            debug!(target: "table_view", "hide: refusing to hide the last visible column");
            return;
        }
        self.visible_columns.retain(|&id| id != column);
        let fallback = self.visible_columns[position.saturating_sub(1).min(self.visible_columns.len() - 1)];
        self.selected = Some((row, fallback));
        debug!(target: "table_view", "hide: column {} hidden, selection moved to {}", column, fallback);
    }

    /// Restore every hidden column at its original (logical) position.
    pub fn unhide_all_columns(&mut self) {
        self.visible_columns = (0..self.headers.len()).collect();
    }

    /// Swap the selected column with its left neighbor in visual order.
    /// Stops at the edge, no wraparound.
    pub fn move_selected_column_left(&mut self) -> bool {
        let Some(position) = self.selected.and_then(|(_, c)| self.visual_position(c)) else {
            return false;
        };
        if position == 0 {
            return false;
        }
        self.visible_columns.swap(position - 1, position);
        true
    }

    /// Swap the selected column with its right neighbor in visual order.
    pub fn move_selected_column_right(&mut self) -> bool {
        let Some(position) = self.selected.and_then(|(_, c)| self.visual_position(c)) else {
            return false;
        };
        if position + 1 >= self.visible_columns.len() {
            return false;
        }
        self.visible_columns.swap(position, position + 1);
        true
    }

    fn visual_position(&self, column: ColumnId) -> Option<usize> {
        self.visible_columns.iter().position(|&id| id == column)
    }

    fn scroll_to_selection(&mut self) {
        let Some((row, _)) = self.selected else {
            return;
        };
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + self.viewport_rows {
            self.scroll_offset = row + 1 - self.viewport_rows;
        }
    }
}

impl GridHost for TableView {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn current_selection(&self) -> Option<(usize, ColumnId)> {
        self.selected
    }

    fn page_size(&self) -> usize {
        self.viewport_rows
    }

    fn visible_columns_in_visual_order(&self) -> Vec<ColumnId> {
        self.visible_columns.clone()
    }

    fn select_cell(&mut self, row: usize, column: ColumnId) {
        self.selected = Some((row, column));
        self.scroll_to_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::NavigationProvider;

    fn sample() -> TableView {
        let headers = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let rows = (0..20)
            .map(|i| (0..4).map(|c| format!("r{}c{}", i, c)).collect())
            .collect();
        TableView::new(headers, rows)
    }

    #[test]
    fn test_new_selects_first_cell() {
        let view = sample();
        assert_eq!(view.selected(), Some((0, 0)));
        assert_eq!(view.visible_column_indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_hide_moves_selection_left() {
        let mut view = sample();
        view.select_cell(3, 2);
        view.hide_selected_column();
        assert_eq!(view.visible_column_indices(), &[0, 1, 3]);
        assert_eq!(view.selected(), Some((3, 1)));
    }

    #[test]
    fn test_hide_first_column_moves_selection_right() {
        let mut view = sample();
        view.select_cell(0, 0);
        view.hide_selected_column();
        assert_eq!(view.visible_column_indices(), &[1, 2, 3]);
        assert_eq!(view.selected(), Some((0, 1)));
    }

    #[test]
    fn test_last_visible_column_cannot_be_hidden() {
        let mut view = sample();
        for _ in 0..4 {
            view.hide_selected_column();
        }
        assert_eq!(view.visible_column_indices().len(), 1);
    }

    #[test]
    fn test_unhide_restores_logical_order() {
        let mut view = sample();
        view.select_cell(0, 1);
        view.hide_selected_column();
        view.unhide_all_columns();
        assert_eq!(view.visible_column_indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_move_column_stops_at_edges() {
        let mut view = sample();
        view.select_cell(0, 0);
        assert!(!view.move_selected_column_left());
        assert!(view.move_selected_column_right());
        assert_eq!(view.visible_column_indices(), &[1, 0, 2, 3]);

        view.select_cell(0, 3);
        assert!(!view.move_selected_column_right());
    }

    #[test]
    fn test_navigation_follows_moved_columns() {
        let mut view = sample();
        view.select_cell(0, 0);
        view.move_selected_column_right();
        // Visual order is now [1, 0, 2, 3]; left of column 0 is column 1
        assert_eq!(view.visual_left().map(|s| s.column), Some(1));
    }

    #[test]
    fn test_select_cell_scrolls_viewport() {
        let mut view = sample();
        view.set_viewport_rows(5);
        view.select_cell(12, 0);
        assert_eq!(view.scroll_offset(), 8);
        view.select_cell(2, 0);
        assert_eq!(view.scroll_offset(), 2);
    }

    #[test]
    fn test_page_size_tracks_viewport() {
        let mut view = sample();
        view.set_viewport_rows(7);
        assert_eq!(view.page_size(), 7);
        // Page forward from row 0 lands on row 6 (page_size - 1)
        assert_eq!(view.page_forward().map(|s| s.row), Some(6));
    }
}
