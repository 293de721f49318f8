/// NavigationProvider - snapshot, compute, apply
///
/// `GridHost` is the capability interface a host adapter implements over its
/// grid widget; `NavigationProvider` adds the navigation methods on top of
/// it. Every call takes one snapshot of the host, evaluates one intent
/// against it, and issues at most one `select_cell` before returning.
use tracing::debug;

use crate::grid::{ColumnId, GridState, Selection};
use crate::navigator::{self, NavIntent};

/// What the navigation core needs from a host grid widget.
///
/// `select_cell` must be idempotent: applying the current selection again is
/// safe and changes nothing.
pub trait GridHost {
    /// Total number of rows in the view.
    fn row_count(&self) -> usize;

    /// Currently selected cell as (row, logical column), if any.
    fn current_selection(&self) -> Option<(usize, ColumnId)>;

    /// Number of fully visible rows in the viewport.
    fn page_size(&self) -> usize;

    /// Logical ids of the visible columns, ordered left to right.
    fn visible_columns_in_visual_order(&self) -> Vec<ColumnId>;

    /// Apply a new selection.
    fn select_cell(&mut self, row: usize, column: ColumnId);
}

/// Navigation methods over any [`GridHost`].
pub trait NavigationProvider: GridHost {
    /// Read-only projection of the host state for one navigation call.
    fn snapshot(&self) -> GridState {
        let mut state =
            GridState::new(self.row_count()).with_page_size(self.page_size());
        if let Some((row, column)) = self.current_selection() {
            state = state.with_selection(row, column);
        }
        state.with_column_order(self.visible_columns_in_visual_order())
    }

    /// Evaluate an intent against the current host state and apply the
    /// result. Returns what was applied, or None when the intent was a
    /// no-op (boundary, empty view, hidden column).
    fn navigate(&mut self, intent: NavIntent) -> Option<Selection> {
        let state = self.snapshot();
        let result = navigator::navigate(&state, intent);
        debug!(target: "provider",
               "navigate: intent={} current={:?} -> {:?}",
               intent.action_name(), state.current(), result);
        if let Some(selection) = result {
            self.select_cell(selection.row, selection.column);
        }
        result
    }

    fn next_row(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::NextRow)
    }

    fn prev_row(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::PrevRow)
    }

    fn page_forward(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::PageForward)
    }

    fn page_backward(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::PageBackward)
    }

    fn first_row(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::FirstRow)
    }

    fn last_row(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::LastRow)
    }

    fn visual_left(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::VisualLeft)
    }

    fn visual_right(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::VisualRight)
    }

    fn visual_home(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::VisualHome)
    }

    fn visual_end(&mut self) -> Option<Selection> {
        self.navigate(NavIntent::VisualEnd)
    }
}

impl<T: GridHost + ?Sized> NavigationProvider for T {}
