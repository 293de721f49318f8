/// Navigator - the pure navigation core
///
/// One function per navigation intent, all taking a GridState snapshot and
/// returning the new selection, or None when the intent does not apply
/// (empty grid, no selection, already at a boundary, current column hidden).
/// Degenerate input never faults; keyboard navigation has to stay robust
/// against transient and empty views.
///
/// Row motions keep the current column; column motions keep the current row
/// and move through the visual (left-to-right) column order, which is
/// independent of logical column ids once columns have been dragged around
/// or hidden.
use tracing::debug;

use crate::grid::{GridState, Selection};

/// A single navigation intent, one per vim motion this crate handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIntent {
    NextRow,
    PrevRow,
    PageForward,
    PageBackward,
    FirstRow,
    LastRow,
    VisualLeft,
    VisualRight,
    VisualHome,
    VisualEnd,
}

impl NavIntent {
    /// Every intent, in presentation order.
    pub const ALL: [NavIntent; 10] = [
        NavIntent::NextRow,
        NavIntent::PrevRow,
        NavIntent::PageForward,
        NavIntent::PageBackward,
        NavIntent::LastRow,
        NavIntent::FirstRow,
        NavIntent::VisualLeft,
        NavIntent::VisualRight,
        NavIntent::VisualHome,
        NavIntent::VisualEnd,
    ];

    /// Stable action name used in config files and logs.
    pub fn action_name(&self) -> &'static str {
        match self {
            NavIntent::NextRow => "next_row",
            NavIntent::PrevRow => "prev_row",
            NavIntent::PageForward => "page_forward",
            NavIntent::PageBackward => "page_backward",
            NavIntent::FirstRow => "first_row",
            NavIntent::LastRow => "last_row",
            NavIntent::VisualLeft => "visual_left",
            NavIntent::VisualRight => "visual_right",
            NavIntent::VisualHome => "visual_home",
            NavIntent::VisualEnd => "visual_end",
        }
    }

    /// Reverse of [`action_name`](Self::action_name), for config parsing.
    pub fn from_action_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|intent| intent.action_name() == name)
    }

    /// Default human-readable label. Hosts can override labels at
    /// registration time (see `KeyDispatcher::set_label`).
    pub fn default_label(&self) -> &'static str {
        match self {
            NavIntent::NextRow => "Next row",
            NavIntent::PrevRow => "Previous row",
            NavIntent::PageForward => "Page forward",
            NavIntent::PageBackward => "Page backward",
            NavIntent::FirstRow => "First row",
            NavIntent::LastRow => "Last row",
            NavIntent::VisualLeft => "Left column",
            NavIntent::VisualRight => "Right column",
            NavIntent::VisualHome => "Home column",
            NavIntent::VisualEnd => "End column",
        }
    }
}

/// Evaluate one intent against a snapshot.
pub fn navigate(state: &GridState, intent: NavIntent) -> Option<Selection> {
    match intent {
        NavIntent::NextRow => next_row(state),
        NavIntent::PrevRow => prev_row(state),
        NavIntent::PageForward => page_forward(state),
        NavIntent::PageBackward => page_backward(state),
        NavIntent::FirstRow => first_row(state),
        NavIntent::LastRow => last_row(state),
        NavIntent::VisualLeft => visual_left(state),
        NavIntent::VisualRight => visual_right(state),
        NavIntent::VisualHome => visual_home(state),
        NavIntent::VisualEnd => visual_end(state),
    }
}

/// Move down one row.
pub fn next_row(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    // Vim-like behavior: don't wrap, stay at boundary
    if row + 1 >= state.row_count() {
        debug!(target: "navigator", "next_row: already at last row ({})", row);
        return None;
    }
    Some(Selection {
        row: row + 1,
        column,
    })
}

/// Move up one row.
pub fn prev_row(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    // A stale row from a shrinking view is degenerate input, not a fault
    if row == 0 || row >= state.row_count() {
        debug!(target: "navigator", "prev_row: already at first row");
        return None;
    }
    Some(Selection {
        row: row - 1,
        column,
    })
}

/// Jump to row 0.
pub fn first_row(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    if state.row_count() == 0 || row == 0 {
        return None;
    }
    Some(Selection { row: 0, column })
}

/// Jump to the last row.
pub fn last_row(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    if state.row_count() == 0 || row == state.row_count() - 1 {
        return None;
    }
    Some(Selection {
        row: state.row_count() - 1,
        column,
    })
}

/// Move forward by one viewport page, clamped to the last row.
pub fn page_forward(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    if row + 1 >= state.row_count() {
        debug!(target: "navigator", "page_forward: already at last row ({})", row);
        return None;
    }
    let target = (row + state.page_size() - 1).min(state.row_count() - 1);
    debug!(target: "navigator",
           "page_forward: row {} -> {} (page_size={}, rows={})",
           row, target, state.page_size(), state.row_count());
    Some(Selection {
        row: target,
        column,
    })
}

/// Move backward by one viewport page, clamped to row 0.
///
/// Unlike the row-step motions this does not short-circuit when the jump
/// would land before the first row; the computed target is clamped instead,
/// so a backward page from row 2 with a large page size still selects row 0.
pub fn page_backward(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    if row == 0 || row >= state.row_count() {
        debug!(target: "navigator", "page_backward: already at first row");
        return None;
    }
    let target = row.saturating_sub(state.page_size() - 1);
    debug!(target: "navigator",
           "page_backward: row {} -> {} (page_size={})",
           row, target, state.page_size());
    Some(Selection {
        row: target,
        column,
    })
}

/// Move one column left in visual order.
pub fn visual_left(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    let position = state.visual_position(column)?;
    if position == 0 {
        debug!(target: "navigator", "visual_left: already at leftmost column");
        return None;
    }
    let target = state.column_order()[position - 1];
    debug!(target: "navigator",
           "visual_left: column {} -> {} (visual {} -> {})",
           column, target, position, position - 1);
    Some(Selection {
        row,
        column: target,
    })
}

/// Move one column right in visual order.
pub fn visual_right(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    let position = state.visual_position(column)?;
    if position + 1 >= state.column_order().len() {
        debug!(target: "navigator", "visual_right: already at rightmost column");
        return None;
    }
    let target = state.column_order()[position + 1];
    debug!(target: "navigator",
           "visual_right: column {} -> {} (visual {} -> {})",
           column, target, position, position + 1);
    Some(Selection {
        row,
        column: target,
    })
}

/// Jump to the leftmost visible column.
pub fn visual_home(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    state.visual_position(column)?;
    let first = *state.column_order().first()?;
    if column == first {
        return None;
    }
    Some(Selection { row, column: first })
}

/// Jump to the rightmost visible column.
pub fn visual_end(state: &GridState) -> Option<Selection> {
    let (row, column) = state.current()?;
    state.visual_position(column)?;
    let last = *state.column_order().last()?;
    if column == last {
        return None;
    }
    Some(Selection { row, column: last })
}
