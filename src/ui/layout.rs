//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: claim list on the left, detail pane on the
/// right, and a bottom status bar.
pub struct AppLayout {
    pub list_area: Rect,
    pub detail_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // panes (take all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45), // claim list
                Constraint::Percentage(55), // selected claim detail
            ])
            .split(rows[0]);

        Self {
            list_area: panes[0],
            detail_area: panes[1],
            status_area: rows[1],
        }
    }
}
