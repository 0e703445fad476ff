//! Popup overlay widgets for the filter menu and the display-components menu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::config::DisplayComponents;
use crate::core::filter::Filter;

// ───────────────────────────────────────── filter popup ──────

/// Verdict-label filter overlay.  Selected labels restrict the claim list.
pub struct FilterPopup<'a> {
    pub filters: &'a [Filter],
    pub selected: usize,
}

impl<'a> Widget for FilterPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.filters.len() as u16).max(1) + 6;
        let popup = centered_fixed(44, height, area);
        Clear.render(popup, buf);

        let block = popup_block(" Filter by verdict ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        if self.filters.is_empty() {
            lines.push(Line::from(Span::styled(
                "   No verdict labels in this file",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for (i, filter) in self.filters.iter().enumerate() {
            let (prefix, style) = if i == self.selected {
                (
                    " ▸ ",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("   ", Style::default().fg(Color::White))
            };

            let mark = if filter.selected { "[x] " } else { "[ ] " };
            let mark_style = if filter.selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            lines.push(Line::from(vec![
                Span::styled(prefix.to_string(), style),
                Span::styled(mark, mark_style),
                Span::styled(filter.label.clone(), style),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Space: toggle  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── display popup ─────

/// Component-visibility overlay — one toggle per card/row element.
pub struct DisplayPopup<'a> {
    pub display: &'a DisplayComponents,
    pub selected: usize,
}

impl<'a> Widget for DisplayPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (DisplayComponents::LABELS.len() as u16) + 6;
        let popup = centered_fixed(44, height, area);
        Clear.render(popup, buf);

        let block = popup_block(" Displayed components ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        for (i, item) in DisplayComponents::LABELS.iter().enumerate() {
            let (prefix, style) = if i == self.selected {
                (
                    " ▸ ",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("   ", Style::default().fg(Color::White))
            };

            let suffix = if self.display.get(i) { "  [ON]" } else { "  [OFF]" };
            let toggle_style = if self.display.get(i) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{prefix}{item}"), style),
                Span::styled(suffix, toggle_style),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Space: toggle  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
