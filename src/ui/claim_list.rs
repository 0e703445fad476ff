//! Scrollable claim list widget with a per-row mini indicator.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::{
    band::{self, SupportBand, SEGMENT_COUNT},
    claim::Claim,
};

use super::theme::Theme;

// ───────────────────────────────────────── cursor ────────────

/// Persistent list state (selected index, scroll offset).  Shared by the
/// claim list and the source list.
#[derive(Debug, Default)]
pub struct ListCursor {
    /// Index into the *visible* order that is currently highlighted.
    pub selected: usize,
    /// Vertical scroll offset (first visible row).
    pub offset: usize,
}

impl ListCursor {
    pub fn select_next(&mut self, max: usize) {
        if max > 0 && self.selected < max - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep `selected` within `max` rows after the visible set shrinks.
    pub fn clamp_selection(&mut self, max: usize) {
        if max == 0 {
            self.selected = 0;
        } else if self.selected >= max {
            self.selected = max - 1;
        }
    }

    /// Ensure the selected row is visible within a viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected - height + 1;
        }
    }
}

// ───────────────────────────────────────── mini strip ────────

/// Five-character strip summarising a score, coloured by its band.
/// Lit segments are a prefix, so two spans suffice.
pub fn mini_strip(score: Option<f64>) -> Vec<Span<'static>> {
    let Some(score) = score else {
        return vec![Span::styled("┄".repeat(SEGMENT_COUNT), Theme::unlit_segment_style())];
    };
    let band = SupportBand::from_score(score);
    let lit = band::lit_count(score);
    vec![
        Span::styled("▮".repeat(lit), Theme::lit_segment_style(band)),
        Span::styled("▯".repeat(SEGMENT_COUNT - lit), Theme::unlit_segment_style()),
    ]
}

// ───────────────────────────────────────── widget ────────────

/// The claim list — created fresh each frame.
pub struct ClaimList<'a> {
    claims: &'a [Claim],
    /// Visible claim indices in display order.
    order: &'a [usize],
    block: Option<Block<'a>>,
}

impl<'a> ClaimList<'a> {
    pub fn new(claims: &'a [Claim], order: &'a [usize]) -> Self {
        Self {
            claims,
            order,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn row(&self, claim: &'a Claim, is_selected: bool) -> Line<'a> {
        let mut spans = mini_strip(claim.support_score());
        spans.insert(0, Span::raw(" "));

        let text_style = if is_selected {
            Theme::selected_style()
        } else if claim.hide {
            Theme::hidden_style()
        } else {
            Theme::claim_text_style()
        };
        spans.push(Span::styled(format!(" {}", claim.claim), text_style));

        if claim.is_being_checked {
            spans.push(Span::styled(" (checking…)", Theme::meta_style()));
        }
        if let Some(label) = claim.label.as_deref() {
            spans.push(Span::styled(format!("  {label}"), Theme::verdict_style()));
        }
        match claim.user_agrees {
            Some(true) => spans.push(Span::styled(" ✓", Theme::agree_style())),
            Some(false) => spans.push(Span::styled(" ✗", Theme::disagree_style())),
            None => {}
        }

        Line::from(spans)
    }
}

impl<'a> StatefulWidget for ClaimList<'a> {
    type State = ListCursor;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        state.clamp_selection(self.order.len());
        state.clamp_scroll(inner.height as usize);

        let visible = self
            .order
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);

        for (i, (row_idx, &claim_idx)) in visible.enumerate() {
            let y = inner.y + i as u16;
            let line = self.row(&self.claims[claim_idx], row_idx == state.selected);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
