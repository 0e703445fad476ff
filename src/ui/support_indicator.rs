//! Five-step support indicator widget.
//!
//! Renders a continuous support score (0.0 disputes, 1.0 supports) as a
//! strip of five segments plus a row of three captions — low, mid, high —
//! of which exactly one is emphasized.  The lit-segment count follows the
//! quintile thresholds while segment colour and caption emphasis follow
//! the coarser three-way band, so the two can disagree in granularity.
//!
//! Rendering is a pure function of the props: identical inputs always
//! produce an identical buffer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
};

use crate::core::band::{self, SupportBand, SEGMENT_COUNT};

use super::theme::Theme;

/// Glyph a lit or unlit segment cell is drawn with.
const SEGMENT_GLYPH: char = '█';

/// The indicator widget — created fresh each frame.
///
/// Labels and tooltips are fixed-size arrays: supplying exactly three of
/// each is part of the type, not a runtime check.
pub struct SupportIndicator<'a> {
    score: f64,
    labels: [&'a str; 3],
    tooltips: [&'a str; 3],
    block: Option<Block<'a>>,
    show_tooltip: bool,
}

impl<'a> SupportIndicator<'a> {
    pub fn new(score: f64, labels: [&'a str; 3], tooltips: [&'a str; 3]) -> Self {
        Self {
            score,
            labels,
            tooltips,
            block: None,
            show_tooltip: false,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Also render the emphasized caption's tooltip as a hint line below
    /// the captions.  There is no hover in a terminal.
    pub fn show_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    /// The tooltip paired with the currently emphasized caption.
    pub fn active_tooltip(&self) -> &'a str {
        self.tooltips[SupportBand::from_score(self.score).caption_index()]
    }

    /// Rows this widget needs, excluding any block border.
    pub fn height(&self) -> u16 {
        if self.show_tooltip {
            3
        } else {
            2
        }
    }
}

impl Widget for SupportIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        // One gap column per segment, so each slot needs at least 2 cells.
        let slot_width = inner.width / SEGMENT_COUNT as u16;
        if slot_width < 2 || inner.height < 2 {
            return;
        }

        let band = SupportBand::from_score(self.score);

        // ── segment strip ───────────────────────────────────────
        let run = SEGMENT_GLYPH.to_string().repeat(slot_width as usize - 1);
        for i in 0..SEGMENT_COUNT {
            let style = if band::segment_lit(self.score, i) {
                Theme::lit_segment_style(band)
            } else {
                Theme::unlit_segment_style()
            };
            let x = inner.x + i as u16 * slot_width;
            buf.set_string(x, inner.y, &run, style);
        }

        // ── captions: left, centre, right ───────────────────────
        let caption_y = inner.y + 1;
        let emphasized = band.caption_index();
        let widths: [u16; 3] = std::array::from_fn(|i| self.labels[i].chars().count() as u16);

        let xs = [
            inner.x,
            inner.x + inner.width.saturating_sub(widths[1]) / 2,
            inner.x + inner.width.saturating_sub(widths[2]),
        ];
        for i in 0..3 {
            let style = if i == emphasized {
                Theme::caption_emphasis_style(band)
            } else {
                Theme::caption_style()
            };
            buf.set_stringn(xs[i], caption_y, self.labels[i], inner.width as usize, style);
        }

        // ── tooltip hint ────────────────────────────────────────
        if self.show_tooltip && inner.height >= 3 {
            buf.set_stringn(
                inner.x,
                inner.y + 2,
                self.active_tooltip(),
                inner.width as usize,
                Theme::tooltip_style(),
            );
        }
    }
}
