//! Claim card widget — one bordered card summarising a single claim.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::config::DisplayComponents;
use crate::core::claim::Claim;

use super::support_indicator::SupportIndicator;
use super::theme::Theme;

/// Captions under the claim-level support indicator.
pub const CLAIM_LABELS: [&str; 3] = ["Disputed", "Uncertain", "Supported"];

/// Tooltip paired with each caption.
pub const CLAIM_TOOLTIPS: [&str; 3] = [
    "Most sources dispute this claim",
    "Sources are split on this claim",
    "Most sources support this claim",
];

/// The card widget — created fresh each frame for the selected claim.
pub struct ClaimCard<'a> {
    claim: &'a Claim,
    display: &'a DisplayComponents,
    block: Option<Block<'a>>,
}

impl<'a> ClaimCard<'a> {
    pub fn new(claim: &'a Claim, display: &'a DisplayComponents) -> Self {
        Self {
            claim,
            display,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Rows of claim text at `width`, estimated for layout purposes.
    fn text_lines(&self, width: u16) -> u16 {
        let chars = self.claim.claim.chars().count() as u16;
        (chars / width.max(1) + 1).clamp(1, 5)
    }

    fn indicator_lines(&self) -> u16 {
        if self.display.claim_support_indicator && self.claim.score.is_some() {
            3
        } else {
            0
        }
    }

    /// Content rows this card needs at `width`, excluding any block border.
    pub fn height(&self, width: u16) -> u16 {
        let text = if self.display.claim_title {
            self.text_lines(width)
        } else {
            0
        };
        text + 1 + self.indicator_lines()
    }

    fn meta_line(&self) -> Line<'a> {
        let mut spans: Vec<Span<'a>> = Vec::new();

        if let Some(domain) = self.claim.domain_name.as_deref() {
            spans.push(Span::styled(domain, Theme::meta_style()));
        }
        if let Some(date) = self.claim.publish_date.as_deref() {
            if !spans.is_empty() {
                spans.push(Span::styled(" • ", Theme::meta_style()));
            }
            spans.push(Span::styled(date, Theme::meta_style()));
        }
        if let Some(label) = self.claim.label.as_deref() {
            if !spans.is_empty() {
                spans.push(Span::styled(" • ", Theme::meta_style()));
            }
            spans.push(Span::styled(label, Theme::verdict_style()));
        }

        let sources = self.claim.evidence.len();
        if !spans.is_empty() {
            spans.push(Span::styled(" • ", Theme::meta_style()));
        }
        spans.push(Span::styled(
            format!("{sources} source{}", if sources == 1 { "" } else { "s" }),
            Theme::meta_style(),
        ));

        if self.display.claim_support_feedback {
            match self.claim.user_agrees {
                Some(true) => spans.push(Span::styled(" ✓ agreed", Theme::agree_style())),
                Some(false) => spans.push(Span::styled(" ✗ disagreed", Theme::disagree_style())),
                None => {}
            }
        }

        Line::from(spans)
    }
}

impl Widget for ClaimCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        let bottom = inner.y + inner.height;

        // ── claim text ──────────────────────────────────────────
        if self.display.claim_title {
            let text_height = self.text_lines(inner.width).min(bottom - y);
            let text_area = Rect::new(inner.x, y, inner.width, text_height);
            Paragraph::new(self.claim.claim.as_str())
                .style(Theme::claim_text_style())
                .wrap(Wrap { trim: true })
                .render(text_area, buf);
            y += text_height;
        }

        // ── meta line ───────────────────────────────────────────
        if y < bottom {
            buf.set_line(inner.x, y, &self.meta_line(), inner.width);
            y += 1;
        }

        // ── support indicator ───────────────────────────────────
        if self.indicator_lines() > 0 && bottom - y >= 3 {
            if let Some(score) = self.claim.support_score() {
                let indicator_area = Rect::new(inner.x, y, inner.width, 3);
                SupportIndicator::new(score, CLAIM_LABELS, CLAIM_TOOLTIPS)
                    .show_tooltip(true)
                    .render(indicator_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn claim() -> Claim {
        Claim {
            id: "c1".into(),
            claim: "Viral video of the moon rising is computer generated".into(),
            score: Some(72),
            label: Some("Originated As Satire".into()),
            domain_name: Some("reuters".into()),
            publish_date: Some("2022-04-27".into()),
            ..Claim::default()
        }
    }

    #[test]
    fn card_renders_text_meta_and_indicator() {
        let display = DisplayComponents::default();
        let c = claim();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        ClaimCard::new(&c, &display).render(area, &mut buf);

        // Claim text starts in the top-left corner.
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "V");
        // 52 chars fit one 60-wide row; meta goes on the next row.
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), "r"); // "reuters"
        // Indicator strip below the meta line: 0.72 is the high band.
        assert_eq!(buf.cell((0, 2)).unwrap().style().fg, Some(Color::Green));
    }

    #[test]
    fn toggles_suppress_components() {
        let display = DisplayComponents {
            claim_title: false,
            claim_support_indicator: false,
            ..DisplayComponents::default()
        };
        let c = claim();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        ClaimCard::new(&c, &display).render(area, &mut buf);

        // With title and indicator off only the meta line renders.
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "r"); // "reuters"
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn height_tracks_enabled_components() {
        let c = claim();
        let display = DisplayComponents::default();
        // 52 chars at width 60: one text row + meta + indicator.
        assert_eq!(ClaimCard::new(&c, &display).height(60), 5);

        let bare = DisplayComponents {
            claim_title: false,
            claim_support_indicator: false,
            ..DisplayComponents::default()
        };
        assert_eq!(ClaimCard::new(&c, &bare).height(60), 1);
    }
}
