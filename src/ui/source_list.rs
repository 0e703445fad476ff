//! Scrollable source list for the selected claim.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::config::DisplayComponents;
use crate::core::claim::Source;

use super::claim_list::{mini_strip, ListCursor};
use super::theme::Theme;

/// Captions under the source-level support indicator.
pub const SOURCE_LABELS: [&str; 3] = ["Disputes", "Neutral", "Supports"];

/// Tooltip paired with each caption.
pub const SOURCE_TOOLTIPS: [&str; 3] = [
    "This source disputes the claim",
    "This source is neutral on the claim",
    "This source supports the claim",
];

/// The source list — created fresh each frame.
pub struct SourceList<'a> {
    sources: &'a [Source],
    /// Visible source indices in display order.
    order: &'a [usize],
    display: &'a DisplayComponents,
    block: Option<Block<'a>>,
}

impl<'a> SourceList<'a> {
    pub fn new(sources: &'a [Source], order: &'a [usize], display: &'a DisplayComponents) -> Self {
        Self {
            sources,
            order,
            display,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn row(&self, source: &'a Source, is_selected: bool) -> Line<'a> {
        let mut spans = if self.display.source_support_indicator {
            let mut s = mini_strip(source.support_score());
            s.insert(0, Span::raw(" "));
            s
        } else {
            vec![Span::raw(" ")]
        };

        if self.display.source_domain {
            if let Some(domain) = source.domain.as_deref() {
                spans.push(Span::styled(format!(" {domain}"), Theme::meta_style()));
            }
        }
        if let Some(date) = source.publish_date.as_deref() {
            spans.push(Span::styled(format!(" {date}"), Theme::meta_style()));
        }

        if self.display.source_title {
            let style = if is_selected {
                Theme::selected_style()
            } else if source.hide {
                Theme::hidden_style()
            } else {
                Theme::claim_text_style()
            };
            // Headline, or the snippet when the source has no title.
            let text = source
                .title
                .as_deref()
                .or(source.snippet.as_deref())
                .unwrap_or("(untitled)");
            spans.push(Span::styled(format!(" {text}"), style));
        }

        if self.display.source_support_feedback {
            match source.user_agrees_support {
                Some(true) => spans.push(Span::styled(" ✓", Theme::agree_style())),
                Some(false) => spans.push(Span::styled(" ✗", Theme::disagree_style())),
                None => {}
            }
        }
        if self.display.source_relevance_feedback {
            match source.user_agrees_relevance {
                Some(true) => spans.push(Span::styled(" rel✓", Theme::agree_style())),
                Some(false) => spans.push(Span::styled(" rel✗", Theme::disagree_style())),
                None => {}
            }
        }

        Line::from(spans)
    }
}

impl<'a> StatefulWidget for SourceList<'a> {
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

        if self.order.is_empty() {
            buf.set_string(inner.x, inner.y, " no sources", Theme::meta_style());
            return;
        }

        let visible = self
            .order
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);

        for (i, (row_idx, &source_idx)) in visible.enumerate() {
            let y = inner.y + i as u16;
            let line = self.row(&self.sources[source_idx], row_idx == state.selected);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(title: &str, support: f64) -> Source {
        Source {
            id: title.into(),
            title: Some(title.into()),
            domain: Some("example.com".into()),
            softmax_score: Some(vec![0.0, 1.0 - support, support]),
            ..Source::default()
        }
    }

    #[test]
    fn rows_render_in_given_order() {
        let sources = vec![source("first", 0.9), source("second", 0.1)];
        let order = vec![1, 0];
        let display = DisplayComponents::default();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let mut cursor = ListCursor::default();

        SourceList::new(&sources, &order, &display).render(area, &mut buf, &mut cursor);

        // Row 0 is the second source: strip, then " example.com second".
        let row: String = (0..40)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(row.contains("second"));
        let row1: String = (0..40)
            .map(|x| buf.cell((x, 1)).unwrap().symbol().to_string())
            .collect();
        assert!(row1.contains("first"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let display = DisplayComponents::default();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        let mut cursor = ListCursor::default();

        SourceList::new(&[], &[], &display).render(area, &mut buf, &mut cursor);

        let row: String = (0..20)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(row.contains("no sources"));
    }
}
