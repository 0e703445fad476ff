//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use crate::config::AppConfig;
use crate::core::{
    claim::Claim,
    filter::{self, ClaimSort, Filter, SourceSort},
};
use crate::ui::claim_list::ListCursor;

/// Which pane has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Claims,
    Sources,
}

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Claims,
    FilterMenu,
    DisplayMenu,
}

/// Top-level application state.
pub struct AppState {
    /// All loaded claims, in file order.  Display order is recomputed
    /// per frame from the filters and sort settings.
    pub claims: Vec<Claim>,
    /// Verdict-label filters collected from the loaded claims.
    pub filters: Vec<Filter>,
    /// Claim list selection and scroll.
    pub claim_cursor: ListCursor,
    /// Source list selection and scroll (for the selected claim).
    pub source_cursor: ListCursor,
    pub claim_sort: ClaimSort,
    pub source_sort: SourceSort,
    /// Also show claims and sources flagged as hidden.
    pub show_hidden: bool,
    /// Which pane receives navigation keys.
    pub focus: PaneFocus,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Currently highlighted entry in the filter overlay.
    pub filter_selected: usize,
    /// Currently highlighted entry in the display-components overlay.
    pub display_selected: usize,
    /// Persisted settings (display toggles, default sorts).
    pub config: AppConfig,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(claims: Vec<Claim>, config: AppConfig, show_hidden: bool) -> Self {
        let filters = filter::collect_filters(&claims);
        Self {
            claims,
            filters,
            claim_cursor: ListCursor::default(),
            source_cursor: ListCursor::default(),
            claim_sort: config.claim_sort,
            source_sort: config.source_sort,
            show_hidden,
            focus: PaneFocus::default(),
            active_view: ActiveView::default(),
            filter_selected: 0,
            display_selected: 0,
            config,
            status_message: None,
            should_quit: false,
        }
    }

    /// Claim indices currently visible, in display order.
    pub fn visible_claims(&self) -> Vec<usize> {
        filter::visible_claims(&self.claims, &self.filters, self.claim_sort, self.show_hidden)
    }

    /// Index (into `claims`) of the claim under the cursor.
    pub fn selected_claim_index(&self) -> Option<usize> {
        self.visible_claims().get(self.claim_cursor.selected).copied()
    }

    pub fn selected_claim(&self) -> Option<&Claim> {
        self.selected_claim_index().map(|i| &self.claims[i])
    }

    /// Source indices of the selected claim currently visible, in display order.
    pub fn visible_sources(&self) -> Vec<usize> {
        match self.selected_claim() {
            Some(claim) => {
                filter::visible_sources(&claim.evidence, self.source_sort, self.show_hidden)
            }
            None => Vec::new(),
        }
    }

    /// `(claim index, source index)` of the source under the cursor.
    pub fn selected_source_index(&self) -> Option<(usize, usize)> {
        let claim_idx = self.selected_claim_index()?;
        let order = filter::visible_sources(
            &self.claims[claim_idx].evidence,
            self.source_sort,
            self.show_hidden,
        );
        let source_idx = order.get(self.source_cursor.selected).copied()?;
        Some((claim_idx, source_idx))
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let claims = vec![
            Claim {
                id: "a".into(),
                claim: "first".into(),
                score: Some(10),
                label: Some("False".into()),
                ..Claim::default()
            },
            Claim {
                id: "b".into(),
                claim: "second".into(),
                score: Some(90),
                label: Some("True".into()),
                ..Claim::default()
            },
        ];
        AppState::new(claims, AppConfig::default(), false)
    }

    #[test]
    fn filters_are_collected_on_construction() {
        let state = state();
        let labels: Vec<&str> = state.filters.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["False", "True"]);
    }

    #[test]
    fn selection_follows_display_order() {
        let mut state = state();
        // Default sort is credibility: claim "b" (90) comes first.
        assert_eq!(state.selected_claim().unwrap().id, "b");
        state.claim_cursor.select_next(state.visible_claims().len());
        assert_eq!(state.selected_claim().unwrap().id, "a");
    }

    #[test]
    fn no_selection_on_empty_visible_set() {
        let mut state = state();
        for claim in &mut state.claims {
            claim.hide = true;
        }
        assert_eq!(state.selected_claim_index(), None);
        assert_eq!(state.selected_source_index(), None);
    }
}
