//! Input handling — maps key events to state mutations.
//!
//! Every user-facing action of the original interface (toggling sources,
//! hiding entries, submitting feedback, changing filters and sort orders)
//! is one variant of [`Action`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::DisplayComponents;

use super::state::{ActiveView, AppState, PaneFocus};

// ───────────────────────────────────────── actions ───────────

/// All user actions available in the claims view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    /// Move focus between the claim list and the selected claim's sources.
    ToggleSources,
    /// Return focus to the claim list.
    Home,
    /// Toggle the hide flag of the entry under the cursor.
    HideEntry,
    /// Agree with the credibility (claims) or support (sources) assessment.
    FeedbackAgree,
    FeedbackDisagree,
    /// Source-only: feedback on relevance.
    RelevanceAgree,
    RelevanceDisagree,
    CycleClaimSort,
    CycleSourceSort,
    OpenFilters,
    OpenDisplayMenu,
    ToggleShowHidden,
    Quit,
}

impl Action {
    fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Enter | KeyCode::Char('s') => Some(Action::ToggleSources),
            KeyCode::Esc | KeyCode::Char('h') => Some(Action::Home),
            KeyCode::Char('x') => Some(Action::HideEntry),
            KeyCode::Char('a') => Some(Action::FeedbackAgree),
            KeyCode::Char('d') => Some(Action::FeedbackDisagree),
            KeyCode::Char('r') => Some(Action::RelevanceAgree),
            KeyCode::Char('R') => Some(Action::RelevanceDisagree),
            KeyCode::Char('c') => Some(Action::CycleClaimSort),
            KeyCode::Char('C') => Some(Action::CycleSourceSort),
            KeyCode::Char('f') => Some(Action::OpenFilters),
            KeyCode::Char('g') => Some(Action::OpenDisplayMenu),
            KeyCode::Char('.') => Some(Action::ToggleShowHidden),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── dispatch ──────────

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Claims => handle_claims_key(state, key),
        ActiveView::FilterMenu => handle_filter_key(state, key),
        ActiveView::DisplayMenu => handle_display_key(state, key),
    }
}

fn handle_claims_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = Action::from_key(key) else {
        return;
    };
    state.status_message = None;

    match action {
        Action::MoveUp => match state.focus {
            PaneFocus::Claims => {
                state.claim_cursor.select_prev();
                state.source_cursor = Default::default();
            }
            PaneFocus::Sources => state.source_cursor.select_prev(),
        },
        Action::MoveDown => match state.focus {
            PaneFocus::Claims => {
                state.claim_cursor.select_next(state.visible_claims().len());
                state.source_cursor = Default::default();
            }
            PaneFocus::Sources => {
                state.source_cursor.select_next(state.visible_sources().len());
            }
        },
        Action::ToggleSources => match state.focus {
            PaneFocus::Claims if !state.visible_sources().is_empty() => {
                state.focus = PaneFocus::Sources;
            }
            PaneFocus::Claims => state.set_status("Selected claim has no sources"),
            PaneFocus::Sources => state.focus = PaneFocus::Claims,
        },
        Action::Home => {
            state.focus = PaneFocus::Claims;
        }
        Action::HideEntry => hide_entry(state),
        Action::FeedbackAgree => feedback(state, true),
        Action::FeedbackDisagree => feedback(state, false),
        Action::RelevanceAgree => relevance_feedback(state, true),
        Action::RelevanceDisagree => relevance_feedback(state, false),
        Action::CycleClaimSort => {
            state.claim_sort = state.claim_sort.cycle();
            state.config.claim_sort = state.claim_sort;
            save_config(state);
            state.set_status(format!("Claims sorted by {}", state.claim_sort.label()));
        }
        Action::CycleSourceSort => {
            state.source_sort = state.source_sort.cycle();
            state.config.source_sort = state.source_sort;
            save_config(state);
            state.set_status(format!("Sources sorted by {}", state.source_sort.label()));
        }
        Action::OpenFilters => {
            state.active_view = ActiveView::FilterMenu;
            state.filter_selected = 0;
        }
        Action::OpenDisplayMenu => {
            state.active_view = ActiveView::DisplayMenu;
            state.display_selected = 0;
        }
        Action::ToggleShowHidden => {
            state.show_hidden = !state.show_hidden;
            state.set_status(if state.show_hidden {
                "Showing hidden entries"
            } else {
                "Hiding hidden entries"
            });
        }
        Action::Quit => state.should_quit = true,
    }
}

// ── claims view helpers ─────────────────────────────────────────

fn hide_entry(state: &mut AppState) {
    match state.focus {
        PaneFocus::Claims => {
            let Some(idx) = state.selected_claim_index() else {
                return;
            };
            let claim = &mut state.claims[idx];
            claim.hide = !claim.hide;
            let verb = if claim.hide { "hidden" } else { "restored" };
            tracing::debug!(id = %claim.id, hide = claim.hide, "claim visibility changed");
            state.set_status(format!("Claim {verb}"));
        }
        PaneFocus::Sources => {
            let Some((claim_idx, source_idx)) = state.selected_source_index() else {
                return;
            };
            let source = &mut state.claims[claim_idx].evidence[source_idx];
            source.hide = !source.hide;
            let verb = if source.hide { "hidden" } else { "restored" };
            state.set_status(format!("Source {verb}"));
        }
    }
}

/// Pressing the same feedback key twice retracts the feedback.
fn apply_feedback(slot: &mut Option<bool>, agrees: bool) -> &'static str {
    if *slot == Some(agrees) {
        *slot = None;
        "retracted"
    } else {
        *slot = Some(agrees);
        if agrees {
            "agreed"
        } else {
            "disagreed"
        }
    }
}

fn feedback(state: &mut AppState, agrees: bool) {
    match state.focus {
        PaneFocus::Claims => {
            let Some(idx) = state.selected_claim_index() else {
                return;
            };
            let verb = apply_feedback(&mut state.claims[idx].user_agrees, agrees);
            state.set_status(format!("Credibility feedback {verb}"));
        }
        PaneFocus::Sources => {
            let Some((claim_idx, source_idx)) = state.selected_source_index() else {
                return;
            };
            let source = &mut state.claims[claim_idx].evidence[source_idx];
            let verb = apply_feedback(&mut source.user_agrees_support, agrees);
            state.set_status(format!("Support feedback {verb}"));
        }
    }
}

fn relevance_feedback(state: &mut AppState, agrees: bool) {
    if state.focus != PaneFocus::Sources {
        return;
    }
    let Some((claim_idx, source_idx)) = state.selected_source_index() else {
        return;
    };
    let source = &mut state.claims[claim_idx].evidence[source_idx];
    let verb = apply_feedback(&mut source.user_agrees_relevance, agrees);
    state.set_status(format!("Relevance feedback {verb}"));
}

fn save_config(state: &mut AppState) {
    if let Err(err) = state.config.save() {
        tracing::warn!(%err, "failed to save config");
    }
}

// ── filter overlay ──────────────────────────────────────────────

fn handle_filter_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('f') => {
            state.active_view = ActiveView::Claims;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.filter_selected = state.filter_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.filter_selected + 1 < state.filters.len() {
                state.filter_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(filter) = state.filters.get_mut(state.filter_selected) {
                filter.selected = !filter.selected;
                // Keep the cursor on a claim that is still visible.
                state.claim_cursor = Default::default();
                state.source_cursor = Default::default();
                state.focus = PaneFocus::Claims;
            }
        }
        _ => {}
    }
}

// ── display-components overlay ──────────────────────────────────

fn handle_display_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('g') => {
            state.active_view = ActiveView::Claims;
            save_config(state);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.display_selected = state.display_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.display_selected + 1 < DisplayComponents::LABELS.len() {
                state.display_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.config.display.toggle(state.display_selected);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::claim::{Claim, Source};
    use crate::core::filter::ClaimSort;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn state() -> AppState {
        let claims = vec![
            Claim {
                id: "a".into(),
                claim: "first claim".into(),
                score: Some(90),
                label: Some("True".into()),
                evidence: vec![Source {
                    id: "s1".into(),
                    title: Some("headline".into()),
                    softmax_score: Some(vec![0.1, 0.1, 0.8]),
                    ..Source::default()
                }],
                ..Claim::default()
            },
            Claim {
                id: "b".into(),
                claim: "second claim".into(),
                score: Some(10),
                label: Some("False".into()),
                ..Claim::default()
            },
        ];
        AppState::new(claims, AppConfig::default(), false)
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut state = state();
        state.active_view = ActiveView::FilterMenu;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key(&mut state, ctrl_c);
        assert!(state.should_quit);
    }

    #[test]
    fn navigation_moves_claim_cursor() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.claim_cursor.selected, 1);
        handle_key(&mut state, key(KeyCode::Down)); // already at the end
        assert_eq!(state.claim_cursor.selected, 1);
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.claim_cursor.selected, 0);
    }

    #[test]
    fn enter_focuses_sources_only_when_present() {
        let mut state = state();
        // Claim "a" (score 90) is first under credibility sort and has a source.
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.focus, PaneFocus::Sources);
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.focus, PaneFocus::Claims);

        // Claim "b" has no sources; focus stays on the claim list.
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.focus, PaneFocus::Claims);
    }

    #[test]
    fn feedback_sets_and_retracts() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.claims[0].user_agrees, Some(true));
        handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.claims[0].user_agrees, Some(false));
        handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.claims[0].user_agrees, None);
    }

    #[test]
    fn source_feedback_targets_selected_source() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.claims[0].evidence[0].user_agrees_support, Some(true));
        handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(
            state.claims[0].evidence[0].user_agrees_relevance,
            Some(true)
        );
        // Claim-level feedback is untouched.
        assert_eq!(state.claims[0].user_agrees, None);
    }

    #[test]
    fn relevance_feedback_requires_source_focus() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(state.claims[0].evidence[0].user_agrees_relevance, None);
    }

    #[test]
    fn hide_toggles_and_survives_reveal() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('x')));
        assert!(state.claims[0].hide);
        // Hidden claim is gone from the visible set.
        assert_eq!(state.visible_claims(), vec![1]);

        handle_key(&mut state, key(KeyCode::Char('.')));
        assert!(state.show_hidden);
        assert_eq!(state.visible_claims().len(), 2);
    }

    #[test]
    fn sort_cycles_and_is_reflected_in_config() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('c')));
        assert_eq!(state.claim_sort, ClaimSort::Occurrence);
        assert_eq!(state.config.claim_sort, ClaimSort::Occurrence);
    }

    #[test]
    fn filter_overlay_toggles_labels() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('f')));
        assert_eq!(state.active_view, ActiveView::FilterMenu);

        // Filters are alphabetised: "False" first.
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.active_view, ActiveView::Claims);
        assert_eq!(state.visible_claims(), vec![1]); // only claim "b" (False)
    }

    #[test]
    fn display_overlay_toggles_components() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('g')));
        assert_eq!(state.active_view, ActiveView::DisplayMenu);
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(!state.config.display.claim_support_indicator);
    }
}
