//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::band::SupportBand;

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── support indicator ──────────────────────────────────────
    /// Colour of lit segments and of the emphasized caption.
    pub fn band_color(band: SupportBand) -> Color {
        match band {
            SupportBand::Low => Color::Red,
            SupportBand::Mid => Color::Yellow,
            SupportBand::High => Color::Green,
        }
    }

    pub fn lit_segment_style(band: SupportBand) -> Style {
        Style::default().fg(Self::band_color(band))
    }

    pub fn unlit_segment_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn caption_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn caption_emphasis_style(band: SupportBand) -> Style {
        Style::default()
            .fg(Self::band_color(band))
            .add_modifier(Modifier::BOLD)
    }

    pub fn tooltip_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── claim card / lists ─────────────────────────────────────
    pub fn claim_text_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn verdict_style() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn meta_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn hidden_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn agree_style() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn disagree_style() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Border of the pane that currently has input focus.
    pub fn pane_border_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Self::border_style()
        }
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
