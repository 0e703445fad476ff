//! A terminal UI for reviewing fact-checked claims.
//!
//! Point the binary at a claims JSON file to browse the claims, their
//! sources, and the support assessment for each.

mod app;
mod config;
mod core;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState, PaneFocus},
};
use crate::core::filter::{self, ClaimSort};
use crate::ui::{
    claim_card::ClaimCard,
    claim_list::ClaimList,
    layout::AppLayout,
    overlay::{DisplayPopup, FilterPopup},
    source_list::{SourceList, SOURCE_LABELS, SOURCE_TOOLTIPS},
    support_indicator::SupportIndicator,
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Review fact-checked claims in the terminal")]
struct Cli {
    /// Claims JSON file produced by the fact-checking backend.
    claims: PathBuf,

    /// Also show claims and sources flagged as hidden.
    #[arg(long)]
    show_hidden: bool,

    /// Initial claim ordering: credibility or occurrence.
    #[arg(long)]
    sort: Option<String>,
}

// ───────────────────────────────────────── drawing ───────────

const STATUS_HINT: &str =
    " j/k: navigate | Enter: sources | a/d: agree/disagree | x: hide | f: filters | g: display | q: quit";

fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area());

    // ── claim list pane ─────────────────────────────────────────
    let order = state.visible_claims();
    let list_block = Block::default()
        .title(format!(
            " Claims ({}) — by {} ",
            order.len(),
            state.claim_sort.label()
        ))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::pane_border_style(state.focus == PaneFocus::Claims));
    let list = ClaimList::new(&state.claims, &order).block(list_block);
    frame.render_stateful_widget(list, layout.list_area, &mut state.claim_cursor);

    // ── detail pane ─────────────────────────────────────────────
    draw_detail(frame, state, layout.detail_area);

    // ── status bar ──────────────────────────────────────────────
    let status_text = state.status_message.as_deref().unwrap_or(STATUS_HINT);
    let status = Paragraph::new(status_text).style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);

    // ── overlays ────────────────────────────────────────────────
    match state.active_view {
        ActiveView::Claims => {}
        ActiveView::FilterMenu => frame.render_widget(
            FilterPopup {
                filters: &state.filters,
                selected: state.filter_selected,
            },
            frame.area(),
        ),
        ActiveView::DisplayMenu => frame.render_widget(
            DisplayPopup {
                display: &state.config.display,
                selected: state.display_selected,
            },
            frame.area(),
        ),
    }
}

fn draw_detail(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let Some(claim_idx) = state.selected_claim_index() else {
        let block = Block::default()
            .title(" Claim ")
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        let empty = Paragraph::new("No claims match the current filters.")
            .style(Theme::meta_style())
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let source_order = filter::visible_sources(
        &state.claims[claim_idx].evidence,
        state.source_sort,
        state.show_hidden,
    );

    // Full indicator for the source under the cursor, when focused there.
    let source_score = if state.focus == PaneFocus::Sources
        && state.config.display.source_support_indicator
    {
        source_order
            .get(state.source_cursor.selected.min(source_order.len().saturating_sub(1)))
            .and_then(|&i| state.claims[claim_idx].evidence[i].support_score())
    } else {
        None
    };
    let indicator = source_score
        .map(|score| SupportIndicator::new(score, SOURCE_LABELS, SOURCE_TOOLTIPS).show_tooltip(true));

    let card = ClaimCard::new(&state.claims[claim_idx], &state.config.display);
    let card_height = (card.height(area.width.saturating_sub(2)) + 2).min(area.height);

    let mut constraints = vec![Constraint::Length(card_height), Constraint::Min(3)];
    if let Some(ref indicator) = indicator {
        constraints.push(Constraint::Length(indicator.height() + 2));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let card_block = Block::default()
        .title(" Claim ")
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    frame.render_widget(card.block(card_block), chunks[0]);

    let sources_block = Block::default()
        .title(format!(
            " Sources ({}) — by {} ",
            source_order.len(),
            state.source_sort.label()
        ))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::pane_border_style(state.focus == PaneFocus::Sources));
    let sources = SourceList::new(
        &state.claims[claim_idx].evidence,
        &source_order,
        &state.config.display,
    )
    .block(sources_block);
    frame.render_stateful_widget(sources, chunks[1], &mut state.source_cursor);

    if let Some(indicator) = indicator {
        let indicator_block = Block::default()
            .title(" Source support ")
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        frame.render_widget(indicator.block(indicator_block), chunks[2]);
    }
}

// ───────────────────────────────────────── main ──────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute the terminal UI
        .init();

    let cli = Cli::parse();

    // ── load data and settings ────────────────────────────────
    let claims = core::claim::load_claims(&cli.claims)?;
    let mut config = config::AppConfig::load();
    if let Some(ref sort) = cli.sort {
        config.claim_sort = ClaimSort::from_config_key(sort).ok_or_else(|| {
            anyhow::anyhow!("unknown sort order '{sort}' (expected credibility or occurrence)")
        })?;
    }
    let mut state = AppState::new(claims, config, cli.show_hidden);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // ── event loop ────────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(100));
    loop {
        terminal.draw(|frame| draw(frame, &mut state))?;

        match events.recv().await {
            Some(AppEvent::Key(key)) => handler::handle_key(&mut state, key),
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
            None => break, // event reader gone
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
