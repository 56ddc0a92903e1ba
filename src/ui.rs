// Layout and rendering: search bar on top, results area below, status line at
// the bottom, with modal and help overlays composited last.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::action::{Notice, NoticeKind};
use crate::components::movie_grid::MovieGrid;
use crate::components::movie_modal::MovieModal;
use crate::components::search_bar::SearchBar;
use crate::components::Component;
use crate::query::QueryState;
use crate::theme::Theme;

pub struct DrawState<'a> {
    pub search_bar: &'a SearchBar,
    pub movie_grid: &'a MovieGrid,
    pub movie_modal: &'a MovieModal,
    pub query_state: &'a QueryState,
    pub notice: &'a Option<Notice>,
    pub show_help: bool,
    pub theme: &'a Theme,
}

pub fn draw(frame: &mut Frame, state: &DrawState) {
    let theme = state.theme;
    let outer = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    let search_block = Block::default()
        .borders(Borders::ALL)
        .title(" cinesearch ")
        .border_style(Style::default().fg(theme.border));
    let search_area = search_block.inner(outer[0]);
    frame.render_widget(search_block, outer[0]);
    state.search_bar.draw(frame, search_area, theme);

    draw_results(frame, outer[1], state);
    draw_status_line(frame, outer[2], state);

    if state.movie_modal.is_visible() {
        state.movie_modal.draw(frame, frame.area(), theme);
    }

    if state.show_help {
        draw_help_overlay(frame, theme);
    }
}

fn draw_results(frame: &mut Frame, area: Rect, state: &DrawState) {
    let theme = state.theme;
    match state.query_state {
        QueryState::Idle => {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Press / and type a movie title to search the catalog.",
                Style::default().fg(theme.text_dim),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, area);
        }
        QueryState::Error(reason) => {
            let lines = vec![
                Line::from(vec![
                    Span::styled(" ⚠ ", Style::default().fg(theme.error)),
                    Span::styled("Search failed: ", Style::default().fg(theme.error)),
                    Span::styled(reason.as_str(), Style::default().fg(theme.text)),
                ]),
                Line::from(Span::styled(
                    "   Press r to retry or / to search again.",
                    Style::default().fg(theme.text_dim),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        // Loading renders the grid's spinner; success renders the cards.
        // An empty success renders nothing here — the notice covers it.
        QueryState::Loading | QueryState::Success(_) => {
            state.movie_grid.draw(frame, area, theme);
        }
    }
}

fn draw_status_line(frame: &mut Frame, area: Rect, state: &DrawState) {
    let theme = state.theme;
    let line = match state.notice {
        Some(notice) => {
            let (symbol, color) = match notice.kind {
                NoticeKind::Info => (" ℹ ", theme.info),
                NoticeKind::Warn => (" ⚠ ", theme.error),
            };
            Line::from(vec![
                Span::styled(symbol, Style::default().fg(color)),
                Span::styled(notice.message.as_str(), Style::default().fg(theme.text)),
            ])
        }
        None => Line::from(Span::styled(
            " / search · j/k move · Enter details · r retry · ? help · q quit",
            Style::default().fg(theme.text_dim),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let overlay_width = 46u16;
    let overlay_height = 14u16;
    let x = area.width.saturating_sub(overlay_width) / 2;
    let y = area.height.saturating_sub(overlay_height) / 2;
    let overlay_area = Rect::new(
        x,
        y,
        overlay_width.min(area.width),
        overlay_height.min(area.height),
    );

    frame.render_widget(Clear, overlay_area);

    let keybindings = [
        ("q", "Quit"),
        ("/", "Focus search bar"),
        ("Enter", "Submit search / open details"),
        ("Esc", "Unfocus search / close modal"),
        ("j / Down", "Next movie"),
        ("k / Up", "Previous movie"),
        ("r", "Retry failed search"),
        ("?", "Toggle this help overlay"),
    ];

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Keybindings ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, desc) in &keybindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", key), Style::default().fg(theme.accent)),
            Span::raw(*desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(theme.text_dim),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(theme.border));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}
