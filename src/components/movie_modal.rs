// Modal overlay with full detail for one selected movie.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::api::models::Movie;
use crate::components::{centered_overlay, Component};
use crate::theme::Theme;

/// Holds the selected movie; at most one at a time. Opening replaces any
/// previous selection, closing clears it.
#[derive(Default)]
pub struct MovieModal {
    action_tx: Option<UnboundedSender<Action>>,
    movie: Option<Movie>,
}

impl MovieModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.movie.is_some()
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    pub fn open(&mut self, movie: Movie) {
        self.movie = Some(movie);
    }

    pub fn close(&mut self) {
        self.movie = None;
    }
}

impl Component for MovieModal {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if !self.is_visible() {
            return Ok(false);
        }
        // The modal consumes every key while visible.
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
            if let Some(tx) = &self.action_tx {
                tx.send(Action::CloseModal).ok();
            }
        }
        Ok(true)
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(ref movie) = self.movie else {
            return;
        };

        let overlay_area = centered_overlay(area, 64, 16);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", movie.title))
            .title_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(theme.border));

        let inner = block.inner(overlay_area);
        frame.render_widget(block, overlay_area);

        let released = movie.release_date.as_deref().unwrap_or("unknown");
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Released: ", Style::default().fg(theme.text_dim)),
                Span::styled(released, Style::default().fg(theme.text)),
                Span::styled("   Rating: ", Style::default().fg(theme.text_dim)),
                Span::styled(movie.rating_label(), Style::default().fg(theme.accent)),
            ]),
            Line::from(""),
        ];

        match movie.overview.as_deref() {
            Some(overview) if !overview.is_empty() => {
                lines.push(Line::from(Span::styled(
                    overview,
                    Style::default().fg(theme.text),
                )));
            }
            _ => {
                lines.push(Line::from(Span::styled(
                    "No overview available.",
                    Style::default().fg(theme.text_dim),
                )));
            }
        }

        if let Some(ref poster) = movie.poster_path {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Poster: ", Style::default().fg(theme.text_dim)),
                Span::styled(poster.clone(), Style::default().fg(theme.text_dim)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Esc to close",
            Style::default().fg(theme.text_dim),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
