// src/components/movie_grid.rs

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::api::models::Movie;
use crate::components::{Component, BRAILLE_SPINNER};
use crate::theme::Theme;

const OVERVIEW_SNIPPET_LEN: usize = 70;

/// Scrollable list of search results. Each row is a movie card: title, year,
/// rating, and a one-line overview snippet.
pub struct MovieGrid {
    action_tx: Option<UnboundedSender<Action>>,
    pub movies: Vec<Movie>,
    pub state: ListState,
    pub loading: bool,
    pub frame_count: u64,
}

impl Default for MovieGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieGrid {
    pub fn new() -> Self {
        Self {
            action_tx: None,
            movies: vec![],
            state: ListState::default(),
            loading: false,
            frame_count: 0,
        }
    }

    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.state
            .select(if self.movies.is_empty() { None } else { Some(0) });
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.movies.clear();
        self.state.select(None);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.state.selected().and_then(|i| self.movies.get(i))
    }

    pub fn next(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 1).min(self.movies.len() - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn prev(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(i));
    }
}

impl Component for MovieGrid {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let tx = self.action_tx.as_ref().expect("component not registered");
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Ok(true)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.prev();
                Ok(true)
            }
            KeyCode::Enter => {
                if let Some(movie) = self.selected_movie() {
                    tx.send(Action::OpenMovie(movie.clone()))?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        if let Action::Tick = action {
            self.frame_count = self.frame_count.wrapping_add(1);
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.loading {
            let idx = (self.frame_count / 3) as usize % BRAILLE_SPINNER.len();
            let spinner = BRAILLE_SPINNER[idx];
            let paragraph = Paragraph::new(Line::from(vec![
                Span::styled(format!("  {} ", spinner), Style::default().fg(theme.primary)),
                Span::styled("Searching...", Style::default().fg(theme.text_dim)),
            ]));
            frame.render_widget(paragraph, area);
            return;
        }

        let selected = self.state.selected();
        let items: Vec<ListItem> = self
            .movies
            .iter()
            .enumerate()
            .map(|(i, movie)| {
                let is_selected = selected == Some(i);
                let num = format!("{:02} ", i + 1);

                let title_style = if is_selected {
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };

                let mut meta = movie.rating_label();
                if let Some(year) = movie.release_year() {
                    meta = format!("{} · {}", year, meta);
                }

                let title_line = Line::from(vec![
                    Span::styled(num, Style::default().fg(theme.text_dim)),
                    Span::styled(movie.title.clone(), title_style),
                    Span::styled(format!("  {}", meta), Style::default().fg(theme.accent)),
                ]);
                let sub_line = Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        movie.overview_snippet(OVERVIEW_SNIPPET_LEN),
                        Style::default().fg(theme.text_dim),
                    ),
                ]);

                let mut item = ListItem::new(vec![title_line, sub_line]);
                if is_selected {
                    item = item.style(Style::default().bg(theme.selection_bg));
                }
                item
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▌");

        frame.render_stateful_widget(list, area, &mut self.state.clone());
    }
}
