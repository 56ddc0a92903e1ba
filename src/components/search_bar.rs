// Text input for the movie search query. Activated with `/`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::{Action, Notice};
use crate::components::Component;
use crate::theme::Theme;

pub const EMPTY_QUERY_NOTICE: &str = "Please enter your search query.";

#[derive(Default)]
pub struct SearchBar {
    action_tx: Option<UnboundedSender<Action>>,
    input: String,
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Component for SearchBar {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if !self.focused {
            return Ok(false);
        }
        let tx = self.action_tx.as_ref().expect("component not registered");
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                Ok(true)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Ok(true)
            }
            KeyCode::Enter => {
                let query = self.input.trim().to_string();
                if query.is_empty() {
                    // Empty submission never reaches the orchestrator.
                    tx.send(Action::ShowNotice(Notice::warn(EMPTY_QUERY_NOTICE)))?;
                } else {
                    tx.send(Action::SubmitSearch(query))?;
                    self.input.clear();
                    self.focused = false;
                }
                Ok(true)
            }
            KeyCode::Esc => {
                self.focused = false;
                self.input.clear();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        match action {
            Action::FocusSearch => {
                self.focused = true;
            }
            Action::Back => {
                self.focused = false;
                self.input.clear();
            }
            _ => {}
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = if self.focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_dim)
        };

        let display = if self.input.is_empty() && !self.focused {
            "/ Search movies...".to_string()
        } else {
            format!("/ {}_", self.input)
        };

        let paragraph = Paragraph::new(display).style(style);
        frame.render_widget(paragraph, area);
    }
}
