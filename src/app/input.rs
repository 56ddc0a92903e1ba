// Key event handling: maps key presses to actions.

use crate::action::Action;
use crate::app::App;
use crate::components::Component;
use crate::query::QueryState;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        use KeyCode::{Char, Esc};

        // Overlays consume all keys
        if self.show_help {
            self.action_tx.send(Action::HideHelp)?;
            return Ok(());
        }
        if self.movie_modal.is_visible() {
            self.movie_modal.handle_key_event(key)?;
            return Ok(());
        }

        // In search mode, forward to the search bar; if it didn't consume the
        // key (e.g. arrow keys), fall through to normal-mode bindings.
        if self.search_bar.is_focused() && self.search_bar.handle_key_event(key)? {
            return Ok(());
        }

        // Normal-mode keybindings
        match key.code {
            Char('q') => self.action_tx.send(Action::Quit)?,
            Char('?') => self.action_tx.send(Action::ShowHelp)?,
            Char('/') => self.action_tx.send(Action::FocusSearch)?,
            Esc => self.action_tx.send(Action::Back)?,
            Char('r') => {
                if matches!(self.controller.state(), QueryState::Error(_)) {
                    self.action_tx.send(Action::RetrySearch)?;
                }
            }
            _ => {
                self.movie_grid.handle_key_event(key)?;
            }
        }
        Ok(())
    }
}
