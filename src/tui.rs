// Terminal session: alternate screen and raw mode on stdout, crossterm input
// forwarded as TuiEvents, and a redraw tick at the configured frame rate.

use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
    tick_rate: Duration,
}

impl Tui {
    pub fn new(frame_rate: f64) -> anyhow::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            event_tx,
            event_rx,
            tick_rate: Duration::from_secs_f64(1.0 / frame_rate),
        })
    }

    /// Switch to the alternate screen and start forwarding input and ticks.
    pub fn enter(&mut self) -> anyhow::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;

        let tx = self.event_tx.clone();
        let tick_rate = self.tick_rate;
        tokio::spawn(async move {
            let mut input = EventStream::new();
            let mut ticker = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if tx.send(TuiEvent::Tick).is_err() {
                            break;
                        }
                    }
                    event = input.next() => match event {
                        // Some terminals also report release/repeat; only
                        // presses drive the app.
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            tx.send(TuiEvent::Key(key)).ok();
                        }
                        Some(Ok(CrosstermEvent::Resize(..))) => {
                            tx.send(TuiEvent::Resize).ok();
                        }
                        Some(Ok(_)) => {}
                        Some(Err(_)) | None => break,
                    },
                }
            }
        });
        Ok(())
    }

    /// Restore the terminal before handing it back to the shell.
    pub fn exit(&mut self) -> anyhow::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<TuiEvent> {
        self.event_rx.recv().await
    }

    pub fn draw<F>(&mut self, render: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}
