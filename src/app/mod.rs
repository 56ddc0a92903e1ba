// Central coordinator: owns the components, the TMDB client, and the query
// controller. Runs the event loop (key → Action → handle_action → draw).

mod fetch;
mod input;

use tokio::sync::mpsc;

use crate::action::{Action, Notice};
use crate::api::tmdb::TmdbClient;
use crate::components::movie_grid::MovieGrid;
use crate::components::movie_modal::MovieModal;
use crate::components::search_bar::SearchBar;
use crate::components::Component;
use crate::config::Config;
use crate::query::{QueryController, QueryState, Submission};
use crate::theme::Theme;
use crate::tui::{Tui, TuiEvent};
use crate::ui;

pub const NO_MOVIES_NOTICE: &str = "No movies found for your request.";

/// Top-level coordinator: owns every component, the API client, and the
/// per-query fetch state. Runs the main event loop.
pub struct App {
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    // Components
    pub search_bar: SearchBar,
    pub movie_grid: MovieGrid,
    pub movie_modal: MovieModal,

    // State
    client: TmdbClient,
    pub controller: QueryController,
    pub(crate) config: Config,
    pub(crate) theme: Theme,
    pub show_help: bool,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api_key = config.tmdb.api_key.clone().unwrap_or_default();
        let client = TmdbClient::with_base_url(api_key, config.tmdb.base_url.clone());
        Self::with_client(config, client)
    }

    /// Construct with an explicit client (tests point it at a mock server).
    pub fn with_client(config: Config, client: TmdbClient) -> anyhow::Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut search_bar = SearchBar::new();
        let mut movie_grid = MovieGrid::new();
        let mut movie_modal = MovieModal::new();

        for component in [
            &mut search_bar as &mut dyn Component,
            &mut movie_grid,
            &mut movie_modal,
        ] {
            component.register_action_handler(action_tx.clone());
        }

        let theme = Theme::from_name(&config.general.theme);

        Ok(Self {
            running: true,
            action_tx,
            action_rx,
            search_bar,
            movie_grid,
            movie_modal,
            client,
            controller: QueryController::new(),
            config,
            theme,
            show_help: false,
            notice: None,
            notice_seq: 0,
        })
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new(self.config.general.frame_rate)?;
        tui.enter()?;

        while self.running {
            let state = ui::DrawState {
                search_bar: &self.search_bar,
                movie_grid: &self.movie_grid,
                movie_modal: &self.movie_modal,
                query_state: self.controller.state(),
                notice: &self.notice,
                show_help: self.show_help,
                theme: &self.theme,
            };
            tui.draw(|frame| ui::draw(frame, &state))?;

            tokio::select! {
                Some(event) = tui.next_event() => {
                    match event {
                        TuiEvent::Key(key) => self.handle_key(key)?,
                        TuiEvent::Resize => {} // ratatui redraws at correct size automatically
                        TuiEvent::Tick => { self.action_tx.send(Action::Tick)?; }
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await?;
                }
            }
        }

        tui.exit()?;
        Ok(())
    }

    pub async fn handle_action(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            // Lifecycle
            Action::Quit => self.running = false,

            // Search
            Action::SubmitSearch(query) => self.submit_search(&query)?,
            Action::SearchCompleted { query_id, result } => {
                if self.controller.complete(query_id, result) {
                    self.sync_grid();
                    self.notify_if_no_results()?;
                }
            }
            Action::RetrySearch => {
                if matches!(self.controller.state(), QueryState::Error(_)) {
                    let key = self.controller.active_key().to_string();
                    self.controller.invalidate_active();
                    self.submit_search(&key)?;
                }
            }

            // Selection
            Action::OpenMovie(movie) => self.movie_modal.open(movie),
            Action::CloseModal => self.movie_modal.close(),

            // Notices & help
            Action::ShowNotice(notice) => {
                self.notice = Some(notice);
                self.notice_seq += 1;
                let seq = self.notice_seq;
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(tokio::time::Duration::from_secs(4)).await;
                    tx.send(Action::NoticeExpired(seq)).ok();
                });
            }
            Action::ClearNotice => self.notice = None,
            // A timer armed for an older notice must not clear a newer one.
            Action::NoticeExpired(seq) => {
                if seq == self.notice_seq {
                    self.notice = None;
                }
            }
            Action::ShowHelp => self.show_help = true,
            Action::HideHelp => self.show_help = false,

            // Forward anything unhandled to components
            ref action => {
                let results = self.movie_grid.update(action)?;
                for a in results {
                    self.action_tx.send(a)?;
                }
                self.search_bar.update(action)?;
            }
        }
        Ok(())
    }

    /// Make `query` the active search key. Issues a fetch only when the
    /// controller has no cached result and no identical fetch in flight.
    fn submit_search(&mut self, query: &str) -> anyhow::Result<()> {
        let previous_key = self.controller.active_key().to_string();
        match self.controller.submit(query) {
            Submission::Fetch { query_id } => {
                // Grid policy: clear stale results immediately, show the
                // loader until the new data arrives.
                self.movie_grid.clear();
                self.movie_grid.set_loading(true);
                self.spawn_search(query.to_string(), query_id);
            }
            Submission::Cached => {
                self.sync_grid();
                if previous_key != query {
                    self.notify_if_no_results()?;
                }
            }
            Submission::InFlight => {}
        }
        Ok(())
    }

    /// Mirror the controller state into the grid.
    fn sync_grid(&mut self) {
        match self.controller.state() {
            QueryState::Success(movies) => self.movie_grid.set_movies(movies.clone()),
            QueryState::Loading => {
                self.movie_grid.clear();
                self.movie_grid.set_loading(true);
            }
            QueryState::Idle | QueryState::Error(_) => {
                self.movie_grid.clear();
                self.movie_grid.set_loading(false);
            }
        }
    }

    /// Fires the "no movies found" notice. Called exactly once per transition
    /// into an empty success for a non-empty key: when a fetch result is
    /// applied, or when a cache hit switches the display from another key.
    fn notify_if_no_results(&mut self) -> anyhow::Result<()> {
        if !self.controller.active_key().is_empty() && self.controller.state().is_empty_success() {
            self.action_tx
                .send(Action::ShowNotice(Notice::info(NO_MOVIES_NOTICE)))?;
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    #[allow(dead_code)] // used by integration tests
    pub async fn flush_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            let _ = self.handle_action(action).await;
        }
    }
}
