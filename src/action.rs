// Every user interaction, async result, and internal event is represented as an
// Action variant. The App event loop dispatches these to component handlers.

use crate::api::models::Movie;

/// All events flowing through the app — user actions, async results, and
/// internal signals. The [`App`](crate::app::App) event loop dispatches
/// each variant to the appropriate handler.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,

    FocusSearch,
    SubmitSearch(String),
    SearchCompleted {
        query_id: u64,
        result: Result<Vec<Movie>, String>,
    },
    RetrySearch,

    OpenMovie(Movie),
    CloseModal,

    ShowNotice(Notice),
    ClearNotice,
    /// Timer-driven clear; only honored for the notice it was armed for.
    NoticeExpired(u64),
    ShowHelp,
    HideHelp,
    Tick,
}

/// Transient toast shown on the status line, auto-cleared after a few seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warn,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warn,
            message: message.into(),
        }
    }
}
