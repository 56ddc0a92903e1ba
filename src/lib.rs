// Library root — re-exports all modules so integration tests can `use cinesearch::*`.

pub mod action;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod query;
pub mod theme;
pub mod tui;
pub mod ui;
