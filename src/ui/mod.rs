//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, week and animation selection
//! - **[`panes`]**: stateless render functions for each visible pane (header, canvas,
//!   code, activity log, status bar)
//! - **[`theme`]**: terminal colour palettes for the classic and lotr themes
//!
//! The entry point for consumers is [`App`]: construct it from [`Settings`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Settings`]: crate::settings::Settings
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
