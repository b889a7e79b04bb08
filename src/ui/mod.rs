//! Terminal replay viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: viewer state, keyboard event loop, pane focus and auto-play
//! - **[`panes`]**: render functions for each visible pane (value bars or
//!   graph, step log, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a [`Replay`] and call
//! [`App::run`] to start the event loop. The viewer only reads the trace.
//!
//! [`Replay`]: crate::trace::replay::Replay
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
