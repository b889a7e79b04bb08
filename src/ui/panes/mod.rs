//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: One horizontal bar per value, colored by the step's annotation
//! - [`graph`]: Node list with visit order and outgoing edges
//! - [`steps`]: Scrolling log of every step with the current one highlighted
//! - [`status`]: Status bar with keybindings and replay position
//! - `utils`: Border and scroll helpers shared by the panes
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! trace data; panes never modify the trace.

mod utils;

pub mod bars;
pub mod graph;
pub mod status;
pub mod steps;

pub use bars::{render_bars_pane, BarsRenderData};
pub use graph::{render_graph_pane, GraphRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use steps::{render_steps_pane, StepsScrollState};
