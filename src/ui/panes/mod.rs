//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: Bar chart of the current step, colored by highlight set
//! - [`code`]: Pseudocode for the selected algorithm with syntax highlighting
//! - [`info`]: Complexity labels, step description, legend and last-run stats
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each module exports a stateless `render_*` function; scroll offsets and
//! focus live in [`App`](crate::ui::App).

pub mod bars;
pub mod code;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use code::render_code_pane;
pub use info::{render_info_pane, InfoRenderData};
pub use status::render_status_bar;
