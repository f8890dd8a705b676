//! TUI pane rendering modules
//!
//! Each pane is a stateless render function plus, where it scrolls, a small
//! scroll-state type owned by the app.
//!
//! # Pane Modules
//!
//! - [`tree`]: Tree canvas with node/edge highlights for the current step
//! - [`source`]: Reference code with current line and inline variable values
//! - [`variables`]: Variable values of the current step
//! - [`narration`]: Step description, animation payload and running best
//! - [`status`]: Status bar with keybindings, playback state and edit input

pub mod narration;
pub mod source;
pub mod status;
pub mod tree;
pub mod variables;

pub use narration::render_narration_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use tree::{render_tree_pane, TreeRenderData, TreeScrollState};
pub use variables::render_variables_pane;
