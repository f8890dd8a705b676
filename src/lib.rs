//! # Introduction
//!
//! diameter-viz turns a binary tree, given as a level-order array, into an
//! ordered sequence of [`trace::AlgorithmStep`]s describing every move of the
//! depth-first diameter computation. The sequence is then navigated forward
//! and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), or dumped as JSON.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Validate → BinaryTree → DecoratedTree → Steps → Playback → TUI
//! ```
//!
//! 1. [`tree`]: parses and validates level-order input, builds the owned tree
//!    and decorates it with path ids, parent links and depths.
//! 2. [`trace`]: replays the algorithm over the decorated tree and records one
//!    step per observable action, plus offline [`trace::analysis`] helpers.
//! 3. [`playback`]: cursor over the step list with timed auto-play.
//! 4. [`layout`]: in-order column placement of nodes for drawing.
//! 5. [`config`]: command-line options.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use diameter_viz::trace::generate_steps;
//! use diameter_viz::tree::build_decorated;
//!
//! let tree = build_decorated(&[Some(1), Some(2), Some(3), Some(4), Some(5)]).unwrap();
//! let steps = generate_steps(&tree);
//! assert_eq!(steps.len(), 8 * 5 + 2);
//! assert_eq!(steps.last().unwrap().current_best_diameter, 3);
//! ```

pub mod config;
pub mod layout;
pub mod playback;
pub mod trace;
pub mod tree;
pub mod ui;
