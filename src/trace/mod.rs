//! Diameter trace engine
//!
//! - [`step`]: [`AlgorithmStep`] and its parts (variables, edges, animations)
//! - [`generator`]: walks a [`DecoratedTree`] and emits the full step sequence
//! - [`listing`]: the reference code the steps point into
//! - [`analysis`]: direct diameter / longest-path computation for checking
//!   traces and drawing the final path
//!
//! # Execution Model
//!
//! Generation runs to completion in one call and returns a materialized
//! `Vec<AlgorithmStep>`. Calls share nothing, so generating twice over the
//! same tree yields identical sequences.
//!
//! [`DecoratedTree`]: crate::tree::DecoratedTree

pub mod analysis;
pub mod generator;
pub mod listing;
pub mod step;

pub use generator::generate_steps;
pub use step::{AlgorithmStep, Animation, AnimationKind, CompareOutcome, Edge, VariableState};
