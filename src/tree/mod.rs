//! Tree input and decoration
//!
//! This module turns user input into the structure the step generator walks:
//! - [`input`]: text parsing and the validation contract for level-order arrays
//! - [`binary`]: plain owned [`BinaryTree`] built from a level-order array
//! - [`decorated`]: arena of [`DecoratedNode`]s with path ids, parent links and depth
//! - [`presets`] / [`random`]: ready-made and randomly grown inputs
//! - [`errors`]: [`TreeInputError`]
//!
//! # Pipeline
//!
//! ```text
//! text → parse_level_order → validate → BinaryTree::from_level_order → decorate
//! ```
//!
//! Validation is the only failure point. Everything after it is total.

pub mod binary;
pub mod constants;
pub mod decorated;
pub mod errors;
pub mod input;
pub mod presets;
pub mod random;

pub use binary::BinaryTree;
pub use decorated::{decorate, DecoratedNode, DecoratedTree, NodeHandle, NodeId};
pub use errors::TreeInputError;

/// Validate a level-order array and build its decorated tree
pub fn build_decorated(values: &[Option<i32>]) -> Result<DecoratedTree, TreeInputError> {
    input::validate(values)?;
    let tree = BinaryTree::from_level_order(values);
    Ok(decorate(tree.as_ref()))
}
