//! Input error types for tree construction
//!
//! [`TreeInputError`] covers everything that can go wrong between raw user
//! text and a valid level-order array. Once an array passes [`validate`],
//! decoration and step generation cannot fail.
//!
//! [`validate`]: crate::tree::input::validate

use super::constants::{MAX_INPUT_LEN, MAX_VALUE, MIN_VALUE};
use thiserror::Error;

/// Errors raised while parsing or validating a level-order tree array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeInputError {
    /// The array has no entries at all
    #[error("tree input is empty")]
    Empty,

    /// Index 0 is `null`, so there is no root
    #[error("root value must not be null")]
    NullRoot,

    /// A value lies outside the accepted range
    #[error("value {value} at index {index} is outside [{min}, {max}]", min = MIN_VALUE, max = MAX_VALUE)]
    ValueOutOfRange { index: usize, value: i32 },

    /// The array is longer than the accepted maximum
    #[error("tree input has {len} entries, limit is {limit}", limit = MAX_INPUT_LEN)]
    TooLarge { len: usize },

    /// A token could not be read as an integer or a null marker
    #[error("cannot read '{token}' at position {index} as a number or null")]
    InvalidToken { index: usize, token: String },

    /// No preset with this name exists
    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },
}
