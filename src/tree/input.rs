//! Parsing and validation of level-order tree input
//!
//! Accepted text forms:
//!
//! ```text
//! [1, 2, 3, null, 5]
//! 1 2 3 null 5
//! 1,2,3,,5
//! ```
//!
//! Brackets are optional. `null`, `none`, `nil`, `_`, `#` and empty
//! comma-separated slots are absent children.

use super::constants::{MAX_INPUT_LEN, MAX_VALUE, MIN_VALUE};
use super::errors::TreeInputError;

/// Parse user text into a level-order array without validating bounds
pub fn parse_level_order(text: &str) -> Result<Vec<Option<i32>>, TreeInputError> {
    let trimmed = text.trim();
    let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let has_commas = inner.contains(',');
    let tokens: Vec<&str> = if has_commas {
        inner.split(',').map(str::trim).collect()
    } else {
        inner.split_whitespace().collect()
    };

    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| parse_token(index, token))
        .collect()
}

fn parse_token(index: usize, token: &str) -> Result<Option<i32>, TreeInputError> {
    let lowered = token.to_ascii_lowercase();
    match lowered.as_str() {
        "" | "null" | "none" | "nil" | "_" | "#" => Ok(None),
        _ => token
            .parse::<i32>()
            .map(Some)
            .map_err(|_| TreeInputError::InvalidToken {
                index,
                token: token.to_string(),
            }),
    }
}

/// Check a level-order array against the input bounds.
///
/// Rules are checked in order: empty, too large, null root, value range.
pub fn validate(values: &[Option<i32>]) -> Result<(), TreeInputError> {
    if values.is_empty() {
        return Err(TreeInputError::Empty);
    }

    if values.len() > MAX_INPUT_LEN {
        return Err(TreeInputError::TooLarge { len: values.len() });
    }

    if values[0].is_none() {
        return Err(TreeInputError::NullRoot);
    }

    for (index, value) in values.iter().enumerate() {
        if let Some(v) = *value {
            if !(MIN_VALUE..=MAX_VALUE).contains(&v) {
                return Err(TreeInputError::ValueOutOfRange { index, value: v });
            }
        }
    }

    Ok(())
}

/// Parse and validate in one go
pub fn parse_and_validate(text: &str) -> Result<Vec<Option<i32>>, TreeInputError> {
    let values = parse_level_order(text)?;
    validate(&values)?;
    Ok(values)
}

/// Format a level-order array the way it is accepted as input
pub fn format_level_order(values: &[Option<i32>]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| match v {
            Some(n) => n.to_string(),
            None => "null".to_string(),
        })
        .collect();
    format!("[{}]", items.join(", "))
}
