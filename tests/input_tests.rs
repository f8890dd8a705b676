// Tests for reading and validating tree input

use diameter_viz::tree::constants::MAX_INPUT_LEN;
use diameter_viz::tree::input::{format_level_order, parse_and_validate, validate};
use diameter_viz::tree::presets::{find_preset, presets};
use diameter_viz::tree::{build_decorated, TreeInputError};
use test_case::test_case;

#[test_case(&[] => Err(TreeInputError::Empty) ; "empty")]
#[test_case(&[None, Some(1)] => Err(TreeInputError::NullRoot) ; "null root")]
#[test_case(&[Some(1), Some(101)] => Err(TreeInputError::ValueOutOfRange { index: 1, value: 101 }) ; "above range")]
#[test_case(&[Some(-101)] => Err(TreeInputError::ValueOutOfRange { index: 0, value: -101 }) ; "below range")]
#[test_case(&[Some(-100), None, Some(100)] => Ok(()) ; "range bounds")]
fn test_validation(values: &[Option<i32>]) -> Result<(), TreeInputError> {
    validate(values)
}

#[test]
fn test_too_large_is_checked_before_null_root() {
    let values = vec![None; MAX_INPUT_LEN + 1];
    assert_eq!(
        validate(&values),
        Err(TreeInputError::TooLarge {
            len: MAX_INPUT_LEN + 1
        })
    );
}

#[test]
fn test_largest_input_is_accepted() {
    let mut values = vec![None; MAX_INPUT_LEN];
    values[0] = Some(0);
    values[1] = Some(1);
    let tree = build_decorated(&values).unwrap();
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_parse_reports_bad_token() {
    assert_eq!(
        parse_and_validate("[1, two, 3]"),
        Err(TreeInputError::InvalidToken {
            index: 1,
            token: "two".to_string()
        })
    );
}

#[test]
fn test_formatted_presets_parse_back() {
    for preset in presets() {
        let text = format_level_order(preset.values);
        assert_eq!(parse_and_validate(&text).unwrap(), preset.values.to_vec());
    }
}

#[test]
fn test_preset_lookup_ignores_case() {
    assert_eq!(find_preset("EXAMPLE").unwrap().name, "example");
    assert_eq!(
        find_preset("nope"),
        Err(TreeInputError::UnknownPreset {
            name: "nope".to_string()
        })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(TreeInputError::Empty.to_string(), "tree input is empty");
    assert_eq!(
        TreeInputError::ValueOutOfRange {
            index: 2,
            value: 500
        }
        .to_string(),
        "value 500 at index 2 is outside [-100, 100]"
    );
}
