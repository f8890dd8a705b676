//! Named sample trees

use super::errors::TreeInputError;

/// A named level-order sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub summary: &'static str,
    pub values: &'static [Option<i32>],
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "example",
        summary: "classic example, diameter 3 through the root",
        values: &[Some(1), Some(2), Some(3), Some(4), Some(5)],
    },
    Preset {
        name: "single",
        summary: "one node, diameter 0",
        values: &[Some(5)],
    },
    Preset {
        name: "pair",
        summary: "root with one left child, diameter 1",
        values: &[Some(1), Some(2)],
    },
    Preset {
        name: "left-chain",
        summary: "every node hangs to the left",
        values: &[
            Some(1),
            Some(2),
            None,
            Some(3),
            None,
            None,
            None,
            Some(4),
        ],
    },
    Preset {
        name: "right-chain",
        summary: "every node hangs to the right",
        values: &[
            Some(1),
            None,
            Some(2),
            None,
            None,
            None,
            Some(3),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            Some(4),
        ],
    },
    Preset {
        name: "balanced",
        summary: "perfect tree of height 3",
        values: &[
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            Some(6),
            Some(7),
        ],
    },
    Preset {
        name: "off-root",
        summary: "longest path stays inside the left subtree",
        values: &[
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            None,
            None,
            Some(6),
            None,
            None,
            Some(7),
            None,
            None,
            None,
            None,
            Some(8),
            None,
            None,
            None,
            None,
            None,
            Some(9),
        ],
    },
    Preset {
        name: "zigzag",
        summary: "alternating left and right descents",
        values: &[
            Some(1),
            Some(2),
            None,
            None,
            Some(3),
            None,
            None,
            None,
            None,
            Some(4),
        ],
    },
];

/// All built-in presets in display order
pub fn presets() -> &'static [Preset] {
    PRESETS
}

/// Look up a preset by name (case-insensitive)
pub fn find_preset(name: &str) -> Result<&'static Preset, TreeInputError> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| TreeInputError::UnknownPreset {
            name: name.to_string(),
        })
}
