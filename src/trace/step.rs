//! Step data model
//!
//! An [`AlgorithmStep`] is one frozen instant of the simulated run. Steps hold
//! node ids and stringified values only, never references into the tree, so
//! a finished sequence can be indexed, cloned or serialized freely.

use crate::tree::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A label/value pair shown beside a line of the reference code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableState {
    pub name: String,
    pub value: String,
    pub source_line: usize,
}

impl VariableState {
    pub fn new(name: &str, value: impl ToString, source_line: usize) -> Self {
        VariableState {
            name: name.to_string(),
            value: value.to_string(),
            source_line,
        }
    }
}

/// A parent → child edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub parent_id: NodeId,
    pub child_id: NodeId,
}

impl Edge {
    pub fn new(parent_id: NodeId, child_id: NodeId) -> Self {
        Edge {
            parent_id,
            child_id,
        }
    }
}

/// Result symbol of a compare step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOutcome {
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "≤")]
    NotGreater,
}

impl CompareOutcome {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOutcome::Greater => ">",
            CompareOutcome::Less => "<",
            CompareOutcome::Equal => "=",
            CompareOutcome::NotGreater => "≤",
        }
    }
}

impl fmt::Display for CompareOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Bare classification of the transition into a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    None,
    RecursionEnter,
    RecursionExit,
    ReturnValue,
    Compare,
    UpdateDiameter,
    ParamPass,
}

/// Transition into a step together with its kind-specific payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Animation {
    None,
    RecursionEnter {
        node: NodeId,
    },
    /// `to` is `None` when returning to the top-level caller
    RecursionExit {
        from: NodeId,
        to: Option<NodeId>,
        value: usize,
    },
    /// For an empty child, `from` is the calling node and `to` is `None`
    ReturnValue {
        from: Option<NodeId>,
        to: Option<NodeId>,
        value: usize,
    },
    Compare {
        left: usize,
        right: usize,
        outcome: CompareOutcome,
    },
    UpdateDiameter {
        value: usize,
    },
    /// `to`/`value` are `None` when the callee is an empty child
    ParamPass {
        from: NodeId,
        to: Option<NodeId>,
        value: Option<i32>,
    },
}

impl Animation {
    pub fn kind(&self) -> AnimationKind {
        match self {
            Animation::None => AnimationKind::None,
            Animation::RecursionEnter { .. } => AnimationKind::RecursionEnter,
            Animation::RecursionExit { .. } => AnimationKind::RecursionExit,
            Animation::ReturnValue { .. } => AnimationKind::ReturnValue,
            Animation::Compare { .. } => AnimationKind::Compare,
            Animation::UpdateDiameter { .. } => AnimationKind::UpdateDiameter,
            Animation::ParamPass { .. } => AnimationKind::ParamPass,
        }
    }

    /// Short human-readable form for the narration pane
    pub fn summary(&self) -> String {
        match self {
            Animation::None => String::new(),
            Animation::RecursionEnter { node } => format!("enter {}", node),
            Animation::RecursionExit { from, to, value } => match to {
                Some(to) => format!("{} ⇒ {} returns {}", from, to, value),
                None => format!("{} ⇒ caller returns {}", from, value),
            },
            Animation::ReturnValue { from, to, value } => match (from, to) {
                (Some(from), Some(to)) => format!("{} ⇐ {} value {}", to, from, value),
                // Empty child: `from` is the caller receiving depth 0
                (Some(caller), None) => format!("{} ⇐ ∅ value {}", caller, value),
                (None, Some(to)) => format!("{} ⇐ ∅ value {}", to, value),
                (None, None) => format!("∅ value {}", value),
            },
            Animation::Compare {
                left,
                right,
                outcome,
            } => format!("{} {} {}", left, outcome, right),
            Animation::UpdateDiameter { value } => format!("diameter = {}", value),
            Animation::ParamPass { from, to, value } => match (to, value) {
                (Some(to), Some(value)) => format!("{} → {} (node {})", from, to, value),
                _ => format!("{} → null", from),
            },
        }
    }
}

/// One immutable snapshot of the simulated run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmStep {
    /// Position in the sequence (0-based, contiguous)
    pub step_index: usize,
    pub description: String,
    pub current_node_id: Option<NodeId>,
    /// Root-to-current path at this instant
    pub highlighted_node_ids: Vec<NodeId>,
    pub highlighted_edges: Vec<Edge>,
    /// Best path found so far; reset whenever the running maximum improves
    pub diameter_path_so_far: Vec<NodeId>,
    pub current_best_diameter: usize,
    pub variables: Vec<VariableState>,
    pub source_line_number: usize,
    pub animation: Animation,
    pub left_child_depth: Option<usize>,
    pub right_child_depth: Option<usize>,
}

impl AlgorithmStep {
    pub fn animation_kind(&self) -> AnimationKind {
        self.animation.kind()
    }

    /// Variables anchored to a given reference line
    pub fn variables_on_line(&self, line: usize) -> impl Iterator<Item = &VariableState> {
        self.variables.iter().filter(move |v| v.source_line == line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_serializes_tagged_by_kind() {
        let animation = Animation::Compare {
            left: 3,
            right: 1,
            outcome: CompareOutcome::Greater,
        };
        let json = serde_json::to_value(&animation).unwrap();
        assert_eq!(json["kind"], "compare");
        assert_eq!(json["left"], 3);
        assert_eq!(json["outcome"], ">");

        let none = serde_json::to_value(Animation::None).unwrap();
        assert_eq!(none["kind"], "none");
    }

    #[test]
    fn test_kind_matches_variant() {
        let pass = Animation::ParamPass {
            from: NodeId::root(),
            to: Some(NodeId::root().left()),
            value: Some(2),
        };
        assert_eq!(pass.kind(), AnimationKind::ParamPass);
        assert_eq!(pass.summary(), "root → root-L (node 2)");
        assert_eq!(
            Animation::UpdateDiameter { value: 3 }.kind(),
            AnimationKind::UpdateDiameter
        );
    }

    #[test]
    fn test_empty_child_return_reads_toward_caller() {
        let empty = Animation::ReturnValue {
            from: Some(NodeId::root()),
            to: None,
            value: 0,
        };
        assert_eq!(empty.summary(), "root ⇐ ∅ value 0");

        let child = Animation::ReturnValue {
            from: Some(NodeId::root().left()),
            to: Some(NodeId::root()),
            value: 2,
        };
        assert_eq!(child.summary(), "root ⇐ root-L value 2");
    }
}
