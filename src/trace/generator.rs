//! Step generator
//!
//! Simulates the recursive diameter computation over a [`DecoratedTree`] and
//! records one [`AlgorithmStep`] per event. Emission order for a present node:
//!
//! ```text
//! enter
//! [param-pass left,  <left subtree>,  return left ]   or  <empty left>
//! [param-pass right, <right subtree>, return right]   or  <empty right>
//! compare (left + right vs best)
//! update diameter
//! compare (max(left, right))
//! exit
//! ```
//!
//! An empty child emits a single "empty, depth 0" return step and nothing
//! else. The whole run is bracketed by a start step, a root dispatch step
//! and a final result step, so a tree of `n` nodes yields `8n + 2` steps and
//! an empty tree yields 2.
//!
//! All running state lives in one [`StepGenerator`] owned by a single
//! [`generate_steps`] call.

use super::listing::*;
use super::step::{AlgorithmStep, Animation, CompareOutcome, Edge, VariableState};
use crate::tree::{DecoratedNode, DecoratedTree, NodeHandle, NodeId};

/// Which child of the current node is being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    fn line(self) -> usize {
        match self {
            Side::Left => LINE_LEFT_CALL,
            Side::Right => LINE_RIGHT_CALL,
        }
    }
}

/// Everything about a step except the running state the generator fills in
struct StepDraft {
    description: String,
    current: Option<NodeId>,
    path: Vec<NodeId>,
    active_edge: Option<Edge>,
    variables: Vec<VariableState>,
    line: usize,
    animation: Animation,
    child_depths: Option<(usize, usize)>,
}

impl StepDraft {
    fn new(description: String, line: usize, animation: Animation) -> Self {
        StepDraft {
            description,
            current: None,
            path: Vec::new(),
            active_edge: None,
            variables: Vec::new(),
            line,
            animation,
            child_depths: None,
        }
    }

    fn at(mut self, current: Option<&NodeId>, path: &[NodeId]) -> Self {
        self.current = current.cloned();
        self.path = path.to_vec();
        self
    }

    fn edge(mut self, edge: Option<Edge>) -> Self {
        self.active_edge = edge;
        self
    }

    fn vars(mut self, variables: Vec<VariableState>) -> Self {
        self.variables = variables;
        self
    }

    fn depths(mut self, left: usize, right: usize) -> Self {
        self.child_depths = Some((left, right));
        self
    }
}

/// Running state of one generation pass
pub struct StepGenerator<'t> {
    tree: &'t DecoratedTree,
    steps: Vec<AlgorithmStep>,
    best: usize,
    best_path: Vec<NodeId>,
}

/// Produce the full step sequence for a decorated tree
pub fn generate_steps(tree: &DecoratedTree) -> Vec<AlgorithmStep> {
    let steps = StepGenerator::new(tree).run();
    tracing::debug!(
        nodes = tree.len(),
        steps = steps.len(),
        diameter = steps.last().map_or(0, |s| s.current_best_diameter),
        "generated diameter trace"
    );
    steps
}

impl<'t> StepGenerator<'t> {
    pub fn new(tree: &'t DecoratedTree) -> Self {
        StepGenerator {
            tree,
            steps: Vec::with_capacity(tree.len() * 8 + 2),
            best: 0,
            best_path: Vec::new(),
        }
    }

    /// Consume the generator and return the finished sequence
    pub fn run(mut self) -> Vec<AlgorithmStep> {
        self.emit(
            StepDraft::new(
                "Start: diameter = 0".to_string(),
                LINE_INIT,
                Animation::None,
            )
            .vars(vec![VariableState::new("diameter", 0, LINE_INIT)]),
        );

        let Some(root) = self.tree.root() else {
            self.emit(
                StepDraft::new(
                    "Tree is empty, diameter is 0".to_string(),
                    LINE_RESULT,
                    Animation::None,
                )
                .vars(vec![VariableState::new("diameter", 0, LINE_RESULT)]),
            );
            return self.steps;
        };

        let tree = self.tree;
        let root_node = tree.get(root);
        self.emit(
            StepDraft::new(
                format!("Call depth(root) on node {}", root_node.value),
                LINE_CALL_ROOT,
                Animation::None,
            )
            .at(Some(&root_node.id), std::slice::from_ref(&root_node.id))
            .vars(vec![
                VariableState::new("root", root_node.value, LINE_CALL_ROOT),
                VariableState::new("diameter", 0, LINE_INIT),
            ]),
        );

        self.visit(root, &[], None);

        let best = self.best;
        self.emit(
            StepDraft::new(
                format!("Done: diameter is {}", best),
                LINE_RESULT,
                Animation::None,
            )
            .vars(vec![VariableState::new("diameter", best, LINE_RESULT)]),
        );

        self.steps
    }

    /// Stamp the running state onto a draft and append it
    fn emit(&mut self, draft: StepDraft) {
        let mut edges: Vec<Edge> = draft
            .path
            .windows(2)
            .map(|pair| Edge::new(pair[0].clone(), pair[1].clone()))
            .collect();
        if let Some(edge) = draft.active_edge {
            if !edges.contains(&edge) {
                edges.push(edge);
            }
        }

        let (left_child_depth, right_child_depth) = match draft.child_depths {
            Some((l, r)) => (Some(l), Some(r)),
            None => (None, None),
        };

        self.steps.push(AlgorithmStep {
            step_index: self.steps.len(),
            description: draft.description,
            current_node_id: draft.current,
            highlighted_node_ids: draft.path,
            highlighted_edges: edges,
            diameter_path_so_far: self.best_path.clone(),
            current_best_diameter: self.best,
            variables: draft.variables,
            source_line_number: draft.line,
            animation: draft.animation,
            left_child_depth,
            right_child_depth,
        });
    }

    /// Simulate `depth(node)` for a present node and return its depth
    fn visit(
        &mut self,
        handle: NodeHandle,
        parent_path: &[NodeId],
        parent: Option<&NodeId>,
    ) -> usize {
        let tree = self.tree;
        let node = tree.get(handle);
        let mut path = parent_path.to_vec();
        path.push(node.id.clone());

        self.emit(
            StepDraft::new(
                format!("Enter depth({})", node.value),
                LINE_DEPTH_FN,
                Animation::RecursionEnter {
                    node: node.id.clone(),
                },
            )
            .at(Some(&node.id), &path)
            .vars(vec![
                VariableState::new("node", node.value, LINE_DEPTH_FN),
                VariableState::new("diameter", self.best, LINE_DEPTH_FN),
            ]),
        );

        let left = self.visit_child(node, &path, Side::Left, None);
        let right = self.visit_child(node, &path, Side::Right, Some(left));

        let sum = left + right;
        let before = self.best;
        let outcome = if sum > before {
            CompareOutcome::Greater
        } else {
            CompareOutcome::NotGreater
        };
        self.emit(
            StepDraft::new(
                format!(
                    "Node {}: left + right = {} {} diameter {}",
                    node.value, sum, outcome, before
                ),
                LINE_UPDATE,
                Animation::Compare {
                    left: sum,
                    right: before,
                    outcome,
                },
            )
            .at(Some(&node.id), &path)
            .vars(vec![
                VariableState::new("left", left, LINE_LEFT_CALL),
                VariableState::new("right", right, LINE_RIGHT_CALL),
                VariableState::new("left + right", sum, LINE_UPDATE),
                VariableState::new("diameter", before, LINE_UPDATE),
            ])
            .depths(left, right),
        );

        let improved = sum > self.best;
        if improved {
            self.best = sum;
            self.best_path = vec![node.id.clone()];
        }

        let description = if improved {
            format!("Diameter improves to {} through node {}", self.best, node.value)
        } else {
            format!("Diameter stays {}", self.best)
        };
        self.emit(
            StepDraft::new(
                description,
                LINE_UPDATE,
                Animation::UpdateDiameter { value: self.best },
            )
            .at(Some(&node.id), &path)
            .vars(vec![
                VariableState::new("left", left, LINE_LEFT_CALL),
                VariableState::new("right", right, LINE_RIGHT_CALL),
                VariableState::new("diameter", self.best, LINE_UPDATE),
            ])
            .depths(left, right),
        );

        let deeper = left.max(right);
        let depth = deeper + 1;
        let outcome = match left.cmp(&right) {
            std::cmp::Ordering::Greater => CompareOutcome::Greater,
            std::cmp::Ordering::Less => CompareOutcome::Less,
            std::cmp::Ordering::Equal => CompareOutcome::Equal,
        };
        self.emit(
            StepDraft::new(
                format!(
                    "depth({}) = max({}, {}) + 1 = {}",
                    node.value, left, right, depth
                ),
                LINE_RETURN,
                Animation::Compare {
                    left,
                    right,
                    outcome,
                },
            )
            .at(Some(&node.id), &path)
            .vars(vec![
                VariableState::new("left", left, LINE_LEFT_CALL),
                VariableState::new("right", right, LINE_RIGHT_CALL),
                VariableState::new("max(left, right)", deeper, LINE_RETURN),
            ])
            .depths(left, right),
        );

        let target = match parent.and_then(|id| tree.find(id)) {
            Some(p) => format!("node {}", tree.get(p).value),
            None => "caller".to_string(),
        };
        self.emit(
            StepDraft::new(
                format!("Return {} from node {} to {}", depth, node.value, target),
                LINE_RETURN,
                Animation::RecursionExit {
                    from: node.id.clone(),
                    to: parent.cloned(),
                    value: depth,
                },
            )
            .at(Some(&node.id), &path)
            .edge(parent.map(|p| Edge::new(p.clone(), node.id.clone())))
            .vars(vec![VariableState::new("return", depth, LINE_RETURN)])
            .depths(left, right),
        );

        depth
    }

    /// Dispatch into one child of `node`. A present child gets a param-pass
    /// step, its own subtree and a return step; an empty child gets a single
    /// "depth 0" step.
    fn visit_child(
        &mut self,
        node: &DecoratedNode,
        path: &[NodeId],
        side: Side,
        left_depth: Option<usize>,
    ) -> usize {
        let child = match side {
            Side::Left => node.left,
            Side::Right => node.right,
        };

        let mut known = Vec::new();
        if let Some(left) = left_depth {
            known.push(VariableState::new("left", left, LINE_LEFT_CALL));
        }

        let Some(child) = child else {
            let mut variables = known;
            variables.push(VariableState::new(side.label(), 0, side.line()));
            let mut draft = StepDraft::new(
                format!(
                    "{} child of {} is empty, depth 0",
                    capitalize(side.label()),
                    node.value
                ),
                LINE_EMPTY_CHECK,
                Animation::ReturnValue {
                    from: Some(node.id.clone()),
                    to: None,
                    value: 0,
                },
            )
            .at(None, path)
            .vars(variables);
            if let Some(left) = left_depth {
                draft = draft.depths(left, 0);
            }
            self.emit(draft);
            return 0;
        };

        let tree = self.tree;
        let child_node = tree.get(child);
        let edge = Edge::new(node.id.clone(), child_node.id.clone());

        let mut pass_vars = known.clone();
        pass_vars.push(VariableState::new("node", node.value, LINE_DEPTH_FN));
        pass_vars.push(VariableState::new(
            &format!("node.{}", side.label()),
            child_node.value,
            side.line(),
        ));
        self.emit(
            StepDraft::new(
                format!(
                    "Node {}: call depth on {} child {}",
                    node.value,
                    side.label(),
                    child_node.value
                ),
                side.line(),
                Animation::ParamPass {
                    from: node.id.clone(),
                    to: Some(child_node.id.clone()),
                    value: Some(child_node.value),
                },
            )
            .at(Some(&node.id), path)
            .edge(Some(edge.clone()))
            .vars(pass_vars),
        );

        let depth = self.visit(child, path, Some(&node.id));

        let mut return_vars = known;
        return_vars.push(VariableState::new(side.label(), depth, side.line()));
        let mut draft = StepDraft::new(
            format!(
                "{} subtree of {} has depth {}",
                capitalize(side.label()),
                node.value,
                depth
            ),
            side.line(),
            Animation::ReturnValue {
                from: Some(child_node.id.clone()),
                to: Some(node.id.clone()),
                value: depth,
            },
        )
        .at(Some(&node.id), path)
        .edge(Some(edge))
        .vars(return_vars);
        if let Some(left) = left_depth {
            draft = draft.depths(left, depth);
        }
        self.emit(draft);

        depth
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::step::AnimationKind;
    use crate::tree::{decorate, BinaryTree};

    fn steps_for(values: &[Option<i32>]) -> Vec<AlgorithmStep> {
        let tree = BinaryTree::from_level_order(values);
        generate_steps(&decorate(tree.as_ref()))
    }

    fn kinds(steps: &[AlgorithmStep]) -> Vec<AnimationKind> {
        steps.iter().map(|s| s.animation_kind()).collect()
    }

    #[test]
    fn test_empty_tree_has_two_steps() {
        let steps = steps_for(&[]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].description, "Start: diameter = 0");
        assert!(steps[0].current_node_id.is_none());
        assert_eq!(steps[1].current_best_diameter, 0);
        assert_eq!(steps[1].source_line_number, LINE_RESULT);
    }

    #[test]
    fn test_single_node_sequence() {
        use AnimationKind as K;
        let steps = steps_for(&[Some(5)]);

        assert_eq!(
            kinds(&steps),
            vec![
                K::None,
                K::None,
                K::RecursionEnter,
                K::ReturnValue,
                K::ReturnValue,
                K::Compare,
                K::UpdateDiameter,
                K::Compare,
                K::RecursionExit,
                K::None
            ]
        );
        assert_eq!(steps.last().unwrap().current_best_diameter, 0);
        assert!(steps.iter().all(|s| s.diameter_path_so_far.is_empty()));

        // Empty children report from the calling node
        match &steps[3].animation {
            Animation::ReturnValue { from, to, value } => {
                assert_eq!(from.as_ref().unwrap().as_str(), "root");
                assert!(to.is_none());
                assert_eq!(*value, 0);
            }
            other => panic!("unexpected animation {:?}", other),
        }
        assert_eq!(steps[3].description, "Left child of 5 is empty, depth 0");
        assert!(steps[3].current_node_id.is_none());
        assert_eq!(steps[3].source_line_number, LINE_EMPTY_CHECK);
    }

    #[test]
    fn test_example_tree_order_and_result() {
        let steps = steps_for(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);
        assert_eq!(steps.len(), 8 * 5 + 2);

        // Enter order is pre-order over the tree
        let entered: Vec<&str> = steps
            .iter()
            .filter_map(|s| match &s.animation {
                Animation::RecursionEnter { node } => Some(node.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(entered, vec!["root", "root-L", "root-L-L", "root-L-R", "root-R"]);

        // Exit order is post-order
        let exited: Vec<&str> = steps
            .iter()
            .filter_map(|s| match &s.animation {
                Animation::RecursionExit { from, .. } => Some(from.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(exited, vec!["root-L-L", "root-L-R", "root-L", "root-R", "root"]);

        let last = steps.last().unwrap();
        assert_eq!(last.current_best_diameter, 3);
        assert_eq!(last.diameter_path_so_far, vec![NodeId::root()]);
    }

    #[test]
    fn test_update_reseeds_best_path() {
        let steps = steps_for(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);

        let updates: Vec<&AlgorithmStep> = steps
            .iter()
            .filter(|s| s.animation_kind() == AnimationKind::UpdateDiameter)
            .collect();
        let values: Vec<usize> = updates.iter().map(|s| s.current_best_diameter).collect();
        // Post-order: 4, 5, 2, 3, 1
        assert_eq!(values, vec![0, 0, 2, 2, 3]);
        assert_eq!(updates[2].diameter_path_so_far, vec![NodeId::from("root-L")]);
        assert_eq!(updates[4].diameter_path_so_far, vec![NodeId::root()]);
        assert_eq!(updates[4].left_child_depth, Some(2));
        assert_eq!(updates[4].right_child_depth, Some(1));
    }

    #[test]
    fn test_compare_captures_best_before_update() {
        let steps = steps_for(&[Some(1), Some(2)]);
        let compare = steps
            .iter()
            .find(|s| {
                s.current_node_id == Some(NodeId::root())
                    && s.source_line_number == LINE_UPDATE
                    && s.animation_kind() == AnimationKind::Compare
            })
            .unwrap();
        assert_eq!(
            compare.animation,
            Animation::Compare {
                left: 1,
                right: 0,
                outcome: CompareOutcome::Greater
            }
        );
        assert_eq!(compare.current_best_diameter, 0);

        let next = &steps[compare.step_index + 1];
        assert_eq!(next.animation, Animation::UpdateDiameter { value: 1 });
        assert_eq!(next.current_best_diameter, 1);
    }

    #[test]
    fn test_param_pass_only_for_present_children() {
        // Root has only a right child
        let steps = steps_for(&[Some(1), None, Some(2)]);
        let passes: Vec<&AlgorithmStep> = steps
            .iter()
            .filter(|s| s.animation_kind() == AnimationKind::ParamPass)
            .collect();
        assert_eq!(passes.len(), 1);
        assert_eq!(
            passes[0].animation,
            Animation::ParamPass {
                from: NodeId::root(),
                to: Some(NodeId::from("root-R")),
                value: Some(2)
            }
        );
        assert!(passes[0]
            .highlighted_edges
            .contains(&Edge::new(NodeId::root(), NodeId::from("root-R"))));
        assert_eq!(steps.len(), 8 * 2 + 2);
    }

    #[test]
    fn test_step_indices_and_paths() {
        let steps = steps_for(&[Some(1), Some(2), Some(3), Some(4)]);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_index, i);
            if let Some(current) = &step.current_node_id {
                assert_eq!(step.highlighted_node_ids.last(), Some(current));
                assert_eq!(step.highlighted_node_ids.first(), Some(&NodeId::root()));
            }
        }
    }
}
