// Integration tests for the step sequence of whole trees

use diameter_viz::trace::analysis;
use diameter_viz::trace::{generate_steps, AlgorithmStep, Animation, AnimationKind};
use diameter_viz::tree::presets::presets;
use diameter_viz::tree::{build_decorated, NodeId};

fn steps_for(values: &[Option<i32>]) -> Vec<AlgorithmStep> {
    let tree = build_decorated(values).expect("valid tree");
    generate_steps(&tree)
}

fn kinds(steps: &[AlgorithmStep]) -> Vec<AnimationKind> {
    steps.iter().map(|s| s.animation_kind()).collect()
}

#[test]
fn test_example_tree_walkthrough() {
    let steps = steps_for(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);

    assert_eq!(steps.len(), 42);
    assert_eq!(steps[0].description, "Start: diameter = 0");
    assert_eq!(steps[0].animation, Animation::None);
    assert_eq!(steps[1].current_node_id, Some(NodeId::root()));
    assert_eq!(steps[1].animation, Animation::None);

    let last = steps.last().unwrap();
    assert_eq!(last.current_best_diameter, 3);
    assert_eq!(last.diameter_path_so_far, vec![NodeId::root()]);
    assert_eq!(last.description, "Done: diameter is 3");

    let updates: Vec<usize> = steps
        .iter()
        .filter_map(|s| match s.animation {
            Animation::UpdateDiameter { value } => Some(value),
            _ => None,
        })
        .collect();
    // Visited in post-order: 4, 5, 2, 3, 1
    assert_eq!(updates, vec![0, 0, 2, 2, 3]);
}

#[test]
fn test_enter_and_exit_pair_up() {
    let steps = steps_for(&[Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(7)]);

    let mut stack: Vec<NodeId> = Vec::new();
    for step in &steps {
        match &step.animation {
            Animation::RecursionEnter { node } => stack.push(node.clone()),
            Animation::RecursionExit { from, to, .. } => {
                assert_eq!(stack.pop().as_ref(), Some(from));
                assert_eq!(stack.last(), to.as_ref());
            }
            _ => {}
        }
    }
    assert!(stack.is_empty());
}

#[test]
fn test_exit_values_are_subtree_heights() {
    let values = [
        Some(1),
        Some(2),
        None,
        Some(3),
        None,
        None,
        None,
        Some(4),
    ];
    let tree = build_decorated(&values).unwrap();
    let depths = analysis::subtree_depths(&tree);
    let steps = generate_steps(&tree);

    for step in &steps {
        if let Animation::RecursionExit { from, value, .. } = &step.animation {
            let handle = tree.find(from).unwrap();
            assert_eq!(*value, depths[handle.0]);
        }
    }
}

#[test]
fn test_empty_tree_has_two_steps() {
    let tree = build_decorated(&[]).err();
    assert!(tree.is_some(), "empty input is rejected by validation");

    let empty = diameter_viz::tree::decorate(None);
    let steps = generate_steps(&empty);
    assert_eq!(steps.len(), 2);
    assert!(steps.iter().all(|s| s.current_best_diameter == 0));
    assert_eq!(kinds(&steps), vec![AnimationKind::None, AnimationKind::None]);
}

#[test]
fn test_every_preset_agrees_with_analysis() {
    for preset in presets() {
        let tree = build_decorated(preset.values).unwrap();
        let steps = generate_steps(&tree);
        assert_eq!(steps.len(), 8 * tree.len() + 2, "preset {}", preset.name);
        assert_eq!(
            steps.last().unwrap().current_best_diameter,
            analysis::diameter(&tree),
            "preset {}",
            preset.name
        );
    }
}

#[test]
fn test_generation_is_deterministic() {
    let values = [Some(3), Some(-1), Some(8), None, Some(0), Some(-100), Some(100)];
    assert_eq!(steps_for(&values), steps_for(&values));
}

#[test]
fn test_json_shape() {
    let steps = steps_for(&[Some(1), Some(2)]);
    let json = serde_json::to_value(&steps).unwrap();
    let first_enter = json
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["animation"]["kind"] == "recursionEnter")
        .unwrap();
    assert_eq!(first_enter["animation"]["node"], "root");
    assert_eq!(first_enter["currentNodeId"], "root");
    assert!(first_enter["stepIndex"].is_number());
    assert!(first_enter["highlightedEdges"].is_array());
}
