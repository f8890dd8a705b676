// Property tests over randomly generated valid trees

use diameter_viz::layout::{layout, LayoutOptions};
use diameter_viz::playback::Playback;
use diameter_viz::trace::analysis;
use diameter_viz::trace::{generate_steps, Animation};
use diameter_viz::tree::{build_decorated, BinaryTree};
use proptest::prelude::*;

/// Level-order arrays that pass validation: non-null root, values in range
fn valid_level_order() -> impl Strategy<Value = Vec<Option<i32>>> {
    (
        -100i32..=100,
        prop::collection::vec(prop::option::weighted(0.8, -100i32..=100), 0..40),
    )
        .prop_map(|(root, rest)| {
            let mut values = vec![Some(root)];
            values.extend(rest);
            values
        })
}

proptest! {
    #[test]
    fn step_indices_are_contiguous(values in valid_level_order()) {
        let tree = build_decorated(&values).unwrap();
        let steps = generate_steps(&tree);
        prop_assert_eq!(steps.len(), 8 * tree.len() + 2);
        for (i, step) in steps.iter().enumerate() {
            prop_assert_eq!(step.step_index, i);
        }
    }

    #[test]
    fn best_diameter_never_decreases(values in valid_level_order()) {
        let tree = build_decorated(&values).unwrap();
        let steps = generate_steps(&tree);
        for pair in steps.windows(2) {
            prop_assert!(pair[0].current_best_diameter <= pair[1].current_best_diameter);
        }
    }

    #[test]
    fn final_diameter_matches_direct_computation(values in valid_level_order()) {
        let tree = build_decorated(&values).unwrap();
        let steps = generate_steps(&tree);
        let last = steps.last().unwrap();
        prop_assert_eq!(last.current_best_diameter, analysis::diameter(&tree));
        prop_assert_eq!(analysis::longest_path(&tree).len(), analysis::diameter(&tree) + 1);
    }

    #[test]
    fn every_node_is_entered_and_exited_once(values in valid_level_order()) {
        let tree = build_decorated(&values).unwrap();
        let steps = generate_steps(&tree);
        let mut entered = vec![0usize; tree.len()];
        let mut exited = vec![0usize; tree.len()];
        for step in &steps {
            match &step.animation {
                Animation::RecursionEnter { node } => entered[tree.find(node).unwrap().0] += 1,
                Animation::RecursionExit { from, .. } => exited[tree.find(from).unwrap().0] += 1,
                _ => {}
            }
        }
        prop_assert!(entered.iter().all(|&n| n == 1));
        prop_assert!(exited.iter().all(|&n| n == 1));
    }

    #[test]
    fn highlighted_path_ends_at_current_node(values in valid_level_order()) {
        let tree = build_decorated(&values).unwrap();
        for step in generate_steps(&tree) {
            if let Some(current) = &step.current_node_id {
                prop_assert_eq!(step.highlighted_node_ids.last(), Some(current));
                let handle = tree.find(current).unwrap();
                prop_assert_eq!(step.highlighted_node_ids.len(), tree.get(handle).depth + 1);
            }
        }
    }

    #[test]
    fn decoration_is_deterministic(values in valid_level_order()) {
        let a = build_decorated(&values).unwrap();
        let b = build_decorated(&values).unwrap();
        let nodes_a: Vec<_> = a.iter().map(|(_, n)| (n.id.clone(), n.depth)).collect();
        let nodes_b: Vec<_> = b.iter().map(|(_, n)| (n.id.clone(), n.depth)).collect();
        prop_assert_eq!(nodes_a, nodes_b);
    }

    #[test]
    fn generation_is_idempotent(values in valid_level_order()) {
        let tree = build_decorated(&values).unwrap();
        prop_assert_eq!(generate_steps(&tree), generate_steps(&tree));
    }

    #[test]
    fn level_order_survives_rebuild(values in valid_level_order()) {
        let tree = BinaryTree::from_level_order(&values).unwrap();
        let again = BinaryTree::from_level_order(&tree.to_level_order()).unwrap();
        prop_assert_eq!(tree, again);
    }

    #[test]
    fn layout_columns_are_distinct(values in valid_level_order()) {
        let tree = build_decorated(&values).unwrap();
        let placed = layout(&tree, LayoutOptions::default());
        let mut xs: Vec<usize> = tree.iter().map(|(h, _)| placed.position(h).x).collect();
        xs.sort_unstable();
        xs.dedup();
        prop_assert_eq!(xs.len(), tree.len());
    }

    #[test]
    fn playback_walks_the_whole_sequence(values in valid_level_order()) {
        let tree = build_decorated(&values).unwrap();
        let mut playback = Playback::new(generate_steps(&tree));
        let mut visited = 1;
        while playback.step_forward().is_ok() {
            visited += 1;
        }
        prop_assert_eq!(visited, playback.len());
        prop_assert!(playback.is_at_end());
    }
}
