//! Random tree generation
//!
//! Trees are grown top-down in level order: each present node gets each
//! child with probability `fill`, until `max_nodes` nodes exist or
//! `max_levels` is reached. The root is always present, so the result always
//! passes [`validate`](crate::tree::input::validate).

use super::constants::{MAX_INPUT_LEN, MAX_VALUE, MIN_VALUE};
use rand::Rng;

/// Shape and value bounds for [`random_level_order`]
#[derive(Debug, Clone, Copy)]
pub struct RandomTreeOptions {
    pub max_nodes: usize,
    pub max_levels: usize,
    /// Probability that a present node gets a given child
    pub fill: f64,
    pub min_value: i32,
    pub max_value: i32,
}

impl Default for RandomTreeOptions {
    fn default() -> Self {
        RandomTreeOptions {
            max_nodes: 12,
            max_levels: 5,
            fill: 0.7,
            min_value: 1,
            max_value: 99,
        }
    }
}

/// Generate a random heap-indexed level-order array
pub fn random_level_order<R: Rng + ?Sized>(
    rng: &mut R,
    options: RandomTreeOptions,
) -> Vec<Option<i32>> {
    let min_value = options.min_value.clamp(MIN_VALUE, MAX_VALUE);
    let max_value = options.max_value.clamp(min_value, MAX_VALUE);
    let fill = options.fill.clamp(0.0, 1.0);
    let max_nodes = options.max_nodes.max(1);
    // A level-order array of L levels needs 2^L - 1 slots
    let max_levels = options
        .max_levels
        .clamp(1, (MAX_INPUT_LEN + 1).ilog2() as usize);

    let mut slots: Vec<Option<i32>> = vec![Some(rng.gen_range(min_value..=max_value))];
    let mut count = 1;
    let mut frontier = vec![0usize];

    for _level in 1..max_levels {
        let mut next = Vec::new();
        for &index in &frontier {
            for child in [2 * index + 1, 2 * index + 2] {
                if count >= max_nodes || !rng.gen_bool(fill) {
                    continue;
                }
                if slots.len() <= child {
                    slots.resize(child + 1, None);
                }
                slots[child] = Some(rng.gen_range(min_value..=max_value));
                count += 1;
                next.push(child);
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::binary::BinaryTree;
    use crate::tree::input::validate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_trees_are_valid_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = RandomTreeOptions::default();
        for _ in 0..200 {
            let values = random_level_order(&mut rng, options);
            assert!(validate(&values).is_ok());
            let tree = BinaryTree::from_level_order(&values).unwrap();
            assert!(tree.node_count() <= options.max_nodes);
            assert!(tree.height() <= options.max_levels);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let options = RandomTreeOptions::default();
        let a = random_level_order(&mut StdRng::seed_from_u64(42), options);
        let b = random_level_order(&mut StdRng::seed_from_u64(42), options);
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_fill_builds_perfect_tree() {
        let options = RandomTreeOptions {
            max_nodes: 100,
            max_levels: 3,
            fill: 1.0,
            ..RandomTreeOptions::default()
        };
        let values = random_level_order(&mut StdRng::seed_from_u64(1), options);
        assert_eq!(values.len(), 7);
        assert!(values.iter().all(Option::is_some));
    }
}
