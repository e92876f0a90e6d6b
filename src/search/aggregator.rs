//! Shared, deduplicating collector for accepted trees.

use crate::tree::RecipeTree;
use parking_lot::Mutex;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Outcome of offering a tree to the [`Aggregator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Offer {
    /// Appended at the given zero-indexed position
    Accepted(usize),
    /// A structurally equal tree was already present
    Duplicate,
    /// The cap was reached before this tree arrived
    Full,
}

#[derive(Default)]
struct Accepted {
    trees: Vec<RecipeTree>,
    /// fingerprint -> positions in `trees` with that fingerprint
    index: HashMap<u64, Vec<usize>>,
}

pub(crate) struct Aggregator {
    limit: Option<usize>,
    accepted: Mutex<Accepted>,
}

impl Aggregator {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            accepted: Mutex::new(Accepted::default()),
        }
    }

    /// Appends `tree` unless an equal tree is present or the cap is reached.
    ///
    /// The check and the append happen under one lock acquisition.
    pub(crate) fn offer(&self, tree: RecipeTree) -> Offer {
        let fingerprint = fingerprint(&tree);
        let mut accepted = self.accepted.lock();

        let duplicate = accepted
            .index
            .get(&fingerprint)
            .is_some_and(|positions| positions.iter().any(|&i| accepted.trees[i] == tree));
        if duplicate {
            return Offer::Duplicate;
        }
        if self.limit.is_some_and(|limit| accepted.trees.len() >= limit) {
            return Offer::Full;
        }

        let position = accepted.trees.len();
        accepted.trees.push(tree);
        accepted.index.entry(fingerprint).or_default().push(position);
        Offer::Accepted(position)
    }

    pub(crate) fn is_full(&self) -> bool {
        self.limit
            .is_some_and(|limit| self.accepted.lock().trees.len() >= limit)
    }

    pub(crate) fn into_trees(self) -> Vec<RecipeTree> {
        self.accepted.into_inner().trees
    }
}

fn fingerprint(tree: &RecipeTree) -> u64 {
    let mut hasher = DefaultHasher::new();
    tree.hash(&mut hasher);
    hasher.finish()
}
