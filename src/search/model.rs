use crate::tree::RecipeTree;
use serde::{Deserialize, Serialize};

/// Default number of direct-recipe branches explored at the same time.
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// Unique derivation trees found for one target, with the work spent finding them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Trees in acceptance order. The order varies between runs.
    pub trees: Vec<RecipeTree>,
    /// Number of exploration steps performed, including the top-level call
    pub steps: usize,
}

impl SearchResult {
    pub(crate) fn new(trees: Vec<RecipeTree>, steps: usize) -> Self {
        Self { trees, steps }
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

/// Tuning knobs for a [`Searcher`](super::Searcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Upper bound on concurrently explored direct recipes. Zero counts as one.
    pub max_workers: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl SearchOptions {
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub(crate) fn worker_limit(&self) -> usize {
        self.max_workers.max(1)
    }
}

/// Converts the caller's recipe cap into an optional limit. Non-positive means unlimited.
pub(crate) fn recipe_limit(max_recipes: i64) -> Option<usize> {
    usize::try_from(max_recipes).ok().filter(|&limit| limit > 0)
}
