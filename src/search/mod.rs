//! Derivation search.
//!
//! A [`Searcher`] enumerates every distinct [`RecipeTree`] producing a target
//! element. Each direct recipe of the target is explored as one unit of work
//! on a bounded worker pool; the units feed a shared, deduplicating collector
//! that stops accepting trees once the caller's cap is reached.

use crate::catalog::{Catalog, Recipe};
use crate::combination::CombinationMap;
use crate::tree::{build_tree, RecipeTree};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use thiserror::Error;

mod aggregator;
mod explore;
mod gate;
mod model;
mod observer;

use aggregator::{Aggregator, Offer};
use explore::{explore_pair, StepCounter};
use gate::AdmissionGate;
pub use model::{SearchOptions, SearchResult, DEFAULT_MAX_WORKERS};
pub use observer::{LogObserver, NoopObserver, SearchObserver};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to start search workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Runs derivation searches against one catalog.
///
/// The worker pool is created once and reused by every search.
///
/// # Examples
///
/// ```
/// use craft_search::{Catalog, SearchOptions, Searcher};
/// use std::sync::Arc;
///
/// let mut catalog = Catalog::new();
/// catalog
///     .add_base("water", 0)
///     .add_base("earth", 0)
///     .add_element("mud", 1)
///     .add_recipe("mud", "water", "earth");
///
/// let searcher = Searcher::new(Arc::new(catalog), SearchOptions::default())?;
/// let result = searcher.search("mud", 0);
/// assert_eq!(result.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Searcher {
    catalog: Arc<Catalog>,
    options: SearchOptions,
    pool: ThreadPool,
    observer: Arc<dyn SearchObserver>,
}

impl Searcher {
    pub fn new(catalog: Arc<Catalog>, options: SearchOptions) -> Result<Self, SearchError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(options.worker_limit())
            .thread_name(|i| format!("craft-search-{i}"))
            .build()?;

        Ok(Searcher {
            catalog,
            options,
            pool,
            observer: Arc::new(LogObserver),
        })
    }

    /// Replaces the default [`LogObserver`].
    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Finds up to `max_recipes` distinct trees for `target`.
    ///
    /// A non-positive `max_recipes` means no cap. Base targets yield a single
    /// leaf. Unknown targets, and targets whose every recipe is pruned, yield
    /// an empty result. Tree order reflects acceptance order and varies
    /// between runs.
    pub fn search(&self, target: &str, max_recipes: i64) -> SearchResult {
        let steps = StepCounter::default();
        steps.increment();

        if self.catalog.is_base(target) {
            return SearchResult::new(vec![RecipeTree::leaf(target)], steps.value());
        }

        let recipes = self.catalog.recipes(target);
        if recipes.is_empty() {
            log::info!("Target element '{target}' doesn't exist or can't be created");
            return SearchResult::new(Vec::new(), steps.value());
        }

        self.observer.search_started(target, recipes.len());

        let aggregator = Aggregator::new(model::recipe_limit(max_recipes));
        let gate = AdmissionGate::new(self.options.worker_limit());
        let (steps_ref, aggregator_ref) = (&steps, &aggregator);

        self.pool.in_place_scope(|scope| {
            for (index, recipe) in recipes.iter().enumerate() {
                let Some(seed) =
                    CombinationMap::new().assign(&self.catalog, target, &recipe.first, &recipe.second)
                else {
                    self.observer.branch_pruned(index, recipe);
                    continue;
                };

                let permit = gate.acquire();
                // Best effort: branches already running may still fill the cap.
                if aggregator.is_full() {
                    log::debug!("Result cap reached, not dispatching recipe #{}", index + 1);
                    break;
                }

                scope.spawn(move |_| {
                    let _permit = permit;
                    self.explore_branch(index, recipe, seed, steps_ref, aggregator_ref);
                });
            }
        });

        let trees = aggregator.into_trees();
        self.observer.search_completed(target, trees.len());
        SearchResult::new(trees, steps.value())
    }

    fn explore_branch(
        &self,
        index: usize,
        recipe: &Recipe,
        seed: CombinationMap,
        steps: &StepCounter,
        aggregator: &Aggregator,
    ) {
        self.observer.branch_started(index, recipe);

        let combinations = explore_pair(&self.catalog, &recipe.first, &recipe.second, seed, steps);

        let mut valid = 0;
        for combination in combinations
            .iter()
            .filter(|combination| combination.is_complete(&self.catalog))
        {
            valid += 1;
            let tree = build_tree(&recipe.product, combination);
            if let Offer::Accepted(position) = aggregator.offer(tree) {
                self.observer.tree_accepted(index, position);
            }
        }

        self.observer.branch_completed(index, recipe, valid);
    }
}

/// Searches `catalog` for `target` with default options.
pub fn search(
    catalog: Arc<Catalog>,
    target: &str,
    max_recipes: i64,
) -> Result<SearchResult, SearchError> {
    Ok(Searcher::new(catalog, SearchOptions::default())?.search(target, max_recipes))
}
