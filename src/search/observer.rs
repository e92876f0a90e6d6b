//! Progress notifications emitted while a search runs.

use crate::catalog::Recipe;

/// Receives progress events from a running search.
///
/// Branch events carry the zero-indexed position of the direct recipe among
/// the target's alternatives. Events for different branches arrive from
/// different worker threads and may interleave.
pub trait SearchObserver: Send + Sync {
    /// The target has `direct_recipes` alternatives to consider.
    fn search_started(&self, _target: &str, _direct_recipes: usize) {}

    /// A direct recipe was dropped because an ingredient does not rank below the target.
    fn branch_pruned(&self, _index: usize, _recipe: &Recipe) {}

    fn branch_started(&self, _index: usize, _recipe: &Recipe) {}

    /// A branch finished with `valid_combinations` complete hypotheses.
    fn branch_completed(&self, _index: usize, _recipe: &Recipe, _valid_combinations: usize) {}

    /// A tree from branch `index` was accepted at `position` in the result.
    fn tree_accepted(&self, _index: usize, _position: usize) {}

    fn search_completed(&self, _target: &str, _total: usize) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Narrates progress through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn search_started(&self, target: &str, direct_recipes: usize) {
        log::info!("Found {direct_recipes} direct recipes for '{target}'");
    }

    fn branch_pruned(&self, index: usize, recipe: &Recipe) {
        log::debug!(
            "Skipping recipe #{} ({} + {} => {}): tier violation",
            index + 1,
            recipe.first,
            recipe.second,
            recipe.product
        );
    }

    fn branch_started(&self, index: usize, recipe: &Recipe) {
        log::debug!(
            "Exploring recipe #{}: {} + {} => {}",
            index + 1,
            recipe.first,
            recipe.second,
            recipe.product
        );
    }

    fn branch_completed(&self, index: usize, recipe: &Recipe, valid_combinations: usize) {
        log::debug!(
            "Recipe #{} ({} + {} => {}) complete with {} valid combination(s)",
            index + 1,
            recipe.first,
            recipe.second,
            recipe.product,
            valid_combinations
        );
    }

    fn tree_accepted(&self, index: usize, position: usize) {
        log::trace!("Accepted tree #{} from recipe #{}", position + 1, index + 1);
    }

    fn search_completed(&self, target: &str, total: usize) {
        log::info!("Search for '{target}' complete: {total} unique tree(s)");
    }
}
