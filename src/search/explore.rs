//! Recursive enumeration of ingredient-assignment hypotheses.

use crate::catalog::Catalog;
use crate::combination::CombinationMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Work counter shared by every branch of one search.
#[derive(Debug, Default)]
pub(crate) struct StepCounter(AtomicUsize);

impl StepCounter {
    pub(crate) fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn value(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// Enumerate every way to resolve `element` on top of `map`.
///
/// Base elements and elements already assigned in `map` resolve to `map`
/// itself. Otherwise each recipe whose ingredients rank below `element` is
/// assigned and both ingredients are resolved in turn, so every alternative
/// of every sub-element multiplies the number of returned maps. An element
/// with no usable recipe yields nothing.
pub(crate) fn explore_element(
    catalog: &Catalog,
    element: &str,
    map: CombinationMap,
    steps: &StepCounter,
) -> Vec<CombinationMap> {
    steps.increment();

    if catalog.is_base(element) || map.contains(element) {
        return vec![map];
    }

    let mut results = Vec::new();
    for recipe in catalog.recipes(element) {
        let Some(assigned) = map.assign(catalog, element, &recipe.first, &recipe.second) else {
            log::trace!(
                "Pruned {} + {} => {}: tier violation",
                recipe.first,
                recipe.second,
                element
            );
            continue;
        };

        results.extend(explore_pair(
            catalog,
            &recipe.first,
            &recipe.second,
            assigned,
            steps,
        ));
    }

    results
}

/// Resolve `first`, then `second` on top of every map resolving `first`.
///
/// `seed` is expected to already hold the assignment for the product of
/// `first + second`.
pub(crate) fn explore_pair(
    catalog: &Catalog,
    first: &str,
    second: &str,
    seed: CombinationMap,
    steps: &StepCounter,
) -> Vec<CombinationMap> {
    explore_element(catalog, first, seed, steps)
        .into_iter()
        .flat_map(|resolved| explore_element(catalog, second, resolved, steps))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{build_tree, RecipeTree};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_base("water", 0)
            .add_base("earth", 0)
            .add_base("fire", 0)
            .add_element("mud", 1)
            .add_element("clay", 1)
            .add_element("brick", 2)
            .add_recipe("mud", "water", "earth")
            .add_recipe("mud", "earth", "water")
            .add_recipe("mud", "mud", "water")
            .add_recipe("brick", "mud", "fire")
            .add_recipe("brick", "clay", "fire");
        catalog
    }

    #[test]
    fn test_base_element_returns_map_unchanged() {
        let catalog = catalog();
        let steps = StepCounter::default();

        let maps = explore_element(&catalog, "water", CombinationMap::new(), &steps);

        assert_eq!(maps.len(), 1);
        assert!(maps[0].is_empty());
        assert_eq!(steps.value(), 1);
    }

    #[test]
    fn test_dead_end_yields_nothing() {
        let catalog = catalog();
        let steps = StepCounter::default();

        assert!(explore_element(&catalog, "clay", CombinationMap::new(), &steps).is_empty());
        assert_eq!(steps.value(), 1);
    }

    #[test]
    fn test_alternatives_multiply() {
        let catalog = catalog();
        let steps = StepCounter::default();

        let maps = explore_element(&catalog, "mud", CombinationMap::new(), &steps);

        // The third recipe uses mud itself and is pruned.
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0].get("mud"), Some(("water", "earth")));
        assert_eq!(maps[1].get("mud"), Some(("earth", "water")));
        // One call for mud, two ingredient calls per surviving recipe.
        assert_eq!(steps.value(), 5);
    }

    #[test]
    fn test_assigned_element_is_reused() {
        let catalog = catalog();
        let steps = StepCounter::default();
        let seeded = CombinationMap::new()
            .assign(&catalog, "mud", "earth", "water")
            .unwrap();

        let maps = explore_element(&catalog, "mud", seeded, &steps);

        assert_eq!(maps.len(), 1);
        assert_eq!(maps[0].get("mud"), Some(("earth", "water")));
    }

    #[test]
    fn test_explore_pair_builds_trees() {
        let catalog = catalog();
        let steps = StepCounter::default();
        let seed = CombinationMap::new()
            .assign(&catalog, "brick", "mud", "fire")
            .unwrap();

        let maps = explore_pair(&catalog, "mud", "fire", seed, &steps);
        let trees: Vec<RecipeTree> = maps
            .iter()
            .filter(|map| map.is_complete(&catalog))
            .map(|map| build_tree("brick", map))
            .collect();

        assert_eq!(trees.len(), 2);
        assert_eq!(
            trees[0],
            RecipeTree::node(
                "brick",
                RecipeTree::node("mud", RecipeTree::leaf("water"), RecipeTree::leaf("earth")),
                RecipeTree::leaf("fire"),
            )
        );
    }
}
