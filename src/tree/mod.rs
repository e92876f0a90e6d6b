use crate::combination::CombinationMap;

mod model;
pub use model::RecipeTree;

/// Build the derivation tree rooted at `root` from a validated combination map
///
/// Elements with an assignment in `map` expand into their two ingredients;
/// every other element becomes a leaf. The map's tier invariant guarantees
/// the recursion terminates.
pub fn build_tree(root: &str, map: &CombinationMap) -> RecipeTree {
    match map.get(root) {
        Some((first, second)) => {
            RecipeTree::node(root, build_tree(first, map), build_tree(second, map))
        }
        None => RecipeTree::leaf(root),
    }
}
