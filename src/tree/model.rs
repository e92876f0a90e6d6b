use serde::{Deserialize, Serialize};

/// Represents one node of a derivation tree
///
/// Two trees are equal when they name the same element and their ingredient
/// subtrees are equal in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeTree {
    /// Element produced at this node
    pub element: String,
    /// Subtrees for the two ingredients, absent for leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Box<(RecipeTree, RecipeTree)>>,
}

impl RecipeTree {
    pub fn leaf(element: impl Into<String>) -> Self {
        RecipeTree {
            element: element.into(),
            ingredients: None,
        }
    }

    pub fn node(element: impl Into<String>, first: RecipeTree, second: RecipeTree) -> Self {
        RecipeTree {
            element: element.into(),
            ingredients: Some(Box::new((first, second))),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.ingredients.is_none()
    }

    /// Returns the two ingredient subtrees, or `None` for a leaf.
    pub fn ingredients(&self) -> Option<(&RecipeTree, &RecipeTree)> {
        self.ingredients
            .as_deref()
            .map(|(first, second)| (first, second))
    }

    /// Leaf elements in left-to-right order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        match self.ingredients() {
            Some((first, second)) => {
                first.collect_leaves(leaves);
                second.collect_leaves(leaves);
            }
            None => leaves.push(&self.element),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self.ingredients() {
            Some((first, second)) => 1 + first.depth().max(second.depth()),
            None => 1,
        }
    }

    pub fn node_count(&self) -> usize {
        match self.ingredients() {
            Some((first, second)) => 1 + first.node_count() + second.node_count(),
            None => 1,
        }
    }
}
