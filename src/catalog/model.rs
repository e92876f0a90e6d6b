use serde::{Deserialize, Serialize};

/// One way of producing an element from two ingredients.
///
/// The ingredient order is significant: `first + second` and `second + first`
/// are distinct recipes, and trees built from them are distinct trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    /// Element this recipe produces
    pub product: String,
    /// Left-hand ingredient
    pub first: String,
    /// Right-hand ingredient
    pub second: String,
}

impl Recipe {
    pub fn new(
        product: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Recipe {
            product: product.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Element declaration as it appears in a catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ElementEntry {
    pub name: String,
    #[serde(default)]
    pub tier: i64,
    #[serde(default)]
    pub base: bool,
}

/// Recipe declaration as it appears in a catalog document.
///
/// `ingredients` is a fixed-size pair, so documents listing one or three
/// ingredients fail to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RecipeEntry {
    pub product: String,
    pub ingredients: [String; 2],
}

/// On-disk shape of a catalog, shared by the JSON and YAML loaders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct CatalogDocument {
    #[serde(default)]
    pub elements: Vec<ElementEntry>,
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
}
