//! Element and recipe catalog.
//!
//! A [`Catalog`] is the read-only table a search runs against: which elements
//! exist, their tiers, which of them are base elements, and the alternative
//! recipes for every craftable element. Catalogs can be assembled in code or
//! loaded from a JSON or YAML document.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;
use thiserror::Error;

mod model;

use model::CatalogDocument;
pub use model::Recipe;

/// Errors that can occur when loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML catalog: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("Recipe for '{product}' references undeclared element '{element}'")]
    UnknownElement { product: String, element: String },
}

#[derive(Debug, Clone, Copy, Default)]
struct ElementInfo {
    tier: i64,
    base: bool,
}

/// Recipe, tier and base-element tables for one game.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    elements: HashMap<String, ElementInfo>,
    recipes: HashMap<String, Vec<Recipe>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Declares a base element. Base elements are never decomposed.
    pub fn add_base(&mut self, name: impl Into<String>, tier: i64) -> &mut Self {
        self.elements
            .insert(name.into(), ElementInfo { tier, base: true });
        self
    }

    /// Declares a craftable element with the given tier.
    pub fn add_element(&mut self, name: impl Into<String>, tier: i64) -> &mut Self {
        self.elements
            .insert(name.into(), ElementInfo { tier, base: false });
        self
    }

    /// Appends an alternative recipe for `product`.
    ///
    /// Alternatives are kept in insertion order.
    pub fn add_recipe(
        &mut self,
        product: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> &mut Self {
        let recipe = Recipe::new(product, first, second);
        self.recipes
            .entry(recipe.product.clone())
            .or_default()
            .push(recipe);
        self
    }

    /// Returns true if `element` is a base element.
    pub fn is_base(&self, element: &str) -> bool {
        self.elements.get(element).is_some_and(|info| info.base)
    }

    /// Returns the tier of `element`.
    ///
    /// Elements without a declared tier rank as tier 0.
    pub fn tier(&self, element: &str) -> i64 {
        self.elements.get(element).map_or(0, |info| info.tier)
    }

    /// Returns the alternative recipes producing `element`, in insertion order.
    pub fn recipes(&self, element: &str) -> &[Recipe] {
        self.recipes
            .get(element)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if `element` is declared or has at least one recipe.
    pub fn contains(&self, element: &str) -> bool {
        self.elements.contains_key(element) || self.recipes.contains_key(element)
    }

    /// Number of declared elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Parses a catalog from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        Catalog::from_document(document)
    }

    /// Parses a catalog from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(content)?;
        Catalog::from_document(document)
    }

    /// Loads a catalog file, picking the parser from its extension.
    ///
    /// Supports `.json`, `.yaml` and `.yml`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use craft_search::Catalog;
    /// use camino::Utf8Path;
    ///
    /// let catalog = Catalog::from_path(Utf8Path::new("data/elements.yaml"))?;
    /// assert!(catalog.is_base("water"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        match path.extension() {
            Some("json") => Catalog::from_json_str(&std::fs::read_to_string(path)?),
            Some("yaml") | Some("yml") => Catalog::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();

        for element in document.elements {
            if element.base {
                catalog.add_base(element.name, element.tier);
            } else {
                catalog.add_element(element.name, element.tier);
            }
        }

        for recipe in document.recipes {
            let [first, second] = recipe.ingredients;
            for name in [&recipe.product, &first, &second] {
                if !catalog.elements.contains_key(name) {
                    return Err(CatalogError::UnknownElement {
                        product: recipe.product.clone(),
                        element: name.clone(),
                    });
                }
            }
            catalog.add_recipe(recipe.product, first, second);
        }

        log::debug!(
            "Loaded catalog with {} elements and {} craftable products",
            catalog.elements.len(),
            catalog.recipes.len()
        );

        Ok(catalog)
    }
}
