pub mod catalog;
pub mod combination;
pub mod search;
pub mod tree;

pub use catalog::{Catalog, CatalogError, Recipe};
pub use combination::CombinationMap;
pub use search::{
    search, LogObserver, NoopObserver, SearchError, SearchObserver, SearchOptions, SearchResult,
    Searcher,
};
pub use tree::{build_tree, RecipeTree};
