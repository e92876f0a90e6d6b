//! Ingredient-assignment hypotheses.
//!
//! A [`CombinationMap`] records, for one candidate derivation, which recipe was
//! chosen for every intermediate element. Maps are persistent: assigning a
//! recipe returns a new map that shares its tail with the original, so sibling
//! branches of the search never observe each other's choices and no branch
//! pays for a deep copy.

use crate::catalog::Catalog;
use std::sync::Arc;

#[derive(Debug)]
struct Assignment {
    element: String,
    first: String,
    second: String,
    next: Option<Arc<Assignment>>,
}

/// One self-consistent hypothesis mapping elements to their chosen ingredients.
///
/// Every key's ingredients rank strictly below the key's tier, which bounds
/// the depth of any tree built from the map.
#[derive(Debug, Clone, Default)]
pub struct CombinationMap {
    head: Option<Arc<Assignment>>,
    len: usize,
}

impl CombinationMap {
    pub fn new() -> Self {
        CombinationMap::default()
    }

    /// Returns a copy of this map with `element` assigned to `first + second`.
    ///
    /// Returns `None` when either ingredient's tier is not strictly lower than
    /// the element's tier, or when `element` already has an assignment. The
    /// original map is never modified.
    pub fn assign(&self, catalog: &Catalog, element: &str, first: &str, second: &str) -> Option<Self> {
        let tier = catalog.tier(element);
        if catalog.tier(first) >= tier || catalog.tier(second) >= tier {
            return None;
        }
        if self.contains(element) {
            return None;
        }

        Some(CombinationMap {
            head: Some(Arc::new(Assignment {
                element: element.to_string(),
                first: first.to_string(),
                second: second.to_string(),
                next: self.head.clone(),
            })),
            len: self.len + 1,
        })
    }

    /// Returns the ingredient pair assigned to `element`, if any.
    pub fn get(&self, element: &str) -> Option<(&str, &str)> {
        self.iter()
            .find(|(key, _, _)| *key == element)
            .map(|(_, first, second)| (first, second))
    }

    pub fn contains(&self, element: &str) -> bool {
        self.get(element).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates `(element, first, second)` assignments, newest first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    /// Returns true if every non-base ingredient in the map is itself assigned.
    ///
    /// Incomplete maps describe derivations with a dangling intermediate and
    /// must not be turned into trees.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.iter().all(|(_, first, second)| {
            [first, second]
                .into_iter()
                .all(|ingredient| catalog.is_base(ingredient) || self.contains(ingredient))
        })
    }
}

/// Iterator over the assignments of a [`CombinationMap`].
pub struct Iter<'a> {
    current: Option<&'a Assignment>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let assignment = self.current?;
        self.current = assignment.next.as_deref();
        Some((
            assignment.element.as_str(),
            assignment.first.as_str(),
            assignment.second.as_str(),
        ))
    }
}
