//! Display ordering for category sets.

use crate::partition::Category;

/// Orders categories by population, largest first.
///
/// The sort is stable, so equal-sized categories keep their creation order
/// and ordering an already ordered set changes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOrderer;

impl DisplayOrderer {
    pub fn order<I>(&self, mut categories: Vec<Category<I>>) -> Vec<Category<I>> {
        categories.sort_by(|a, b| b.len().cmp(&a.len()));
        categories
    }
}
