//! Named groups of captured images.

use std::sync::Arc;

/// A named group of images carved from one capture buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Category<I> {
    index: usize,
    name: String,
    images: Vec<I>,
}

/// Categories in display order, shared with renderers as one unit.
pub type CategorySet<I> = Arc<Vec<Category<I>>>;

impl<I> Category<I> {
    /// Creates `Category <index>`. Indices count from 1 per partition call.
    pub fn new(index: usize, images: Vec<I>) -> Self {
        Self {
            index,
            name: format!("Category {}", index),
            images,
        }
    }

    /// Creation index within its partition, starting at 1.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn images(&self) -> &[I] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
