//! Renderer seam and the feed that drives it.

use crate::detection::DetectionResult;
use crate::partition::{Category, CategorySet};
use crate::state_cell::{Stamped, StateCell};
use std::sync::Arc;

/// One category as a renderer shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub count: usize,
    /// `count / capacity`, in `[0, 1]`. Drives the progress bar width.
    pub fraction: f32,
}

impl CategoryRow {
    /// Builds rows in the given (display) order.
    pub fn from_categories<I>(categories: &[Category<I>], capacity: usize) -> Vec<CategoryRow> {
        categories
            .iter()
            .map(|category| CategoryRow {
                name: category.name().to_string(),
                count: category.len(),
                fraction: if capacity == 0 {
                    0.0
                } else {
                    (category.len() as f32 / capacity as f32).min(1.0)
                },
            })
            .collect()
    }
}

/// Something that draws category rows and the detection overlay.
pub trait Renderer {
    fn update(
        &mut self,
        categories: &Stamped<Vec<CategoryRow>>,
        detections: &Stamped<DetectionResult>,
    );
}

/// Pushes the two pipeline cells to a renderer when either has changed.
pub struct DisplayFeed<I> {
    categories: StateCell<CategorySet<I>>,
    detections: StateCell<DetectionResult>,
    capacity: usize,
    last_seen: Option<(u64, u64)>,
}

impl<I> DisplayFeed<I> {
    pub fn new(
        categories: StateCell<CategorySet<I>>,
        detections: StateCell<DetectionResult>,
        capacity: usize,
    ) -> Self {
        Self {
            categories,
            detections,
            capacity,
            last_seen: None,
        }
    }

    /// Calls [`Renderer::update`] if a cell was published since the last
    /// push. Returns whether the renderer was updated.
    pub fn push_to(&mut self, renderer: &mut impl Renderer) -> bool {
        let rows = self.categories.read(|stamped| Stamped {
            value: CategoryRow::from_categories(&stamped.value, self.capacity),
            version: stamped.version,
            updated_at: stamped.updated_at,
        });
        let detections = self.detections.snapshot();

        let versions = (rows.version, detections.version);
        if self.last_seen == Some(versions) {
            return false;
        }
        self.last_seen = Some(versions);

        renderer.update(&rows, &detections);
        true
    }

    /// Current category set, shared rather than copied.
    pub fn categories(&self) -> CategorySet<I> {
        self.categories.read(|stamped| Arc::clone(&stamped.value))
    }
}
