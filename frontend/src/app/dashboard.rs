//! Renderer side of the pipeline: holds the latest category rows and
//! detections for the view to draw.

use pipeline::{CategoryRow, DetectionResult, Renderer, Stamped};

#[derive(Debug, Default)]
pub struct Dashboard {
    pub rows: Vec<CategoryRow>,
    pub detections: DetectionResult,
    categories_version: u64,
    detections_version: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for Dashboard {
    fn update(
        &mut self,
        categories: &Stamped<Vec<CategoryRow>>,
        detections: &Stamped<DetectionResult>,
    ) {
        if categories.version != self.categories_version {
            self.rows = categories.value.clone();
            self.categories_version = categories.version;
        }
        if detections.version != self.detections_version {
            self.detections = detections.value.clone();
            self.detections_version = detections.version;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::{BoundingBox, Category, DisplayFeed, StateCell};
    use std::sync::Arc;

    fn categories(counts: &[usize]) -> Arc<Vec<Category<u32>>> {
        let mut next = 0;
        Arc::new(
            counts
                .iter()
                .enumerate()
                .map(|(i, &n)| {
                    let images = (next..next + n as u32).collect();
                    next += n as u32;
                    Category::new(i + 1, images)
                })
                .collect(),
        )
    }

    #[test]
    fn test_dashboard_follows_feed() {
        let category_cell = StateCell::new(categories(&[]));
        let detection_cell = StateCell::new(DetectionResult::default());
        let mut feed = DisplayFeed::new(category_cell.clone(), detection_cell.clone(), 25);
        let mut dashboard = Dashboard::new();

        assert!(feed.push_to(&mut dashboard));
        assert!(dashboard.rows.is_empty());

        category_cell.publish(categories(&[4, 3, 1]));
        assert!(feed.push_to(&mut dashboard));
        let counts: Vec<usize> = dashboard.rows.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![4, 3, 1]);
        assert_eq!(dashboard.rows[0].fraction, 4.0 / 25.0);

        detection_cell.publish(DetectionResult::new(
            vec![BoundingBox::new(1.0, 2.0, 3.0, 4.0, "cup".to_string(), 0.7)],
            640,
            480,
        ));
        assert!(feed.push_to(&mut dashboard));
        assert_eq!(dashboard.detections.boxes.len(), 1);
        assert_eq!(
            (dashboard.categories_version, dashboard.detections_version),
            (1, 1)
        );

        assert!(!feed.push_to(&mut dashboard));
    }
}
