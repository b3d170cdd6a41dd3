//! Detector output types.

/// A labelled box in frame pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: String, score: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label,
            score,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Maps the box onto a surface scaled by `sx`, `sy`.
    pub fn scaled(&self, sx: f32, sy: f32) -> Self {
        Self {
            x: self.x * sx,
            y: self.y * sy,
            width: self.width * sx,
            height: self.height * sy,
            label: self.label.clone(),
            score: self.score,
        }
    }

    /// Clips the box to a `width` x `height` frame.
    pub fn clamped(&self, width: f32, height: f32) -> Self {
        let x = self.x.clamp(0.0, width);
        let y = self.y.clamp(0.0, height);
        Self {
            x,
            y,
            width: (self.right().min(width) - x).max(0.0),
            height: (self.bottom().min(height) - y).max(0.0),
            label: self.label.clone(),
            score: self.score,
        }
    }

    /// Label and score as shown on the overlay, e.g. `person 87%`.
    pub fn caption(&self) -> String {
        format!("{} {:.0}%", self.label, self.score * 100.0)
    }
}

/// Boxes found in one frame, with the frame size the overlay is drawn at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionResult {
    pub boxes: Vec<BoundingBox>,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl DetectionResult {
    pub fn new(boxes: Vec<BoundingBox>, frame_width: u32, frame_height: u32) -> Self {
        Self {
            boxes,
            frame_width,
            frame_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> BoundingBox {
        BoundingBox::new(10.0, 20.0, 100.0, 50.0, "person".to_string(), 0.874)
    }

    #[test]
    fn test_edges() {
        let b = person();
        assert_eq!(b.right(), 110.0);
        assert_eq!(b.bottom(), 70.0);
    }

    #[test]
    fn test_scaled() {
        let b = person().scaled(0.5, 2.0);
        assert_eq!((b.x, b.y, b.width, b.height), (5.0, 40.0, 50.0, 100.0));
        assert_eq!(b.label, "person");
    }

    #[test]
    fn test_clamped_to_frame() {
        let b = BoundingBox::new(-10.0, 30.0, 50.0, 100.0, "cup".to_string(), 0.5)
            .clamped(640.0, 100.0);
        assert_eq!((b.x, b.y, b.width, b.height), (0.0, 30.0, 40.0, 70.0));
    }

    #[test]
    fn test_caption() {
        assert_eq!(person().caption(), "person 87%");
    }
}
