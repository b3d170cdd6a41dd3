//! A single captured frame and its metadata.

/// Author recorded for every capture until users can name themselves.
pub const PLACEHOLDER_AUTHOR: &str = "Unknown author";

/// Image pulled during a capture session, plus placeholder metadata.
///
/// Immutable once created; the image moves into a category at partition time.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame<I> {
    image: I,
    title: String,
    author: String,
    timestamp: i64,
}

impl<I> CapturedFrame<I> {
    /// Creates a frame with placeholder title and author.
    ///
    /// # Arguments
    /// * `image` - The captured image handle
    /// * `timestamp` - Capture time in milliseconds since the Unix epoch
    pub fn new(image: I, timestamp: i64) -> Self {
        Self {
            image,
            title: format!("Capture - {}", timestamp),
            author: PLACEHOLDER_AUTHOR.to_string(),
            timestamp,
        }
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Releases the image, dropping the metadata.
    pub fn into_image(self) -> I {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_metadata() {
        let frame = CapturedFrame::new("img", 1_700_000_000_123);

        assert_eq!(frame.title(), "Capture - 1700000000123");
        assert_eq!(frame.author(), PLACEHOLDER_AUTHOR);
        assert_eq!(frame.timestamp(), 1_700_000_000_123);
        assert_eq!(*frame.image(), "img");
    }

    #[test]
    fn test_into_image() {
        let frame = CapturedFrame::new(vec![1u8, 2, 3], 5);
        assert_eq!(frame.title(), "Capture - 5");
        assert_eq!(frame.into_image(), vec![1, 2, 3]);
    }
}
