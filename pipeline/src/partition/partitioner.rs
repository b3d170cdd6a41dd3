//! Carves a capture buffer into contiguous, randomly sized categories.

use super::category::Category;
use super::sizer::{RandomSizer, SliceSizer, StdRandomSizer};
use crate::capture::CaptureBuffer;

/// Splits buffers into categories using draws from a [`SliceSizer`].
///
/// Every frame lands in exactly one category, in capture order, and
/// category names are `Category 1`, `Category 2`, ... in creation order.
pub struct Partitioner<Z: SliceSizer> {
    sizer: Z,
}

impl Partitioner<StdRandomSizer> {
    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn random(seed: Option<u64>) -> Self {
        let sizer = match seed {
            Some(seed) => RandomSizer::seeded(seed),
            None => RandomSizer::from_entropy(),
        };
        Self::new(sizer)
    }
}

impl<Z: SliceSizer> Partitioner<Z> {
    pub fn new(sizer: Z) -> Self {
        Self { sizer }
    }

    /// Consumes the buffer. An empty buffer gives no categories.
    pub fn partition<I>(&mut self, buffer: CaptureBuffer<I>) -> Vec<Category<I>> {
        let mut frames = buffer.into_frames().into_iter();
        let mut remaining = frames.len();
        let mut categories = Vec::new();

        while remaining > 0 {
            let size = self.sizer.next_size(remaining).clamp(1, remaining);
            let images: Vec<I> = frames
                .by_ref()
                .take(size)
                .map(|frame| frame.into_image())
                .collect();
            remaining -= images.len();
            categories.push(Category::new(categories.len() + 1, images));
        }

        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CapturedFrame;
    use crate::partition::ScriptedSizer;

    fn buffer(n: u32) -> CaptureBuffer<u32> {
        CaptureBuffer::from_frames(25, (1..=n).map(|id| CapturedFrame::new(id, 0)))
    }

    #[test]
    fn test_scripted_draws() {
        let mut partitioner = Partitioner::new(ScriptedSizer::new([2, 1, 2]));

        let categories = partitioner.partition(buffer(5));

        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].name(), "Category 1");
        assert_eq!(categories[0].images(), &[1, 2]);
        assert_eq!(categories[1].name(), "Category 2");
        assert_eq!(categories[1].images(), &[3]);
        assert_eq!(categories[2].name(), "Category 3");
        assert_eq!(categories[2].images(), &[4, 5]);
    }

    #[test]
    fn test_empty_buffer_gives_no_categories() {
        let mut partitioner = Partitioner::random(Some(1));
        assert!(partitioner.partition(buffer(0)).is_empty());
    }

    #[test]
    fn test_out_of_range_draws_are_clamped() {
        let mut partitioner = Partitioner::new(ScriptedSizer::new([0, 99]));

        let categories = partitioner.partition(buffer(4));

        let sizes: Vec<usize> = categories.iter().map(Category::len).collect();
        assert_eq!(sizes, vec![1, 3]);
    }

    #[test]
    fn test_random_partition_covers_buffer_in_order() {
        let mut partitioner = Partitioner::random(Some(2024));

        for n in 1..=25 {
            let categories = partitioner.partition(buffer(n));

            assert!(!categories.is_empty());
            assert!(categories.len() <= n as usize);
            let total: usize = categories.iter().map(Category::len).sum();
            assert_eq!(total, n as usize);

            let flattened: Vec<u32> = categories
                .iter()
                .flat_map(|c| c.images().iter().copied())
                .collect();
            assert_eq!(flattened, (1..=n).collect::<Vec<_>>());

            for (i, category) in categories.iter().enumerate() {
                assert_eq!(category.index(), i + 1);
                assert_eq!(category.name(), format!("Category {}", i + 1));
            }
        }
    }

    #[test]
    fn test_single_frame_gives_single_category() {
        let mut partitioner = Partitioner::random(None);
        let categories = partitioner.partition(buffer(1));
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].images(), &[1]);
    }
}
