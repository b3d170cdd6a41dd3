//! Randomized bucketing of a capture buffer into categories.

pub mod category;
pub mod partitioner;
pub mod sizer;

pub use category::{Category, CategorySet};
pub use partitioner::Partitioner;
pub use sizer::{RandomSizer, ScriptedSizer, SliceSizer, StdRandomSizer};
