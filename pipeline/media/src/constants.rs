//! Constants shared across media modules

/// Log camera progress every N frames.
pub const CAMERA_LOG_INTERVAL: u64 = 1000;

/// Values reported by a device are trusted up to 8K.
pub const MAX_WIDTH: u32 = 7680;
pub const MAX_HEIGHT: u32 = 4320;

/// Fallback resolution for devices reporting nonsense.
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// SSD output rows are `[image_id, class_id, score, x1, y1, x2, y2]`.
pub const SSD_ROW_LEN: usize = 7;

/// Square input side of the COCO SSD MobileNet models.
pub const DEFAULT_INPUT_SIZE: i32 = 300;

/// Boxes below this confidence are dropped.
pub const DEFAULT_MIN_SCORE: f32 = 0.5;
