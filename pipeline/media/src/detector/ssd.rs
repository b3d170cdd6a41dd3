//! SSD detector over OpenCV DNN.

use super::labels::coco_label;
use super::settings::DetectorSettings;
use crate::constants::SSD_ROW_LEN;
use crate::error::{MediaError, Result};
use crate::frame::VideoFrame;
use logging::Logger;
use opencv::core::{CV_32F, Scalar, Size};
use opencv::dnn::{self, Net};
use opencv::prelude::*;
use pipeline::{BoundingBox, Detector, DetectorLoader, PipelineError};

/// Single-shot detector trained on COCO.
pub struct SsdDetector {
    net: Net,
    settings: DetectorSettings,
    logger: Logger,
    frames: u64,
}

impl SsdDetector {
    /// Reads the network from disk.
    ///
    /// # Errors
    /// Returns `MediaError::Config` for missing files and
    /// `MediaError::OpenCv` if OpenCV cannot parse the model.
    pub fn load(settings: DetectorSettings, logger: Logger) -> Result<Self> {
        settings.validate()?;

        let model = settings.model.to_string_lossy().into_owned();
        let config = settings
            .config
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default();

        logger.info(&format!("Loading detector model {}", model));
        let net = dnn::read_net_from_tensorflow(&model, &config)?;
        if net.empty()? {
            return Err(MediaError::Detector(format!(
                "Model {} contains no layers",
                model
            )));
        }
        logger.info(&format!(
            "Detector ready (input {}px, min score {:.2})",
            settings.input_size, settings.min_score
        ));

        Ok(Self {
            net,
            settings,
            logger,
            frames: 0,
        })
    }

    /// Defers [`SsdDetector::load`] to the detection task.
    pub fn loader(settings: DetectorSettings, logger: Logger) -> DetectorLoader<VideoFrame> {
        Box::new(move || {
            let detector = SsdDetector::load(settings, logger)
                .map_err(|e| PipelineError::DetectorLoad(e.to_string()))?;
            Ok(Box::new(detector) as Box<dyn Detector<VideoFrame>>)
        })
    }

    pub fn settings(&self) -> &DetectorSettings {
        &self.settings
    }

    fn run(&mut self, frame: &VideoFrame) -> Result<Vec<BoundingBox>> {
        let image = frame.to_mat()?;
        let side = self.settings.input_size;
        // Frames are already RGB, which is what the TF models expect.
        let blob = dnn::blob_from_image(
            &image,
            1.0,
            Size::new(side, side),
            Scalar::default(),
            false,
            false,
            CV_32F,
        )?;

        self.net.set_input(&blob, "", 1.0, Scalar::default())?;
        let output = self.net.forward_single("")?;
        let rows = output.data_typed::<f32>()?;

        self.frames += 1;
        Ok(parse_detections(
            rows,
            frame.width(),
            frame.height(),
            self.settings.min_score,
        ))
    }
}

impl Detector<VideoFrame> for SsdDetector {
    fn detect(&mut self, frame: &VideoFrame) -> std::result::Result<Vec<BoundingBox>, PipelineError> {
        self.run(frame).map_err(|e| {
            self.logger.debug(&format!("Inference failed on frame {}: {}", self.frames, e));
            PipelineError::from(e)
        })
    }

    fn name(&self) -> &str {
        "ssd-coco"
    }
}

/// Turns raw SSD rows into pixel-space boxes.
///
/// Each row is `[image_id, class_id, score, x1, y1, x2, y2]` with corners
/// normalized to `[0, 1]`. Rows below `min_score` and degenerate boxes are
/// dropped; a trailing partial row is ignored.
pub fn parse_detections(rows: &[f32], width: u32, height: u32, min_score: f32) -> Vec<BoundingBox> {
    let (w, h) = (width as f32, height as f32);

    rows.chunks_exact(SSD_ROW_LEN)
        .filter(|row| row[2] >= min_score)
        .filter_map(|row| {
            let x1 = row[3].clamp(0.0, 1.0) * w;
            let y1 = row[4].clamp(0.0, 1.0) * h;
            let x2 = row[5].clamp(0.0, 1.0) * w;
            let y2 = row[6].clamp(0.0, 1.0) * h;
            if x2 <= x1 || y2 <= y1 {
                return None;
            }
            Some(BoundingBox::new(
                x1,
                y1,
                x2 - x1,
                y2 - y1,
                coco_label(row[1] as i32),
                row[2],
            ))
        })
        .collect()
}
