use egui::ColorImage;
use media::VideoFrame;
use pipeline::{CaptureRecord, CaptureSummary, DisplayFeed, PipelineError};
use std::fmt;

/// Events sent from the Logic thread back to the UI thread
pub enum LogicEvent {
    /// Camera opened; the pipeline cells are ready to render
    PipelineReady {
        feed: DisplayFeed<VideoFrame>,
        width: u32,
        height: u32,
    },
    /// Camera could not be opened
    CameraUnavailable(String),
    /// Latest preview frame
    PreviewFrame(ColorImage),
    CaptureStarted,
    /// Cycle finished; history records for its frames
    CaptureFinished {
        summary: CaptureSummary,
        records: Vec<CaptureRecord>,
    },
    /// Capture request refused (already running, no camera)
    CaptureRejected(PipelineError),
    /// Detector could not be loaded; overlay stays empty
    DetectorFailed(String),
}

impl fmt::Debug for LogicEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicEvent::PipelineReady { width, height, .. } => {
                write!(f, "PipelineReady({}x{})", width, height)
            }
            LogicEvent::CameraUnavailable(msg) => write!(f, "CameraUnavailable({})", msg),
            LogicEvent::PreviewFrame(image) => {
                write!(f, "PreviewFrame({}x{})", image.size[0], image.size[1])
            }
            LogicEvent::CaptureStarted => write!(f, "CaptureStarted"),
            LogicEvent::CaptureFinished { summary, records } => write!(
                f,
                "CaptureFinished(#{}, {} frames, {} records)",
                summary.session,
                summary.frames,
                records.len()
            ),
            LogicEvent::CaptureRejected(err) => write!(f, "CaptureRejected({})", err),
            LogicEvent::DetectorFailed(msg) => write!(f, "DetectorFailed({})", msg),
        }
    }
}
