/// Logic commands sent from UI thread to Logic thread
#[derive(Debug, Clone, PartialEq)]
pub enum LogicCommand {
    /// Run one capture cycle on a worker thread
    Capture,
    /// Stop the detection loop and preview, release the camera
    Shutdown,
}
