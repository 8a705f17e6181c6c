use super::mode::AppMode;
use crate::frame::RevealFrame;

/// Immutable snapshot handed to the renderer each frame.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub frame: RevealFrame,
    pub progress: f64,
    pub mode: AppMode,
    pub source: String,
    pub status: Option<String>,
    /// Command deck buffer while the deck is open.
    pub command_input: Option<String>,
}
