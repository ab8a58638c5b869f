use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A viewport needs a non-zero extent on both axes to yield an aspect ratio.
    #[error("viewport must be non-zero, got {width}x{height}")]
    ZeroViewport { width: u32, height: u32 },
}
