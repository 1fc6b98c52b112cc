use thiserror::Error;

/// Failures when turning caller-supplied configuration strings into motion settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("invalid root margin `{input}`: {reason}")]
    InvalidRootMargin { input: String, reason: &'static str },
}
