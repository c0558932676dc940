use thiserror::Error;

/// Setup-time errors. Per-frame reads never produce errors; unavailable data
/// is skipped for that frame.
#[derive(Debug, Error)]
pub enum HandVizError {
    #[error("marker scale must be finite and positive, got {0}")]
    InvalidMarkerScale(f32),
    #[error("unknown handedness '{0}' (expected 'left' or 'right')")]
    UnknownHandedness(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
