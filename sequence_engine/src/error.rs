// Typed errors with thiserror. Surface meaningful messages to JS.
// Runtime failures (a frame that never decodes) are logged, not returned.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Sequence engine error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid opacity schedule: {0}")]
    InvalidSchedule(String),

    #[error("Frame {index} is outside a sequence of {frame_count} frames")]
    FrameOutOfRange { index: usize, frame_count: usize },

    #[error("Frame {frame_number} failed to load: {reason}")]
    FrameLoad { frame_number: usize, reason: String },

    #[error("Drawing surface has no 2d context")]
    MissingContext,

    #[error("Host environment error: {0}")]
    Host(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SequenceError {
    /// Wrap a value thrown by the browser.
    pub fn host(value: &JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SequenceError::Host(message)
    }
}

impl From<serde_json::Error> for SequenceError {
    fn from(err: serde_json::Error) -> Self {
        SequenceError::Serialization(err.to_string())
    }
}

impl From<SequenceError> for JsValue {
    fn from(err: SequenceError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SequenceError::InvalidConfig("frame_count must be positive".to_string());
        assert!(err.to_string().contains("frame_count must be positive"));
    }

    #[test]
    fn out_of_range_names_both_bounds() {
        let err = SequenceError::FrameOutOfRange {
            index: 240,
            frame_count: 240,
        };
        assert_eq!(
            err.to_string(),
            "Frame 240 is outside a sequence of 240 frames"
        );
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let err: SequenceError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, SequenceError::Serialization(_)));
    }
}
