// Frame addressing and scroll-to-frame mapping.
// Paths follow the pre-rendered asset contract: <prefix><NNN>.<ext>, 1-based, zero-padded.

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::types::{FrameIndex, Progress};

/// Map scroll progress to a frame: `floor(progress * N)` clamped to `N - 1`.
///
/// Returns frame 0 for an empty sequence so callers never see an out-of-range index;
/// the player refuses to draw anything in that case anyway.
pub fn frame_index_for(progress: Progress, frame_count: usize) -> FrameIndex {
    if frame_count == 0 {
        return FrameIndex::new(0);
    }
    let last = frame_count - 1;
    let raw = (progress.value() * frame_count as f64).floor() as usize;
    FrameIndex::new(raw.min(last) as u32)
}

/// Resource path template for a fixed-size frame sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramePathTemplate {
    prefix: String,
    extension: String,
    pad_width: usize,
    frame_count: usize,
}

impl FramePathTemplate {
    pub fn new(
        prefix: impl Into<String>,
        extension: impl Into<String>,
        pad_width: usize,
        frame_count: usize,
    ) -> Result<Self, SequenceError> {
        let prefix = prefix.into();
        let extension = extension.into();
        if frame_count == 0 {
            return Err(SequenceError::InvalidConfig(
                "frame_count must be at least 1".to_string(),
            ));
        }
        if prefix.is_empty() {
            return Err(SequenceError::InvalidConfig(
                "path_prefix must not be empty".to_string(),
            ));
        }
        let extension = extension.trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err(SequenceError::InvalidConfig(
                "extension must not be empty".to_string(),
            ));
        }
        Ok(FramePathTemplate {
            prefix,
            extension,
            pad_width,
            frame_count,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Path of the frame at `index` (0-based; rendered 1-based).
    pub fn path(&self, index: FrameIndex) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            index.frame_number(),
            self.extension,
            width = self.pad_width
        )
    }

    /// All frame paths in display order.
    pub fn paths(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.frame_count).map(move |i| self.path(FrameIndex::new(i as u32)))
    }
}
