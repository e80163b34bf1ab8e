// Load tracking for the frame set.
// The count only grows; `ready` flips once, when every frame has decoded.

use crate::error::SequenceError;

/// What a single load completion did to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTransition {
    /// Counted, but frames are still outstanding.
    Pending { loaded: usize, total: usize },
    /// This completion was the last one; the set is now displayable.
    Ready,
    /// The frame had already completed; nothing changed.
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Waiting,
    Loaded,
    Failed,
}

/// Completion counter for a fixed-size frame set.
#[derive(Debug, Clone)]
pub struct LoadState {
    slots: Vec<Slot>,
    loaded: usize,
    ready: bool,
}

impl LoadState {
    pub fn new(frame_count: usize) -> Self {
        LoadState {
            slots: vec![Slot::Waiting; frame_count],
            loaded: 0,
            ready: false,
        }
    }

    pub fn total(&self) -> usize {
        self.slots.len()
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Record a successful load. Repeats for the same frame are ignored.
    pub fn record_loaded(&mut self, index: usize) -> Result<LoadTransition, SequenceError> {
        let total = self.total();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SequenceError::FrameOutOfRange {
                index,
                frame_count: total,
            })?;

        if *slot == Slot::Loaded {
            return Ok(LoadTransition::Duplicate);
        }

        // A late success after a reported failure still counts.
        *slot = Slot::Loaded;
        self.loaded += 1;

        if self.loaded == total && !self.ready {
            self.ready = true;
            return Ok(LoadTransition::Ready);
        }
        Ok(LoadTransition::Pending {
            loaded: self.loaded,
            total,
        })
    }

    /// Record a failed load. The set stays not-ready until that frame succeeds.
    pub fn record_failed(&mut self, index: usize) -> Result<(), SequenceError> {
        let total = self.total();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SequenceError::FrameOutOfRange {
                index,
                frame_count: total,
            })?;
        if *slot == Slot::Waiting {
            *slot = Slot::Failed;
        }
        Ok(())
    }

    /// 0-based indices of frames that reported a failure and never recovered.
    pub fn failed_frames(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot == Slot::Failed)
            .map(|(i, _)| i)
            .collect()
    }

    /// Fraction of frames loaded, for a loading indicator.
    pub fn fraction(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.loaded as f64 / self.total() as f64
    }
}
