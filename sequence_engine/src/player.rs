// Frame sequence player: owns the frame set, its load state, and the drawing surface.
// Nothing is drawn until every frame has decoded; each draw recomputes geometry from scratch.

use log::{debug, info, warn};

use crate::error::SequenceError;
use crate::fit::fit_rect;
use crate::frames::frame_index_for;
use crate::load_state::{LoadState, LoadTransition};
use crate::types::{DrawRect, FrameIndex, ImageSize, Progress, SurfaceSize, ViewportSize};

/// A decoded frame that can report its natural size.
pub trait FrameImage {
    fn natural_size(&self) -> ImageSize;
}

/// A 2D raster target the player draws frames onto.
pub trait DrawSurface {
    type Frame: FrameImage;

    /// Set backing store and layout size, and the scale for CSS-pixel drawing.
    fn resize(&mut self, size: SurfaceSize) -> Result<(), SequenceError>;

    fn clear(&mut self, size: SurfaceSize) -> Result<(), SequenceError>;

    fn draw_frame(&mut self, frame: &Self::Frame, rect: DrawRect) -> Result<(), SequenceError>;
}

/// Scroll-driven player over a fixed set of frames.
pub struct SequencePlayer<S: DrawSurface> {
    frames: Vec<Option<S::Frame>>,
    load: LoadState,
    surface: S,
    viewport: ViewportSize,
    current: FrameIndex,
}

impl<S: DrawSurface> SequencePlayer<S> {
    pub fn new(frame_count: usize, surface: S, viewport: ViewportSize) -> Result<Self, SequenceError> {
        if frame_count == 0 {
            return Err(SequenceError::InvalidConfig(
                "a sequence needs at least one frame".to_string(),
            ));
        }
        let mut frames = Vec::with_capacity(frame_count);
        frames.resize_with(frame_count, || None);
        Ok(SequencePlayer {
            frames,
            load: LoadState::new(frame_count),
            surface,
            viewport,
            current: FrameIndex::default(),
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_ready(&self) -> bool {
        self.load.is_ready()
    }

    pub fn current_frame(&self) -> FrameIndex {
        self.current
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Load-completion callback for the frame at `index` (0-based).
    ///
    /// The last completion makes the set ready and immediately draws frame 0,
    /// so the surface is never blank before the first scroll.
    pub fn frame_loaded(&mut self, index: usize, frame: S::Frame) -> Result<LoadTransition, SequenceError> {
        let transition = self.load.record_loaded(index)?;
        if transition == LoadTransition::Duplicate {
            return Ok(transition);
        }
        self.frames[index] = Some(frame);

        if transition == LoadTransition::Ready {
            info!("all {} frames decoded", self.frame_count());
            self.current = FrameIndex::new(0);
            self.render(self.current);
        }
        Ok(transition)
    }

    /// Load-failure callback. The set stays not-ready.
    pub fn frame_failed(&mut self, index: usize, reason: &str) -> Result<(), SequenceError> {
        self.load.record_failed(index)?;
        let err = SequenceError::FrameLoad {
            frame_number: index + 1,
            reason: reason.to_string(),
        };
        warn!("{}", err);
        Ok(())
    }

    /// React to a scroll progress change. Returns the frame drawn, if any.
    pub fn set_progress(&mut self, progress: Progress) -> Option<FrameIndex> {
        if !self.is_ready() {
            return None;
        }
        let index = frame_index_for(progress, self.frame_count());
        if index != self.current {
            debug!("frame {} -> {}", self.current.as_u32(), index.as_u32());
        }
        self.current = index;
        self.render(index).then_some(index)
    }

    /// React to a viewport change by redrawing the current frame.
    pub fn resize(&mut self, viewport: ViewportSize) -> bool {
        self.viewport = viewport;
        self.render(self.current)
    }

    /// Draw one frame, aspect-fit to the viewport. A no-op before the set is ready.
    pub fn render(&mut self, index: FrameIndex) -> bool {
        if !self.load.is_ready() {
            return false;
        }
        let Some(frame) = self.frames.get(index.as_usize()).and_then(Option::as_ref) else {
            return false;
        };
        let Some(rect) = fit_rect(self.viewport, frame.natural_size()) else {
            debug!(
                "skipping frame {}: degenerate viewport or image size",
                index.as_u32()
            );
            return false;
        };

        let size = SurfaceSize::for_viewport(self.viewport);
        match draw(&mut self.surface, frame, size, rect) {
            Ok(()) => true,
            Err(err) => {
                warn!("failed to draw frame {}: {}", index.frame_number(), err);
                false
            }
        }
    }
}

fn draw<S: DrawSurface>(
    surface: &mut S,
    frame: &S::Frame,
    size: SurfaceSize,
    rect: DrawRect,
) -> Result<(), SequenceError> {
    surface.resize(size)?;
    surface.clear(size)?;
    surface.draw_frame(frame, rect)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TestFrame {
        pub id: usize,
        pub size: ImageSize,
    }

    impl FrameImage for TestFrame {
        fn natural_size(&self) -> ImageSize {
            self.size
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Resize(SurfaceSize),
        Clear,
        Draw { frame: usize, rect: DrawRect },
    }

    /// Surface that records every call.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn drawn_frames(&self) -> Vec<usize> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Draw { frame, .. } => Some(*frame),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawSurface for RecordingSurface {
        type Frame = TestFrame;

        fn resize(&mut self, size: SurfaceSize) -> Result<(), SequenceError> {
            self.ops.push(Op::Resize(size));
            Ok(())
        }

        fn clear(&mut self, _size: SurfaceSize) -> Result<(), SequenceError> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_frame(&mut self, frame: &TestFrame, rect: DrawRect) -> Result<(), SequenceError> {
            self.ops.push(Op::Draw {
                frame: frame.id,
                rect,
            });
            Ok(())
        }
    }
}
