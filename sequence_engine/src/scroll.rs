// Scroll position to normalized progress.
// The hero container is a pinned region several viewports tall; progress runs from
// its top meeting the viewport top (0) to its bottom meeting the viewport bottom (1).

use crate::error::SequenceError;
use crate::types::Progress;

/// Height of the scroll container, in viewport heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedRegion {
    viewports: f64,
}

impl PinnedRegion {
    pub fn new(viewports: f64) -> Result<Self, SequenceError> {
        if !viewports.is_finite() || viewports <= 1.0 {
            return Err(SequenceError::InvalidConfig(format!(
                "pinned region must span more than one viewport, got {}",
                viewports
            )));
        }
        Ok(PinnedRegion { viewports })
    }

    /// CSS height for the container element, e.g. `400vh`.
    pub fn css_height(&self) -> String {
        format!("{}vh", self.viewports * 100.0)
    }

    /// Scrollable distance for a given viewport height.
    pub fn scroll_extent(&self, viewport_height: f64) -> f64 {
        (self.viewports - 1.0) * viewport_height
    }

    /// Progress from the container's measured box. Before layout (a measured
    /// height no taller than the viewport) the configured extent is used instead.
    pub fn progress(&self, container_top: f64, measured_height: f64, viewport_height: f64) -> Progress {
        let height = if measured_height > viewport_height {
            measured_height
        } else {
            viewport_height + self.scroll_extent(viewport_height)
        };
        scroll_progress(container_top, height, viewport_height)
    }
}

impl Default for PinnedRegion {
    fn default() -> Self {
        PinnedRegion { viewports: 4.0 }
    }
}

/// Progress of a container whose top edge sits at `container_top` relative to the
/// viewport (negative once scrolled past).
pub fn scroll_progress(container_top: f64, container_height: f64, viewport_height: f64) -> Progress {
    let extent = container_height - viewport_height;
    if !(extent > 0.0) {
        // Nothing to scroll through: treat as fully before or fully after.
        return if container_top < 0.0 {
            Progress::END
        } else {
            Progress::START
        };
    }
    Progress::new(-container_top / extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn top_aligned_is_start() {
        assert_eq!(scroll_progress(0.0, 4000.0, 1000.0), Progress::START);
    }

    #[test]
    fn before_region_clamps_to_start() {
        assert_eq!(scroll_progress(250.0, 4000.0, 1000.0), Progress::START);
    }

    #[test]
    fn bottom_aligned_is_end() {
        assert_eq!(scroll_progress(-3000.0, 4000.0, 1000.0), Progress::END);
        assert_eq!(scroll_progress(-3500.0, 4000.0, 1000.0), Progress::END);
    }

    #[test]
    fn halfway() {
        assert_eq!(scroll_progress(-1500.0, 4000.0, 1000.0).value(), 0.5);
    }

    #[test]
    fn unscrollable_container() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), Progress::START);
        assert_eq!(scroll_progress(-10.0, 800.0, 1000.0), Progress::END);
    }

    #[test]
    fn pinned_region_css_and_extent() {
        let region = PinnedRegion::default();
        assert_eq!(region.css_height(), "400vh");
        assert_eq!(region.scroll_extent(1080.0), 3240.0);
        assert!(PinnedRegion::new(1.0).is_err());
        assert!(PinnedRegion::new(f64::INFINITY).is_err());
    }

    #[test]
    fn measured_height_drives_progress() {
        let region = PinnedRegion::default();
        // A container laid out taller than configured uses its real size.
        assert_eq!(region.progress(-2000.0, 5000.0, 1000.0).value(), 0.5);
    }

    #[test]
    fn unlaid_out_container_falls_back_to_configured_extent() {
        let region = PinnedRegion::default();
        assert_eq!(region.progress(-1500.0, 0.0, 1000.0).value(), 0.5);
        assert_eq!(region.progress(-1500.0, 1000.0, 1000.0).value(), 0.5);
        assert_eq!(region.progress(-4000.0, 0.0, 1000.0), Progress::END);
    }

    proptest! {
        /// Property: scrolling down never decreases progress.
        #[test]
        fn progress_monotonic_in_scroll(a in 0.0f64..5000.0, b in 0.0f64..5000.0, vh in 200.0f64..2000.0) {
            let height = vh * 4.0;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scroll_progress(-lo, height, vh) <= scroll_progress(-hi, height, vh));
        }
    }
}
