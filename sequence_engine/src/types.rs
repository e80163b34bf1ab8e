// Strong typing over raw floats. Newtypes for scroll progress, frame indices, and pixel sizes.

use serde::{Deserialize, Serialize};

/// Normalized scroll progress through the pinned region (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamps into [0, 1]. NaN and negative zero map to the start.
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Progress::START;
        }
        Progress(value.min(1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Frame index. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct FrameIndex(u32);

impl FrameIndex {
    pub fn new(index: u32) -> Self {
        FrameIndex(index)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// 1-based number used in asset paths.
    pub fn frame_number(&self) -> usize {
        self.as_usize() + 1
    }
}

/// Logical viewport size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl ViewportSize {
    /// A missing or non-positive pixel ratio falls back to 1.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        ViewportSize {
            width: finite_or_zero(width),
            height: finite_or_zero(height),
            pixel_ratio,
        }
    }

    pub fn aspect(&self) -> Option<f64> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        ViewportSize::new(0.0, 0.0, 1.0)
    }
}

/// Natural (decoded) size of a frame image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        ImageSize { width, height }
    }

    pub fn aspect(&self) -> Option<f64> {
        (self.width > 0 && self.height > 0).then(|| self.width as f64 / self.height as f64)
    }
}

/// Backing store size (device pixels) and layout size (CSS pixels) of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub device_width: u32,
    pub device_height: u32,
    pub css_width: f64,
    pub css_height: f64,
    /// Transform scale applied before drawing in CSS pixel coordinates.
    pub scale: f64,
}

impl SurfaceSize {
    /// Logical size times pixel ratio, truncated the way canvas dimensions are.
    pub fn for_viewport(viewport: ViewportSize) -> Self {
        SurfaceSize {
            device_width: (viewport.width * viewport.pixel_ratio) as u32,
            device_height: (viewport.height * viewport.pixel_ratio) as u32,
            css_width: viewport.width,
            css_height: viewport.height,
            scale: viewport.pixel_ratio,
        }
    }
}

/// Destination rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        DrawRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// The four text blocks layered over the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayId {
    /// Product name and tagline, visible from the start.
    Title,
    /// "Precision Engineering" block.
    Engineering,
    /// "Titanium Drivers" block.
    Titanium,
    /// Closing call to action, held through the end.
    CallToAction,
}

impl OverlayId {
    pub const ALL: [OverlayId; 4] = [
        OverlayId::Title,
        OverlayId::Engineering,
        OverlayId::Titanium,
        OverlayId::CallToAction,
    ];

    pub fn slot(&self) -> usize {
        match self {
            OverlayId::Title => 0,
            OverlayId::Engineering => 1,
            OverlayId::Titanium => 2,
            OverlayId::CallToAction => 3,
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
