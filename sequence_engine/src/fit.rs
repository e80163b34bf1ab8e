// Aspect-preserving placement of a frame inside the viewport.
// One axis is filled exactly; the other is centered (and may overflow).

use crate::types::{DrawRect, ImageSize, ViewportSize};

/// Compute where to draw an image so it fills the viewport without distortion.
///
/// If the viewport is relatively wider than the image, the image is fit to the
/// viewport width and centered vertically; otherwise it is fit to the height and
/// centered horizontally. Returns `None` when either size is degenerate.
pub fn fit_rect(viewport: ViewportSize, image: ImageSize) -> Option<DrawRect> {
    let viewport_aspect = viewport.aspect()?;
    let image_aspect = image.aspect()?;

    if viewport_aspect > image_aspect {
        let width = viewport.width;
        let height = width / image_aspect;
        Some(DrawRect::new(0.0, (viewport.height - height) / 2.0, width, height))
    } else {
        let height = viewport.height;
        let width = height * image_aspect;
        Some(DrawRect::new((viewport.width - width) / 2.0, 0.0, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn landscape_viewport_fits_portrait_image_to_width() {
        let rect = fit_rect(
            ViewportSize::new(1920.0, 1080.0, 1.0),
            ImageSize::new(1200, 1600),
        )
        .unwrap();
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, 1920.0);
        assert!((rect.height - 2560.0).abs() < EPS);
        assert!((rect.y - (1080.0 - 2560.0) / 2.0).abs() < EPS);
        assert!(rect.y != 0.0);
    }

    #[test]
    fn portrait_viewport_fits_to_height() {
        let rect = fit_rect(
            ViewportSize::new(390.0, 844.0, 3.0),
            ImageSize::new(1920, 1080),
        )
        .unwrap();
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.height, 844.0);
        assert!((rect.x - (390.0 - rect.width) / 2.0).abs() < EPS);
    }

    #[test]
    fn matching_aspect_fills_exactly() {
        let rect = fit_rect(
            ViewportSize::new(1600.0, 900.0, 1.0),
            ImageSize::new(1920, 1080),
        )
        .unwrap();
        assert!((rect.width - 1600.0).abs() < EPS);
        assert!((rect.height - 900.0).abs() < EPS);
        assert!(rect.x.abs() < EPS && rect.y.abs() < EPS);
    }

    #[test]
    fn degenerate_sizes_are_skipped() {
        assert!(fit_rect(ViewportSize::new(0.0, 900.0, 1.0), ImageSize::new(10, 10)).is_none());
        assert!(fit_rect(ViewportSize::new(900.0, 900.0, 1.0), ImageSize::new(0, 10)).is_none());
    }

    proptest! {
        /// Property: one axis is covered exactly, the other is centered,
        /// and the image aspect ratio is preserved.
        #[test]
        fn covers_one_axis_and_centers_the_other(
            w in 1.0f64..4000.0,
            h in 1.0f64..4000.0,
            iw in 1u32..8000,
            ih in 1u32..8000,
        ) {
            let rect = fit_rect(ViewportSize::new(w, h, 1.0), ImageSize::new(iw, ih)).unwrap();

            let fills_width = rect.x == 0.0 && rect.width == w;
            let fills_height = rect.y == 0.0 && rect.height == h;
            prop_assert!(fills_width || fills_height);

            let tol = 1e-9 * w.max(h).max(rect.width).max(rect.height);
            if fills_width {
                prop_assert!((rect.y - (h - rect.height) / 2.0).abs() <= tol);
            } else {
                prop_assert!((rect.x - (w - rect.width) / 2.0).abs() <= tol);
            }

            let aspect = iw as f64 / ih as f64;
            prop_assert!((rect.width / rect.height - aspect).abs() <= 1e-9 * aspect.max(1.0));
        }
    }
}
