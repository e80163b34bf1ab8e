// Canvas 2D implementation of the drawing surface.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::SequenceError;
use crate::player::{DrawSurface, FrameImage};
use crate::types::{DrawRect, ImageSize, SurfaceSize};

impl FrameImage for HtmlImageElement {
    fn natural_size(&self) -> ImageSize {
        ImageSize::new(self.natural_width(), self.natural_height())
    }
}

/// Full-viewport canvas sized in device pixels.
///
/// A canvas that cannot provide a 2d context (for example one already claimed
/// by WebGL) still mounts; every draw call is then a silent no-op.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        if ctx.is_none() {
            warn!("{}; frames will not be drawn", SequenceError::MissingContext);
        }
        CanvasSurface { canvas, ctx }
    }

    pub fn has_context(&self) -> bool {
        self.ctx.is_some()
    }
}

impl DrawSurface for CanvasSurface {
    type Frame = HtmlImageElement;

    fn resize(&mut self, size: SurfaceSize) -> Result<(), SequenceError> {
        let Some(ctx) = &self.ctx else {
            return Ok(());
        };
        // Assigning width/height also resets the context transform.
        self.canvas.set_width(size.device_width);
        self.canvas.set_height(size.device_height);

        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", size.css_width))
            .map_err(|err| SequenceError::host(&err))?;
        style
            .set_property("height", &format!("{}px", size.css_height))
            .map_err(|err| SequenceError::host(&err))?;

        ctx.set_transform(size.scale, 0.0, 0.0, size.scale, 0.0, 0.0)
            .map_err(|err| SequenceError::host(&err))
    }

    fn clear(&mut self, size: SurfaceSize) -> Result<(), SequenceError> {
        if let Some(ctx) = &self.ctx {
            ctx.clear_rect(0.0, 0.0, size.css_width, size.css_height);
        }
        Ok(())
    }

    fn draw_frame(&mut self, frame: &HtmlImageElement, rect: DrawRect) -> Result<(), SequenceError> {
        let Some(ctx) = &self.ctx else {
            return Ok(());
        };
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            frame,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        )
        .map_err(|err| SequenceError::host(&err))
    }
}
