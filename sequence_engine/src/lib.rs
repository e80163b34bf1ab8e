// sequence_engine: scroll-driven image sequence hero.
// The engine (progress, frames, fit, schedules, load state) is plain Rust; `web` binds it
// to the DOM when targeting wasm32. JS only supplies a config and a page.

mod config;
mod error;
mod fit;
mod frames;
mod load_state;
mod player;
mod schedule;
mod scroll;
mod types;
#[cfg(target_arch = "wasm32")]
mod web;

use wasm_bindgen::prelude::*;

pub use config::{ElementIds, HeroConfig, ScheduleConfig};
pub use error::SequenceError;
pub use fit::fit_rect;
pub use frames::{frame_index_for, FramePathTemplate};
pub use load_state::{LoadState, LoadTransition};
pub use player::{DrawSurface, FrameImage, SequencePlayer};
pub use schedule::{default_scenes, Keyframe, OpacitySchedule, OverlayOpacities, OverlayScheduler};
pub use scroll::{scroll_progress, PinnedRegion};
pub use types::*;
#[cfg(target_arch = "wasm32")]
pub use web::{CanvasSurface, ScrollHero};

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    web::console::init(log::LevelFilter::Info);
}

/// Frame index shown at `progress` in a sequence of `frame_count` frames.
#[wasm_bindgen]
pub fn frame_at_progress(progress: f64, frame_count: u32) -> u32 {
    frame_index_for(Progress::new(progress), frame_count as usize).as_u32()
}

/// Opacities of the title, engineering, titanium, and call-to-action overlays
/// under the default scene timing.
#[wasm_bindgen]
pub fn overlay_opacities_at(progress: f64) -> Vec<f64> {
    OverlayScheduler::default()
        .opacities(Progress::new(progress))
        .to_vec()
}
