// Browser bindings: mount the hero onto the page and drive it from scroll, resize,
// and image decode events. Everything lives in one owned state dropped on unmount.

mod canvas;
pub(crate) mod console;
mod preload;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlImageElement, Window};

use crate::config::HeroConfig;
use crate::error::SequenceError;
use crate::frames::frame_index_for;
use crate::load_state::LoadTransition;
use crate::player::SequencePlayer;
use crate::schedule::OverlayScheduler;
use crate::scroll::PinnedRegion;
use crate::types::{OverlayId, Progress, ViewportSize};

pub use canvas::CanvasSurface;

/// Mounted hero state, shared between listeners and preload tasks.
pub(crate) struct HeroState {
    window: Window,
    container: HtmlElement,
    loader: Option<HtmlElement>,
    overlays: Vec<(OverlayId, HtmlElement)>,
    player: SequencePlayer<CanvasSurface>,
    scheduler: OverlayScheduler,
    region: PinnedRegion,
    progress: Progress,
}

impl HeroState {
    fn measure_progress(&self) -> Progress {
        let rect = self.container.get_bounding_client_rect();
        self.region
            .progress(rect.top(), rect.height(), self.player.viewport().height)
    }

    fn on_scroll(&mut self) {
        self.progress = self.measure_progress();
        self.player.set_progress(self.progress);
        self.apply_overlays();
    }

    fn on_resize(&mut self) {
        self.player.resize(read_viewport(&self.window));
        // The scroll extent depends on viewport height, so progress may move too.
        self.progress = self.measure_progress();
        let index = frame_index_for(self.progress, self.player.frame_count());
        if index != self.player.current_frame() {
            self.player.set_progress(self.progress);
        }
        self.apply_overlays();
    }

    pub(super) fn frame_loaded(&mut self, index: usize, image: HtmlImageElement) {
        match self.player.frame_loaded(index, image) {
            Ok(LoadTransition::Ready) => {
                if let Some(loader) = &self.loader {
                    set_style(loader, "display", "none");
                }
                self.progress = self.measure_progress();
                self.apply_overlays();
            }
            Ok(LoadTransition::Pending { .. }) => {
                if let Some(loader) = &self.loader {
                    let fraction = self.player.load_state().fraction();
                    set_style(loader, "--hero-load-progress", &fraction.to_string());
                }
            }
            Ok(LoadTransition::Duplicate) => {}
            Err(err) => warn!("{}", err),
        }
    }

    pub(super) fn frame_failed(&mut self, index: usize, reason: &str) {
        if let Err(err) = self.player.frame_failed(index, reason) {
            warn!("{}", err);
        }
    }

    /// Overlays stay hidden until the frame set is ready.
    fn apply_overlays(&self) {
        let ready = self.player.is_ready();
        let opacities = self.scheduler.opacities(self.progress);
        for (id, element) in &self.overlays {
            if ready {
                set_style(element, "visibility", "visible");
                set_style(element, "opacity", &opacities.get(*id).to_string());
            } else {
                set_style(element, "visibility", "hidden");
                set_style(element, "opacity", "0");
            }
        }
    }
}

/// Handle returned to JS. Dropping it (or calling `unmount`) removes every listener.
#[wasm_bindgen]
pub struct ScrollHero {
    state: Rc<RefCell<HeroState>>,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ScrollHero {
    /// Bind to the page described by `config_json` and start preloading frames.
    pub fn mount(config_json: &str) -> Result<ScrollHero, JsValue> {
        let config = HeroConfig::from_json(config_json)?;
        console::init(config.log_level);
        mount(&config).map_err(JsValue::from)
    }

    pub fn progress(&self) -> f64 {
        self.state.borrow().progress.value()
    }

    pub fn current_frame(&self) -> u32 {
        self.state.borrow().player.current_frame().as_u32()
    }

    pub fn frame_count(&self) -> u32 {
        self.state.borrow().player.frame_count() as u32
    }

    pub fn is_ready(&self) -> bool {
        self.state.borrow().player.is_ready()
    }

    pub fn loaded_count(&self) -> u32 {
        self.state.borrow().player.load_state().loaded() as u32
    }

    pub fn failed_count(&self) -> u32 {
        self.state.borrow().player.load_state().failed_frames().len() as u32
    }

    /// Whether the canvas provided a 2d context. Without one the hero still
    /// tracks scroll and overlays but draws nothing.
    pub fn can_draw(&self) -> bool {
        self.state.borrow().player.surface().has_context()
    }

    /// Opacities of the four overlays at the current progress.
    pub fn overlay_opacities(&self) -> Vec<f64> {
        let state = self.state.borrow();
        state.scheduler.opacities(state.progress).to_vec()
    }

    /// Release listeners and state. Pending frame decodes are ignored when they finish.
    pub fn unmount(self) {
        info!("unmounting hero");
    }
}

fn mount(config: &HeroConfig) -> Result<ScrollHero, SequenceError> {
    let window = web_sys::window().ok_or_else(|| SequenceError::Host("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| SequenceError::Host("no document".to_string()))?;

    let ids = &config.elements;
    let container: HtmlElement = element_by_id(&document, &ids.container)?;
    let canvas: HtmlCanvasElement = element_by_id(&document, &ids.canvas)?;
    let loader = match element_by_id::<HtmlElement>(&document, &ids.loader) {
        Ok(loader) => Some(loader),
        Err(err) => {
            debug!("no loading indicator: {}", err);
            None
        }
    };
    let overlays = OverlayId::ALL
        .iter()
        .filter_map(|id| match element_by_id::<HtmlElement>(&document, ids.overlay(*id)) {
            Ok(element) => Some((*id, element)),
            Err(err) => {
                warn!("overlay {:?} not bound: {}", id, err);
                None
            }
        })
        .collect();

    let region = config.pinned_region()?;
    set_style(&container, "height", &region.css_height());

    let template = config.path_template()?;
    let player = SequencePlayer::new(
        template.frame_count(),
        CanvasSurface::new(canvas),
        read_viewport(&window),
    )?;
    let scheduler = config.schedules.build()?;

    let state = Rc::new(RefCell::new(HeroState {
        window: window.clone(),
        container,
        loader,
        overlays,
        player,
        scheduler,
        region,
        progress: Progress::START,
    }));
    state.borrow().apply_overlays();

    let listeners = subscribe(&window, &state);
    preload::preload(&template, &state)?;
    info!("mounted hero with {} frames", template.frame_count());

    Ok(ScrollHero {
        state,
        _listeners: listeners,
    })
}

fn subscribe(window: &Window, state: &Rc<RefCell<HeroState>>) -> Vec<EventListener> {
    let on_scroll = {
        let state = Rc::clone(state);
        EventListener::new(window, "scroll", move |_event| {
            state.borrow_mut().on_scroll();
        })
    };
    let on_resize = {
        let state = Rc::clone(state);
        EventListener::new(window, "resize", move |_event| {
            state.borrow_mut().on_resize();
        })
    };
    vec![on_scroll, on_resize]
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SequenceError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SequenceError::Host(format!("no element with id '{}'", id)))?
        .dyn_into::<T>()
        .map_err(|_| SequenceError::Host(format!("element '{}' has an unexpected type", id)))
}

fn read_viewport(window: &Window) -> ViewportSize {
    let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    ViewportSize::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        debug!("could not set {}: {:?}", property, err);
    }
}
