// Frame preloading: one decode task per frame, completions merged on the UI thread.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlImageElement;

use super::HeroState;
use crate::error::SequenceError;
use crate::frames::FramePathTemplate;

/// Start fetching and decoding every frame.
///
/// Tasks hold the hero weakly: completions that arrive after unmount are dropped.
/// In-flight requests themselves cannot be cancelled.
pub(super) fn preload(
    template: &FramePathTemplate,
    state: &Rc<RefCell<HeroState>>,
) -> Result<(), SequenceError> {
    for (index, path) in template.paths().enumerate() {
        let image = HtmlImageElement::new().map_err(|err| SequenceError::host(&err))?;
        image.set_src(&path);

        let state = Rc::downgrade(state);
        spawn_local(async move {
            let decoded = JsFuture::from(image.decode()).await;
            let Some(state) = state.upgrade() else {
                return;
            };
            let mut hero = state.borrow_mut();
            match decoded {
                Ok(_) => hero.frame_loaded(index, image),
                Err(err) => hero.frame_failed(index, &describe(&err)),
            };
        });
    }
    Ok(())
}

fn describe(err: &JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}
