#![cfg(target_arch = "wasm32")]

use sequence_engine::{CanvasSurface, DrawSurface, ScrollHero, SurfaceSize, ViewportSize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_element(tag: &str, id: &str) -> web_sys::HtmlElement {
    let doc = document();
    if let Some(existing) = doc.get_element_by_id(id) {
        existing.remove();
    }
    let element = doc.create_element(tag).unwrap();
    element.set_id(id);
    doc.body().unwrap().append_child(&element).unwrap();
    element.dyn_into().unwrap()
}

fn html_element(id: &str) -> web_sys::HtmlElement {
    document().get_element_by_id(id).unwrap().dyn_into().unwrap()
}

const OVERLAY_IDS: [&str; 4] = [
    "overlay-title",
    "overlay-engineering",
    "overlay-titanium",
    "overlay-cta",
];

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn add_page() {
    add_element("div", "hero");
    add_element("canvas", "hero-canvas");
    add_element("div", "hero-loader");
    for id in OVERLAY_IDS {
        add_element("div", id);
    }
}

#[wasm_bindgen_test]
fn mount_binds_page_and_waits_for_frames() {
    add_page();
    let hero = ScrollHero::mount(r#"{"frame_count": 4, "path_prefix": "/missing/frame-"}"#).unwrap();
    assert!(!hero.is_ready());
    assert_eq!(hero.frame_count(), 4);
    assert_eq!(hero.current_frame(), 0);

    let container = document().get_element_by_id("hero").unwrap();
    let style = container.dyn_into::<web_sys::HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("height").unwrap(), "400vh");

    let title = document()
        .get_element_by_id("overlay-title")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert_eq!(title.style().get_property_value("visibility").unwrap(), "hidden");

    hero.unmount();
}

#[wasm_bindgen_test]
fn canvas_without_2d_context_still_mounts() {
    add_page();
    let canvas: web_sys::HtmlCanvasElement = html_element("hero-canvas").dyn_into().unwrap();
    // Claim the canvas for another context type so "2d" is no longer available.
    // Headless browsers without GL fall back to bitmaprenderer.
    let claimed = canvas.get_context("webgl").unwrap();
    if claimed.is_none() {
        canvas.get_context("bitmaprenderer").unwrap().unwrap();
    }

    let hero = ScrollHero::mount(r#"{"frame_count": 2, "path_prefix": "/missing/frame-"}"#).unwrap();
    assert!(!hero.can_draw());
    assert_eq!(hero.frame_count(), 2);
    for id in OVERLAY_IDS {
        let visibility = html_element(id).style().get_property_value("visibility").unwrap();
        assert_eq!(visibility, "hidden", "{} should be bound and hidden", id);
    }
    assert_eq!(
        html_element("hero").style().get_property_value("height").unwrap(),
        "400vh"
    );
    hero.unmount();
}

#[wasm_bindgen_test]
async fn failed_frames_keep_loader_up() {
    add_page();
    let hero = ScrollHero::mount(r#"{"frame_count": 2, "path_prefix": "/missing/frame-"}"#).unwrap();

    let mut waited = 0;
    while hero.failed_count() < 2 && waited < 5000 {
        sleep(50).await;
        waited += 50;
    }

    assert_eq!(hero.failed_count(), 2);
    assert_eq!(hero.loaded_count(), 0);
    assert!(!hero.is_ready());
    let display = html_element("hero-loader").style().get_property_value("display").unwrap();
    assert_ne!(display, "none");
    for id in OVERLAY_IDS {
        let visibility = html_element(id).style().get_property_value("visibility").unwrap();
        assert_eq!(visibility, "hidden");
    }
    hero.unmount();
}

#[wasm_bindgen_test]
fn mount_requires_a_canvas() {
    add_page();
    add_element("div", "hero-canvas");
    assert!(ScrollHero::mount("{}").is_err());
}

#[wasm_bindgen_test]
fn mount_rejects_bad_config() {
    add_page();
    assert!(ScrollHero::mount(r#"{"frame_count": 0}"#).is_err());
    assert!(ScrollHero::mount("not json").is_err());
}

#[wasm_bindgen_test]
fn canvas_surface_sizes_in_device_pixels() {
    let canvas: web_sys::HtmlCanvasElement = add_element("canvas", "surface-test").dyn_into().unwrap();
    let mut surface = CanvasSurface::new(canvas.clone());
    assert!(surface.has_context());
    let size = SurfaceSize::for_viewport(ViewportSize::new(300.0, 150.0, 2.0));
    surface.resize(size).unwrap();
    surface.clear(size).unwrap();
    assert_eq!(canvas.width(), 600);
    assert_eq!(canvas.height(), 300);
    assert_eq!(canvas.style().get_property_value("width").unwrap(), "300px");
}
