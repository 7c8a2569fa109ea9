#![cfg(target_arch = "wasm32")]
//! Browser front end: binds a [`Scene`] to an 800×800 `<canvas>` and wires
//! the frame, pointer and resize callbacks.
//!
//! The scene is shared as `Rc<RefCell<Scene>>` between the
//! `requestAnimationFrame` loop and the event listeners. Every borrow ends
//! with its callback.

mod surface;

use circle_art_core::NoiseConfig;
use circle_art_scene::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use surface::CanvasSurface;

const CANVAS_ID: &str = "circle-art";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let scene = Scene::new(NoiseConfig::default(), seed)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (width, height) = (scene.canvas().width(), scene.canvas().height());
    log::info!("circle-art starting (seed {seed})");

    let canvas = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => el.dyn_into::<web::HtmlCanvasElement>()?,
        None => {
            let el = document
                .create_element("canvas")?
                .dyn_into::<web::HtmlCanvasElement>()?;
            el.set_id(CANVAS_ID);
            document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&el)?;
            el
        }
    };
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas.style().set_property("position", "absolute")?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()?;

    let scene = Rc::new(RefCell::new(scene));
    place_canvas(&window, &canvas, &scene.borrow())?;

    // resize
    {
        let scene = scene.clone();
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                if let Err(e) = place_canvas(&w, &canvas, &scene.borrow()) {
                    log::warn!("resize failed: {e:?}");
                }
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // pointermove
    {
        let scene = scene.clone();
        let canvas_ptr = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = canvas_ptr.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let x = (f64::from(ev.client_x()) - rect.left()) * width / rect.width();
            let y = (f64::from(ev.client_y()) - rect.top()) * height / rect.height();
            scene.borrow_mut().pointer_moved(x, y);
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // frame loop
    {
        let mut surface = CanvasSurface::new(ctx, width, height);
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            scene.borrow_mut().render_frame(&mut surface);
            if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
                if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::warn!("requestAnimationFrame failed, animation stopped: {e:?}");
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        }
    }

    Ok(())
}

/// Positions the canvas so it stays centred in the viewport.
fn place_canvas(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Result<(), JsValue> {
    let viewport_w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let viewport_h = window.inner_height()?.as_f64().unwrap_or(0.0);
    let offset = scene.resize(viewport_w, viewport_h);
    let style = canvas.style();
    style.set_property("left", &format!("{}px", offset.x))?;
    style.set_property("top", &format!("{}px", offset.y))?;
    Ok(())
}
