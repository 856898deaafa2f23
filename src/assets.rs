//! Image loading for globe textures.
//!
//! Loads are fire-and-forget: each texture is fetched on its own task, the
//! status line reports the outcome, and a failed load leaves the fallback
//! map in place.

use crate::overlay::StatusLine;
use crate::scene::SceneManager;
use globe_core::TextureKind;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Fetch and decode `url` into an `ImageBitmap`.
pub async fn load_image_bitmap(url: &str) -> anyhow::Result<web::ImageBitmap> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!(js_error_message(&e)))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("{} ({})", js_error_message(&e), url))?;
    let promise = window
        .create_image_bitmap_with_html_image_element(&img)
        .map_err(|e| anyhow::anyhow!(js_error_message(&e)))?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!(js_error_message(&e)))?;
    bitmap
        .dyn_into::<web::ImageBitmap>()
        .map_err(|_| anyhow::anyhow!("createImageBitmap returned a non-bitmap"))
}

/// Start loading every globe texture. Results arriving after `mounted` is
/// cleared are dropped.
pub fn spawn_texture_loads(
    scene: &Rc<RefCell<SceneManager>>,
    status: &Rc<StatusLine>,
    mounted: &Rc<Cell<bool>>,
) {
    let urls = scene.borrow().config().textures.clone();
    for kind in TextureKind::ALL {
        let url = urls.url(kind).to_string();
        let scene = scene.clone();
        let status = status.clone();
        let mounted = mounted.clone();
        spawn_local(async move {
            let result = load_image_bitmap(&url).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(bitmap) => {
                    scene.borrow_mut().install_texture(kind, bitmap);
                    status.set(&format!("{} loaded successfully.", kind.label()));
                }
                Err(e) => {
                    log::warn!("[assets] {} failed: {:#}", kind.label(), e);
                    status.set(&format!("Error loading {}: {}", kind.label(), e));
                }
            }
        });
    }
}
