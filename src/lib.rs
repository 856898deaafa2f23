#![cfg(target_arch = "wasm32")]
use globe_core::constants::DEFAULT_CONTAINER_ID;
use globe_core::{GlobeConfig, PanelAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod panel;
mod render;
mod scene;

use app::{GlobeApp, Shared};

thread_local! {
    // Globe mounted by `start` when the page carries a `#globe-root` element.
    static AUTO_MOUNTED: RefCell<Option<GlobeHandle>> = const { RefCell::new(None) };
}

/// Handle returned to JS for one mounted globe. Clones share the globe.
#[wasm_bindgen]
#[derive(Clone)]
pub struct GlobeHandle {
    app: Rc<RefCell<GlobeApp>>,
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl GlobeHandle {
    /// Stop the render loop and remove everything the globe added to the page.
    pub fn unmount(&self) {
        match self.app.try_borrow_mut() {
            Ok(mut app) => app.unmount(),
            Err(_) => log::warn!("[unmount] ignored: globe is already unmounting"),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.is_live()
    }

    /// Open the panel for `name`, as if its marker were clicked.
    pub fn select_city(&self, name: &str) -> bool {
        if !self.shared.is_live() {
            return false;
        }
        match self.shared.atlas.id_of(name) {
            Some(id) => {
                self.shared.dispatch(PanelAction::Select(id));
                true
            }
            None => {
                log::warn!("[select] unknown city {:?}", name);
                false
            }
        }
    }

    pub fn close_panel(&self) {
        self.shared.dispatch(PanelAction::Close);
    }

    pub fn selected_city(&self) -> Option<String> {
        self.shared.selected_city_name()
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Mount a globe into the element with id `container_id`. Fails if that
/// container already hosts one; the globe mounted at start is reached
/// through [`auto_mounted_globe`].
#[wasm_bindgen]
pub fn mount_globe(container_id: &str, config_json: Option<String>) -> Result<GlobeHandle, JsValue> {
    let config = match config_json {
        Some(json) => GlobeConfig::from_json(&json).map_err(|e| to_js(e.into()))?,
        None => GlobeConfig::default(),
    };
    let app = GlobeApp::mount(container_id, config).map_err(to_js)?;
    let shared = app.shared().clone();
    Ok(GlobeHandle {
        app: Rc::new(RefCell::new(app)),
        shared,
    })
}

/// The globe `start` mounted into `#globe-root`, while it is still mounted.
#[wasm_bindgen]
pub fn auto_mounted_globe() -> Option<GlobeHandle> {
    AUTO_MOUNTED.with(|slot| {
        slot.borrow()
            .as_ref()
            .filter(|handle| handle.is_mounted())
            .cloned()
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    let has_root = web::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(DEFAULT_CONTAINER_ID))
        .is_some();
    if has_root {
        match mount_globe(DEFAULT_CONTAINER_ID, None) {
            Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
            Err(e) => log::error!("mount error: {:?}", e),
        }
    }
    Ok(())
}
