//! Mount/unmount of one globe instance and the selection dispatcher.
//!
//! Everything the instance acquires at mount is owned by [`GlobeApp`] and
//! released by `unmount`, which also runs on drop. DOM changes are recorded
//! in a [`Teardown`] as they happen, so a mount that fails partway removes
//! what it added. Async work started at mount holds the `mounted` flag and
//! does nothing once it is cleared.

use crate::assets;
use crate::constants::*;
use crate::dom::{self, ListenerGuard};
use crate::events;
use crate::frame::FrameLoop;
use crate::overlay::StatusLine;
use crate::panel::Panel;
use crate::render::GpuState;
use crate::scene::SceneManager;
use globe_core::constants::CITY_SELECTED_EVENT;
use globe_core::mounts::MountRegistry;
use globe_core::teardown::Teardown;
use globe_core::{Atlas, GlobeConfig, PanelAction, PanelController};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    static MOUNTS: RefCell<MountRegistry> = RefCell::new(MountRegistry::default());
}

/// State shared by the event handlers of one mounted globe.
pub struct Shared {
    pub atlas: Atlas,
    pub controller: RefCell<PanelController>,
    pub scene: Rc<RefCell<SceneManager>>,
    pub panel: Panel,
    pub status: Rc<StatusLine>,
    pub container: web::Element,
}

impl Shared {
    /// Apply a panel action, re-render on change, then tell the host about
    /// a selection. No borrow is held while the host event runs.
    pub fn dispatch(&self, action: PanelAction) -> bool {
        let transition = self.controller.borrow_mut().dispatch(action, &self.atlas);
        if transition.changed {
            self.refresh();
        }
        if let Some(name) = transition.selected.and_then(|c| self.atlas.name_of(c)) {
            log::info!("[select] {}", name);
            self.emit_city_selected(name);
        }
        transition.changed
    }

    pub fn is_live(&self) -> bool {
        !self.controller.borrow().is_shut()
    }

    pub fn is_open(&self) -> bool {
        self.controller.borrow().selection().is_open()
    }

    pub fn selected_city_name(&self) -> Option<String> {
        let city = self.controller.borrow().selection().city()?;
        self.atlas.name_of(city).map(str::to_string)
    }

    fn shut(&self) {
        if self.controller.borrow_mut().shut() {
            self.refresh();
        }
    }

    fn refresh(&self) {
        let selection = self.controller.borrow().selection();
        self.panel.render(selection.view(&self.atlas));
        self.scene.borrow_mut().set_highlighted(selection.city());
    }

    fn emit_city_selected(&self, name: &str) {
        let init = web::CustomEventInit::new();
        init.set_detail(&JsValue::from_str(name));
        match web::CustomEvent::new_with_event_init_dict(CITY_SELECTED_EVENT, &init) {
            Ok(ev) => {
                _ = self.container.dispatch_event(&ev);
            }
            Err(e) => log::warn!("[select] event not dispatched: {:?}", e),
        }
    }
}

pub struct GlobeApp {
    shared: Rc<Shared>,
    mounted: Rc<Cell<bool>>,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<ListenerGuard>,
    teardown: Teardown,
}

impl GlobeApp {
    /// Mount into the element with id `container_id`. Fails if a globe
    /// already lives there. On error everything added so far is removed.
    pub fn mount(container_id: &str, config: GlobeConfig) -> anyhow::Result<Self> {
        let atlas = Atlas::builtin()?;
        let config = Rc::new(config);
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;
        if !MOUNTS.with(|m| m.borrow_mut().claim(container_id)) {
            anyhow::bail!("#{} already hosts a globe", container_id);
        }

        let mut teardown = Teardown::new();
        let id = container_id.to_string();
        teardown.push("mount claim", move || {
            MOUNTS.with(|m| m.borrow_mut().release(&id));
        });
        if container.get_attribute("style").is_none() {
            _ = container.set_attribute("style", CONTAINER_STYLE);
            let c = container.clone();
            teardown.push("container style", move || {
                _ = c.remove_attribute("style");
            });
        }

        let status = Rc::new(StatusLine::attach(&document, &container)?);
        let status_el = status.clone();
        teardown.push("status line", move || status_el.detach());
        status.set(STATUS_INITIALIZING);

        status.set(STATUS_SCENE);
        let canvas: web::HtmlCanvasElement = dom::create_element(&document, "canvas")?;
        canvas.set_class_name(CANVAS_CLASS);
        _ = canvas.set_attribute("style", CANVAS_STYLE);
        container
            .insert_before(&canvas, container.first_child().as_ref())
            .map_err(|e| anyhow::anyhow!("insert canvas: {:?}", e))?;
        let canvas_el = canvas.clone();
        teardown.push("canvas", move || canvas_el.remove());
        dom::sync_canvas_backing_size(&canvas);

        status.set(STATUS_GLOBE);
        status.set(STATUS_CONTROLS);
        status.set(STATUS_MARKERS);
        let scene = Rc::new(RefCell::new(SceneManager::new(
            canvas.clone(),
            &atlas,
            config.clone(),
        )));
        let panel = Panel::attach(&document, &container)?;
        let panel_el = panel.element().clone();
        teardown.push("panel", move || panel_el.remove());

        let shared = Rc::new(Shared {
            atlas,
            controller: RefCell::new(PanelController::new()),
            scene: scene.clone(),
            panel,
            status: status.clone(),
            container,
        });

        status.set(STATUS_INTERACTIVITY);
        let mut listeners = events::wire_pointer(&shared, &canvas)?;
        listeners.push(events::wire_panel_actions(&shared)?);
        listeners.push(events::wire_keyboard(&shared)?);
        listeners.push(events::wire_resize(&canvas)?);

        // Nothing below can fail; async work starts only for a complete mount.
        let mounted = Rc::new(Cell::new(true));
        assets::spawn_texture_loads(&scene, &status, &mounted);
        spawn_gpu_init(&canvas, &shared, &mounted);

        status.set(STATUS_LOOP);
        let scene_tick = scene.clone();
        let frame_loop = FrameLoop::start(move |_timestamp_ms| {
            scene_tick.borrow_mut().frame();
        });

        status.set(STATUS_COMPLETE);
        Ok(Self {
            shared,
            mounted,
            frame_loop: Some(frame_loop),
            listeners,
            teardown,
        })
    }

    pub fn shared(&self) -> &Rc<Shared> {
        &self.shared
    }

    /// Release everything acquired at mount. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted.replace(false) {
            return;
        }
        self.shared.status.set(STATUS_CLEANUP);
        if let Some(mut frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        for guard in self.listeners.drain(..) {
            log::debug!("[unmount] removing {} listener", guard.kind());
        }
        self.shared.shut();
        self.teardown.run();
        log::info!("[unmount] globe detached");
    }
}

impl Drop for GlobeApp {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn spawn_gpu_init(canvas: &web::HtmlCanvasElement, shared: &Rc<Shared>, mounted: &Rc<Cell<bool>>) {
    let canvas = canvas.clone();
    let shared = shared.clone();
    let mounted = mounted.clone();
    spawn_local(async move {
        let config = shared.scene.borrow().config().clone();
        let result = GpuState::new(canvas, &config).await;
        if !mounted.get() {
            return;
        }
        match result {
            Ok(gpu) => shared.scene.borrow_mut().attach_gpu(gpu),
            Err(e) => {
                log::error!("WebGPU init error: {:?}", e);
                shared.status.set(&format!("WebGPU unavailable: {}", e));
            }
        }
    });
}
