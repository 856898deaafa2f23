//! Scene Manager: the scene model plus the GPU state that draws it.
//!
//! GPU initialization is asynchronous, so the manager starts without a
//! `GpuState` and accepts one later. Textures that finish loading before
//! the GPU is ready are held until it arrives.

use crate::render::GpuState;
use globe_core::scene::SceneModel;
use globe_core::{Atlas, CityId, GlobeConfig, TextureKind};
use glam::Vec2;
use std::rc::Rc;
use web_sys as web;

pub struct SceneManager {
    model: SceneModel,
    config: Rc<GlobeConfig>,
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState>,
    pending_textures: Vec<(TextureKind, web::ImageBitmap)>,
}

impl SceneManager {
    pub fn new(canvas: web::HtmlCanvasElement, atlas: &Atlas, config: Rc<GlobeConfig>) -> Self {
        let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
        let model = SceneModel::new(atlas, &config, aspect);
        log::info!("[scene] {} markers placed", model.markers().len());
        Self {
            model,
            config,
            canvas,
            gpu: None,
            pending_textures: Vec::new(),
        }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn attach_gpu(&mut self, mut gpu: GpuState) {
        for (kind, bitmap) in self.pending_textures.drain(..) {
            gpu.install_texture(kind, &bitmap);
        }
        self.gpu = Some(gpu);
    }

    pub fn install_texture(&mut self, kind: TextureKind, bitmap: web::ImageBitmap) {
        match &mut self.gpu {
            Some(gpu) => gpu.install_texture(kind, &bitmap),
            None => self.pending_textures.push((kind, bitmap)),
        }
    }

    pub fn set_highlighted(&mut self, city: Option<CityId>) {
        self.model.set_highlighted(city);
    }

    /// Hit test a click at canvas-relative CSS pixels.
    pub fn pick_css(&self, x: f32, y: f32) -> Option<CityId> {
        let rect = self.canvas.get_bounding_client_rect();
        let ndc = globe_core::picking::ndc_from_css(x, y, rect.width() as f32, rect.height() as f32)?;
        self.model.pick(ndc)
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.model.controls.begin_drag(Vec2::new(x, y));
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        let height = self.canvas.get_bounding_client_rect().height() as f32;
        self.model.controls.drag_to(Vec2::new(x, y), height);
    }

    pub fn end_drag(&mut self) {
        self.model.controls.end_drag();
    }

    pub fn is_dragging(&self) -> bool {
        self.model.controls.is_dragging()
    }

    pub fn zoom(&mut self, delta_y: f32) {
        self.model.controls.zoom(delta_y);
    }

    /// One iteration of the render loop: damp the controls, then draw.
    pub fn frame(&mut self) {
        let width = self.canvas.width();
        let height = self.canvas.height();
        self.model.camera.set_viewport(width as f32, height as f32);
        self.model.advance();

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(width, height);
            if let Err(e) = gpu.render(&self.model) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}
