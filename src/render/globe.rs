use super::helpers::{self, MeshBuffers};
use crate::constants::TEXTURE_FORMAT;
use globe_core::mesh::SphereGeometry;
use globe_core::{GlobeConfig, TextureKind};
use glam::{Mat4, Vec3};
use web_sys as web;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobeUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
    specular: [f32; 4],
    params: [f32; 4],
}

/// Lighting and material values that do not change per frame.
#[derive(Clone, Copy)]
struct Material {
    light_pos: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
    specular: [f32; 4],
    params: [f32; 4],
}

impl Material {
    fn from_config(cfg: &GlobeConfig) -> Self {
        let scaled = |rgb: [f32; 3], k: f32| [rgb[0] * k, rgb[1] * k, rgb[2] * k, 1.0];
        let p = cfg.point_light_position;
        let s = cfg.specular_color;
        Self {
            light_pos: [p[0], p[1], p[2], 1.0],
            light_color: scaled(cfg.point_light_color, cfg.point_light_intensity),
            ambient: scaled(cfg.ambient_color, cfg.ambient_intensity),
            specular: [s[0], s[1], s[2], cfg.shininess],
            params: [cfg.bump_scale, 0.0, 0.0, 0.0],
        }
    }
}

struct MapTexture {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

/// Color maps are sampled as sRGB; bump and specular hold linear data.
fn texture_format(kind: TextureKind) -> wgpu::TextureFormat {
    match kind {
        TextureKind::Color => TEXTURE_FORMAT,
        TextureKind::Bump | TextureKind::Specular => wgpu::TextureFormat::Rgba8Unorm,
    }
}

fn fallback_rgba(kind: TextureKind) -> [u8; 4] {
    match kind {
        TextureKind::Color => [70, 95, 140, 255],
        TextureKind::Bump => [0, 0, 0, 255],
        TextureKind::Specular => [0, 0, 0, 255],
    }
}

pub(crate) struct GlobePass {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    mesh: MeshBuffers,
    maps: [MapTexture; 3],
    material: Material,
}

fn slot(kind: TextureKind) -> usize {
    match kind {
        TextureKind::Color => 0,
        TextureKind::Bump => 1,
        TextureKind::Specular => 2,
    }
}

impl GlobePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        cfg: &GlobeConfig,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(super::GLOBE_WGSL.into()),
        });
        let tex_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globe_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                tex_entry(1),
                tex_entry(2),
                tex_entry(3),
                wgpu::BindGroupLayoutEntry {
                    binding: 4,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("globe_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_mesh_pipeline(
            device,
            "globe_pipeline",
            &pl,
            &shader,
            &[helpers::sphere_vertex_layout()],
            color_format,
            depth_format,
        );

        let geometry = SphereGeometry::new(cfg.globe_radius, cfg.globe_segments, cfg.globe_segments);
        let mesh = helpers::upload_sphere(device, "globe_mesh", &geometry);
        let material = Material::from_config(cfg);
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "globe_uniforms",
            &Self::uniforms(&material, Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO),
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("globe_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let maps = TextureKind::ALL.map(|kind| {
            let (texture, view) = helpers::create_solid_texture(
                device,
                queue,
                kind.label(),
                texture_format(kind),
                fallback_rgba(kind),
            );
            MapTexture {
                _texture: texture,
                view,
            }
        });
        let bind_group = Self::bind_group(device, &bgl, &uniform_buffer, &maps, &sampler);

        Self {
            pipeline,
            bgl,
            bind_group,
            uniform_buffer,
            sampler,
            mesh,
            maps,
            material,
        }
    }

    fn uniforms(material: &Material, view_proj: Mat4, model: Mat4, eye: Vec3) -> GlobeUniforms {
        GlobeUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: eye.extend(1.0).to_array(),
            light_pos: material.light_pos,
            light_color: material.light_color,
            ambient: material.ambient,
            specular: material.specular,
            params: material.params,
        }
    }

    fn bind_group(
        device: &wgpu::Device,
        bgl: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        maps: &[MapTexture; 3],
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globe_bg"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&maps[0].view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&maps[1].view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&maps[2].view),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    /// Replace one of the fallback maps with a decoded image.
    pub(crate) fn install_map(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        kind: TextureKind,
        bitmap: &web::ImageBitmap,
    ) {
        let width = bitmap.width().max(1);
        let height = bitmap.height().max(1);
        let (texture, view) = helpers::create_color_texture_device(
            device,
            kind.label(),
            width,
            height,
            texture_format(kind),
            wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::ImageBitmap(bitmap.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.maps[slot(kind)] = MapTexture {
            _texture: texture,
            view,
        };
        self.bind_group = Self::bind_group(
            device,
            &self.bgl,
            &self.uniform_buffer,
            &self.maps,
            &self.sampler,
        );
        log::info!("[globe] installed {} ({}x{})", kind.label(), width, height);
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, view_proj: Mat4, model: Mat4, eye: Vec3) {
        let u = Self::uniforms(&self.material, view_proj, model, eye);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
    }
}
