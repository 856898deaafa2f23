use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed UV sphere centred on the origin.
///
/// Column `u = 0` lies on -X and rows run from the north pole (+Y) down, so
/// an equirectangular map lines up with `projection::lat_lon_to_position`.
/// Texture `v` grows downward. Pole rows shift `u` by half a segment and the
/// degenerate pole triangles are skipped.
#[derive(Clone, Debug)]
pub struct SphereGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SphereGeometry {
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.max(3);
        let hs = height_segments.max(2);
        let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(hs as usize + 1);

        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            let u_offset = if iy == 0 {
                0.5 / ws as f32
            } else if iy == hs {
                -0.5 / ws as f32
            } else {
                0.0
            };
            let mut row = Vec::with_capacity(ws as usize + 1);
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                let (sin_t, cos_t) = (v * PI).sin_cos();
                let (sin_p, cos_p) = (u * TAU).sin_cos();
                let position = [-radius * cos_p * sin_t, radius * cos_t, radius * sin_p * sin_t];
                let n = glam::Vec3::from(position).normalize_or_zero();
                row.push(vertices.len() as u32);
                vertices.push(Vertex {
                    position,
                    normal: n.to_array(),
                    uv: [u + u_offset, v],
                });
            }
            grid.push(row);
        }

        let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
        for iy in 0..hs as usize {
            for ix in 0..ws as usize {
                let a = grid[iy][ix + 1];
                let b = grid[iy][ix];
                let c = grid[iy + 1][ix];
                let d = grid[iy + 1][ix + 1];
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != hs as usize - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
