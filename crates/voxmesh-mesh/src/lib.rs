//! CPU face culling and quad emission: one quad per exposed voxel face,
//! appended into flat vertex/normal/uv/index buffers.
#![forbid(unsafe_code)]

use voxmesh_geom::{Aabb, Vec3};
use voxmesh_grid::VoxelGrid;

mod face;

pub use face::{CUBE_CORNERS, Face, QUAD_TRIANGLES, QUAD_UVS};

/// Opaque handle into whatever material table the render sink keeps.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct MaterialId(pub u16);

/// Growable mesh buffers: positions/normals as xyz triples, uvs as uv pairs,
/// triangle indices into the vertex list. Quads are appended in place rather
/// than collected as per-face objects and merged afterwards.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates room for `quads` quads.
    pub fn with_quad_capacity(quads: usize) -> Self {
        Self {
            pos: Vec::with_capacity(quads * 12),
            norm: Vec::with_capacity(quads * 12),
            uv: Vec::with_capacity(quads * 8),
            idx: Vec::with_capacity(quads * 6),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertex_count() / 4
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Appends one quad for `face` of the voxel centered at `center`:
    /// four canonical corners, a constant outward normal, the fixed UV
    /// square, and two triangles with indices offset past the existing
    /// vertices.
    pub fn add_face(&mut self, face: Face, center: Vec3) {
        let base = self.vertex_count() as u32;
        let n = face.normal();
        for corner in face.corners() {
            let p = center + corner;
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        }
        for (u, v) in QUAD_UVS {
            self.uv.extend_from_slice(&[u, v]);
        }
        for t in QUAD_TRIANGLES {
            self.idx.push(base + t);
        }
    }

    /// Bounding box over all vertices. `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(
            self.pos
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        )
    }
}

/// Emits the exposed faces of the voxel at `(x, y, z)` into `out`.
///
/// An empty voxel contributes nothing. For a solid voxel each of the six
/// directions is checked in the fixed order front, back, top, bottom, left,
/// right; a face is emitted only when the neighbor in that direction is not
/// solid. Neighbors outside the grid read as empty, so grid-edge faces are
/// always exposed.
pub fn emit_voxel_faces(grid: &VoxelGrid, x: usize, y: usize, z: usize, out: &mut MeshBuild) {
    if grid.get(x, y, z) == 0 {
        return;
    }
    let (xi, yi, zi) = (x as i32, y as i32, z as i32);
    let center = Vec3::new(x as f32, y as f32, z as f32);
    for f in Face::ALL {
        let (dx, dy, dz) = f.delta();
        if !grid.is_solid(xi + dx, yi + dy, zi + dz) {
            out.add_face(f, center);
        }
    }
}

/// Builds the combined mesh for a whole grid, walking x-outer, y-middle,
/// z-inner. Output is fully deterministic for a given grid. An all-empty
/// grid yields a valid zero-geometry mesh.
pub fn build_grid_mesh(grid: &VoxelGrid) -> MeshBuild {
    let mut mesh = MeshBuild::new();
    for x in 0..grid.x_size() {
        for y in 0..grid.y_size() {
            for z in 0..grid.z_size() {
                emit_voxel_faces(grid, x, y, z, &mut mesh);
            }
        }
    }
    log::trace!(
        "meshed {}x{}x{} grid: {} quads, {} tris",
        grid.x_size(),
        grid.y_size(),
        grid.z_size(),
        mesh.quad_count(),
        mesh.triangle_count()
    );
    mesh
}
