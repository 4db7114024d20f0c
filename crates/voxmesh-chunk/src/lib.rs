//! Chunk ownership and orchestration: fixed-size voxel sub-grids, the
//! coordinate-keyed chunk registry, and the world assembler that routes
//! global voxels into chunks.
#![forbid(unsafe_code)]

use hashbrown::HashMap;
use thiserror::Error;

use voxmesh_geom::Vec3;
use voxmesh_grid::VoxelGrid;
use voxmesh_mesh::{MaterialId, MeshBuild, build_grid_mesh};
use voxmesh_world::{ChunkCoord, WorldError, split_world_coord};

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error(
        "chunk {coord:?} sub-grid is {actual:?}, expected {expected}^3 to match the chunk size"
    )]
    DimensionMismatch {
        coord: ChunkCoord,
        expected: usize,
        actual: (usize, usize, usize),
    },
    #[error("chunk {0:?} has already been built")]
    AlreadyBuilt(ChunkCoord),
    #[error("chunk {0:?} has no mesh yet; call build first")]
    NotBuilt(ChunkCoord),
    #[error("a chunk is already registered at {0:?}")]
    DuplicateChunk(ChunkCoord),
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("mesh sink rejected chunk output: {0}")]
    Sink(#[from] std::io::Error),
}

/// Receiver for finished chunk geometry. The core hands over flat buffers
/// plus a translation-only world transform and never touches a rendering API.
pub trait MeshSink {
    fn submit(
        &mut self,
        material: MaterialId,
        mesh: &MeshBuild,
        translation: Vec3,
    ) -> std::io::Result<()>;
}

/// A cubic partition of world space owning a `chunk_size`^3 occupancy
/// sub-grid and, once built, one combined mesh.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    chunk_size: usize,
    anchor: Vec3,
    material: MaterialId,
    grid: VoxelGrid,
    mesh: Option<MeshBuild>,
}

impl Chunk {
    /// Empty chunk anchored at `coord * chunk_size` plus `world_offset`.
    pub fn new(
        coord: ChunkCoord,
        chunk_size: usize,
        world_offset: Vec3,
        material: MaterialId,
    ) -> Self {
        let (bx, by, bz) = coord.base(chunk_size);
        Self {
            coord,
            chunk_size,
            anchor: Vec3::new(bx as f32, by as f32, bz as f32) + world_offset,
            material,
            grid: VoxelGrid::empty(chunk_size, chunk_size, chunk_size),
            mesh: None,
        }
    }

    /// Wraps an externally produced sub-grid. The grid is expected to be
    /// `chunk_size`^3; `build` surfaces any mismatch before emitting
    /// geometry.
    pub fn from_grid(
        coord: ChunkCoord,
        chunk_size: usize,
        world_offset: Vec3,
        material: MaterialId,
        grid: VoxelGrid,
    ) -> Self {
        let (bx, by, bz) = coord.base(chunk_size);
        Self {
            coord,
            chunk_size,
            anchor: Vec3::new(bx as f32, by as f32, bz as f32) + world_offset,
            material,
            grid,
            mesh: None,
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    #[inline]
    pub fn material(&self) -> MaterialId {
        self.material
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Writes one occupancy value at a chunk-local coordinate. Locals are
    /// derived from the addressing codec by the assembler, so they are in
    /// `[0, chunk_size)` on every axis by construction.
    #[inline]
    pub fn set_voxel(&mut self, x: usize, y: usize, z: usize, value: u8) {
        self.grid.set(x, y, z, value);
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        self.mesh.is_some()
    }

    /// Culls and merges the chunk's exposed faces into its combined mesh.
    ///
    /// Culling consults only this chunk's own sub-grid, so faces on chunk
    /// seams are always treated as exposed. A chunk with no solid voxels
    /// builds an empty mesh. Building twice is an error; rebuild is not
    /// supported.
    pub fn build(&mut self) -> Result<&MeshBuild, ChunkError> {
        if self.mesh.is_some() {
            return Err(ChunkError::AlreadyBuilt(self.coord));
        }
        let dims = self.grid.dims();
        if dims != (self.chunk_size, self.chunk_size, self.chunk_size) {
            return Err(ChunkError::DimensionMismatch {
                coord: self.coord,
                expected: self.chunk_size,
                actual: dims,
            });
        }
        let mesh = build_grid_mesh(&self.grid);
        log::debug!(
            "built chunk {:?}: {} quads, {} verts",
            self.coord,
            mesh.quad_count(),
            mesh.vertex_count()
        );
        Ok(self.mesh.insert(mesh))
    }

    /// The combined mesh. Fails until `build` has run.
    pub fn mesh(&self) -> Result<&MeshBuild, ChunkError> {
        self.mesh.as_ref().ok_or(ChunkError::NotBuilt(self.coord))
    }
}

/// Chunks keyed by their structured chunk coordinate. Entries are created on
/// first touch and never removed.
#[derive(Default)]
pub struct ChunkRegistry {
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl ChunkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup only; never creates.
    #[inline]
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    #[inline]
    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    /// Registers a chunk under its own coordinate. Re-registration at an
    /// occupied coordinate is rejected and leaves the existing entry intact.
    pub fn add(&mut self, chunk: Chunk) -> Result<(), ChunkError> {
        let coord = chunk.coord();
        match self.chunks.entry(coord) {
            hashbrown::hash_map::Entry::Occupied(_) => Err(ChunkError::DuplicateChunk(coord)),
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(chunk);
                Ok(())
            }
        }
    }

    /// Returns the chunk at `coord`, creating and registering one via `make`
    /// on first touch.
    pub fn get_or_create_with(
        &mut self,
        coord: ChunkCoord,
        make: impl FnOnce() -> Chunk,
    ) -> &mut Chunk {
        self.chunks.entry(coord).or_insert_with(make)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Builds every registered chunk and hands each result to `sink`.
    ///
    /// Chunks are independent, so cross-chunk order is unspecified and does
    /// not affect any chunk's geometry. The first failure aborts the whole
    /// build; there is no partial-success mode.
    pub fn build_all(&mut self, sink: &mut dyn MeshSink) -> Result<(), ChunkError> {
        for chunk in self.chunks.values_mut() {
            chunk.build()?;
            sink.submit(chunk.material, chunk.mesh()?, chunk.anchor)?;
        }
        log::info!("built {} chunks", self.chunks.len());
        Ok(())
    }
}

/// Settings for slicing one world grid into chunks.
#[derive(Clone, Copy, Debug)]
pub struct WorldBuildParams {
    pub chunk_size: usize,
    pub world_offset: Vec3,
    pub material: MaterialId,
}

impl Default for WorldBuildParams {
    fn default() -> Self {
        Self {
            chunk_size: 16,
            world_offset: Vec3::ZERO,
            material: MaterialId(0),
        }
    }
}

/// Walks every global voxel of `world`, resolves its owning chunk through
/// the addressing codec, lazily creates and registers that chunk, and copies
/// the occupancy value in. Building is a separate step; call
/// [`ChunkRegistry::build_all`] on the result.
pub fn populate_world(
    world: &VoxelGrid,
    params: &WorldBuildParams,
) -> Result<ChunkRegistry, ChunkError> {
    let mut registry = ChunkRegistry::new();
    for x in 0..world.x_size() {
        for y in 0..world.y_size() {
            for z in 0..world.z_size() {
                let addr = split_world_coord(x as i32, y as i32, z as i32, params.chunk_size)?;
                let chunk = registry.get_or_create_with(addr.chunk, || {
                    Chunk::new(
                        addr.chunk,
                        params.chunk_size,
                        params.world_offset,
                        params.material,
                    )
                });
                let (lx, ly, lz) = addr.local;
                chunk.set_voxel(lx, ly, lz, world.get(x, y, z));
            }
        }
    }
    log::debug!(
        "populated {} chunks from {:?} world",
        registry.len(),
        world.dims()
    );
    Ok(registry)
}
