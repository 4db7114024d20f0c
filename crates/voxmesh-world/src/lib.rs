//! World-space addressing: chunk coordinates, world-to-chunk decomposition,
//! world build configuration, and procedural fill generators.
#![forbid(unsafe_code)]

mod chunk_coord;
mod config;
pub mod procgen;

pub use chunk_coord::ChunkCoord;
pub use config::WorldConfig;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("world coordinate ({0}, {1}, {2}) has a negative component")]
    NegativeCoordinate(i32, i32, i32),
}

/// A world coordinate split into its owning chunk and the offset inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkAddress {
    pub chunk: ChunkCoord,
    pub local: (usize, usize, usize),
}

/// Decomposes a global voxel coordinate into (chunk, local) for cubic chunks
/// of `chunk_size` voxels per edge.
///
/// World coordinates are non-negative by contract, so per-axis truncating
/// division and remainder are exact. A negative component is rejected rather
/// than wrapped.
pub fn split_world_coord(
    wx: i32,
    wy: i32,
    wz: i32,
    chunk_size: usize,
) -> Result<ChunkAddress, WorldError> {
    if wx < 0 || wy < 0 || wz < 0 {
        return Err(WorldError::NegativeCoordinate(wx, wy, wz));
    }
    let size = chunk_size as i32;
    Ok(ChunkAddress {
        chunk: ChunkCoord::new(wx / size, wy / size, wz / size),
        local: (
            (wx % size) as usize,
            (wy % size) as usize,
            (wz % size) as usize,
        ),
    })
}
