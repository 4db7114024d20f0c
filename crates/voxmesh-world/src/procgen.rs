//! Parametrized procedural fill routines for producing test worlds.
//!
//! These are height-column fills, not part of the addressing/meshing core;
//! the CLI uses them to produce datasets in the text dump format.

use rand::Rng;

use voxmesh_grid::VoxelGrid;

/// Elliptic paraboloid fill over a cubic world of edge `dim`.
///
/// Column height at centered offsets `(xo, zo)` is
/// `(-(xo^2 * 2) - zo^2 + 100) / -3` with truncating integer division; a
/// voxel is solid when its y offset is at or below that height.
pub fn elliptic_paraboloid(dim: usize) -> VoxelGrid {
    let n = dim as i32;
    let half = n / 2;
    let mut grid = VoxelGrid::empty(dim, dim, dim);
    for xo in -half..half {
        for zo in -half..half {
            let height = (-(xo * xo * 2) - zo * zo + 100) / -3;
            for yo in 0..n {
                if yo <= height {
                    grid.set(
                        (xo + half) as usize,
                        yo as usize,
                        (zo + half) as usize,
                        1,
                    );
                }
            }
        }
    }
    grid
}

/// Single pyramid-shaped hill with a random peak, over a cubic world of edge
/// `dim`. Column height is base (1) plus the peak height minus the Chebyshev
/// distance from the peak, clamped at the peak itself.
pub fn pyramid_hill<R: Rng>(dim: usize, rng: &mut R) -> VoxelGrid {
    let n = dim as i32;
    let peak_height = rng.gen_range(8..15);
    let x_peak = rng.gen_range(1..n - 2);
    let z_peak = rng.gen_range(1..n - 2);
    let mut grid = VoxelGrid::empty(dim, dim, dim);
    for xo in 0..n {
        for zo in 0..n {
            let dist = (zo - z_peak).abs().max((xo - x_peak).abs());
            let height = 1 + peak_height - peak_height.min(dist);
            for yo in 0..n {
                if yo <= height {
                    grid.set(xo as usize, yo as usize, zo as usize, 1);
                }
            }
        }
    }
    grid
}

/// Batch of independent pyramid-hill worlds.
pub fn pyramid_hill_batch<R: Rng>(dim: usize, count: usize, rng: &mut R) -> Vec<VoxelGrid> {
    (0..count).map(|_| pyramid_hill(dim, rng)).collect()
}
