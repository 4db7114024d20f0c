//! Text dataset I/O: cube-record files (one comma-separated occupancy line
//! per world) and their companion metadata records.
#![forbid(unsafe_code)]

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use voxmesh_grid::{GridError, VoxelGrid};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("metadata record {0:?} is not three comma-separated integers")]
    BadMetadata(String),
    #[error("dataset holds {actual} records, expected at least {expected}")]
    TooFewRecords { expected: usize, actual: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parses a metadata record: one line of three comma-separated extents
/// `x,y,z`.
pub fn parse_metadata(record: &str) -> Result<(usize, usize, usize), DatasetError> {
    let trimmed = record.trim();
    let parts: Vec<&str> = trimmed.split(',').collect();
    if parts.len() != 3 {
        return Err(DatasetError::BadMetadata(trimmed.to_string()));
    }
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| DatasetError::BadMetadata(trimmed.to_string()))
    };
    Ok((parse(parts[0])?, parse(parts[1])?, parse(parts[2])?))
}

/// Reads the companion `.meta` file for a dataset.
pub fn load_metadata(path: impl AsRef<Path>) -> Result<(usize, usize, usize), DatasetError> {
    let s = fs::read_to_string(path)?;
    parse_metadata(&s)
}

/// Parses one cube record: comma-separated occupancy tokens, flat-encoded
/// with the dataset's asymmetric index formula. A `"1"` token is solid;
/// any other token reads as empty (the format is lenient there). The token
/// count must match the declared extents.
pub fn parse_cube_record(
    line: &str,
    (x_size, y_size, z_size): (usize, usize, usize),
) -> Result<VoxelGrid, DatasetError> {
    let solid: Vec<bool> = line.trim_end().split(',').map(|tok| tok == "1").collect();
    Ok(VoxelGrid::from_occupancy(x_size, y_size, z_size, &solid)?)
}

/// Loads the first `count` cube records from a dataset file.
pub fn load_cube_dataset(
    path: impl AsRef<Path>,
    count: usize,
    dims: (usize, usize, usize),
) -> Result<Vec<VoxelGrid>, DatasetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < count {
        return Err(DatasetError::TooFewRecords {
            expected: count,
            actual: lines.len(),
        });
    }
    let mut worlds = Vec::with_capacity(count);
    for line in &lines[..count] {
        worlds.push(parse_cube_record(line, dims)?);
    }
    log::info!(
        "loaded {} cube records ({}x{}x{}) from {}",
        worlds.len(),
        dims.0,
        dims.1,
        dims.2,
        path.display()
    );
    Ok(worlds)
}

/// Flattens a grid into one dump line: x-outer, y-middle, z-inner nesting,
/// comma separated, trailing comma trimmed.
pub fn dump_record(grid: &VoxelGrid) -> String {
    let mut out = String::with_capacity(grid.cells().len() * 2);
    for x in 0..grid.x_size() {
        for y in 0..grid.y_size() {
            for z in 0..grid.z_size() {
                out.push_str(&grid.get(x, y, z).to_string());
                out.push(',');
            }
        }
    }
    out.pop();
    out
}

/// Appends one world per line to the dump file, creating it if absent.
pub fn append_dump(path: impl AsRef<Path>, grid: &VoxelGrid) -> Result<(), DatasetError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", dump_record(grid))?;
    Ok(())
}
