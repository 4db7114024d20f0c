//! CLI wiring: load or generate flat voxel datasets, slice them into
//! chunks, build the per-chunk meshes, and hand them to a sink.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use voxmesh_chunk::{WorldBuildParams, populate_world};
use voxmesh_geom::Vec3;
use voxmesh_io::{append_dump, load_cube_dataset, load_metadata};
use voxmesh_mesh::MaterialId;
use voxmesh_world::{WorldConfig, procgen};

mod sink;

use sink::{ObjSink, StatsSink};

#[derive(Parser)]
#[command(name = "voxmesh", about = "Chunked surface meshing for voxel occupancy datasets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a cube dataset, assemble chunked worlds, and build their meshes.
    Build {
        /// Dataset file: one comma-separated occupancy record per line.
        #[arg(long)]
        input: PathBuf,
        /// Companion metadata file (three comma-separated extents). Defaults
        /// to `<input>.meta`.
        #[arg(long)]
        meta: Option<PathBuf>,
        /// Number of records to load.
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Cubic chunk edge length, in voxels.
        #[arg(long, default_value_t = 16)]
        chunk_size: usize,
        /// Optional TOML world config overriding dims/chunk size/offset.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the combined meshes to this OBJ file instead of only
        /// logging stats.
        #[arg(long)]
        obj: Option<PathBuf>,
    },
    /// Generate pyramid-hill worlds and append them to a dump file.
    GenHills {
        /// Cubic world edge length.
        #[arg(long, default_value_t = 16)]
        dim: usize,
        /// Number of worlds to generate.
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long)]
        out: PathBuf,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate one elliptic-paraboloid world and append it to a dump file.
    GenParaboloid {
        /// Cubic world edge length.
        #[arg(long, default_value_t = 32)]
        dim: usize,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Build {
            input,
            meta,
            count,
            chunk_size,
            config,
            obj,
        } => run_build(input, meta, count, chunk_size, config, obj),
        Command::GenHills {
            dim,
            count,
            out,
            seed,
        } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            for world in procgen::pyramid_hill_batch(dim, count, &mut rng) {
                append_dump(&out, &world)?;
            }
            log::info!("wrote {count} hill worlds of dim {dim} to {}", out.display());
            Ok(())
        }
        Command::GenParaboloid { dim, out } => {
            let world = procgen::elliptic_paraboloid(dim);
            append_dump(&out, &world)?;
            log::info!("wrote paraboloid world of dim {dim} to {}", out.display());
            Ok(())
        }
    }
}

fn run_build(
    input: PathBuf,
    meta: Option<PathBuf>,
    count: usize,
    chunk_size: usize,
    config: Option<PathBuf>,
    obj: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let (dims, chunk_size, base_offset) = match config {
        Some(path) => {
            let cfg = WorldConfig::from_path(path)?;
            (
                (cfg.dims[0], cfg.dims[1], cfg.dims[2]),
                cfg.chunk_size,
                Vec3::new(cfg.offset[0], cfg.offset[1], cfg.offset[2]),
            )
        }
        None => {
            let meta_path = meta.unwrap_or_else(|| {
                let mut p = input.clone();
                p.as_mut_os_string().push(".meta");
                p
            });
            (load_metadata(meta_path)?, chunk_size, Vec3::ZERO)
        }
    };

    let worlds = load_cube_dataset(&input, count, dims)?;

    let mut stats = StatsSink::default();
    let mut obj_sink = match obj {
        Some(path) => Some(ObjSink::create(path)?),
        None => None,
    };

    // Records are laid out side by side along +x, one world width apart.
    for (i, world) in worlds.iter().enumerate() {
        let params = WorldBuildParams {
            chunk_size,
            world_offset: base_offset + Vec3::new((i * dims.0) as f32, 0.0, 0.0),
            material: MaterialId(0),
        };
        let mut registry = populate_world(world, &params)?;
        match obj_sink.as_mut() {
            Some(s) => registry.build_all(s)?,
            None => registry.build_all(&mut stats)?,
        }
    }

    if let Some(s) = obj_sink {
        let chunks = s.finish()?;
        log::info!("exported {chunks} non-empty chunks");
    } else {
        log::info!(
            "built {} chunks: {} quads, {} triangles",
            stats.chunks,
            stats.quads,
            stats.triangles
        );
    }
    Ok(())
}
