//! Render-sink adapters for the CLI: a stats logger and a Wavefront OBJ
//! writer. The core crates only ever see the `MeshSink` trait.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use voxmesh_chunk::MeshSink;
use voxmesh_geom::Vec3;
use voxmesh_mesh::{MaterialId, MeshBuild};

/// Counts geometry and logs one line per chunk; useful for smoke runs
/// without producing files.
#[derive(Default)]
pub struct StatsSink {
    pub chunks: usize,
    pub quads: usize,
    pub triangles: usize,
}

impl MeshSink for StatsSink {
    fn submit(
        &mut self,
        material: MaterialId,
        mesh: &MeshBuild,
        translation: Vec3,
    ) -> std::io::Result<()> {
        self.chunks += 1;
        self.quads += mesh.quad_count();
        self.triangles += mesh.triangle_count();
        log::info!(
            "chunk at ({}, {}, {}): material {}, {} quads",
            translation.x,
            translation.y,
            translation.z,
            material.0,
            mesh.quad_count()
        );
        Ok(())
    }
}

/// Streams combined chunk meshes into one OBJ file, baking each chunk's
/// translation into the vertex positions.
pub struct ObjSink {
    out: BufWriter<File>,
    vertex_offset: u32,
    chunks: usize,
}

impl ObjSink {
    pub fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "# voxmesh chunk export")?;
        Ok(Self {
            out,
            vertex_offset: 0,
            chunks: 0,
        })
    }

    pub fn finish(mut self) -> std::io::Result<usize> {
        self.out.flush()?;
        Ok(self.chunks)
    }
}

impl MeshSink for ObjSink {
    fn submit(
        &mut self,
        material: MaterialId,
        mesh: &MeshBuild,
        translation: Vec3,
    ) -> std::io::Result<()> {
        if mesh.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "o chunk_{}", self.chunks)?;
        writeln!(self.out, "usemtl material_{}", material.0)?;
        for p in mesh.pos.chunks_exact(3) {
            let v = Vec3::new(p[0], p[1], p[2]) + translation;
            writeln!(self.out, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for n in mesh.norm.chunks_exact(3) {
            writeln!(self.out, "vn {} {} {}", n[0], n[1], n[2])?;
        }
        for uv in mesh.uv.chunks_exact(2) {
            writeln!(self.out, "vt {} {}", uv[0], uv[1])?;
        }
        // OBJ indices are 1-based and global across the file.
        for tri in mesh.idx.chunks_exact(3) {
            let (a, b, c) = (
                tri[0] + self.vertex_offset + 1,
                tri[1] + self.vertex_offset + 1,
                tri[2] + self.vertex_offset + 1,
            );
            writeln!(self.out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
        self.vertex_offset += mesh.vertex_count() as u32;
        self.chunks += 1;
        Ok(())
    }
}
