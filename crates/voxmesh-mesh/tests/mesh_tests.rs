use voxmesh_geom::Vec3;
use voxmesh_grid::VoxelGrid;
use voxmesh_mesh::{Face, MeshBuild, build_grid_mesh, emit_voxel_faces};

fn single_voxel_grid() -> VoxelGrid {
    let mut g = VoxelGrid::empty(1, 1, 1);
    g.set(0, 0, 0, 1);
    g
}

#[test]
fn isolated_voxel_emits_six_quads() {
    let mesh = build_grid_mesh(&single_voxel_grid());
    assert_eq!(mesh.quad_count(), 6);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.pos.len(), 72);
    assert_eq!(mesh.norm.len(), 72);
    assert_eq!(mesh.uv.len(), 48);
    assert_eq!(mesh.idx.len(), 36);
}

#[test]
fn empty_grid_builds_empty_mesh() {
    let mesh = build_grid_mesh(&VoxelGrid::empty(4, 4, 4));
    assert!(mesh.is_empty());
    assert_eq!(mesh.quad_count(), 0);
    assert_eq!(mesh.bounds(), None);
}

#[test]
fn empty_voxel_emits_nothing() {
    let grid = VoxelGrid::empty(3, 3, 3);
    let mut mesh = MeshBuild::new();
    emit_voxel_faces(&grid, 1, 1, 1, &mut mesh);
    assert!(mesh.is_empty());
}

#[test]
fn enclosed_voxel_emits_nothing() {
    let mut grid = VoxelGrid::empty(3, 3, 3);
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                grid.set(x, y, z, 1);
            }
        }
    }
    let mut mesh = MeshBuild::new();
    emit_voxel_faces(&grid, 1, 1, 1, &mut mesh);
    assert!(mesh.is_empty(), "voxel with six solid neighbors grew faces");
}

#[test]
fn solid_cube_meshes_only_its_surface() {
    let mut grid = VoxelGrid::empty(3, 3, 3);
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                grid.set(x, y, z, 1);
            }
        }
    }
    // 6 sides x 9 exposed faces each; all interior faces culled.
    let mesh = build_grid_mesh(&grid);
    assert_eq!(mesh.quad_count(), 54);
}

#[test]
fn faces_emit_in_fixed_direction_order() {
    let mesh = build_grid_mesh(&single_voxel_grid());
    // One normal triple per quad (all four vertices share it).
    let expected = [
        Vec3::new(0.0, 0.0, 1.0),  // front
        Vec3::new(0.0, 0.0, -1.0), // back
        Vec3::new(0.0, 1.0, 0.0),  // top
        Vec3::new(0.0, -1.0, 0.0), // bottom
        Vec3::new(-1.0, 0.0, 0.0), // left
        Vec3::new(1.0, 0.0, 0.0),  // right
    ];
    for (q, want) in expected.iter().enumerate() {
        for v in 0..4 {
            let i = (q * 4 + v) * 3;
            let n = Vec3::new(mesh.norm[i], mesh.norm[i + 1], mesh.norm[i + 2]);
            assert_eq!(n, *want, "quad {q} vertex {v}");
        }
    }
}

#[test]
fn top_quad_uses_canonical_corners_uvs_and_winding() {
    let mut mesh = MeshBuild::new();
    mesh.add_face(Face::Top, Vec3::ZERO);

    let verts: Vec<Vec3> = mesh
        .pos
        .chunks_exact(3)
        .map(|p| Vec3::new(p[0], p[1], p[2]))
        .collect();
    assert_eq!(
        verts,
        vec![
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ]
    );
    assert_eq!(mesh.uv, vec![1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(mesh.idx, vec![3, 1, 0, 3, 2, 1]);
}

#[test]
fn quad_indices_offset_past_existing_vertices() {
    let mut mesh = MeshBuild::new();
    mesh.add_face(Face::Top, Vec3::ZERO);
    mesh.add_face(Face::Bottom, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(&mesh.idx[6..], &[7, 5, 4, 7, 6, 5]);
}

#[test]
fn voxel_center_offsets_every_corner() {
    let mut grid = VoxelGrid::empty(3, 3, 3);
    grid.set(2, 1, 0, 1);
    let mesh = build_grid_mesh(&grid);
    let bb = mesh.bounds().unwrap();
    assert_eq!(bb.min, Vec3::new(1.5, 0.5, -0.5));
    assert_eq!(bb.max, Vec3::new(2.5, 1.5, 0.5));
}

#[test]
fn two_adjacent_voxels_cull_their_shared_faces() {
    let mut grid = VoxelGrid::empty(2, 1, 1);
    grid.set(0, 0, 0, 1);
    grid.set(1, 0, 0, 1);
    // 12 naive faces minus the two touching ones.
    let mesh = build_grid_mesh(&grid);
    assert_eq!(mesh.quad_count(), 10);
}
