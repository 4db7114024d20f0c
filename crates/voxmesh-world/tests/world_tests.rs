use voxmesh_world::{ChunkCoord, WorldConfig, WorldError, split_world_coord};

#[test]
fn split_world_coord_divides_and_wraps_locally() {
    let addr = split_world_coord(20, 5, 33, 16).unwrap();
    assert_eq!(addr.chunk, ChunkCoord::new(1, 0, 2));
    assert_eq!(addr.local, (4, 5, 1));
}

#[test]
fn split_world_coord_at_chunk_edges() {
    let addr = split_world_coord(15, 16, 31, 16).unwrap();
    assert_eq!(addr.chunk, ChunkCoord::new(0, 1, 1));
    assert_eq!(addr.local, (15, 0, 15));

    let origin = split_world_coord(0, 0, 0, 16).unwrap();
    assert_eq!(origin.chunk, ChunkCoord::new(0, 0, 0));
    assert_eq!(origin.local, (0, 0, 0));
}

#[test]
fn split_world_coord_rejects_negative_components() {
    for (x, y, z) in [(-1, 0, 0), (0, -1, 0), (0, 0, -1), (-5, -5, -5)] {
        assert_eq!(
            split_world_coord(x, y, z, 16).unwrap_err(),
            WorldError::NegativeCoordinate(x, y, z)
        );
    }
}

#[test]
fn chunk_coord_base_and_offset() {
    let c = ChunkCoord::new(1, 0, 2);
    assert_eq!(c.base(16), (16, 0, 32));
    assert_eq!(c.offset(1, 2, -1), ChunkCoord::new(2, 2, 1));
    assert_eq!(ChunkCoord::from((3, 4, 5)), ChunkCoord::new(3, 4, 5));
}

#[test]
fn world_config_parses_with_defaults() {
    let cfg = WorldConfig::from_toml_str("dims = [128, 24, 128]").unwrap();
    assert_eq!(cfg.dims, [128, 24, 128]);
    assert_eq!(cfg.chunk_size, 16);
    assert_eq!(cfg.offset, [0.0, 0.0, 0.0]);

    let cfg = WorldConfig::from_toml_str(
        "chunk_size = 8\ndims = [16, 16, 16]\noffset = [32.0, 0.0, 0.0]\n",
    )
    .unwrap();
    assert_eq!(cfg.chunk_size, 8);
    assert_eq!(cfg.offset, [32.0, 0.0, 0.0]);

    assert!(WorldConfig::from_toml_str("chunk_size = 8").is_err());
}
