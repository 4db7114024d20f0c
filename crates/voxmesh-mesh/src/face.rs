use voxmesh_geom::Vec3;

/// Corners of the unit cube centered at the voxel origin, extents +-0.5.
/// Quad tables below index into this array; the numbering is part of the
/// geometry contract and matches the pre-encoded datasets' conventions.
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
];

/// UV square shared by every face, in canonical vertex order.
pub const QUAD_UVS: [(f32, f32); 4] = [(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)];

/// Two triangles per quad, wound relative to the canonical 4-vertex order.
pub const QUAD_TRIANGLES: [u32; 6] = [3, 1, 0, 3, 2, 1];

/// The six axis-aligned cube faces. Declaration order is the face check
/// order during emission: front, back, top, bottom, left, right.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    /// +z
    Front = 0,
    /// -z
    Back = 1,
    /// +y
    Top = 2,
    /// -y
    Bottom = 3,
    /// -x
    Left = 4,
    /// +x
    Right = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the unit outward normal for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Front => Vec3::new(0.0, 0.0, 1.0),
            Face::Back => Vec3::new(0.0, 0.0, -1.0),
            Face::Top => Vec3::new(0.0, 1.0, 0.0),
            Face::Bottom => Vec3::new(0.0, -1.0, 0.0),
            Face::Left => Vec3::new(-1.0, 0.0, 0.0),
            Face::Right => Vec3::new(1.0, 0.0, 0.0),
        }
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::Front => (0, 0, 1),
            Face::Back => (0, 0, -1),
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
        }
    }

    /// The four corners of this face's quad, in canonical order, as indices
    /// into [`CUBE_CORNERS`].
    #[inline]
    pub fn corner_indices(self) -> [usize; 4] {
        match self {
            Face::Front => [4, 5, 1, 0],
            Face::Back => [6, 7, 3, 2],
            Face::Top => [7, 6, 5, 4],
            Face::Bottom => [0, 1, 2, 3],
            Face::Left => [7, 4, 0, 3],
            Face::Right => [5, 6, 2, 1],
        }
    }

    /// The four corner positions of this face's quad, voxel-local.
    #[inline]
    pub fn corners(self) -> [Vec3; 4] {
        let idx = self.corner_indices();
        [
            CUBE_CORNERS[idx[0]],
            CUBE_CORNERS[idx[1]],
            CUBE_CORNERS[idx[2]],
            CUBE_CORNERS[idx[3]],
        ]
    }
}
