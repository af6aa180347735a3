use blockface_geom::Vec3;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Indices into `CUBE_VERTICES`, counter-clockwise seen from outside the cube.
    #[inline]
    pub fn corners(self) -> [usize; 4] {
        match self {
            Face::PosY => [2, 3, 7, 6],
            Face::NegY => [0, 4, 5, 1],
            Face::PosX => [4, 6, 7, 5],
            Face::NegX => [0, 1, 3, 2],
            Face::PosZ => [1, 5, 7, 3],
            Face::NegZ => [0, 2, 6, 4],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::PosY => "top",
            Face::NegY => "bottom",
            Face::PosX => "right",
            Face::NegX => "left",
            Face::PosZ => "front",
            Face::NegZ => "back",
        }
    }
}
