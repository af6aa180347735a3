//! Sparse voxel occupancy with change tracking.
#![forbid(unsafe_code)]

use hashbrown::HashSet;

pub use blockface_geom::VoxelCoord;

/// Set of occupied unit cells in unbounded integer space.
///
/// Membership is the only datum. `revision` advances on every mutation that
/// actually changed the set, so callers can skip rebuilding when nothing moved.
#[derive(Clone, Debug, Default)]
pub struct VoxelSet {
    cells: HashSet<VoxelCoord>,
    revision: u64,
}

impl VoxelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(n),
            revision: 0,
        }
    }

    #[inline]
    pub fn has(&self, x: i32, y: i32, z: i32) -> bool {
        self.contains(VoxelCoord::new(x, y, z))
    }

    #[inline]
    pub fn contains(&self, c: VoxelCoord) -> bool {
        self.cells.contains(&c)
    }

    /// Marks `(x,y,z)` occupied. Returns `false` if it already was.
    #[inline]
    pub fn add(&mut self, x: i32, y: i32, z: i32) -> bool {
        self.insert(VoxelCoord::new(x, y, z))
    }

    pub fn insert(&mut self, c: VoxelCoord) -> bool {
        let changed = self.cells.insert(c);
        if changed {
            self.bump();
        }
        changed
    }

    /// Clears `(x,y,z)`. Returns `false` if it was already empty.
    #[inline]
    pub fn remove(&mut self, x: i32, y: i32, z: i32) -> bool {
        self.remove_coord(VoxelCoord::new(x, y, z))
    }

    pub fn remove_coord(&mut self, c: VoxelCoord) -> bool {
        let changed = self.cells.remove(&c);
        if changed {
            self.bump();
        }
        changed
    }

    /// Occupied cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.cells.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stamp of the latest effective mutation; `0` for a set never changed.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1).max(1);
    }
}

impl FromIterator<VoxelCoord> for VoxelSet {
    fn from_iter<I: IntoIterator<Item = VoxelCoord>>(iter: I) -> Self {
        let mut set = VoxelSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<VoxelCoord> for VoxelSet {
    fn extend<I: IntoIterator<Item = VoxelCoord>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = VoxelCoord;
    type IntoIter = core::iter::Copied<hashbrown::hash_set::Iter<'a, VoxelCoord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}
