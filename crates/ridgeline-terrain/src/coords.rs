//! Chunk-grid coordinates and the world-to-chunk mapping.

use glam::Vec3;

/// Side length of a chunk in cells.
///
/// This is the single authority for the chunk edge length: generation,
/// stitching, and render-window assembly all derive their bounds from it.
pub const CHUNK_SIZE: usize = 16;

/// Cells per chunk height field (`CHUNK_SIZE`²).
pub const CHUNK_AREA: usize = CHUNK_SIZE * CHUNK_SIZE;

/// Integer grid index of a chunk, and the cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk containing `world_pos`, by truncating integer division.
    ///
    /// The world position is cast to integer (truncation toward zero, as in
    /// C) and then integer-divided by [`CHUNK_SIZE`], again truncating, not
    /// flooring. For negative world coordinates this differs from floor
    /// division: `(-0.1, ·, -0.1)` maps to chunk `(0, 0)`, not `(-1, -1)`,
    /// so chunks straddling the origin line cover asymmetric world ranges.
    /// Collaborators must use this mapping rather than re-deriving it, or
    /// they will disagree about chunk membership near the origin.
    pub fn containing(world_pos: Vec3) -> Self {
        let size = CHUNK_SIZE as i32;
        Self {
            x: world_pos.x as i32 / size,
            z: world_pos.z as i32 / size,
        }
    }

    /// The coordinate offset by `(dx, dz)` chunks.
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// World X of this chunk's first cell column.
    pub fn base_x(self) -> i32 {
        self.x * CHUNK_SIZE as i32
    }

    /// World Z of this chunk's first cell row.
    pub fn base_z(self) -> i32 {
        self.z * CHUNK_SIZE as i32
    }

    /// Chessboard distance to `other`, in chunks.
    pub fn chebyshev_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }
}
