//! Per-chunk height field generation.
//!
//! Each chunk composes three noise fields (a floor, a ceiling, and a
//! selector that decides where the ceiling applies) into one `16×16`
//! height sample grid. All three fields are seeded purely from the world
//! seed and the chunk coordinate, so a chunk's content never depends on
//! generation order.

use ridgeline_noise::{CombinedNoise, OctaveNoise};

use crate::coords::{CHUNK_AREA, CHUNK_SIZE, ChunkCoord};
use crate::seed::derive_layer_seed;

/// Octaves per half of a combined (domain-warped) field.
const COMBINED_OCTAVES: u32 = 8;
/// Octaves in the floor/ceiling selector field.
const SELECTOR_OCTAVES: u32 = 6;

/// A generated terrain chunk: one height sample per cell.
///
/// Heights are stored row-major with index `x + CHUNK_SIZE * z`; the length
/// is always [`CHUNK_AREA`]. Chunks are immutable once generated and owned
/// exclusively by the cache.
pub struct Chunk {
    coord: ChunkCoord,
    heights: [f32; CHUNK_AREA],
}

impl Chunk {
    /// Generate the chunk at `coord` for `world_seed`.
    ///
    /// Deterministic: the same `(world_seed, coord)` pair always produces
    /// the same height field, regardless of what else has been generated.
    pub fn generate(coord: ChunkCoord, world_seed: u64) -> Self {
        let mut next_layer = 0u32;
        let mut field = |octaves: u32| {
            let seeds: Vec<u64> = (0..octaves)
                .map(|_| {
                    let seed = derive_layer_seed(world_seed, coord, next_layer);
                    next_layer += 1;
                    seed
                })
                .collect();
            OctaveNoise::from_seeds(&seeds)
        };

        let floor = CombinedNoise::new(field(COMBINED_OCTAVES), field(COMBINED_OCTAVES));
        let ceiling = CombinedNoise::new(field(COMBINED_OCTAVES), field(COMBINED_OCTAVES));
        let selector = field(SELECTOR_OCTAVES);

        let base_x = coord.base_x();
        let base_z = coord.base_z();
        let mut heights = [0.0f32; CHUNK_AREA];

        for cell_z in 0..CHUNK_SIZE {
            for cell_x in 0..CHUNK_SIZE {
                let world_x = f64::from(base_x + cell_x as i32);
                let world_z = f64::from(base_z + cell_z as i32);

                let height_min = floor.sample(world_x, world_z) / 6.0 - 4.0;
                let mut height = height_min;
                if selector.sample(world_x, world_z) <= 0.0 {
                    let height_max = ceiling.sample(world_x, world_z) / 5.0 + 6.0;
                    height = height_min.max(height_max);
                }
                height *= 0.5;
                if height < 0.0 {
                    // Below the waterline, depths are compressed.
                    height *= 0.8;
                }

                heights[cell_x + CHUNK_SIZE * cell_z] = height as f32;
            }
        }

        tracing::trace!(x = coord.x, z = coord.z, "generated chunk height field");
        Self { coord, heights }
    }

    /// This chunk's grid coordinate.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// The full height field, row-major with index `x + CHUNK_SIZE * z`.
    pub fn heights(&self) -> &[f32; CHUNK_AREA] {
        &self.heights
    }

    /// Height sample for the cell at `(cell_x, cell_z)`.
    ///
    /// # Panics
    ///
    /// Panics if either cell index is outside `0..CHUNK_SIZE`.
    pub fn height_at(&self, cell_x: usize, cell_z: usize) -> f32 {
        assert!(
            cell_x < CHUNK_SIZE && cell_z < CHUNK_SIZE,
            "cell ({cell_x}, {cell_z}) outside chunk bounds"
        );
        self.heights[cell_x + CHUNK_SIZE * cell_z]
    }
}
