//! Memoizing chunk cache and render-window assembly.
//!
//! The cache is the single owner of all generated chunks. Generation is
//! split into two phases: raw height fields are generated and cached
//! at-most-once per coordinate, and border stitching happens lazily when a
//! chunk's surface is emitted, reading neighbors' *raw* cached fields and
//! never mutating them. Fetching a neighbor during stitching may trigger
//! that neighbor's raw generation, but stitched neighbors are never
//! themselves stitched, so the reentrant hop is bounded at depth one.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::chunk::Chunk;
use crate::coords::{CHUNK_AREA, CHUNK_SIZE, ChunkCoord};
use crate::fill::{SENTINEL_POINT, fill_gaps};

/// Blend weight toward the neighbor's raw border values when stitching.
const STITCH_WEIGHT: f32 = 0.4;

/// Weight kept from the chunk's own border value. A literal rather than
/// `1.0 - STITCH_WEIGHT`: the blend must be exactly `0.6·own + 0.4·neighbor`,
/// and the subtraction lands on a different f32 than the literal.
const OWN_WEIGHT: f32 = 0.6;

/// Tuning for the cache's render-window assembly and eviction.
#[derive(Clone, Debug)]
pub struct CacheParams {
    /// World seed driving all chunk generation.
    pub world_seed: u64,
    /// Render window radius in chunks; the window spans `2r + 1` chunks
    /// per side, centered on the camera's chunk.
    pub window_radius: u32,
    /// Target point count for [`TerrainCache::surface_for_render`] output.
    /// A floor, not a cap: short buffers are padded with sentinels, long
    /// buffers are returned untruncated.
    pub render_capacity: usize,
    /// Extra chunks beyond the render window kept resident after assembly;
    /// everything farther is evicted.
    pub eviction_margin: u32,
}

impl Default for CacheParams {
    fn default() -> Self {
        Self {
            world_seed: 0,
            window_radius: 2,
            render_capacity: 50_000,
            eviction_margin: 2,
        }
    }
}

/// Maps chunk coordinates to generated chunks, generating on first access.
///
/// Memory is bounded by the eviction policy: after every render-window
/// assembly, chunks outside the window plus
/// [`eviction_margin`](CacheParams::eviction_margin) are dropped. (The
/// historical behavior was insertion-only growth for the process lifetime;
/// bounding it is a deliberate policy change, not an equivalence.)
pub struct TerrainCache {
    params: CacheParams,
    chunks: FxHashMap<ChunkCoord, Chunk>,
    generated: u64,
}

impl TerrainCache {
    /// Create an empty cache.
    pub fn new(params: CacheParams) -> Self {
        Self {
            params,
            chunks: FxHashMap::default(),
            generated: 0,
        }
    }

    /// The cache's parameters.
    pub fn params(&self) -> &CacheParams {
        &self.params
    }

    /// The chunk at `coord`, generating and caching its raw height field on
    /// first access. Generation runs at most once per coordinate while the
    /// chunk stays resident.
    pub fn chunk(&mut self, coord: ChunkCoord) -> &Chunk {
        self.chunks.entry(coord).or_insert_with(|| {
            self.generated += 1;
            Chunk::generate(coord, self.params.world_seed)
        })
    }

    /// Number of chunks currently resident.
    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total chunk generations performed over the cache's lifetime.
    pub fn generated_count(&self) -> u64 {
        self.generated
    }

    /// Height sample under a world position, if the position maps into the
    /// containing chunk's cell grid.
    ///
    /// Returns `None` for positions whose truncating chunk mapping puts the
    /// cell outside `0..CHUNK_SIZE`, which happens for world coordinates in
    /// `(-CHUNK_SIZE, -1]`: they truncate into chunk 0, whose cell grid
    /// covers only the non-negative side (see [`ChunkCoord::containing`]).
    pub fn ground_height(&mut self, world_x: f32, world_z: f32) -> Option<f32> {
        let coord = ChunkCoord::containing(Vec3::new(world_x, 0.0, world_z));
        let cell_x = world_x as i32 - coord.base_x();
        let cell_z = world_z as i32 - coord.base_z();
        if !(0..CHUNK_SIZE as i32).contains(&cell_x) || !(0..CHUNK_SIZE as i32).contains(&cell_z)
        {
            return None;
        }
        Some(self.chunk(coord).height_at(cell_x as usize, cell_z as usize))
    }

    /// The column `cell_x` of a chunk's raw height field, indexed by Z.
    fn border_column(&mut self, coord: ChunkCoord, cell_x: usize) -> [f32; CHUNK_SIZE] {
        let chunk = self.chunk(coord);
        std::array::from_fn(|j| chunk.height_at(cell_x, j))
    }

    /// The row `cell_z` of a chunk's raw height field, indexed by X.
    fn border_row(&mut self, coord: ChunkCoord, cell_z: usize) -> [f32; CHUNK_SIZE] {
        let chunk = self.chunk(coord);
        std::array::from_fn(|i| chunk.height_at(i, cell_z))
    }

    /// A chunk's height field with all four borders stitched against its
    /// neighbors' raw fields.
    ///
    /// Each border cell becomes `0.6·own + 0.4·neighbor`, where the
    /// neighbor value is the facing border cell of the adjacent chunk's
    /// *unstitched* field. Neighbors are generated on demand (the one
    /// permitted reentrant hop) but never stitched or mutated here.
    fn stitched_heights(&mut self, coord: ChunkCoord) -> [f32; CHUNK_AREA] {
        let mut heights = *self.chunk(coord).heights();
        let last = CHUNK_SIZE - 1;

        // East border against the +X neighbor's west column.
        let neighbor = self.border_column(coord.offset(1, 0), 0);
        for (j, &n) in neighbor.iter().enumerate() {
            let idx = last + CHUNK_SIZE * j;
            heights[idx] = heights[idx] * OWN_WEIGHT + n * STITCH_WEIGHT;
        }
        // West border against the -X neighbor's east column.
        let neighbor = self.border_column(coord.offset(-1, 0), last);
        for (j, &n) in neighbor.iter().enumerate() {
            let idx = CHUNK_SIZE * j;
            heights[idx] = heights[idx] * OWN_WEIGHT + n * STITCH_WEIGHT;
        }
        // South border against the +Z neighbor's north row.
        let neighbor = self.border_row(coord.offset(0, 1), 0);
        for (i, &n) in neighbor.iter().enumerate() {
            let idx = i + CHUNK_SIZE * last;
            heights[idx] = heights[idx] * OWN_WEIGHT + n * STITCH_WEIGHT;
        }
        // North border against the -Z neighbor's south row.
        let neighbor = self.border_row(coord.offset(0, -1), last);
        for (i, &n) in neighbor.iter().enumerate() {
            heights[i] = heights[i] * OWN_WEIGHT + n * STITCH_WEIGHT;
        }

        heights
    }

    /// World-space surface points for one chunk, border-stitched.
    ///
    /// Emits exactly [`CHUNK_AREA`] points, row-major with index
    /// `i + CHUNK_SIZE * j`, each `(base_x + i, round(height), base_z + j)`.
    pub fn chunk_surface(&mut self, coord: ChunkCoord) -> Vec<Vec3> {
        let heights = self.stitched_heights(coord);
        let base_x = coord.base_x() as f32;
        let base_z = coord.base_z() as f32;

        let mut points = Vec::with_capacity(CHUNK_AREA);
        for j in 0..CHUNK_SIZE {
            for i in 0..CHUNK_SIZE {
                points.push(Vec3::new(
                    base_x + i as f32,
                    heights[i + CHUNK_SIZE * j].round(),
                    base_z + j as f32,
                ));
            }
        }
        points
    }

    /// Assemble the render window around `cam_pos`.
    ///
    /// Fetches (or generates) every chunk in the window, writes each
    /// chunk's stitched surface points into a flat row-major
    /// `(D·S) × (D·S)` buffer, runs the gap-fill pass over that region,
    /// then pads with [`SENTINEL_POINT`]s up to
    /// [`render_capacity`](CacheParams::render_capacity). Content beyond
    /// the capacity is kept: the capacity is a floor, never a cap.
    ///
    /// Afterwards, chunks outside the window plus the eviction margin are
    /// dropped from the cache.
    pub fn surface_for_render(&mut self, cam_pos: Vec3) -> Vec<Vec3> {
        let center = ChunkCoord::containing(cam_pos);
        let radius = self.params.window_radius as i32;
        let diameter = 2 * radius as usize + 1;
        let map_size = diameter * CHUNK_SIZE;

        let mut buffer = vec![SENTINEL_POINT; map_size * map_size];
        for dz in -radius..=radius {
            for dx in -radius..=radius {
                let coord = center.offset(dx, dz);
                let points = self.chunk_surface(coord);
                assert_eq!(
                    points.len(),
                    CHUNK_AREA,
                    "chunk surface size diverged from CHUNK_SIZE"
                );
                let origin_x = (dx + radius) as usize * CHUNK_SIZE;
                let origin_z = (dz + radius) as usize * CHUNK_SIZE;
                for j in 0..CHUNK_SIZE {
                    for i in 0..CHUNK_SIZE {
                        buffer[(origin_x + i) + map_size * (origin_z + j)] =
                            points[i + CHUNK_SIZE * j];
                    }
                }
            }
        }

        let fillers = fill_gaps(&buffer, map_size);
        tracing::debug!(
            x = center.x,
            z = center.z,
            surface = buffer.len(),
            fillers = fillers.len(),
            "assembled render window"
        );
        buffer.extend(fillers);

        if buffer.len() < self.params.render_capacity {
            buffer.resize(self.params.render_capacity, SENTINEL_POINT);
        }

        self.evict_outside(center, radius + self.params.eviction_margin as i32);
        buffer
    }

    /// Drop every cached chunk farther than `keep_radius` chunks
    /// (chessboard distance) from `center`.
    fn evict_outside(&mut self, center: ChunkCoord, keep_radius: i32) {
        let before = self.chunks.len();
        self.chunks
            .retain(|coord, _| coord.chebyshev_distance(center) <= keep_radius);
        let evicted = before - self.chunks.len();
        if evicted > 0 {
            tracing::debug!(evicted, resident = self.chunks.len(), "evicted distant chunks");
        }
    }
}
