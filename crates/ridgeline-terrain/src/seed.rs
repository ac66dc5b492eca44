//! Deterministic per-chunk seed derivation.
//!
//! Every chunk derives its noise seeds as a pure hash of the world seed and
//! its own coordinate, so regenerating a coordinate yields identical terrain
//! no matter which chunks were generated before it. Chunks could be
//! generated in parallel or in any order without changing the world.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::coords::ChunkCoord;

/// Derive a chunk's local seed from the world seed and its coordinate.
///
/// Uses SipHash (std's `DefaultHasher`) to mix the inputs into a
/// well-distributed u64.
pub fn derive_chunk_seed(world_seed: u64, coord: ChunkCoord) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    coord.x.hash(&mut hasher);
    coord.z.hash(&mut hasher);
    hasher.finish()
}

/// Derive the seed for one gradient layer of a chunk's noise stack.
///
/// `layer` indexes across all gradient layers of the chunk's noise fields,
/// so each layer shuffles an independent permutation table.
pub fn derive_layer_seed(world_seed: u64, coord: ChunkCoord, layer: u32) -> u64 {
    let mut hasher = DefaultHasher::new();
    derive_chunk_seed(world_seed, coord).hash(&mut hasher);
    layer.hash(&mut hasher);
    hasher.finish()
}
