//! Procedural terrain: chunked height-field generation over layered noise,
//! with a memoizing spatial cache that stitches chunk borders and assembles
//! a fixed-capacity render window for a voxel-style renderer.

mod cache;
mod chunk;
mod coords;
mod fill;
mod seed;

pub mod contact;

pub use cache::{CacheParams, TerrainCache};
pub use chunk::Chunk;
pub use contact::{Axis, FaceContact, cell_contacts};
pub use coords::{CHUNK_AREA, CHUNK_SIZE, ChunkCoord};
pub use fill::{SENTINEL_POINT, SENTINEL_Y, fill_gaps};
pub use seed::{derive_chunk_seed, derive_layer_seed};
