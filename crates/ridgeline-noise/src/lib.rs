//! Layered deterministic noise synthesis: a seeded LCG stream, single-octave
//! gradient lattice noise, fractal octave sums, and domain warping.

mod error;
mod gradient;
mod octave;
mod rng;

pub use error::NoiseError;
pub use gradient::GradientNoise;
pub use octave::{CombinedNoise, OctaveNoise};
pub use rng::LcgRandom;
