//! Single-octave 2D gradient lattice noise.
//!
//! Classic Perlin-style noise over a 512-entry permutation table: 256
//! shuffled entries duplicated into the upper half so corner hashing never
//! needs a wrap-around branch.

use crate::error::NoiseError;
use crate::rng::LcgRandom;

/// The four diagonal gradient directions, selected by a 2-bit corner hash.
const GRAD2: [[f64; 2]; 4] = [[1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0]];

/// Single-octave 2D lattice noise built from a shuffled permutation table.
///
/// Given a built table, [`sample`](Self::sample) is a pure function of
/// `(x, y)` with output in approximately `[-1, 1]` per gradient unit
/// (diagonal gradients widen the bound to `[-2, 2]` in the worst case).
#[derive(Clone)]
pub struct GradientNoise {
    perm: [u8; 512],
}

impl GradientNoise {
    /// Build a layer by Fisher–Yates shuffling the permutation table with
    /// draws from `rng`, then duplicating it into the upper half.
    pub fn with_rng(rng: &mut LcgRandom) -> Self {
        let mut perm = [0u8; 512];
        for (i, entry) in perm.iter_mut().take(256).enumerate() {
            *entry = i as u8;
        }
        for i in (1..256usize).rev() {
            let j = rng.next_bounded(i as u32 + 1) as usize;
            perm.swap(i, j);
        }
        for i in 0..256 {
            perm[i + 256] = perm[i];
        }
        Self { perm }
    }

    /// Build a layer from a dedicated seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(&mut LcgRandom::new(seed))
    }

    /// Build a layer from a caller-supplied table.
    ///
    /// The lower 256 entries must be a permutation of `0..=255` and the
    /// upper 256 entries must duplicate them; anything else is rejected
    /// so downstream sampling can index unconditionally.
    pub fn from_table(table: [u8; 512]) -> Result<Self, NoiseError> {
        let mut seen = [false; 256];
        for &entry in &table[..256] {
            seen[entry as usize] = true;
        }
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(NoiseError::NotAPermutation(missing as u8));
        }
        for i in 0..256 {
            if table[i + 256] != table[i] {
                return Err(NoiseError::UnmirroredTable(i + 256));
            }
        }
        Ok(Self { perm: table })
    }

    /// Ken Perlin's quintic fade curve, `6t^5 - 15t^4 + 10t^3`.
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    /// Dot product of a hashed gradient direction with the corner offset.
    fn grad(hash: u8, x: f64, y: f64) -> f64 {
        let g = GRAD2[(hash & 3) as usize];
        g[0] * x + g[1] * y
    }

    /// Sample the noise field at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // True floor, not truncation: negative inputs must land in the
        // cell below, or the field tears along integer lines.
        let x_floor = x.floor();
        let y_floor = y.floor();
        let xi = (x_floor as i64 & 0xFF) as usize;
        let yi = (y_floor as i64 & 0xFF) as usize;
        let x = x - x_floor;
        let y = y - y_floor;

        let u = Self::fade(x);
        let v = Self::fade(y);

        let a = self.perm[xi] as usize + yi;
        let b = self.perm[xi + 1] as usize + yi;

        let g00 = Self::grad(self.perm[self.perm[a] as usize], x, y);
        let g10 = Self::grad(self.perm[self.perm[b] as usize], x - 1.0, y);
        let bottom = g00 + u * (g10 - g00);

        let g01 = Self::grad(self.perm[self.perm[a + 1] as usize], x, y - 1.0);
        let g11 = Self::grad(self.perm[self.perm[b + 1] as usize], x - 1.0, y - 1.0);
        let top = g01 + u * (g11 - g01);

        bottom + v * (top - bottom)
    }

    /// The underlying 512-entry table.
    pub fn table(&self) -> &[u8; 512] {
        &self.perm
    }
}

impl std::fmt::Debug for GradientNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientNoise").finish_non_exhaustive()
    }
}
