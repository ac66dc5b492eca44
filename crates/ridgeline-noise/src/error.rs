//! Noise construction error types.

/// Errors raised when constructing a noise layer from untrusted input.
///
/// Sampling itself is infallible: a successfully constructed layer is a
/// pure function of its inputs. Malformed tables are rejected here, at
/// construction time, never at sample time.
#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    /// The lower 256 entries of a permutation table did not contain every
    /// value `0..=255` exactly once.
    #[error("permutation table lower half is missing value {0}")]
    NotAPermutation(u8),

    /// The upper 256 entries of a permutation table did not duplicate the
    /// lower half.
    #[error("permutation table upper half diverges from lower half at index {0}")]
    UnmirroredTable(usize),
}
