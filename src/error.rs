use thiserror::Error;

use crate::MAX_KEYS;

/// Errors raised before any input is consumed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    /// The runtime key slice was empty or longer than [`MAX_KEYS`].
    #[error("expected between 1 and {max} keys, got {0}", max = MAX_KEYS)]
    KeyCount(usize),
}
