//! Error types for the HashOdo library.
//!
//! Invariant violations (duplicate table words, extractor draw-cap
//! overrun) are construction bugs and abort via panic; only caller-visible
//! misuse of the hashing boundary surfaces as a `Result`.

use thiserror::Error;

use crate::params::BLOCK_SIZE;

/// Errors produced by the fallible HashOdo entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OdoError {
    /// Input longer than the cipher block.
    #[error("input length {len} exceeds the {max}-byte cipher block")]
    InputTooLarge {
        /// Offending input length
        len: usize,
        /// The fixed block size ([`BLOCK_SIZE`])
        max: usize,
    },
}

impl OdoError {
    pub(crate) fn input_too_large(len: usize) -> Self {
        Self::InputTooLarge {
            len,
            max: BLOCK_SIZE,
        }
    }
}
