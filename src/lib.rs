//! # HashOdo Core Algorithm
//!
//! An epoch-keyed composite proof-of-work hash: a keyed block-cipher
//! pre-stage followed by a SHA-256-shaped compression engine whose initial
//! state and round constants are re-derived every epoch.
//!
//! ## How a digest is made
//!
//! - The 80-byte header block is encrypted with an AES-based keyed
//!   permutation under the epoch key.
//! - The epoch key selects a fresh parameter set - 8 initial-state words
//!   and 64 round constants - drawn without repetition from fixed-point
//!   fraction tables of the square and cube roots of the first 16384
//!   primes, via a Blum-Blum-Shub modular-squaring PRNG.
//! - The ciphertext runs through one standard pad-and-compress cycle of
//!   the parameterized engine; the chaining value is the digest.
//!
//! Parameter derivation is a bit-exact cross-implementation contract:
//! every constant in [`params`] is consensus-relevant.
//!
//! ## Example
//!
//! ```rust
//! use hashodo::{OdoHasher, hash_odo, meets_difficulty};
//!
//! // One-shot hashing
//! let digest = hash_odo(b"block header bytes", 3);
//!
//! // Search loop: derive the epoch parameters once, then hash nonces
//! let hasher = OdoHasher::new(3);
//! let digest = hasher.hash(b"block header bytes");
//! if meets_difficulty(&digest, 16) {
//!     println!("Found a hash with 16+ leading zero bits!");
//! }
//! ```
//!
//! ## Concurrency
//!
//! The fraction tables are built once per process behind a
//! one-time-initialization barrier and shared read-only afterwards.
//! Everything downstream is pure: hashing is safe for unbounded parallel
//! execution, with one [`OdoHasher`] per worker thread for a lock-free
//! steady state.

mod bignum;
mod error;
mod extractor;
mod ffi;
mod odo;
mod odocrypt;
mod paramgen;
pub mod params;
mod sha256;
mod tables;

pub use odocrypt::OdoCipher;
pub use error::OdoError;
pub use odo::{OdoHasher, hash_odo, meets_difficulty, try_hash_odo};
pub use paramgen::{ParameterSet, epoch_index, generate, generate_cached};
pub use sha256::{STANDARD_H256, STANDARD_K256, Sha256Engine};
