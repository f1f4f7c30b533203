//! HashOdo Algorithm Parameters
//!
//! Every value here is a cross-implementation compatibility constant:
//! changing any of them changes every digest the crate produces.

/// Number of entries in each fraction table (2^14)
pub const TABLE_SIZE: usize = 16384;

/// Bits per table index
pub const TABLE_SIZE_BITS: u32 = 14;

/// Epoch length in seconds (10 days)
pub const EPOCH_PERIOD: u64 = 864_000;

/// Epoch anchor timestamp (2021-01-01T00:00:00Z)
pub const EPOCH_ANCHOR: u64 = 1_609_459_200;

/// Cipher block size in bytes (the block-header size the PoW hashes)
pub const BLOCK_SIZE: usize = 80;

/// Digest output size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Words in the initial chaining value
pub const H256_WORDS: usize = 8;

/// Words in the round-constant table
pub const K256_WORDS: usize = 64;

/// Upper bound on candidate index draws per extractor call.
/// Drawing 64 of 16384 indices needs ~64 candidates; crossing this cap
/// means the modulus or table constants are misconfigured.
pub const MAX_DRAW_ATTEMPTS: usize = 4096;
