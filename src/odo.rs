//! HashOdo composition.
//!
//! One digest is: zero-pad the input to the cipher block, encrypt under
//! the epoch key, then run the ciphertext through one standard
//! pad-and-compress cycle of the SHA-256 engine parameterized with that
//! key's epoch constants. Identical (data, key) always reproduces the
//! digest; changing the key changes the cipher output and the hash
//! parameters at once.

use crate::error::OdoError;
use crate::odocrypt::OdoCipher;
use crate::params::{BLOCK_SIZE, DIGEST_SIZE};
use crate::paramgen::{self, ParameterSet};
use crate::sha256::Sha256Engine;

/// Reusable per-key hasher.
///
/// Construction derives the parameter set and expands the cipher schedule
/// once; each `hash` call then runs only the permutation and one
/// compression cycle. Holds no shared mutable state, so one instance per
/// worker thread gives a lock-free search loop.
pub struct OdoHasher {
    cipher: OdoCipher,
    params: ParameterSet,
}

impl OdoHasher {
    /// Precompute the schedule and parameters for `key`.
    pub fn new(key: u32) -> Self {
        Self {
            cipher: OdoCipher::new(key),
            params: paramgen::generate_cached(key as u64),
        }
    }

    /// Digest of `data` under this hasher's key.
    ///
    /// Callers control input length by construction; anything longer than
    /// [`BLOCK_SIZE`] is misuse and panics.
    pub fn hash(&self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        assert!(
            data.len() <= BLOCK_SIZE,
            "hash_odo input is {} bytes, cipher block is {}",
            data.len(),
            BLOCK_SIZE
        );

        let mut block = [0u8; BLOCK_SIZE];
        block[..data.len()].copy_from_slice(data);
        let ciphertext = self.cipher.encrypt(&block);

        let mut engine = Sha256Engine::with_params(self.params.h256, self.params.k256);
        engine.write(&ciphertext);
        engine.finalize()
    }

    /// The parameter set this hasher was built with.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }
}

/// One-shot HashOdo digest.
///
/// For a search loop prefer an [`OdoHasher`] per thread; this entry point
/// re-derives the cipher schedule each call (the parameter set itself is
/// served from the last-key memo).
pub fn hash_odo(data: &[u8], key: u32) -> [u8; DIGEST_SIZE] {
    OdoHasher::new(key).hash(data)
}

/// [`hash_odo`] with the length precondition surfaced as a `Result`.
pub fn try_hash_odo(data: &[u8], key: u32) -> Result<[u8; DIGEST_SIZE], OdoError> {
    if data.len() > BLOCK_SIZE {
        return Err(OdoError::input_too_large(data.len()));
    }
    Ok(hash_odo(data, key))
}

/// Check if a digest meets the required difficulty (leading zero bits).
#[inline(always)]
pub fn meets_difficulty(hash: &[u8; DIGEST_SIZE], difficulty: u32) -> bool {
    let mut zero_bits = 0u32;
    for byte in hash.iter() {
        if *byte == 0 {
            zero_bits += 8;
        } else {
            zero_bits += byte.leading_zeros();
            break;
        }
    }
    zero_bits >= difficulty
}
