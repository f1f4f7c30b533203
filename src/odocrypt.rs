//! Keyed block-cipher pre-stage.
//!
//! A deterministic keyed permutation over the 80-byte header block, built
//! from AES-128: the block is five 16-byte lanes, encrypted in a forward
//! chained pass under one derived key and a backward chained pass under a
//! second. Each pass is bijective, and chaining in opposite directions
//! carries every input bit into every output lane, so a one-bit change
//! anywhere reshuffles the whole ciphertext (full avalanche per key).
//!
//! The two AES keys are expanded from the 32-bit epoch key with
//! splitmix64, so the schedule is a pure function of the key.

use aes::Aes128;
use cipher::{BlockEncrypt, KeyInit, generic_array::GenericArray};

use crate::params::BLOCK_SIZE;

/// 16-byte lanes per block
const LANES: usize = BLOCK_SIZE / 16;

/// splitmix64 increment (golden-ratio constant)
const GOLDEN_RATIO: u64 = 0x9E3779B97F4A7C15;

#[inline(always)]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_RATIO);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

fn derive_key(stream: &mut u64) -> [u8; 16] {
    let lo = splitmix64(stream);
    let hi = splitmix64(stream);
    let mut key = [0u8; 16];
    key[..8].copy_from_slice(&lo.to_le_bytes());
    key[8..].copy_from_slice(&hi.to_le_bytes());
    key
}

/// Keyed permutation over one [`BLOCK_SIZE`]-byte block.
pub struct OdoCipher {
    forward: Aes128,
    backward: Aes128,
}

impl OdoCipher {
    /// Expand `key` into the forward and backward AES schedules.
    pub fn new(key: u32) -> Self {
        let mut stream = key as u64;
        let forward = derive_key(&mut stream);
        let backward = derive_key(&mut stream);
        Self {
            forward: Aes128::new(&forward.into()),
            backward: Aes128::new(&backward.into()),
        }
    }

    /// Encrypt one block.
    pub fn encrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut out = *block;

        // Forward chained pass: lane XOR previous ciphertext, encrypt
        let mut prev = [0u8; 16];
        for lane in 0..LANES {
            let offset = lane * 16;
            let mut state = GenericArray::clone_from_slice(&out[offset..offset + 16]);
            for (s, p) in state.iter_mut().zip(prev) {
                *s ^= p;
            }
            self.forward.encrypt_block(&mut state);
            out[offset..offset + 16].copy_from_slice(&state);
            prev.copy_from_slice(&state);
        }

        // Backward chained pass under the second key
        let mut prev = [0u8; 16];
        for lane in (0..LANES).rev() {
            let offset = lane * 16;
            let mut state = GenericArray::clone_from_slice(&out[offset..offset + 16]);
            for (s, p) in state.iter_mut().zip(prev) {
                *s ^= p;
            }
            self.backward.encrypt_block(&mut state);
            out[offset..offset + 16].copy_from_slice(&state);
            prev.copy_from_slice(&state);
        }

        out
    }
}
