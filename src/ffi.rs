//! C FFI bindings for embedders and miner frontends.

use core::slice;

use crate::odo::hash_odo;
use crate::params::{BLOCK_SIZE, DIGEST_SIZE, H256_WORDS, K256_WORDS};
use crate::paramgen::generate;

/// Compute the HashOdo digest of `input` under `key`.
/// - input: pointer to at most 80 bytes
/// - output: pointer to a 32-byte buffer
///
/// Returns 0 on success, -1 on null pointers or oversized input.
#[unsafe(no_mangle)]
pub extern "C" fn odo_hash(input: *const u8, input_len: usize, key: u32, output: *mut u8) -> i32 {
    if input.is_null() || output.is_null() || input_len > BLOCK_SIZE {
        return -1;
    }

    unsafe {
        let data = slice::from_raw_parts(input, input_len);
        let digest = hash_odo(data, key);
        let out = slice::from_raw_parts_mut(output, DIGEST_SIZE);
        out.copy_from_slice(&digest);
    }
    0
}

/// Derive the epoch parameter set for `key`.
/// - h256_out: pointer to an 8-word buffer (initial chaining value)
/// - k256_out: pointer to a 64-word buffer (round constants)
///
/// Returns 0 on success, -1 on null pointers.
#[unsafe(no_mangle)]
pub extern "C" fn odo_generate(key: u64, h256_out: *mut u32, k256_out: *mut u32) -> i32 {
    if h256_out.is_null() || k256_out.is_null() {
        return -1;
    }

    let params = generate(key);
    unsafe {
        let h = slice::from_raw_parts_mut(h256_out, H256_WORDS);
        h.copy_from_slice(&params.h256);
        let k = slice::from_raw_parts_mut(k256_out, K256_WORDS);
        k.copy_from_slice(&params.k256);
    }
    0
}
