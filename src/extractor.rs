//! Epoch-keyed extractor: a Blum-Blum-Shub selector over a fraction table.
//!
//! Repeated modular squaring below the fixed composite modulus yields one
//! output bit per squaring; 14 bits form a candidate table index. The
//! output bit is pinned to the **parity** of the squared residue - the
//! trailing-zeros variant seen elsewhere produces incompatible parameter
//! sets and must not be substituted.

use crate::bignum::{self, U512};
use crate::params::{MAX_DRAW_ATTEMPTS, TABLE_SIZE, TABLE_SIZE_BITS};

/// Fill `out` with values of `table` at distinct pseudo-random indices.
///
/// Pure function of `(seed, table, out.len())` and the fixed modulus.
/// Index accumulation is most-significant-bit first; a candidate index
/// already used within this call is discarded whole and 14 fresh bits are
/// generated, so a duplicate index is never emitted.
///
/// Panics when asked for more values than the table holds, or if the draw
/// loop crosses [`MAX_DRAW_ATTEMPTS`] (a misconfigured modulus or table,
/// never a runtime condition).
pub fn select(seed: u64, table: &[u32; TABLE_SIZE], out: &mut [u32]) {
    assert!(
        out.len() <= TABLE_SIZE,
        "cannot draw {} distinct values from a table of {}",
        out.len(),
        TABLE_SIZE
    );

    let m = bignum::modulus();
    let mut s = U512::from_u64(seed).rem(&m);
    let mut used = [false; TABLE_SIZE];
    let mut filled = 0;
    let mut attempts = 0usize;

    while filled < out.len() {
        let mut index = 0usize;
        for _ in 0..TABLE_SIZE_BITS {
            s = s.sqr_mod(&m);
            index = (index << 1) | s.is_odd() as usize;
        }
        attempts += 1;
        assert!(
            attempts <= MAX_DRAW_ATTEMPTS,
            "extractor exceeded {} candidate draws; PRNG constants are misconfigured",
            MAX_DRAW_ATTEMPTS
        );
        if used[index] {
            continue;
        }
        used[index] = true;
        out[filled] = table[index];
        filled += 1;
    }
}
