//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater};

/// Constant-time check that `lo <= value <= hi`
pub fn ct_in_range(value: u8, lo: u8, hi: u8) -> Choice {
    !(lo.ct_gt(&value)) & !(value.ct_gt(&hi))
}

/// Checks that the last `n` bytes of `data` all equal `n`, without
/// branching on the contents of `data`.
///
/// Every byte of `data` is visited regardless of `n`.
pub fn ct_suffix_is(data: &[u8], n: u8) -> Choice {
    let len = data.len();
    let mut ok = Choice::from(1);
    for (i, byte) in data.iter().enumerate() {
        // Position counted from the end, 1-based.
        let from_end = (len - i) as u64;
        let in_suffix = !from_end.ct_gt(&(n as u64));
        let matches = byte.ct_eq(&n);
        ok &= !in_suffix | matches;
    }
    ok
}

/// XOR `src` into `dst` element-wise
///
/// Both slices must have the same length; extra bytes in the longer one are
/// ignored.
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}
