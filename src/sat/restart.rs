#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

/// How many restart windows the driver attempts before giving up.
pub const MAX_RESTARTS: u32 = 50;

/// Decisions granted to the first restart window; window `r` gets
/// `BASE_BUDGET * luby(r)`.
pub const BASE_BUDGET: u64 = 200;

/// The unit-indexed Luby sequence: `1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2,
/// 4, 8, ...`.
///
/// For the smallest `k` with `2^k - 1 >= i`: if `i` is exactly `2^k - 1`
/// the value is `2^(k-1)`, otherwise recurse on the remainder of the
/// previous full block.
#[must_use]
pub fn luby(i: u32) -> u64 {
    debug_assert!(i >= 1, "the Luby sequence is 1-indexed");
    let mut k = 1u32;
    while (1u64 << k) - 1 < u64::from(i) {
        k += 1;
    }
    if u64::from(i) == (1u64 << k) - 1 {
        1 << (k - 1)
    } else {
        luby(i - (1 << (k - 1)) + 1)
    }
}
