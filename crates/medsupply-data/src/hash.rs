//! Deterministic hashing for seed data and derived fields.
//!
//! Two primitives:
//!
//! - [`fnv1a`] hashes an identifying string (a name, a code). Fields that
//!   must follow a record around, like its account manager or appraisal
//!   score, are derived from it with [`pick`] and [`score_in_range`].
//! - [`mix`] scrambles `(index, salt)` with a `splitmix64` finalizer. The
//!   generators use it for every per-index formula so that record `i` is
//!   identical across runs.
//!
//! Neither is cryptographic. The exact algorithms only need to stay stable
//! for seeded data to stay stable.

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a hash of `input`'s UTF-8 bytes.
pub fn fnv1a(input: &str) -> u64 {
    input
        .bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

/// Choose one of `options` by hashing `key`. `None` only when empty.
pub fn pick<'a, T>(key: &str, options: &'a [T]) -> Option<&'a T> {
    let index = bounded(fnv1a(key), options.len())?;
    options.get(index)
}

/// Map `key` into the inclusive range `[min, max]`.
///
/// Returns `min` when the range is empty or inverted.
pub fn score_in_range(key: &str, min: u32, max: u32) -> u32 {
    let span = u64::from(max.saturating_sub(min)).saturating_add(1);
    let offset = fnv1a(key).checked_rem(span).unwrap_or(0);
    min.saturating_add(u32::try_from(offset).unwrap_or(0))
}

/// Scramble an index with a salt (`splitmix64` finalizer).
pub const fn mix(index: u64, salt: u64) -> u64 {
    let mut z = index
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(salt.wrapping_mul(0xbf58_476d_1ce4_e5b9));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// `mix(index, salt)` mapped into the inclusive range `[min, max]`.
pub const fn mix_range(index: u64, salt: u64, min: u64, max: u64) -> u64 {
    if max <= min {
        return min;
    }
    let span = max.saturating_sub(min).saturating_add(1);
    match mix(index, salt).checked_rem(span) {
        Some(offset) => min.saturating_add(offset),
        None => min,
    }
}

/// `mix(index, salt)` used to choose from `options`.
pub fn mix_pick<T: Copy>(index: u64, salt: u64, options: &[T]) -> Option<T> {
    let position = bounded(mix(index, salt), options.len())?;
    options.get(position).copied()
}

fn bounded(hash: u64, len: usize) -> Option<usize> {
    let len = u64::try_from(len).ok().filter(|l| *l > 0)?;
    usize::try_from(hash.checked_rem(len)?).ok()
}
