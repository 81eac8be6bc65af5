//! Precomputed power-of-10 tables shared by the shortest-decimal search and
//! the decimal-to-binary conversion.
//!
//! Each entry is the leading-bit-normalized window of `10^k`: the floor of
//! the scaled power for `k >= 0` and the ceiling for `k < 0`, so that the
//! multiply-then-shift approximations round in the provably safe direction.
//! The tables are frozen inputs regenerated by `gen-tables/generate.py`.

pub(crate) mod b32_table;
pub(crate) mod b64_table;
pub(crate) mod compact_table;

use crate::carrier::wide;
use crate::log;

/// Reconstructs the binary64 entry for `10^k` from the compressed table:
/// the nearest stored base entry times `5^offset`, re-aligned, plus a 2-bit
/// correction from the error table. Bit-identical to the direct entry.
pub(crate) fn recover_compact_entry(k: i32) -> u128 {
  let min_k = b64_table::MIN_K;
  debug_assert!(k >= min_k && k <= b64_table::MAX_K);

  let cache_index = (k - min_k) / compact_table::COMPRESSION_RATIO;
  let kb = cache_index * compact_table::COMPRESSION_RATIO + min_k;
  let offset = k - kb;

  let base_cache = compact_table::BASE[cache_index as usize];
  if offset == 0 {
    return base_cache;
  }

  // The base entry is scaled for 10^kb; multiplying by 5^offset and shifting
  // by alpha re-aligns the window for 10^(kb + offset).
  let alpha = log::floor_log2_pow10(kb + offset) - log::floor_log2_pow10(kb) - offset;
  debug_assert!(alpha > 0 && alpha < 64);
  let alpha = alpha as u32;

  let pow5 = compact_table::POW5[offset as usize];
  let base_hi = (base_cache >> 64) as u64;
  let base_lo = base_cache as u64;

  let mut recovered = wide::umul128(base_hi, pow5);
  let middle_low = wide::umul128(base_lo - u64::from(kb < 0), pow5);
  recovered += middle_low >> 64;

  let high_to_middle = ((recovered >> 64) as u64) << (64 - alpha);
  let middle_to_low = (recovered as u64) << (64 - alpha);

  let mut recovered = (u128::from((recovered as u64 >> alpha) | high_to_middle) << 64)
    | u128::from((middle_low as u64 >> alpha) | middle_to_low);
  if kb < 0 {
    recovered += 1;
  }

  let error_index = ((k - min_k) / 16) as usize;
  let error = (compact_table::ERRORS[error_index] >> (((k - min_k) % 16) * 2)) & 0x3;
  debug_assert!(recovered as u64 <= u64::MAX - u64::from(error));
  recovered + u128::from(error)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_ranges() {
    assert_eq!(b32_table::MAX_K - b32_table::MIN_K + 1, b32_table::ENTRIES.len() as i32);
    assert_eq!(b64_table::MAX_K - b64_table::MIN_K + 1, b64_table::ENTRIES.len() as i32);
  }

  #[test]
  fn known_entries() {
    // 10^0 scaled to a leading-one window is exactly 2^(bits - 1).
    assert_eq!(b32_table::ENTRIES[(0 - b32_table::MIN_K) as usize], 1 << 63);
    assert_eq!(b64_table::ENTRIES[(0 - b64_table::MIN_K) as usize], 1 << 127);
    // 10^1 = 0b1010 shifted down.
    assert_eq!(b32_table::ENTRIES[(1 - b32_table::MIN_K) as usize], 0xa000_0000_0000_0000);
    // The window of 10^-292, the lowest entry the shortest-decimal search
    // uses for binary64.
    assert_eq!(
      b64_table::ENTRIES[(-292 - b64_table::MIN_K) as usize],
      0xff77_b1fc_bebc_dc4f_25e8_e89c_13bb_0f7b,
    );
  }

  #[test]
  fn compact_recovery_is_exact() {
    for k in b64_table::MIN_K..=b64_table::MAX_K {
      assert_eq!(
        recover_compact_entry(k),
        b64_table::ENTRIES[(k - b64_table::MIN_K) as usize],
        "k = {k}",
      );
    }
  }
}
