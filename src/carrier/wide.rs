//! Wide multiplication primitives built from 64-bit halves.
//!
//! Every routine here is a pure function of its integer inputs with a
//! bit-exact contract: the conversion algorithms reconstruct windows of
//! infinite-precision products from these slices, so any platform divergence
//! would silently corrupt the output. `u128` is used as the portable
//! double-word type; on 64-bit targets the compiler lowers these to the
//! native widening multiply.

/// A 96-bit unsigned value, `hi * 2^64 + lo` with `hi < 2^32`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct U96 {
  pub hi: u32,
  pub lo: u64,
}

/// A 192-bit unsigned value, `hi * 2^128 + mid * 2^64 + lo`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct U192 {
  pub hi: u64,
  pub mid: u64,
  pub lo: u64,
}

/// Full 128-bit product of two 64-bit values.
#[inline]
pub(crate) const fn umul128(x: u64, y: u64) -> u128 {
  x as u128 * y as u128
}

/// High 64 bits of the product of two 64-bit values.
#[inline]
pub(crate) const fn umul128_upper64(x: u64, y: u64) -> u64 {
  (umul128(x, y) >> 64) as u64
}

/// High 64 bits of a 64 x 128 bit product.
#[inline]
pub(crate) const fn umul192_upper64(x: u64, y: u128) -> u64 {
  let g0 = umul128(x, (y >> 64) as u64);
  let g0 = g0 + umul128_upper64(x, y as u64) as u128;
  (g0 >> 64) as u64
}

/// The middle 64-bit slice (bits 64..128) of a 64 x 128 bit product,
/// truncated to 64 bits.
#[inline]
pub(crate) const fn umul192_middle64(x: u64, y: u128) -> u64 {
  let g01 = x.wrapping_mul((y >> 64) as u64);
  let g10 = umul128_upper64(x, y as u64);
  g01.wrapping_add(g10)
}

/// High 32 bits of a 32 x 64 bit product.
#[inline]
pub(crate) const fn umul96_upper32(x: u32, y: u64) -> u32 {
  umul128_upper64(x as u64, y) as u32
}

/// The middle 64-bit slice (bits 0..64 of the fractional window) of a
/// 32 x 64 bit product, truncated to 64 bits.
#[inline]
pub(crate) const fn umul96_lower64(x: u32, y: u64) -> u64 {
  (x as u64).wrapping_mul(y)
}

/// Full 32 x 96 bit product; fits in 128 bits exactly.
#[inline]
pub(crate) const fn umul128_full(x: u32, y: U96) -> u128 {
  ((x as u128) * (y.hi as u128) << 64) + (x as u128) * (y.lo as u128)
}

/// High 128 bits of a 64 x 192 bit product.
#[inline]
pub(crate) const fn umul256_upper128(x: u64, y: U192) -> u128 {
  let g0 = umul128(x, y.hi);
  let g1 = umul128(x, y.mid);
  let g1 = g1 + umul128_upper64(x, y.lo) as u128;
  g0 + (g1 >> 64)
}

/// High 192 bits of a 64 x 192 bit product, as `(bits 128.., bits 64..128)`.
#[inline]
pub(crate) const fn umul256_upper192(x: u64, y: U192) -> (u128, u64) {
  let g0 = umul128(x, y.hi);
  let g1 = umul128(x, y.mid);
  let g1 = g1 + umul128_upper64(x, y.lo) as u128;
  (g0 + (g1 >> 64), g1 as u64)
}

/// The second-highest 64-bit block (bits 128..192) of a 128 x 128 bit
/// product, truncated to 64 bits.
#[inline]
pub(crate) const fn umul256_upper_middle64(x: u128, y: u128) -> u64 {
  let (x_hi, x_lo) = ((x >> 64) as u64, x as u64);
  let (y_hi, y_lo) = ((y >> 64) as u64, y as u64);
  let g11 = umul128_upper64(x_lo, y_lo);
  let g12 = umul128(x_lo, y_hi) + g11 as u128;
  let g21 = umul128(x_hi, y_lo) + (g12 as u64) as u128;
  let g22 = x_hi.wrapping_mul(y_hi);
  g22.wrapping_add((g12 >> 64) as u64).wrapping_add((g21 >> 64) as u64)
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Reference accumulator: 64-bit limbs, least significant first.
  #[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
  struct Limbs([u64; 5]);

  impl Limbs {
    fn add_at(&mut self, mut val: u128, offset: usize) {
      let mut carry = 0u128;
      for i in offset..5 {
        let sum = self.0[i] as u128 + (val & u64::MAX as u128) + carry;
        self.0[i] = sum as u64;
        carry = sum >> 64;
        val >>= 64;
      }
    }

    fn product(x: u128, y: &[u64]) -> Limbs {
      let mut acc = Limbs::default();
      let (xh, xl) = ((x >> 64) as u64, x as u64);
      for (i, &limb) in y.iter().enumerate() {
        acc.add_at(xl as u128 * limb as u128, i);
        acc.add_at(xh as u128 * limb as u128, i + 1);
      }
      acc
    }

    fn limb128(&self, lo: usize) -> u128 {
      ((self.0[lo + 1] as u128) << 64) | self.0[lo] as u128
    }
  }

  #[test]
  fn umul128_upper64_manual() {
    assert_eq!(umul128_upper64(u64::MAX, u64::MAX), u64::MAX - 1);
    assert_eq!(umul128_upper64(1 << 63, 2), 1);
    assert_eq!(umul128_upper64(0x8000_0000_0000_0000, 0x8000_0000_0000_0000),
      0x4000_0000_0000_0000);
  }

  #[test]
  fn umul192_slices() {
    let x = 0x0123_4567_89ab_cdef_u64;
    let y = 0xfedc_ba98_7654_3210_0f0f_0f0f_0f0f_0f0f_u128;
    let p = Limbs::product(x as u128, &[y as u64, (y >> 64) as u64]);
    assert_eq!(umul192_upper64(x, y), p.0[2]);
    assert_eq!(umul192_middle64(x, y), p.0[1]);
  }

  #[test]
  fn umul96_slices() {
    let x = 0x89ab_cdef_u32;
    let y = 0xfedc_ba98_7654_3210_u64;
    let p = Limbs::product(x as u128, &[y]);
    assert_eq!(umul96_upper32(x, y), p.0[1] as u32);
    assert_eq!(umul96_lower64(x, y), p.limb128(0) as u64);
  }

  #[test]
  fn umul256_slices() {
    let x = 0xdead_beef_cafe_babe_u64;
    let y = U192 {
      hi: 0x0123_4567_89ab_cdef,
      mid: 0xfedc_ba98_7654_3210,
      lo: 0x0f1e_2d3c_4b5a_6978,
    };
    let p = Limbs::product(x as u128, &[y.lo, y.mid, y.hi]);
    assert_eq!(umul256_upper128(x, y), p.limb128(2));
    assert_eq!(umul256_upper192(x, y), (p.limb128(2), p.0[1]));
  }

  #[test]
  fn umul128_full_exact() {
    let x = 0xffff_ffff_u32;
    let y = U96 { hi: 0xffff_ffff, lo: 0xffff_ffff_ffff_ffff };
    let p = Limbs::product(x as u128, &[y.lo, y.hi as u64]);
    assert_eq!(umul128_full(x, y), p.limb128(0));
  }

  #[test]
  fn upper_middle_matches_schoolbook() {
    let cases = [
      (0x89705f4136b4a597_31680a88f8953031_u128, 0x0000_0000_0000_0001_ffff_ffff_ffff_ffff_u128),
      (u128::MAX, u128::MAX),
      (0x1234_5678_9abc_def0_0fed_cba9_8765_4321, 0x89705f4136b4a597_31680a88f8953031),
    ];
    for (x, y) in cases {
      let p = Limbs::product(x, &[y as u64, (y >> 64) as u64]);
      assert_eq!(umul256_upper_middle64(x, y), p.0[2]);
    }
  }
}
