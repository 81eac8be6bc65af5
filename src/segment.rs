//! Left-to-right generation of the exact decimal expansion of a binary
//! float, in fixed blocks of nine digits.
//!
//! This is the Ryu-printf scheme: the expansion is cut into *segments* of
//! `SEGMENT_SIZE` digits indexed by a signed `n` (segment `n` covers the
//! digits at `10^(-9n-8) ..= 10^(-9n)` relative to the units place), and each
//! segment is one windowed multiplication against a precomputed table entry
//! followed by a reduction modulo 10^9. The generator is pull-oriented: it
//! starts at the first nonzero segment and the caller advances it.

pub(crate) mod b32_table;
pub(crate) mod b64_table;

use crate::carrier::Sealed;
use crate::div;
use crate::float::{Float, FloatBits};
use crate::log;

/// Digits per segment.
pub const SEGMENT_SIZE: i32 = 9;

/// 10^9, the modulus of a segment.
pub const SEGMENT_DIVISOR: u32 = 1_000_000_000;

/// Bit size of a segment window: `floor(log2(10^9)) + 1`.
pub(crate) const SEGMENT_BIT_SIZE: i32 = 30;

/// Granlund-Montgomery style division by 10^9; returns the remainder.
/// Exact for any `x` below `2^157 / (ceil(2^157 / 10^9) * 10^9 - 2^157)`,
/// which covers the whole `u128` range.
#[inline]
pub(crate) fn granlund_montgomery_mod_1e9(x: u128) -> u32 {
  const L: u32 = 29;
  const C: u128 = 0x89705f41_36b4a597_31680a88_f8953031;
  // Only the low 32 bits of the quotient are needed: the remainder fits in
  // 32 bits, so the subtraction below is exact modulo 2^32.
  let q = crate::carrier::wide::umul256_upper_middle64(x, C);
  (x as u32).wrapping_sub(SEGMENT_DIVISOR.wrapping_mul((q >> L) as u32))
}

/// Pull-iterator over the nine-digit segments of the exact decimal expansion
/// of a finite positive value `significand * 2^exponent`.
///
/// The first nonzero segment is computed on construction; it is the only one
/// allowed to have fewer than nine significant digits.
#[derive(Clone, Copy)]
pub struct SegmentGenerator<F: Float> {
  /// MSB-aligned significand.
  significand: F::Carrier,
  /// Binary exponent of the unaligned significand.
  exponent: i32,
  /// How far the significand was shifted up during alignment.
  alignment: u32,
  segment: u32,
  segment_index: i32,
  exponent_index: i32,
  remainder: i32,
  max_segment_index: i32,
}

impl<F: Float> SegmentGenerator<F> {
  /// Generator over the value of `bits`. Precondition: finite and nonzero.
  pub fn new(bits: FloatBits<F>) -> Self {
    debug_assert!(bits.is_finite() && bits.is_nonzero());

    let mut significand = bits.extract_significand_bits();
    let exponent_bits = bits.extract_exponent_bits();
    let exponent;
    if exponent_bits != 0 {
      exponent = exponent_bits as i32 + F::EXPONENT_BIAS - F::SIGNIFICAND_BITS as i32;
      significand |= <F::Carrier>::ONE << F::SIGNIFICAND_BITS;
    } else {
      exponent = F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32;
    }

    Self::from_parts(significand, exponent, F::SIGNIFICAND_BITS)
  }

  /// Generator over the midpoint between the value of `bits` and its upper
  /// neighbor, `(2f + 1) * 2^(e-1)`. Used to resolve half-way ties when
  /// parsing. Precondition: finite.
  pub(crate) fn new_midpoint(bits: FloatBits<F>) -> Self {
    debug_assert!(bits.is_finite());

    let f = bits.binary_significand();
    let e = bits.binary_exponent() - F::SIGNIFICAND_BITS as i32;
    let midpoint_significand = (f << 1) | <F::Carrier>::ONE;
    // One more significand bit than an ordinary value, one lower exponent.
    Self::from_parts(midpoint_significand, e - 1, F::SIGNIFICAND_BITS + 1)
  }

  /// `significand * 2^exponent` with `significand < 2^(precision + 1)`,
  /// `significand != 0`.
  fn from_parts(significand: F::Carrier, exponent: i32, precision: u32) -> Self {
    debug_assert!(significand != <F::Carrier>::ZERO);

    // First estimate of the segment index holding the leading nonzero digit:
    // n0 = floor((-e - p - 1) * log10(2) / 9) + 1 for values below one, and
    // the mirrored form otherwise. The estimate can undershoot (for
    // subnormals in particular); the zero-skipping loop below fixes it up.
    // Signed division is avoided throughout.
    let segment_index;
    let max_segment_index;
    let dividend = log::floor_log10_pow2(-exponent - precision as i32 - 1);
    if exponent <= -(precision as i32) - 1 {
      debug_assert!(dividend >= 0);
      segment_index = dividend / SEGMENT_SIZE + 1;
      max_segment_index = (-exponent + SEGMENT_SIZE - 1) / SEGMENT_SIZE;
    } else {
      debug_assert!(dividend < 0);
      segment_index = -((-dividend) / SEGMENT_SIZE);
      max_segment_index = if exponent < 0 {
        (-exponent + SEGMENT_SIZE - 1) / SEGMENT_SIZE
      } else {
        0
      };
    }

    // Align the leading significand bit to the carrier MSB.
    let alignment = F::CARRIER_BITS - precision - 1;
    let significand = significand << alignment;

    let mut gen = SegmentGenerator {
      significand,
      exponent,
      alignment,
      segment: 0,
      segment_index,
      exponent_index: 0,
      remainder: 0,
      max_segment_index,
    };

    // Positive-remainder decomposition of e + 9 n0 by the compression
    // factor.
    let pow2_exponent = exponent + segment_index * SEGMENT_SIZE;
    if pow2_exponent >= 0 {
      gen.exponent_index = pow2_exponent / F::SEGMENT_COMPRESSION;
      gen.remainder = pow2_exponent % F::SEGMENT_COMPRESSION;
    } else {
      gen.exponent_index = -((-pow2_exponent) / F::SEGMENT_COMPRESSION);
      gen.remainder = (-pow2_exponent) % F::SEGMENT_COMPRESSION;
      if gen.remainder != 0 {
        gen.exponent_index -= 1;
        gen.remainder = F::SEGMENT_COMPRESSION - gen.remainder;
      }
    }

    // Get the first nonzero segment.
    gen.segment = gen.compute_segment();
    while gen.segment == 0 {
      gen.segment_index += 1;
      gen.on_increase_segment_index();
    }
    gen
  }

  #[inline]
  pub fn current_segment(&self) -> u32 {
    self.segment
  }

  #[inline]
  pub fn current_segment_index(&self) -> i32 {
    self.segment_index
  }

  /// Advances to the next segment and returns it; returns 0 once past the
  /// last segment that can be nonzero.
  pub fn compute_next_segment(&mut self) -> u32 {
    self.segment_index += 1;
    if self.segment_index <= self.max_segment_index {
      self.on_increase_segment_index();
    } else {
      self.segment = 0;
    }
    self.segment
  }

  /// Whether any nonzero digit exists beyond the current segment.
  ///
  /// Runs the divisibility tests every call; cache the answer if it is
  /// needed more than once.
  pub fn has_further_nonzero_segments(&self) -> bool {
    if self.segment_index >= self.max_segment_index {
      return false;
    }

    // Digits remain iff f * 2^e * 10^(9 n) is not an integer: either the
    // power of 2 or the power of 5 in the denominator must survive.
    let minus_pow5_exponent = -self.segment_index * SEGMENT_SIZE;
    let minus_pow2_exponent = -self.exponent + minus_pow5_exponent;

    if minus_pow2_exponent > 0
      && !div::divisible_by_power_of_2(
        self.significand,
        (minus_pow2_exponent + self.alignment as i32) as u32,
      )
    {
      return true;
    }

    let max_power_of_factor_of_5 = log::floor_log5_pow2(F::SIGNIFICAND_BITS as i32 + 2);
    if minus_pow5_exponent > 0
      && (minus_pow5_exponent > max_power_of_factor_of_5
        || !div::divisible_by_power_of_5(self.significand, minus_pow5_exponent as u32))
    {
      return true;
    }

    false
  }

  fn compute_segment(&self) -> u32 {
    let cache = F::segment_cache(self.segment_index, self.exponent_index);
    F::multiply_shift_mod(
      self.significand,
      cache,
      SEGMENT_BIT_SIZE + self.remainder - self.alignment as i32,
    )
  }

  fn on_increase_segment_index(&mut self) {
    debug_assert!(self.segment_index <= self.max_segment_index);
    self.remainder += SEGMENT_SIZE;
    if self.remainder >= F::SEGMENT_COMPRESSION {
      self.exponent_index += 1;
      self.remainder -= F::SEGMENT_COMPRESSION;
    }
    self.segment = self.compute_segment();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  /// Collects the whole expansion as a decimal string (without the dot).
  fn expansion<F: Float>(x: F) -> (i32, String) {
    let mut gen = SegmentGenerator::new(FloatBits::new(x));
    let first_index = gen.current_segment_index();
    let mut digits = format!("{}", gen.current_segment());
    loop {
      let more = gen.has_further_nonzero_segments();
      if !more {
        break;
      }
      gen.compute_next_segment();
      digits += &format!("{:09}", gen.current_segment());
    }
    (first_index, digits)
  }

  #[test]
  fn exact_expansion_of_tenth() {
    // 0.1 in binary64 is exactly
    // 0.1000000000000000055511151231257827021181583404541015625; the last
    // segment keeps its padding zeros.
    let (first, digits) = expansion(0.1f64);
    assert_eq!(first, 1);
    assert_eq!(
      digits,
      "100000000000000005551115123125782702118158340454101562500000000",
    );
  }

  #[test]
  fn exact_expansion_small_integers() {
    let (first, digits) = expansion(1.0f64);
    assert_eq!((first, digits.as_str()), (0, "1"));

    let (first, digits) = expansion(1234.5f64);
    assert_eq!((first, digits.as_str()), (0, "1234500000000"));
    // Segment 0 is 1234, segment 1 holds the fractional 500000000.

    let (first, digits) = expansion(1e9f64);
    assert_eq!((first, digits.as_str()), (-1, "1"));

    let (first, digits) = expansion(1.5e9f64);
    assert_eq!((first, digits.as_str()), (-1, "1500000000"));
  }

  #[test]
  fn exact_expansion_f32() {
    // 0.1f32 = 0.100000001490116119384765625 exactly.
    let (first, digits) = expansion(0.1f32);
    assert_eq!(first, 1);
    assert_eq!(digits, "100000001490116119384765625");

    let (first, digits) = expansion(3.0f32);
    assert_eq!((first, digits.as_str()), (0, "3"));
  }

  #[test]
  fn smallest_subnormals() {
    // 2^-1074 = 4.940656458412465441765687928682213...e-324; segment 36
    // covers the digit positions 10^-316..10^-324.
    let mut gen = SegmentGenerator::new(FloatBits::<f64>::from_carrier(1));
    assert_eq!(gen.current_segment_index(), 36);
    assert_eq!(gen.current_segment(), 4);
    assert!(gen.has_further_nonzero_segments());
    assert_eq!(gen.compute_next_segment(), 940656458);

    // 2^-149 = 1.401298464324817070923729583289916...e-45.
    let mut gen = SegmentGenerator::new(FloatBits::<f32>::from_carrier(1));
    assert_eq!(gen.current_segment_index(), 5);
    assert_eq!(gen.current_segment(), 1);
    assert_eq!(gen.compute_next_segment(), 401298464);
  }

  #[test]
  fn terminates_exactly() {
    let mut gen = SegmentGenerator::new(FloatBits::new(0.5f64));
    assert_eq!(gen.current_segment_index(), 1);
    assert_eq!(gen.current_segment(), 500000000);
    assert!(!gen.has_further_nonzero_segments());
    assert_eq!(gen.compute_next_segment(), 0);
  }

  #[test]
  fn midpoint_of_one() {
    // Midpoint of 1.0 and its successor: 1 + 2^-53, whose expansion is
    // 1.00000000000000011102230246251565404236316680908203125.
    let mut gen = SegmentGenerator::<f64>::new_midpoint(FloatBits::new(1.0f64));
    assert_eq!(gen.current_segment_index(), 0);
    assert_eq!(gen.current_segment(), 1);
    let mut digits = String::new();
    while gen.has_further_nonzero_segments() {
      gen.compute_next_segment();
      digits += &format!("{:09}", gen.current_segment());
    }
    assert_eq!(digits, "000000000000000111022302462515654042363166809082031250");
  }

  #[test]
  fn midpoint_of_zero() {
    // Midpoint of 0 and the smallest subnormal: 2^-1075, which is
    // 2.470328229206232720882843964341...e-324.
    let mut gen = SegmentGenerator::<f64>::new_midpoint(FloatBits::positive_zero());
    assert_eq!(gen.current_segment_index(), 36);
    assert_eq!(gen.current_segment(), 2);
    assert_eq!(gen.compute_next_segment(), 470328229);
  }

  /// Oracle: digits of the exact value via big rationals.
  fn oracle_digits(significand: u64, exponent: i32, first_segment_index: i32, count: usize) -> String {
    use malachite::base::num::arithmetic::traits::{Floor, Pow};
    use malachite::rational::Rational;
    use malachite::Natural;
    let value = Rational::from(Natural::from(significand))
      * Rational::from(2u32).pow(i64::from(exponent));
    let mut out = String::new();
    for i in 0..count {
      let n = first_segment_index + i as i32;
      // floor(value * 10^(9n)) mod 10^9
      let scaled = &value * Rational::from(10u32).pow(9 * i64::from(n));
      let floor = Natural::try_from(scaled.floor()).unwrap_or_default();
      let segment = &floor % Natural::from(SEGMENT_DIVISOR);
      out += &format!("{:09}", segment);
    }
    out
  }

  const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x200 } else { 0x2000 };
  proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn segments_match_oracle_f64(bits in any::<u64>()) {
      let x = f64::from_bits(bits);
      if x.is_finite() && x != 0.0 {
        let fb = FloatBits::new(x.abs());
        let mut gen = SegmentGenerator::new(fb);
        let first = gen.current_segment_index();
        let mut produced = format!("{:09}", gen.current_segment());
        for _ in 0..6 {
          gen.compute_next_segment();
          produced += &format!("{:09}", gen.current_segment());
        }
        let expect = oracle_digits(
          fb.binary_significand(),
          fb.binary_exponent() - 52,
          first,
          7,
        );
        prop_assert_eq!(produced, expect);
      }
    }

    #[test]
    fn segments_match_oracle_f32(bits in any::<u32>()) {
      let x = f32::from_bits(bits);
      if x.is_finite() && x != 0.0 {
        let fb = FloatBits::new(x.abs());
        let mut gen = SegmentGenerator::new(fb);
        let first = gen.current_segment_index();
        let mut produced = format!("{:09}", gen.current_segment());
        for _ in 0..4 {
          gen.compute_next_segment();
          produced += &format!("{:09}", gen.current_segment());
        }
        let expect = oracle_digits(
          u64::from(fb.binary_significand()),
          fb.binary_exponent() - 23,
          first,
          5,
        );
        prop_assert_eq!(produced, expect);
      }
    }

    #[test]
    fn midpoint_matches_oracle_f64(bits in any::<u64>()) {
      let fb = FloatBits::<f64>::from_carrier(bits & !(1 << 63));
      if fb.is_finite() {
        let mut gen = SegmentGenerator::new_midpoint(fb);
        let first = gen.current_segment_index();
        let mut produced = format!("{:09}", gen.current_segment());
        for _ in 0..6 {
          gen.compute_next_segment();
          produced += &format!("{:09}", gen.current_segment());
        }
        let expect = oracle_digits(
          2 * fb.binary_significand() + 1,
          fb.binary_exponent() - 52 - 1,
          first,
          7,
        );
        prop_assert_eq!(produced, expect);
      }
    }
  }
}
