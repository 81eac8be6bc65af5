//! Limited-precision decimal-to-binary conversion: the inverse of the
//! shortest-decimal search for significands within the format's digit limit.
//!
//! One windowed multiplication against the same power-of-10 table produces a
//! normalized approximation `g` of the value whose error is provably below
//! half an ulp of the window, so the binary significand and the rounding
//! decision can both be read off `g` directly; only exact-boundary cases
//! fall back to divisibility tests.

use crate::carrier::Sealed as CarrierOps;
use crate::decimal::DecimalFp;
use crate::div;
use crate::float::{Float, FloatBits};
use crate::log;
use crate::policy::{Policy, RoundingMode};
use crate::policy::{BinaryRoundingPolicy, CachePolicy, SignPolicy};
use crate::policy::{ResolveBinaryRounding, ResolveCache, ResolveSign};

/// Smallest decimal exponent the conversion accepts before flushing to zero.
pub(crate) fn min_exponent_for<F: Float>() -> i32 {
  log::floor_log10_pow2(F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32)
    - F::DECIMAL_DIGITS as i32 - 1
}

/// Largest decimal exponent the conversion accepts before overflowing to
/// infinity.
pub(crate) fn max_exponent_for<F: Float>() -> i32 {
  log::floor_log10_pow2(F::MAX_EXPONENT + 1)
}

/// Converts a decimal with at most [`DECIMAL_DIGITS`](crate::Float) digits of
/// significand to the nearest binary float, ties to even.
///
/// ```
/// use fpconv::DecimalFp;
///
/// let bits = fpconv::to_binary_limited_precision(DecimalFp::<f64>::new(25, -1));
/// assert_eq!(bits.to_float(), 2.5);
/// ```
pub fn to_binary_limited_precision<F: Float>(decimal: DecimalFp<F>) -> FloatBits<F> {
  to_binary_limited_precision_with(decimal, Policy::new())
}

/// As [`to_binary_limited_precision`], with explicit policies. Only the
/// sign, binary rounding, and cache axes are consulted.
pub fn to_binary_limited_precision_with<F, S, Z, R, D, C, V>(
  decimal: DecimalFp<F>,
  _policy: Policy<S, Z, R, D, C, V>,
) -> FloatBits<F>
where
  F: Float,
  S: ResolveSign,
  R: ResolveBinaryRounding,
  C: ResolveCache,
{
  compute::<F, S::Policy, R::Policy, C::Policy>(decimal)
}

/// Whether the exact scaled value `g = significand * 10^k * 2^e` is an
/// integer: both the power of 2 and the power of 5 in the denominator must
/// divide the significand.
fn is_g_integer<F: Float>(f: F::Carrier, k: i32, e: i32) -> bool {
  let max_power_of_factor_of_5 =
    log::floor_log5_pow2(F::DECIMAL_DIGITS as i32) + F::DECIMAL_DIGITS as i32;
  if e + k < 0 && !div::divisible_by_power_of_2(f, (-e - k) as u32) {
    return false;
  }
  if k < 0 {
    if -k > max_power_of_factor_of_5 {
      return false;
    }
    return div::divisible_by_power_of_5(f, (-k) as u32);
  }
  true
}

fn compute<F, S, R, C>(decimal: DecimalFp<F>) -> FloatBits<F>
where
  F: Float,
  S: SignPolicy,
  R: BinaryRoundingPolicy,
  C: CachePolicy,
{
  debug_assert!(
    {
      let mut limit = <F::Carrier>::ONE;
      for _ in 0..F::DECIMAL_DIGITS {
        limit = limit * <F::Carrier>::from_u32(10);
      }
      decimal.significand <= limit - <F::Carrier>::ONE
    },
    "significand exceeds the digit limit",
  );

  let mut ret = FloatBits::<F>::positive_zero();
  S::decimal_to_binary(&decimal, &mut ret);

  // The rounding mode can only depend on the sign here; resolve it from a
  // sign-only bit pattern.
  let mode = R::mode(if decimal.is_negative {
    FloatBits::<F>::negative_zero()
  } else {
    FloatBits::<F>::positive_zero()
  });

  let sign_bit_mask = <F::Carrier>::ONE << (F::CARRIER_BITS - 1);
  let infinity = ((<F::Carrier>::ONE << F::EXPONENT_BITS) - <F::Carrier>::ONE)
    << F::SIGNIFICAND_BITS;
  let normal_residual_mask =
    (<F::Carrier>::ONE << (F::CARRIER_BITS - F::SIGNIFICAND_BITS - 2)) - <F::Carrier>::ONE;
  let normal_distance_to_boundary =
    <F::Carrier>::ONE << (F::CARRIER_BITS - F::SIGNIFICAND_BITS - 3);

  // Special cases: zero and out-of-range exponents.
  if decimal.significand == <F::Carrier>::ZERO || decimal.exponent < min_exponent_for::<F>() {
    return ret;
  }
  if decimal.exponent > max_exponent_for::<F>() {
    ret.u |= infinity;
    return ret;
  }

  let tau = decimal.significand.leading_zeros_nonzero();
  let cache = C::get_cache::<F>(decimal.exponent);
  let mut gi = F::compute_mul(decimal.significand << tau, cache);

  // Binary exponent estimate with g normalized into [2^(bits-2), 2^(bits-1)).
  let mut bin_exponent =
    F::CARRIER_BITS as i32 + log::floor_log2_pow10(decimal.exponent) - tau as i32 - 1;
  if gi >> (F::CARRIER_BITS - 1) != <F::Carrier>::ZERO {
    gi = gi >> 1;
    bin_exponent += 1;
  }

  let significand;
  let residual_mask;
  let distance_to_boundary;

  if bin_exponent < F::MIN_EXPONENT {
    match mode {
      RoundingMode::Nearest(kind) => {
        // Far below the smallest subnormal interval: zero.
        if bin_exponent < F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32 - 1 {
          return ret;
        }
        // Exactly at the half point between zero and the smallest
        // subnormal: the boundary condition decides.
        if bin_exponent == F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32 - 1 {
          if kind.interval_normal(FloatBits::<F>::positive_zero()).include_right {
            // The midpoint itself rounds to zero, so round up only above
            // it or when g has a nonzero fractional part.
            if gi != sign_bit_mask >> 1
              || !is_g_integer::<F>(
                decimal.significand,
                decimal.exponent,
                F::CARRIER_BITS as i32 - 2 - bin_exponent,
              )
            {
              ret.u |= <F::Carrier>::ONE;
            }
          } else {
            ret.u |= <F::Carrier>::ONE;
          }
          return ret;
        }
      }
      RoundingMode::LeftClosedDirected => {
        if bin_exponent <= F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32 - 1 {
          return ret;
        }
      }
      RoundingMode::RightClosedDirected => {}
    }

    // Subnormal: widen the masks by the underflow amount.
    let underflow = (F::MIN_EXPONENT - bin_exponent) as u32;
    residual_mask = ((normal_residual_mask + <F::Carrier>::ONE) << underflow) - <F::Carrier>::ONE;
    distance_to_boundary = normal_distance_to_boundary << underflow;
    significand =
      gi >> (F::CARRIER_BITS - F::SIGNIFICAND_BITS - 2 + underflow);
    bin_exponent = F::EXPONENT_BIAS;
  } else {
    residual_mask = normal_residual_mask;
    distance_to_boundary = normal_distance_to_boundary;
    // Remove the implicit bit.
    significand = (gi << 2) >> (F::CARRIER_BITS - F::SIGNIFICAND_BITS);
  }

  let mut significand = significand;

  let rounded_up = match mode {
    RoundingMode::Nearest(kind) => {
      let remainder = gi & residual_mask;
      if remainder > distance_to_boundary {
        significand = significand + <F::Carrier>::ONE;
        true
      } else if remainder == distance_to_boundary {
        // On the boundary the interval inclusion decides; an included
        // boundary still rounds up when g carries a nonzero fractional
        // part, i.e. the exact value sits strictly above the midpoint.
        let include_boundary = kind
          .interval_normal(FloatBits::<F>::from_carrier(ret.u | significand))
          .include_right;
        if !include_boundary
          || !is_g_integer::<F>(
            decimal.significand,
            decimal.exponent,
            F::CARRIER_BITS as i32 - 2 - bin_exponent,
          )
        {
          significand = significand + <F::Carrier>::ONE;
          true
        } else {
          false
        }
      } else {
        false
      }
    }
    RoundingMode::LeftClosedDirected => {
      // Always round down.
      false
    }
    RoundingMode::RightClosedDirected => {
      // Round up iff the exact value has a nonzero fractional part.
      let remainder = gi & residual_mask;
      if remainder == <F::Carrier>::ZERO
        && is_g_integer::<F>(
          decimal.significand,
          decimal.exponent,
          F::CARRIER_BITS as i32 - 2 - bin_exponent,
        )
      {
        false
      } else {
        significand = significand + <F::Carrier>::ONE;
        true
      }
    }
  };

  // A round-up can overflow the significand into the next binade.
  if rounded_up && significand == <F::Carrier>::ONE << F::SIGNIFICAND_BITS {
    bin_exponent += 1;
    significand = <F::Carrier>::ZERO;
  }

  // Compose the bits.
  if bin_exponent > F::MAX_EXPONENT {
    ret.u |= infinity;
    return ret;
  }
  ret.u |= significand;
  let raw_exponent = (bin_exponent - F::EXPONENT_BIAS) as u32;
  ret.u |= <F::Carrier>::from_u32(raw_exponent) << F::SIGNIFICAND_BITS;
  ret
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::policy::{binary_rounding, cache};
  use proptest::prelude::*;

  fn to_f64(significand: u64, exponent: i32) -> f64 {
    to_binary_limited_precision(DecimalFp::<f64>::new(significand, exponent)).to_float()
  }

  fn to_f32(significand: u32, exponent: i32) -> f32 {
    to_binary_limited_precision(DecimalFp::<f32>::new(significand, exponent)).to_float()
  }

  #[test]
  fn exact_values() {
    assert_eq!(to_f64(1, 0), 1.0);
    assert_eq!(to_f64(25, -1), 2.5);
    assert_eq!(to_f64(123456, -3), 123.456);
    assert_eq!(to_f64(5, -1), 0.5);
    assert_eq!(to_f32(1, 0), 1.0);
    assert_eq!(to_f32(15, -1), 1.5);
  }

  #[test]
  fn signs() {
    let mut d = DecimalFp::<f64>::new(25, -1);
    d.is_negative = true;
    assert_eq!(to_binary_limited_precision(d).to_float(), -2.5);

    let mut d = DecimalFp::<f64>::new(0, 0);
    d.is_negative = true;
    assert_eq!(to_binary_limited_precision(d).to_carrier(), 0x8000_0000_0000_0000);
  }

  #[test]
  fn inexact_values_round_to_nearest() {
    assert_eq!(to_f64(1, -1), 0.1);
    assert_eq!(to_f64(3, -1), 0.3);
    assert_eq!(to_f64(17976931348623157, 292), f64::MAX);
    assert_eq!(to_f64(22250738585072014, -324), f64::MIN_POSITIVE);
    assert_eq!(to_f32(34028235, 31), f32::MAX);
    assert_eq!(to_f32(1, -45), 1e-45f32);
  }

  #[test]
  fn underflow_and_overflow() {
    assert_eq!(to_f64(1, -400), 0.0);
    assert_eq!(to_f64(99999999999999999, -1000), 0.0);
    assert_eq!(to_f64(1, 400), f64::INFINITY);
    assert_eq!(to_f32(1, -60), 0.0);
    assert_eq!(to_f32(1, 50), f32::INFINITY);
  }

  #[test]
  fn subnormals() {
    assert_eq!(to_f64(5, -324), 5e-324);
    assert_eq!(to_f64(4, -324), 5e-324);  // nearest subnormal
    assert_eq!(to_f64(25, -325), 5e-324); // between 2 and 3 half-ulps
    // Half of the smallest subnormal rounds to even, which is zero.
    assert_eq!(to_f64(24703282292062327, -340), 0.0);
    assert_eq!(to_f64(24703282292062328, -340), 5e-324);
  }

  #[test]
  fn directed_modes() {
    // The nearest binary to 0.1 lies above it, so truncation stops one ulp
    // below the nearest result.
    let p = Policy::new().binary_rounding(binary_rounding::TowardZero);
    let d = DecimalFp::<f64>::new(1, -1);
    let truncated = to_binary_limited_precision_with(d, p);
    assert_eq!(truncated.to_carrier(), 0.1f64.to_bits() - 1);

    let p = Policy::new().binary_rounding(binary_rounding::AwayFromZero);
    let d = DecimalFp::<f64>::new(1, -1);
    let up = to_binary_limited_precision_with(d, p);
    assert_eq!(up.to_carrier(), 0.1f64.to_bits());

    // Exact values are unchanged by the directed modes.
    let p = Policy::new().binary_rounding(binary_rounding::AwayFromZero);
    let d = DecimalFp::<f64>::new(25, -1);
    assert_eq!(to_binary_limited_precision_with(d, p).to_float(), 2.5);
  }

  #[test]
  fn compact_cache_agrees() {
    let p = Policy::new().cache(cache::Compact);
    for (s, e) in [(1u64, -1i32), (3, -1), (17976931348623157, 292), (5, -324), (1, 0)] {
      let fast = to_binary_limited_precision(DecimalFp::<f64>::new(s, e));
      let compact = to_binary_limited_precision_with(DecimalFp::<f64>::new(s, e), p);
      assert_eq!(fast, compact);
    }
  }

  #[test]
  fn inverse_of_shortest() {
    for x in [0.1f64, 0.3, 1.0, 123.456, 5e-324, f64::MIN_POSITIVE, f64::MAX, 1e300] {
      let d = crate::to_shortest_decimal(x);
      assert_eq!(to_binary_limited_precision(d).to_float(), x, "x = {x:?}");
    }
  }

  const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x1000 } else { 0x8_0000 };
  proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn parses_like_std_f64(significand in 0u64..100_000_000_000_000_000, exponent in -340i32..310) {
      let ours = to_f64(significand, exponent);
      let std: f64 = format!("{significand}e{exponent}").parse().unwrap();
      prop_assert_eq!(ours.to_bits(), std.to_bits());
    }

    #[test]
    fn parses_like_std_f32(significand in 0u32..1_000_000_000, exponent in -60i32..40) {
      let ours = to_f32(significand, exponent);
      let std: f32 = format!("{significand}e{exponent}").parse().unwrap();
      prop_assert_eq!(ours.to_bits(), std.to_bits());
    }

    #[test]
    fn roundtrips_shortest_f64(bits in any::<u64>()) {
      let x = f64::from_bits(bits);
      if x.is_finite() && x != 0.0 {
        let d = crate::to_shortest_decimal(x);
        prop_assert_eq!(to_binary_limited_precision(d).to_carrier(), bits);
      }
    }
  }
}
