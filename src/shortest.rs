//! Shortest round-trip binary-to-decimal conversion.
//!
//! The search follows the Dragonbox algorithm: one windowed multiplication
//! against the power-of-10 table turns the rounding interval of the input
//! into an integer interval, a division by the "big divisor" 10^(kappa+1)
//! tests whether an extra digit can be dropped, and only the rare boundary
//! coincidences fall back to divisibility tests on the exact product. Powers
//! of two take a dedicated path because their rounding interval is
//! asymmetric.

use crate::carrier::Sealed as CarrierOps;
use crate::decimal::DecimalFp;
use crate::div;
use crate::float::{Float, FloatBits};
use crate::log;
use crate::policy::{DecimalRoundingKind, Interval, NearestKind, Policy, RoundingMode};
use crate::policy::{CachePolicy, DecimalRoundingPolicy, TrailingZeroPolicy};
use crate::policy::{BinaryRoundingPolicy, InputValidationPolicy, SignPolicy};
use crate::policy::{
  ResolveBinaryRounding, ResolveCache, ResolveDecimalRounding, ResolveInputValidation,
  ResolveSign, ResolveTrailingZero,
};

/// Converts a finite nonzero float to its shortest decimal representation
/// under the default policies (propagated sign, trailing zeros removed,
/// round-to-nearest-even binary rounding, ties to even decimals).
///
/// ```
/// let d = fpconv::to_shortest_decimal(0.3f64);
/// assert_eq!((d.significand, d.exponent, d.is_negative), (3, -1, false));
/// ```
pub fn to_shortest_decimal<F: Float>(x: F) -> DecimalFp<F> {
  to_shortest_decimal_with(x, Policy::new())
}

/// As [`to_shortest_decimal`], with explicit policies.
pub fn to_shortest_decimal_with<F, S, Z, R, D, C, V>(
  x: F,
  _policy: Policy<S, Z, R, D, C, V>,
) -> DecimalFp<F>
where
  F: Float,
  S: ResolveSign,
  Z: ResolveTrailingZero,
  R: ResolveBinaryRounding,
  D: ResolveDecimalRounding,
  C: ResolveCache,
  V: ResolveInputValidation,
{
  let bits = FloatBits::new(x);
  <V::Policy>::validate_input(bits);

  let mut ret = DecimalFp::new(<F::Carrier>::ZERO, 0);
  <S::Policy>::binary_to_decimal(bits, &mut ret);

  match <R::Policy>::mode(bits) {
    RoundingMode::Nearest(kind) => {
      compute_nearest::<F, Z::Policy, D::Policy, C::Policy>(bits, kind, &mut ret);
    }
    RoundingMode::LeftClosedDirected => {
      compute_left_closed_directed::<F, Z::Policy, C::Policy>(bits, &mut ret);
    }
    RoundingMode::RightClosedDirected => {
      compute_right_closed_directed::<F, Z::Policy, C::Policy>(bits, &mut ret);
    }
  }
  ret
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum IntegerCheck {
  /// The exact product came from `fc +- 1/2` (an interval endpoint).
  FcPmHalf,
  /// The exact product came from `fc` itself.
  Fc,
}

/// Whether `two_f * 2^exponent * 10^(-minus_k) / 2` is an integer, decided
/// by exponent-range tests and, in the leftover band, divisibility of
/// `two_f` by the relevant power of 5 or 2.
fn is_product_integer<F: Float>(
  case: IntegerCheck,
  two_f: F::Carrier,
  exponent: i32,
  minus_k: i32,
) -> bool {
  let kappa = F::KAPPA as i32;
  let max_power_of_factor_of_5 = log::floor_log5_pow2(F::SIGNIFICAND_BITS as i32 + 2);
  let divisibility_check_by_5_threshold =
    log::floor_log2_pow10(max_power_of_factor_of_5 + kappa + 1);

  match case {
    IntegerCheck::FcPmHalf => {
      let lower_threshold = -kappa - log::floor_log5_pow2(kappa);
      let upper_threshold = log::floor_log2_pow10(kappa + 1);
      if exponent < lower_threshold {
        false
      } else if exponent <= upper_threshold {
        // The exponents of both 2 and 5 are nonnegative.
        true
      } else if exponent > divisibility_check_by_5_threshold {
        false
      } else {
        div::divisible_by_power_of_5(two_f, minus_k as u32)
      }
    }
    IntegerCheck::Fc => {
      let lower_threshold = -kappa - 1 - log::floor_log5_pow2(kappa + 1);
      let upper_threshold = log::floor_log2_pow10(kappa + 1);
      if exponent > divisibility_check_by_5_threshold {
        false
      } else if exponent > upper_threshold {
        div::divisible_by_power_of_5(two_f, minus_k as u32)
      } else if exponent >= lower_threshold {
        true
      } else {
        div::divisible_by_power_of_2(two_f, (minus_k - exponent + 1) as u32)
      }
    }
  }
}

/// The round-to-nearest search. Precondition: `bits` is finite and nonzero.
fn compute_nearest<F, Z, D, C>(
  bits: FloatBits<F>,
  kind: NearestKind,
  ret: &mut DecimalFp<F>,
) where
  F: Float,
  Z: TrailingZeroPolicy,
  D: DecimalRoundingPolicy,
  C: CachePolicy,
{
  debug_assert!(bits.is_finite() && bits.is_nonzero());

  let kappa = F::KAPPA as i32;
  let big_divisor = 10u32.pow(F::KAPPA + 1);
  let small_divisor = 10u32.pow(F::KAPPA);

  let mut significand = bits.extract_significand_bits();
  let exponent_bits = bits.extract_exponent_bits();
  let exponent;

  if exponent_bits != 0 {
    exponent = exponent_bits as i32 + F::EXPONENT_BIAS - F::SIGNIFICAND_BITS as i32;

    // A power of two sits closer to its lower neighbor; that shorter
    // interval has its own search.
    if significand == <F::Carrier>::ZERO {
      shorter_interval_case::<F, Z, D, C>(ret, exponent, kind.interval_shorter(bits));
      return;
    }
    significand |= <F::Carrier>::ONE << F::SIGNIFICAND_BITS;
  } else {
    // Subnormal; the interval is always regular.
    exponent = F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32;
  }

  let interval = kind.interval_normal(bits);

  // Compute k and beta.
  let minus_k = log::floor_log10_pow2(exponent) - kappa;
  let cache = C::get_cache::<F>(-minus_k);
  let beta_minus_1 = exponent + log::floor_log2_pow10(-minus_k);

  // Compute z and delta; 10^kappa <= delta < 10^(kappa+1).
  let deltai = F::compute_delta(cache, beta_minus_1);
  let two_fc = significand << 1;
  let two_fr = two_fc | <F::Carrier>::ONE;
  let zi = F::compute_mul(two_fr << beta_minus_1 as u32, cache);

  // Try the larger divisor first.
  ret.significand = F::divide_by_big_divisor(zi);
  let mut r = (zi - <F::Carrier>::from_u32(big_divisor) * ret.significand).low_u32();

  let fell_through = 'big_divisor: {
    if r > deltai {
      break 'big_divisor true;
    }
    if r < deltai {
      // Exclude the right endpoint if necessary.
      if r == 0
        && !interval.include_right
        && is_product_integer::<F>(IntegerCheck::FcPmHalf, two_fr, exponent, minus_k)
      {
        if D::KIND == DecimalRoundingKind::DoNotCare {
          ret.significand = ret.significand * <F::Carrier>::from_u32(10) - <F::Carrier>::ONE;
          ret.exponent = minus_k + kappa;
          return;
        }
        ret.significand = ret.significand - <F::Carrier>::ONE;
        r = big_divisor;
        break 'big_divisor true;
      }
    } else {
      // r == delta; compare the fractional parts. The conditions are
      // checked out of order to take advantage of short-circuiting.
      let two_fl = two_fc - <F::Carrier>::ONE;
      if (!interval.include_left
        || !is_product_integer::<F>(IntegerCheck::FcPmHalf, two_fl, exponent, minus_k))
        && !F::compute_mul_parity(two_fl, cache, beta_minus_1)
      {
        break 'big_divisor true;
      }
    }
    false
  };

  if !fell_through {
    ret.exponent = minus_k + kappa + 1;
    Z::on_trailing_zeros(ret);
    return;
  }

  // Find the significand with the smaller divisor.
  Z::no_trailing_zeros(ret);
  ret.significand = ret.significand * <F::Carrier>::from_u32(10);
  ret.exponent = minus_k + kappa;

  let mask = (1u32 << F::KAPPA) - 1;

  if D::KIND == DecimalRoundingKind::DoNotCare {
    // Normally adding r / 10^kappa would finish, except when that lands
    // exactly on an excluded right endpoint.
    if !interval.include_right {
      // Is r divisible by 2^kappa?
      if r & mask == 0 {
        r >>= F::KAPPA;

        // Is r divisible by 5^kappa?
        if F::check_divisibility_and_divide_by_pow5_kappa(&mut r)
          && is_product_integer::<F>(IntegerCheck::FcPmHalf, two_fr, exponent, minus_k)
        {
          // The endpoint itself is excluded.
          ret.significand = ret.significand + <F::Carrier>::from_u32(r - 1);
        } else {
          ret.significand = ret.significand + <F::Carrier>::from_u32(r);
        }
      } else {
        ret.significand =
          ret.significand + <F::Carrier>::from_u32(F::small_division_by_small_divisor(r));
      }
    } else {
      ret.significand =
        ret.significand + <F::Carrier>::from_u32(F::small_division_by_small_divisor(r));
    }
    return;
  }

  let mut dist = r - deltai / 2 + small_divisor / 2;

  // Is dist divisible by 2^kappa?
  if dist & mask == 0 {
    let approx_y_parity = (dist ^ (small_divisor / 2)) & 1 != 0;
    dist >>= F::KAPPA;

    // Is dist divisible by 5^kappa?
    if F::check_divisibility_and_divide_by_pow5_kappa(&mut dist) {
      ret.significand = ret.significand + <F::Carrier>::from_u32(dist);

      // Check z^(f) >= epsilon^(f). There are only two candidates, which
      // differ by one, so parity of the product decides; z and r share
      // parity because the divisor is even.
      if F::compute_mul_parity(two_fc, cache, beta_minus_1) != approx_y_parity {
        ret.significand = ret.significand - <F::Carrier>::ONE;
      } else {
        // A tie happens exactly when the product is an integer.
        if D::KIND != DecimalRoundingKind::AwayFromZero
          && is_product_integer::<F>(IntegerCheck::Fc, two_fc, exponent, minus_k)
        {
          D::break_rounding_tie(&mut ret.significand);
        }
      }
    } else {
      ret.significand = ret.significand + <F::Carrier>::from_u32(dist);
    }
  } else {
    ret.significand =
      ret.significand + <F::Carrier>::from_u32(F::small_division_by_small_divisor(dist));
  }
}

/// The shorter-interval search around a power of two.
fn shorter_interval_case<F, Z, D, C>(
  ret: &mut DecimalFp<F>,
  exponent: i32,
  interval: Interval,
) where
  F: Float,
  Z: TrailingZeroPolicy,
  D: DecimalRoundingPolicy,
  C: CachePolicy,
{
  // Compute k and beta.
  let minus_k = log::floor_log10_pow2_minus_log10_4_over_3(exponent);
  let beta_minus_1 = exponent + log::floor_log2_pow10(-minus_k);

  // Compute the left and right endpoints.
  let cache = C::get_cache::<F>(-minus_k);
  let mut xi = F::compute_left_endpoint_shorter(cache, beta_minus_1);
  let mut zi = F::compute_right_endpoint_shorter(cache, beta_minus_1);

  // If the right endpoint is an excluded integer, shrink past it.
  if !interval.include_right && is_right_endpoint_integer_shorter_interval::<F>(exponent) {
    zi = zi - <F::Carrier>::ONE;
  }
  // If the left endpoint is excluded or not an integer, grow past it.
  if !interval.include_left || !is_left_endpoint_integer_shorter_interval::<F>(exponent) {
    xi = xi + <F::Carrier>::ONE;
  }

  // Try bigger divisor.
  ret.significand = zi / <F::Carrier>::from_u32(10);

  if ret.significand * <F::Carrier>::from_u32(10) >= xi {
    ret.exponent = minus_k + 1;
    Z::on_trailing_zeros(ret);
    return;
  }

  // Otherwise, compute the round-up of y.
  Z::no_trailing_zeros(ret);
  ret.significand = F::compute_round_up_shorter(cache, beta_minus_1);
  ret.exponent = minus_k;

  // When a tie occurs, choose per the decimal rounding rule. The tie is
  // possible only inside a narrow exponent band.
  let tie_lower =
    -log::floor_log5_pow2_minus_log5_3(F::SIGNIFICAND_BITS as i32 + 4) - 2
      - F::SIGNIFICAND_BITS as i32;
  let tie_upper =
    -log::floor_log5_pow2(F::SIGNIFICAND_BITS as i32 + 2) - 2 - F::SIGNIFICAND_BITS as i32;
  if D::KIND != DecimalRoundingKind::DoNotCare
    && D::KIND != DecimalRoundingKind::AwayFromZero
    && exponent >= tie_lower
    && exponent <= tie_upper
  {
    D::break_rounding_tie(&mut ret.significand);
  } else if ret.significand < xi {
    ret.significand = ret.significand + <F::Carrier>::ONE;
  }
}

/// Counts factors of 5 of `n`.
const fn count_factors_of_5(mut n: u64) -> i32 {
  let mut count = 0;
  while n % 5 == 0 {
    n /= 5;
    count += 1;
  }
  count
}

/// `floor(log2(n))` by repeated halving; also fine with `n == 0` (gives -1).
const fn floor_log2_u64(mut n: u64) -> i32 {
  let mut count = -1;
  while n != 0 {
    count += 1;
    n >>= 1;
  }
  count
}

const fn pow_u64(base: u64, exp: i32) -> u64 {
  let mut p = 1;
  let mut i = 0;
  while i < exp {
    p *= base;
    i += 1;
  }
  p
}

fn is_left_endpoint_integer_shorter_interval<F: Float>(exponent: i32) -> bool {
  let factors =
    count_factors_of_5((1u64 << (F::SIGNIFICAND_BITS + 2)) - 1) + 1;
  let upper = 2 + floor_log2_u64(pow_u64(10, factors) / 3);
  exponent >= 2 && exponent <= upper
}

fn is_right_endpoint_integer_shorter_interval<F: Float>(exponent: i32) -> bool {
  let factors =
    count_factors_of_5((1u64 << (F::SIGNIFICAND_BITS + 1)) + 1) + 1;
  let upper = 2 + floor_log2_u64(pow_u64(10, factors) / 3);
  exponent >= 0 && exponent <= upper
}

/// The directed search when the value owns `[v, next)`: find the smallest
/// decimal at or above the left endpoint.
fn compute_left_closed_directed<F, Z, C>(bits: FloatBits<F>, ret: &mut DecimalFp<F>)
where
  F: Float,
  Z: TrailingZeroPolicy,
  C: CachePolicy,
{
  debug_assert!(bits.is_finite() && bits.is_nonzero());

  let kappa = F::KAPPA as i32;
  let big_divisor = 10u32.pow(F::KAPPA + 1);

  let mut significand = bits.extract_significand_bits();
  let exponent_bits = bits.extract_exponent_bits();
  let exponent;

  if exponent_bits != 0 {
    exponent = exponent_bits as i32 + F::EXPONENT_BIAS - F::SIGNIFICAND_BITS as i32;
    significand |= <F::Carrier>::ONE << F::SIGNIFICAND_BITS;
  } else {
    exponent = F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32;
  }

  // Compute k and beta.
  let minus_k = log::floor_log10_pow2(exponent) - kappa;
  let cache = C::get_cache::<F>(-minus_k);
  let beta = exponent + log::floor_log2_pow10(-minus_k) + 1;

  // Compute x and delta; 10^kappa <= delta < 10^(kappa+1).
  let deltai = F::compute_delta(cache, beta - 1);
  let mut xi = F::compute_mul(significand << beta as u32, cache);

  if !is_product_integer::<F>(IntegerCheck::Fc, significand, exponent + 1, minus_k) {
    xi = xi + <F::Carrier>::ONE;
  }

  // Try the larger divisor first.
  ret.significand = F::divide_by_big_divisor(xi);
  let mut r = (xi - <F::Carrier>::from_u32(big_divisor) * ret.significand).low_u32();

  if r != 0 {
    ret.significand = ret.significand + <F::Carrier>::ONE;
    r = big_divisor - r;
  }

  let fell_through = 'big_divisor: {
    if r > deltai {
      break 'big_divisor true;
    }
    if r == deltai {
      // Compare the fractional parts.
      let next = significand + <F::Carrier>::ONE;
      if F::compute_mul_parity(next, cache, beta)
        || is_product_integer::<F>(IntegerCheck::Fc, next, exponent + 1, minus_k)
      {
        break 'big_divisor true;
      }
    }
    false
  };

  if !fell_through {
    // The ceiling is inside, so we are done.
    ret.exponent = minus_k + kappa + 1;
    Z::on_trailing_zeros(ret);
    return;
  }

  ret.significand = ret.significand * <F::Carrier>::from_u32(10)
    - <F::Carrier>::from_u32(F::small_division_by_small_divisor(r));
  ret.exponent = minus_k + kappa;
  Z::no_trailing_zeros(ret);
}

/// The directed search when the value owns `(prev, v]`: find the largest
/// decimal at or below the right endpoint.
fn compute_right_closed_directed<F, Z, C>(bits: FloatBits<F>, ret: &mut DecimalFp<F>)
where
  F: Float,
  Z: TrailingZeroPolicy,
  C: CachePolicy,
{
  debug_assert!(bits.is_finite() && bits.is_nonzero());

  let kappa = F::KAPPA as i32;
  let big_divisor = 10u32.pow(F::KAPPA + 1);

  let mut significand = bits.extract_significand_bits();
  let exponent_bits = bits.extract_exponent_bits();
  let exponent;
  let mut closer_boundary = false;

  if exponent_bits != 0 {
    exponent = exponent_bits as i32 + F::EXPONENT_BIAS - F::SIGNIFICAND_BITS as i32;
    closer_boundary = significand == <F::Carrier>::ZERO;
    significand |= <F::Carrier>::ONE << F::SIGNIFICAND_BITS;
  } else {
    exponent = F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32;
  }

  // Compute k and beta.
  let minus_k = log::floor_log10_pow2(exponent - closer_boundary as i32) - kappa;
  let cache = C::get_cache::<F>(-minus_k);
  let beta = exponent + log::floor_log2_pow10(-minus_k) + 1;

  // Compute z and delta.
  let deltai = if closer_boundary {
    F::compute_delta(cache, beta - 2)
  } else {
    F::compute_delta(cache, beta - 1)
  };
  let zi = F::compute_mul(significand << beta as u32, cache);

  // Try the larger divisor first.
  ret.significand = F::divide_by_big_divisor(zi);
  let r = (zi - <F::Carrier>::from_u32(big_divisor) * ret.significand).low_u32();

  let fell_through = 'big_divisor: {
    if r > deltai {
      break 'big_divisor true;
    }
    if r == deltai {
      // Compare the fractional parts.
      let parity = if closer_boundary {
        F::compute_mul_parity((significand << 1) - <F::Carrier>::ONE, cache, beta - 1)
      } else {
        F::compute_mul_parity(significand - <F::Carrier>::ONE, cache, beta)
      };
      if !parity {
        break 'big_divisor true;
      }
    }
    false
  };

  if !fell_through {
    // The floor is inside, so we are done.
    ret.exponent = minus_k + kappa + 1;
    Z::on_trailing_zeros(ret);
    return;
  }

  ret.significand = ret.significand * <F::Carrier>::from_u32(10)
    + <F::Carrier>::from_u32(F::small_division_by_small_divisor(r));
  ret.exponent = minus_k + kappa;
  Z::no_trailing_zeros(ret);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::policy::{binary_rounding, cache, decimal_rounding, sign, trailing_zero};
  use proptest::prelude::*;

  fn shortest_f64(x: f64) -> (u64, i32, bool) {
    let d = to_shortest_decimal(x);
    (d.significand, d.exponent, d.is_negative)
  }

  fn shortest_f32(x: f32) -> (u32, i32, bool) {
    let d = to_shortest_decimal(x);
    (d.significand, d.exponent, d.is_negative)
  }

  #[test]
  fn small_f64() {
    assert_eq!(shortest_f64(123.456), (123456, -3, false));
    assert_eq!(shortest_f64(0.1234), (1234, -4, false));
    assert_eq!(shortest_f64(core::f64::consts::PI), (3_141592653589793, -15, false));
    assert_eq!(shortest_f64(core::f64::consts::E), (2_718281828459045, -15, false));
    assert_eq!(shortest_f64(core::f64::consts::LN_2), (6931471805599453, -16, false));
    assert_eq!(shortest_f64(-123.456), (123456, -3, true));
  }

  #[test]
  fn integers_f64() {
    assert_eq!(shortest_f64(1.0), (1, 0, false));
    assert_eq!(shortest_f64(123456.0), (123456, 0, false));
    assert_eq!(shortest_f64(123000123000.0), (123000123, 3, false));
  }

  #[test]
  fn extremes_f64() {
    assert_eq!(shortest_f64(5e-324), (5, -324, false));
    assert_eq!(shortest_f64(f64::MIN_POSITIVE), (22250738585072014, -324, false));
    assert_eq!(shortest_f64(f64::MAX), (17976931348623157, 292, false));
  }

  #[test]
  fn small_f32() {
    assert_eq!(shortest_f32(1.0), (1, 0, false));
    assert_eq!(shortest_f32(0.3), (3, -1, false));
    assert_eq!(shortest_f32(3.4028235e38), (34028235, 31, false));
    assert_eq!(shortest_f32(1.1754944e-38), (11754944, -45, false));
    assert_eq!(shortest_f32(1e-45), (1, -45, false));
  }

  #[test]
  fn powers_of_two() {
    // All take the shorter-interval path.
    assert_eq!(shortest_f64(2.0), (2, 0, false));
    assert_eq!(shortest_f64(0.5), (5, -1, false));
    assert_eq!(shortest_f64(1024.0), (1024, 0, false));
    assert_eq!(shortest_f64(2f64.powi(100)), (12676506002282294, 14, false));
    assert_eq!(shortest_f64(2f64.powi(-100)), (7888609052210118, -46, false));
  }

  #[test]
  fn sign_ignore() {
    let d = to_shortest_decimal_with(-1.5f64, Policy::new().sign(sign::Ignore));
    assert_eq!((d.significand, d.exponent, d.is_negative), (15, -1, false));
  }

  #[test]
  fn trailing_zero_policies() {
    let d = to_shortest_decimal_with(100.0f64, Policy::new().trailing_zero(trailing_zero::Allow));
    // The raw significand keeps its trailing zeros but the value is intact.
    assert_eq!(d.significand % 10, 0);
    let parsed: f64 = format!("{}e{}", d.significand, d.exponent).parse().unwrap();
    assert_eq!(parsed, 100.0);

    let d = to_shortest_decimal_with(100.0f64, Policy::new().trailing_zero(trailing_zero::Remove));
    assert_eq!((d.significand, d.exponent), (1, 2));

    let d = to_shortest_decimal_with(100.0f64, Policy::new().trailing_zero(trailing_zero::Report));
    assert!(d.may_have_trailing_zeros);
    let d = to_shortest_decimal_with(0.1234f64, Policy::new().trailing_zero(trailing_zero::Report));
    assert!(!d.may_have_trailing_zeros);
  }

  #[test]
  fn directed_rounding() {
    // 1.5 is exact, so truncation keeps it.
    let p = Policy::new().binary_rounding(binary_rounding::TowardZero);
    let d = to_shortest_decimal_with(1.5f64, p);
    assert_eq!((d.significand, d.exponent), (15, -1));

    // The bits of 0.1 denote a value slightly above the decimal 0.1, so
    // truncation needs every digit, while rounding up reaches 0.1 itself.
    let p = Policy::new().binary_rounding(binary_rounding::TowardZero);
    let d = to_shortest_decimal_with(0.1f64, p);
    assert_eq!((d.significand, d.exponent), (10000000000000001, -17));

    let p = Policy::new().binary_rounding(binary_rounding::TowardPlusInfinity);
    let d = to_shortest_decimal_with(0.1f64, p);
    assert_eq!((d.significand, d.exponent), (1, -1));
  }

  #[test]
  fn decimal_rounding_do_not_care_roundtrips() {
    let p = Policy::new().decimal_rounding(decimal_rounding::DoNotCare);
    for x in [0.1f64, 0.3, 1.0, 123.456, 5e-324, f64::MAX, 2f64.powi(-77)] {
      let d = to_shortest_decimal_with(x, p);
      let parsed: f64 = format!("{}e{}", d.significand, d.exponent).parse().unwrap();
      assert_eq!(parsed, x, "x = {x:?}");
    }
  }

  #[test]
  fn compact_cache_agrees() {
    let p = Policy::new().cache(cache::Compact);
    for x in [0.1f64, 0.3, 1.0, 123.456, 5e-324, f64::MIN_POSITIVE, f64::MAX, 1e300, 1e-300] {
      let fast = to_shortest_decimal(x);
      let compact = to_shortest_decimal_with(x, p);
      assert_eq!(fast, compact, "x = {x:?}");
    }
  }

  #[test]
  fn roundtrip_f32_sample() {
    // A denser exhaustive run lives in tests/roundtrip.rs; this is the smoke
    // version touching every exponent once.
    for raw_exponent in 0..=254u32 {
      let bits = (raw_exponent << 23) | 0x2aaaaa;
      let x = f32::from_bits(bits);
      let d = to_shortest_decimal(x);
      let parsed: f32 = format!("{}e{}", d.significand, d.exponent).parse().unwrap();
      assert_eq!(parsed, x, "bits = {bits:#x}");
    }
  }

  const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x1000 } else { 0x4_0000 };
  proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn roundtrip_f64_proptest(bits in any::<u64>()) {
      let x = f64::from_bits(bits);
      if x.is_finite() && x != 0.0 {
        let d = to_shortest_decimal(x);
        let rendered = format!(
          "{}{}e{}",
          if d.is_negative { "-" } else { "" },
          d.significand,
          d.exponent,
        );
        let parsed: f64 = rendered.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), x.to_bits());
      }
    }

    #[test]
    fn roundtrip_f32_proptest(bits in any::<u32>()) {
      let x = f32::from_bits(bits);
      if x.is_finite() && x != 0.0 {
        let d = to_shortest_decimal(x);
        let rendered = format!(
          "{}{}e{}",
          if d.is_negative { "-" } else { "" },
          d.significand,
          d.exponent,
        );
        let parsed: f32 = rendered.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), x.to_bits());
      }
    }

    #[test]
    fn compact_equals_fast_proptest(bits in any::<u64>()) {
      let x = f64::from_bits(bits);
      if x.is_finite() && x != 0.0 {
        let fast = to_shortest_decimal(x);
        let compact = to_shortest_decimal_with(x, Policy::new().cache(cache::Compact));
        prop_assert_eq!(fast, compact);
      }
    }
  }
}
