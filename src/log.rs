//! Fixed-point evaluation of `floor(e * log_b(a) - s)` for the handful of
//! (a, b, s) combinations the conversion algorithms need for exponent
//! bookkeeping.
//!
//! Each constant is a 64-bit truncation of the fractional part of the
//! respective logarithm, together with a shift amount chosen so that the
//! computation is exact over the documented input range (verified against
//! exact rational arithmetic by `gen-tables/generate.py`).

const LOG10_2_FRACTIONAL_DIGITS: u64 = 0x4d10_4d42_7de7_fbcc;
const LOG10_4_OVER_3_FRACTIONAL_DIGITS: u64 = 0x1ffb_fc2b_bc78_0375;
const FLOOR_LOG10_POW2_SHIFT: u32 = 22;

const LOG10_5_FRACTIONAL_DIGITS: u64 = 0xb2ef_b2bd_8218_0433;
const FLOOR_LOG10_POW5_SHIFT: u32 = 20;

const LOG2_10_FRACTIONAL_DIGITS: u64 = 0x5269_e12f_346e_2bf9;
const FLOOR_LOG2_POW10_SHIFT: u32 = 19;

const LOG5_2_FRACTIONAL_DIGITS: u64 = 0x6e40_d1a4_143d_cb94;
const LOG5_3_FRACTIONAL_DIGITS: u64 = 0xaebf_4791_5d44_3b24;
const FLOOR_LOG5_POW2_SHIFT: u32 = 20;

const fn floor_shift(integer_part: u32, fractional_digits: u64, shift: u32) -> i32 {
  ((integer_part << shift) | (fractional_digits >> (64 - shift)) as u32) as i32
}

/// `floor(e * c - s)` with `c` and `s` in fixed point.
const fn compute(
  e: i32,
  c_integer: u32,
  c_fractional: u64,
  shift: u32,
  max_e: i32,
  s_fractional: u64,
) -> i32 {
  debug_assert!(e <= max_e && e >= -max_e);
  let c = floor_shift(c_integer, c_fractional, shift);
  let s = floor_shift(0, s_fractional, shift);
  (e.wrapping_mul(c) - s) >> shift
}

/// `floor(log10(2^e))`; exact for |e| <= 1700.
pub(crate) const fn floor_log10_pow2(e: i32) -> i32 {
  compute(e, 0, LOG10_2_FRACTIONAL_DIGITS, FLOOR_LOG10_POW2_SHIFT, 1700, 0)
}

/// `floor(log10(5^e))`; exact for |e| <= 2620.
pub(crate) const fn floor_log10_pow5(e: i32) -> i32 {
  compute(e, 0, LOG10_5_FRACTIONAL_DIGITS, FLOOR_LOG10_POW5_SHIFT, 2620, 0)
}

/// `floor(log2(5^e))`; exact for |e| <= 1764.
pub(crate) const fn floor_log2_pow5(e: i32) -> i32 {
  compute(e, 2, LOG2_10_FRACTIONAL_DIGITS, FLOOR_LOG2_POW10_SHIFT, 1764, 0)
}

/// `floor(log2(10^e))`; exact for |e| <= 1233.
pub(crate) const fn floor_log2_pow10(e: i32) -> i32 {
  compute(e, 3, LOG2_10_FRACTIONAL_DIGITS, FLOOR_LOG2_POW10_SHIFT, 1233, 0)
}

/// `floor(log5(2^e))`; exact for |e| <= 1492.
pub(crate) const fn floor_log5_pow2(e: i32) -> i32 {
  compute(e, 0, LOG5_2_FRACTIONAL_DIGITS, FLOOR_LOG5_POW2_SHIFT, 1492, 0)
}

/// `floor(log5(2^e) - log5(3))`; exact for |e| <= 2427.
pub(crate) const fn floor_log5_pow2_minus_log5_3(e: i32) -> i32 {
  compute(e, 0, LOG5_2_FRACTIONAL_DIGITS, FLOOR_LOG5_POW2_SHIFT, 2427,
    LOG5_3_FRACTIONAL_DIGITS)
}

/// `floor(log10(2^e) - log10(4/3))`; exact for |e| <= 1700.
pub(crate) const fn floor_log10_pow2_minus_log10_4_over_3(e: i32) -> i32 {
  compute(e, 0, LOG10_2_FRACTIONAL_DIGITS, FLOOR_LOG10_POW2_SHIFT, 1700,
    LOG10_4_OVER_3_FRACTIONAL_DIGITS)
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Exact `floor(log_base(a^e / t))` using big rationals.
  fn floor_log_exact(base: u32, a: u32, e: i32, t_num: u32, t_den: u32) -> i32 {
    use malachite::base::num::arithmetic::traits::Pow;
    use malachite::rational::Rational;
    let val = Rational::from(a).pow(i64::from(e))
      / Rational::from_unsigneds(t_num, t_den);
    let mut f = (f64::from(e) * f64::from(a).log(f64::from(base))
      - (f64::from(t_num) / f64::from(t_den)).log(f64::from(base))) as i32;
    while Rational::from(base).pow(i64::from(f)) > val {
      f -= 1;
    }
    while Rational::from(base).pow(i64::from(f) + 1) <= val {
      f += 1;
    }
    f
  }

  #[test]
  fn exact_over_documented_ranges() {
    // The full ranges are covered by the generator; spot-wider strides here
    // keep the test fast while still crossing every carry boundary class.
    let cases: &[(&dyn Fn(i32) -> i32, u32, u32, u32, u32, i32)] = &[
      (&floor_log10_pow2, 10, 2, 1, 1, 1700),
      (&floor_log10_pow5, 10, 5, 1, 1, 2620),
      (&floor_log2_pow5, 2, 5, 1, 1, 1764),
      (&floor_log2_pow10, 2, 10, 1, 1, 1233),
      (&floor_log5_pow2, 5, 2, 1, 1, 1492),
      (&floor_log5_pow2_minus_log5_3, 5, 2, 3, 1, 2427),
      (&floor_log10_pow2_minus_log10_4_over_3, 10, 2, 4, 3, 1700),
    ];
    for &(f, base, a, t_num, t_den, max_e) in cases {
      for e in (-max_e..=max_e).step_by(7) {
        assert_eq!(f(e), floor_log_exact(base, a, e, t_num, t_den), "e = {e}");
      }
      assert_eq!(f(max_e), floor_log_exact(base, a, max_e, t_num, t_den));
      assert_eq!(f(-max_e), floor_log_exact(base, a, -max_e, t_num, t_den));
    }
  }

  #[test]
  fn known_values() {
    assert_eq!(floor_log10_pow2(10), 3);
    assert_eq!(floor_log10_pow2(-10), -4);
    assert_eq!(floor_log2_pow10(3), 9);
    assert_eq!(floor_log2_pow10(17), 56);
    assert_eq!(floor_log10_pow2(-1074), -324);
    assert_eq!(floor_log10_pow2(1024), 308);
    assert_eq!(floor_log5_pow2(54), 23);
    assert_eq!(floor_log10_pow2_minus_log10_4_over_3(0), -1);
  }
}
