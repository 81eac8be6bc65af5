//! The decimal floating point record produced by the shortest-decimal search
//! and consumed by the decimal-to-binary conversion.

use crate::float::Float;

/// A decimal representation `(-1)^is_negative * significand * 10^exponent` of
/// a finite float.
///
/// For the shortest-decimal output the significand is the smallest integer
/// such that reading the value back under the chosen binary rounding policy
/// recovers the original float.
///
/// `is_negative` is populated only under the sign-propagating policy and
/// `may_have_trailing_zeros` only under the reporting trailing-zero policy;
/// both stay `false` otherwise.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct DecimalFp<F: Float> {
  pub significand: F::Carrier,
  pub exponent: i32,
  pub is_negative: bool,
  pub may_have_trailing_zeros: bool,
}

impl<F: Float> DecimalFp<F> {
  /// An unsigned decimal with no flags set.
  #[inline]
  pub fn new(significand: F::Carrier, exponent: i32) -> Self {
    DecimalFp { significand, exponent, is_negative: false, may_have_trailing_zeros: false }
  }
}

impl<F: Float> core::fmt::Debug for DecimalFp<F> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("DecimalFp")
      .field("significand", &self.significand)
      .field("exponent", &self.exponent)
      .field("is_negative", &self.is_negative)
      .field("may_have_trailing_zeros", &self.may_have_trailing_zeros)
      .finish()
  }
}
