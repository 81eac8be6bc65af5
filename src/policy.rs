//! Compile-time composed conversion policies.
//!
//! Every orthogonal choice the conversions offer is an *axis* with a fixed
//! menu of zero-sized types: the sign treatment, what happens to trailing
//! zeros, the binary (input) rounding mode, the decimal (output) rounding
//! mode, the table flavor, and input validation. A caller starts from
//! [`Policy::new`] and fixes any subset of axes:
//!
//! ```
//! use fpconv::policy::{Policy, sign, binary_rounding};
//!
//! let p = Policy::new()
//!   .sign(sign::Ignore)
//!   .binary_rounding(binary_rounding::TowardZero);
//! let d = fpconv::to_shortest_decimal_with(1.5f64, p);
//! assert_eq!((d.significand, d.exponent), (15, -1));
//! ```
//!
//! Each axis setter exists only while that axis is still unset, so fixing the
//! same axis twice does not compile, and a value that belongs to no axis is
//! rejected by the setter bounds. Unset axes resolve to the documented
//! defaults (propagate the sign, remove trailing zeros, round to nearest with
//! ties to even on both sides, direct table, assert finiteness).

use core::marker::PhantomData;

use crate::carrier::Sealed as CarrierOps;
use crate::decimal::DecimalFp;
use crate::float::{Float, FloatBits};

/// Whether each endpoint of a rounding interval belongs to the interval.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Interval {
  pub include_left: bool,
  pub include_right: bool,
}

impl Interval {
  pub(crate) const CLOSED: Interval = Interval { include_left: true, include_right: true };
  pub(crate) const OPEN: Interval = Interval { include_left: false, include_right: false };
  pub(crate) const LEFT_CLOSED: Interval = Interval { include_left: true, include_right: false };
  pub(crate) const RIGHT_CLOSED: Interval = Interval { include_left: false, include_right: true };

  #[inline]
  pub(crate) const fn symmetric(closed: bool) -> Interval {
    Interval { include_left: closed, include_right: closed }
  }

  #[inline]
  pub(crate) const fn asymmetric(left_closed: bool) -> Interval {
    Interval { include_left: left_closed, include_right: !left_closed }
  }
}

/// How the interval endpoints of a to-nearest mode are chosen per input.
#[doc(hidden)]
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum NearestKind {
  ToEven,
  ToOdd,
  TowardPlusInfinity,
  TowardMinusInfinity,
  TowardZero,
  AwayFromZero,
  AlwaysClosed,
  AlwaysOpen,
}

impl NearestKind {
  /// Interval type for the ordinary case.
  pub(crate) fn interval_normal<F: Float>(self, bits: FloatBits<F>) -> Interval {
    match self {
      NearestKind::ToEven => Interval::symmetric(!bits.u.get_lsb()),
      NearestKind::ToOdd => Interval::symmetric(bits.u.get_lsb()),
      NearestKind::TowardPlusInfinity => Interval::asymmetric(!bits.is_negative()),
      NearestKind::TowardMinusInfinity => Interval::asymmetric(bits.is_negative()),
      NearestKind::TowardZero => Interval::RIGHT_CLOSED,
      NearestKind::AwayFromZero => Interval::LEFT_CLOSED,
      NearestKind::AlwaysClosed => Interval::CLOSED,
      NearestKind::AlwaysOpen => Interval::OPEN,
    }
  }

  /// Interval type for the shorter-interval case (a power-of-two
  /// significand, whose lower neighbor is twice as close).
  pub(crate) fn interval_shorter<F: Float>(self, bits: FloatBits<F>) -> Interval {
    match self {
      NearestKind::ToEven | NearestKind::ToOdd => Interval::CLOSED,
      NearestKind::TowardPlusInfinity => Interval::asymmetric(!bits.is_negative()),
      NearestKind::TowardMinusInfinity => Interval::asymmetric(bits.is_negative()),
      NearestKind::TowardZero => Interval::RIGHT_CLOSED,
      NearestKind::AwayFromZero => Interval::LEFT_CLOSED,
      NearestKind::AlwaysClosed => Interval::CLOSED,
      NearestKind::AlwaysOpen => Interval::OPEN,
    }
  }
}

/// The resolved rounding behavior for one particular input.
#[doc(hidden)]
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum RoundingMode {
  Nearest(NearestKind),
  /// Round toward zero: the value owns `[v, next)`.
  LeftClosedDirected,
  /// Round away from zero: the value owns `(prev, v]`.
  RightClosedDirected,
}

/// Decimal tie-breaking flavors consulted by the small-divisor branch of the
/// shortest-decimal search.
#[doc(hidden)]
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum DecimalRoundingKind {
  DoNotCare,
  ToEven,
  ToOdd,
  AwayFromZero,
  TowardZero,
}

// ---------------------------------------------------------------------------
// Axis traits
// ---------------------------------------------------------------------------

mod sealed {
  pub trait Sealed {}
}

/// Sign treatment of `binary -> decimal` and `decimal -> binary` conversions.
pub trait SignPolicy: sealed::Sealed {
  #[doc(hidden)]
  fn binary_to_decimal<F: Float>(bits: FloatBits<F>, fp: &mut DecimalFp<F>);
  #[doc(hidden)]
  fn decimal_to_binary<F: Float>(fp: &DecimalFp<F>, bits: &mut FloatBits<F>);
}

/// What to do about trailing decimal zeros of a shortest-decimal output.
pub trait TrailingZeroPolicy: sealed::Sealed {
  #[doc(hidden)]
  const REPORT: bool;
  #[doc(hidden)]
  fn on_trailing_zeros<F: Float>(fp: &mut DecimalFp<F>);
  #[doc(hidden)]
  fn no_trailing_zeros<F: Float>(fp: &mut DecimalFp<F>);
}

/// The rounding rule binding a binary value to its decimal interval.
pub trait BinaryRoundingPolicy: sealed::Sealed {
  #[doc(hidden)]
  fn mode<F: Float>(bits: FloatBits<F>) -> RoundingMode;
}

/// Tie-breaking between two equally near shortest decimals.
pub trait DecimalRoundingPolicy: sealed::Sealed {
  #[doc(hidden)]
  const KIND: DecimalRoundingKind;
  #[doc(hidden)]
  fn break_rounding_tie<C: crate::carrier::Carrier>(significand: &mut C);
}

/// Which power-of-10 table flavor to read.
pub trait CachePolicy: sealed::Sealed {
  #[doc(hidden)]
  fn get_cache<F: Float>(k: i32) -> F::CacheEntry;
}

/// What to do about non-finite inputs.
pub trait InputValidationPolicy: sealed::Sealed {
  #[doc(hidden)]
  fn validate_input<F: Float>(bits: FloatBits<F>);
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

pub mod sign {
  use super::*;

  /// Drop the sign; the decimal record describes the absolute value.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct Ignore;

  /// Carry the sign through (the default).
  #[derive(Debug, Clone, Copy, Default)]
  pub struct Propagate;

  impl sealed::Sealed for Ignore {}
  impl SignPolicy for Ignore {
    #[inline]
    fn binary_to_decimal<F: Float>(_: FloatBits<F>, _: &mut DecimalFp<F>) {}
    #[inline]
    fn decimal_to_binary<F: Float>(_: &DecimalFp<F>, _: &mut FloatBits<F>) {}
  }

  impl sealed::Sealed for Propagate {}
  impl SignPolicy for Propagate {
    #[inline]
    fn binary_to_decimal<F: Float>(bits: FloatBits<F>, fp: &mut DecimalFp<F>) {
      fp.is_negative = bits.is_negative();
    }
    #[inline]
    fn decimal_to_binary<F: Float>(fp: &DecimalFp<F>, bits: &mut FloatBits<F>) {
      if fp.is_negative {
        bits.u |= FloatBits::<F>::negative_zero().u;
      }
    }
  }
}

pub mod trailing_zero {
  use super::*;

  /// Leave the significand as the search produced it.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct Allow;

  /// Strip trailing zeros into the exponent (the default).
  #[derive(Debug, Clone, Copy, Default)]
  pub struct Remove;

  /// Keep them, but set the flag on the result when some may be present.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct Report;

  impl sealed::Sealed for Allow {}
  impl TrailingZeroPolicy for Allow {
    const REPORT: bool = false;
    #[inline]
    fn on_trailing_zeros<F: Float>(_: &mut DecimalFp<F>) {}
    #[inline]
    fn no_trailing_zeros<F: Float>(_: &mut DecimalFp<F>) {}
  }

  impl sealed::Sealed for Remove {}
  impl TrailingZeroPolicy for Remove {
    const REPORT: bool = false;
    #[inline]
    fn on_trailing_zeros<F: Float>(fp: &mut DecimalFp<F>) {
      fp.exponent += F::remove_trailing_zeros(&mut fp.significand);
    }
    #[inline]
    fn no_trailing_zeros<F: Float>(_: &mut DecimalFp<F>) {}
  }

  impl sealed::Sealed for Report {}
  impl TrailingZeroPolicy for Report {
    const REPORT: bool = true;
    #[inline]
    fn on_trailing_zeros<F: Float>(fp: &mut DecimalFp<F>) {
      fp.may_have_trailing_zeros = true;
    }
    #[inline]
    fn no_trailing_zeros<F: Float>(fp: &mut DecimalFp<F>) {
      fp.may_have_trailing_zeros = false;
    }
  }
}

pub mod binary_rounding {
  use super::*;

  macro_rules! rounding_mode {
    ($(#[$doc:meta])* $name:ident, |$bits:ident| $mode:expr) => {
      $(#[$doc])*
      #[derive(Debug, Clone, Copy, Default)]
      pub struct $name;

      impl sealed::Sealed for $name {}
      impl BinaryRoundingPolicy for $name {
        #[inline]
        fn mode<F: Float>($bits: FloatBits<F>) -> RoundingMode {
          $mode
        }
      }
    };
  }

  rounding_mode! {
    /// Round to nearest, ties to the even bit pattern (the default).
    NearestToEven, |_bits| RoundingMode::Nearest(NearestKind::ToEven)
  }
  rounding_mode! {
    /// Round to nearest, ties to the odd bit pattern.
    NearestToOdd, |_bits| RoundingMode::Nearest(NearestKind::ToOdd)
  }
  rounding_mode! {
    /// Round to nearest, ties toward positive infinity.
    NearestTowardPlusInfinity, |_bits| RoundingMode::Nearest(NearestKind::TowardPlusInfinity)
  }
  rounding_mode! {
    /// Round to nearest, ties toward negative infinity.
    NearestTowardMinusInfinity, |_bits| RoundingMode::Nearest(NearestKind::TowardMinusInfinity)
  }
  rounding_mode! {
    /// Round to nearest, ties toward zero.
    NearestTowardZero, |_bits| RoundingMode::Nearest(NearestKind::TowardZero)
  }
  rounding_mode! {
    /// Round to nearest, ties away from zero.
    NearestAwayFromZero, |_bits| RoundingMode::Nearest(NearestKind::AwayFromZero)
  }
  rounding_mode! {
    /// As [`NearestToEven`], but resolves the boundary inclusion up front
    /// from the significand parity.
    NearestToEvenStaticBoundary, |bits| if bits.u.get_lsb() {
      RoundingMode::Nearest(NearestKind::AlwaysOpen)
    } else {
      RoundingMode::Nearest(NearestKind::AlwaysClosed)
    }
  }
  rounding_mode! {
    /// As [`NearestToOdd`], but resolves the boundary inclusion up front
    /// from the significand parity.
    NearestToOddStaticBoundary, |bits| if bits.u.get_lsb() {
      RoundingMode::Nearest(NearestKind::AlwaysClosed)
    } else {
      RoundingMode::Nearest(NearestKind::AlwaysOpen)
    }
  }
  rounding_mode! {
    /// As [`NearestTowardPlusInfinity`], resolved up front from the sign.
    NearestTowardPlusInfinityStaticBoundary, |bits| if bits.is_negative() {
      RoundingMode::Nearest(NearestKind::TowardZero)
    } else {
      RoundingMode::Nearest(NearestKind::AwayFromZero)
    }
  }
  rounding_mode! {
    /// As [`NearestTowardMinusInfinity`], resolved up front from the sign.
    NearestTowardMinusInfinityStaticBoundary, |bits| if bits.is_negative() {
      RoundingMode::Nearest(NearestKind::AwayFromZero)
    } else {
      RoundingMode::Nearest(NearestKind::TowardZero)
    }
  }
  rounding_mode! {
    /// Directed rounding toward positive infinity.
    TowardPlusInfinity, |bits| if bits.is_negative() {
      RoundingMode::LeftClosedDirected
    } else {
      RoundingMode::RightClosedDirected
    }
  }
  rounding_mode! {
    /// Directed rounding toward negative infinity.
    TowardMinusInfinity, |bits| if bits.is_negative() {
      RoundingMode::RightClosedDirected
    } else {
      RoundingMode::LeftClosedDirected
    }
  }
  rounding_mode! {
    /// Directed rounding toward zero (truncation).
    TowardZero, |_bits| RoundingMode::LeftClosedDirected
  }
  rounding_mode! {
    /// Directed rounding away from zero.
    AwayFromZero, |_bits| RoundingMode::RightClosedDirected
  }
}

pub mod decimal_rounding {
  use super::*;
  use crate::carrier::Carrier;

  /// Either of the two nearest decimals is acceptable; lets the search skip
  /// the tie detection entirely.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct DoNotCare;

  /// Ties to the even decimal significand (the default).
  #[derive(Debug, Clone, Copy, Default)]
  pub struct ToEven;

  /// Ties to the odd decimal significand.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct ToOdd;

  /// Ties away from zero.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct AwayFromZero;

  /// Ties toward zero.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct TowardZero;

  impl sealed::Sealed for DoNotCare {}
  impl DecimalRoundingPolicy for DoNotCare {
    const KIND: DecimalRoundingKind = DecimalRoundingKind::DoNotCare;
    #[inline]
    fn break_rounding_tie<C: Carrier>(_: &mut C) {}
  }

  impl sealed::Sealed for ToEven {}
  impl DecimalRoundingPolicy for ToEven {
    const KIND: DecimalRoundingKind = DecimalRoundingKind::ToEven;
    #[inline]
    fn break_rounding_tie<C: Carrier>(significand: &mut C) {
      if significand.get_lsb() {
        *significand = *significand - C::ONE;
      }
    }
  }

  impl sealed::Sealed for ToOdd {}
  impl DecimalRoundingPolicy for ToOdd {
    const KIND: DecimalRoundingKind = DecimalRoundingKind::ToOdd;
    #[inline]
    fn break_rounding_tie<C: Carrier>(significand: &mut C) {
      if !significand.get_lsb() {
        *significand = *significand - C::ONE;
      }
    }
  }

  impl sealed::Sealed for AwayFromZero {}
  impl DecimalRoundingPolicy for AwayFromZero {
    const KIND: DecimalRoundingKind = DecimalRoundingKind::AwayFromZero;
    #[inline]
    fn break_rounding_tie<C: Carrier>(_: &mut C) {}
  }

  impl sealed::Sealed for TowardZero {}
  impl DecimalRoundingPolicy for TowardZero {
    const KIND: DecimalRoundingKind = DecimalRoundingKind::TowardZero;
    #[inline]
    fn break_rounding_tie<C: Carrier>(significand: &mut C) {
      *significand = *significand - C::ONE;
    }
  }
}

pub mod cache {
  use super::*;

  /// Direct table lookup (the default).
  #[derive(Debug, Clone, Copy, Default)]
  pub struct Fast;

  /// Binary64 reads the compressed table and reconstructs entries on the
  /// fly; binary32 is unaffected.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct Compact;

  impl sealed::Sealed for Fast {}
  impl CachePolicy for Fast {
    #[inline]
    fn get_cache<F: Float>(k: i32) -> F::CacheEntry {
      F::cache_fast(k)
    }
  }

  impl sealed::Sealed for Compact {}
  impl CachePolicy for Compact {
    #[inline]
    fn get_cache<F: Float>(k: i32) -> F::CacheEntry {
      F::cache_compact(k)
    }
  }
}

pub mod input_validation {
  use super::*;

  /// Debug-assert that the input is finite (the default).
  #[derive(Debug, Clone, Copy, Default)]
  pub struct AssertFinite;

  /// Trust the caller.
  #[derive(Debug, Clone, Copy, Default)]
  pub struct DoNothing;

  impl sealed::Sealed for AssertFinite {}
  impl InputValidationPolicy for AssertFinite {
    #[inline]
    fn validate_input<F: Float>(bits: FloatBits<F>) {
      debug_assert!(bits.is_finite());
    }
  }

  impl sealed::Sealed for DoNothing {}
  impl InputValidationPolicy for DoNothing {
    #[inline]
    fn validate_input<F: Float>(_: FloatBits<F>) {}
  }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Marker for an axis the caller has not fixed; the call site substitutes its
/// documented default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unset;

/// A compile-time bundle of policy choices; see the [module docs](self).
#[derive(Debug, Clone, Copy)]
pub struct Policy<S = Unset, Z = Unset, B = Unset, D = Unset, C = Unset, V = Unset> {
  _marker: PhantomData<(S, Z, B, D, C, V)>,
}

impl Policy {
  /// A policy with every axis left at the call site's default.
  #[inline]
  pub const fn new() -> Policy {
    Policy { _marker: PhantomData }
  }
}

impl Default for Policy {
  fn default() -> Policy {
    Policy::new()
  }
}

impl<S, Z, B, D, C, V> Policy<S, Z, B, D, C, V> {
  #[inline]
  pub(crate) const fn rebrand<S2, Z2, B2, D2, C2, V2>() -> Policy<S2, Z2, B2, D2, C2, V2> {
    Policy { _marker: PhantomData }
  }
}

impl<Z, B, D, C, V> Policy<Unset, Z, B, D, C, V> {
  /// Fixes the sign axis. Only available while the axis is unset.
  #[inline]
  pub fn sign<S: SignPolicy>(self, _: S) -> Policy<S, Z, B, D, C, V> {
    Policy::<Unset, Z, B, D, C, V>::rebrand()
  }
}

impl<S, B, D, C, V> Policy<S, Unset, B, D, C, V> {
  /// Fixes the trailing-zero axis. Only available while the axis is unset.
  #[inline]
  pub fn trailing_zero<Z: TrailingZeroPolicy>(self, _: Z) -> Policy<S, Z, B, D, C, V> {
    Policy::<S, Unset, B, D, C, V>::rebrand()
  }
}

impl<S, Z, D, C, V> Policy<S, Z, Unset, D, C, V> {
  /// Fixes the binary rounding axis. Only available while the axis is unset.
  #[inline]
  pub fn binary_rounding<B: BinaryRoundingPolicy>(self, _: B) -> Policy<S, Z, B, D, C, V> {
    Policy::<S, Z, Unset, D, C, V>::rebrand()
  }
}

impl<S, Z, B, C, V> Policy<S, Z, B, Unset, C, V> {
  /// Fixes the decimal rounding axis. Only available while the axis is unset.
  #[inline]
  pub fn decimal_rounding<D: DecimalRoundingPolicy>(self, _: D) -> Policy<S, Z, B, D, C, V> {
    Policy::<S, Z, B, Unset, C, V>::rebrand()
  }
}

impl<S, Z, B, D, V> Policy<S, Z, B, D, Unset, V> {
  /// Fixes the cache axis. Only available while the axis is unset.
  #[inline]
  pub fn cache<C: CachePolicy>(self, _: C) -> Policy<S, Z, B, D, C, V> {
    Policy::<S, Z, B, D, Unset, V>::rebrand()
  }
}

impl<S, Z, B, D, C> Policy<S, Z, B, D, C, Unset> {
  /// Fixes the input validation axis. Only available while the axis is unset.
  #[inline]
  pub fn input_validation<V: InputValidationPolicy>(self, _: V) -> Policy<S, Z, B, D, C, V> {
    Policy::<S, Z, B, D, C, Unset>::rebrand()
  }
}

/// Trailing-zero policies that make sense for a textual output (the
/// reporting flavor only marks a flag on the record, so the renderers reject
/// it at compile time).
pub trait RenderableTrailingZero: TrailingZeroPolicy {}
impl RenderableTrailingZero for trailing_zero::Allow {}
impl RenderableTrailingZero for trailing_zero::Remove {}

// Per-axis resolution of `Unset` to the documented default; every fixed
// choice resolves to itself.

macro_rules! resolve_axis {
  (
    $(#[$doc:meta])*
    $resolver:ident : $axis:ident, default $default:ty; $($choice:ty),+ $(,)?
  ) => {
    $(#[$doc])*
    pub trait $resolver {
      #[doc(hidden)]
      type Policy: $axis;
    }
    impl $resolver for Unset { type Policy = $default; }
    $(impl $resolver for $choice { type Policy = $choice; })+
  };
}

resolve_axis! {
  /// Resolves the sign axis of a [`Policy`], defaulting to
  /// [`sign::Propagate`].
  ResolveSign: SignPolicy, default sign::Propagate;
  sign::Ignore, sign::Propagate,
}

resolve_axis! {
  /// Resolves the trailing-zero axis of a [`Policy`], defaulting to
  /// [`trailing_zero::Remove`].
  ResolveTrailingZero: TrailingZeroPolicy, default trailing_zero::Remove;
  trailing_zero::Allow, trailing_zero::Remove, trailing_zero::Report,
}

resolve_axis! {
  /// Resolves the binary rounding axis of a [`Policy`], defaulting to
  /// [`binary_rounding::NearestToEven`].
  ResolveBinaryRounding: BinaryRoundingPolicy, default binary_rounding::NearestToEven;
  binary_rounding::NearestToEven,
  binary_rounding::NearestToOdd,
  binary_rounding::NearestTowardPlusInfinity,
  binary_rounding::NearestTowardMinusInfinity,
  binary_rounding::NearestTowardZero,
  binary_rounding::NearestAwayFromZero,
  binary_rounding::NearestToEvenStaticBoundary,
  binary_rounding::NearestToOddStaticBoundary,
  binary_rounding::NearestTowardPlusInfinityStaticBoundary,
  binary_rounding::NearestTowardMinusInfinityStaticBoundary,
  binary_rounding::TowardPlusInfinity,
  binary_rounding::TowardMinusInfinity,
  binary_rounding::TowardZero,
  binary_rounding::AwayFromZero,
}

resolve_axis! {
  /// Resolves the decimal rounding axis of a [`Policy`], defaulting to
  /// [`decimal_rounding::ToEven`].
  ResolveDecimalRounding: DecimalRoundingPolicy, default decimal_rounding::ToEven;
  decimal_rounding::DoNotCare,
  decimal_rounding::ToEven,
  decimal_rounding::ToOdd,
  decimal_rounding::AwayFromZero,
  decimal_rounding::TowardZero,
}

resolve_axis! {
  /// Resolves the cache axis of a [`Policy`], defaulting to [`cache::Fast`].
  ResolveCache: CachePolicy, default cache::Fast;
  cache::Fast, cache::Compact,
}

resolve_axis! {
  /// Resolves the input validation axis of a [`Policy`], defaulting to
  /// [`input_validation::AssertFinite`].
  ResolveInputValidation: InputValidationPolicy, default input_validation::AssertFinite;
  input_validation::AssertFinite, input_validation::DoNothing,
}

mod tests_compile_fail {
  /// ```compile_fail
  /// use fpconv::policy::{Policy, sign};
  /// let _ = Policy::new().sign(sign::Ignore).sign(sign::Propagate);
  /// ```
  #[allow(dead_code)]
  fn same_axis_twice() {}

  /// ```compile_fail
  /// use fpconv::policy::{Policy, sign, trailing_zero};
  /// let _ = Policy::new()
  ///   .trailing_zero(trailing_zero::Allow)
  ///   .sign(sign::Ignore)
  ///   .trailing_zero(trailing_zero::Remove);
  /// ```
  #[allow(dead_code)]
  fn same_axis_twice_interleaved() {}

  /// ```compile_fail
  /// use fpconv::policy::{Policy, trailing_zero};
  /// let _ = Policy::new().sign(trailing_zero::Allow);
  /// ```
  #[allow(dead_code)]
  fn wrong_axis() {}

  /// ```compile_fail
  /// use fpconv::policy::{Policy, trailing_zero};
  /// let mut buffer = [0u8; 64];
  /// let _ = fpconv::to_chars_shortest_scientific_with(
  ///   1.0f64,
  ///   &mut buffer,
  ///   Policy::new().trailing_zero(trailing_zero::Report),
  /// );
  /// ```
  #[allow(dead_code)]
  fn report_not_renderable() {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nearest_to_even_intervals() {
    let even = FloatBits::<f64>::from_carrier(0x4000_0000_0000_0000);
    let odd = FloatBits::<f64>::from_carrier(0x4000_0000_0000_0001);
    assert_eq!(NearestKind::ToEven.interval_normal(even), Interval::CLOSED);
    assert_eq!(NearestKind::ToEven.interval_normal(odd), Interval::OPEN);
    assert_eq!(NearestKind::ToEven.interval_shorter(odd), Interval::CLOSED);
  }

  #[test]
  fn directed_modes_split_on_sign() {
    use binary_rounding::*;
    let pos = FloatBits::new(1.0f64);
    let neg = FloatBits::new(-1.0f64);
    assert_eq!(TowardPlusInfinity::mode(pos), RoundingMode::RightClosedDirected);
    assert_eq!(TowardPlusInfinity::mode(neg), RoundingMode::LeftClosedDirected);
    assert_eq!(TowardMinusInfinity::mode(pos), RoundingMode::LeftClosedDirected);
    assert_eq!(TowardZero::mode(neg), RoundingMode::LeftClosedDirected);
    assert_eq!(AwayFromZero::mode(neg), RoundingMode::RightClosedDirected);
  }

  #[test]
  fn static_boundary_resolution() {
    use binary_rounding::*;
    let even = FloatBits::<f32>::from_carrier(0x3f80_0000);
    let odd = FloatBits::<f32>::from_carrier(0x3f80_0001);
    assert_eq!(
      NearestToEvenStaticBoundary::mode(even),
      RoundingMode::Nearest(NearestKind::AlwaysClosed),
    );
    assert_eq!(
      NearestToEvenStaticBoundary::mode(odd),
      RoundingMode::Nearest(NearestKind::AlwaysOpen),
    );
  }

  #[test]
  fn tie_breaking() {
    let mut sig: u64 = 11;
    decimal_rounding::ToEven::break_rounding_tie(&mut sig);
    assert_eq!(sig, 10);
    let mut sig: u64 = 10;
    decimal_rounding::ToEven::break_rounding_tie(&mut sig);
    assert_eq!(sig, 10);
    let mut sig: u64 = 10;
    decimal_rounding::ToOdd::break_rounding_tie(&mut sig);
    assert_eq!(sig, 9);
    let mut sig: u64 = 10;
    decimal_rounding::TowardZero::break_rounding_tie(&mut sig);
    assert_eq!(sig, 9);
    let mut sig: u64 = 10;
    decimal_rounding::AwayFromZero::break_rounding_tie(&mut sig);
    assert_eq!(sig, 10);
  }
}
