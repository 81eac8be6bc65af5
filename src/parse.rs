//! Decimal string to binary conversion.
//!
//! [`from_chars_limited`] handles numerals whose significand fits the
//! format's digit limit with a single limited-precision conversion.
//! [`from_chars_unlimited`] is total over arbitrarily long numerals: it seeds
//! a candidate from the leading digits, then compares the remaining digits
//! against the exact expansion of the midpoint between the candidate and its
//! upper neighbor, so the result is always the correctly rounded
//! (ties-to-even) binary value.
//!
//! The accepted grammar is `[+-]digits[.digits][(e|E)[+-]digits]` with at
//! least one significand digit; no whitespace, no hexadecimal forms, no
//! `inf`/`nan` spellings. Anything else is a
//! [`ParseFloatError::InvalidSyntax`] error.

use crate::carrier::Sealed as CarrierOps;
use crate::decimal::DecimalFp;
use crate::float::{Float, FloatBits};
use crate::segment::{SegmentGenerator, SEGMENT_SIZE};
use crate::to_binary::to_binary_limited_precision;

/// The ways a decimal numeral can fail to parse.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum ParseFloatError {
  /// The input does not match the accepted grammar.
  InvalidSyntax,
  /// The significand has more digits than the format can represent
  /// (only reported by [`from_chars_limited`]).
  TooManyDigits,
}

impl core::fmt::Display for ParseFloatError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      ParseFloatError::InvalidSyntax => f.write_str("invalid decimal numeral"),
      ParseFloatError::TooManyDigits => {
        f.write_str("too many significand digits for a limited-precision parse")
      }
    }
  }
}

/// Exponent magnitudes at or above this saturate directly to zero/infinity.
const EXPONENT_SATURATION: i32 = 1000;

/// Parses a numeral whose significand has at most
/// [`DECIMAL_DIGITS`](crate::Float) digits, rounding to nearest-even.
///
/// ```
/// use fpconv::from_chars_limited;
///
/// let bits = from_chars_limited::<f64>("2.5e-1").unwrap();
/// assert_eq!(bits.to_float(), 0.25);
/// ```
pub fn from_chars_limited<F: Float>(s: &str) -> Result<FloatBits<F>, ParseFloatError> {
  let b = s.as_bytes();
  let mut pos = 0;

  let is_negative = match b.first() {
    Some(b'-') => {
      pos += 1;
      true
    }
    Some(b'+') => {
      pos += 1;
      false
    }
    _ => false,
  };

  let mut significand = <F::Carrier>::ZERO;
  let mut digits = 0u32;
  let mut exponent = 0i32;
  let mut saw_digit = false;
  let mut saw_dot = false;
  let mut fraction_digits = 0i32;

  while pos < b.len() {
    match b[pos] {
      c @ b'0'..=b'9' => {
        saw_digit = true;
        // Leading zeros do not count against the digit limit.
        if digits != 0 || c != b'0' {
          digits += 1;
          if digits > F::DECIMAL_DIGITS {
            return Err(ParseFloatError::TooManyDigits);
          }
          significand = significand * <F::Carrier>::from_u32(10)
            + <F::Carrier>::from_u32(u32::from(c - b'0'));
        }
        if saw_dot {
          fraction_digits += 1;
        }
      }
      b'.' => {
        if saw_dot {
          return Err(ParseFloatError::InvalidSyntax);
        }
        saw_dot = true;
      }
      b'e' | b'E' => {
        pos += 1;
        exponent = parse_exponent(b, pos)?;
        pos = b.len();
        break;
      }
      _ => return Err(ParseFloatError::InvalidSyntax),
    }
    pos += 1;
  }
  if !saw_digit || pos != b.len() {
    return Err(ParseFloatError::InvalidSyntax);
  }

  let mut decimal = DecimalFp::<F>::new(significand, exponent.saturating_sub(fraction_digits));
  decimal.is_negative = is_negative;
  Ok(to_binary_limited_precision(decimal))
}

/// Parses the exponent field starting at `pos` (just past the marker),
/// saturating large magnitudes.
fn parse_exponent(b: &[u8], mut pos: usize) -> Result<i32, ParseFloatError> {
  let negative = match b.get(pos) {
    Some(b'-') => {
      pos += 1;
      true
    }
    Some(b'+') => {
      pos += 1;
      false
    }
    _ => false,
  };
  if pos == b.len() {
    return Err(ParseFloatError::InvalidSyntax);
  }
  let mut exp = 0i32;
  while pos < b.len() {
    match b[pos] {
      c @ b'0'..=b'9' => {
        if exp < EXPONENT_SATURATION {
          exp = exp * 10 + i32::from(c - b'0');
        }
      }
      _ => return Err(ParseFloatError::InvalidSyntax),
    }
    pos += 1;
  }
  Ok(if negative { -exp } else { exp })
}

/// Reads significand digits one at a time, skipping the decimal dot and
/// yielding zeros past the end.
struct DigitCursor<'a> {
  bytes: &'a [u8],
  pos: usize,
  end: usize,
}

impl<'a> DigitCursor<'a> {
  fn next_digit(&mut self) -> u32 {
    if self.pos < self.end && self.bytes[self.pos] == b'.' {
      self.pos += 1;
    }
    if self.pos < self.end {
      let d = u32::from(self.bytes[self.pos] - b'0');
      self.pos += 1;
      d
    } else {
      0
    }
  }

  fn exhausted(&self) -> bool {
    self.pos == self.end
  }
}

/// Parses an arbitrarily long numeral to the bit-exact nearest-even binary
/// value.
///
/// ```
/// use fpconv::from_chars_unlimited;
///
/// let bits = from_chars_unlimited::<f64>("1.7976931348623157e308").unwrap();
/// assert_eq!(bits.to_carrier(), 0x7fef_ffff_ffff_ffff);
/// ```
pub fn from_chars_unlimited<F: Float>(s: &str) -> Result<FloatBits<F>, ParseFloatError> {
  let b = s.as_bytes();
  let digit_limit = F::DECIMAL_DIGITS as i32;

  let mut pos = 0;
  let is_negative = match b.first() {
    Some(b'-') => {
      pos += 1;
      true
    }
    Some(b'+') => {
      pos += 1;
      false
    }
    _ => false,
  };

  // First pass: find the dot and the exponent marker, validate, and skip
  // leading zeros.
  let mut begin = pos;
  let mut decimal_dot_pos = None;
  let mut significand_end = b.len();
  let mut exponent = 0i32;
  let mut saw_digit = false;
  let mut first_nonzero_found = false;

  let mut scan = pos;
  while scan < b.len() {
    match b[scan] {
      c @ b'0'..=b'9' => {
        saw_digit = true;
        if !first_nonzero_found {
          if c != b'0' {
            first_nonzero_found = true;
          } else {
            begin += 1;
          }
        }
      }
      b'.' => {
        if decimal_dot_pos.is_some() {
          return Err(ParseFloatError::InvalidSyntax);
        }
        decimal_dot_pos = Some(scan);
      }
      b'e' | b'E' => {
        significand_end = scan;
        exponent = parse_exponent(b, scan + 1)?;
        break;
      }
      _ => return Err(ParseFloatError::InvalidSyntax),
    }
    scan += 1;
  }
  if !saw_digit {
    return Err(ParseFloatError::InvalidSyntax);
  }

  // An explicit exponent this large decides the result on its own.
  if exponent <= -EXPONENT_SATURATION {
    return Ok(signed_zero(is_negative));
  }
  if exponent >= EXPONENT_SATURATION {
    // All-zero significands still collapse to zero.
    return Ok(if first_nonzero_found {
      signed_infinity(is_negative)
    } else {
      signed_zero(is_negative)
    });
  }

  // Normalize the exponent so that the value is the first `digit_limit`
  // digits from `begin` times 10^exponent.
  match decimal_dot_pos {
    Some(dot) => exponent += dot as i32 - begin as i32 - digit_limit,
    None => exponent += significand_end as i32 - begin as i32 - digit_limit,
  }
  if decimal_dot_pos.is_some_and(|dot| begin >= dot) {
    begin += 1;
  }

  // Read the seed significand: the leading digits, truncated.
  let mut cursor = DigitCursor { bytes: b, pos: begin, end: significand_end };
  let mut high = 0u32;
  for _ in 0..F::DECIMAL_DIGITS - 9 {
    high = high * 10 + cursor.next_digit();
  }
  let mut low = 0u32;
  for _ in 0..9 {
    low = low * 10 + cursor.next_digit();
  }
  let significand = <F::Carrier>::from_u32(high) * <F::Carrier>::from_u32(1_000_000_000)
    + <F::Carrier>::from_u32(low);

  let mut decimal = DecimalFp::<F>::new(significand, exponent);
  decimal.is_negative = is_negative;
  let mut f = to_binary_limited_precision(decimal);

  if cursor.exhausted() {
    // Every digit participated; the seed is already correctly rounded.
    return Ok(f);
  }
  if !f.is_finite() {
    // Saturated past the largest finite value; the tail cannot change it.
    return Ok(f);
  }

  // Compare the remaining digits against the expansion of the half-way
  // point between the seed and its upper neighbor. With d digits in a
  // comparison block, the input is decided as soon as a block differs.
  let mut midpoint = SegmentGenerator::<F>::new_midpoint(f);
  let initial_comparison_digits =
    exponent + digit_limit + midpoint.current_segment_index() * SEGMENT_SIZE;

  if initial_comparison_digits <= 0 {
    // Half-way point is strictly greater.
    return Ok(f);
  }
  if initial_comparison_digits > SEGMENT_SIZE {
    // Half-way point is strictly smaller.
    f.u = f.u + <F::Carrier>::ONE;
    return Ok(f);
  }

  let mut cursor = DigitCursor { bytes: b, pos: begin, end: significand_end };
  let mut block = 0u32;
  for _ in 0..initial_comparison_digits {
    block = block * 10 + cursor.next_digit();
  }
  if block > midpoint.current_segment() {
    f.u = f.u + <F::Carrier>::ONE;
    return Ok(f);
  }
  if block < midpoint.current_segment() {
    return Ok(f);
  }

  // Equal so far; advance both in lockstep.
  while !cursor.exhausted() {
    midpoint.compute_next_segment();
    let mut block = 0u32;
    for _ in 0..SEGMENT_SIZE {
      block = block * 10 + cursor.next_digit();
    }
    if block > midpoint.current_segment() {
      f.u = f.u + <F::Carrier>::ONE;
      return Ok(f);
    }
    if block < midpoint.current_segment() {
      return Ok(f);
    }
  }

  if midpoint.has_further_nonzero_segments() {
    // Half-way point is strictly greater.
    return Ok(f);
  }

  // Exactly on the half-way point; break the tie to the even bit pattern.
  if f.u.get_lsb() {
    f.u = f.u + <F::Carrier>::ONE;
  }
  Ok(f)
}

fn signed_zero<F: Float>(is_negative: bool) -> FloatBits<F> {
  if is_negative {
    FloatBits::negative_zero()
  } else {
    FloatBits::positive_zero()
  }
}

fn signed_infinity<F: Float>(is_negative: bool) -> FloatBits<F> {
  if is_negative {
    FloatBits::negative_infinity()
  } else {
    FloatBits::positive_infinity()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn unlimited_f64(s: &str) -> f64 {
    from_chars_unlimited::<f64>(s).unwrap().to_float()
  }

  fn unlimited_f32(s: &str) -> f32 {
    from_chars_unlimited::<f32>(s).unwrap().to_float()
  }

  #[test]
  fn limited_basics() {
    assert_eq!(from_chars_limited::<f64>("1").unwrap().to_float(), 1.0);
    assert_eq!(from_chars_limited::<f64>("2.5e-1").unwrap().to_float(), 0.25);
    assert_eq!(from_chars_limited::<f64>("-123.456").unwrap().to_float(), -123.456);
    assert_eq!(from_chars_limited::<f64>("+0.5").unwrap().to_float(), 0.5);
    assert_eq!(from_chars_limited::<f64>(".5").unwrap().to_float(), 0.5);
    assert_eq!(from_chars_limited::<f64>("5.").unwrap().to_float(), 5.0);
    assert_eq!(from_chars_limited::<f64>("0").unwrap().to_float(), 0.0);
    assert_eq!(from_chars_limited::<f32>("3.4028235e38").unwrap().to_float(), f32::MAX);
  }

  #[test]
  fn limited_digit_limit() {
    assert_eq!(
      from_chars_limited::<f64>("12345678901234567").unwrap().to_float(),
      12345678901234567.0,
    );
    assert_eq!(
      from_chars_limited::<f64>("123456789012345678"),
      Err(ParseFloatError::TooManyDigits),
    );
    // Leading zeros are free.
    assert_eq!(
      from_chars_limited::<f64>("000000000000000000001").unwrap().to_float(),
      1.0,
    );
    assert_eq!(
      from_chars_limited::<f32>("123456789").unwrap().to_float(),
      123456792.0f32,
    );
  }

  #[test]
  fn syntax_errors() {
    for bad in ["", "-", "+", ".", "1.2.3", "1e", "1e+", "abc", "1x", "1 ", " 1", "1e5x"] {
      assert_eq!(
        from_chars_limited::<f64>(bad),
        Err(ParseFloatError::InvalidSyntax),
        "input {bad:?}",
      );
      assert_eq!(
        from_chars_unlimited::<f64>(bad),
        Err(ParseFloatError::InvalidSyntax),
        "input {bad:?}",
      );
    }
  }

  #[test]
  fn unlimited_basics() {
    assert_eq!(unlimited_f64("0"), 0.0);
    assert_eq!(unlimited_f64("1"), 1.0);
    assert_eq!(unlimited_f64("-2.5"), -2.5);
    assert_eq!(unlimited_f64("0.1"), 0.1);
    assert_eq!(unlimited_f64("00000.00001e5"), 1.0);
    assert_eq!(unlimited_f32("0.1"), 0.1f32);
  }

  #[test]
  fn unlimited_extreme_values() {
    assert_eq!(
      from_chars_unlimited::<f64>("1.7976931348623157e308").unwrap().to_carrier(),
      0x7fef_ffff_ffff_ffff,
    );
    assert_eq!(
      from_chars_unlimited::<f64>("5e-324").unwrap().to_carrier(),
      0x0000_0000_0000_0001,
    );
  }

  #[test]
  fn unlimited_long_tails() {
    // More digits than the limit, decided by the tail comparison.
    assert_eq!(unlimited_f64("0.3000000000000000444089209850062616169452667236328125"), 0.3);
    // The exact expansion of the f64 nearest to 0.1.
    assert_eq!(
      unlimited_f64("0.1000000000000000055511151231257827021181583404541015625"),
      0.1,
    );
    // One unit above the midpoint of 1.0 and its successor rounds up.
    assert_eq!(
      unlimited_f64("1.000000000000000111022302462515654042363166809082031250000001"),
      f64::from_bits(1.0f64.to_bits() + 1),
    );
    // Exactly the midpoint ties to even (1.0 itself).
    assert_eq!(
      unlimited_f64("1.00000000000000011102230246251565404236316680908203125"),
      1.0,
    );
    // Just below the midpoint.
    assert_eq!(
      unlimited_f64("1.0000000000000001110223024625156540423631668090820312499999"),
      1.0,
    );
  }

  #[test]
  fn unlimited_midpoint_of_odd_seed() {
    // The midpoint above an odd bit pattern rounds away to the next (even)
    // pattern.
    let below = f64::from_bits(1.0f64.to_bits() + 1);
    let above = f64::from_bits(1.0f64.to_bits() + 2);
    // Midpoint of `below` and `above`:
    // 1.00000000000000033306690738754696212708950042724609375
    assert_eq!(
      unlimited_f64("1.00000000000000033306690738754696212708950042724609375"),
      above,
    );
    let _ = below;
  }

  #[test]
  fn unlimited_saturation() {
    assert_eq!(unlimited_f64("1e1000"), f64::INFINITY);
    assert_eq!(unlimited_f64("-1e1000"), f64::NEG_INFINITY);
    assert_eq!(unlimited_f64("1e-1000"), 0.0);
    assert_eq!(unlimited_f64("-1e-1000").to_bits(), (-0.0f64).to_bits());
    assert_eq!(unlimited_f64("0e2000"), 0.0);
    assert_eq!(unlimited_f64("2e308"), f64::INFINITY);
    assert_eq!(unlimited_f32("4e38"), f32::INFINITY);
  }

  #[test]
  fn unlimited_subnormal_boundaries() {
    // Exactly half of the smallest subnormal: a tie, broken to even (zero).
    let half_ulp = "2.4703282292062327208828439643411068618252990130716238221279284125033775363510437593264991818081799618989828234772285886546332835517796989819938739800539093906315035659515570226392290858392449105184435931802849936536152500319370457678249219365623669863658480757001585769269903706311928279558551332927834338409351978015531246597263579574622766465272827220056374006485499977096599470454020828166226237857393450736339007967761930577506740176324673600968951340535537458516661134223766678604162159680461914467291840300530057530849048765391711386591646239524912623653881879636239373280423891018672348497668235089863388587925628302755995657524455507255189313690836254779186948667994968324049705821028513185451396213837722826145437693412532098591327667236328125e-324";
    assert_eq!(unlimited_f64(half_ulp), 0.0);
    // One trailing digit past the midpoint rounds up to the subnormal.
    let above = half_ulp.replace("5e-324", "51e-324");
    assert_eq!(unlimited_f64(&above), 5e-324);
    // And anything comfortably above as well.
    assert_eq!(unlimited_f64("2.5e-324"), 5e-324);
  }

  fn format_digits(digits: &[u8], dot: Option<usize>, exponent: i32) -> String {
    let mut s = String::new();
    for (i, d) in digits.iter().enumerate() {
      if dot == Some(i) {
        s.push('.');
      }
      s.push(char::from(b'0' + d));
    }
    if exponent != 0 {
      s += &format!("e{exponent}");
    }
    s
  }

  const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x400 } else { 0x1_0000 };
  proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn agrees_with_std_f64(
      digits in proptest::collection::vec(0u8..10, 1..40),
      dot in proptest::option::of(0usize..40),
      exponent in -350i32..330,
      negative in any::<bool>(),
    ) {
      let dot = dot.filter(|&d| d < digits.len());
      let body = format_digits(&digits, dot, exponent);
      let input = if negative { format!("-{body}") } else { body };
      let ours = from_chars_unlimited::<f64>(&input).unwrap();
      let std: f64 = input.parse().unwrap();
      prop_assert_eq!(ours.to_carrier(), std.to_bits(), "input {}", input);
    }

    #[test]
    fn agrees_with_std_f32(
      digits in proptest::collection::vec(0u8..10, 1..30),
      dot in proptest::option::of(0usize..30),
      exponent in -60i32..50,
      negative in any::<bool>(),
    ) {
      let dot = dot.filter(|&d| d < digits.len());
      let body = format_digits(&digits, dot, exponent);
      let input = if negative { format!("-{body}") } else { body };
      let ours = from_chars_unlimited::<f32>(&input).unwrap();
      let std: f32 = input.parse().unwrap();
      prop_assert_eq!(ours.to_carrier(), std.to_bits(), "input {}", input);
    }

    #[test]
    fn roundtrips_shortest_strings(bits in any::<u64>()) {
      let x = f64::from_bits(bits);
      if x.is_finite() && x != 0.0 {
        let d = crate::to_shortest_decimal(x);
        let s = format!(
          "{}{}e{}",
          if d.is_negative { "-" } else { "" },
          d.significand,
          d.exponent,
        );
        prop_assert_eq!(from_chars_unlimited::<f64>(&s).unwrap().to_carrier(), bits);
      }
    }
  }
}
