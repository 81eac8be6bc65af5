//! ASCII renderers for the three conversion flavors: shortest round-trip,
//! full-precision exact, and fixed-precision, all in scientific form.
//!
//! Digits are emitted in pairs through a radix-100 table; nine-digit segments
//! come straight from the segment generator. Every renderer writes into a
//! caller-supplied byte buffer and returns the filled prefix as `&str`.

use crate::carrier::Sealed as CarrierOps;
use crate::decimal::DecimalFp;
use crate::float::{Float, FloatBits};
use crate::policy::{Policy, Unset};
use crate::policy::{
  RenderableTrailingZero, ResolveBinaryRounding, ResolveCache, ResolveDecimalRounding,
  ResolveInputValidation, ResolveTrailingZero,
};
use crate::segment::{SegmentGenerator, SEGMENT_SIZE};
use crate::shortest::to_shortest_decimal_with;

static RADIX_100: &[u8; 200] = b"\
0001020304050607080910111213141516171819\
2021222324252627282930313233343536373839\
4041424344454647484950515253545556575859\
6061626364656667686970717273747576777879\
8081828384858687888990919293949596979899";

const POW10_U32: [u32; 10] = [
  1, 10, 100, 1000, 10_000, 100_000, 1_000_000, 10_000_000, 100_000_000, 1_000_000_000,
];

/// Byte sink over a caller buffer; all writes are bounds-checked by the
/// slice indexing.
struct Writer<'a> {
  buf: &'a mut [u8],
  pos: usize,
}

impl<'a> Writer<'a> {
  fn new(buf: &'a mut [u8]) -> Self {
    Writer { buf, pos: 0 }
  }

  #[inline]
  fn push(&mut self, byte: u8) {
    self.buf[self.pos] = byte;
    self.pos += 1;
  }

  #[inline]
  fn push_str(&mut self, s: &str) {
    self.buf[self.pos..self.pos + s.len()].copy_from_slice(s.as_bytes());
    self.pos += s.len();
  }

  #[inline]
  fn push_pair(&mut self, two_digits: u32) {
    debug_assert!(two_digits < 100);
    let i = two_digits as usize * 2;
    self.buf[self.pos..self.pos + 2].copy_from_slice(&RADIX_100[i..i + 2]);
    self.pos += 2;
  }

  /// Writes `number` as exactly `length` decimal digits, zero-padded.
  fn print_number(&mut self, mut number: u32, mut length: i32) {
    debug_assert!(length >= 0);
    debug_assert!(length as u32 >= decimal_length_u32(number) || number == 0);
    let end = self.pos + length as usize;
    while length > 4 {
      let c = number % 1_0000;
      number /= 1_0000;
      let i = (c % 100) as usize * 2;
      self.buf[self.pos + length as usize - 2..self.pos + length as usize]
        .copy_from_slice(&RADIX_100[i..i + 2]);
      let i = (c / 100) as usize * 2;
      self.buf[self.pos + length as usize - 4..self.pos + length as usize - 2]
        .copy_from_slice(&RADIX_100[i..i + 2]);
      length -= 4;
    }
    if length > 2 {
      let c = (number % 100) as usize * 2;
      number /= 100;
      self.buf[self.pos + length as usize - 2..self.pos + length as usize]
        .copy_from_slice(&RADIX_100[c..c + 2]);
      length -= 2;
    }
    if length > 1 {
      let i = number as usize * 2;
      self.buf[self.pos..self.pos + 2].copy_from_slice(&RADIX_100[i..i + 2]);
    } else if length > 0 {
      self.buf[self.pos] = b'0' + number as u8;
    }
    self.pos = end;
  }

  /// Writes a full nine-digit segment, zero-padded.
  fn print_nine_digits(&mut self, mut number: u32) {
    if number == 0 {
      self.buf[self.pos..self.pos + 9].fill(b'0');
    } else {
      for i in 0..2 {
        let c = number % 1_0000;
        number /= 1_0000;
        let j = (c % 100) as usize * 2;
        self.buf[self.pos + 7 - 4 * i..self.pos + 9 - 4 * i]
          .copy_from_slice(&RADIX_100[j..j + 2]);
        let j = (c / 100) as usize * 2;
        self.buf[self.pos + 5 - 4 * i..self.pos + 7 - 4 * i]
          .copy_from_slice(&RADIX_100[j..j + 2]);
      }
      self.buf[self.pos] = b'0' + number as u8;
    }
    self.pos += 9;
  }

  fn print_repeated(&mut self, digit: u8, length: i32) {
    debug_assert!(length >= 0);
    self.buf[self.pos..self.pos + length as usize].fill(digit);
    self.pos += length as usize;
  }

  fn print_zeros(&mut self, length: i32) {
    self.print_repeated(b'0', length);
  }

  fn print_nines(&mut self, length: i32) {
    self.print_repeated(b'9', length);
  }

  fn finish(self) -> &'a str {
    // SAFETY: every byte written above is ASCII.
    unsafe { core::str::from_utf8_unchecked(&self.buf[..self.pos]) }
  }
}

fn decimal_length_u32(x: u32) -> u32 {
  debug_assert!(x < 1_000_000_000);
  let mut length = 1;
  while length < 9 && x >= POW10_U32[length as usize] {
    length += 1;
  }
  length
}

/// Number of decimal digits of a significand within the format's digit
/// limit.
fn decimal_length<F: Float>(x: F::Carrier) -> i32 {
  let ten = <F::Carrier>::from_u32(10);
  let mut threshold = ten;
  for length in 1..F::DECIMAL_DIGITS {
    if x < threshold {
      return length as i32;
    }
    threshold = threshold * ten;
  }
  F::DECIMAL_DIGITS as i32
}

// ---------------------------------------------------------------------------
// Shortest round-trip
// ---------------------------------------------------------------------------

/// Formats `x` as the shortest decimal that parses back to `x`, in the form
/// `[-]d[.d+]E[-]e`.
///
/// The buffer must hold at least [`SHORTEST_BUFFER_LEN`](crate::Float) bytes.
///
/// ```
/// let mut buffer = [0u8; 24];
/// assert_eq!(fpconv::to_chars_shortest_scientific(1.0f32, &mut buffer), "1E0");
/// ```
pub fn to_chars_shortest_scientific<F: Float>(x: F, buffer: &mut [u8]) -> &str {
  to_chars_shortest_scientific_with(x, buffer, Policy::new())
}

/// As [`to_chars_shortest_scientific`], with explicit policies. The sign
/// axis is owned by the renderer and the reporting trailing-zero policy has
/// no textual meaning, so neither can be supplied here.
pub fn to_chars_shortest_scientific_with<'a, F, Z, R, D, C, V>(
  x: F,
  buffer: &'a mut [u8],
  _policy: Policy<Unset, Z, R, D, C, V>,
) -> &'a str
where
  F: Float,
  Z: ResolveTrailingZero,
  Z::Policy: RenderableTrailingZero,
  R: ResolveBinaryRounding,
  D: ResolveDecimalRounding,
  C: ResolveCache,
  V: ResolveInputValidation,
{
  let bits = FloatBits::new(x);
  let mut out = Writer::new(buffer);

  if !bits.is_finite() {
    return finish_non_finite(bits, out);
  }
  if bits.is_negative() {
    out.push(b'-');
  }
  if !bits.is_nonzero() {
    out.push_str("0E0");
    return out.finish();
  }

  let ignore_sign: Policy<crate::policy::sign::Ignore, Z, R, D, C, V> =
    Policy::<Unset, Z, R, D, C, V>::rebrand();
  let decimal = to_shortest_decimal_with(x, ignore_sign);
  shortest_digits::<F>(&mut out, decimal);
  out.finish()
}

/// Digit and exponent emission for the shortest form: `d[.d+]E[-]e`.
fn shortest_digits<F: Float>(out: &mut Writer<'_>, v: DecimalFp<F>) {
  let significand_length = decimal_length::<F>(v.significand);
  let start = out.pos;

  // For binary64, peel eight low digits off 64-bit significands first so
  // the remaining digit loop runs in 32 bits.
  let mut significand32;
  let mut remaining_length;
  if F::CARRIER_BITS == 64 && (v.significand >> 32) != <F::Carrier>::ZERO {
    let hundred_million = <F::Carrier>::from_u32(1_0000_0000);
    significand32 = (v.significand / hundred_million).low_u32();
    let mut r = (v.significand - hundred_million * <F::Carrier>::from_u32(significand32)).low_u32();

    // Print the eight digits, leaving room for the decimal dot at index 1.
    for i in 0..2 {
      let c = r % 1_0000;
      r /= 1_0000;
      let j = (c % 100) as usize * 2;
      let at = start + significand_length as usize - 4 * i - 1;
      out.buf[at..at + 2].copy_from_slice(&RADIX_100[j..j + 2]);
      let j = (c / 100) as usize * 2;
      out.buf[at - 2..at].copy_from_slice(&RADIX_100[j..j + 2]);
    }
    remaining_length = significand_length - 8;
  } else {
    significand32 = v.significand.low_u32();
    remaining_length = significand_length;
  }

  while remaining_length > 4 {
    let c = significand32 % 1_0000;
    significand32 /= 1_0000;
    let j = (c % 100) as usize * 2;
    let at = start + remaining_length as usize - 1;
    out.buf[at..at + 2].copy_from_slice(&RADIX_100[j..j + 2]);
    let j = (c / 100) as usize * 2;
    out.buf[at - 2..at].copy_from_slice(&RADIX_100[j..j + 2]);
    remaining_length -= 4;
  }
  if remaining_length > 2 {
    let c = (significand32 % 100) as usize * 2;
    significand32 /= 100;
    let at = start + remaining_length as usize - 1;
    out.buf[at..at + 2].copy_from_slice(&RADIX_100[c..c + 2]);
    remaining_length -= 2;
  }
  if remaining_length > 1 {
    debug_assert!(remaining_length == 2);
    out.buf[start] = b'0' + (significand32 / 10) as u8;
    out.buf[start + 1] = b'.';
    out.buf[start + 2] = b'0' + (significand32 % 10) as u8;
    out.pos = start + significand_length as usize + 1;
  } else {
    out.buf[start] = b'0' + significand32 as u8;
    if significand_length > 1 {
      out.buf[start + 1] = b'.';
      out.pos = start + significand_length as usize + 1;
    } else {
      out.pos = start + 1;
    }
  }

  // Exponent: uppercase marker, sign only when negative, no padding.
  out.push(b'E');
  let mut exp = v.exponent + significand_length - 1;
  if exp < 0 {
    out.push(b'-');
    exp = -exp;
  }
  let exp = exp as u32;
  if exp >= 100 {
    out.push_pair(exp / 10);
    out.push(b'0' + (exp % 10) as u8);
  } else if exp >= 10 {
    out.push_pair(exp);
  } else {
    out.push(b'0' + exp as u8);
  }
}

fn finish_non_finite<F: Float>(bits: FloatBits<F>, mut out: Writer<'_>) -> &str {
  if bits.is_nan() {
    out.push_str("nan");
  } else {
    if bits.is_negative() {
      out.push(b'-');
    }
    out.push_str("Infinity");
  }
  out.finish()
}

// ---------------------------------------------------------------------------
// Precise (exact expansion)
// ---------------------------------------------------------------------------

/// Formats the exact decimal expansion of `x`, in the form `[-]d[.d+]e<+->e`.
///
/// The buffer must hold at least [`PRECISE_BUFFER_LEN`](crate::Float) bytes.
///
/// ```
/// let mut buffer = [0u8; 800];
/// assert_eq!(
///   fpconv::to_chars_precise_scientific(0.1f64, &mut buffer),
///   "1.000000000000000055511151231257827021181583404541015625e-1",
/// );
/// ```
pub fn to_chars_precise_scientific<F: Float>(x: F, buffer: &mut [u8]) -> &str {
  let bits = FloatBits::new(x);
  let mut out = Writer::new(buffer);

  if !bits.is_finite() {
    return finish_non_finite(bits, out);
  }
  if bits.is_negative() {
    out.push(b'-');
  }
  if !bits.is_nonzero() {
    out.push(b'0');
    print_precise_exponent::<F>(&mut out, 0);
    return out.finish();
  }

  let mut gen = SegmentGenerator::new(bits);
  let first = gen.current_segment();
  let length = decimal_length_u32(first) as i32;
  let exponent = length - 1 - gen.current_segment_index() * SEGMENT_SIZE;

  if !gen.has_further_nonzero_segments() {
    // Single-segment expansion: strip its trailing zeros and print.
    let (digits, count) = strip_segment_zeros(first, length);
    out.push(b'0' + (digits / POW10_U32[count as usize - 1]) as u8);
    if count > 1 {
      out.push(b'.');
      out.print_number(digits % POW10_U32[count as usize - 1], count - 1);
    }
  } else {
    out.push(b'0' + (first / POW10_U32[length as usize - 1]) as u8);
    out.push(b'.');
    if length > 1 {
      out.print_number(first % POW10_U32[length as usize - 1], length - 1);
    }
    loop {
      gen.compute_next_segment();
      if gen.has_further_nonzero_segments() {
        out.print_nine_digits(gen.current_segment());
      } else {
        // The last segment carries the final nonzero digit.
        let (digits, count) = strip_segment_zeros(gen.current_segment(), SEGMENT_SIZE);
        out.print_number(digits, count);
        break;
      }
    }
  }

  print_precise_exponent::<F>(&mut out, exponent);
  out.finish()
}

/// Strips trailing zeros using the modular-inverse table; returns the
/// remaining digits and their count.
fn strip_segment_zeros(mut segment: u32, length: i32) -> (u32, i32) {
  debug_assert!(segment != 0);
  let table = <u32 as CarrierOps>::POW5_DIV;

  let mut t = segment.trailing_zeros() as i32;
  if t > SEGMENT_SIZE {
    t = SEGMENT_SIZE;
  }

  let mut s = 0;
  while s < t - 1 {
    if segment.wrapping_mul(table[2].mod_inv) > table[2].max_quotient {
      break;
    }
    segment = segment.wrapping_mul(table[2].mod_inv);
    s += 2;
  }
  if s < t && segment.wrapping_mul(table[1].mod_inv) <= table[1].max_quotient {
    segment = segment.wrapping_mul(table[1].mod_inv);
    s += 1;
  }
  (segment >> s, length - s)
}

/// Exponent for the precise form: lowercase marker, explicit sign, two
/// digits for binary32 and no padding for binary64.
fn print_precise_exponent<F: Float>(out: &mut Writer<'_>, exponent: i32) {
  out.push(b'e');
  out.push(if exponent < 0 { b'-' } else { b'+' });
  let exp = exponent.unsigned_abs();
  if F::CARRIER_BITS == 32 {
    out.print_number(exp, 2);
  } else if exp >= 100 {
    out.print_number(exp, 3);
  } else if exp >= 10 {
    out.print_number(exp, 2);
  } else {
    out.print_number(exp, 1);
  }
}

// ---------------------------------------------------------------------------
// Fixed precision
// ---------------------------------------------------------------------------

/// Formats `x` with exactly `precision` significant digits after the leading
/// one, rounding half to even against the exact expansion:
/// `[-]d[.d{precision}]e<+->ee`.
///
/// The buffer must hold at least `precision + 12` bytes.
///
/// ```
/// let mut buffer = [0u8; 32];
/// assert_eq!(
///   fpconv::to_chars_fixed_precision_scientific(1.0f64, &mut buffer, 3),
///   "1.000e+00",
/// );
/// ```
pub fn to_chars_fixed_precision_scientific<F: Float>(
  x: F,
  buffer: &mut [u8],
  precision: u32,
) -> &str {
  let bits = FloatBits::new(x);
  let mut out = Writer::new(buffer);
  let mut precision = precision as i32;

  if !bits.is_finite() {
    return finish_non_finite(bits, out);
  }
  if bits.is_negative() {
    out.push(b'-');
  }
  if !bits.is_nonzero() {
    if precision == 0 {
      out.push(b'0');
    } else {
      out.push_str("0.");
      out.print_zeros(precision);
      print_fixed_exponent::<F>(&mut out, 0);
    }
    return out.finish();
  }

  let mut rp = SegmentGenerator::new(bits);
  let mut exponent;

  if precision == 0 {
    // Only the first digit and the rounding information are needed.
    let seg = rp.current_segment();
    let length = decimal_length_u32(seg) as i32;
    let mut first_digit;
    let next_digits_normalized;
    if length == 1 {
      first_digit = seg;
      next_digits_normalized = rp.compute_next_segment();
      exponent = SEGMENT_SIZE - rp.current_segment_index() * SEGMENT_SIZE;
    } else {
      let split = POW10_U32[length as usize - 1];
      first_digit = seg / split;
      next_digits_normalized = (seg % split) * POW10_U32[10 - length as usize];
      exponent = length - 1 - rp.current_segment_index() * SEGMENT_SIZE;
    }

    // Round half to even against everything after the first digit.
    if next_digits_normalized > 500_000_000
      || (next_digits_normalized == 500_000_000
        && (first_digit % 2 != 0 || rp.has_further_nonzero_segments()))
    {
      first_digit += 1;
      if first_digit == 10 {
        out.push(b'1');
        exponent += 1;
        print_fixed_exponent::<F>(&mut out, exponent);
        return out.finish();
      }
    }
    out.push(b'0' + first_digit as u8);
    print_fixed_exponent::<F>(&mut out, exponent);
    return out.finish();
  }

  let seg = rp.current_segment();
  let length = decimal_length_u32(seg) as i32;
  let mut first_digit;
  let mut current_digits;
  let mut normalizer;
  let current_digits_length;
  if length == 1 {
    first_digit = seg;
    current_digits = rp.compute_next_segment();
    normalizer = 1;
    current_digits_length = SEGMENT_SIZE;
  } else {
    let split = POW10_U32[length as usize - 1];
    first_digit = seg / split;
    current_digits = seg % split;
    normalizer = POW10_U32[10 - length as usize];
    current_digits_length = length - 1;
  }
  exponent = current_digits_length - rp.current_segment_index() * SEGMENT_SIZE;

  if precision <= current_digits_length {
    // All required digits are already in hand; only rounding remains.
    let remainder;
    if precision < current_digits_length {
      current_digits *= normalizer;
      let divisor = POW10_U32[(SEGMENT_SIZE - precision) as usize];
      remainder = (current_digits % divisor) * POW10_U32[precision as usize];
      current_digits /= divisor;
      normalizer = divisor;
    } else {
      remainder = rp.compute_next_segment();
    }

    if remainder > 500_000_000
      || (remainder == 500_000_000
        && (current_digits % 2 != 0 || rp.has_further_nonzero_segments()))
    {
      current_digits += 1;
      if normalizer * current_digits == 1_000_000_000 {
        // The carry ran through every digit.
        first_digit += 1;
        if first_digit == 10 {
          exponent += 1;
          out.push(b'1');
        } else {
          out.push(b'0' + first_digit as u8);
        }
        out.push(b'.');
        out.print_zeros(precision);
        print_fixed_exponent::<F>(&mut out, exponent);
        return out.finish();
      }
    }

    out.push(b'0' + first_digit as u8);
    out.push(b'.');
    out.print_number(current_digits, precision);
    print_fixed_exponent::<F>(&mut out, exponent);
    return out.finish();
  }

  // More digits must be generated. Runs of trailing nines cannot be printed
  // until a lower digit proves no carry will reach them.
  let mut number_of_trailing_9: i32;
  precision -= current_digits_length;
  let mut next_digits = rp.compute_next_segment();

  let first_digits_all_nine = (current_digits + 1) * normalizer == 1_000_000_000;

  // Scan until a digit other than 9 is found.
  number_of_trailing_9 = 0;
  loop {
    debug_assert!(precision > 0);

    if precision <= SEGMENT_SIZE {
      let remainder;
      if precision < SEGMENT_SIZE {
        let divisor = POW10_U32[(SEGMENT_SIZE - precision) as usize];
        remainder = (next_digits % divisor) * POW10_U32[precision as usize];
        next_digits /= divisor;
        normalizer = divisor;
      } else {
        remainder = rp.compute_next_segment();
        normalizer = 1;
      }

      if remainder > 500_000_000
        || (remainder == 500_000_000
          && (next_digits % 2 != 0 || rp.has_further_nonzero_segments()))
      {
        next_digits += 1;
        if normalizer * next_digits == 1_000_000_000 {
          // Carry across the nine-run into the head digits.
          if first_digits_all_nine {
            first_digit += 1;
            if first_digit == 10 {
              exponent += 1;
              out.push(b'1');
            } else {
              out.push(b'0' + first_digit as u8);
            }
            out.push(b'.');
            out.print_zeros(current_digits_length + number_of_trailing_9 + precision);
          } else {
            out.push(b'0' + first_digit as u8);
            out.push(b'.');
            out.print_number(current_digits + 1, current_digits_length);
            out.print_zeros(number_of_trailing_9 + precision);
          }
          print_fixed_exponent::<F>(&mut out, exponent);
          return out.finish();
        }
      }

      // No carry reaches the held digits; print everything.
      out.push(b'0' + first_digit as u8);
      out.push(b'.');
      out.print_number(current_digits, current_digits_length);
      out.print_nines(number_of_trailing_9);
      out.print_number(next_digits, precision);
      print_fixed_exponent::<F>(&mut out, exponent);
      return out.finish();
    }

    if next_digits == 999_999_999 {
      number_of_trailing_9 += SEGMENT_SIZE;
      precision -= SEGMENT_SIZE;
      next_digits = rp.compute_next_segment();
    } else {
      break;
    }
  }

  // The head digits and the leading nine-run are now safe to print.
  out.push(b'0' + first_digit as u8);
  out.push(b'.');
  out.print_number(current_digits, current_digits_length);
  out.print_nines(number_of_trailing_9);

  debug_assert!(precision > SEGMENT_SIZE);
  number_of_trailing_9 = 0;
  let mut current_digits = next_digits;
  let mut next_digits = rp.compute_next_segment();
  precision -= SEGMENT_SIZE;

  while precision > SEGMENT_SIZE {
    if next_digits == 999_999_999 {
      number_of_trailing_9 += SEGMENT_SIZE;
    } else {
      out.print_nine_digits(current_digits);
      out.print_nines(number_of_trailing_9);
      number_of_trailing_9 = 0;
      current_digits = next_digits;
    }
    precision -= SEGMENT_SIZE;
    next_digits = rp.compute_next_segment();
  }

  // The last block.
  let remainder;
  let final_normalizer;
  if precision < SEGMENT_SIZE {
    let divisor = POW10_U32[(SEGMENT_SIZE - precision) as usize];
    remainder = (next_digits % divisor) * POW10_U32[precision as usize];
    next_digits /= divisor;
    final_normalizer = divisor;
  } else {
    remainder = rp.compute_next_segment();
    final_normalizer = 1;
  }

  if remainder > 500_000_000
    || (remainder == 500_000_000
      && (next_digits % 2 != 0 || rp.has_further_nonzero_segments()))
  {
    next_digits += 1;
    if final_normalizer * next_digits == 1_000_000_000 {
      current_digits += 1;
      debug_assert!(current_digits < 1_000_000_000);
      out.print_nine_digits(current_digits);
      out.print_zeros(number_of_trailing_9 + precision);
      print_fixed_exponent::<F>(&mut out, exponent);
      return out.finish();
    }
  }

  out.print_nine_digits(current_digits);
  out.print_nines(number_of_trailing_9);
  out.print_number(next_digits, precision);
  print_fixed_exponent::<F>(&mut out, exponent);
  out.finish()
}

/// Exponent for the fixed-precision form: lowercase marker, explicit sign,
/// zero-padded to two digits (three for binary64 magnitudes above 99).
fn print_fixed_exponent<F: Float>(out: &mut Writer<'_>, exponent: i32) {
  out.push(b'e');
  out.push(if exponent < 0 { b'-' } else { b'+' });
  let exp = exponent.unsigned_abs();
  if F::CARRIER_BITS == 64 && exp >= 100 {
    out.print_number(exp, 3);
  } else {
    debug_assert!(exp < 100);
    out.print_number(exp, 2);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn shortest_f64(x: f64) -> String {
    let mut buffer = [0u8; 24];
    to_chars_shortest_scientific(x, &mut buffer).to_string()
  }

  fn shortest_f32(x: f32) -> String {
    let mut buffer = [0u8; 16];
    to_chars_shortest_scientific(x, &mut buffer).to_string()
  }

  fn precise_f64(x: f64) -> String {
    let mut buffer = [0u8; 800];
    to_chars_precise_scientific(x, &mut buffer).to_string()
  }

  fn precise_f32(x: f32) -> String {
    let mut buffer = [0u8; 144];
    to_chars_precise_scientific(x, &mut buffer).to_string()
  }

  fn fixed_f64(x: f64, precision: u32) -> String {
    let mut buffer = [0u8; 800];
    to_chars_fixed_precision_scientific(x, &mut buffer, precision).to_string()
  }

  fn fixed_f32(x: f32, precision: u32) -> String {
    let mut buffer = [0u8; 144];
    to_chars_fixed_precision_scientific(x, &mut buffer, precision).to_string()
  }

  #[test]
  fn shortest_scenarios() {
    assert_eq!(shortest_f32(1.0), "1E0");
    assert_eq!(shortest_f32(3.4028235e38), "3.4028235E38");
    assert_eq!(shortest_f64(2.2250738585072014e-308), "2.2250738585072014E-308");
    assert_eq!(shortest_f64(1.0), "1E0");
    assert_eq!(shortest_f64(123.456), "1.23456E2");
    assert_eq!(shortest_f64(-0.25), "-2.5E-1");
    assert_eq!(shortest_f64(5e-324), "5E-324");
    assert_eq!(shortest_f64(1.7976931348623157e308), "1.7976931348623157E308");
  }

  #[test]
  fn shortest_specials() {
    assert_eq!(shortest_f64(0.0), "0E0");
    assert_eq!(shortest_f64(-0.0), "-0E0");
    assert_eq!(shortest_f64(f64::INFINITY), "Infinity");
    assert_eq!(shortest_f64(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(shortest_f64(f64::NAN), "nan");
    assert_eq!(shortest_f32(f32::NAN), "nan");
  }

  #[test]
  fn precise_scenarios() {
    assert_eq!(
      precise_f64(0.1),
      "1.000000000000000055511151231257827021181583404541015625e-1",
    );
    assert_eq!(precise_f64(1.0), "1e+0");
    assert_eq!(precise_f64(0.5), "5e-1");
    assert_eq!(precise_f64(1.5), "1.5e+0");
    assert_eq!(precise_f64(-2.0), "-2e+0");
    assert_eq!(precise_f64(1024.0), "1.024e+3");
    assert_eq!(precise_f32(0.1), "1.00000001490116119384765625e-01");
    assert_eq!(precise_f32(2.0), "2e+00");
  }

  #[test]
  fn precise_zero_segment_run() {
    // The second segment of the expansion is exactly 000000000; the stream
    // must keep going.
    let x = 1.0f64 + (2.0f64).powi(-33);
    assert_eq!(precise_f64(x), "1.000000000116415321826934814453125e+0");
  }

  #[test]
  fn precise_specials() {
    assert_eq!(precise_f64(0.0), "0e+0");
    assert_eq!(precise_f64(-0.0), "-0e+0");
    assert_eq!(precise_f32(0.0), "0e+00");
    assert_eq!(precise_f64(f64::NAN), "nan");
    assert_eq!(precise_f64(f64::NEG_INFINITY), "-Infinity");
  }

  #[test]
  fn precise_smallest_subnormal() {
    assert_eq!(
      precise_f64(5e-324),
      "4.940656458412465441765687928682213723650598026143247644255856825006755072702087518652998363616359923797965646954457177309266567103559397963987747960107818781263007131903114045278458171678489821036887186360569987307230500063874091535649843873124733972731696151400317153853980741262385655911710266585566867681870395603106249319452715914924553293054565444011274801297099995419319894090804165633245247571478690147267801593552386115501348035264934720193790268107107491703332226844753335720832431936092382893458368060106011506169809753078342277318329247904982524730776375927247874656084778203734469699533647017972677717585125660551199131504891101451037862738167250955837389733598993664809941164205702637090279242767544565229087538682506419718265533447265625e-324",
    );
  }

  #[test]
  fn fixed_precision_scenarios() {
    assert_eq!(fixed_f64(1.0, 3), "1.000e+00");
    assert_eq!(fixed_f32(1.0, 3), "1.000e+00");
    assert_eq!(fixed_f64(1.0, 0), "1e+00");
    assert_eq!(fixed_f64(0.0, 0), "0");
    assert_eq!(fixed_f64(0.0, 3), "0.000e+00");
    assert_eq!(fixed_f64(f64::NAN, 3), "nan");
    assert_eq!(fixed_f64(f64::NEG_INFINITY, 3), "-Infinity");
    assert_eq!(fixed_f64(-0.5, 2), "-5.00e-01");
  }

  #[test]
  fn fixed_precision_rounding() {
    assert_eq!(fixed_f64(123.456, 2), "1.23e+02");
    assert_eq!(fixed_f64(123.456, 4), "1.2346e+02");
    assert_eq!(fixed_f64(0.1, 3), "1.000e-01");
    assert_eq!(fixed_f64(0.1, 20), "1.00000000000000005551e-01");
    // Round half to even on the exact expansion.
    assert_eq!(fixed_f64(0.5, 0), "5e-01");
    assert_eq!(fixed_f64(2.5, 0), "2e+00");
    assert_eq!(fixed_f64(3.5, 0), "4e+00");
    assert_eq!(fixed_f64(9.9999, 3), "1.000e+01");
    assert_eq!(fixed_f64(9.5, 0), "1e+01");
  }

  #[test]
  fn fixed_precision_nine_runs() {
    // 0.3 is 0.299999999999999988897769753748...; nines must buffer until
    // the rounding digit resolves them.
    assert_eq!(fixed_f64(0.3, 4), "3.0000e-01");
    assert_eq!(fixed_f64(0.3, 17), "2.99999999999999989e-01");
    assert_eq!(fixed_f64(0.3, 20), "2.99999999999999988898e-01");
    // A long nine-run crossing a segment boundary.
    assert_eq!(fixed_f64(0.9999999999999999, 10), "1.0000000000e+00");
    assert_eq!(fixed_f64(0.9999999999999999, 16), "9.9999999999999989e-01");
  }

  #[test]
  fn fixed_precision_large() {
    assert_eq!(fixed_f64(1e300, 5), "1.00000e+300");
    assert_eq!(fixed_f64(1e-300, 5), "1.00000e-300");
    assert_eq!(fixed_f32(3.4028235e38, 4), "3.4028e+38");
    assert_eq!(fixed_f32(1e-45, 2), "1.40e-45");
  }

  #[test]
  fn fixed_precision_agrees_with_std() {
    for precision in 0..40u32 {
      for x in [
        1.0f64, 0.1, 0.3, 123.456, 1e-9, 9.999999999, 0.29999999999999998,
        5e-324, f64::MAX, f64::MIN_POSITIVE, 2f64.powi(-33),
      ] {
        let expected = format!("{:.*e}", precision as usize, x);
        // std omits the exponent sign and padding; normalize ours to match.
        let ours = fixed_f64(x, precision);
        let (mantissa, exp) = ours.split_once('e').unwrap();
        let exp: i32 = exp.parse().unwrap();
        let normalized = format!("{mantissa}e{exp}");
        assert_eq!(normalized, expected, "x = {x:?}, precision = {precision}");
      }
    }
  }

  #[test]
  fn policy_variant_compiles() {
    use crate::policy::{binary_rounding, trailing_zero};
    let mut buffer = [0u8; 24];
    let s = to_chars_shortest_scientific_with(
      1.0f64,
      &mut buffer,
      Policy::new()
        .trailing_zero(trailing_zero::Remove)
        .binary_rounding(binary_rounding::NearestToEven),
    );
    assert_eq!(s, "1E0");
  }

  #[test]
  fn shortest_roundtrips_through_std() {
    let mut buffer = [0u8; 24];
    for bits in (0..=u32::MAX).step_by(0x100_0001) {
      let x = f32::from_bits(bits);
      if x.is_finite() && x != 0.0 {
        let s = to_chars_shortest_scientific(x, &mut buffer);
        let parsed: f32 = s.parse().unwrap();
        assert_eq!(parsed.to_bits(), bits, "s = {s}");
      }
    }
  }
}
