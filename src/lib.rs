#![cfg_attr(not(test), no_std)]
//! Correctly-rounded, minimum-length conversions between IEEE-754 binary
//! floats (`f32`/`f64`) and decimal strings, in both directions.
//!
//! Four algorithms share one set of precomputed power-of-10 tables:
//!
//!   - [`to_shortest_decimal`]: binary to the shortest decimal that parses
//!     back to the same value, with full rounding-mode control (the
//!     Dragonbox algorithm).
//!   - [`SegmentGenerator`]: binary to the *exact* decimal expansion,
//!     streamed left-to-right in nine-digit segments (the Ryu-printf
//!     scheme); [`to_chars_precise_scientific`] and
//!     [`to_chars_fixed_precision_scientific`] are built on it.
//!   - [`to_binary_limited_precision`]: decimal to binary for significands
//!     within the format's digit limit.
//!   - [`from_chars_unlimited`]: correctly rounded parsing of arbitrarily
//!     long numerals, seeded by the limited-precision conversion and decided
//!     by comparing the tail against the exact expansion of the half-way
//!     point.
//!
//! # Usage
//!
//! ```
//! // Shortest round-trip formatting.
//! let mut buffer = [0u8; 24];
//! assert_eq!(fpconv::to_chars_shortest_scientific(0.3f64, &mut buffer), "3E-1");
//!
//! // The exact value stored in a float.
//! let mut buffer = [0u8; 800];
//! assert_eq!(
//!   fpconv::to_chars_precise_scientific(0.5f64, &mut buffer),
//!   "5e-1",
//! );
//!
//! // Correctly rounded parsing, no matter how many digits.
//! let bits = fpconv::from_chars_unlimited::<f64>("0.3").unwrap();
//! assert_eq!(bits.to_float(), 0.3);
//!
//! // Conversions are policy-parameterized; see the `policy` module.
//! use fpconv::policy::{Policy, binary_rounding};
//! let d = fpconv::to_shortest_decimal_with(
//!   0.1f64,
//!   Policy::new().binary_rounding(binary_rounding::TowardZero),
//! );
//! assert_eq!((d.significand, d.exponent), (10000000000000001, -17));
//! ```
//!
//! Every conversion is a pure function over plain values: no allocation, no
//! locks, no global state beyond the immutable tables, so concurrent use
//! needs no synchronization.

mod cache;
mod carrier;
mod decimal;
mod div;
mod float;
mod log;
mod parse;
pub mod policy;
mod render;
mod segment;
mod shortest;
mod to_binary;

pub use carrier::Carrier;
pub use decimal::DecimalFp;
pub use float::{Class, Float, FloatBits};
pub use parse::{from_chars_limited, from_chars_unlimited, ParseFloatError};
pub use render::{
  to_chars_fixed_precision_scientific, to_chars_precise_scientific,
  to_chars_shortest_scientific, to_chars_shortest_scientific_with,
};
pub use segment::{SegmentGenerator, SEGMENT_DIVISOR, SEGMENT_SIZE};
pub use shortest::{to_shortest_decimal, to_shortest_decimal_with};
pub use to_binary::{to_binary_limited_precision, to_binary_limited_precision_with};
