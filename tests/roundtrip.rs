//! Round-trip coverage through the public interface.
//!
//! The full binary32 sweep touches every finite bit pattern and takes a few
//! minutes in release mode; run it explicitly with
//! `cargo test --release -- --ignored`. The strided variant runs everywhere.

use fpconv::{
  from_chars_unlimited, to_binary_limited_precision, to_chars_shortest_scientific,
  to_shortest_decimal,
};

fn assert_roundtrip_f32(bits: u32) {
  let x = f32::from_bits(bits);
  if !x.is_finite() || x == 0.0 {
    return;
  }

  let mut buffer = [0u8; 16];
  let rendered = to_chars_shortest_scientific(x, &mut buffer);
  let reparsed = from_chars_unlimited::<f32>(rendered).unwrap();
  assert_eq!(reparsed.to_carrier(), bits, "rendered {rendered}");

  let decimal = to_shortest_decimal(x);
  assert_eq!(
    to_binary_limited_precision(decimal).to_carrier(),
    bits,
    "decimal {decimal:?}",
  );
}

#[test]
fn strided_f32() {
  for bits in (0..=u32::MAX).step_by(2503) {
    assert_roundtrip_f32(bits);
  }
}

#[test]
#[ignore = "full 2^32 sweep; takes minutes in release mode"]
fn exhaustive_f32() {
  for bits in 0..=u32::MAX {
    assert_roundtrip_f32(bits);
  }
}

#[test]
fn boundary_patterns_f64() {
  let mut buffer = [0u8; 24];
  let interesting = [
    1,
    (1 << 52) - 1,
    1 << 52,
    (1 << 52) + 1,
    0x7fef_ffff_ffff_ffff,
    0x3ff0_0000_0000_0000,
    0x3ff0_0000_0000_0001,
    0x0010_0000_0000_0000,
    0x000f_ffff_ffff_ffff,
    0x4340_0000_0000_0000,
    0x4340_0000_0000_0001,
  ];
  for bits in interesting {
    let x = f64::from_bits(bits);
    let rendered = to_chars_shortest_scientific(x, &mut buffer);
    let reparsed = from_chars_unlimited::<f64>(rendered).unwrap();
    assert_eq!(reparsed.to_carrier(), bits, "rendered {rendered}");
    let std_parsed: f64 = rendered.parse().unwrap();
    assert_eq!(std_parsed.to_bits(), bits);
  }
}
