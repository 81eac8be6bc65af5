// Generated by gen-tables/generate.py; do not edit by hand.

pub(crate) const COMPRESSION_RATIO: i32 = 27;

pub(crate) static BASE: [u128; 25] = [
  0xeef453d6923bd65a_113faa2906a13b40,
  0xc1069cd4eabe89f8_999ec0bb696e840b,
  0x9becce62836ac577_4ee367f9430aec33,
  0xfbe9141915d7a922_4bf1ff9f0062baa9,
  0xcb7ddcdda26da268_a9942f5dcf7dfd0a,
  0xa46116538d0deb78_52d9be85f074e609,
  0x84c8d4dfd2c63f3b_29ecd9f40041e074,
  0xd686619ba27255a2_c80a537b0efefebe,
  0xad4ab7112eb3929d_86c16c98d2c953c7,
  0x8bfbea76c619ef36_57eb4edb3c55b65b,
  0xe2280b6c20dd5232_25c6da63c38de1b1,
  0xb6b00d69bb55c8d1_3d607b97c5fd0d23,
  0x9392ee8e921d5d07_3aff322e62439fd0,
  0xee6b280000000000_0000000000000000,
  0xc097ce7bc90715b3_4b9f100000000000,
  0x9b934c3b330c8577_63cc55f49f88eb2f,
  0xfb5878494ace3a5f_04ab48a04065c723,
  0xcb090c8001ab551c_5cadf5bfd3072cc5,
  0xa402b9c5a8d3a6e7_5f16206c9c6209a6,
  0x847c9b5d7c2e09b7_69956135febada11,
  0xd60b3bd56a5586f1_8a71e223d8d3b074,
  0xace73cbfdc0bfb7b_636cc64d1001550b,
  0x8bab8eefb6409c1a_1ad089b6c2f7548e,
  0xe1a63853bbd26451_5e7873f8a0396973,
  0xb6472e511c81471d_e0133fe4adf8e952,
];

pub(crate) static POW5: [u64; 27] = [
  1,
  5,
  25,
  125,
  625,
  3125,
  15625,
  78125,
  390625,
  1953125,
  9765625,
  48828125,
  244140625,
  1220703125,
  6103515625,
  30517578125,
  152587890625,
  762939453125,
  3814697265625,
  19073486328125,
  95367431640625,
  476837158203125,
  2384185791015625,
  11920928955078125,
  59604644775390625,
  298023223876953125,
  1490116119384765625,
];

pub(crate) static ERRORS: [u32; 42] = [
  0x15155440,
  0x15051010,
  0x45450501,
  0x51454000,
  0x44545545,
  0x40100001,
  0x44504101,
  0x01055405,
  0x96510050,
  0x55555515,
  0x45154145,
  0x40145145,
  0x50140155,
  0x04004450,
  0x00000000,
  0x50405504,
  0x04455455,
  0x00000000,
  0x00000000,
  0x01011001,
  0x01000050,
  0x00000000,
  0x00000000,
  0x00000000,
  0x00000000,
  0x44555000,
  0x54141101,
  0x55551454,
  0x04055505,
  0x00001550,
  0x00400400,
  0x01111000,
  0x14514540,
  0x54155411,
  0x55545455,
  0x45550505,
  0x50155515,
  0x00100105,
  0x50400141,
  0x54145555,
  0x51001556,
  0x01155500,
];
