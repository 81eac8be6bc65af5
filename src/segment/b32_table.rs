// Generated by gen-tables/generate.py; do not edit by hand.

use crate::carrier::wide::U96;

pub(crate) const MIN_N: i32 = -4;
pub(crate) const MAX_N: i32 = 17;

/// For segment index `n`, `ENTRIES[INDEX[n - MIN_N] + k]` is the
/// multiplier for exponent index `k`.
pub(crate) static INDEX: [i16; 22] = [
  -5, -1, 6, 15, 27, 42, 49, 58, 69, 80, 90, 99,
  108, 116, 123, 129, 134, 138, 142, 145, 147, 148, 
];

pub(crate) static ENTRIES: [U96; 149] = [
  U96 { hi: 0x00000000, lo: 0x0000002a8909265a },
  U96 { hi: 0x00000000, lo: 0x000154484932d2e7 },
  U96 { hi: 0x00000000, lo: 0x00000013ce9a36f2 },
  U96 { hi: 0x00000000, lo: 0x00009e74d1b791e0 },
  U96 { hi: 0x00000000, lo: 0x04f3a68dbc8f03f2 },
  U96 { hi: 0x00000027, lo: 0x9d346de4781f921d },
  U96 { hi: 0x00013ce9, lo: 0xa36f23c0fc90eebd },
  U96 { hi: 0x00000000, lo: 0x00000009392ee8e9 },
  U96 { hi: 0x00000000, lo: 0x000049c97747490e },
  U96 { hi: 0x00000000, lo: 0x024e4bba3a487574 },
  U96 { hi: 0x00000012, lo: 0x725dd1d243aba0e7 },
  U96 { hi: 0x00009392, lo: 0xee8e921d5d073aff },
  U96 { hi: 0x049c9774, lo: 0x7490eae839d7f991 },
  U96 { hi: 0x92688ba4, lo: 0x875741cebfcc8b98 },
  U96 { hi: 0x00000000, lo: 0x000000044b82fa0a },
  U96 { hi: 0x00000000, lo: 0x0000225c17d04dae },
  U96 { hi: 0x00000000, lo: 0x0112e0be826d694c },
  U96 { hi: 0x00000008, lo: 0x9705f4136b4a5974 },
  U96 { hi: 0x000044b8, lo: 0x2fa09b5a52cb98b5 },
  U96 { hi: 0x0225c17d, lo: 0x04dad2965cc5a02b },
  U96 { hi: 0x6a831826, lo: 0xd694b2e62d015120 },
  U96 { hi: 0xde2c66b4, lo: 0xa59731680a88f896 },
  U96 { hi: 0x6c8f852c, lo: 0xb98b405447c4a982 },
  U96 { hi: 0x7e0bc5cc, lo: 0x5a02a23e254c0c40 },
  U96 { hi: 0x00000000, lo: 0x0000000200000000 },
  U96 { hi: 0x00000000, lo: 0x0000100000000000 },
  U96 { hi: 0x00000000, lo: 0x0080000000000000 },
  U96 { hi: 0x00000004, lo: 0x0000000000000000 },
  U96 { hi: 0x00002000, lo: 0x0000000000000000 },
  U96 { hi: 0x01000000, lo: 0x0000000000000000 },
  U96 { hi: 0x8ca6c000, lo: 0x0000000000000000 },
  U96 { hi: 0x2c5b4000, lo: 0x0000000000000000 },
  U96 { hi: 0x04857800, lo: 0x0000000000000000 },
  U96 { hi: 0xc7d81000, lo: 0x0000000000000000 },
  U96 { hi: 0x9a37e000, lo: 0x0000000000000000 },
  U96 { hi: 0xaccd2000, lo: 0x0000000000000000 },
  U96 { hi: 0x53d42000, lo: 0x0000000000000000 },
  U96 { hi: 0x00000000, lo: 0x00000000ee6b2800 },
  U96 { hi: 0x00000000, lo: 0x0000077359400000 },
  U96 { hi: 0x00000000, lo: 0x003b9aca00000000 },
  U96 { hi: 0x00000001, lo: 0xdcd6500000000000 },
  U96 { hi: 0x00000ee6, lo: 0xb280000000000000 },
  U96 { hi: 0x00773594, lo: 0x0000000000000000 },
  U96 { hi: 0x00000000, lo: 0x000003782dace9d9 },
  U96 { hi: 0x00000000, lo: 0x001bc16d674ec800 },
  U96 { hi: 0x00000000, lo: 0xde0b6b3a76400000 },
  U96 { hi: 0x000006f0, lo: 0x5b59d3b200000000 },
  U96 { hi: 0x003782da, lo: 0xce9d900000000000 },
  U96 { hi: 0xcdabae74, lo: 0xec80000000000000 },
  U96 { hi: 0xa63db764, lo: 0x0000000000000000 },
  U96 { hi: 0x00000000, lo: 0x0000019d971e4fe8 },
  U96 { hi: 0x00000000, lo: 0x000cecb8f27f4200 },
  U96 { hi: 0x00000000, lo: 0x6765c793fa10079d },
  U96 { hi: 0x0000033b, lo: 0x2e3c9fd0803ce800 },
  U96 { hi: 0x0019d971, lo: 0xe4fe8401e7400000 },
  U96 { hi: 0xcecb8f27, lo: 0xf4200f3a00000000 },
  U96 { hi: 0x5513bfa1, lo: 0x0079d00000000000 },
  U96 { hi: 0xc06cf803, lo: 0xce80000000000000 },
  U96 { hi: 0xdc41fe74, lo: 0x0000000000000000 },
  U96 { hi: 0x00000000, lo: 0x000000c097ce7bc9 },
  U96 { hi: 0x00000000, lo: 0x000604be73de4838 },
  U96 { hi: 0x00000000, lo: 0x3025f39ef241c56c },
  U96 { hi: 0x00000181, lo: 0x2f9cf7920e2b6697 },
  U96 { hi: 0x000c097c, lo: 0xe7bc90715b34b9f1 },
  U96 { hi: 0x604be73d, lo: 0xe4838ad9a5cf8800 },
  U96 { hi: 0x2b0fb724, lo: 0x1c56cd2e7c400000 },
  U96 { hi: 0xd54478e2, lo: 0xb66973e200000000 },
  U96 { hi: 0xe35bfdb3, lo: 0x4b9f100000000000 },
  U96 { hi: 0x0071725c, lo: 0xf880000000000000 },
  U96 { hi: 0xc0516fc4, lo: 0x0000000000000000 },
  U96 { hi: 0x00000000, lo: 0x166bb7f0435c9e71 },
  U96 { hi: 0x000000b3, lo: 0x5dbf821ae4f38bdd },
  U96 { hi: 0x00059aed, lo: 0xfc10d7279c5eed14 },
  U96 { hi: 0x2cd76fe0, lo: 0x86b93ce2f768a00b },
  U96 { hi: 0x2c57dc35, lo: 0xc9e717bb45005915 },
  U96 { hi: 0xd7d24e4f, lo: 0x38bdda2802c8a800 },
  U96 { hi: 0xd4d1f1c5, lo: 0xeed1401645400000 },
  U96 { hi: 0x1a648f76, lo: 0x8a00b22a00000000 },
  U96 { hi: 0xa9e26450, lo: 0x0591500000000000 },
  U96 { hi: 0x466d882c, lo: 0x8a80000000000000 },
  U96 { hi: 0xe76f0454, lo: 0x0000000000000000 },
  U96 { hi: 0x14e18788, lo: 0x14c9cd8a33321216 },
  U96 { hi: 0x574f48a6, lo: 0x4e6c51999090b65f },
  U96 { hi: 0xeac12a73, lo: 0x628ccc8485b2fb3e },
  U96 { hi: 0x7d789b14, lo: 0x6664242d97d9f649 },
  U96 { hi: 0xbc095b33, lo: 0x21216cbecfb24800 },
  U96 { hi: 0x34d84109, lo: 0x0b65f67d92400000 },
  U96 { hi: 0xde6a805b, lo: 0x2fb3ec9200000000 },
  U96 { hi: 0x8086697d, lo: 0x9f64900000000000 },
  U96 { hi: 0x052f6cfb, lo: 0x2480000000000000 },
  U96 { hi: 0x80fcf924, lo: 0x0000000000000000 },
  U96 { hi: 0x135c50ae, lo: 0xec798abe93f11d65 },
  U96 { hi: 0x49098763, lo: 0xcc55f49f88eb2f73 },
  U96 { hi: 0x5bc82662, lo: 0xafa4fc47597b9fcd },
  U96 { hi: 0x5f5bf57d, lo: 0x27e23acbdcfe6800 },
  U96 { hi: 0x1edaf13f, lo: 0x11d65ee7f3400000 },
  U96 { hi: 0x0a9d908e, lo: 0xb2f73f9a00000000 },
  U96 { hi: 0x2c6d3d97, lo: 0xb9fcd00000000000 },
  U96 { hi: 0x947235cf, lo: 0xe680000000000000 },
  U96 { hi: 0x21fe4734, lo: 0x0000000000000000 },
  U96 { hi: 0x145d2225, lo: 0x57a51bf8c7373d9b },
  U96 { hi: 0xdc3bfabd, lo: 0x28dfc639b9ecdec6 },
  U96 { hi: 0xbe4d7146, lo: 0xfe31cdcf66f634e1 },
  U96 { hi: 0xa394e7f1, lo: 0x8e6e7b37b1a70800 },
  U96 { hi: 0x25250473, lo: 0x73d9bd8d38400000 },
  U96 { hi: 0x109cc39e, lo: 0xcdec69c200000000 },
  U96 { hi: 0xa6acc66f, lo: 0x634e100000000000 },
  U96 { hi: 0xad36e31a, lo: 0x7080000000000000 },
  U96 { hi: 0xd6ab7b84, lo: 0x0000000000000000 },
  U96 { hi: 0x51a02fb5, lo: 0xc68f7e7e45589f01 },
  U96 { hi: 0x26112634, lo: 0x7bf3f22ac4f809c5 },
  U96 { hi: 0xecbcb3df, lo: 0x9f915627c04e2800 },
  U96 { hi: 0x84a654fc, lo: 0x8ab13e0271400000 },
  U96 { hi: 0x6be4ec55, lo: 0x89f0138a00000000 },
  U96 { hi: 0xbfc7fc4f, lo: 0x809c500000000000 },
  U96 { hi: 0x5c7c2404, lo: 0xe280000000000000 },
  U96 { hi: 0x68c61714, lo: 0x0000000000000000 },
  U96 { hi: 0xb8ec8499, lo: 0xaf031ab370ff9bb9 },
  U96 { hi: 0x7370ad78, lo: 0x18d59b87fcddc800 },
  U96 { hi: 0x949be8c6, lo: 0xacdc3fe6ee400000 },
  U96 { hi: 0x812ad566, lo: 0xe1ff377200000000 },
  U96 { hi: 0x8076ef0f, lo: 0xf9bb900000000000 },
  U96 { hi: 0x77c727cd, lo: 0xdc80000000000000 },
  U96 { hi: 0xd2f1cee4, lo: 0x0000000000000000 },
  U96 { hi: 0xa2fe2477, lo: 0x7839e74404a7e800 },
  U96 { hi: 0x1720fbc1, lo: 0xcf3a20253f400000 },
  U96 { hi: 0xa0fd1e79, lo: 0xd10129fa00000000 },
  U96 { hi: 0xd279de88, lo: 0x094fd00000000000 },
  U96 { hi: 0xe894e84a, lo: 0x7e80000000000000 },
  U96 { hi: 0xcd5b4bf4, lo: 0x0000000000000000 },
  U96 { hi: 0x6ff827fd, lo: 0xf1e4ac9834400000 },
  U96 { hi: 0xc0fec78f, lo: 0x2564c1a200000000 },
  U96 { hi: 0xc2a6912b, lo: 0x260d100000000000 },
  U96 { hi: 0x08ac1930, lo: 0x6880000000000000 },
  U96 { hi: 0x75cff344, lo: 0x0000000000000000 },
  U96 { hi: 0xe147d8d5, lo: 0x5f291eea00000000 },
  U96 { hi: 0x22d352f9, lo: 0x48f7500000000000 },
  U96 { hi: 0x23701247, lo: 0xba80000000000000 },
  U96 { hi: 0x6152bdd4, lo: 0x0000000000000000 },
  U96 { hi: 0x18d6f90a, lo: 0xf97c945200000000 },
  U96 { hi: 0x58a00fcb, lo: 0xe4a2900000000000 },
  U96 { hi: 0x43f47725, lo: 0x1480000000000000 },
  U96 { hi: 0xadb110a4, lo: 0x0000000000000000 },
  U96 { hi: 0xe85a3ff1, lo: 0xb172d00000000000 },
  U96 { hi: 0xd4eed58b, lo: 0x9680000000000000 },
  U96 { hi: 0x131794b4, lo: 0x0000000000000000 },
  U96 { hi: 0xa5430416, lo: 0xe080000000000000 },
  U96 { hi: 0x8c29ff04, lo: 0x0000000000000000 },
  U96 { hi: 0xd114f894, lo: 0x0000000000000000 },
];
