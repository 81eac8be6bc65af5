// Generated by gen-tables/generate.py; do not edit by hand.

use crate::carrier::wide::U192;

pub(crate) const MIN_N: i32 = -34;
pub(crate) const MAX_N: i32 = 120;

/// For segment index `n`, `ENTRIES[INDEX[n - MIN_N] + k]` is the
/// multiplier for exponent index `k`.
pub(crate) static INDEX: [i16; 155] = [
  -14, -12, -10, -7, -3, 2, 7, 12, 18, 25, 33, 41,
  50, 59, 70, 81, 93, 105, 117, 130, 144, 159, 174, 190,
  206, 224, 242, 261, 280, 299, 320, 341, 363, 385, 408, 432,
  436, 440, 444, 449, 454, 460, 466, 473, 480, 488, 496, 505,
  514, 523, 533, 543, 554, 565, 577, 589, 602, 615, 629, 643,
  657, 672, 687, 703, 719, 736, 753, 771, 789, 807, 825, 843,
  860, 877, 894, 911, 928, 944, 960, 976, 992, 1008, 1023, 1038,
  1053, 1068, 1083, 1097, 1111, 1125, 1139, 1153, 1167, 1180, 1193, 1206,
  1219, 1232, 1244, 1256, 1268, 1280, 1292, 1303, 1314, 1325, 1336, 1347,
  1357, 1367, 1377, 1387, 1397, 1406, 1415, 1424, 1433, 1442, 1450, 1458,
  1466, 1474, 1482, 1489, 1496, 1503, 1510, 1517, 1523, 1529, 1535, 1541,
  1547, 1552, 1557, 1562, 1567, 1572, 1577, 1581, 1585, 1589, 1593, 1597,
  1600, 1603, 1606, 1609, 1612, 1614, 1616, 1618, 1620, 1622, 1623, 
];

pub(crate) static ENTRIES: [U192; 1624] = [
  U192 { hi: 0x0000000000000000, mid: 0x00000000b3c4f1ba, lo: 0x87bc86968f48a489 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000053, lo: 0xb62c119c769310d7 },
  U192 { hi: 0x0000000000000000, mid: 0x0014ed8b04671da4, lo: 0xc435e55e57015ede },
  U192 { hi: 0x0000000000000000, mid: 0x0000000009becce6, lo: 0x2836ac5774ee367f },
  U192 { hi: 0x000000000000026f, mid: 0xb3398a0dab15dd3b, lo: 0x8d9fe50c2bb0cafb },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000004, lo: 0x89bb61b6ccccadf1 },
  U192 { hi: 0x0000000000000000, mid: 0x0001226ed86db333, lo: 0x2b7c462010137384 },
  U192 { hi: 0x00000000489bb61b, mid: 0x6ccccadf11880404, lo: 0xdce10fd0cdd54e1c },
  U192 { hi: 0x8f3c533332b7c462, mid: 0x0101373843f43375, lo: 0x53873da2bfad984d },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000873e4f, lo: 0x75e2224e685a7744 },
  U192 { hi: 0x0000000000000021, mid: 0xcf93dd7888939a16, lo: 0x9dd129ba0128a473 },
  U192 { hi: 0x000873e4f75e2224, mid: 0xe685a7744a6e804a, lo: 0x291cc35eddfcf099 },
  U192 { hi: 0x5f5e01a169dd129b, mid: 0xa0128a4730d7b77f, lo: 0x3c265b5de32ca034 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000000, lo: 0x3efa45064575ea48 },
  U192 { hi: 0x0000000000000000, mid: 0x00000fbe9141915d, lo: 0x7a9224bf1ff9f006 },
  U192 { hi: 0x0000000003efa450, mid: 0x64575ea4892fc7fe, lo: 0x7c018aeaa1c18a2c },
  U192 { hi: 0x740fe915d7a9224b, mid: 0xf1ff9f0062baa870, lo: 0x628b31d862d72fbb },
  U192 { hi: 0x3097e47fe7c018ae, mid: 0xaa1c18a2cc7618b5, lo: 0xcbeef70382d65dae },
  U192 { hi: 0x0000000000000000, mid: 0x00000000000754e1, lo: 0x13b91f745e5a32f0 },
  U192 { hi: 0x0000000000000001, mid: 0xd53844ee47dd1796, lo: 0x8cbc2b52f38395b8 },
  U192 { hi: 0x0000754e113b91f7, mid: 0x45e5a32f0ad4bce0, lo: 0xe56e05067413f560 },
  U192 { hi: 0x2058597968cbc2b5, mid: 0x2f38395b81419d04, lo: 0xfd5823e5b86731ec },
  U192 { hi: 0x861973ce0e56e050, mid: 0x67413f5608f96e19, lo: 0xcc7b1670e45a0927 },
  U192 { hi: 0x0000000000000000, mid: 0x000000da7f5bf590, lo: 0x966848af39a47550 },
  U192 { hi: 0x0000000000369fd6, mid: 0xfd64259a122bce69, lo: 0x1d541aa267a8c0a5 },
  U192 { hi: 0x9e198f590966848a, mid: 0xf39a475506a899ea, lo: 0x30294cc2934e662c },
  U192 { hi: 0x2beface691d541aa, mid: 0x267a8c0a5330a4d3, lo: 0x998b01fd0b772148 },
  U192 { hi: 0x7165219ea30294cc, mid: 0x2934e662c07f42dd, lo: 0xc8521f993a5c8af0 },
  U192 { hi: 0x0000000000000000, mid: 0x00000000000065be, lo: 0xee6ed136d13454ca },
  U192 { hi: 0x0000000000000000, mid: 0x196fbb9bb44db44d, lo: 0x153285ebb9efbfa1 },
  U192 { hi: 0x0000065beee6ed13, mid: 0x6d13454ca17aee7b, lo: 0xefe84d32da8f1337 },
  U192 { hi: 0xdafb4344d153285e, mid: 0xbb9efbfa134cb6a3, lo: 0xc4cdc89b78bc7866 },
  U192 { hi: 0x920d16e7befe84d3, mid: 0x2da8f1337226de2f, lo: 0x1e19b782b0dd803f },
  U192 { hi: 0x3045236a3c4cdc89, mid: 0xb78bc7866de0ac37, lo: 0x600fc7abdf03fb39 },
  U192 { hi: 0x449845e2f1e19b78, mid: 0x2b0dd803f1eaf7c0, lo: 0xfece458897a0e12f },
  U192 { hi: 0x0000000000000000, mid: 0x0000000bd8430bd0, lo: 0x827723150c6ff782 },
  U192 { hi: 0x000000000002f610, mid: 0xc2f4209dc8c5431b, lo: 0xfde0aa0e0d4daceb },
  U192 { hi: 0xbd8430bd08277231, mid: 0x50c6ff782a838353, lo: 0x6b3af049fa14a1c5 },
  U192 { hi: 0x616b1c31bfde0aa0, mid: 0xe0d4dacebc127e85, lo: 0x2871525f326d079c },
  U192 { hi: 0xcdcaf03536b3af04, mid: 0x9fa14a1c5497cc9b, lo: 0x41e71748ae3c9e5a },
  U192 { hi: 0x65c63fe852871525, mid: 0xf326d079c5d22b8f, lo: 0x2796abd8a2365623 },
  U192 { hi: 0xaf6e74c9b41e7174, mid: 0x8ae3c9e5aaf6288d, lo: 0x9588fd892921a878 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000584, lo: 0x01c96621a4ef65ec },
  U192 { hi: 0x0000000000000000, mid: 0x016100725988693b, lo: 0xd97b1af29b2d559f },
  U192 { hi: 0x00000058401c9662, mid: 0x1a4ef65ec6bca6cb, lo: 0x5567d9ff09d2e435 },
  U192 { hi: 0x16019693bd97b1af, mid: 0x29b2d559f67fc274, lo: 0xb90d5ec8830821d1 },
  U192 { hi: 0x7d003a6cb5567d9f, mid: 0xf09d2e4357b220c2, lo: 0x0874714a10d2c434 },
  U192 { hi: 0x0631e4274b90d5ec, mid: 0x8830821d1c528434, lo: 0xb10d201138fef662 },
  U192 { hi: 0xeba9820c20874714, mid: 0xa10d2c4348044e3f, lo: 0xbd98a685447daa72 },
  U192 { hi: 0x8eb0d0434b10d201, mid: 0x138fef6629a1511f, lo: 0x6a9c85dd43ddd88a },
  U192 { hi: 0x0000000000000000, mid: 0x00000000a4611653, lo: 0x8d0deb7852d9be85 },
  U192 { hi: 0x0000000000002918, mid: 0x4594e3437ade14b6, lo: 0x6fa17c1d398235b9 },
  U192 { hi: 0x0a46116538d0deb7, mid: 0x852d9be85f074e60, lo: 0x8d6e59609b01cf8f },
  U192 { hi: 0xc403614b66fa17c1, mid: 0xd398235b965826c0, lo: 0x73e3cdf50a0da833 },
  U192 { hi: 0x48428ce608d6e596, mid: 0x09b01cf8f37d4283, lo: 0x6a0ce991a437fb3b },
  U192 { hi: 0x7bc8aa6c073e3cdf, mid: 0x50a0da833a64690d, lo: 0xfecee651910f9eac },
  U192 { hi: 0x3d04342836a0ce99, mid: 0x1a437fb3b9946443, lo: 0xe7ab2ca8f5fe440e },
  U192 { hi: 0x07d57e90dfecee65, mid: 0x1910f9eacb2a3d7f, lo: 0x9103afc5f4a86bd7 },
  U192 { hi: 0x0000000000000000, mid: 0x000000000000004c, lo: 0x8b888296c5f9e2ba },
  U192 { hi: 0x0000000000000000, mid: 0x001322e220a5b17e, lo: 0x78aea37ba2a5a9a3 },
  U192 { hi: 0x00000004c8b88829, mid: 0x6c5f9e2ba8dee8a9, lo: 0x6a68e2550b652834 },
  U192 { hi: 0x29960b17e78aea37, mid: 0xba2a5a9a389542d9, lo: 0x4a0d2e721e25e63e },
  U192 { hi: 0x26948e8a96a68e25, mid: 0x50b652834b9c8789, lo: 0x798f9e45f4ee8e85 },
  U192 { hi: 0x91fd242d94a0d2e7, mid: 0x21e25e63e7917d3b, lo: 0xa3a1614e14053536 },
  U192 { hi: 0x482e48789798f9e4, mid: 0x5f4ee8e858538501, lo: 0x4d4d9e1cb6ca21bf },
  U192 { hi: 0x7be407d3ba3a1614, mid: 0xe140535367872db2, lo: 0x886fc9735f7c4e8a },
  U192 { hi: 0xc3adf85014d4d9e1, mid: 0xcb6ca21bf25cd7df, lo: 0x13a295189c2f3154 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000008e93866, lo: 0x2882af53e547eb47 },
  U192 { hi: 0x000000000000023a, mid: 0x4e198a20abd4f951, lo: 0xfad1edca0bba7106 },
  U192 { hi: 0x008e938662882af5, mid: 0x3e547eb47b7282ee, lo: 0x9c41b0230e142148 },
  U192 { hi: 0x5c3097951fad1edc, mid: 0xa0bba7106c08c385, lo: 0x08521f7553679550 },
  U192 { hi: 0xc2f2a02ee9c41b02, mid: 0x30e1421487dd54d9, lo: 0xe55435c2cf5f3dbc },
  U192 { hi: 0x7c83fc38508521f7, mid: 0x553679550d70b3d7, lo: 0xcf6f2e6d18d641f4 },
  U192 { hi: 0x0e09ed4d9e55435c, mid: 0x2cf5f3dbcb9b4635, lo: 0x907d1499cd6ca9f6 },
  U192 { hi: 0xe943bb3d7cf6f2e6, mid: 0xd18d641f4526735b, lo: 0x2a7daf101c9b514c },
  U192 { hi: 0x09529c635907d149, mid: 0x9cd6ca9f6bc40726, lo: 0xd453391fffa82f42 },
  U192 { hi: 0x551e3735b2a7daf1, mid: 0x01c9b514ce47ffea, lo: 0x0bd09fa718c06337 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000004, lo: 0x2646a6fe9631f9d9 },
  U192 { hi: 0x0000000000000000, mid: 0x00010991a9bfa58c, lo: 0x7e7653d9b3e80083 },
  U192 { hi: 0x0000000042646a6f, mid: 0xe9631f9d94f66cfa, lo: 0x0020f039bad4cfbc },
  U192 { hi: 0x690d2a58c7e7653d, mid: 0x9b3e80083c0e6eb5, lo: 0x33ef286271ce6f87 },
  U192 { hi: 0xe1f9fecfa0020f03, mid: 0x9bad4cfbca189c73, lo: 0x9be1cfcfc498015e },
  U192 { hi: 0x05761eeb533ef286, mid: 0x271ce6f873f3f126, lo: 0x0057b3b513648599 },
  U192 { hi: 0x7dc3e1c739be1cfc, mid: 0xfc498015eced44d9, lo: 0x21667e33d8060112 },
  U192 { hi: 0x9e0c2f1260057b3b, mid: 0x513648599f8cf601, lo: 0x80448f7d50ecf664 },
  U192 { hi: 0x6090ac4d921667e3, mid: 0x3d80601123df543b, lo: 0x3d9935dbdf1788d0 },
  U192 { hi: 0x82c65f60180448f7, mid: 0xd50ecf664d76f7c5, lo: 0xe2341f66e5bb3c56 },
  U192 { hi: 0xd6de1543b3d9935d, mid: 0xbdf1788d07d9b96e, lo: 0xcf15998a10a0f3ea },
  U192 { hi: 0x0000000000000000, mid: 0x00000000007baa4a, lo: 0x9870c460946895f7 },
  U192 { hi: 0x000000000000001e, mid: 0xea92a61c3118251a, lo: 0x257dcb3cd1de8f9c },
  U192 { hi: 0x0007baa4a9870c46, mid: 0x0946895f72cf3477, lo: 0xa3e72b7ea8ae4f62 },
  U192 { hi: 0x45f0aa51a257dcb3, mid: 0xcd1de8f9cadfaa2b, lo: 0x93d8a85bd8137826 },
  U192 { hi: 0xcafc13477a3e72b7, mid: 0xea8ae4f62a16f604, lo: 0xde09a29e70cee414 },
  U192 { hi: 0xce359aa2b93d8a85, mid: 0xbd81378268a79c33, lo: 0xb905195b4816317b },
  U192 { hi: 0x34fec7604de09a29, mid: 0xe70cee414656d205, lo: 0x8c5ec71f284b0c98 },
  U192 { hi: 0xd2c161c33b905195, mid: 0xb4816317b1c7ca12, lo: 0xc326211698385dee },
  U192 { hi: 0x803d5d2058c5ec71, mid: 0xf284b0c98845a60e, lo: 0x177b970f5c762977 },
  U192 { hi: 0xdbcd94a12c326211, mid: 0x698385dee5c3d71d, lo: 0x8a5dcfc567f99074 },
  U192 { hi: 0x9ce4aa60e177b970, mid: 0xf5c7629773f159fe, lo: 0x641d0505146ee1ba },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000000, lo: 0x39960a6cc11ac2be },
  U192 { hi: 0x0000000000000000, mid: 0x00000e65829b3046, lo: 0xb0afa0cb4a5a3112 },
  U192 { hi: 0x00000000039960a6, mid: 0xcc11ac2be832d296, lo: 0x8c44a9444a8ed586 },
  U192 { hi: 0x4ec61b046b0afa0c, mid: 0xb4a5a3112a5112a3, lo: 0xb561b1cb208396cd },
  U192 { hi: 0x451bad2968c44a94, mid: 0x44a8ed586c72c820, lo: 0xe5b372787342f3e3 },
  U192 { hi: 0x61ba612a3b561b1c, mid: 0xb208396cdc9e1cd0, lo: 0xbcf8d0480493cea1 },
  U192 { hi: 0x4e8c54820e5b3727, mid: 0x87342f3e34120124, lo: 0xf3a84440d1535580 },
  U192 { hi: 0xdbd3d9cd0bcf8d04, mid: 0x80493cea11103454, lo: 0xd560130f6bf91865 },
  U192 { hi: 0x3487c8124f3a8444, mid: 0x0d15355804c3dafe, lo: 0x46196431d57561dd },
  U192 { hi: 0x98c6fb454d560130, mid: 0xf6bf9186590c755d, lo: 0x58775f7ccc54ff03 },
  U192 { hi: 0x89f8e5afe4619643, mid: 0x1d57561dd7df3315, lo: 0x3fc0d46a3b49382d },
  U192 { hi: 0x46e20f55d58775f7, mid: 0xccc54ff0351a8ed2, lo: 0x4e0b5ced6c9d6398 },
  U192 { hi: 0x0000000000000000, mid: 0x000000000006b433, lo: 0x0cdd1392ad164052 },
  U192 { hi: 0x0000000000000001, mid: 0xad0cc33744e4ab45, lo: 0x9014a6f61dfdfd7b },
  U192 { hi: 0x00006b4330cdd139, mid: 0x2ad1640529bd877f, lo: 0x7f5ee9d3fb9bbbb5 },
  U192 { hi: 0x59ebdab459014a6f, mid: 0x61dfdfd7ba74fee6, lo: 0xeeed7d1548fd286e },
  U192 { hi: 0x99d51077f7f5ee9d, mid: 0x3fb9bbbb5f45523f, lo: 0x4a1bac67b7759471 },
  U192 { hi: 0x22b7ffee6eeed7d1, mid: 0x548fd286eb19eddd, lo: 0x651c5cd293066d8a },
  U192 { hi: 0x86598d23f4a1bac6, mid: 0x7b7759471734a4c1, lo: 0x9b628ba300e11ba8 },
  U192 { hi: 0x35ac3eddd651c5cd, mid: 0x293066d8a2e8c038, lo: 0x46ea19c3d5515b96 },
  U192 { hi: 0x0221aa4c19b628ba, mid: 0x300e11ba8670f554, lo: 0x56e59de44cc53ecb },
  U192 { hi: 0x61798c03846ea19c, mid: 0x3d5515b967791331, lo: 0x4fb2c17d911e84d6 },
  U192 { hi: 0xa97cf755456e59de, mid: 0x44cc53ecb05f6447, lo: 0xa13596ae6305ab2c },
  U192 { hi: 0xda9bd13314fb2c17, mid: 0xd911e84d65ab98c1, lo: 0x6acb177a2b2e4130 },
  U192 { hi: 0x0000000000000000, mid: 0x000000c7caba6e7c, lo: 0x5382c8fe64a52ee9 },
  U192 { hi: 0x000000000031f2ae, mid: 0x9b9f14e0b23f9929, lo: 0x4bba5ae3f032fad2 },
  U192 { hi: 0x613a9ee7c5382c8f, mid: 0xe64a52ee96b8fc0c, lo: 0xbeb481c23d5e7116 },
  U192 { hi: 0x5099919294bba5ae, mid: 0x3f032fad20708f57, lo: 0x9c45a98619cbb6e7 },
  U192 { hi: 0x0df757c0cbeb481c, mid: 0x23d5e7116a618672, lo: 0xedb9db265a1c797f },
  U192 { hi: 0xec5fa0f579c45a98, mid: 0x619cbb6e76c99687, lo: 0x1e5fe68a8fe824a6 },
  U192 { hi: 0x993288672edb9db2, mid: 0x65a1c797f9a2a3fa, lo: 0x0929b883be0970b4 },
  U192 { hi: 0xcca3a16871e5fe68, mid: 0xa8fe824a6e20ef82, lo: 0x5c2d264caf7c2b8f },
  U192 { hi: 0x4476c23fa0929b88, mid: 0x3be0970b49932bdf, lo: 0x0ae3cee45a1a06c5 },
  U192 { hi: 0x779e66f825c2d264, mid: 0xcaf7c2b8f3b91686, lo: 0x81b15434bdb2563d },
  U192 { hi: 0xda8b0abdf0ae3cee, mid: 0x45a1a06c550d2f6c, lo: 0x958f4fbcff55b30f },
  U192 { hi: 0x23bfc168681b1543, mid: 0x4bdb2563d3ef3fd5, lo: 0x6cc3fc0475fcba18 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000005d09, lo: 0x0d2328726ef5c979 },
  U192 { hi: 0x0000000000000000, mid: 0x17424348ca1c9bbd, lo: 0x725e69ac4c2d9c82 },
  U192 { hi: 0x000005d090d23287, mid: 0x26ef5c979a6b130b, lo: 0x6720990d00c1f082 },
  U192 { hi: 0xcdcba9bbd725e69a, mid: 0xc4c2d9c826434030, lo: 0x7c20b079a66291b4 },
  U192 { hi: 0x2eddd930b6720990, mid: 0xd00c1f082c1e6998, lo: 0xa46d30a4070dc8a5 },
  U192 { hi: 0xe70f8c0307c20b07, mid: 0x9a66291b4c2901c3, lo: 0x722961841dfb9494 },
  U192 { hi: 0x1c93be998a46d30a, mid: 0x4070dc8a5861077e, lo: 0xe5253733d2d7b48f },
  U192 { hi: 0x0c03181c37229618, mid: 0x41dfb9494dccf4b5, lo: 0xed23d2394d6f70ad },
  U192 { hi: 0x29f61877ee525373, mid: 0x3d2d7b48f48e535b, lo: 0xdc2b65d89a18a1ae },
  U192 { hi: 0x4303074b5ed23d23, mid: 0x94d6f70ad9762686, lo: 0x286bb131280ad577 },
  U192 { hi: 0xcfb3bd35bdc2b65d, mid: 0x89a18a1aec4c4a02, lo: 0xb55df1ea6b5b3336 },
  U192 { hi: 0x51b772686286bb13, mid: 0x1280ad577c7a9ad6, lo: 0xcccdbabda6019a8d },
  U192 { hi: 0x29f4f4a02b55df1e, mid: 0xa6b5b3336eaf6980, lo: 0x66a35ddf027ff1a6 },
  U192 { hi: 0x585599ad6cccdbab, mid: 0xda6019a8d777c09f, lo: 0xfc69bb111daca04d },
  U192 { hi: 0x0000000000000000, mid: 0x0000000ad4ab7112, lo: 0xeb3929d86c16c98d },
  U192 { hi: 0x000000000002b52a, mid: 0xdc44bace4a761b05, lo: 0xb2634b254f188393 },
  U192 { hi: 0xad4ab7112eb3929d, mid: 0x86c16c98d2c953c6, lo: 0x20e4e1b4d8ec8ffb },
  U192 { hi: 0x33ab79b05b2634b2, mid: 0x54f18839386d363b, lo: 0x23fee366150b4671 },
  U192 { hi: 0x2379253c620e4e1b, mid: 0x4d8ec8ffb8d98542, lo: 0xd19c56ec8cdce586 },
  U192 { hi: 0x778fe363b23fee36, mid: 0x6150b46715bb2337, lo: 0x3961aaa21f19d708 },
  U192 { hi: 0xc4b038542d19c56e, mid: 0xc8cdce586aa887c6, lo: 0x75c229b85eec3bde },
  U192 { hi: 0x0348e23373961aaa, mid: 0x21f19d708a6e17bb, lo: 0x0ef7993d8ddc9cdc },
  U192 { hi: 0x0df6387c675c229b, mid: 0x85eec3bde64f6377, lo: 0x273716a4d5fd07cb },
  U192 { hi: 0xd963f97bb0ef7993, mid: 0xd8ddc9cdc5a9357f, lo: 0x41f2ceafa7c8c15d },
  U192 { hi: 0x9b4496377273716a, mid: 0x4d5fd07cb3abe9f2, lo: 0x305752c93036ccc1 },
  U192 { hi: 0x47c1b357f41f2cea, mid: 0xfa7c8c15d4b24c0d, lo: 0xb33058f0496bcb8b },
  U192 { hi: 0x89dafe9f2305752c, mid: 0x93036ccc163c125a, lo: 0xf2e2e67ad0e5c5cf },
  U192 { hi: 0x31fddcc0db33058f, mid: 0x0496bcb8b99eb439, lo: 0x7173df121a4e3922 },
  U192 { hi: 0x0000000000000000, mid: 0x000000000000050b, lo: 0x1ffc0151a1354650 },
  U192 { hi: 0x0000000000000000, mid: 0x0142c7ff0054684d, lo: 0x51940f85b9619e4d },
  U192 { hi: 0x00000050b1ffc015, mid: 0x1a13546503e16e58, lo: 0x67937bd5bdbf521d },
  U192 { hi: 0xd29dd684d51940f8, mid: 0x5b9619e4def56f6f, lo: 0xd48770db542048e3 },
  U192 { hi: 0x325536e5867937bd, mid: 0x5bdbf521dc36d508, lo: 0x1238d8674fb2f456 },
  U192 { hi: 0x9c0a86f6fd48770d, mid: 0xb542048e3619d3ec, lo: 0xbd15ad267734b626 },
  U192 { hi: 0x65035d5081238d86, mid: 0x74fb2f456b499dcd, lo: 0x2d89aacb525eab97 },
  U192 { hi: 0x09cca53ecbd15ad2, mid: 0x67734b626ab2d497, lo: 0xaae5da836756257b },
  U192 { hi: 0x419829dcd2d89aac, mid: 0xb525eab976a0d9d5, lo: 0x895ed1e0669c9a28 },
  U192 { hi: 0x0e7b85497aae5da8, mid: 0x36756257b47819a7, lo: 0x268a2c0dee1778d0 },
  U192 { hi: 0x2c33ad9d5895ed1e, mid: 0x0669c9a28b037b85, lo: 0xde343666dc9d8224 },
  U192 { hi: 0xb944d19a7268a2c0, mid: 0xdee1778d0d99b727, lo: 0x60893b31197df20f },
  U192 { hi: 0x63a567b85de34366, mid: 0x6dc9d8224ecc465f, lo: 0x7c83d2ce585687fb },
  U192 { hi: 0xc5570372760893b3, mid: 0x1197df20f4b39615, lo: 0xa1fef1c3d28f4595 },
  U192 { hi: 0x8da92465f7c83d2c, mid: 0xe585687fbc70f4a3, lo: 0xd1657c117d79a066 },
  U192 { hi: 0x0000000000000000, mid: 0x00000000964e858c, lo: 0x91ba26553a6a07f8 },
  U192 { hi: 0x0000000000002593, mid: 0xa163246e89954e9a, lo: 0x81fe35443e1bfa42 },
  U192 { hi: 0x0964e858c91ba265, mid: 0x53a6a07f8d510f86, lo: 0xfe9082f25e9c5e9e },
  U192 { hi: 0xc24714e9a81fe354, mid: 0x43e1bfa420bc97a7, lo: 0x17a7b08e4cdce5b0 },
  U192 { hi: 0xcd88c0f86fe9082f, mid: 0x25e9c5e9ec239337, lo: 0x396c22da6d164a42 },
  U192 { hi: 0xcf91397a717a7b08, mid: 0xe4cdce5b08b69b45, lo: 0x92909e9ae00a3876 },
  U192 { hi: 0x9e6231337396c22d, mid: 0xa6d164a427a6b802, lo: 0x8e1d87e6bee8f634 },
  U192 { hi: 0x9c5271b4592909e9, mid: 0xae00a38761f9afba, lo: 0x3d8d2459fff79b94 },
  U192 { hi: 0x3782738028e1d87e, mid: 0x6bee8f6349167ffd, lo: 0xe6e51f7159d75d7a },
  U192 { hi: 0x9d90d2fba3d8d245, mid: 0x9fff79b947dc5675, lo: 0xd75e81d06aaa8f43 },
  U192 { hi: 0xa7543fffde6e51f7, mid: 0x159d75d7a0741aaa, lo: 0xa3d0d316e98abc6a },
  U192 { hi: 0x2fc845675d75e81d, mid: 0x06aaa8f434c5ba62, lo: 0xaf1a8f0d554244c5 },
  U192 { hi: 0xe61451aaaa3d0d31, mid: 0x6e98abc6a3c35550, lo: 0x913169f38c8dd178 },
  U192 { hi: 0x66bb63a62af1a8f0, mid: 0xd554244c5a7ce323, lo: 0x745e0c19af3bbd7c },
  U192 { hi: 0x831475550913169f, mid: 0x38c8dd1783066bce, lo: 0xef5f2b281201ea6f },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000045, lo: 0xfdf53b630cf79b2b },
  U192 { hi: 0x0000000000000000, mid: 0x00117f7d4ed8c33d, lo: 0xe6cafd69db678ab6 },
  U192 { hi: 0x000000045fdf53b6, mid: 0x30cf79b2bf5a76d9, lo: 0xe2adb2d441ebf551 },
  U192 { hi: 0x0a560433de6cafd6, mid: 0x9db678ab6cb5107a, lo: 0xfd547719437276a5 },
  U192 { hi: 0x9269176d9e2adb2d, mid: 0x441ebf551dc650dc, lo: 0x9da950b73c14c944 },
  U192 { hi: 0x1cec0107afd54771, mid: 0x9437276a542dcf05, lo: 0x3251050e4cca666f },
  U192 { hi: 0x2c0e7d0dc9da950b, mid: 0x73c14c9441439332, lo: 0x999bf9aaf8a07278 },
  U192 { hi: 0x23cac4f053251050, mid: 0xe4cca666fe6abe28, lo: 0x1c9e054dc305b3f5 },
  U192 { hi: 0x32cc31332999bf9a, mid: 0xaf8a0727815370c1, lo: 0x6cfd6887e41889a9 },
  U192 { hi: 0x6853a3e281c9e054, mid: 0xdc305b3f5a21f906, lo: 0x226a5a0f7ea56b64 },
  U192 { hi: 0x58e63f0c16cfd688, mid: 0x7e41889a9683dfa9, lo: 0x5ad931f6e4a31014 },
  U192 { hi: 0xee673f906226a5a0, mid: 0xf7ea56b64c7db928, lo: 0xc40515c594a63a2b },
  U192 { hi: 0xa10b7dfa95ad931f, mid: 0x6e4a310145716529, lo: 0x8e8ac60a7e9b6bb7 },
  U192 { hi: 0x31ab9b928c40515c, mid: 0x594a63a2b1829fa6, lo: 0xdaedc0b4bf4e5ed0 },
  U192 { hi: 0x6cc05e5298e8ac60, mid: 0xa7e9b6bb702d2fd3, lo: 0x97b43139706e2694 },
  U192 { hi: 0x9ee939fa6daedc0b, mid: 0x4bf4e5ed0c4e5c1b, lo: 0x89a52772321058aa },
  U192 { hi: 0x0000000000000000, mid: 0x000000000825ecc2, lo: 0x4c873782f8ed4006 },
  U192 { hi: 0x0000000000000209, mid: 0x7b309321cde0be3b, lo: 0x50019a3030a3231b },
  U192 { hi: 0x00825ecc24c87378, mid: 0x2f8ed400668c0c28, lo: 0xc8c6fe42bfd04e3b },
  U192 { hi: 0x7d3f63e3b50019a3, mid: 0x030a3231bf90aff4, lo: 0x138edbf1b5e3b8c5 },
  U192 { hi: 0xdd60a0c28c8c6fe4, mid: 0x2bfd04e3b6fc6d78, lo: 0xee3161c226153688 },
  U192 { hi: 0x1eb27aff4138edbf, mid: 0x1b5e3b8c58708985, lo: 0x4da2250ffa8f2756 },
  U192 { hi: 0x969de6d78ee3161c, mid: 0x226153688943fea3, lo: 0xc9d593b98a91b999 },
  U192 { hi: 0x932fd09854da2250, mid: 0xffa8f27564ee62a4, lo: 0x6e66747ee52f104f },
  U192 { hi: 0x23c227ea3c9d593b, mid: 0x98a91b999d1fb94b, lo: 0xc413e60c3c1bc755 },
  U192 { hi: 0x73c69e2a46e66747, mid: 0xee52f104f9830f06, lo: 0xf1d5494498adb6ad },
  U192 { hi: 0xd2060b94bc413e60, mid: 0xc3c1bc755251262b, lo: 0x6dab51f79a837f4a },
  U192 { hi: 0xe16cb8f06f1d5494, mid: 0x498adb6ad47de6a0, lo: 0xdfd2a5d1590b321b },
  U192 { hi: 0xb22efa62b6dab51f, mid: 0x79a837f4a9745642, lo: 0xcc86e1219c4e5e5d },
  U192 { hi: 0x6a77a66a0dfd2a5d, mid: 0x1590b321b8486713, lo: 0x97977061f97ee410 },
  U192 { hi: 0xbc6df5642cc86e12, mid: 0x19c4e5e5dc187e5f, lo: 0xb904272bef301aba },
  U192 { hi: 0x3af4be7139797706, mid: 0x1f97ee4109cafbcc, lo: 0x06aeadfee2bf7e86 },
  U192 { hi: 0x591577e5fb904272, mid: 0xbef301abab7fb8af, lo: 0xdfa1a75840cff44d },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000003, lo: 0xcb559e42ad070a8b },
  U192 { hi: 0x0000000000000000, mid: 0x0000f2d56790ab41, lo: 0xc2a2fae27299423f },
  U192 { hi: 0x000000003cb559e4, mid: 0x2ad070a8beb89ca6, lo: 0x508fee70cda576b5 },
  U192 { hi: 0xca9452b41c2a2fae, mid: 0x27299423fb9c3369, lo: 0x5dad7e8858901f7b },
  U192 { hi: 0x73ea61ca6508fee7, mid: 0x0cda576b5fa21624, lo: 0x07deefd00c2e5f09 },
  U192 { hi: 0x16a6033695dad7e8, mid: 0x858901f7bbf4030b, lo: 0x97c25a7f3082add7 },
  U192 { hi: 0x5951f962407deefd, mid: 0x00c2e5f0969fcc20, lo: 0xab75cd29f1c1924e },
  U192 { hi: 0xcbe88030b97c25a7, mid: 0xf3082add734a7c70, lo: 0x64938eac638b3056 },
  U192 { hi: 0x11bbd4c20ab75cd2, mid: 0x9f1c1924e3ab18e2, lo: 0xcc1589ebf4a569d1 },
  U192 { hi: 0xebe28fc7064938ea, mid: 0xc638b305627afd29, lo: 0x5a745e1b8a3a065c },
  U192 { hi: 0xb7bc518e2cc1589e, mid: 0xbf4a569d1786e28e, lo: 0x819722010972f91c },
  U192 { hi: 0x6ab8d7d295a745e1, mid: 0xb8a3a065c880425c, lo: 0xbe471e50ae43166c },
  U192 { hi: 0x1bfd7e28e8197220, mid: 0x10972f91c7942b90, lo: 0xc59b262ac5a8d135 },
  U192 { hi: 0x4718b425cbe471e5, mid: 0x0ae43166c98ab16a, lo: 0x344d714e1d1b3b5c },
  U192 { hi: 0xbf290ab90c59b262, mid: 0xac5a8d135c538746, lo: 0xced70ed1e19307ee },
  U192 { hi: 0xa0ac6b16a344d714, mid: 0xe1d1b3b5c3b47864, lo: 0xc1fbbb51ea88e87d },
  U192 { hi: 0xbffeb8746ced70ed, mid: 0x1e19307eeed47aa2, lo: 0x3a1f70d4231e8b20 },
  U192 { hi: 0xeb63c7864c1fbbb5, mid: 0x1ea88e87dc3508c7, lo: 0xa2c80946c5798d30 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000711405, lo: 0xb6106ea91912e36d },
  U192 { hi: 0x000000000000001c, mid: 0x45016d841baa4644, lo: 0xb8db4c7871bc3602 },
  U192 { hi: 0x000711405b6106ea, mid: 0x91912e36d31e1c6f, lo: 0x0d80b2ed14f4e4e0 },
  U192 { hi: 0x50927c644b8db4c7, mid: 0x871bc3602cbb453d, lo: 0x39382309eb172e3e },
  U192 { hi: 0x355d39c6f0d80b2e, mid: 0xd14f4e4e08c27ac5, lo: 0xcb8f9816b4770a38 },
  U192 { hi: 0x5fc2f453d3938230, mid: 0x9eb172e3e605ad1d, lo: 0xc28e0cd47a24e213 },
  U192 { hi: 0x293d87ac5cb8f981, mid: 0x6b4770a383351e89, lo: 0x3884eb11f66403fa },
  U192 { hi: 0x05ac1ad1dc28e0cd, mid: 0x47a24e213ac47d99, lo: 0x00fe9c7e35618eb0 },
  U192 { hi: 0x8dcc79e893884eb1, mid: 0x1f66403fa71f8d58, lo: 0x63ac13bcf7ba218f },
  U192 { hi: 0xe7c927d9900fe9c7, mid: 0xe35618eb04ef3dee, lo: 0x8863d720b87803e5 },
  U192 { hi: 0x2e5a88d5863ac13b, mid: 0xcf7ba218f5c82e1e, lo: 0x00f951000411d1e5 },
  U192 { hi: 0xe921abdee8863d72, mid: 0x0b87803e54400104, lo: 0x74794efa03ba1a7a },
  U192 { hi: 0xb7937ae1e00f9510, mid: 0x00411d1e53be80ee, lo: 0x869eb347de39f08a },
  U192 { hi: 0x7b9c0010474794ef, mid: 0xa03ba1a7acd1f78e, lo: 0x7c228d3603b9fdf5 },
  U192 { hi: 0x5125a80ee869eb34, mid: 0x7de39f08a34d80ee, lo: 0x7f7d7818a26d5664 },
  U192 { hi: 0x5c0ad778e7c228d3, mid: 0x603b9fdf5e06289b, lo: 0x559911a3806f8f25 },
  U192 { hi: 0x0d8dc00ee7f7d781, mid: 0x8a26d5664468e01b, lo: 0xe3c95e471319d576 },
  U192 { hi: 0xe0402289b559911a, mid: 0x3806f8f25791c4c6, lo: 0x755db3d33d7f7451 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000000, lo: 0x34a7f92c63a21903 },
  U192 { hi: 0x0000000000000000, mid: 0x00000d29fe4b18e8, lo: 0x8640e8eec7f0d19a },
  U192 { hi: 0x00000000034a7f92, mid: 0xc63a21903a3bb1fc, lo: 0x346680eab4d29fa7 },
  U192 { hi: 0x254b618e88640e8e, mid: 0xec7f0d19a03aad34, lo: 0xa7e9d10f4d55fd51 },
  U192 { hi: 0x82e29b1fc346680e, mid: 0xab4d29fa7443d355, lo: 0x7f5465cb8d3e1c0e },
  U192 { hi: 0x34f64ad34a7e9d10, mid: 0xf4d55fd51972e34f, lo: 0x8703a0f4ae83d98c },
  U192 { hi: 0x80f7cd3557f5465c, mid: 0xb8d3e1c0e83d2ba0, lo: 0xf6630bd155d176dc },
  U192 { hi: 0xe4ae8e34f8703a0f, mid: 0x4ae83d98c2f45574, lo: 0x5db709b8c0040843 },
  U192 { hi: 0x54091aba0f6630bd, mid: 0x155d176dc26e3001, lo: 0x0210da9758b96c68 },
  U192 { hi: 0x38e0b55745db709b, mid: 0x8c00408436a5d62e, lo: 0x5b1a2c03968c8577 },
  U192 { hi: 0xe9f1a30010210da9, mid: 0x758b96c68b00e5a3, lo: 0x215df9395370d4e9 },
  U192 { hi: 0x18db8562e5b1a2c0, mid: 0x3968c8577e4e54dc, lo: 0x353a6e48a71429b3 },
  U192 { hi: 0x735b5e5a3215df93, mid: 0x95370d4e9b9229c5, lo: 0x0a6cc9b47f8a0545 },
  U192 { hi: 0x55e6654dc353a6e4, mid: 0x8a71429b326d1fe2, lo: 0x815174df52228f51 },
  U192 { hi: 0x01e5229c50a6cc9b, mid: 0x47f8a0545d37d488, lo: 0xa3d4635d2d9981da },
  U192 { hi: 0x01bc49fe2815174d, mid: 0xf52228f518d74b66, lo: 0x6076822c6cad6025 },
  U192 { hi: 0xdeb105488a3d4635, mid: 0xd2d9981da08b1b2b, lo: 0x58096ffe38e333f9 },
  U192 { hi: 0x01bc3cb666076822, mid: 0xc6cad6025bff8e38, lo: 0xccfe46436796d798 },
  U192 { hi: 0x4ba2d1b2b58096ff, mid: 0xe38e333f9190d9e5, lo: 0xb5e6120680b7b0a4 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000062146, lo: 0x82d523a8f26554bf },
  U192 { hi: 0x0000000000000001, mid: 0x8851a0b548ea3c99, lo: 0x552fc298784d710d },
  U192 { hi: 0x00006214682d523a, mid: 0x8f26554bf0a61e13, lo: 0x5c434b4216e4a991 },
  U192 { hi: 0x2e6533c99552fc29, mid: 0x8784d710d2d085b9, lo: 0x2a647eb51105677c },
  U192 { hi: 0x5d1ac9e135c434b4, mid: 0x216e4a991fad4441, lo: 0x59df2972a39da028 },
  U192 { hi: 0x5433c05b92a647eb, mid: 0x51105677ca5ca8e7, lo: 0x680a3538141b7104 },
  U192 { hi: 0x9b38bc44159df297, mid: 0x2a39da028d4e0506, lo: 0xdc41040a0ec297b6 },
  U192 { hi: 0xb8fb028e7680a353, mid: 0x8141b710410283b0, lo: 0xa5ed881bebd84b59 },
  U192 { hi: 0x5143d0506dc41040, mid: 0xa0ec297b6206faf6, lo: 0x12d67cc3c4d38be9 },
  U192 { hi: 0x9f2be83b0a5ed881, mid: 0xbebd84b59f30f134, lo: 0xe2fa4ae40ae69892 },
  U192 { hi: 0x596a0faf612d67cc, mid: 0x3c4d38be92b902b9, lo: 0xa624af37647d2262 },
  U192 { hi: 0xa08657134e2fa4ae, mid: 0x40ae69892bcdd91f, lo: 0x48989dbdc9a44f8e },
  U192 { hi: 0xbd50682b9a624af3, mid: 0x7647d226276f7269, lo: 0x13e390fa7095f418 },
  U192 { hi: 0x9e107d91f48989db, mid: 0xdc9a44f8e43e9c25, lo: 0x7d063ecb50a3dfab },
  U192 { hi: 0x4dcd5726913e390f, mid: 0xa7095f418fb2d428, lo: 0xf7eafbaaa03ed01c },
  U192 { hi: 0x3b63d9c257d063ec, mid: 0xb50a3dfabeeaa80f, lo: 0xb4073e319aabe8d0 },
  U192 { hi: 0x9d74d5428f7eafba, mid: 0xaa03ed01cf8c66aa, lo: 0xfa3434974579d0e1 },
  U192 { hi: 0x8c717a80fb4073e3, mid: 0x19aabe8d0d25d15e, lo: 0x74386ea215682bc3 },
  U192 { hi: 0x329b566aafa34349, mid: 0x74579d0e1ba8855a, lo: 0x0af0e672e390555a },
  U192 { hi: 0x0000000000000000, mid: 0x000000b6b00d69bb, lo: 0x55c8d13d607b97c5 },
  U192 { hi: 0x00000000002dac03, mid: 0x5a6ed572344f581e, lo: 0xe5f17f4348934134 },
  U192 { hi: 0x3dfaf69bb55c8d13, mid: 0xd607b97c5fd0d224, lo: 0xd04d354f598a367f },
  U192 { hi: 0x70dfd581ee5f17f4, mid: 0x348934134d53d662, lo: 0x8d9fe9adc41f6ce2 },
  U192 { hi: 0x38052d224d04d354, mid: 0xf598a367fa6b7107, lo: 0xdb38b01aeb10fffc },
  U192 { hi: 0x0aa9156628d9fe9a, mid: 0xdc41f6ce2c06bac4, lo: 0x3fff2e55b5c9ac19 },
  U192 { hi: 0x7f22a7107db38b01, mid: 0xaeb10fffcb956d72, lo: 0x6b0651d4d5e45f7b },
  U192 { hi: 0x4c3083ac43fff2e5, mid: 0x5b5c9ac194753579, lo: 0x17dec660c9dd4ad5 },
  U192 { hi: 0x095cf6d726b0651d, mid: 0x4d5e45f7b1983277, lo: 0x52b549d0e7e9da35 },
  U192 { hi: 0x06df8b57917dec66, mid: 0x0c9dd4ad527439fa, lo: 0x768d64d23dc7183b },
  U192 { hi: 0xe5087b27752b549d, mid: 0x0e7e9da359348f71, lo: 0xc60ede7fbf0ee41c },
  U192 { hi: 0xd2dd1b9fa768d64d, mid: 0x23dc7183b79fefc3, lo: 0xb9070df624a600fd },
  U192 { hi: 0x051378f71c60ede7, mid: 0xfbf0ee41c37d8929, lo: 0x803f7ff32675c31e },
  U192 { hi: 0xa600c6fc3b9070df, mid: 0x624a600fdffcc99d, lo: 0x70c7b85a613df644 },
  U192 { hi: 0xd51b28929803f7ff, mid: 0x32675c31ee16984f, lo: 0x7d9113c118b77d1f },
  U192 { hi: 0x346d4499d70c7b85, mid: 0xa613df6444f0462d, lo: 0xdf47c7e70ee9e763 },
  U192 { hi: 0x9cc2a184f7d9113c, mid: 0x118b77d1f1f9c3ba, lo: 0x79d8c11d9ee64cdf },
  U192 { hi: 0x4a9ebc62ddf47c7e, mid: 0x70ee9e76304767b9, lo: 0x9337dde3d24d5262 },
  U192 { hi: 0xbf3bdc3ba79d8c11, mid: 0xd9ee64cdf778f493, lo: 0x5498b2e807906b9d },
  U192 { hi: 0x978fbe7b99337dde, mid: 0x3d24d5262cba01e4, lo: 0x1ae76046d8ac55b8 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000005512, lo: 0x124cb4b9c9696ef2 },
  U192 { hi: 0x0000000000000000, mid: 0x154484932d2e725a, lo: 0x5bbca17a3aba173d },
  U192 { hi: 0x000005512124cb4b, mid: 0x9c9696ef285e8eae, lo: 0x85cf4f57f04c308e },
  U192 { hi: 0xc4f0d725a5bbca17, mid: 0xa3aba173d3d5fc13, lo: 0x0c23b7aa2da19b9a },
  U192 { hi: 0xa42338eae85cf4f5, mid: 0x7f04c308edea8b68, lo: 0x66e68f2ae04755be },
  U192 { hi: 0x990137c130c23b7a, mid: 0xa2da19b9a3cab811, lo: 0xd56fa9c85a535df6 },
  U192 { hi: 0xa0e790b6866e68f2, mid: 0xae04755bea721694, lo: 0xd77d823bb63e3887 },
  U192 { hi: 0xd2893b811d56fa9c, mid: 0x85a535df608eed8f, lo: 0x8e21f31f148122da },
  U192 { hi: 0x6d7619694d77d823, mid: 0xbb63e3887cc7c520, lo: 0x48b6a3e75360a932 },
  U192 { hi: 0xcbdc5ed8f8e21f31, mid: 0xf148122da8f9d4d8, lo: 0x2a4cae9f7b11ad58 },
  U192 { hi: 0x6399ec52048b6a3e, mid: 0x75360a932ba7dec4, lo: 0x6b5621f88cb1020a },
  U192 { hi: 0x5e001d4d82a4cae9, mid: 0xf7b11ad5887e232c, lo: 0x4082b91524bceb63 },
  U192 { hi: 0x6bfe3dec46b5621f, mid: 0x88cb1020ae45492f, lo: 0x3ad8c443810fc43a },
  U192 { hi: 0x1cc47a32c4082b91, mid: 0x524bceb63110e043, lo: 0xf10e8c1194353ea4 },
  U192 { hi: 0xd02d7c92f3ad8c44, mid: 0x3810fc43a304650d, lo: 0x4fa91f8be163cfb8 },
  U192 { hi: 0x1110d6043f10e8c1, mid: 0x194353ea47e2f858, lo: 0xf3ee38c2dc1cde4a },
  U192 { hi: 0x891e5e50d4fa91f8, mid: 0xbe163cfb8e30b707, lo: 0x3792959966ca160f },
  U192 { hi: 0x2d4827858f3ee38c, mid: 0x2dc1cde4a56659b2, lo: 0x8583e904d1bbd223 },
  U192 { hi: 0x82b80b7073792959, mid: 0x966ca160fa41346e, lo: 0xf488cd0c38abaf2c },
  U192 { hi: 0x7e276d9b28583e90, mid: 0x4d1bbd2233430e2a, lo: 0xebcb3ef5d2ff35a1 },
  U192 { hi: 0xc133e346ef488cd0, mid: 0xc38abaf2cfbd74bf, lo: 0xcd6842fb328dbfad },
  U192 { hi: 0x0000000000000000, mid: 0x00000009e74d1b79, lo: 0x1e07e48775ea264c },
  U192 { hi: 0x00000000000279d3, mid: 0x46de4781f921dd7a, lo: 0x89933d54d1f72927 },
  U192 { hi: 0x9e74d1b791e07e48, mid: 0x775ea264cf55347d, lo: 0xca49f1c05120c9c7 },
  U192 { hi: 0xd4ffbdd7a89933d5, mid: 0x4d1f72927c701448, lo: 0x3271e7fd0ad5c5dc },
  U192 { hi: 0x1b58cb47dca49f1c, mid: 0x05120c9c79ff42b5, lo: 0x7177399852676ed6 },
  U192 { hi: 0xe71b494483271e7f, mid: 0xd0ad5c5dce661499, lo: 0xdbb5a7d20a011a47 },
  U192 { hi: 0x153fac2b57177399, mid: 0x852676ed69f48280, lo: 0x4691d78b21333668 },
  U192 { hi: 0x687019499dbb5a7d, mid: 0x20a011a475e2c84c, lo: 0xcd9a214f729e0a0d },
  U192 { hi: 0x2a0fa82804691d78, mid: 0xb21333668853dca7, lo: 0x828359fb775f809e },
  U192 { hi: 0xcc12a484ccd9a214, mid: 0xf729e0a0d67eddd7, lo: 0xe0278b7958d0ad5d },
  U192 { hi: 0x80c1e5ca7828359f, mid: 0xb775f809e2de5634, lo: 0x2b575fc67bb464b8 },
  U192 { hi: 0x9e08f5dd7e0278b7, mid: 0x958d0ad5d7f19eed, lo: 0x192e1d2971402154 },
  U192 { hi: 0xb0848d6342b575fc, mid: 0x67bb464b874a5c50, lo: 0x08551bc4c5f27b94 },
  U192 { hi: 0x4183b9eed192e1d2, mid: 0x9714021546f1317c, lo: 0x9ee520a634cdbb53 },
  U192 { hi: 0x885115c5008551bc, mid: 0x4c5f27b948298d33, lo: 0x6ed4fdfb61a9ba0d },
  U192 { hi: 0xb34eeb17c9ee520a, mid: 0x634cdbb53f7ed86a, lo: 0x6e835e6923d10406 },
  U192 { hi: 0xbc3958d336ed4fdf, mid: 0xb61a9ba0d79a48f4, lo: 0x410181b9e12ad0be },
  U192 { hi: 0xe02a2586a6e835e6, mid: 0x923d1040606e784a, lo: 0xb42f8d20f45d0238 },
  U192 { hi: 0x667f7c8f4410181b, mid: 0x9e12ad0be3483d17, lo: 0x408e1aa6af1ba9ce },
  U192 { hi: 0xa7130784ab42f8d2, mid: 0x0f45d02386a9abc6, lo: 0xea7397dbafe078e9 },
  U192 { hi: 0x61aa33d17408e1aa, mid: 0x6af1ba9ce5f6ebf8, lo: 0x1e3a4ea52b0554ef },
  U192 { hi: 0x0000000000000000, mid: 0x000000000000049c, lo: 0x97747490eae839d8 },
  U192 { hi: 0x0000000000000000, mid: 0x012725dd1d243aba, lo: 0x0e75fe645cc48740 },
  U192 { hi: 0x00000049c9774749, mid: 0x0eae839d7f991731, lo: 0x21cfe7996bf9a233 },
  U192 { hi: 0x332c33aba0e75fe6, mid: 0x45cc4873f9e65afe, lo: 0x688c928e1f219582 },
  U192 { hi: 0xae1e1973121cfe79, mid: 0x96bf9a2324a387c8, lo: 0x656062b9dfcf0da9 },
  U192 { hi: 0x61c5d5afe688c928, mid: 0xe1f2195818ae77f3, lo: 0xc36a08cce4e0a367 },
  U192 { hi: 0x25c7387c8656062b, mid: 0x9dfcf0da82333938, lo: 0x28d98a00ce902f9d },
  U192 { hi: 0x7c41377f3c36a08c, mid: 0xce4e0a36628033a4, lo: 0x0be73647459d41ef },
  U192 { hi: 0x265f5393828d98a0, mid: 0x0ce902f9cd91d167, lo: 0x507bbf07e9eb7976 },
  U192 { hi: 0x04a89b3a40be7364, mid: 0x7459d41eefc1fa7a, lo: 0xde5d649f24979c26 },
  U192 { hi: 0x86ab55167507bbf0, mid: 0x7e9eb7975927c925, lo: 0xe70942a2c8bfaa9b },
  U192 { hi: 0xac9507a7ade5d649, mid: 0xf24979c250a8b22f, lo: 0xeaa6bdcdabb8a8f7 },
  U192 { hi: 0xaecbf4925e70942a, mid: 0x2c8bfaa9af736aee, lo: 0x2a3d854dcf8e586c },
  U192 { hi: 0xa0912b22feaa6bdc, mid: 0xdabb8a8f615373e3, lo: 0x961af39d4573797c },
  U192 { hi: 0x399abeaee2a3d854, mid: 0xdcf8e586bce7515c, lo: 0xde5ef529ccb03b93 },
  U192 { hi: 0xabf2173e3961af39, mid: 0xd4573797bd4a732c, lo: 0x0ee4919c8579f95e },
  U192 { hi: 0x5c2d2515cde5ef52, mid: 0x9ccb03b92467215e, lo: 0x7e577fd6f65e3223 },
  U192 { hi: 0x1896af32c0ee4919, mid: 0xc8579f95dff5bd97, lo: 0x8c88897ec4989e08 },
  U192 { hi: 0xa4afea15e7e577fd, mid: 0x6f65e322225fb126, lo: 0x2781c03823dd2128 },
  U192 { hi: 0x87e33bd978c88897, mid: 0xec4989e0700e08f7, lo: 0x4849d41e79451064 },
  U192 { hi: 0xe00f9b1262781c03, mid: 0x823dd21275079e51, lo: 0x4418c1f0d6ce1ac5 },
  U192 { hi: 0x71ca608f74849d41, mid: 0xe7945106307c35b3, lo: 0x86b12a37dd3b17bd },
  U192 { hi: 0x0000000000000000, mid: 0x0000000089705f41, lo: 0x36b4a59731680a89 },
  U192 { hi: 0x000000000000225c, mid: 0x17d04dad2965cc5a, lo: 0x02a23e254c0c3f76 },
  U192 { hi: 0x089705f4136b4a59, mid: 0x731680a88f895303, lo: 0x0fdd7645e011abad },
  U192 { hi: 0x6d631cc5a02a23e2, mid: 0x54c0c3f75d917804, lo: 0x6aeb27ce1ca57491 },
  U192 { hi: 0x2b32c53030fdd764, mid: 0x5e011abac9f38729, lo: 0x5d242602a6ac045e },
  U192 { hi: 0xa97d378046aeb27c, mid: 0xe1ca57490980a9ab, lo: 0x01177990b20bcdb6 },
  U192 { hi: 0x0e7f207295d24260, mid: 0x2a6ac045de642c82, lo: 0xf36d7e1059c7fb0a },
  U192 { hi: 0xdf6daa9ab0117799, mid: 0x0b20bcdb5f841671, lo: 0xfec25faddce9f2c5 },
  U192 { hi: 0x6a9452c82f36d7e1, mid: 0x059c7fb097eb773a, lo: 0x7cb1341d9c7ba9ce },
  U192 { hi: 0x603041671fec25fa, mid: 0xddce9f2c4d07671e, lo: 0xea734843880c75d2 },
  U192 { hi: 0x97a03f73a7cb1341, mid: 0xd9c7ba9cd210e203, lo: 0x1d7462b102ca684d },
  U192 { hi: 0xe422fe71eea73484, mid: 0x3880c75d18ac40b2, lo: 0x9a130892c3081f56 },
  U192 { hi: 0x883fb62031d7462b, mid: 0x102ca684c224b0c2, lo: 0x07d56a07e42d9a20 },
  U192 { hi: 0x5d7b1c0b29a13089, mid: 0x2c3081f55a81f90b, lo: 0x6687ebbea1de2e16 },
  U192 { hi: 0xc72c5b0c207d56a0, mid: 0x7e42d9a1faefa877, lo: 0x8b85625da0cd9e0c },
  U192 { hi: 0xd7dc2f90b6687ebb, mid: 0xea1de2e158976833, lo: 0x6782e874957594fa },
  U192 { hi: 0x978cca8778b85625, mid: 0xda0cd9e0ba1d255d, lo: 0x653e7bc44f2d6d55 },
  U192 { hi: 0xd686568336782e87, mid: 0x4957594f9ef113cb, lo: 0x5b5507bbad8d0de8 },
  U192 { hi: 0x3e27a255d653e7bc, mid: 0x44f2d6d541eeeb63, lo: 0x4379daeafb3eadc4 },
  U192 { hi: 0x72b9593cb5b5507b, mid: 0xbad8d0de76babecf, lo: 0xab70d3f50196a56b },
  U192 { hi: 0x5b8c16b634379dae, mid: 0xafb3eadc34fd4065, lo: 0xa95ab560d3072c22 },
  U192 { hi: 0x10b34becfab70d3f, mid: 0x50196a56ad5834c1, lo: 0xcb0873e44aba2fdf },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000040, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0010000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb16d000000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8e37480000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9a9f300000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xdf8cb00000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0d56e80000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x4d9cd80000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x52e8c00000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x29cec00000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xde14900000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc013d00000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb68fd80000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7882400000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5ad1980000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe176880000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x4b60280000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc216d00000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x4598f00000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x24deb00000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc806780000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x74feb80000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x77f2f00000000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000007735940, lo: 0x0000000000000000 },
  U192 { hi: 0x00000000000001dc, mid: 0xd650000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0077359400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000003, lo: 0x782dace9d9000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000de0b6b3a7640, lo: 0x0000000000000000 },
  U192 { hi: 0x000000003782dace, mid: 0x9d90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa63db76400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x00000000006765c7, lo: 0x93fa10079d000000 },
  U192 { hi: 0x0000000000000019, mid: 0xd971e4fe8401e740, lo: 0x0000000000000000 },
  U192 { hi: 0x0006765c793fa100, mid: 0x79d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xdc41fe7400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x00000c097ce7bc90, lo: 0x715b34b9f1000000 },
  U192 { hi: 0x0000000003025f39, mid: 0xef241c56cd2e7c40, lo: 0x0000000000000000 },
  U192 { hi: 0xbd944bc90715b34b, mid: 0x9f10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc0516fc400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000059aed, lo: 0xfc10d7279c5eed14 },
  U192 { hi: 0x0000000000000001, mid: 0x66bb7f0435c9e717, lo: 0xbb45005915000000 },
  U192 { hi: 0x000059aedfc10d72, mid: 0x79c5eed140164540, lo: 0x0000000000000000 },
  U192 { hi: 0x70cf46717bb45005, mid: 0x9150000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe76f045400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x000000a70c3c40a6, lo: 0x4e6c51999090b65f },
  U192 { hi: 0x000000000029c30f, mid: 0x1029939b14666424, lo: 0x2d97d9f649000000 },
  U192 { hi: 0x32290c0a64e6c519, mid: 0x99090b65f67d9240, lo: 0x0000000000000000 },
  U192 { hi: 0xc0066e4242d97d9f, mid: 0x6490000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x80fcf92400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000004dc9, lo: 0xa61d998642bbb1e6 },
  U192 { hi: 0x0000000000000000, mid: 0x13726987666190ae, lo: 0xec798abe93f11d65 },
  U192 { hi: 0x000004dc9a61d998, mid: 0x642bbb1e62afa4fc, lo: 0x47597b9fcd000000 },
  U192 { hi: 0x786b590aeec798ab, mid: 0xe93f11d65ee7f340, lo: 0x0000000000000000 },
  U192 { hi: 0xba871a4fc47597b9, mid: 0xfcd0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x21fe473400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x000000090e40fbee, lo: 0xa1d3a4abc8955e94 },
  U192 { hi: 0x0000000000024390, mid: 0x3efba874e92af225, lo: 0x57a51bf8c7373d9b },
  U192 { hi: 0x90e40fbeea1d3a4a, mid: 0xbc8955e946fe31cd, lo: 0xcf66f634e1000000 },
  U192 { hi: 0x1f133722557a51bf, mid: 0x8c7373d9bd8d3840, lo: 0x0000000000000000 },
  U192 { hi: 0x44e40b1cdcf66f63, mid: 0x4e10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd6ab7b8400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000437, lo: 0x8564cda746d7eb4d },
  U192 { hi: 0x0000000000000000, mid: 0x010de1593369d1b5, lo: 0xfad34051767bdae3 },
  U192 { hi: 0x0000004378564cda, mid: 0x746d7eb4d0145d9e, lo: 0xf6b8d1efcfc8ab13 },
  U192 { hi: 0xe6d7751b5fad3405, mid: 0x1767bdae347bf3f2, lo: 0x2ac4f809c5000000 },
  U192 { hi: 0xd49cfdd9ef6b8d1e, mid: 0xfcfc8ab13e027140, lo: 0x0000000000000000 },
  U192 { hi: 0x5cc45f3f22ac4f80, mid: 0x9c50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x68c6171400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x000000007dac3c24, lo: 0xa5671d2f8255a450 },
  U192 { hi: 0x0000000000001f6b, mid: 0x0f092959c74be095, lo: 0x6914080cb8e47cc9 },
  U192 { hi: 0x07dac3c24a5671d2, mid: 0xf8255a4502032e39, lo: 0x1f3266bc0c6acdc3 },
  U192 { hi: 0x9832c60956914080, mid: 0xcb8e47cc99af031a, lo: 0xb370ff9bb9000000 },
  U192 { hi: 0xae61f2e391f3266b, mid: 0xc0c6acdc3fe6ee40, lo: 0x0000000000000000 },
  U192 { hi: 0xd7f75831ab370ff9, mid: 0xbb90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd2f1cee400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x000000000000003a, lo: 0x855d450f3e5c89bd },
  U192 { hi: 0x0000000000000000, mid: 0x000ea1575143cf97, lo: 0x226f52d09d71a329 },
  U192 { hi: 0x00000003a855d450, mid: 0xf3e5c89bd4b4275c, lo: 0x68ca4ef60ce939d2 },
  U192 { hi: 0x70067cf97226f52d, mid: 0x09d71a3293bd833a, lo: 0x4e74863bbc1cf3a2 },
  U192 { hi: 0xb3e6aa75c68ca4ef, mid: 0x60ce939d218eef07, lo: 0x3ce88094fd000000 },
  U192 { hi: 0x5618e833a4e74863, mid: 0xbbc1cf3a20253f40, lo: 0x0000000000000000 },
  U192 { hi: 0x05c83ef073ce8809, mid: 0x4fd0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xcd5b4bf400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000006d00f73, lo: 0x20d3846f4f40737a },
  U192 { hi: 0x00000000000001b4, mid: 0x03dcc834e11bd3d0, lo: 0x1cde904199292bae },
  U192 { hi: 0x006d00f7320d3846, mid: 0xf4f40737a410664a, lo: 0x4aeba5d5681de0ec },
  U192 { hi: 0x943fa53d01cde904, mid: 0x199292bae9755a07, lo: 0x783b1a7bffdf1e4a },
  U192 { hi: 0x4950c664a4aeba5d, mid: 0x5681de0ec69efff7, lo: 0xc792b260d1000000 },
  U192 { hi: 0x06031da07783b1a7, mid: 0xbffdf1e4ac983440, lo: 0x0000000000000000 },
  U192 { hi: 0xcece67ff7c792b26, mid: 0x0d10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x75cff34400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000003, lo: 0x2c24320006ad5471 },
  U192 { hi: 0x0000000000000000, mid: 0x0000cb090c8001ab, lo: 0x551c5cadf5bfd307 },
  U192 { hi: 0x0000000032c24320, mid: 0x006ad547172b7d6f, lo: 0xf4c1cb3158002fc4 },
  U192 { hi: 0x1cc7001ab551c5ca, mid: 0xdf5bfd3072cc5600, lo: 0x0bf11cf47baf0e4a },
  U192 { hi: 0x9c1d1fd6ff4c1cb3, mid: 0x158002fc473d1eeb, lo: 0xc392bb180cc1aabe },
  U192 { hi: 0xbe87c56000bf11cf, mid: 0x47baf0e4aec60330, lo: 0x6aaf948f75000000 },
  U192 { hi: 0xa7b141eebc392bb1, mid: 0x80cc1aabe523dd40, lo: 0x0000000000000000 },
  U192 { hi: 0xee5bd83306aaf948, mid: 0xf750000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x6152bdd400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x00000000005e8bb3, lo: 0x105280fdffdb2872 },
  U192 { hi: 0x0000000000000017, mid: 0xa2ecc414a03f7ff6, lo: 0xca1cb527787b130a },
  U192 { hi: 0x0005e8bb3105280f, mid: 0xdffdb2872d49de1e, lo: 0xc4c2a5f547944808 },
  U192 { hi: 0x031bf7ff6ca1cb52, mid: 0x7787b130a97d51e5, lo: 0x1202365498ff69be },
  U192 { hi: 0xe9a52de1ec4c2a5f, mid: 0x547944808d95263f, lo: 0xda6f84a475b215f2 },
  U192 { hi: 0xa030151e51202365, mid: 0x498ff69be1291d6c, lo: 0x857cbe4a29000000 },
  U192 { hi: 0x39984263fda6f84a, mid: 0x475b215f2f928a40, lo: 0x0000000000000000 },
  U192 { hi: 0x05f0b1d6c857cbe4, mid: 0xa290000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xadb110a400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x00000b01ae745b10, lo: 0x1e9e45ec05dcff72 },
  U192 { hi: 0x0000000002c06b9d, mid: 0x16c407a7917b0177, lo: 0x3fdcb9fe3f0131e7 },
  U192 { hi: 0x15cabdb101e9e45e, mid: 0xc05dcff72e7f8fc0, lo: 0x4c79ffe324301fda },
  U192 { hi: 0xee5a001773fdcb9f, mid: 0xe3f0131e7ff8c90c, lo: 0x07f682d3defa0761 },
  U192 { hi: 0xaf5000fc04c79ffe, mid: 0x324301fda0b4f7be, lo: 0x81d85c4e875c73fc },
  U192 { hi: 0x988a7c90c07f682d, mid: 0x3defa0761713a1d7, lo: 0x1cff1b172d000000 },
  U192 { hi: 0x473ebf7be81d85c4, mid: 0xe875c73fc6c5cb40, lo: 0x0000000000000000 },
  U192 { hi: 0x36ce6a1d71cff1b1, mid: 0x72d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x131794b400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000052015, lo: 0xce2d469d373af8b1 },
  U192 { hi: 0x0000000000000001, mid: 0x4805738b51a74dce, lo: 0xbe2c40d938c4134c },
  U192 { hi: 0x000052015ce2d469, mid: 0xd373af8b10364e31, lo: 0x04d31ce577b76b17 },
  U192 { hi: 0xa99e34dcebe2c40d, mid: 0x938c4134c7395ded, lo: 0xdac5f20b6c317416 },
  U192 { hi: 0x02baf4e3104d31ce, mid: 0x577b76b17c82db0c, lo: 0x5d0589780697c4b2 },
  U192 { hi: 0x1d56bddeddac5f20, mid: 0xb6c31741625e01a5, lo: 0xf12ca2d993f32bdd },
  U192 { hi: 0x880f85b0c5d05897, mid: 0x80697c4b28b664fc, lo: 0xcaf7582dc1000000 },
  U192 { hi: 0xdf0a781a5f12ca2d, mid: 0x993f32bdd60b7040, lo: 0x0000000000000000 },
  U192 { hi: 0x3f084e4fccaf7582, mid: 0xdc10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8c29ff0400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x00000098bf2f79d5, lo: 0x993802ef2f773ffb },
  U192 { hi: 0x0000000000262fcb, mid: 0xde75664e00bbcbdd, lo: 0xcffef65e9878edb2 },
  U192 { hi: 0x3bc3679d5993802e, mid: 0xf2f773ffbd97a61e, lo: 0x3b6cb72d3dd0f8db },
  U192 { hi: 0x90ed8cbddcffef65, mid: 0xe9878edb2dcb4f74, lo: 0x3e36e5bf6ffad374 },
  U192 { hi: 0x91a49a61e3b6cb72, mid: 0xd3dd0f8db96fdbfe, lo: 0xb4dd18d36a9d5ea8 },
  U192 { hi: 0xaef4e4f743e36e5b, mid: 0xf6ffad374634daa7, lo: 0x57aa3ddd11248985 },
  U192 { hi: 0xa99735bfeb4dd18d, mid: 0x36a9d5ea8f774449, lo: 0x22614a9a25000000 },
  U192 { hi: 0x0311edaa757aa3dd, mid: 0xd112489852a68940, lo: 0x0000000000000000 },
  U192 { hi: 0xbc1a9444922614a9, mid: 0xa250000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd114f89400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000004720, lo: 0xd6f4fdf5e13e8a2c },
  U192 { hi: 0x0000000000000000, mid: 0x11c835bd3f7d784f, lo: 0xa28b11e277d08e60 },
  U192 { hi: 0x000004720d6f4fdf, mid: 0x5e13e8a2c4789df4, lo: 0x2398391deb5102ce },
  U192 { hi: 0xe2ef2784fa28b11e, mid: 0x277d08e60e477ad4, lo: 0x40b38005eb9a214a },
  U192 { hi: 0x8d4ff1df42398391, mid: 0xdeb5102ce0017ae6, lo: 0x8852a09cfd78e03c },
  U192 { hi: 0x47001fad440b3800, mid: 0x5eb9a214a8273f5e, lo: 0x380f2b9cce07aefd },
  U192 { hi: 0x93fea7ae68852a09, mid: 0xcfd78e03cae73381, lo: 0xebbf6015999fb258 },
  U192 { hi: 0xab5a9bf5e380f2b9, mid: 0xcce07aefd8056667, lo: 0xec960f7199000000 },
  U192 { hi: 0xa8db0b381ebbf601, mid: 0x5999fb2583dc6640, lo: 0x0000000000000000 },
  U192 { hi: 0x7f3126667ec960f7, mid: 0x1990000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x113abe6400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000847c9b5d7, lo: 0xc2e09b769956135f },
  U192 { hi: 0x00000000000211f2, mid: 0x6d75f0b826dda655, lo: 0x84d7faeb6845a4bc },
  U192 { hi: 0x847c9b5d7c2e09b7, mid: 0x69956135febada11, lo: 0x692f266b078b1407 },
  U192 { hi: 0xe018ca65584d7fae, mid: 0xb6845a4bc99ac1e2, lo: 0xc501f07625e893ff },
  U192 { hi: 0x37cb05a11692f266, mid: 0xb078b1407c1d897a, lo: 0x24ffcb9b3320d2b0 },
  U192 { hi: 0xe4c97c1e2c501f07, mid: 0x625e893ff2e6ccc8, lo: 0x34ac1cb842e09392 },
  U192 { hi: 0xe4eb8897a24ffcb9, mid: 0xb3320d2b072e10b8, lo: 0x24e49ba1b1d105c1 },
  U192 { hi: 0x76083ccc834ac1cb, mid: 0x842e093926e86c74, lo: 0x417064565d000000 },
  U192 { hi: 0x5ff0b10b824e49ba, mid: 0x1b1d105c19159740, lo: 0x0000000000000000 },
  U192 { hi: 0xbebef6c744170645, mid: 0x65d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xbe74997400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x00000000000003db, lo: 0x1a69ca8e627d6e2a },
  U192 { hi: 0x0000000000000000, mid: 0x00f6c69a72a3989f, lo: 0x5b8aad549e57273d },
  U192 { hi: 0x0000003db1a69ca8, mid: 0xe627d6e2ab552795, lo: 0xc9cf514391c26df6 },
  U192 { hi: 0x644a4189f5b8aad5, mid: 0x49e57273d450e470, lo: 0x9b7db8059dca12d3 },
  U192 { hi: 0x47671a795c9cf514, mid: 0x391c26df6e016772, lo: 0x84b4c650f72dfe2d },
  U192 { hi: 0xa7c3c64709b7db80, mid: 0x59dca12d31943dcb, lo: 0x7f8b66e452a76f19 },
  U192 { hi: 0x7ab8ce77284b4c65, mid: 0x0f72dfe2d9b914a9, lo: 0xdbc675b0f05d008c },
  U192 { hi: 0x11a70bdcb7f8b66e, mid: 0x452a76f19d6c3c17, lo: 0x402306dd3000bde5 },
  U192 { hi: 0x8f04894a9dbc675b, mid: 0x0f05d008c1b74c00, lo: 0x2f79478bb1000000 },
  U192 { hi: 0x1f2463c17402306d, mid: 0xd3000bde51e2ec40, lo: 0x0000000000000000 },
  U192 { hi: 0xca02f4c002f79478, mid: 0xbb10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x2b4e76c400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000072e9f794, lo: 0x15121740c78b3464 },
  U192 { hi: 0x0000000000001cba, mid: 0x7de5054485d031e2, lo: 0xcd19150db4bf5e16 },
  U192 { hi: 0x072e9f7941512174, mid: 0x0c78b34645436d2f, lo: 0xd785ae67a8bb7663 },
  U192 { hi: 0x2ddceb1e2cd19150, mid: 0xdb4bf5e16b99ea2e, lo: 0xdd98f97633b65534 },
  U192 { hi: 0x49bba6d2fd785ae6, mid: 0x7a8bb7663e5d8ced, lo: 0x954d141724da6d07 },
  U192 { hi: 0xbb1576a2edd98f97, mid: 0x633b65534505c936, lo: 0x9b41cb3c45f3da59 },
  U192 { hi: 0xc0af88ced954d141, mid: 0x724da6d072cf117c, lo: 0xf69659d25e00857d },
  U192 { hi: 0x731a1c9369b41cb3, mid: 0xc45f3da596749780, lo: 0x215f44ca0b4fcfdc },
  U192 { hi: 0x267d2117cf69659d, mid: 0x25e00857d13282d3, lo: 0xf3f723d9d5000000 },
  U192 { hi: 0x6fed89780215f44c, mid: 0xa0b4fcfdc8f67540, lo: 0x0000000000000000 },
  U192 { hi: 0x8d8ff82d3f3f723d, mid: 0x9d50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc9a19f5400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000035, lo: 0x82cef55a9561bc62 },
  U192 { hi: 0x0000000000000000, mid: 0x000d60b3bd56a558, lo: 0x6f18a71e223d8d3b },
  U192 { hi: 0x00000003582cef55, mid: 0xa9561bc629c7888f, lo: 0x634ec1d3366b5893 },
  U192 { hi: 0xdebb725586f18a71, mid: 0xe223d8d3b074cd9a, lo: 0xd624ee401914be07 },
  U192 { hi: 0x5ceb7888f634ec1d, mid: 0x3366b5893b900645, lo: 0x2f81eeb310179c7a },
  U192 { hi: 0xcb605cd9ad624ee4, mid: 0x01914be07bacc405, lo: 0xe71ea262cd4bda21 },
  U192 { hi: 0xc5c8086452f81eeb, mid: 0x310179c7a898b352, lo: 0xf6885f6b9b2f704e },
  U192 { hi: 0x181494405e71ea26, mid: 0x2cd4bda217dae6cb, lo: 0xdc138b54a044fe3c },
  U192 { hi: 0x885ed3352f6885f6, mid: 0xb9b2f704e2d52811, lo: 0x3f8f36cfebecdf8e },
  U192 { hi: 0x2092fe6cbdc138b5, mid: 0x4a044fe3cdb3fafb, lo: 0x37e3b58209000000 },
  U192 { hi: 0x2bc5ea8113f8f36c, mid: 0xfebecdf8ed608240, lo: 0x0000000000000000 },
  U192 { hi: 0x054477afb37e3b58, mid: 0x2090000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xda65282400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x00000000063ac04e, lo: 0x2163426e8a9603db },
  U192 { hi: 0x000000000000018e, mid: 0xb0138858d09ba2a5, lo: 0x80f6f147cc10d0d7 },
  U192 { hi: 0x0063ac04e2163426, mid: 0xe8a9603dbc51f304, lo: 0x3435c51177043278 },
  U192 { hi: 0x458fb22a580f6f14, mid: 0x7cc10d0d71445dc1, lo: 0x0c9e2ab9083b52c5 },
  U192 { hi: 0x0ff1c73043435c51, mid: 0x177043278aae420e, lo: 0xd4b16334fb807141 },
  U192 { hi: 0x908cdddc10c9e2ab, mid: 0x9083b52c58cd3ee0, lo: 0x1c5070f872651d9d },
  U192 { hi: 0x0bade420ed4b1633, mid: 0x4fb807141c3e1c99, lo: 0x47676518ef810b7b },
  U192 { hi: 0x7eb3ebee01c5070f, mid: 0x872651d9d9463be0, lo: 0x42dee48b47b3dfcb },
  U192 { hi: 0x5f9939c994767651, mid: 0x8ef810b7b922d1ec, lo: 0xf7f2d9ca16a7d3ab },
  U192 { hi: 0xbf791bbe042dee48, mid: 0xb47b3dfcb67285a9, lo: 0xf4eac2828d000000 },
  U192 { hi: 0x4aa19d1ecf7f2d9c, mid: 0xa16a7d3ab0a0a340, lo: 0x0000000000000000 },
  U192 { hi: 0xe512105a9f4eac28, mid: 0x28d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0430e23400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000002, lo: 0xe69d2818df38bb85 },
  U192 { hi: 0x0000000000000000, mid: 0x0000b9a74a0637ce, lo: 0x2ee16d953e2bd717 },
  U192 { hi: 0x000000002e69d281, mid: 0x8df38bb85b654f8a, lo: 0xf5c5cda4a23bec00 },
  U192 { hi: 0x77c71b7ce2ee16d9, mid: 0x53e2bd717369288e, lo: 0xfb0037ac08bde64b },
  U192 { hi: 0x4088bcf8af5c5cda, mid: 0x4a23bec00deb022f, lo: 0x7992f5502110cdb8 },
  U192 { hi: 0xd63c1a88efb0037a, mid: 0xc08bde64bd540844, lo: 0x336e0ed9e8d18961 },
  U192 { hi: 0xaea17022f7992f55, mid: 0x02110cdb83b67a34, lo: 0x62587b147575ae4b },
  U192 { hi: 0x7b0ae0844336e0ed, mid: 0x9e8d18961ec51d5d, lo: 0x6b92fc3f211b0aeb },
  U192 { hi: 0x751d57a3462587b1, mid: 0x47575ae4bf0fc846, lo: 0xc2bad2beae37dc6d },
  U192 { hi: 0x3544f1d5d6b92fc3, mid: 0xf211b0aeb4afab8d, lo: 0xf71b51e24f169cad },
  U192 { hi: 0x6f871c846c2bad2b, mid: 0xeae37dc6d47893c5, lo: 0xa72b416aa1000000 },
  U192 { hi: 0x989932b8df71b51e, mid: 0x24f169cad05aa840, lo: 0x0000000000000000 },
  U192 { hi: 0x0a8cc13c5a72b416, mid: 0xaa10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x41a8828400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x000000000056739e, lo: 0x5fee05fdbdb1b663 },
  U192 { hi: 0x0000000000000015, mid: 0x9ce797fb817f6f6c, lo: 0x6d98c9a2002aa175 },
  U192 { hi: 0x00056739e5fee05f, mid: 0xdbdb1b663268800a, lo: 0xa85d58a7b9ba089e },
  U192 { hi: 0x67f216f6c6d98c9a, mid: 0x2002aa175629ee6e, lo: 0x8227b7629aedbdfe },
  U192 { hi: 0x9428f800aa85d58a, mid: 0x7b9ba089edd8a6bb, lo: 0x6f7fb1fece3c6bfe },
  U192 { hi: 0x4b8bcee6e8227b76, mid: 0x29aedbdfec7fb38f, lo: 0x1affbb2535c66324 },
  U192 { hi: 0x04121a6bb6f7fb1f, mid: 0xece3c6bfeec94d71, lo: 0x98c93f76529ae08b },
  U192 { hi: 0x0f65bb38f1affbb2, mid: 0x535c66324fdd94a6, lo: 0xb822d27af4113846 },
  U192 { hi: 0xe39fb4d7198c93f7, mid: 0x6529ae08b49ebd04, lo: 0x4e1193116fee93f1 },
  U192 { hi: 0x36b2494a6b822d27, mid: 0xaf41138464c45bfb, lo: 0xa4fc7d2e0efc021d },
  U192 { hi: 0x86a013d044e11931, mid: 0x16fee93f1f4b83bf, lo: 0x00876efe85000000 },
  U192 { hi: 0x51206dbfba4fc7d2, mid: 0xe0efc021dbbfa140, lo: 0x0000000000000000 },
  U192 { hi: 0x24d4103bf00876ef, mid: 0xe850000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x4af8b21400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x00000a1075a24e44, lo: 0x21730b24cf65b861 },
  U192 { hi: 0x0000000002841d68, mid: 0x9391085cc2c933d9, lo: 0x6e184be07e68df49 },
  U192 { hi: 0xd75b44e4421730b2, mid: 0x4cf65b8612f81f9a, lo: 0x37d253f9394bb6c3 },
  U192 { hi: 0xcf8ae33d96e184be, mid: 0x07e68df494fe4e52, lo: 0xedb0dce606cda31e },
  U192 { hi: 0x0013d9f9a37d253f, mid: 0x9394bb6c373981b3, lo: 0x68c7a185fc328be2 },
  U192 { hi: 0xcdb1ece52edb0dce, mid: 0x606cda31e8617f0c, lo: 0xa2f8b9374fda7e7c },
  U192 { hi: 0x4824f01b368c7a18, mid: 0x5fc328be2e4dd3f6, lo: 0x9f9f25600cb180dc },
  U192 { hi: 0x60093ff0ca2f8b93, mid: 0x74fda7e7c958032c, lo: 0x603725e774d222b6 },
  U192 { hi: 0x90400d3f69f9f256, mid: 0x00cb180dc979dd34, lo: 0x88adaa89f801d84b },
  U192 { hi: 0x26774832c603725e, mid: 0x774d222b6aa27e00, lo: 0x7612f7b7f47cf096 },
  U192 { hi: 0x71a715d3488adaa8, mid: 0x9f801d84bdedfd1f, lo: 0x3c25abeb79000000 },
  U192 { hi: 0xab54e7e007612f7b, mid: 0x7f47cf096afade40, lo: 0x0000000000000000 },
  U192 { hi: 0x06fa47d1f3c25abe, mid: 0xb790000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x3deed5e400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x000000000004afc1, lo: 0xe850fdb4e6ca55ed },
  U192 { hi: 0x0000000000000001, mid: 0x2bf07a143f6d39b2, lo: 0x957b5e202ac9f31c },
  U192 { hi: 0x00004afc1e850fdb, mid: 0x4e6ca55ed7880ab2, lo: 0x7cc706ad257bd9d4 },
  U192 { hi: 0x91c8339b2957b5e2, mid: 0x02ac9f31c1ab495e, lo: 0xf67531c8f05db6e8 },
  U192 { hi: 0x6093b0ab27cc706a, mid: 0xd257bd9d4c723c17, lo: 0x6dba1f7ed535fd22 },
  U192 { hi: 0x3add3495ef67531c, mid: 0x8f05db6e87dfb54d, lo: 0x7f48968ad2a9ced9 },
  U192 { hi: 0x91e3c3c176dba1f7, mid: 0xed535fd225a2b4aa, lo: 0x73b66984cc9a9a64 },
  U192 { hi: 0x032b0354d7f48968, mid: 0xad2a9ced9a613326, lo: 0xa699192abf35a952 },
  U192 { hi: 0xeca5db4aa73b6698, mid: 0x4cc9a9a6464aafcd, lo: 0x6a5488ab4b653ed7 },
  U192 { hi: 0x9c64db326a699192, mid: 0xabf35a95222ad2d9, lo: 0x4fb5dc3dd38756c2 },
  U192 { hi: 0x05e92afcd6a5488a, mid: 0xb4b653ed770f74e1, lo: 0xd5b0bc82c3057cd4 },
  U192 { hi: 0xad9bb52d94fb5dc3, mid: 0xdd38756c2f20b0c1, lo: 0x5f3518cbbd000000 },
  U192 { hi: 0xeab2574e1d5b0bc8, mid: 0x2c3057cd4632ef40, lo: 0x0000000000000000 },
  U192 { hi: 0xe90ed30c15f3518c, mid: 0xbbd0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xaf8de6f400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000008bab8eefb6, lo: 0x409c1a1ad089b6c2 },
  U192 { hi: 0x000000000022eae3, mid: 0xbbed90270686b422, lo: 0x6db0bdd5238971ee },
  U192 { hi: 0x58f486fb6409c1a1, mid: 0xad089b6c2f7548e2, lo: 0x5c7b885ba466e377 },
  U192 { hi: 0x6b785b4226db0bdd, mid: 0x5238971ee216e919, lo: 0xb8ddc75f98c79c14 },
  U192 { hi: 0x13ecd48e25c7b885, mid: 0xba466e3771d7e631, lo: 0xe70524e406e597a9 },
  U192 { hi: 0x88a9fe919b8ddc75, mid: 0xf98c79c1493901b9, lo: 0x65ea6cb3864ab608 },
  U192 { hi: 0x6fedde631e70524e, mid: 0x406e597a9b2ce192, lo: 0xad8226c00400b597 },
  U192 { hi: 0x6348b81b965ea6cb, mid: 0x3864ab6089b00100, lo: 0x2d65d20f971080ca },
  U192 { hi: 0x621906192ad8226c, mid: 0x00400b597483e5c4, lo: 0x2032a16cf0ac1c79 },
  U192 { hi: 0x5f46b01002d65d20, mid: 0xf971080ca85b3c2b, lo: 0x071e5d1ca8f4c1fc },
  U192 { hi: 0x5909f65c42032a16, mid: 0xcf0ac1c797472a3d, lo: 0x307f2d617a2f8f89 },
  U192 { hi: 0x9a516bc2b071e5d1, mid: 0xca8f4c1fcb585e8b, lo: 0xe3e257ba91000000 },
  U192 { hi: 0xd9b5c2a3d307f2d6, mid: 0x17a2f8f895eea440, lo: 0x0000000000000000 },
  U192 { hi: 0x5ad05de8be3e257b, mid: 0xa910000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xcf38224400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000004109, lo: 0xfab533fb594dce1d },
  U192 { hi: 0x0000000000000000, mid: 0x10427ead4cfed653, lo: 0x7387652c41c53f8e },
  U192 { hi: 0x000004109fab533f, mid: 0xb594dce1d94b1071, lo: 0x4fe3991dfd6f6d3f },
  U192 { hi: 0xd014656537387652, mid: 0xc41c53f8e6477f5b, lo: 0xdb4fce76053c77ee },
  U192 { hi: 0x611ba90714fe3991, mid: 0xdfd6f6d3f39d814f, lo: 0x1dfb84abcd11c59b },
  U192 { hi: 0x87c1e7f5bdb4fce7, mid: 0x6053c77ee12af344, lo: 0x7166ef7ec140fb7b },
  U192 { hi: 0xc3c3d014f1dfb84a, mid: 0xbcd11c59bbdfb050, lo: 0x3ededbd46e384486 },
  U192 { hi: 0xbe5a573447166ef7, mid: 0xec140fb7b6f51b8e, lo: 0x1121810ab7d4f899 },
  U192 { hi: 0x03362b0503ededbd, mid: 0x46e384486042adf5, lo: 0x3e2678fd67962254 },
  U192 { hi: 0xb5be69b8e1121810, mid: 0xab7d4f899e3f59e5, lo: 0x889530340076af27 },
  U192 { hi: 0x01dd2adf53e2678f, mid: 0xd67962254c0d001d, lo: 0xabc9d354a188763b },
  U192 { hi: 0xbd8ddd9e58895303, mid: 0x40076af274d52862, lo: 0x1d8ecdb08d4462bd },
  U192 { hi: 0x70126001dabc9d35, mid: 0x4a188763b36c2351, lo: 0x18af6fb835000000 },
  U192 { hi: 0x4ead228621d8ecdb, mid: 0x08d4462bdbee0d40, lo: 0x0000000000000000 },
  U192 { hi: 0xb01b4235118af6fb, mid: 0x8350000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x438558d400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000792500d39, lo: 0xe796e67de319d9cb },
  U192 { hi: 0x000000000001e494, mid: 0x034e79e5b99f78c6, lo: 0x7672ce7919d87b38 },
  U192 { hi: 0x792500d39e796e67, mid: 0xde319d9cb39e4676, lo: 0x1ece2266979b48be },
  U192 { hi: 0xa0cb6f8c67672ce7, mid: 0x919d87b38899a5e6, lo: 0xd22f8e9b12dd13bc },
  U192 { hi: 0x1ea0746761ece226, mid: 0x6979b48be3a6c4b7, lo: 0x44ef260285e53303 },
  U192 { hi: 0xed396a5e6d22f8e9, mid: 0xb12dd13bc980a179, lo: 0x4cc0e21fc500ac19 },
  U192 { hi: 0x0270344b744ef260, mid: 0x285e53303887f140, lo: 0x2b0653724e40d311 },
  U192 { hi: 0xd6b3c21794cc0e21, mid: 0xfc500ac194dc9390, lo: 0x34c451903b882315 },
  U192 { hi: 0x59fda71402b06537, mid: 0x24e40d3114640ee2, lo: 0x08c563eefb534166 },
  U192 { hi: 0x33533939034c4519, mid: 0x03b8823158fbbed4, lo: 0xd059b655108955c5 },
  U192 { hi: 0x559a78ee208c563e, mid: 0xefb534166d954422, lo: 0x5571723366394436 },
  U192 { hi: 0xa7720bed4d059b65, mid: 0x5108955c5c8cd98e, lo: 0x510d8886ae8b862e },
  U192 { hi: 0x0037444225571723, mid: 0x366394436221aba2, lo: 0xe18b971de9000000 },
  U192 { hi: 0x4b383d98e510d888, mid: 0x6ae8b862e5c77a40, lo: 0x0000000000000000 },
  U192 { hi: 0x41c85aba2e18b971, mid: 0xde90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x18ae17a400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000386, lo: 0x98e14eef49914579 },
  U192 { hi: 0x0000000000000000, mid: 0x00e1a63853bbd264, lo: 0x515e7873f8a03969 },
  U192 { hi: 0x00000038698e14ee, mid: 0xf49914579e1cfe28, lo: 0x0e5a5cff827c79fb },
  U192 { hi: 0x18a2bd264515e787, mid: 0x3f8a0396973fe09f, lo: 0x1e7ee6786710a61a },
  U192 { hi: 0xe0f61fe280e5a5cf, mid: 0xf827c79fb99e19c4, lo: 0x29869454b664084c },
  U192 { hi: 0x833e9e09f1e7ee67, mid: 0x86710a61a5152d99, lo: 0x02132f2e24ad6b17 },
  U192 { hi: 0x4698e99c42986945, mid: 0x4b664084cbcb892b, lo: 0x5ac5f85dc1f1f911 },
  U192 { hi: 0x7ffe4ad9902132f2, mid: 0xe24ad6b17e17707c, lo: 0x7e44521ab18d106d },
  U192 { hi: 0x3e599092b5ac5f85, mid: 0xdc1f1f911486ac63, lo: 0x441b6bff7a3f63e5 },
  U192 { hi: 0xd2f21f07c7e44521, mid: 0xab18d106daffde8f, lo: 0xd8f944f93bdec827 },
  U192 { hi: 0x247082c63441b6bf, mid: 0xf7a3f63e513e4ef7, lo: 0xb209ed5c3745f81f },
  U192 { hi: 0x1bb8bde8fd8f944f, mid: 0x93bdec827b570dd1, lo: 0x7e07cb9fea591fb1 },
  U192 { hi: 0x75084cef7b209ed5, mid: 0xc3745f81f2e7fa96, lo: 0x47ec7cb6cabf89e3 },
  U192 { hi: 0x7ee8e0dd17e07cb9, mid: 0xfea591fb1f2db2af, lo: 0xe278f761ed000000 },
  U192 { hi: 0xa6cf97a9647ec7cb, mid: 0x6cabf89e3dd87b40, lo: 0x0000000000000000 },
  U192 { hi: 0x5147632afe278f76, mid: 0x1ed0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe3b557b400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000069137e0c, lo: 0xae3517c639c19776 },
  U192 { hi: 0x0000000000001a44, mid: 0xdf832b8d45f18e70, lo: 0x65dd8dffe6223c44 },
  U192 { hi: 0x069137e0cae3517c, mid: 0x639c1977637ff988, lo: 0x8f111465fa4b090c },
  U192 { hi: 0x997780e7065dd8df, mid: 0xfe6223c445197e92, lo: 0xc24304ebcf8fd1e4 },
  U192 { hi: 0xeafc179888f11146, mid: 0x5fa4b090c13af3e3, lo: 0xf47904cf00ce1a4e },
  U192 { hi: 0xb3f8bfe92c24304e, mid: 0xbcf8fd1e4133c033, lo: 0x8693b83878e1ea74 },
  U192 { hi: 0x2ffe4f3e3f47904c, mid: 0xf00ce1a4ee0e1e38, lo: 0x7a9d09b57fdf4ee7 },
  U192 { hi: 0x54eeac0338693b83, mid: 0x878e1ea7426d5ff7, lo: 0xd3b9e1b0df3c40f8 },
  U192 { hi: 0x111449e387a9d09b, mid: 0x57fdf4ee786c37cf, lo: 0x103e09de4ef41b3e },
  U192 { hi: 0xd185a5ff7d3b9e1b, mid: 0x0df3c40f827793bd, lo: 0x06cf9382b1ac51bf },
  U192 { hi: 0x52adbb7cf103e09d, mid: 0xe4ef41b3e4e0ac6b, lo: 0x146fc091f1d420ff },
  U192 { hi: 0xb022a13bd06cf938, mid: 0x2b1ac51bf0247c75, lo: 0x083ff0d96ab38382 },
  U192 { hi: 0x9316aac6b146fc09, mid: 0x1f1d420ffc365aac, lo: 0xe0e08c2bfdccf7ab },
  U192 { hi: 0x19bd17c75083ff0d, mid: 0x96ab3838230aff73, lo: 0x3deadd6b81000000 },
  U192 { hi: 0xe4560daace0e08c2, mid: 0xbfdccf7ab75ae040, lo: 0x0000000000000000 },
  U192 { hi: 0x5e6977f733deadd6, mid: 0xb810000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe5922e0400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000000000030, lo: 0xee0d60427a13c1c2 },
  U192 { hi: 0x0000000000000000, mid: 0x000c3b8358109e84, lo: 0xf070a862f80ec470 },
  U192 { hi: 0x000000030ee0d604, mid: 0x27a13c1c2a18be03, lo: 0xb11c03200981ba80 },
  U192 { hi: 0xeac919e84f070a86, mid: 0x2f80ec4700c80260, lo: 0x6ea01029dc377861 },
  U192 { hi: 0x1ae513e03b11c032, mid: 0x00981ba8040a770d, lo: 0xde184989d5a7a02f },
  U192 { hi: 0xe25fa82606ea0102, mid: 0x9dc3778612627569, lo: 0xe80bc0a9575104ca },
  U192 { hi: 0xebc2d770dde18498, mid: 0x9d5a7a02f02a55d4, lo: 0x413298ac2908e92a },
  U192 { hi: 0xd7dcdf569e80bc0a, mid: 0x9575104ca62b0a42, lo: 0x3a4aa84d3583cc67 },
  U192 { hi: 0x77958d5d4413298a, mid: 0xc2908e92aa134d60, lo: 0xf319f75eaee8d23f },
  U192 { hi: 0x384a50a423a4aa84, mid: 0xd3583cc67dd7abba, lo: 0x348fdb95b62e7b4b },
  U192 { hi: 0xb2c124d60f319f75, mid: 0xeaee8d23f6e56d8b, lo: 0x9ed2fb5c59157750 },
  U192 { hi: 0x67f3babba348fdb9, mid: 0x5b62e7b4bed71645, lo: 0x5dd43d430416f6e4 },
  U192 { hi: 0x24c3fed8b9ed2fb5, mid: 0xc59157750f50c105, lo: 0xbdb9368ebee1a749 },
  U192 { hi: 0x52bc496455dd43d4, mid: 0x30416f6e4da3afb8, lo: 0x69d247d0529e5898 },
  U192 { hi: 0xe7d1cc105bdb9368, mid: 0xebee1a7491f414a7, lo: 0x96260eb6e5000000 },
  U192 { hi: 0xa8e55afb869d247d, mid: 0x0529e58983adb940, lo: 0x0000000000000000 },
  U192 { hi: 0xed64f94a796260eb, mid: 0x6e50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb347939400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000000005b23972, lo: 0x88e40a38ef0099ff },
  U192 { hi: 0x000000000000016c, mid: 0x8e5ca239028e3bc0, lo: 0x267fc95bf1d2a4bb },
  U192 { hi: 0x005b2397288e40a3, mid: 0x8ef0099ff256fc74, lo: 0xa92ef6f2c30e9b57 },
  U192 { hi: 0x38d8bbbc0267fc95, mid: 0xbf1d2a4bbdbcb0c3, lo: 0xa6d5d824f0499c56 },
  U192 { hi: 0x7382c7c74a92ef6f, mid: 0x2c30e9b576093c12, lo: 0x67159775abbb2466 },
  U192 { hi: 0x046d4b0c3a6d5d82, mid: 0x4f0499c565dd6aee, lo: 0xc91981e8deba22e2 },
  U192 { hi: 0xddc173c126715977, mid: 0x5abbb246607a37ae, lo: 0x88b8becabd0f63e5 },
  U192 { hi: 0xdab336aeec91981e, mid: 0x8deba22e2fb2af43, lo: 0xd8f94a3ecf72e83c },
  U192 { hi: 0x9fde837ae88b8bec, mid: 0xabd0f63e528fb3dc, lo: 0xba0f3acb43673e38 },
  U192 { hi: 0x131bbaf43d8f94a3, mid: 0xecf72e83ceb2d0d9, lo: 0xcf8e283810ac57f0 },
  U192 { hi: 0x90210b3dcba0f3ac, mid: 0xb43673e38a0e042b, lo: 0x15fc3633da2fa989 },
  U192 { hi: 0x5172d50d9cf8e283, mid: 0x810ac57f0d8cf68b, lo: 0xea624c50f8b163b9 },
  U192 { hi: 0xcc0b5042b15fc363, mid: 0x3da2fa9893143e2c, lo: 0x58ee74bbf5451846 },
  U192 { hi: 0x297b9f68bea624c5, mid: 0x0f8b163b9d2efd51, lo: 0x461183496ea98610 },
  U192 { hi: 0x791d1be2c58ee74b, mid: 0xbf54518460d25baa, lo: 0x6184348959000000 },
  U192 { hi: 0x58e2d7d514611834, mid: 0x96ea98610d225640, lo: 0x0000000000000000 },
  U192 { hi: 0x2678e5baa6184348, mid: 0x9590000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x6aa2ed6400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000000, mid: 0x0000a9c2794ae3a3, lo: 0xc69ab2eb3875504d },
  U192 { hi: 0x000000002a709e52, mid: 0xb8e8f1a6acbace1d, lo: 0x541376c8bf4d531f },
  U192 { hi: 0x6b010e3a3c69ab2e, mid: 0xb3875504ddb22fd3, lo: 0x54c7eca1400e328c },
  U192 { hi: 0x6f4b4ce1d541376c, mid: 0x8bf4d531fb285003, lo: 0x8ca3135475047889 },
  U192 { hi: 0xe7d11afd354c7eca, mid: 0x1400e328c4d51d41, lo: 0x1e227024bc89ede3 },
  U192 { hi: 0x5ad49d0038ca3135, mid: 0x475047889c092f22, lo: 0x7b78f650e115fa8c },
  U192 { hi: 0x6fe481d411e22702, mid: 0x4bc89ede3d943845, lo: 0x7ea30a203b068fb0 },
  U192 { hi: 0xc72d82f227b78f65, mid: 0x0e115fa8c2880ec1, lo: 0xa3ec16eb2b350c76 },
  U192 { hi: 0x67b7238457ea30a2, mid: 0x03b068fb05bacacd, lo: 0x431d99dd50f91e92 },
  U192 { hi: 0x5809b8ec1a3ec16e, mid: 0xb2b350c76677543e, lo: 0x47a4a6fe8cb31f22 },
  U192 { hi: 0x6099d4acd431d99d, mid: 0xd50f91e929bfa32c, lo: 0xc7c89f93741b5444 },
  U192 { hi: 0x9698ad43e47a4a6f, mid: 0xe8cb31f227e4dd06, lo: 0xd5111f3076e50b65 },
  U192 { hi: 0x07c39a32cc7c89f9, mid: 0x3741b54447cc1db9, lo: 0x42d95a63d8a22970 },
  U192 { hi: 0xdccf65d06d5111f3, mid: 0x076e50b65698f628, lo: 0x8a5c22ca99252b27 },
  U192 { hi: 0x73ce81db942d95a6, mid: 0x3d8a229708b2a649, lo: 0x4ac9cb751d000000 },
  U192 { hi: 0xe96c076288a5c22c, mid: 0xa99252b272dd4740, lo: 0x0000000000000000 },
  U192 { hi: 0xaabd8a6494ac9cb7, mid: 0x51d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa0a7347400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0000000000000013, mid: 0xc33b72569c63752d, lo: 0x80f4584d5068da29 },
  U192 { hi: 0x0004f0cedc95a718, mid: 0xdd4b603d1613541a, lo: 0x368a4a26cfa96686 },
  U192 { hi: 0xb997ef52d80f4584, mid: 0xd5068da29289b3ea, lo: 0x59a1bd855df90d8a },
  U192 { hi: 0x917fed41a368a4a2, mid: 0x6cfa96686f61577e, lo: 0x4362838866e4ae34 },
  U192 { hi: 0x5914fb3ea59a1bd8, mid: 0x55df90d8a0e219b9, lo: 0x2b8d0518c8b9ec85 },
  U192 { hi: 0x95099577e4362838, mid: 0x866e4ae34146322e, lo: 0x7b2171a4c92eac55 },
  U192 { hi: 0x367d919b92b8d051, mid: 0x8c8b9ec85c69324b, lo: 0xab157db9d1a14c8d },
  U192 { hi: 0x57cb9322e7b2171a, mid: 0x4c92eac55f6e7468, lo: 0x53234163f05273d8 },
  U192 { hi: 0x68d05324bab157db, mid: 0x9d1a14c8d058fc14, lo: 0x9cf61a60e6602216 },
  U192 { hi: 0x1b7c674685323416, mid: 0x3f05273d86983998, lo: 0x0885a96379823690 },
  U192 { hi: 0x8b5447c149cf61a6, mid: 0x0e6602216a58de60, lo: 0x8da4303f3d0538e2 },
  U192 { hi: 0x9cea539980885a96, mid: 0x379823690c0fcf41, lo: 0x4e3895469cfaa9c8 },
  U192 { hi: 0x4184b5e608da4303, mid: 0xf3d0538e2551a73e, lo: 0xaa72283d04e93ca5 },
  U192 { hi: 0xad4694f414e38954, mid: 0x69cfaa9c8a0f413a, lo: 0x4f294fc712a89739 },
  U192 { hi: 0x375d5a73eaa72283, mid: 0xd04e93ca53f1c4aa, lo: 0x25ce566d71000000 },
  U192 { hi: 0xdc164c13a4f294fc, mid: 0x712a8973959b5c40, lo: 0x0000000000000000 },
  U192 { hi: 0x4750544aa25ce566, mid: 0xd710000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x84b6a5c400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x00000000024cf8de, mid: 0x94d32eab9e3a46e5, lo: 0x8bdedbc566baa157 },
  U192 { hi: 0x1814f534cbaae78e, mid: 0x91b962f7b6f159ae, lo: 0xa855dbcb323966bc },
  U192 { hi: 0xda42b46e58bdedbc, mid: 0x566baa1576f2cc8e, lo: 0x59af37150bbd7e97 },
  U192 { hi: 0x9ca7259aea855dbc, mid: 0xb323966bcdc542ef, lo: 0x5fa5c71d739ebe1a },
  U192 { hi: 0x60b334c8e59af371, mid: 0x50bbd7e971c75ce7, lo: 0xaf869893dee8ef76 },
  U192 { hi: 0xa2f8042ef5fa5c71, mid: 0xd739ebe1a624f7ba, lo: 0x3bdd95674527ccd4 },
  U192 { hi: 0x2fe9d5ce7af86989, mid: 0x3dee8ef76559d149, lo: 0xf33526738ae9c260 },
  U192 { hi: 0x5d786f7ba3bdd956, mid: 0x74527ccd499ce2ba, lo: 0x70980d36f6cff4c8 },
  U192 { hi: 0x5daecd149f335267, mid: 0x38ae9c26034dbdb3, lo: 0xfd321999bbca5695 },
  U192 { hi: 0xd8d36e2ba70980d3, mid: 0x6f6cff4c86666ef2, lo: 0x95a5404c64774e4e },
  U192 { hi: 0xe71e33db3fd32199, mid: 0x9bbca5695013191d, lo: 0xd3939667b3405370 },
  U192 { hi: 0x6b46e6ef295a5404, mid: 0xc64774e4e599ecd0, lo: 0x14dc38f5e494e0b1 },
  U192 { hi: 0xafca8991dd393966, mid: 0x7b3405370e3d7925, lo: 0x382c4b6d944d66f0 },
  U192 { hi: 0x939fc6cd014dc38f, mid: 0x5e494e0b12db6513, lo: 0x59bc00947f1bc00e },
  U192 { hi: 0x49195f925382c4b6, mid: 0xd944d66f00251fc6, lo: 0xf00389aa95000000 },
  U192 { hi: 0x797f0651359bc009, mid: 0x47f1bc00e26aa540, lo: 0x0000000000000000 },
  U192 { hi: 0x7fe5d9fc6f00389a, mid: 0xa950000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xabd43a5400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9b286748710107f1, mid: 0x287422919ad2506f, lo: 0x10e61ee36b4fba7b },
  U192 { hi: 0x840e2a1d08a466b4, mid: 0x941bc43987b8dad3, lo: 0xee9eea2bb7402cc0 },
  U192 { hi: 0xa70bd506f10e61ee, mid: 0x36b4fba7ba8aedd0, lo: 0x0b303d3044d94423 },
  U192 { hi: 0x8e98c5ad3ee9eea2, mid: 0xbb7402cc0f4c1136, lo: 0x5108dc3a9a0fef09 },
  U192 { hi: 0x7cad1edd00b303d3, mid: 0x044d9442370ea683, lo: 0xfbc279a15bcf7b65 },
  U192 { hi: 0xad0c911365108dc3, mid: 0xa9a0fef09e6856f3, lo: 0xded96e4e03c6b730 },
  U192 { hi: 0xdf0282683fbc279a, mid: 0x15bcf7b65b9380f1, lo: 0xadcc2fe2a1c3a6b9 },
  U192 { hi: 0x97698d6f3ded96e4, mid: 0xe03c6b730bf8a870, lo: 0xe9ae7af3ed0a9d5b },
  U192 { hi: 0xb7e5500f1adcc2fe, mid: 0x2a1c3a6b9ebcfb42, lo: 0xa756ec1b0ba6c9aa },
  U192 { hi: 0x72ee52870e9ae7af, mid: 0x3ed0a9d5bb06c2e9, lo: 0xb26aafbdaefc2169 },
  U192 { hi: 0xcea7efb42a756ec1, mid: 0xb0ba6c9aabef6bbf, lo: 0x085a45ebdabcb529 },
  U192 { hi: 0x2ec87c2e9b26aafb, mid: 0xdaefc216917af6af, lo: 0x2d4a4ec2272811d6 },
  U192 { hi: 0xcaadfebbf085a45e, mid: 0xbdabcb5293b089ca, lo: 0x04758a8420587bd7 },
  U192 { hi: 0xe1a69f6af2d4a4ec, mid: 0x2272811d62a10816, lo: 0x1ef5ca9dc9000000 },
  U192 { hi: 0xbc44989ca04758a8, mid: 0x420587bd72a77240, lo: 0x0000000000000000 },
  U192 { hi: 0x3b30808161ef5ca9, mid: 0xdc90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x45622f2400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd90caf304f15d4b1, mid: 0xdffec63f9bf7966b, lo: 0x714974b04ecbb4ac },
  U192 { hi: 0x3efc0fffb18fe6fd, mid: 0xe59adc525d2c13b2, lo: 0xed2b2742c203e5fe },
  U192 { hi: 0x95d1d966b714974b, mid: 0x04ecbb4ac9d0b080, lo: 0xf97f97c9dd4c0df5 },
  U192 { hi: 0xa92e193b2ed2b274, mid: 0x2c203e5fe5f27753, lo: 0x037d444b9ed3599e },
  U192 { hi: 0xcc8ac3080f97f97c, mid: 0x9dd4c0df5112e7b4, lo: 0xd66799af59321fcd },
  U192 { hi: 0x200f67753037d444, mid: 0xb9ed3599e66bd64c, lo: 0x87f36b505e9e024e },
  U192 { hi: 0x47bda67b4d66799a, mid: 0xf59321fcdad417a7, lo: 0x8093b31d61c35fb6 },
  U192 { hi: 0xa1f63d64c87f36b5, mid: 0x05e9e024ecc75870, lo: 0xd7edb141d8957db4 },
  U192 { hi: 0x01c2297a78093b31, mid: 0xd61c35fb6c507625, lo: 0x5f6d20e500a2ed3c },
  U192 { hi: 0x4b53cd870d7edb14, mid: 0x1d8957db48394028, lo: 0xbb4f0d85b922054c },
  U192 { hi: 0xe5971f6255f6d20e, mid: 0x500a2ed3c3616e48, lo: 0x81533b96ef312d83 },
  U192 { hi: 0x7ca28c028bb4f0d8, mid: 0x5b922054cee5bbcc, lo: 0x4b60fb7e8e5a4d0c },
  U192 { hi: 0xc8b166e4881533b9, mid: 0x6ef312d83edfa396, lo: 0x93431e0da573f864 },
  U192 { hi: 0xdd1113bcc4b60fb7, mid: 0xe8e5a4d0c783695c, lo: 0xfe190f354d000000 },
  U192 { hi: 0x123bd239693431e0, mid: 0xda573f8643cd5340, lo: 0x0000000000000000 },
  U192 { hi: 0x0f0fe695cfe190f3, mid: 0x54d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd4cea53400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd63d7adcc715ba68, mid: 0xd979d209d64e376d, lo: 0xbc6525bbad9a4c1b },
  U192 { hi: 0xee62065e74827593, mid: 0x8ddb6f19496eeb66, lo: 0x9306ed24b8873706 },
  U192 { hi: 0x29c28b76dbc6525b, mid: 0xbad9a4c1bb492e21, lo: 0xcdc19a77caf1b2b5 },
  U192 { hi: 0x24b12eb669306ed2, mid: 0x4b887370669df2bc, lo: 0x6cad7df60f17d738 },
  U192 { hi: 0x5a586ae21cdc19a7, mid: 0x7caf1b2b5f7d83c5, lo: 0xf5ce2748ee8ae04d },
  U192 { hi: 0xde423f2bc6cad7df, mid: 0x60f17d7389d23ba2, lo: 0xb8136a601f1d2c21 },
  U192 { hi: 0xc12b103c5f5ce274, mid: 0x8ee8ae04da9807c7, lo: 0x4b084502dd6e70b8 },
  U192 { hi: 0xa0be8bba2b8136a6, mid: 0x01f1d2c21140b75b, lo: 0x9c2e325966170d59 },
  U192 { hi: 0x2c0f407c74b08450, mid: 0x2dd6e70b8c965985, lo: 0xc3566e509812f0a9 },
  U192 { hi: 0xa4bbdb75b9c2e325, mid: 0x966170d59b942604, lo: 0xbc2a63dce261b29d },
  U192 { hi: 0xdc1065985c3566e5, mid: 0x09812f0a98f73898, lo: 0x6ca778a8e7cb8ff6 },
  U192 { hi: 0x778172604bc2a63d, mid: 0xce261b29de2a39f2, lo: 0xe3fdb12733bd005e },
  U192 { hi: 0xcd6b238986ca778a, mid: 0x8e7cb8ff6c49ccef, lo: 0x4017870348042869 },
  U192 { hi: 0x6f61eb9f2e3fdb12, mid: 0x733bd005e1c0d201, lo: 0x0a1a67b061000000 },
  U192 { hi: 0x4249c4cef4017870, mid: 0x3480428699ec1840, lo: 0x0000000000000000 },
  U192 { hi: 0xc4411d2010a1a67b, mid: 0x0610000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9b10b18400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x554e79fd0fb92451, mid: 0x255f055a76ad159d, lo: 0x9961d78aabf5ab2b },
  U192 { hi: 0xbdcf5957c1569dab, mid: 0x4567665875e2aafd, lo: 0x6acade925022d697 },
  U192 { hi: 0x673e7159d9961d78, mid: 0xaabf5ab2b7a49408, lo: 0xb5a5dc27dc144cc1 },
  U192 { hi: 0xc80ca2afd6acade9, mid: 0x25022d697709f705, lo: 0x133071dd6d2a0c37 },
  U192 { hi: 0x55ed79408b5a5dc2, mid: 0x7dc144cc1c775b4a, lo: 0x830dec86bb34e2ed },
  U192 { hi: 0xd5b667705133071d, mid: 0xd6d2a0c37b21aecd, lo: 0x38bb7724a2982b66 },
  U192 { hi: 0x07073db4a830dec8, mid: 0x6bb34e2eddc928a6, lo: 0x0ad99af591c542b0 },
  U192 { hi: 0x6f147aecd38bb772, mid: 0x4a2982b666bd6471, lo: 0x50ac04a23ff31a45 },
  U192 { hi: 0x0e7d128a60ad99af, mid: 0x591c542b01288ffc, lo: 0xc69149b86d65fadb },
  U192 { hi: 0x671cae47150ac04a, mid: 0x23ff31a4526e1b59, lo: 0x7eb6ec7ec8769350 },
  U192 { hi: 0xa6bfa8ffcc69149b, mid: 0x86d65fadbb1fb21d, lo: 0xa4d41e50c48cad90 },
  U192 { hi: 0x46d0a1b597eb6ec7, mid: 0xec87693507943123, lo: 0x2b64254ecd85af14 },
  U192 { hi: 0x696acb21da4d41e5, mid: 0x0c48cad90953b361, lo: 0x6bc50d6f51f781b8 },
  U192 { hi: 0x6bf0231232b64254, mid: 0xecd85af1435bd47d, lo: 0xe06e234345000000 },
  U192 { hi: 0x8f4d433616bc50d6, mid: 0xf51f781b88d0d140, lo: 0x0000000000000000 },
  U192 { hi: 0x98be9547de06e234, mid: 0x3450000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x2d2b4d1400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x3b43366793518ab4, mid: 0x7105ff54df731b16, lo: 0x47e9903df5eb3360 },
  U192 { hi: 0x2804b4417fd537dc, mid: 0xc6c591fa640f7d7a, lo: 0xccd80dd7d2bdb0fe },
  U192 { hi: 0x284321b1647e9903, mid: 0xdf5eb3360375f4af, lo: 0x6c3fb542c76d0d82 },
  U192 { hi: 0x50132fd7accd80dd, mid: 0x7d2bdb0fed50b1db, lo: 0x43609a8a1fae98a5 },
  U192 { hi: 0x2550f74af6c3fb54, mid: 0x2c76d0d826a287eb, lo: 0xa6296a0eea87fe13 },
  U192 { hi: 0xddb1131db43609a8, mid: 0xa1fae98a5a83baa1, lo: 0xff84c2e4eb645b09 },
  U192 { hi: 0xaa0af87eba6296a0, mid: 0xeea87fe130b93ad9, lo: 0x16c24bf6072c67d3 },
  U192 { hi: 0x572cc3aa1ff84c2e, mid: 0x4eb645b092fd81cb, lo: 0x19f4ffc2e0c824fc },
  U192 { hi: 0x4bb6c3ad916c24bf, mid: 0x6072c67d3ff0b832, lo: 0x093f29eb3e010fa6 },
  U192 { hi: 0xbb16c81cb19f4ffc, mid: 0x2e0c824fca7acf80, lo: 0x43e989fabadd4c73 },
  U192 { hi: 0x1dc763832093f29e, mid: 0xb3e010fa627eaeb7, lo: 0x531ce731dbde2940 },
  U192 { hi: 0x32f14cf8043e989f, mid: 0xabadd4c739cc76f7, lo: 0x8a501acff83b5872 },
  U192 { hi: 0x5d5912eb7531ce73, mid: 0x1dbde29406b3fe0e, lo: 0xd61cba983b6ef13e },
  U192 { hi: 0x5b86876f78a501ac, mid: 0xff83b5872ea60edb, lo: 0xbc4f98cb39000000 },
  U192 { hi: 0x5fb427e0ed61cba9, mid: 0x83b6ef13e632ce40, lo: 0x0000000000000000 },
  U192 { hi: 0x9d60c8edbbc4f98c, mid: 0xb390000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x975704e400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7ed59c5c80dd59a8, mid: 0x2b356fab18810bf5, lo: 0x65c6296518710766 },
  U192 { hi: 0x32741acd5beac620, mid: 0x42fd59718a59461c, lo: 0x41d99465899dca0c },
  U192 { hi: 0xe9b960bf565c6296, mid: 0x5187107665196267, lo: 0x72832aa49ae2efd5 },
  U192 { hi: 0xd957dc61c41d9946, mid: 0x5899dca0caa926b8, lo: 0xbbf55b193644cd83 },
  U192 { hi: 0x5cdd6e26772832aa, mid: 0x49ae2efd56c64d91, lo: 0x3360df2e8b88b16b },
  U192 { hi: 0x0ec0ca6b8bbf55b1, mid: 0x93644cd837cba2e2, lo: 0x2c5acbd726ad9e2d },
  U192 { hi: 0x6d364cd913360df2, mid: 0xe8b88b16b2f5c9ab, lo: 0x678b6c8f2533e88b },
  U192 { hi: 0x6d9cea2e22c5acbd, mid: 0x726ad9e2db23c94c, lo: 0xfa22f09515c5c021 },
  U192 { hi: 0x0357249ab678b6c8, mid: 0xf2533e88bc254571, lo: 0x700862a098a080c0 },
  U192 { hi: 0x68ac1494cfa22f09, mid: 0x515c5c0218a82628, lo: 0x20300be751fb0288 },
  U192 { hi: 0x94150c571700862a, mid: 0x098a080c02f9d47e, lo: 0xc0a23c8d7a427801 },
  U192 { hi: 0x5703fa62820300be, mid: 0x751fb0288f235e90, lo: 0x9e0041389e055f1d },
  U192 { hi: 0xdd97dd47ec0a23c8, mid: 0xd7a42780104e2781, lo: 0x57c779d27d000000 },
  U192 { hi: 0xeacd1de909e00413, mid: 0x89e055f1de749f40, lo: 0x0000000000000000 },
  U192 { hi: 0x1bad0278157c779d, mid: 0x27d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x91c081f400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x81fa64c3402cef00, mid: 0x7ce2d7be5c49c1c3, lo: 0x86c80e42fe1c18b5 },
  U192 { hi: 0x5382f738b5ef9712, mid: 0x7070e1b20390bf87, lo: 0x062d7222897c2e2c },
  U192 { hi: 0x16464c1c386c80e4, mid: 0x2fe1c18b5c88a25f, lo: 0x0b8b2eae00c3ce6d },
  U192 { hi: 0x82973bf87062d722, mid: 0x2897c2e2cbab8030, lo: 0xf39b4732c99c80d8 },
  U192 { hi: 0xb74aba25f0b8b2ea, mid: 0xe00c3ce6d1ccb267, lo: 0x203621959c2531b4 },
  U192 { hi: 0x481fe8030f39b473, mid: 0x2c99c80d88656709, lo: 0x4c6d17863557309e },
  U192 { hi: 0x907aeb2672036219, mid: 0x59c2531b45e18d55, lo: 0xcc27ac259687ad4f },
  U192 { hi: 0x40f9be7094c6d178, mid: 0x63557309eb0965a1, lo: 0xeb53c4a7b5ac59eb },
  U192 { hi: 0x893860d55cc27ac2, mid: 0x59687ad4f129ed6b, lo: 0x167acdc3543216c4 },
  U192 { hi: 0x88887e5a1eb53c4a, mid: 0x7b5ac59eb370d50c, lo: 0x85b13858a2931a18 },
  U192 { hi: 0x81590ed6b167acdc, mid: 0x3543216c4e1628a4, lo: 0xc68608400e6fb6f7 },
  U192 { hi: 0x47128d50c85b1385, mid: 0x8a2931a18210039b, lo: 0xedbdf87c6bacac63 },
  U192 { hi: 0x9d626a8a4c686084, mid: 0x00e6fb6f7e1f1aeb, lo: 0x2b18c72451000000 },
  U192 { hi: 0xb0241039bedbdf87, mid: 0xc6bacac631c91440, lo: 0x0000000000000000 },
  U192 { hi: 0x499591aeb2b18c72, mid: 0x4510000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x3a35294400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8df08083602bd4e5, mid: 0x5cd3025c6c6949bb, lo: 0xfdf00f198d7708f5 },
  U192 { hi: 0xd737df34c0971b1a, mid: 0x526eff7c03c6635d, lo: 0xc23d42c9ea093003 },
  U192 { hi: 0x7a7e9c9bbfdf00f1, mid: 0x98d7708f50b27a82, lo: 0x4c00d7717bea141e },
  U192 { hi: 0x76543e35dc23d42c, mid: 0x9ea0930035dc5efa, lo: 0x85079936767370ca },
  U192 { hi: 0x40057fa824c00d77, mid: 0x17bea141e64d9d9c, lo: 0xdc32be4704e8b453 },
  U192 { hi: 0x005b2defa8507993, mid: 0x6767370caf91c13a, lo: 0x2d14cb8a5f4f430c },
  U192 { hi: 0x5de1f1d9cdc32be4, mid: 0x704e8b4532e297d3, lo: 0xd0c311bdab44ce19 },
  U192 { hi: 0xbfeb8c13a2d14cb8, mid: 0xa5f4f430c46f6ad1, lo: 0x3386772be0a61164 },
  U192 { hi: 0x18d6b17d3d0c311b, mid: 0xdab44ce19dcaf829, lo: 0x84592228e84c2c52 },
  U192 { hi: 0xbd4e26ad13386772, mid: 0xbe0a6116488a3a13, lo: 0x0b149fd1e4aa5af8 },
  U192 { hi: 0xcbceb78298459222, mid: 0x8e84c2c527f4792a, lo: 0x96be2f7ce1ac481b },
  U192 { hi: 0x9e6a7ba130b149fd, mid: 0x1e4aa5af8bdf386b, lo: 0x1206dddf48659d6f },
  U192 { hi: 0x4bb46792a96be2f7, mid: 0xce1ac481b777d219, lo: 0x675bd330f5000000 },
  U192 { hi: 0x06b8f386b1206ddd, mid: 0xf48659d6f4cc3d40, lo: 0x0000000000000000 },
  U192 { hi: 0x3223cd219675bd33, mid: 0x0f50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x25b7f3d400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0f4b4ccf28c22db9, mid: 0xdc9c39346fe165b6, lo: 0x21b271d925e5061a },
  U192 { hi: 0xd6c1e7270e4d1bf8, mid: 0x596d886c9c764979, lo: 0x41868d1d217442d7 },
  U192 { hi: 0x8957465b621b271d, mid: 0x925e5061a347485d, lo: 0x10b5e9849ce7b36d },
  U192 { hi: 0xb9158497941868d1, mid: 0xd217442d7a612739, lo: 0xecdb7a6af3dc41bd },
  U192 { hi: 0xe430d485d10b5e98, mid: 0x49ce7b36de9abcf7, lo: 0x106f7f4fb5a1fb7b },
  U192 { hi: 0xb0e952739ecdb7a6, mid: 0xaf3dc41bdfd3ed68, lo: 0x7edee7e4ab5a529d },
  U192 { hi: 0x372873cf7106f7f4, mid: 0xfb5a1fb7b9f92ad6, lo: 0x94a748c6041e05ce },
  U192 { hi: 0x797ec6d687edee7e, mid: 0x4ab5a529d2318107, lo: 0x81739a0495d5d89e },
  U192 { hi: 0x2c61caad694a748c, mid: 0x6041e05ce6812575, lo: 0x76278cc9aae3f794 },
  U192 { hi: 0xc6f66810781739a0, mid: 0x495d5d89e3326ab8, lo: 0xfde50937f03c98d5 },
  U192 { hi: 0xdfd1ca57576278cc, mid: 0x9aae3f79424dfc0f, lo: 0x26354d8029d2fab2 },
  U192 { hi: 0x6c2c06ab8fde5093, mid: 0x7f03c98d53600a74, lo: 0xbeac8993c4c4ef91 },
  U192 { hi: 0xe1b09fc0f26354d8, mid: 0x029d2fab2264f131, lo: 0x3be44781a9000000 },
  U192 { hi: 0x691650a74beac899, mid: 0x3c4c4ef911e06a40, lo: 0x0000000000000000 },
  U192 { hi: 0x98ebf71313be4478, mid: 0x1a90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x721646a400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8f53675dc147ddaf, mid: 0x9e623bd02801cb0e, lo: 0x162b18f60a36558b },
  U192 { hi: 0xd529b7988ef40a00, mid: 0x72c3858ac63d828d, lo: 0x9562ca73ded2df28 },
  U192 { hi: 0xbd73ccb0e162b18f, mid: 0x60a36558b29cf7b4, lo: 0xb7ca1936c58c46f2 },
  U192 { hi: 0x88daf828d9562ca7, mid: 0x3ded2df2864db163, lo: 0x11bc916d0910c3de },
  U192 { hi: 0x86c99f7b4b7ca193, mid: 0x6c58c46f245b4244, lo: 0x30f7a23edc4b4a2c },
  U192 { hi: 0x49108b16311bc916, mid: 0xd0910c3de88fb712, lo: 0xd28b03aa4a9766d2 },
  U192 { hi: 0x718e6c24430f7a23, mid: 0xedc4b4a2c0ea92a5, lo: 0xd9b4bed252e05dd9 },
  U192 { hi: 0xcbc9e3712d28b03a, mid: 0xa4a9766d2fb494b8, lo: 0x17766904e5c0f0c1 },
  U192 { hi: 0x4fcad92a5d9b4bed, mid: 0x252e05dd9a413970, lo: 0x3c30653c04fa7c52 },
  U192 { hi: 0x01ead14b81776690, mid: 0x4e5c0f0c194f013e, lo: 0x9f14a54f9e72266f },
  U192 { hi: 0x45c5c39703c30653, mid: 0xc04fa7c52953e79c, lo: 0x899bf1f4d92be7eb },
  U192 { hi: 0xc6c95013e9f14a54, mid: 0xf9e72266fc7d364a, lo: 0xf9fae62d78fa200c },
  U192 { hi: 0xe7140679c899bf1f, mid: 0x4d92be7eb98b5e3e, lo: 0x88032f7cad000000 },
  U192 { hi: 0x1379d364af9fae62, mid: 0xd78fa200cbdf2b40, lo: 0x0000000000000000 },
  U192 { hi: 0xd2d64de3e88032f7, mid: 0xcad0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc5e7f2b400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe2605b4ef4574e39, mid: 0xf9cc457741d9ceac, lo: 0xfb38e7090d78d084 },
  U192 { hi: 0x8bcd0673115dd076, mid: 0x73ab3ece39c2435e, lo: 0x34212fb14e99e4ce },
  U192 { hi: 0x04c164eacfb38e70, mid: 0x90d78d084bec53a6, lo: 0x7933b72d30abfef9 },
  U192 { hi: 0xdef83c35e34212fb, mid: 0x14e99e4cedcb4c2a, lo: 0xffbe4dbc9b173449 },
  U192 { hi: 0x5bfd8d3a67933b72, mid: 0xd30abfef936f26c5, lo: 0xcd12431150f8fbc4 },
  U192 { hi: 0x7b6e44c2affbe4db, mid: 0xc9b1734490c4543e, lo: 0x3ef118c2ff53e579 },
  U192 { hi: 0x66951a6c5cd12431, mid: 0x150f8fbc4630bfd4, lo: 0xf95e61c56bd7dfd6 },
  U192 { hi: 0x22bbfd43e3ef118c, mid: 0x2ff53e5798715af5, lo: 0xf7f5910aa1bc162b },
  U192 { hi: 0x2697a3fd4f95e61c, mid: 0x56bd7dfd6442a86f, lo: 0x058aed39467a5010 },
  U192 { hi: 0x6afcc5af5f7f5910, mid: 0xaa1bc162bb4e519e, lo: 0x9404217b1cba75d7 },
  U192 { hi: 0x02517a86f058aed3, mid: 0x9467a501085ec72e, lo: 0x9d75ee26a7ca5da0 },
  U192 { hi: 0xc0fdcd19e9404217, mid: 0xb1cba75d7b89a9f2, lo: 0x97682bb941000000 },
  U192 { hi: 0x6520dc72e9d75ee2, mid: 0x6a7ca5da0aee5040, lo: 0x0000000000000000 },
  U192 { hi: 0xaf8b2a9f297682bb, mid: 0x9410000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x508f350400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x629935b42ca7960b, mid: 0xffba5d74cf0784dd, lo: 0xda7bed0baeae2d7a },
  U192 { hi: 0xc035a7ee975d33c1, mid: 0xe137769efb42ebab, lo: 0x8b5eb4542a5fecd3 },
  U192 { hi: 0x928b804ddda7bed0, mid: 0xbaeae2d7ad150a97, lo: 0xfb34f849d14462c9 },
  U192 { hi: 0x7d7b8ebab8b5eb45, mid: 0x42a5fecd3e127451, lo: 0x18b2453bb14c837d },
  U192 { hi: 0x9bcf90a97fb34f84, mid: 0x9d14462c914eec53, lo: 0x20df7fe0d916d027 },
  U192 { hi: 0x8ddfb745118b2453, mid: 0xbb14c837dff83645, lo: 0xb409d7e5e9a02793 },
  U192 { hi: 0x48383ec5320df7fe, mid: 0x0d916d0275f97a68, lo: 0x09e4e1b3c5af9cf0 },
  U192 { hi: 0x9cea43645b409d7e, mid: 0x5e9a0279386cf16b, lo: 0xe73c0f03efe93d0d },
  U192 { hi: 0x76e56fa6809e4e1b, mid: 0x3c5af9cf03c0fbfa, lo: 0x4f4370e3d23dfd8c },
  U192 { hi: 0xa96d7f16be73c0f0, mid: 0x3efe93d0dc38f48f, lo: 0x7f630cb2ff5e2673 },
  U192 { hi: 0x4b5047bfa4f4370e, mid: 0x3d23dfd8c32cbfd7, lo: 0x899ceb89db046c63 },
  U192 { hi: 0x98072f48f7f630cb, mid: 0x2ff5e2673ae276c1, lo: 0x1b18f623a5000000 },
  U192 { hi: 0x849643fd7899ceb8, mid: 0x9db046c63d88e940, lo: 0x0000000000000000 },
  U192 { hi: 0x4e222f6c11b18f62, mid: 0x3a50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x957a2e9400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa9fc96d3d0a1c6a0, mid: 0xb798dcb8c07ed386, lo: 0x4a09aa388c0d0135 },
  U192 { hi: 0xec6455e6372e301f, mid: 0xb4e192826a8e2303, lo: 0x404d58015c7e9c57 },
  U192 { hi: 0x0910953864a09aa3, mid: 0x88c0d0135600571f, lo: 0xa715c67283dd5e24 },
  U192 { hi: 0xc88d1a303404d580, mid: 0x15c7e9c5719ca0f7, lo: 0x578933321dc1b834 },
  U192 { hi: 0x13bb7571fa715c67, mid: 0x283dd5e24ccc8770, lo: 0x6e0d19227f257b43 },
  U192 { hi: 0xd8a82a0f75789333, mid: 0x21dc1b8346489fc9, lo: 0x5ed0c0eee797059d },
  U192 { hi: 0xc9c5407706e0d192, mid: 0x27f257b4303bb9e5, lo: 0xc167661f662c18a9 },
  U192 { hi: 0x651709fc95ed0c0e, mid: 0xee797059d987d98b, lo: 0x062a411757784343 },
  U192 { hi: 0xe3ffeb9e5c167661, mid: 0xf662c18a9045d5de, lo: 0x10d0ca434f600e19 },
  U192 { hi: 0xd3439598b062a411, mid: 0x757784343290d3d8, lo: 0x038646c7800a8890 },
  U192 { hi: 0xe6ed355de10d0ca4, mid: 0x34f600e191b1e002, lo: 0xa22421463ada3ff5 },
  U192 { hi: 0xd91c653d8038646c, mid: 0x7800a88908518eb6, lo: 0x8ffd583119000000 },
  U192 { hi: 0x76ea36002a224214, mid: 0x63ada3ff560c4640, lo: 0x0000000000000000 },
  U192 { hi: 0xdd3278eb68ffd583, mid: 0x1190000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc40b1c6400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xcb78f1f65c16dcbe, mid: 0xd8fcd56777a2605d, lo: 0x3b874deece251891 },
  U192 { hi: 0xafcfee3f3559dde8, mid: 0x98174ee1d37bb389, lo: 0x462449f2970359e7 },
  U192 { hi: 0x9b939e05d3b874de, mid: 0xece25189127ca5c0, lo: 0xd679eed9f4e4cf36 },
  U192 { hi: 0x41375b389462449f, mid: 0x2970359e7bb67d39, lo: 0x33cdb38bbbdf04cf },
  U192 { hi: 0xa247ca5c0d679eed, mid: 0x9f4e4cf36ce2eef7, lo: 0xc133f1ac2415b7ae },
  U192 { hi: 0x3d677fd3933cdb38, mid: 0xbbbdf04cfc6b0905, lo: 0x6deba9d0f0eeb084 },
  U192 { hi: 0x0ddb46ef7c133f1a, mid: 0xc2415b7aea743c3b, lo: 0xac2102336a4a91c1 },
  U192 { hi: 0x3b35089056deba9d, mid: 0x0f0eeb08408cda92, lo: 0xa47047e06eeaf7de },
  U192 { hi: 0x6bd7abc3bac21023, mid: 0x36a4a91c11f81bba, lo: 0xbdf7b0ffd507bd04 },
  U192 { hi: 0xa6c975a92a47047e, mid: 0x06eeaf7dec3ff541, lo: 0xef412f6f6be2af6c },
  U192 { hi: 0x9ff0c9bbabdf7b0f, mid: 0xfd507bd04bdbdaf8, lo: 0xabdb088f3c1eb08b },
  U192 { hi: 0x9c2bd7541ef412f6, mid: 0xf6be2af6c223cf07, lo: 0xac22f163dd000000 },
  U192 { hi: 0xb2d545af8abdb088, mid: 0xf3c1eb08bc58f740, lo: 0x0000000000000000 },
  U192 { hi: 0x1b67c4f07ac22f16, mid: 0x3dd0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x82d9cf7400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x3a7b7c87a5687fb2, mid: 0x3f5c9a0424ca6bc7, lo: 0xa9d7547ed1c0700e },
  U192 { hi: 0xba2c1fd726810932, mid: 0x9af1ea75d51fb470, lo: 0x1c038b0472914442 },
  U192 { hi: 0xb37e06bc7a9d7547, mid: 0xed1c0700e2c11ca4, lo: 0x511083045169ff0c },
  U192 { hi: 0x5ffe634701c038b0, mid: 0x4729144420c1145a, lo: 0x7fc303d64160ca15 },
  U192 { hi: 0x465229ca45110830, mid: 0x45169ff0c0f59058, lo: 0x328548456f714686 },
  U192 { hi: 0xe93f3145a7fc303d, mid: 0x64160ca152115bdc, lo: 0x51a19b68307a5e70 },
  U192 { hi: 0xceb1910583285484, mid: 0x56f7146866da0c1e, lo: 0x979c14d92903b91e },
  U192 { hi: 0x10cda5bdc51a19b6, mid: 0x8307a5e705364a40, lo: 0xee47a4fbff6d61c3 },
  U192 { hi: 0x703160c1e979c14d, mid: 0x92903b91e93effdb, lo: 0x5870d466a7f3dd4c },
  U192 { hi: 0xa8b47ca40ee47a4f, mid: 0xbff6d61c3519a9fc, lo: 0xf7532907f628adfb },
  U192 { hi: 0x33a66ffdb5870d46, mid: 0x6a7f3dd4ca41fd8a, lo: 0x2b7ee3214b50f598 },
  U192 { hi: 0xda68c29fcf753290, mid: 0x7f628adfb8c852d4, lo: 0x3d663d5f31000000 },
  U192 { hi: 0xa97287d8a2b7ee32, mid: 0x14b50f598f57cc40, lo: 0x0000000000000000 },
  U192 { hi: 0x93346d2d43d663d5, mid: 0xf310000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xde1ed4c400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe9a9be559001b472, mid: 0x698b00bee9b32310, lo: 0xa33962f442742fad },
  U192 { hi: 0xc8c17a62c02fba6c, mid: 0xc8c428ce58bd109d, lo: 0x0beb5ee7e46c0521 },
  U192 { hi: 0x61ac5a310a33962f, mid: 0x442742fad7b9f91b, lo: 0x01487dd93167654a },
  U192 { hi: 0x35598109d0beb5ee, mid: 0x7e46c0521f764c59, lo: 0xd952bd77aa64e408 },
  U192 { hi: 0x25e94f91b01487dd, mid: 0x93167654af5dea99, lo: 0x39023cc9d0a0a77f },
  U192 { hi: 0x1e71acc59d952bd7, mid: 0x7aa64e408f327428, lo: 0x29dfc4f1222c47b7 },
  U192 { hi: 0xab1a8ea9939023cc, mid: 0x9d0a0a77f13c488b, lo: 0x11edd25a709138ec },
  U192 { hi: 0x16930742829dfc4f, mid: 0x1222c47b74969c24, lo: 0x4e3b079e9d1b4645 },
  U192 { hi: 0x8a4ee488b11edd25, mid: 0xa709138ec1e7a746, lo: 0xd19172de66ddfedb },
  U192 { hi: 0xee26e1c244e3b079, mid: 0xe9d1b4645cb799b7, lo: 0x7fb6cd9e5df0310f },
  U192 { hi: 0x4e3582746d19172d, mid: 0xe66ddfedb367977c, lo: 0x0c43fdcb55000000 },
  U192 { hi: 0xe9d6019b77fb6cd9, mid: 0xe5df0310ff72d540, lo: 0x0000000000000000 },
  U192 { hi: 0x9a47f977c0c43fdc, mid: 0xb550000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8e06d55400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xbcc654449f21c467, mid: 0x0910a5c19fa3a5c5, lo: 0x8f8d2abea8abbc84 },
  U192 { hi: 0x4719ca44297067e8, mid: 0xe97163e34aafaa2a, lo: 0xef2103a433933fec },
  U192 { hi: 0x41504a5c58f8d2ab, mid: 0xea8abbc840e90ce4, lo: 0xcffb2bf6c365d7af },
  U192 { hi: 0x1ef1eaa2aef2103a, mid: 0x433933fecafdb0d9, lo: 0x75ebe116d96cadb0 },
  U192 { hi: 0xe19398ce4cffb2bf, mid: 0x6c365d7af845b65b, lo: 0x2b6c39e2eee8153a },
  U192 { hi: 0x8e36fb0d975ebe11, mid: 0x6d96cadb0e78bbba, lo: 0x054eaa8410a96214 },
  U192 { hi: 0xc68e2365b2b6c39e, mid: 0x2eee8153aaa1042a, lo: 0x58852a46269ffd6f },
  U192 { hi: 0xd85bebbba054eaa8, mid: 0x410a96214a9189a7, lo: 0xff5bd179c8f0aa40 },
  U192 { hi: 0x871f5042a58852a4, mid: 0x6269ffd6f45e723c, lo: 0x2a901144398042de },
  U192 { hi: 0x346b109a7ff5bd17, mid: 0x9c8f0aa404510e60, lo: 0x10b794e9f5dc245e },
  U192 { hi: 0x49288f23c2a90114, mid: 0x4398042de53a7d77, lo: 0x0917954989000000 },
  U192 { hi: 0x2fe6b8e6010b794e, mid: 0x9f5dc245e5526240, lo: 0x0000000000000000 },
  U192 { hi: 0x2bbe4fd770917954, mid: 0x9890000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9eca5e2400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7f32a954124505cb, mid: 0xaf3c87c3ceb0dde3, lo: 0x8585a5be6cacc62b },
  U192 { hi: 0x438a2bcf21f0f3ac, mid: 0x3778e161696f9b2b, lo: 0x318ac4c38118ad04 },
  U192 { hi: 0x465af5de38585a5b, mid: 0xe6cacc62b130e046, lo: 0x2b41155d13c7a396 },
  U192 { hi: 0x4e8b21b2b318ac4c, mid: 0x38118ad0455744f1, lo: 0xe8e5bb6f7c016b0a },
  U192 { hi: 0x18043e0462b41155, mid: 0xd13c7a396edbdf00, lo: 0x5ac2a02282359e2b },
  U192 { hi: 0x5afd3c4f1e8e5bb6, mid: 0xf7c016b0a808a08d, lo: 0x678aeaa252b56558 },
  U192 { hi: 0x653f05f005ac2a02, mid: 0x282359e2baa894ad, lo: 0x59563abb10ac030f },
  U192 { hi: 0x6f3fe208d678aeaa, mid: 0x252b56558eaec42b, lo: 0x00c3ee3848907593 },
  U192 { hi: 0x07c2394ad59563ab, mid: 0xb10ac030fb8e1224, lo: 0x1d64f57df855e4b7 },
  U192 { hi: 0x11fc7442b00c3ee3, mid: 0x848907593d5f7e15, lo: 0x792df41f67a988b9 },
  U192 { hi: 0xd4c7812241d64f57, mid: 0xdf855e4b7d07d9ea, lo: 0x622e4db80d000000 },
  U192 { hi: 0x1ac6a7e15792df41, mid: 0xf67a988b936e0340, lo: 0x0000000000000000 },
  U192 { hi: 0xe9b25d9ea622e4db, mid: 0x80d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb701403400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x2796ea9e22f23e8a, mid: 0xfcc7c6cd503cdcd3, lo: 0x7a0630b9adbbd5d7 },
  U192 { hi: 0x71853731f1b3540f, mid: 0x3734de818c2e6b6e, lo: 0xf575cf4e4ac66950 },
  U192 { hi: 0xaee1a5cd37a0630b, mid: 0x9adbbd5d73d392b1, lo: 0x9a54342d33dc5571 },
  U192 { hi: 0x329b0eb6ef575cf4, mid: 0xe4ac66950d0b4cf7, lo: 0x155c45722f7733b6 },
  U192 { hi: 0xb353112b19a54342, mid: 0xd33dc557115c8bdd, lo: 0xcced8ff539c2b057 },
  U192 { hi: 0x806b84cf7155c457, mid: 0x22f7733b63fd4e70, lo: 0xac15ecd25ecbccf7 },
  U192 { hi: 0xb0f430bddcced8ff, mid: 0x539c2b057b3497b2, lo: 0xf33ddba3ab18bdc1 },
  U192 { hi: 0x3ca22ce70ac15ecd, mid: 0x25ecbccf76e8eac6, lo: 0x2f7046ada0e502bf },
  U192 { hi: 0x2683a17b2f33ddba, mid: 0x3ab18bdc11ab6839, lo: 0x40afdc4aaadd0cb4 },
  U192 { hi: 0x7ef906ac62f7046a, mid: 0xda0e502bf712aab7, lo: 0x432d349b255a796a },
  U192 { hi: 0x21ca5683940afdc4, mid: 0xaaadd0cb4d26c956, lo: 0x9e5a850621000000 },
  U192 { hi: 0xead97aab7432d349, mid: 0xb255a796a1418840, lo: 0x0000000000000000 },
  U192 { hi: 0xa77b149569e5a850, mid: 0x6210000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x060db88400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x4e039fd0db669be3, mid: 0x3a45ef2668cd4ad9, lo: 0x9e7e97a82ebaa96b },
  U192 { hi: 0xd66e36917bc99a33, mid: 0x52b6679fa5ea0bae, lo: 0xaa5af43e50c4e87e },
  U192 { hi: 0xace6ecad99e7e97a, mid: 0x82ebaa96bd0f9431, lo: 0x3a1fa8529428bbcc },
  U192 { hi: 0xc81c40baeaa5af43, mid: 0xe50c4e87ea14a50a, lo: 0x2ef336900a159322 },
  U192 { hi: 0x22d1e14313a1fa85, mid: 0x29428bbccda40285, lo: 0x64c8b60eaaf51c7e },
  U192 { hi: 0x8f5bda50a2ef3369, mid: 0x00a159322d83aabd, lo: 0x471fa1fed1918750 },
  U192 { hi: 0x161a5828564c8b60, mid: 0xeaaf51c7e87fb464, lo: 0x61d41962cf968640 },
  U192 { hi: 0x921b2aabd471fa1f, mid: 0xed1918750658b3e5, lo: 0xa19026492d3d34fc },
  U192 { hi: 0x2c249346461d4196, mid: 0x2cf9686409924b4f, lo: 0x4d3f0f52dcdea624 },
  U192 { hi: 0xc6e1e33e5a190264, mid: 0x92d3d34fc3d4b737, lo: 0xa989395ef0f01fb8 },
  U192 { hi: 0xc221b4b4f4d3f0f5, mid: 0x2dcdea624e57bc3c, lo: 0x07ee20d805000000 },
  U192 { hi: 0x4f9083737a989395, mid: 0xef0f01fb88360140, lo: 0x0000000000000000 },
  U192 { hi: 0x889a73c3c07ee20d, mid: 0x8050000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0f5de81400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe8ee2fb7630e103c, mid: 0x1572fb553895c01e, lo: 0x1570cdeb1a86da1d },
  U192 { hi: 0xc3c01d5cbed54e25, mid: 0x7007855c337ac6a1, lo: 0xb6876991e2356689 },
  U192 { hi: 0x8b6b4c01e1570cde, mid: 0xb1a86da1da64788d, lo: 0x59a251d658a9dbdc },
  U192 { hi: 0x15c28c6a1b687699, mid: 0x1e2356689475962a, lo: 0x76f70358ec48728b },
  U192 { hi: 0x259c6f88d59a251d, mid: 0x658a9dbdc0d63b12, lo: 0x1ca2f073f4daf846 },
  U192 { hi: 0x44fdf162a76f7035, mid: 0x8ec48728bc1cfd36, lo: 0xbe11b4d68be144ce },
  U192 { hi: 0x04b223b121ca2f07, mid: 0x3f4daf846d35a2f8, lo: 0x5133a844a5360b47 },
  U192 { hi: 0x4f9bb7d36be11b4d, mid: 0x68be144cea11294d, lo: 0x82d1d407dd26d625 },
  U192 { hi: 0x6196822f85133a84, mid: 0x4a5360b47501f749, lo: 0xb5896bc841111757 },
  U192 { hi: 0x60aa6a94d82d1d40, mid: 0x7dd26d625af21044, lo: 0x45d5f498f00a26e2 },
  U192 { hi: 0x8c467f749b5896bc, mid: 0x841111757d263c02, lo: 0x89b8823af9000000 },
  U192 { hi: 0x66d9b904445d5f49, mid: 0x8f00a26e208ebe40, lo: 0x0000000000000000 },
  U192 { hi: 0x70320bc0289b8823, mid: 0xaf90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x02540be400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9fcf0091f3f98055, mid: 0x5434478220d18a4e, lo: 0x687d18bf9fba776b },
  U192 { hi: 0x776d9d0d11e08834, mid: 0x62939a1f462fe7ee, lo: 0x9ddaf9cee80078d5 },
  U192 { hi: 0x838fd0a4e687d18b, mid: 0xf9fba776be73ba00, lo: 0x1e354b8036240fe1 },
  U192 { hi: 0xe08bbe7ee9ddaf9c, mid: 0xee80078d52e00d89, lo: 0x03f875a1133a9c67 },
  U192 { hi: 0x294983a001e354b8, mid: 0x036240fe1d6844ce, lo: 0xa719ff2d5f61db9c },
  U192 { hi: 0x6e0720d8903f875a, mid: 0x1133a9c67fcb57d8, lo: 0x76e71280bc6ea1dc },
  U192 { hi: 0xe93a9c4cea719ff2, mid: 0xd5f61db9c4a02f1b, lo: 0xa87700989c1380d9 },
  U192 { hi: 0x4122fd7d876e7128, mid: 0x0bc6ea1dc0262704, lo: 0xe036410c00625e6c },
  U192 { hi: 0x4ceeb2f1ba877009, mid: 0x89c1380d90430018, lo: 0x979b29b53cbf5b0b },
  U192 { hi: 0xde30ea704e036410, mid: 0xc00625e6ca6d4f2f, lo: 0xd6c2cfa93d000000 },
  U192 { hi: 0x1e4c90018979b29b, mid: 0x53cbf5b0b3ea4f40, lo: 0x0000000000000000 },
  U192 { hi: 0x6fc6f4f2fd6c2cfa, mid: 0x93d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x73f31cf400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x10fdbd3796de8004, mid: 0x2fa1225b694e30c7, lo: 0x33e14ea1dd6bb77e },
  U192 { hi: 0x96887be84896da53, mid: 0x8c31ccf853a8775a, lo: 0xeddf86779918980a },
  U192 { hi: 0x13326b0c733e14ea, mid: 0x1dd6bb77e19de646, lo: 0x26029706098769de },
  U192 { hi: 0xc196af75aeddf867, mid: 0x79918980a5c18261, lo: 0xda7792963d269af3 },
  U192 { hi: 0x6c08c66462602970, mid: 0x6098769de4a58f49, lo: 0xa6bcd05ddf2c2e42 },
  U192 { hi: 0x193618261da77929, mid: 0x63d269af341777cb, lo: 0x0b90bc37452f4edc },
  U192 { hi: 0x8029d8f49a6bcd05, mid: 0xddf2c2e42f0dd14b, lo: 0xd3b71f66ca751769 },
  U192 { hi: 0xa3a0077cb0b90bc3, mid: 0x7452f4edc7d9b29d, lo: 0x45da512f9ebb2895 },
  U192 { hi: 0x57bedd14bd3b71f6, mid: 0x6ca75176944be7ae, lo: 0xca2577d383ad0549 },
  U192 { hi: 0x48adbb29d45da512, mid: 0xf9ebb2895df4e0eb, lo: 0x41525c9e11000000 },
  U192 { hi: 0x002dce7aeca2577d, mid: 0x383ad05497278440, lo: 0x0000000000000000 },
  U192 { hi: 0x937f3e0eb41525c9, mid: 0xe110000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x939d584400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9b7ba9f332c5410b, mid: 0xb770af3faf79a3a8, lo: 0xcc31b95f66b84da8 },
  U192 { hi: 0x7472c5dc2bcfebde, mid: 0x68ea330c6e57d9ae, lo: 0x136a2a9151a0b691 },
  U192 { hi: 0x5adb3a3a8cc31b95, mid: 0xf66b84da8aa45468, lo: 0x2da47f5a30623250 },
  U192 { hi: 0xde50fd9ae136a2a9, mid: 0x151a0b691fd68c18, lo: 0x8c94119d97de57ee },
  U192 { hi: 0xbe800d4682da47f5, mid: 0xa3062325046765f7, lo: 0x95fba8c0ab0f2455 },
  U192 { hi: 0x046ff0c188c94119, mid: 0xd97de57eea302ac3, lo: 0xc9155a911ccae826 },
  U192 { hi: 0x1c79be5f795fba8c, mid: 0x0ab0f24556a44732, lo: 0xba09a2f14ade5228 },
  U192 { hi: 0xdf21d2ac3c9155a9, mid: 0x11ccae8268bc52b7, lo: 0x948a2519185152ca },
  U192 { hi: 0x976d0c732ba09a2f, mid: 0x14ade52289464614, lo: 0x54b2917e19d0de44 },
  U192 { hi: 0x5e46cd2b7948a251, mid: 0x9185152ca45f8674, lo: 0x37910af9b5000000 },
  U192 { hi: 0xc11fcc61454b2917, mid: 0xe19d0de442be6d40, lo: 0x0000000000000000 },
  U192 { hi: 0xb4869067437910af, mid: 0x9b50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x07ea8ed400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x3a1d44f35b3cd348, mid: 0x7602046c2d2adebe, lo: 0x60de2ac5e901fdbd },
  U192 { hi: 0xaea49580811b0b4a, mid: 0xb7af98378ab17a40, lo: 0x7f6f68e79524a463 },
  U192 { hi: 0x426bb5ebe60de2ac, mid: 0x5e901fdbda39e549, lo: 0x2918f2736c201d81 },
  U192 { hi: 0xa70abfa407f6f68e, mid: 0x79524a463c9cdb08, lo: 0x076059f9ed2b40fc },
  U192 { hi: 0x9d385e5492918f27, mid: 0x36c201d8167e7b4a, lo: 0xd03f3db5babec58c },
  U192 { hi: 0x1687c5b08076059f, mid: 0x9ed2b40fcf6d6eaf, lo: 0xb163324b24524a77 },
  U192 { hi: 0xbdedb7b4ad03f3db, mid: 0x5babec58cc92c914, lo: 0x929dfd55e019b835 },
  U192 { hi: 0x4fa7d6eafb163324, mid: 0xb24524a77f557806, lo: 0x6e0d7c96184b90f9 },
  U192 { hi: 0x849dec914929dfd5, mid: 0x5e019b835f258612, lo: 0xe43e4e159f1d4133 },
  U192 { hi: 0x9a12978066e0d7c9, mid: 0x6184b90f938567c7, lo: 0x504ccb7569000000 },
  U192 { hi: 0x828878612e43e4e1, mid: 0x59f1d41332dd5a40, lo: 0x0000000000000000 },
  U192 { hi: 0x0c057e7c7504ccb7, mid: 0x5690000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xcb7e75a400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x938a29f6a365c050, mid: 0xac977cb461d94dd8, lo: 0xf852c0e5447580c6 },
  U192 { hi: 0xa3f8b325df2d1876, mid: 0x53763e14b039511d, lo: 0x6031baf2ce66a045 },
  U192 { hi: 0xb0794cdd8f852c0e, mid: 0x5447580c6ebcb399, lo: 0xa81154c2b7f50982 },
  U192 { hi: 0xe3b64511d6031baf, mid: 0x2ce66a045530adfd, lo: 0x4260806c91c32bd0 },
  U192 { hi: 0xbca8d3399a81154c, mid: 0x2b7f5098201b2470, lo: 0xcaf406d9d26877b0 },
  U192 { hi: 0xa98f22dfd4260806, mid: 0xc91c32bd01b6749a, lo: 0x1dec210da9b03bb4 },
  U192 { hi: 0xe5a652470caf406d, mid: 0x9d26877b08436a6c, lo: 0x0eed1a3fe0c5545c },
  U192 { hi: 0xce2b5749a1dec210, mid: 0xda9b03bb468ff831, lo: 0x5517193b8523263c },
  U192 { hi: 0x881f6ea6c0eed1a3, mid: 0xfe0c5545c64ee148, lo: 0xc98f2542968ce618 },
  U192 { hi: 0xdf906f8315517193, mid: 0xb8523263c950a5a3, lo: 0x39862f676d000000 },
  U192 { hi: 0x0b5036148c98f254, mid: 0x2968ce618bd9db40, lo: 0x0000000000000000 },
  U192 { hi: 0xc14d7a5a339862f6, mid: 0x76d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa81a8db400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5dd0d9c3eec8dbe9, mid: 0xa5b505c59ce56c40, lo: 0xf3d492b3c4af2714 },
  U192 { hi: 0x9100996d41716739, mid: 0x5b103cf524acf12b, lo: 0xc9c534e3e0040cd8 },
  U192 { hi: 0x971686c40f3d492b, mid: 0x3c4af2714d38f801, lo: 0x03361eaac2a909bf },
  U192 { hi: 0x601ce712bc9c534e, mid: 0x3e0040cd87aab0aa, lo: 0x426ff7433a0e8cb4 },
  U192 { hi: 0x55a96780103361ea, mid: 0xac2a909bfdd0ce83, lo: 0xa32d343cd5c6eb33 },
  U192 { hi: 0x43e03b0aa426ff74, mid: 0x33a0e8cb4d0f3571, lo: 0xbaccf88c40dfb43e },
  U192 { hi: 0xd9302ce83a32d343, mid: 0xcd5c6eb33e231037, lo: 0xed0fb31401597b6c },
  U192 { hi: 0xc63a03571baccf88, mid: 0xc40dfb43ecc50056, lo: 0x5edb13ca4aa61277 },
  U192 { hi: 0xdfe059037ed0fb31, mid: 0x401597b6c4f292a9, lo: 0x849ddf1701000000 },
  U192 { hi: 0xb534c80565edb13c, mid: 0xa4aa612777c5c040, lo: 0x0000000000000000 },
  U192 { hi: 0x461b012a9849ddf1, mid: 0x7010000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa9f7640400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x349ca544f6d0a261, mid: 0xfd6d4b97e18f57f6, lo: 0x0ab51d4448c20fe2 },
  U192 { hi: 0x2a85775b52e5f863, mid: 0xd5fd82ad47511230, lo: 0x83f8b8c014685103 },
  U192 { hi: 0xc9a3657f60ab51d4, mid: 0x448c20fe2e30051a, lo: 0x1440e466443b872b },
  U192 { hi: 0xd2cc2923083f8b8c, mid: 0x014685103919910e, lo: 0xe1caf6a97ee5fa3a },
  U192 { hi: 0xdf865851a1440e46, mid: 0x6443b872bdaa5fb9, lo: 0x7e8e8ab946b3f726 },
  U192 { hi: 0x5aa55110ee1caf6a, mid: 0x97ee5fa3a2ae51ac, lo: 0xfdc9b8a026b58b73 },
  U192 { hi: 0x923e7dfb97e8e8ab, mid: 0x946b3f726e2809ad, lo: 0x62dcd31c2b6864c9 },
  U192 { hi: 0x638c351acfdc9b8a, mid: 0x026b58b734c70ada, lo: 0x1932416687d80e26 },
  U192 { hi: 0x1e35909ad62dcd31, mid: 0xc2b6864c9059a1f6, lo: 0x03898ce065000000 },
  U192 { hi: 0x00a0e0ada1932416, mid: 0x687d80e263381940, lo: 0x0000000000000000 },
  U192 { hi: 0x22c2d21f603898ce, mid: 0x0650000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x77acc99400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9d0a437cd7723dfb, mid: 0x11dbffc8bddcf129, lo: 0x92a0782fe7fcab54 },
  U192 { hi: 0xdb3f6c76fff22f77, mid: 0x3c4a64a81e0bf9ff, lo: 0x2ad503f0c36f5056 },
  U192 { hi: 0xa3d71f12992a0782, mid: 0xfe7fcab540fc30db, lo: 0xd415bbbae6b23731 },
  U192 { hi: 0x21e16f9ff2ad503f, mid: 0x0c36f5056eeeb9ac, lo: 0x8dcc6b8a92b32940 },
  U192 { hi: 0x0980c30dbd415bbb, mid: 0xae6b23731ae2a4ac, lo: 0xca501b1a01524e49 },
  U192 { hi: 0x1fc5f39ac8dcc6b8, mid: 0xa92b329406c68054, lo: 0x939278bf725b0177 },
  U192 { hi: 0xb24d0a4acca501b1, mid: 0xa01524e49e2fdc96, lo: 0xc05dc3b323aa5f41 },
  U192 { hi: 0x982208054939278b, mid: 0xf725b01770ecc8ea, lo: 0x97d04bb535e601fe },
  U192 { hi: 0x12067dc96c05dc3b, mid: 0x323aa5f412ed4d79, lo: 0x807fb668d9000000 },
  U192 { hi: 0x14369c8ea97d04bb, mid: 0x535e601fed9a3640, lo: 0x0000000000000000 },
  U192 { hi: 0x3f41dcd79807fb66, mid: 0x8d90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x2f08236400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x67f0c0b881258747, mid: 0x315d2c4426ff0bfe, lo: 0xf6fb0f4b4467b1e1 },
  U192 { hi: 0x85100c574b1109bf, mid: 0xc2ffbdbec3d2d119, lo: 0xec787e195819604f },
  U192 { hi: 0xd2c808bfef6fb0f4, mid: 0xb4467b1e1f865606, lo: 0x5813dda9fb2349dc },
  U192 { hi: 0xe33c95119ec787e1, mid: 0x95819604f76a7ec8, lo: 0xd277037105042502 },
  U192 { hi: 0x5b01a56065813dda, mid: 0x9fb2349dc0dc4141, lo: 0x0940aaa44c88c4ab },
  U192 { hi: 0x6b6d1fec8d277037, mid: 0x105042502aa91322, lo: 0x312ae66a289097fe },
  U192 { hi: 0x444ffc1410940aaa, mid: 0x44c88c4ab99a8a24, lo: 0x25ffb3894ae11554 },
  U192 { hi: 0x009d89322312ae66, mid: 0xa289097fece252b8, lo: 0x455515b5ad368556 },
  U192 { hi: 0xac75d0a2425ffb38, mid: 0x94ae1155456d6b4d, lo: 0xa15582229d000000 },
  U192 { hi: 0x87d13d2b8455515b, mid: 0x5ad368556088a740, lo: 0x0000000000000000 },
  U192 { hi: 0x904ec6b4da155822, mid: 0x29d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x650c6a7400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x157aa9765432f92c, mid: 0x19ed7501fb1ce1cf, lo: 0x37d30e382cf4458c },
  U192 { hi: 0x815f1e7b5d407ec7, mid: 0x3873cdf4c38e0b3d, lo: 0x1163066bfd231264 },
  U192 { hi: 0x16581e1cf37d30e3, mid: 0x82cf4458c19aff48, lo: 0xc499052ab4feea0d },
  U192 { hi: 0x971018b3d1163066, mid: 0xbfd23126414aad3f, lo: 0xba836e137d930f16 },
  U192 { hi: 0xa03bcff48c499052, mid: 0xab4feea0db84df64, lo: 0xc3c58f99fee369da },
  U192 { hi: 0xec278ad3fba836e1, mid: 0x37d930f163e67fb8, lo: 0xda7682bf02a05cd1 },
  U192 { hi: 0x798b8df64c3c58f9, mid: 0x9fee369da0afc0a8, lo: 0x173441a0336fca22 },
  U192 { hi: 0x23a397fb8da7682b, mid: 0xf02a05cd10680cdb, lo: 0xf288ab8f1a077777 },
  U192 { hi: 0x12e3b40a8173441a, mid: 0x0336fca22ae3c681, lo: 0xddddd860f1000000 },
  U192 { hi: 0x9a13e0cdbf288ab8, mid: 0xf1a0777776183c40, lo: 0x0000000000000000 },
  U192 { hi: 0xc7de2c681ddddd86, mid: 0x0f10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x491bdbc400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc12ce8a6cc88f1ec, mid: 0x565769412bf54e3b, lo: 0xe271af4909e6bd62 },
  U192 { hi: 0xb62f2d95da504afd, mid: 0x538ef89c6bd24279, lo: 0xaf58bdaa0d8d34d5 },
  U192 { hi: 0x14eef4e3be271af4, mid: 0x909e6bd62f6a8363, lo: 0x4d3542e8039ed587 },
  U192 { hi: 0xed15dc279af58bda, mid: 0xa0d8d34d50ba00e7, lo: 0xb561d8a0a92f9c5f },
  U192 { hi: 0x5448603634d3542e, mid: 0x8039ed5876282a4b, lo: 0xe717d6a0f745bd44 },
  U192 { hi: 0xb1af380e7b561d8a, mid: 0x0a92f9c5f5a83dd1, lo: 0x6f51010eb5e6420c },
  U192 { hi: 0xede6a2a4be717d6a, mid: 0x0f745bd44043ad79, lo: 0x90833a25c822c71d },
  U192 { hi: 0x786eabdd16f51010, mid: 0xeb5e6420ce897208, lo: 0xb1c74c3c15000000 },
  U192 { hi: 0x17f3bad7990833a2, mid: 0x5c822c71d30f0540, lo: 0x0000000000000000 },
  U192 { hi: 0x83547f208b1c74c3, mid: 0xc150000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7039705400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x136aff1bc3877b48, mid: 0xfc27b1b3a43678d6, lo: 0x3b7dc3e221e6e89e },
  U192 { hi: 0xa674ef09ec6ce90d, mid: 0x9e358edf70f88879, lo: 0xba2789f06826c37e },
  U192 { hi: 0x91b8d78d63b7dc3e, mid: 0x221e6e89e27c1a09, lo: 0xb0df996dcefdd119 },
  U192 { hi: 0x7bd1e8879ba2789f, mid: 0x06826c37e65b73bf, lo: 0x7446494296ce4e0a },
  U192 { hi: 0x064f79a09b0df996, mid: 0xdcefdd119250a5b3, lo: 0x9382966ad7c79de3 },
  U192 { hi: 0x01af973bf7446494, mid: 0x296ce4e0a59ab5f1, lo: 0xe778cd8ca232be77 },
  U192 { hi: 0x4ec88a5b39382966, mid: 0xad7c79de3363288c, lo: 0xaf9dde1c5d7979ee },
  U192 { hi: 0x73252b5f1e778cd8, mid: 0xca232be77787175e, lo: 0x5e7b918549000000 },
  U192 { hi: 0x54b41a88caf9dde1, mid: 0xc5d7979ee4615240, lo: 0x0000000000000000 },
  U192 { hi: 0xd467a175e5e7b918, mid: 0x5490000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x09c7652400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd3d92fe09971a636, mid: 0x664f908b1885f768, lo: 0x5f183485a24aed2a },
  U192 { hi: 0xd1c58193e422c621, mid: 0x7dda17c60d216892, lo: 0xbb4abba44728de13 },
  U192 { hi: 0xe1137f7685f18348, mid: 0x5a24aed2aee911ca, lo: 0x3784e9d49a6dd3c1 },
  U192 { hi: 0x0fc96e892bb4abba, mid: 0x44728de13a75269b, lo: 0x74f04f678b0f3c4d },
  U192 { hi: 0x307fd11ca3784e9d, mid: 0x49a6dd3c13d9e2c3, lo: 0xcf13588edded60c4 },
  U192 { hi: 0xd798e269b74f04f6, mid: 0x78b0f3c4d623b77b, lo: 0x5831161e3413756f },
  U192 { hi: 0x4639762c3cf13588, mid: 0xedded60c45878d04, lo: 0xdd5beecdf78ed985 },
  U192 { hi: 0x647af377b5831161, mid: 0xe3413756fbb37de3, lo: 0xb6616a0acd000000 },
  U192 { hi: 0x4b8788d04dd5beec, mid: 0xdf78ed985a82b340, lo: 0x0000000000000000 },
  U192 { hi: 0x2b8707de3b6616a0, mid: 0xacd0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9933db3400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xeac3585c6019ba67, mid: 0x73e530b0facbf611, lo: 0xd9bf1e2be557f96a },
  U192 { hi: 0x2f04e4f94c2c3eb2, mid: 0xfd84766fc78af955, lo: 0xfe5aa46cf52f4f13 },
  U192 { hi: 0xde6a07611d9bf1e2, mid: 0xbe557f96a91b3d4b, lo: 0xd3c4fefbdcca447f },
  U192 { hi: 0xc2c85f955fe5aa46, mid: 0xcf52f4f13fbef732, lo: 0x911ffeeee510e2ed },
  U192 { hi: 0x2122e3d4bd3c4fef, mid: 0xbdcca447ffbbb944, lo: 0x38bb7bf89b626dff },
  U192 { hi: 0x47e95f732911ffee, mid: 0xee510e2edefe26d8, lo: 0x9b7fcfd26e600354 },
  U192 { hi: 0xb7f6c394438bb7bf, mid: 0x89b626dff3f49b98, lo: 0x00d531aeb3afe64a },
  U192 { hi: 0x6757ca6d89b7fcfd, mid: 0x26e600354c6baceb, lo: 0xf992b56be1000000 },
  U192 { hi: 0x183ff1b9800d531a, mid: 0xeb3afe64ad5af840, lo: 0x0000000000000000 },
  U192 { hi: 0xea7ccacebf992b56, mid: 0xbe10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5f75e78400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0ac10050a2238395, mid: 0xc57657c3268a0b0f, lo: 0x5e8908f02f823f17 },
  U192 { hi: 0x943b395d95f0c9a2, mid: 0x82c3d7a2423c0be0, lo: 0x8fc5e5af9340bdc1 },
  U192 { hi: 0xdbec08b0f5e8908f, mid: 0x02f823f1796be4d0, lo: 0x2f704c15d7270753 },
  U192 { hi: 0xe20178be08fc5e5a, mid: 0xf9340bdc130575c9, lo: 0xc1d4d4989a563d9e },
  U192 { hi: 0x722c4e4d02f704c1, mid: 0x5d72707535262695, lo: 0x8f6797a995d4f6bc },
  U192 { hi: 0xde05cf5c9c1d4d49, mid: 0x89a563d9e5ea6575, lo: 0x3daf0148cf26b6bf },
  U192 { hi: 0x6aaaca6958f6797a, mid: 0x995d4f6bc05233c9, lo: 0xadafdabdd649fd85 },
  U192 { hi: 0x485b465753daf014, mid: 0x8cf26b6bf6af7592, lo: 0x7f6173bcc5000000 },
  U192 { hi: 0x3365bb3c9adafdab, mid: 0xdd649fd85cef3140, lo: 0x0000000000000000 },
  U192 { hi: 0x53ac5f5927f6173b, mid: 0xcc50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xdffbab1400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x28b27744d0df8003, mid: 0xd85282db8fa3cc25, lo: 0x36e4e5856f610ad3 },
  U192 { hi: 0x1499d614a0b6e3e8, mid: 0xf3094db939615bd8, lo: 0x42b4e153f7b3f1fe },
  U192 { hi: 0x161f7cc2536e4e58, mid: 0x56f610ad3854fdec, lo: 0xfc7f8f90ee4eda1e },
  U192 { hi: 0xbbc77dbd842b4e15, mid: 0x3f7b3f1fe3e43b93, lo: 0xb6879c0399e67d49 },
  U192 { hi: 0xdb65bfdecfc7f8f9, mid: 0x0ee4eda1e700e679, lo: 0x9f5246fe6e4c8032 },
  U192 { hi: 0x47de63b93b6879c0, mid: 0x399e67d491bf9b93, lo: 0x200c97e0835d9e0c },
  U192 { hi: 0xbcfaee6799f5246f, mid: 0xe6e4c80325f820d7, lo: 0x6783243ab9000000 },
  U192 { hi: 0x607659b93200c97e, mid: 0x0835d9e0c90eae40, lo: 0x0000000000000000 },
  U192 { hi: 0xdafed20d76783243, mid: 0xab90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5bbc3ae400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd8a0a2bae2201717, mid: 0x3e36b833f6508f91, lo: 0xf43805d3e0eac140 },
  U192 { hi: 0xb5371f8dae0cfd94, mid: 0x23e47d0e0174f83a, lo: 0xb05032de3c941ed6 },
  U192 { hi: 0x8dd4f0f91f43805d, mid: 0x3e0eac140cb78f25, lo: 0x07b5b1f1df391f5f },
  U192 { hi: 0xab12ff83ab05032d, mid: 0xe3c941ed6c7c77ce, lo: 0x47d7dec57b8b2488 },
  U192 { hi: 0xea8e10f2507b5b1f, mid: 0x1df391f5f7b15ee2, lo: 0xc9223f5f4c8bbc16 },
  U192 { hi: 0x6ef8877ce47d7dec, mid: 0x57b8b2488fd7d322, lo: 0xef059660b2ebd59d },
  U192 { hi: 0xbedfedee2c9223f5, mid: 0xf4c8bbc165982cba, lo: 0xf567464ffd000000 },
  U192 { hi: 0x335ca5322ef05966, mid: 0x0b2ebd59d193ff40, lo: 0x0000000000000000 },
  U192 { hi: 0x3d2c02cbaf567464, mid: 0xffd0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5625b7f400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x515c587186c8c530, mid: 0x3afb2fdef4492f7e, lo: 0xdfc5724b9db62e33 },
  U192 { hi: 0xe11c26becbf7bd12, mid: 0x4bdfb7f15c92e76d, lo: 0x8b8ce4f80176ca50 },
  U192 { hi: 0x1d006af7edfc5724, mid: 0xb9db62e3393e005d, lo: 0xb2942da65d79c7b8 },
  U192 { hi: 0xdff1c676d8b8ce4f, mid: 0x80176ca50b69975e, lo: 0x71ee069b4dabd437 },
  U192 { hi: 0x1c358805db2942da, mid: 0x65d79c7b81a6d36a, lo: 0xf50dfcb967473e50 },
  U192 { hi: 0xdf27d975e71ee069, mid: 0xb4dabd437f2e59d1, lo: 0xcf940824a3e5f071 },
  U192 { hi: 0xb0bd1d36af50dfcb, mid: 0x967473e5020928f9, lo: 0x7c1c7427d1000000 },
  U192 { hi: 0x9ada8d9d1cf94082, mid: 0x4a3e5f071d09f440, lo: 0x0000000000000000 },
  U192 { hi: 0x5351128f97c1c742, mid: 0x7d10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xed05874400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0d375a77499419b6, mid: 0xd6b118df5d47af9d, lo: 0x57fd82c357b74824 },
  U192 { hi: 0xc9068dac4637d751, mid: 0xebe755ff60b0d5ed, lo: 0xd20919799f052373 },
  U192 { hi: 0x5877aaf9d57fd82c, mid: 0x357b7482465e67c1, lo: 0x48dcd24905d5372b },
  U192 { hi: 0xc0a6455edd209197, mid: 0x99f0523734924175, lo: 0x4dcac4ef48120b97 },
  U192 { hi: 0x00ae867c148dcd24, mid: 0x905d5372b13bd204, lo: 0x82e5dfebdb15704c },
  U192 { hi: 0x2b872c1754dcac4e, mid: 0xf48120b977faf6c5, lo: 0x5c131ec00827a301 },
  U192 { hi: 0x9b60b520482e5dfe, mid: 0xbdb15704c7b00209, lo: 0xe8c0631275000000 },
  U192 { hi: 0xa74d4f6c55c131ec, mid: 0x00827a3018c49d40, lo: 0x0000000000000000 },
  U192 { hi: 0x4c5230209e8c0631, mid: 0x2750000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd88851d400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x497dd4c289bbe11e, mid: 0x56173ef119bc4041, lo: 0x88dbf4128c342711 },
  U192 { hi: 0xa9112585cfbc466f, mid: 0x10106236fd04a30d, lo: 0x09c474e7de799724 },
  U192 { hi: 0x58b06c04188dbf41, mid: 0x28c342711d39f79e, lo: 0x65c919a24a2d7f39 },
  U192 { hi: 0xa00e2230d09c474e, mid: 0x7de799724668928b, lo: 0x5fce792932905ae4 },
  U192 { hi: 0xc1423f79e65c919a, mid: 0x24a2d7f39e4a4ca4, lo: 0x16b907eb530c7baf },
  U192 { hi: 0x79ece928b5fce792, mid: 0x932905ae41fad4c3, lo: 0x1eebd4c86c587150 },
  U192 { hi: 0x98c50cca416b907e, mid: 0xb530c7baf5321b16, lo: 0x1c541ef929000000 },
  U192 { hi: 0xdd3a654c31eebd4c, mid: 0x86c5871507be4a40, lo: 0x0000000000000000 },
  U192 { hi: 0x03cc21b161c541ef, mid: 0x9290000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x367b7ca400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa496dd78b4438b89, mid: 0x955771d501dfe038, lo: 0x6a64006843206501 },
  U192 { hi: 0x77afa555dc754077, mid: 0xf80e1a99001a10c8, lo: 0x194079951c63749a },
  U192 { hi: 0x4149960386a64006, mid: 0x843206501e654718, lo: 0xdd268518d7941fff },
  U192 { hi: 0xdecea90c81940799, mid: 0x51c63749a14635e5, lo: 0x07fff9c2c5d49c8e },
  U192 { hi: 0x228aac718dd26851, mid: 0x8d7941fffe70b175, lo: 0x2723b7da67c030dd },
  U192 { hi: 0x8ec1435e507fff9c, mid: 0x2c5d49c8edf699f0, lo: 0x0c3763222d000000 },
  U192 { hi: 0x9de1c31752723b7d, mid: 0xa67c030dd8c88b40, lo: 0x0000000000000000 },
  U192 { hi: 0x3273c99f00c37632, mid: 0x22d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8a4d28b400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa3103ca003f924c6, mid: 0xd6c8b1e66a44b0c8, lo: 0x1997418edde176c2 },
  U192 { hi: 0x9f01d5b22c799a91, mid: 0x2c320665d063b778, lo: 0x5db096d40d10b25f },
  U192 { hi: 0xb339730c81997418, mid: 0xedde176c25b50344, lo: 0x2c97d3364b0db83b },
  U192 { hi: 0x1f421b7785db096d, mid: 0x40d10b25f4cd92c3, lo: 0x6e0eeb590a6f7c3c },
  U192 { hi: 0x846dc03442c97d33, mid: 0x64b0db83bad6429b, lo: 0xdf0f2f055f0d9c6e },
  U192 { hi: 0x6462f92c36e0eeb5, mid: 0x90a6f7c3cbc157c3, lo: 0x671b9384c1000000 },
  U192 { hi: 0x5c1f3c29bdf0f2f0, mid: 0x55f0d9c6e4e13040, lo: 0x0000000000000000 },
  U192 { hi: 0x30500d7c3671b938, mid: 0x4c10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x14f46b0400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x89d669893e45112d, mid: 0x9abdbcc8f554e192, lo: 0xa55b67958a11d5e3 },
  U192 { hi: 0xa9c0f6af6f323d55, mid: 0x3864a956d9e56284, lo: 0x7578cb03bb3864bd },
  U192 { hi: 0x5adce6192a55b679, mid: 0x58a11d5e32c0eece, lo: 0x192f4f1377b41dbd },
  U192 { hi: 0x67523e2847578cb0, mid: 0x3bb3864bd3c4dded, lo: 0x076f561d7759f502 },
  U192 { hi: 0x06157eece192f4f1, mid: 0x377b41dbd5875dd6, lo: 0x7d409ec71f21e431 },
  U192 { hi: 0x22f315ded076f561, mid: 0xd7759f5027b1c7c8, lo: 0x790c5eed25000000 },
  U192 { hi: 0x7c1195dd67d409ec, mid: 0x71f21e4317bb4940, lo: 0x0000000000000000 },
  U192 { hi: 0xa378cc7c8790c5ee, mid: 0xd250000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x59df649400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x2dc78fd5d22bd366, mid: 0x5fcc325b50bc28a0, lo: 0x2af34194fc0c4a99 },
  U192 { hi: 0xc73cb7f30c96d42f, mid: 0x0a280abcd0653f03, lo: 0x12a64ac86f5b1cc5 },
  U192 { hi: 0xb5be5a8a02af3419, mid: 0x4fc0c4a992b21bd6, lo: 0xc73158f0d45360e4 },
  U192 { hi: 0xb780c3f0312a64ac, mid: 0x86f5b1cc563c3514, lo: 0xd8391763e0f898ca },
  U192 { hi: 0xce63f9bd6c73158f, mid: 0x0d45360e45d8f83e, lo: 0x26329f5445b5ab0a },
  U192 { hi: 0xaef35b514d839176, mid: 0x3e0f898ca7d5116d, lo: 0x6ac28b3099000000 },
  U192 { hi: 0xaec95f83e26329f5, mid: 0x445b5ab0a2cc2640, lo: 0x0000000000000000 },
  U192 { hi: 0x85b4d916d6ac28b3, mid: 0x0990000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8870526400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe9821f9ff62c3c3c, mid: 0x043b22fe20e92724, lo: 0x2b5dbb01bbeff8ca },
  U192 { hi: 0xece9310ec8bf883a, mid: 0x49c90ad76ec06efb, lo: 0xfe329f922758b7e3 },
  U192 { hi: 0x4babd27242b5dbb0, mid: 0x1bbeff8ca7e489d6, lo: 0x2df8fe7c835ab246 },
  U192 { hi: 0x755e76efbfe329f9, mid: 0x22758b7e3f9f20d6, lo: 0xac91b1b8235ea06c },
  U192 { hi: 0x33daa89d62df8fe7, mid: 0xc835ab246c6e08d7, lo: 0xa81b3da65acab2e0 },
  U192 { hi: 0x62df320d6ac91b1b, mid: 0x8235ea06cf6996b2, lo: 0xacb829b15d000000 },
  U192 { hi: 0xdff8388d7a81b3da, mid: 0x65acab2e0a6c5740, lo: 0x0000000000000000 },
  U192 { hi: 0x2076096b2acb829b, mid: 0x15d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x473f057400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x1f85ff490241c7db, mid: 0x5467567b5d575fb5, lo: 0xe74f733866156c83 },
  U192 { hi: 0x48e80519d59ed755, mid: 0xd7ed79d3dcce1985, lo: 0x5b20fd95a58f8a9e },
  U192 { hi: 0xceb975fb5e74f733, mid: 0x866156c83f656963, lo: 0xe2a793b0e7247bd7 },
  U192 { hi: 0x1252799855b20fd9, mid: 0x5a58f8a9e4ec39c9, lo: 0x1ef5d24c66a95c8c },
  U192 { hi: 0x3d2aa6963e2a793b, mid: 0x0e7247bd749319aa, lo: 0x57230372b1000000 },
  U192 { hi: 0x1078639c91ef5d24, mid: 0xc66a95c8c0dcac40, lo: 0x0000000000000000 },
  U192 { hi: 0x2a47399aa5723037, mid: 0x2b10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa2840ac400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd91d981034d70bd3, mid: 0xd8ff7b50a2b8a0fe, lo: 0xef002f6cb94c6422 },
  U192 { hi: 0x9804e63fded428ae, mid: 0x283fbbc00bdb2e53, lo: 0x1908a2e0f79161b0 },
  U192 { hi: 0xb2465a0feef002f6, mid: 0xcb94c64228b83de4, lo: 0x586c1d056ff38c2b },
  U192 { hi: 0x2f8952e531908a2e, mid: 0x0f79161b07415bfc, lo: 0xe30ac7899bcb3a45 },
  U192 { hi: 0xc44df3de4586c1d0, mid: 0x56ff38c2b1e266f2, lo: 0xce9140fcd5000000 },
  U192 { hi: 0x6ba255bfce30ac78, mid: 0x99bcb3a4503f3540, lo: 0x0000000000000000 },
  U192 { hi: 0x2fce366f2ce9140f, mid: 0xcd50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x526c0b5400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x01e2fd11644fe44a, mid: 0x2aada80848a4bcfc, lo: 0xd05dc3ee9f3cf949 },
  U192 { hi: 0xba3fdaab6a021229, mid: 0x2f3f341770fba7cf, lo: 0x3e5274792892fe09 },
  U192 { hi: 0x3d75a3cfcd05dc3e, mid: 0xe9f3cf949d1e4a24, lo: 0xbf827c6213373e82 },
  U192 { hi: 0x56494a7cf3e52747, mid: 0x92892fe09f1884cd, lo: 0xcfa09111cea8b3f4 },
  U192 { hi: 0x734864a24bf827c6, mid: 0x213373e8244473aa, lo: 0x2cfd3b5109000000 },
  U192 { hi: 0xab57384cdcfa0911, mid: 0x1cea8b3f4ed44240, lo: 0x0000000000000000 },
  U192 { hi: 0xbfc1a73aa2cfd3b5, mid: 0x1090000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x632f942400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x97094a3d69bb4b1b, mid: 0xef022819fcf89d38, lo: 0x7cec6c90e40b3e1a },
  U192 { hi: 0x4f8f53c08a067f3e, mid: 0x274e1f3b1b243902, lo: 0xcf8691f17e8c8cc7 },
  U192 { hi: 0x719921d387cec6c9, mid: 0x0e40b3e1a47c5fa3, lo: 0x2331c956e69bb623 },
  U192 { hi: 0x4a26ab902cf8691f, mid: 0x17e8c8cc7255b9a6, lo: 0xed88e7a003690259 },
  U192 { hi: 0x8a1a65fa32331c95, mid: 0x6e69bb6239e800da, lo: 0x4096502d8d000000 },
  U192 { hi: 0x08f2b39a6ed88e7a, mid: 0x00369025940b6340, lo: 0x0000000000000000 },
  U192 { hi: 0xd771400da4096502, mid: 0xd8d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7b66763400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x42c10a1d343413a8, mid: 0x90e849fdb3626a1a, lo: 0xe8a0b10d0224ad45 },
  U192 { hi: 0x6fd24c3a127f6cd8, mid: 0x9a86ba282c434089, lo: 0x2b514c896cbe3edc },
  U192 { hi: 0x366d7ea1ae8a0b10, mid: 0xd0224ad453225b2f, lo: 0x8fb725974e52567b },
  U192 { hi: 0x6a30f40892b514c8, mid: 0x96cbe3edc965d394, lo: 0x959ee7c1b36bbaac },
  U192 { hi: 0xb22365b2f8fb7259, mid: 0x74e52567b9f06cda, lo: 0xeeab14e1a1000000 },
  U192 { hi: 0x6b62a5394959ee7c, mid: 0x1b36bbaac5386840, lo: 0x0000000000000000 },
  U192 { hi: 0x019686cdaeeab14e, mid: 0x1a10000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb8de168400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7df84428aaf8e675, mid: 0xf0c6a0e9a0c03603, lo: 0xdcee8fd95e6279ff },
  U192 { hi: 0xc5a2dc31a83a6830, mid: 0x0d80f73ba3f65798, lo: 0x9e7fddbda1be20e3 },
  U192 { hi: 0x783513603dcee8fd, mid: 0x95e6279ff76f686f, lo: 0x8838df4d33821b1c },
  U192 { hi: 0xa9d8c57989e7fddb, mid: 0xda1be20e37d34ce0, lo: 0x86c727f185000000 },
  U192 { hi: 0x9bae3e86f8838df4, mid: 0xd33821b1c9fc6140, lo: 0x0000000000000000 },
  U192 { hi: 0xcac234ce086c727f, mid: 0x1850000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc22e461400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7bf19326e01ba4d7, mid: 0x47afc7ac75866e77, lo: 0x7eef827eea7c2dfa },
  U192 { hi: 0x7cfd79ebf1eb1d61, mid: 0x9b9ddfbbe09fba9f, lo: 0x0b7ea8dfca1e53ff },
  U192 { hi: 0x649c66e777eef827, mid: 0xeea7c2dfaa37f287, lo: 0x94ffc1719448b7ac },
  U192 { hi: 0xa3291ba9f0b7ea8d, mid: 0xfca1e53ff05c6512, lo: 0x2deb3aca79000000 },
  U192 { hi: 0xc286cf28794ffc17, mid: 0x19448b7aceb29e40, lo: 0x0000000000000000 },
  U192 { hi: 0x8f31d65122deb3ac, mid: 0xa790000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb52469e400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5deec2ee3a4b8c40, mid: 0xa9c831618808a6ec, lo: 0xa85eade929345e36 },
  U192 { hi: 0x39451a720c586202, mid: 0x29bb2a17ab7a4a4d, lo: 0x178dba948b1e02b4 },
  U192 { hi: 0xcdc2aa6eca85eade, mid: 0x929345e36ea522c7, lo: 0x80ad11ca8a5c9348 },
  U192 { hi: 0x6d30cca4d178dba9, mid: 0x48b1e02b4472a297, lo: 0x24d209c6bd000000 },
  U192 { hi: 0xd553fa2c780ad11c, mid: 0xa8a5c9348271af40, lo: 0x0000000000000000 },
  U192 { hi: 0xbc426a29724d209c, mid: 0x6bd0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x385852f400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5756873a62715925, mid: 0xe392fe6481e470eb, lo: 0xf207fdeadd53b09d },
  U192 { hi: 0x48e1b0e4bf992079, mid: 0x1c3afc81ff7ab754, lo: 0xec275268396d7de3 },
  U192 { hi: 0x48809f0ebf207fde, mid: 0xadd53b09d49a0e5b, lo: 0x5f78e23167a350d5 },
  U192 { hi: 0x8a658b754ec27526, mid: 0x8396d7de388c59e8, lo: 0xd43569c191000000 },
  U192 { hi: 0x40c810e5b5f78e23, mid: 0x167a350d5a706440, lo: 0x0000000000000000 },
  U192 { hi: 0x406dfd9e8d43569c, mid: 0x1910000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x58028e4400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xd769c1b4b4664ad6, mid: 0x5017908bf847e8ce, lo: 0xa71753605843f93d },
  U192 { hi: 0x1aa13c05e422fe11, mid: 0xfa33a9c5d4d81610, lo: 0xfe4f7a8298c85dae },
  U192 { hi: 0xd2553e8cea717536, mid: 0x05843f93dea0a632, lo: 0x176b8afbd35de6c0 },
  U192 { hi: 0x671039610fe4f7a8, mid: 0x298c85dae2bef4d7, lo: 0x79b0277b35000000 },
  U192 { hi: 0x1abdea632176b8af, mid: 0xbd35de6c09decd40, lo: 0x0000000000000000 },
  U192 { hi: 0xa7782f4d779b0277, mid: 0xb350000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xbabaecd400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x77e525f9cf4bfa4d, mid: 0x50be82f882d91f5a, lo: 0xdb41389156cc6901 },
  U192 { hi: 0xc337fc2fa0be20b6, mid: 0x47d6b6d04e2455b3, lo: 0x1a406f3fb9a62c48 },
  U192 { hi: 0x291a11f5adb41389, mid: 0x156cc6901bcfee69, lo: 0x8b123e0ce9000000 },
  U192 { hi: 0x47251d5b31a406f3, mid: 0xfb9a62c48f833a40, lo: 0x0000000000000000 },
  U192 { hi: 0xd9a276e698b123e0, mid: 0xce90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8fe3aba400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb217e229fb2bcfbe, mid: 0x40317f6c0b0ff6cf, lo: 0x237e8900d3ee3ae7 },
  U192 { hi: 0x7cc1000c5fdb02c3, mid: 0xfdb3c8dfa24034fb, lo: 0x8eb9f3a1544a0564 },
  U192 { hi: 0x3a672f6cf237e890, mid: 0x0d3ee3ae7ce85512, lo: 0x815936aced000000 },
  U192 { hi: 0x9fa0c34fb8eb9f3a, mid: 0x1544a0564dab3b40, lo: 0x0000000000000000 },
  U192 { hi: 0xcda8ad512815936a, mid: 0xced0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x6c7fc3b400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x407deca8b6319512, mid: 0x65ce0b4b1b67447a, lo: 0xd9b9b9060e6b42ef },
  U192 { hi: 0x0170c97382d2c6d9, mid: 0xd11eb66e6e41839a, lo: 0xd0bbdb8823f2aa47 },
  U192 { hi: 0xdd4c9c47ad9b9b90, mid: 0x60e6b42ef6e208fc, lo: 0xaa91e50281000000 },
  U192 { hi: 0x62b01839ad0bbdb8, mid: 0x823f2aa47940a040, lo: 0x0000000000000000 },
  U192 { hi: 0x9e75a08fcaa91e50, mid: 0x2810000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x6e5c9a0400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x8ad994137905141f, mid: 0x70d7b446437f0edb, lo: 0x951f7b162a0a9d56 },
  U192 { hi: 0x2b3fe435ed1190df, mid: 0xc3b6e547dec58a82, lo: 0xa755b3fccb3444eb },
  U192 { hi: 0x7f8dc0edb951f7b1, mid: 0x62a0a9d56cff32cd, lo: 0x113af849e5000000 },
  U192 { hi: 0x06b6e0a82a755b3f, mid: 0xccb3444ebe127940, lo: 0x0000000000000000 },
  U192 { hi: 0x10bd532cd113af84, mid: 0x9e50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x3c11ff9400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7979e92b17ade633, mid: 0xac6c092a0ee6979c, lo: 0xfc7f129ce9042651 },
  U192 { hi: 0x7d7cb31b024a83b9, mid: 0xa5e73f1fc4a73a41, lo: 0x09947660d58895d8 },
  U192 { hi: 0x1bacb979cfc7f129, mid: 0xce9042651d983562, lo: 0x2576128859000000 },
  U192 { hi: 0x1393bba410994766, mid: 0x0d58895d84a21640, lo: 0x0000000000000000 },
  U192 { hi: 0x5e9fd35622576128, mid: 0x8590000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe1d8816400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5c8d1cee7ee96d4a, mid: 0xc8619ef418fe2626, lo: 0x13566fab9861b77a },
  U192 { hi: 0x2bfbaa1867bd063f, mid: 0x898984d59beae618, lo: 0x6dde94101d000000 },
  U192 { hi: 0x6c81b262613566fa, mid: 0xb9861b77a5040740, lo: 0x0000000000000000 },
  U192 { hi: 0x636f2e6186dde941, mid: 0x01d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x2971a07400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x92f94e2a6015b406, mid: 0x3c74031bb321bb4c, lo: 0x7ef6bacb27556cd2 },
  U192 { hi: 0x3e721f1d00c6ecc8, mid: 0x6ed31fbdaeb2c9d5, lo: 0x5b349a9471000000 },
  U192 { hi: 0x470ebbb4c7ef6bac, mid: 0xb27556cd26a51c40, lo: 0x0000000000000000 },
  U192 { hi: 0xbe2ae49d55b349a9, mid: 0x4710000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0d8111c400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb7bf401eae6dde03, mid: 0x1a65b331e6f588cc, lo: 0xd3efd55340ae796a },
  U192 { hi: 0xd3fe1e996ccc79bd, mid: 0x623334fbf554d02b, lo: 0x9e5aa80d95000000 },
  U192 { hi: 0x6e73e08ccd3efd55, mid: 0x340ae796aa036540, lo: 0x0000000000000000 },
  U192 { hi: 0x89868502b9e5aa80, mid: 0xd950000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x349ea65400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0392603af27b10e2, mid: 0x2745d2733c9f00b1, lo: 0xd5e12867fd246f84 },
  U192 { hi: 0xc4acc9d1749ccf27, mid: 0xc02c75784a19ff49, lo: 0x1be10eacc9000000 },
  U192 { hi: 0x1064380b1d5e1286, mid: 0x7fd246f843ab3240, lo: 0x0000000000000000 },
  U192 { hi: 0x955437f491be10ea, mid: 0xcc90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xbc97c32400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x06dcc35f20b13595, mid: 0x3f202d05526ee8f0, lo: 0x42f7e3ddaea78877 },
  U192 { hi: 0x362fa7c80b41549b, mid: 0xba3c10bdf8f76ba9, lo: 0xe21dec204d000000 },
  U192 { hi: 0x014b3e8f042f7e3d, mid: 0xdaea78877b081340, lo: 0x0000000000000000 },
  U192 { hi: 0xed167eba9e21dec2, mid: 0x04d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5d99113400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x647b35c8dfbace13, mid: 0xc5595cacb981e27f, lo: 0xbd62344c85efae32 },
  U192 { hi: 0xe7e78956572b2e60, mid: 0x789fef588d13217b, lo: 0xeb8cbf6761000000 },
  U192 { hi: 0xc3769627fbd62344, mid: 0xc85efae32fd9d840, lo: 0x0000000000000000 },
  U192 { hi: 0xc88a0217beb8cbf6, mid: 0x7610000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x23db1d8400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x27da8ac2391a36c5, mid: 0xc6cb5212c5662075, lo: 0x5283497645000000 },
  U192 { hi: 0xb777f9b2d484b159, mid: 0x881d54a0d25d9140, lo: 0x0000000000000000 },
  U192 { hi: 0x3e5e720755283497, mid: 0x6450000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xa460e11400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x52371652b99b8140, mid: 0x8b10c60c56931a3c, lo: 0x020581ea39000000 },
  U192 { hi: 0x329ef2c4318315a4, mid: 0xc68f0081607a8e40, lo: 0x0000000000000000 },
  U192 { hi: 0x3c7551a3c020581e, mid: 0xa390000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x202170e400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xbc71c3e2652a6eb9, mid: 0xbb9bd2dbecd7a1ea, lo: 0xecbd460d7d000000 },
  U192 { hi: 0x5271cee6f4b6fb35, mid: 0xe87abb2f51835f40, lo: 0x0000000000000000 },
  U192 { hi: 0x30dd8a1eaecbd460, mid: 0xd7d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x1a8aedf400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x73c349236f72ab29, mid: 0xaf3e21da7558d2b3, lo: 0xe74c996b51000000 },
  U192 { hi: 0xcdb363cf88769d56, mid: 0x34acf9d3265ad440, lo: 0x0000000000000000 },
  U192 { hi: 0x3f2d352b3e74c996, mid: 0xb510000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xb16abd4400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x21ed73372f06c2d0, mid: 0xba5e96384b2664df, lo: 0xf93ba433f5000000 },
  U192 { hi: 0x71912697a58e12c9, mid: 0x9937fe4ee90cfd40, lo: 0x0000000000000000 },
  U192 { hi: 0x9a0bbe4dff93ba43, mid: 0x3f50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x9ced87d400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc477ca7f36ef3493, mid: 0x18acec3a092c2a40, lo: 0x0000000000000000 },
  U192 { hi: 0xbbe4e62b3b0e824b, mid: 0x0a90000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xe94bdaa400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x4a6a14472e235461, mid: 0xf7f6b63ec581eb40, lo: 0x0000000000000000 },
  U192 { hi: 0xb7d8bdfdad8fb160, mid: 0x7ad0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x4eb25eb400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7f7eea080d9bd52a, mid: 0x09628aa49be41040, lo: 0x0000000000000000 },
  U192 { hi: 0xb28b2a58a2a926f9, mid: 0x0410000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc7c4c90400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x3c8acaba4df0d343, mid: 0x518c2c9cf93da940, lo: 0x0000000000000000 },
  U192 { hi: 0x45ec54630b273e4f, mid: 0x6a50000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x1e449a9400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x514b183287d07ebd, mid: 0x79cf8980e21c0640, lo: 0x0000000000000000 },
  U192 { hi: 0x82bd4e73e2603887, mid: 0x0190000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x4cd5886400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0xc04dfce5c48596d3, mid: 0xedd0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x0ba43b7400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x91f53027987e279c, mid: 0x6310000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x66e940c400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x049c0b06ac3514d6, mid: 0xe550000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x16d1415400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x5a2f0b8bcef94879, mid: 0x8890000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x2794ca2400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x69aecd237d27629e, mid: 0x30d0000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x3fcbac3400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
  U192 { hi: 0x7d434c8400000000, mid: 0x0000000000000000, lo: 0x0000000000000000 },
];
