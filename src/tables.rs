//! Reference range tables
//!
//! Both tables cover the Basic Multilingual Plane only. Everything outside
//! them is single width.

use crate::types::Interval;

/// Combining diacritical marks, zero cells wide
pub static COMBINING_RANGES: &[Interval] = &[(0x0300, 0x036F)];

/// Characters rendered two cells wide on the console
///
/// Sorted by start, non-overlapping. Adjacent entries are not merged.
#[rustfmt::skip]
pub static WIDE_RANGES: &[Interval] = &[
    (0x0378, 0x0379), (0x0380, 0x0383), (0x038D, 0x038D), (0x0524, 0x0530), (0x0558, 0x0558),
    (0x0588, 0x0588), (0x058C, 0x0590), (0x05C9, 0x05CF), (0x05EC, 0x05EF), (0x05F6, 0x05FF),
    (0x0605, 0x0605), (0x061D, 0x061D), (0x065F, 0x065F), (0x074B, 0x074C), (0x07B3, 0x07BF),
    (0x07FC, 0x0900), (0x093B, 0x093B), (0x094F, 0x094F), (0x0956, 0x0957), (0x0974, 0x097A),
    (0x0984, 0x0984), (0x098E, 0x098E), (0x0992, 0x0992), (0x09B1, 0x09B1), (0x09B4, 0x09B5),
    (0x09BB, 0x09BB), (0x09C6, 0x09C6), (0x09CA, 0x09CA), (0x09D0, 0x09D6), (0x09D9, 0x09DB),
    (0x09E4, 0x09E5), (0x09FC, 0x0A00), (0x0A0B, 0x0A0E), (0x0A12, 0x0A12), (0x0A31, 0x0A31),
    (0x0A37, 0x0A37), (0x0A3B, 0x0A3B), (0x0A43, 0x0A46), (0x0A4A, 0x0A4A), (0x0A4F, 0x0A50),
    (0x0A53, 0x0A58), (0x0A5F, 0x0A65), (0x0A77, 0x0A80), (0x0A8E, 0x0A8E), (0x0AA9, 0x0AA9),
    (0x0AB4, 0x0AB4), (0x0ABB, 0x0ABB), (0x0ACA, 0x0ACA), (0x0ACF, 0x0ACF), (0x0AD2, 0x0ADF),
    (0x0AE5, 0x0AE5), (0x0AF2, 0x0B00), (0x0B0D, 0x0B0E), (0x0B12, 0x0B12), (0x0B31, 0x0B31),
    (0x0B3A, 0x0B3B), (0x0B46, 0x0B46), (0x0B4A, 0x0B4A), (0x0B4F, 0x0B55), (0x0B59, 0x0B5B),
    (0x0B64, 0x0B65), (0x0B73, 0x0B81), (0x0B8B, 0x0B8D), (0x0B96, 0x0B98), (0x0B9D, 0x0B9D),
    (0x0BA1, 0x0BA2), (0x0BA6, 0x0BA7), (0x0BAC, 0x0BAD), (0x0BBB, 0x0BBD), (0x0BC4, 0x0BC5),
    (0x0BCE, 0x0BCF), (0x0BD2, 0x0BD6), (0x0BD9, 0x0BE5), (0x0BFC, 0x0C00), (0x0C0D, 0x0C0D),
    (0x0C29, 0x0C29), (0x0C3A, 0x0C3C), (0x0C49, 0x0C49), (0x0C4F, 0x0C54), (0x0C5A, 0x0C5F),
    (0x0C65, 0x0C65), (0x0C71, 0x0C77), (0x0C81, 0x0C81), (0x0C8D, 0x0C8D), (0x0CA9, 0x0CA9),
    (0x0CBA, 0x0CBB), (0x0CC9, 0x0CC9), (0x0CCF, 0x0CD4), (0x0CD8, 0x0CDD), (0x0CE4, 0x0CE5),
    (0x0CF3, 0x0D01), (0x0D0D, 0x0D0D), (0x0D29, 0x0D29), (0x0D3B, 0x0D3C), (0x0D49, 0x0D49),
    (0x0D4F, 0x0D56), (0x0D59, 0x0D5F), (0x0D65, 0x0D65), (0x0D77, 0x0D78), (0x0D81, 0x0D81),
    (0x0D97, 0x0D99), (0x0DBC, 0x0DBC), (0x0DBF, 0x0DBF), (0x0DC8, 0x0DC9), (0x0DCC, 0x0DCE),
    (0x0DD7, 0x0DD7), (0x0DE1, 0x0DF1), (0x0DF6, 0x0E00), (0x0E3C, 0x0E3E), (0x0E5D, 0x0E80),
    (0x0E85, 0x0E86), (0x0E8B, 0x0E8C), (0x0E8F, 0x0E93), (0x0EA0, 0x0EA0), (0x0EA6, 0x0EA6),
    (0x0EA9, 0x0EA9), (0x0EBA, 0x0EBA), (0x0EBF, 0x0EBF), (0x0EC7, 0x0EC7), (0x0ECF, 0x0ECF),
    (0x0EDB, 0x0EDB), (0x0EDF, 0x0EFF), (0x0F6D, 0x0F70), (0x0F8D, 0x0F8F), (0x0FBD, 0x0FBD),
    (0x0FD5, 0x0FFF), (0x109B, 0x109D), (0x10C7, 0x10CF), (0x10FE, 0x115F), (0x11A4, 0x11A7),
    (0x11FB, 0x11FF), (0x124E, 0x124F), (0x1259, 0x1259), (0x125F, 0x125F), (0x128E, 0x128F),
    (0x12B6, 0x12B7), (0x12C1, 0x12C1), (0x12C7, 0x12C7), (0x1311, 0x1311), (0x1317, 0x1317),
    (0x135C, 0x135E), (0x137E, 0x137F), (0x139B, 0x139F), (0x13F6, 0x1400), (0x1678, 0x167F),
    (0x169E, 0x169F), (0x16F2, 0x16FF), (0x1715, 0x171F), (0x1738, 0x173F), (0x1755, 0x175F),
    (0x1771, 0x1771), (0x1775, 0x177F), (0x17DF, 0x17DF), (0x17EB, 0x17EF), (0x17FB, 0x17FF),
    (0x181A, 0x181F), (0x1879, 0x187F), (0x18AC, 0x18FF), (0x191E, 0x191F), (0x192D, 0x192F),
    (0x193D, 0x193F), (0x1942, 0x1943), (0x196F, 0x196F), (0x1976, 0x197F), (0x19AB, 0x19AF),
    (0x19CB, 0x19CF), (0x19DB, 0x19DD), (0x1A1D, 0x1A1D), (0x1A21, 0x1AFF), (0x1B4D, 0x1B4F),
    (0x1B7E, 0x1B7F), (0x1BAC, 0x1BAD), (0x1BBB, 0x1BFF), (0x1C39, 0x1C3A), (0x1C4B, 0x1C4C),
    (0x1C81, 0x1CFF), (0x1DE8, 0x1DFD), (0x1F17, 0x1F17), (0x1F1F, 0x1F1F), (0x1F47, 0x1F47),
    (0x1F4F, 0x1F4F), (0x1F5A, 0x1F5A), (0x1F5E, 0x1F5E), (0x1F7F, 0x1F7F), (0x1FC5, 0x1FC5),
    (0x1FD5, 0x1FD5), (0x1FF0, 0x1FF1), (0x1FFF, 0x1FFF), (0x2066, 0x2069), (0x2073, 0x2073),
    (0x2095, 0x209F), (0x20B7, 0x20CF), (0x20F2, 0x20FF), (0x2151, 0x2152), (0x218A, 0x218F),
    (0x232A, 0x232A), (0x23E9, 0x23FF), (0x2428, 0x243F), (0x244C, 0x245F), (0x269F, 0x269F),
    (0x26BE, 0x26BF), (0x26C5, 0x2700), (0x270A, 0x270B), (0x274C, 0x274C), (0x2753, 0x2755),
    (0x275F, 0x2760), (0x2796, 0x2797), (0x27BF, 0x27BF), (0x27CD, 0x27CF), (0x2B4E, 0x2B4F),
    (0x2B56, 0x2BFF), (0x2C5F, 0x2C5F), (0x2C7E, 0x2C7F), (0x2CEC, 0x2CF8), (0x2D27, 0x2D2F),
    (0x2D67, 0x2D6E), (0x2D71, 0x2D7F), (0x2D98, 0x2D9F), (0x2DAF, 0x2DAF), (0x2DBF, 0x2DBF),
    (0x2DCF, 0x2DCF), (0x2DDF, 0x2DDF), (0x2E32, 0x303E), (0x3041, 0x4DBF), (0x4E01, 0xA4FF),
    (0xA62D, 0xA63F), (0xA661, 0xA661), (0xA675, 0xA67B), (0xA699, 0xA6FF), (0xA78E, 0xA7FA),
    (0xA82D, 0xA83F), (0xA879, 0xA87F), (0xA8C6, 0xA8CD), (0xA8DB, 0xA8FF), (0xA955, 0xA95E),
    (0xA961, 0xA9FF), (0xAA38, 0xAA3F), (0xAA4F, 0xAA4F), (0xAA5B, 0xAA5B), (0xAA61, 0xD7FF),
    (0xF901, 0xFAFF), (0xFB08, 0xFB12), (0xFB19, 0xFB1C), (0xFB3D, 0xFB3D), (0xFB42, 0xFB42),
    (0xFBB2, 0xFBD2), (0xFD41, 0xFD4F), (0xFD91, 0xFD91), (0xFDC9, 0xFDEF), (0xFDFF, 0xFDFF),
    (0xFE11, 0xFE1F), (0xFE28, 0xFE6F), (0xFEFD, 0xFEFE), (0xFF01, 0xFF60), (0xFFC0, 0xFFC1),
    (0xFFC9, 0xFFC9), (0xFFD1, 0xFFD1), (0xFFD9, 0xFFD9), (0xFFDE, 0xFFE7), (0xFFF0, 0xFFF8),
    (0xFFFF, 0xFFFF),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_disjoint(table: &[Interval]) {
        for &(low, high) in table {
            assert!(low <= high, "inverted range {:#X}..{:#X}", low, high);
        }
        for pair in table.windows(2) {
            assert!(
                pair[0].1 < pair[1].0,
                "{:#X?} and {:#X?} are not ordered",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_tables_sorted_and_disjoint() {
        assert_sorted_disjoint(COMBINING_RANGES);
        assert_sorted_disjoint(WIDE_RANGES);
    }

    #[test]
    fn test_wide_table_shape() {
        assert_eq!(WIDE_RANGES.len(), 261);
        assert_eq!(WIDE_RANGES.first(), Some(&(888, 889)));
        assert_eq!(WIDE_RANGES.last(), Some(&(0xFFFF, 0xFFFF)));
    }

    #[test]
    fn test_tables_do_not_intersect() {
        for &(low, high) in COMBINING_RANGES {
            for &(wide_low, wide_high) in WIDE_RANGES {
                assert!(high < wide_low || wide_high < low);
            }
        }
    }

    #[test]
    fn test_bmp_only() {
        assert!(WIDE_RANGES.iter().all(|&(_, high)| high <= 0xFFFF));
        assert!(COMBINING_RANGES.iter().all(|&(_, high)| high <= 0xFFFF));
    }
}
