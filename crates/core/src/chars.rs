//! Unicode character classification used by the normalizers.
//!
//! Process-wide read-only lookup tables. Classification here follows what
//! tokenization pipelines expect rather than strict Unicode category
//! membership: tab, newline and carriage return count as whitespace, not
//! as control characters.

use std::cmp::Ordering;

/// CJK ideograph blocks that get spaces inserted around them.
///
/// CJK Unified Ideographs, extensions A-E and the compatibility blocks.
/// Kana and Hangul are intentionally absent: they are segmented by
/// ordinary whitespace rules.
const CJK_RANGES: &[(u32, u32)] = &[
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B73F),
    (0x2B740, 0x2B81F),
    (0x2B820, 0x2CEAF),
    (0x2F800, 0x2FA1F),
];

/// Format (Cf) character ranges, sorted ascending.
///
/// Covers the format characters seen in practice: soft hyphen, Arabic
/// number signs, Mongolian vowel separator, zero-width and directional
/// controls, interlinear annotation, musical and tag characters.
const FORMAT_RANGES: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x13438),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let code = c as u32;
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < code {
                Ordering::Less
            } else if lo > code {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Check if a character is a CJK ideograph.
pub fn is_cjk(c: char) -> bool {
    in_ranges(c, CJK_RANGES)
}

/// Check if a character is a format (Cf) character.
pub fn is_format(c: char) -> bool {
    in_ranges(c, FORMAT_RANGES)
}

/// Check if a character is whitespace.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Check if a character is a control or format character.
///
/// Tab, newline and carriage return are exempt: the normalizers treat
/// them as whitespace.
pub fn is_control(c: char) -> bool {
    if c == '\t' || c == '\n' || c == '\r' {
        return false;
    }
    c.is_control() || is_format(c)
}

/// Check if a character is a combining mark.
pub fn is_combining_mark(c: char) -> bool {
    unicode_normalization::char::is_combining_mark(c)
}
