//! Unicode scalar classification for pre-tokenization.
//!
//! Category tests that drive text cleaning and word splitting. The
//! normalization-related tests (combining marks) come from
//! `unicode-normalization`; the general-category tests it does not cover
//! (Cf, Co, Zs, punctuation, CJK) are explicit range tables.

use std::ops::RangeInclusive;

/// Check if a code point is a C0/C1 control character (category Cc).
#[inline]
pub fn is_control(c: char) -> bool {
    let cp = c as u32;
    cp < 0x20 || (0x7F..=0x9F).contains(&cp)
}

/// Category Cf (format) ranges. Includes soft hyphen, bidi controls,
/// zero-width joiners, and the tag block.
const FORMAT_RANGES: &[RangeInclusive<u32>] = &[
    0x00AD..=0x00AD,   // soft hyphen
    0x0600..=0x0605,   // Arabic number signs
    0x061C..=0x061C,   // Arabic letter mark
    0x06DD..=0x06DD,
    0x070F..=0x070F,   // Syriac abbreviation mark
    0x0890..=0x0891,
    0x08E2..=0x08E2,
    0x180E..=0x180E,   // Mongolian vowel separator
    0x200B..=0x200F,   // ZWSP, ZWNJ, ZWJ, directional marks
    0x202A..=0x202E,   // bidi embedding controls
    0x2060..=0x2064,   // word joiner, invisible operators
    0x2066..=0x206F,   // bidi isolates, deprecated format chars
    0xFEFF..=0xFEFF,   // zero-width no-break space / BOM
    0xFFF9..=0xFFFB,   // interlinear annotation
    0x110BD..=0x110BD,
    0x110CD..=0x110CD,
    0x13430..=0x1343F, // Egyptian hieroglyph format controls
    0x1BCA0..=0x1BCA3,
    0x1D173..=0x1D17A, // musical symbol beam/tie controls
    0xE0001..=0xE0001,
    0xE0020..=0xE007F, // tags
];

/// Check if a code point is a format character (category Cf).
pub fn is_format(c: char) -> bool {
    let cp = c as u32;
    FORMAT_RANGES.iter().any(|r| r.contains(&cp))
}

/// Check if a code point value lies in the surrogate range (category Cs).
///
/// A Rust `char` can never hold a surrogate; this test exists for callers
/// that classify raw code point values, e.g. when scanning decoded input
/// that went through a lossy converter.
#[inline]
pub fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

/// Check if a code point is a private-use character (category Co).
#[inline]
pub fn is_private_use(c: char) -> bool {
    let cp = c as u32;
    (0xE000..=0xF8FF).contains(&cp)
        || (0xF0000..=0xFFFFD).contains(&cp)
        || (0x100000..=0x10FFFD).contains(&cp)
}

/// Check if a code point is the replacement character U+FFFD.
#[inline]
pub fn is_replacement(c: char) -> bool {
    c == '\u{FFFD}'
}

/// Check if a code point is a non-spacing or enclosing combining mark.
///
/// Delegates to `unicode-normalization`, which tests general category M.
/// After NFD decomposition this is what diacritic stripping removes.
#[inline]
pub fn is_non_spacing_mark(c: char) -> bool {
    unicode_normalization::char::is_combining_mark(c)
}

/// Check if a code point is dropped by the text cleaner: control, format,
/// private-use, or the replacement character. Tab, newline, and carriage
/// return are kept (the whitespace splitter handles them).
pub fn is_ignored(c: char) -> bool {
    if matches!(c, '\t' | '\n' | '\r') {
        return false;
    }
    is_control(c) || is_format(c) || is_private_use(c) || is_replacement(c)
}

/// Category Zs (space separator) code points, minus ASCII space which the
/// fast path below handles.
const SPACE_SEPARATORS: &[RangeInclusive<u32>] = &[
    0x00A0..=0x00A0,   // no-break space
    0x1680..=0x1680,   // Ogham space mark
    0x2000..=0x200A,   // en quad .. hair space
    0x202F..=0x202F,   // narrow no-break space
    0x205F..=0x205F,   // medium mathematical space
    0x3000..=0x3000,   // ideographic space
];

/// Check if a code point splits words: ASCII tab/newline/carriage-return/
/// space, or category Zs.
pub fn is_whitespace(c: char) -> bool {
    if matches!(c, ' ' | '\t' | '\n' | '\r') {
        return true;
    }
    let cp = c as u32;
    SPACE_SEPARATORS.iter().any(|r| r.contains(&cp))
}

/// Non-ASCII punctuation ranges (general category P).
///
/// Covers the punctuation blocks and the scattered per-script punctuation
/// code points; not the full Unicode property table, but sufficient for the
/// text the reference tokenizer targets.
const PUNCTUATION_RANGES: &[RangeInclusive<u32>] = &[
    0x00A1..=0x00A1,   // inverted exclamation mark
    0x00A7..=0x00A7,   // section sign
    0x00AB..=0x00AB,   // left guillemet
    0x00B6..=0x00B7,   // pilcrow, middle dot
    0x00BB..=0x00BB,   // right guillemet
    0x00BF..=0x00BF,   // inverted question mark
    0x037E..=0x037E,   // Greek question mark
    0x0387..=0x0387,   // Greek ano teleia
    0x055A..=0x055F,   // Armenian
    0x0589..=0x058A,
    0x05BE..=0x05BE,   // Hebrew maqaf
    0x05C0..=0x05C0,
    0x05C3..=0x05C3,
    0x05C6..=0x05C6,
    0x05F3..=0x05F4,
    0x0609..=0x060A,   // Arabic
    0x060C..=0x060D,
    0x061B..=0x061B,
    0x061E..=0x061F,
    0x066A..=0x066D,
    0x06D4..=0x06D4,
    0x0700..=0x070D,   // Syriac
    0x07F7..=0x07F9,
    0x0830..=0x083E,
    0x085E..=0x085E,
    0x0964..=0x0965,   // Devanagari danda
    0x0970..=0x0970,
    0x09FD..=0x09FD,
    0x0A76..=0x0A76,
    0x0AF0..=0x0AF0,
    0x0C77..=0x0C77,
    0x0C84..=0x0C84,
    0x0DF4..=0x0DF4,
    0x0E4F..=0x0E4F,   // Thai
    0x0E5A..=0x0E5B,
    0x0F04..=0x0F12,   // Tibetan
    0x0F14..=0x0F14,
    0x0F3A..=0x0F3D,
    0x0F85..=0x0F85,
    0x0FD0..=0x0FD4,
    0x0FD9..=0x0FDA,
    0x104A..=0x104F,   // Myanmar
    0x10FB..=0x10FB,
    0x1360..=0x1368,   // Ethiopic
    0x1400..=0x1400,
    0x166E..=0x166E,
    0x169B..=0x169C,
    0x16EB..=0x16ED,
    0x1735..=0x1736,
    0x17D4..=0x17D6,   // Khmer
    0x17D8..=0x17DA,
    0x1800..=0x180A,   // Mongolian
    0x1944..=0x1945,
    0x1A1E..=0x1A1F,
    0x1AA0..=0x1AA6,
    0x1AA8..=0x1AAD,
    0x1B5A..=0x1B60,
    0x1BFC..=0x1BFF,
    0x1C3B..=0x1C3F,
    0x1C7E..=0x1C7F,
    0x1CC0..=0x1CC7,
    0x1CD3..=0x1CD3,
    0x2010..=0x2027,   // dashes, quotes, daggers, ellipsis
    0x2030..=0x2043,   // per-mille .. hyphen bullet
    0x2045..=0x2051,
    0x2053..=0x205E,
    0x207D..=0x207E,   // superscript parens
    0x208D..=0x208E,   // subscript parens
    0x2308..=0x230B,   // ceiling/floor corners
    0x2329..=0x232A,
    0x2768..=0x2775,   // ornamental brackets
    0x27C5..=0x27C6,
    0x27E6..=0x27EF,   // mathematical brackets
    0x2983..=0x2998,
    0x29D8..=0x29DB,
    0x29FC..=0x29FD,
    0x2CF9..=0x2CFC,
    0x2CFE..=0x2CFF,
    0x2D70..=0x2D70,
    0x2E00..=0x2E5D,   // Supplemental Punctuation
    0x3001..=0x3003,   // CJK comma, full stop, ditto
    0x3008..=0x3011,   // CJK brackets
    0x3014..=0x301F,
    0x3030..=0x3030,
    0x303D..=0x303D,
    0x30A0..=0x30A0,
    0x30FB..=0x30FB,   // katakana middle dot
    0xA4FE..=0xA4FF,
    0xA60D..=0xA60F,
    0xA673..=0xA673,
    0xA67E..=0xA67E,
    0xA6F2..=0xA6F7,
    0xA874..=0xA877,
    0xA8CE..=0xA8CF,
    0xA8F8..=0xA8FA,
    0xA8FC..=0xA8FC,
    0xA92E..=0xA92F,
    0xA95F..=0xA95F,
    0xA9C1..=0xA9CD,
    0xA9DE..=0xA9DF,
    0xAA5C..=0xAA5F,
    0xAADE..=0xAADF,
    0xAAF0..=0xAAF1,
    0xABEB..=0xABEB,
    0xFD3E..=0xFD3F,
    0xFE10..=0xFE19,   // vertical forms
    0xFE30..=0xFE52,   // CJK compatibility forms
    0xFE54..=0xFE61,
    0xFE63..=0xFE63,
    0xFE68..=0xFE68,
    0xFE6A..=0xFE6B,
    0xFF01..=0xFF03,   // fullwidth punctuation
    0xFF05..=0xFF0A,
    0xFF0C..=0xFF0F,
    0xFF1A..=0xFF1B,
    0xFF1F..=0xFF20,
    0xFF3B..=0xFF3D,
    0xFF3F..=0xFF3F,
    0xFF5B..=0xFF5B,
    0xFF5D..=0xFF5D,
    0xFF5F..=0xFF65,
    0x10100..=0x10102,
    0x1039F..=0x1039F,
    0x10A50..=0x10A58,
    0x10AF0..=0x10AF6,
    0x11047..=0x1104D,
    0x110BE..=0x110C1,
    0x11141..=0x11143,
    0x111C5..=0x111C8,
    0x11238..=0x1123D,
    0x1144B..=0x1144F,
    0x115C1..=0x115D7,
    0x11641..=0x11643,
    0x1173C..=0x1173E,
    0x11C41..=0x11C45,
    0x12470..=0x12474,
    0x16A6E..=0x16A6F,
    0x16AF5..=0x16AF5,
    0x16B37..=0x16B3B,
    0x16B44..=0x16B44,
    0x1BC9F..=0x1BC9F,
    0x1E95E..=0x1E95F,
];

/// Check if a code point is punctuation: ASCII punctuation, or a Unicode
/// code point whose general category begins with P.
pub fn is_punctuation(c: char) -> bool {
    let cp = c as u32;
    if (0x21..=0x2F).contains(&cp)       // ! " # $ % & ' ( ) * + , - . /
        || (0x3A..=0x40).contains(&cp)   // : ; < = > ? @
        || (0x5B..=0x60).contains(&cp)   // [ \ ] ^ _ `
        || (0x7B..=0x7E).contains(&cp)   // { | } ~
    {
        return true;
    }
    if c.is_ascii() {
        return false;
    }
    PUNCTUATION_RANGES.iter().any(|r| r.contains(&cp))
}

/// CJK ideograph ranges. Each scalar in these ranges is split into its own
/// word by the pre-tokenizer.
const CJK_RANGES: &[RangeInclusive<u32>] = &[
    0x4E00..=0x9FFF,   // CJK Unified Ideographs
    0x3400..=0x4DBF,   // Extension A
    0x20000..=0x2A6DF, // Extension B
    0x2A700..=0x2B73F, // Extension C
    0x2B740..=0x2B81F, // Extension D
    0x2B820..=0x2CEAF, // Extension E
    0xF900..=0xFAFF,   // CJK Compatibility Ideographs
    0x2F800..=0x2FA1F, // Compatibility Supplement
];

/// Check if a code point is a CJK ideograph.
pub fn is_cjk(c: char) -> bool {
    let cp = c as u32;
    CJK_RANGES.iter().any(|r| r.contains(&cp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_control() {
        assert!(is_control('\0'));
        assert!(is_control('\t'));
        assert!(is_control('\u{7F}'));
        assert!(is_control('\u{85}'));
        assert!(!is_control('a'));
        assert!(!is_control(' '));
    }

    #[test]
    fn test_is_format() {
        assert!(is_format('\u{00AD}')); // soft hyphen
        assert!(is_format('\u{200B}')); // zero-width space
        assert!(is_format('\u{200D}')); // zero-width joiner
        assert!(is_format('\u{FEFF}')); // BOM
        assert!(!is_format('a'));
    }

    #[test]
    fn test_is_surrogate() {
        assert!(is_surrogate(0xD800));
        assert!(is_surrogate(0xDFFF));
        assert!(!is_surrogate(0xD7FF));
        assert!(!is_surrogate(0xE000));
    }

    #[test]
    fn test_is_private_use() {
        assert!(is_private_use('\u{E000}'));
        assert!(is_private_use('\u{F8FF}'));
        assert!(is_private_use('\u{F0000}'));
        assert!(!is_private_use('a'));
    }

    #[test]
    fn test_is_ignored_keeps_splitter_whitespace() {
        assert!(!is_ignored('\t'));
        assert!(!is_ignored('\n'));
        assert!(!is_ignored('\r'));
        assert!(is_ignored('\0'));
        assert!(is_ignored('\u{FFFD}'));
        assert!(is_ignored('\u{200D}'));
        assert!(is_ignored('\u{E000}'));
        assert!(!is_ignored('a'));
        assert!(!is_ignored(' '));
    }

    #[test]
    fn test_is_whitespace() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\r'));
        assert!(is_whitespace('\u{00A0}')); // no-break space
        assert!(is_whitespace('\u{2003}')); // em space
        assert!(is_whitespace('\u{3000}')); // ideographic space
        assert!(!is_whitespace('a'));
        // Zl/Zp line and paragraph separators are not word splitters
        assert!(!is_whitespace('\u{2028}'));
    }

    #[test]
    fn test_is_punctuation_ascii() {
        for c in "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~".chars() {
            assert!(is_punctuation(c), "{c:?} should be punctuation");
        }
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation('5'));
        assert!(!is_punctuation(' '));
    }

    #[test]
    fn test_is_punctuation_unicode() {
        assert!(is_punctuation('\u{2014}')); // em dash
        assert!(is_punctuation('\u{00BF}')); // inverted question mark
        assert!(is_punctuation('\u{3001}')); // CJK comma
        assert!(is_punctuation('\u{FF01}')); // fullwidth exclamation
        assert!(!is_punctuation('\u{00A2}')); // cent sign is a symbol
        assert!(!is_punctuation('\u{4E00}')); // CJK ideograph
    }

    #[test]
    fn test_is_cjk() {
        assert!(is_cjk('\u{4E00}'));
        assert!(is_cjk('\u{9FFF}'));
        assert!(is_cjk('\u{3400}'));
        assert!(is_cjk('\u{F900}'));
        assert!(is_cjk('\u{20000}'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('\u{3042}')); // hiragana is not split per-character
        assert!(!is_cjk('\u{AC00}')); // hangul syllables are not in the ranges
    }

    #[test]
    fn test_is_non_spacing_mark() {
        assert!(is_non_spacing_mark('\u{0301}')); // combining acute
        assert!(is_non_spacing_mark('\u{0300}')); // combining grave
        assert!(!is_non_spacing_mark('e'));
    }
}
