//! Emoji and pictographic symbol detection.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Code point blocks treated as emoji or decorative symbols.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF), // Misc Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map
    (0x1F700, 0x1F77F), // Alchemical Symbols
    (0x1F780, 0x1F7FF), // Geometric Shapes Extended
    (0x1F800, 0x1F8FF), // Supplemental Arrows-C
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x1FA00, 0x1FA6F), // Chess Symbols
    (0x1FA70, 0x1FAFF), // Symbols and Pictographs Extended-A
    (0x2600, 0x26FF),   // Misc Symbols
    (0x2700, 0x27BF),   // Dingbats
    (0xFE00, 0xFE0F),   // Variation Selectors
    (0x1F000, 0x1F02F), // Mahjong Tiles
    (0x1F0A0, 0x1F0FF), // Playing Cards
];

/// Returns true if `c` is an emoji or pictographic symbol.
///
/// Anything in [`EMOJI_RANGES`] qualifies, as does any character whose general
/// category is Symbol, Other (`So`), which also covers marks such as `©` and `°`.
#[must_use]
pub fn is_emoji(c: char) -> bool {
    let cp = u32::from(c);
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
        || get_general_category(c) == GeneralCategory::OtherSymbol
}

#[cfg(test)]
#[path = "unicode_tests.rs"]
mod tests;
