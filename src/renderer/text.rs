//! Bitmap font metrics
//!
//! The font is a single strip of square glyphs: `a`-`z` followed by `0`-`9`.
//! Text is drawn lowercase; spaces advance without drawing.

/// Glyph edge in font pixels
pub const FONT_CHAR_SIZE: i32 = 4;
/// Gap after each glyph in font pixels
pub const FONT_GAP_SIZE: i32 = 1;

/// Width in screen pixels of `text` drawn at `size`
pub fn string_width(text: &str, size: i32) -> i32 {
    text.chars().count() as i32 * (FONT_CHAR_SIZE + FONT_GAP_SIZE) * size
}

/// Height in screen pixels of a line drawn at `size`
pub fn string_height(size: i32) -> i32 {
    FONT_CHAR_SIZE * size
}

/// Horizontal distance between consecutive glyph origins
pub fn advance(size: i32) -> i32 {
    (FONT_CHAR_SIZE + FONT_GAP_SIZE) * size
}

/// Position of a character in the font strip
pub fn glyph_index(c: char) -> Option<usize> {
    match c.to_ascii_lowercase() {
        c @ 'a'..='z' => Some(c as usize - 'a' as usize),
        c @ '0'..='9' => Some(26 + c as usize - '0' as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        assert_eq!(string_width("12", 12), 120);
        assert_eq!(string_width("", 8), 0);
        assert_eq!(string_height(8), 32);
        assert_eq!(advance(2), 10);
    }

    #[test]
    fn test_glyph_index() {
        assert_eq!(glyph_index('a'), Some(0));
        assert_eq!(glyph_index('Z'), Some(25));
        assert_eq!(glyph_index('0'), Some(26));
        assert_eq!(glyph_index('9'), Some(35));
        assert_eq!(glyph_index(' '), None);
        assert_eq!(glyph_index('!'), None);
    }
}
