//! ARGB color helpers for badges
//!
//! Colors are packed as `0xAARRGGBB`. Config files carry 24-bit `0xRRGGBB`
//! values; every badge color leaving the resolver has its alpha forced opaque.

use crate::constants::color::{MIN_CHANNEL, OPAQUE_ALPHA, RGB_MASK};

/// Force the alpha byte of `rgb` to fully opaque
pub fn opaque(rgb: u32) -> u32 {
    OPAQUE_ALPHA | rgb
}

/// 32-bit polynomial string hash over UTF-16 code units (`h = 31*h + unit`)
///
/// Stable across platforms and releases, unlike `std::hash`, so the same
/// badge text always gets the same color.
pub fn text_hash(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Derive a readable 24-bit color from badge text
///
/// Each channel is an 8-bit slice of [`text_hash`], floored at
/// [`MIN_CHANNEL`] so dark backgrounds never swallow the badge.
pub fn color_from_name(text: &str) -> u32 {
    let hash = text_hash(text);
    let r = ((hash >> 16) & 0xFF).max(MIN_CHANNEL);
    let g = ((hash >> 8) & 0xFF).max(MIN_CHANNEL);
    let b = (hash & 0xFF).max(MIN_CHANNEL);
    ((r << 16) | (g << 8) | b) & RGB_MASK
}

/// Scale the RGB channels of an ARGB color by `factor`, keeping alpha
pub fn darken(argb: u32, factor: f32) -> u32 {
    let alpha = (argb >> 24) & 0xFF;
    let scale = |channel: u32| ((channel & 0xFF) as f32 * factor) as u32;
    let red = scale(argb >> 16);
    let green = scale(argb >> 8);
    let blue = scale(argb);
    (alpha << 24) | (red << 16) | (green << 8) | blue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sets_alpha() {
        assert_eq!(opaque(0x55FF55), 0xFF55FF55);
        assert_eq!(opaque(0), 0xFF000000);
    }

    #[test]
    fn test_text_hash_matches_polynomial() {
        // 'A' = 65, 'x' = 120, 'e' = 101 → ((65 * 31) + 120) * 31 + 101
        assert_eq!(text_hash("Axe"), 66286);
        assert_eq!(text_hash(""), 0);
    }

    #[test]
    fn test_text_hash_wraps() {
        assert_eq!(text_hash("Pickaxes"), 0xD7CD_D2E6);
    }

    #[test]
    fn test_color_from_name_floors_channels() {
        // 66286 = 0x0102EE → red and green below the floor
        assert_eq!(color_from_name("Axe"), 0x4040EE);
        assert_eq!(color_from_name("Favorite"), 0x7C40BC);
    }

    #[test]
    fn test_color_from_name_deterministic_and_bright() {
        for text in ["Axe", "Pickaxes", "Ore Block", "", "Ünïcödé"] {
            let first = color_from_name(text);
            assert_eq!(first, color_from_name(text));
            assert!((first >> 16) & 0xFF >= MIN_CHANNEL);
            assert!((first >> 8) & 0xFF >= MIN_CHANNEL);
            assert!(first & 0xFF >= MIN_CHANNEL);
            assert_eq!(first & !RGB_MASK, 0);
        }
    }

    #[test]
    fn test_darken_keeps_alpha() {
        assert_eq!(darken(0xFF4040EE, 0.85), 0xFF3636CA);
        assert_eq!(darken(0x80FFFFFF, 0.0), 0x80000000);
        assert_eq!(darken(0xFF123456, 1.0), 0xFF123456);
    }
}
