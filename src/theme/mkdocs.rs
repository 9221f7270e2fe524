use super::palette::{mix, Palette};
use ratatui::style::Color;

// Purple scale of the site's brand colours.
pub const PURPLE_50: Color = Color::Rgb(0xF8, 0xF6, 0xFE);
pub const PURPLE_100: Color = Color::Rgb(0xEB, 0xE5, 0xFD);
pub const PURPLE_300: Color = Color::Rgb(0xC3, 0xB1, 0xFA);
pub const PURPLE_400: Color = Color::Rgb(0xAF, 0x97, 0xF8);
pub const PURPLE_600: Color = Color::Rgb(0x5E, 0x50, 0xA0);
pub const PURPLE_700: Color = Color::Rgb(0x36, 0x2B, 0x6B);
pub const PURPLE_900: Color = Color::Rgb(0x1B, 0x0A, 0x38);

const GRAY_50: Color = Color::Rgb(0xF9, 0xFA, 0xFB);
const GRAY_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
const GRAY_200: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
const GRAY_300: Color = Color::Rgb(0xD1, 0xD5, 0xDB);
const GRAY_400: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
const GRAY_500: Color = Color::Rgb(0x6B, 0x72, 0x80);
const GRAY_600: Color = Color::Rgb(0x4B, 0x55, 0x63);
const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51);
const GRAY_800: Color = Color::Rgb(0x1F, 0x29, 0x37);
const GRAY_900: Color = Color::Rgb(0x11, 0x18, 0x27);

const BLUE_200: Color = Color::Rgb(0xBF, 0xDB, 0xFE);
const BLUE_800: Color = Color::Rgb(0x1E, 0x40, 0xAF);
const BLUE_900: Color = Color::Rgb(0x1E, 0x3A, 0x8A);

const RED_500: Color = Color::Rgb(0xEF, 0x44, 0x44);
const GREEN_500: Color = Color::Rgb(0x22, 0xC5, 0x5E);

pub fn dark() -> Palette {
    Palette {
        base: GRAY_900,
        surface: GRAY_800,
        surface_alt: GRAY_700,
        border: GRAY_700,
        text: GRAY_300,
        text_muted: GRAY_400,
        text_faint: GRAY_500,
        heading: Color::Rgb(0xFF, 0xFF, 0xFF),
        accent: PURPLE_400,
        accent_soft: mix(PURPLE_900, GRAY_800, 0.3),
        accent_strong: PURPLE_300,
        code_bg: GRAY_800,
        code_fg: GRAY_200,
        note_bg: mix(BLUE_900, GRAY_900, 0.8),
        note_fg: BLUE_200,
        error: RED_500,
        success: GREEN_500,
    }
}

pub fn light() -> Palette {
    Palette {
        base: Color::Rgb(0xFF, 0xFF, 0xFF),
        surface: GRAY_50,
        surface_alt: GRAY_100,
        border: GRAY_200,
        text: GRAY_700,
        text_muted: GRAY_600,
        text_faint: GRAY_500,
        heading: GRAY_900,
        accent: PURPLE_600,
        accent_soft: PURPLE_100,
        accent_strong: PURPLE_700,
        code_bg: GRAY_100,
        code_fg: GRAY_800,
        note_bg: mix(BLUE_200, PURPLE_50, 0.6),
        note_fg: BLUE_800,
        error: RED_500,
        success: GREEN_500,
    }
}
