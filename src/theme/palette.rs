use ratatui::style::Color;

/// Colour roles a theme is derived from.
pub struct Palette {
    pub base: Color,
    pub surface: Color,
    pub surface_alt: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_faint: Color,
    pub heading: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub accent_strong: Color,
    pub code_bg: Color,
    pub code_fg: Color,
    pub note_bg: Color,
    pub note_fg: Color,
    pub error: Color,
    pub success: Color,
}

/// Linear blend of two `Rgb` colours; `t = 0.0` yields `a`.
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t) as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        _ => a,
    }
}
