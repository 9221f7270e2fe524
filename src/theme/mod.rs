use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod mkdocs;
pub mod palette;

pub use palette::{mix, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub base: Style,
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_hint: Style,

    pub sidebar: Style,
    pub sidebar_item: Style,
    pub sidebar_active: Style,

    pub toc: Style,
    pub toc_title: Style,
    pub toc_item: Style,
    pub toc_active: Style,

    pub doc_text: Style,
    pub doc_h1: Style,
    pub doc_h2: Style,
    pub doc_h3: Style,
    pub doc_rule: Style,
    pub doc_code: Style,
    pub doc_code_block: Style,
    pub doc_link: Style,
    pub doc_strong: Style,
    pub doc_note: Style,
    pub doc_note_bar: Style,
    pub scrollbar: Style,

    pub palette: Style,
    pub palette_prompt: Style,
    pub palette_query: Style,
    pub palette_placeholder: Style,
    pub palette_title: Style,
    pub palette_description: Style,
    pub palette_selected: Style,
    pub palette_empty: Style,
    pub backdrop: Style,

    pub footer: Style,
    pub footer_key: Style,
    pub footer_val: Style,
    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    Dark,
    Light,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Dark => "MkDocs Dark",
            PaletteType::Light => "MkDocs Light",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[PaletteType::Dark, PaletteType::Light]
    }

    #[must_use]
    pub fn next(self) -> PaletteType {
        let all = Self::all();
        let idx = all.iter().position(|p| *p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Dark => Self::from_palette(&mkdocs::dark()),
            PaletteType::Light => Self::from_palette(&mkdocs::light()),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        let base = Style::default().bg(p.base).fg(p.text);
        let surface = Style::default().bg(p.surface).fg(p.text);
        Self {
            base,
            border: Style::default().fg(p.border),
            border_focus: Style::default().fg(p.accent),

            header: base,
            header_logo: Style::default()
                .bg(p.base)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            header_hint: Style::default().bg(p.base).fg(p.text_faint),

            sidebar: surface,
            sidebar_item: surface,
            sidebar_active: Style::default()
                .bg(p.accent_soft)
                .fg(p.accent_strong)
                .add_modifier(Modifier::BOLD),

            toc: surface,
            toc_title: Style::default()
                .bg(p.surface)
                .fg(p.heading)
                .add_modifier(Modifier::BOLD),
            toc_item: Style::default().bg(p.surface).fg(p.text_muted),
            toc_active: Style::default()
                .bg(p.surface)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),

            doc_text: base,
            doc_h1: Style::default()
                .bg(p.base)
                .fg(p.heading)
                .add_modifier(Modifier::BOLD),
            doc_h2: Style::default()
                .bg(p.base)
                .fg(p.heading)
                .add_modifier(Modifier::BOLD),
            doc_h3: Style::default()
                .bg(p.base)
                .fg(p.heading)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            doc_rule: Style::default().bg(p.base).fg(p.border),
            doc_code: Style::default().bg(p.code_bg).fg(p.code_fg),
            doc_code_block: Style::default().bg(p.code_bg).fg(p.code_fg),
            doc_link: Style::default()
                .bg(p.base)
                .fg(p.accent)
                .add_modifier(Modifier::UNDERLINED),
            doc_strong: Style::default()
                .bg(p.note_bg)
                .fg(p.note_fg)
                .add_modifier(Modifier::BOLD),
            doc_note: Style::default().bg(p.note_bg).fg(p.note_fg),
            doc_note_bar: Style::default().bg(p.note_bg).fg(p.accent),
            scrollbar: Style::default().fg(p.text_faint),

            palette: surface,
            palette_prompt: Style::default().bg(p.surface).fg(p.text_faint),
            palette_query: Style::default().bg(p.surface).fg(p.heading),
            palette_placeholder: Style::default()
                .bg(p.surface)
                .fg(p.text_faint)
                .add_modifier(Modifier::ITALIC),
            palette_title: Style::default()
                .bg(p.surface)
                .fg(p.heading)
                .add_modifier(Modifier::BOLD),
            palette_description: Style::default().bg(p.surface).fg(p.text_muted),
            palette_selected: Style::default().bg(p.accent_soft).fg(p.accent_strong),
            palette_empty: Style::default().bg(p.surface).fg(p.text_faint),
            backdrop: Style::default().add_modifier(Modifier::DIM),

            footer: Style::default().bg(p.surface).fg(p.text_muted),
            footer_key: Style::default()
                .bg(p.surface_alt)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().bg(p.surface).fg(p.text_muted),
            status_ready: Style::default()
                .bg(p.success)
                .fg(p.base)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.accent)
                .fg(p.base)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.error)
                .fg(p.base)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycle() {
        assert_eq!(PaletteType::Dark.next(), PaletteType::Light);
        assert_eq!(PaletteType::Light.next(), PaletteType::Dark);
    }

    #[test]
    fn test_mix() {
        use ratatui::style::Color;
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(mix(Color::Red, b, 0.5), Color::Red);
    }
}
