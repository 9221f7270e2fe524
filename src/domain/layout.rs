use super::models::{Block, DocSection, Inline, SectionId};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Text,
    Code,
    Strong,
    Link,
    Heading(u8),
    Rule,
    CodeBlock,
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub kind: SpanKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Heading(u8),
    Body,
    Code,
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub kind: LineKind,
    pub fragments: Vec<Fragment>,
}

impl DocLine {
    fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            fragments: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// Rows `[start, end)` occupied by an anchored section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSpan {
    pub id: SectionId,
    pub start: usize,
    pub end: usize,
}

/// The document flowed into terminal rows at a fixed width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentLayout {
    pub width: u16,
    pub lines: Vec<DocLine>,
    pub anchors: Vec<AnchorSpan>,
}

const NOTE_PREFIX: &str = "│ ";
const CODE_INDENT: &str = "  ";

impl DocumentLayout {
    #[must_use]
    pub fn build(document: &[DocSection], width: u16) -> Self {
        let wrap_width = usize::from(width.max(1));
        let mut lines = Vec::new();
        let mut anchors = Vec::with_capacity(document.len());

        for (i, section) in document.iter().enumerate() {
            if i > 0 {
                lines.push(DocLine::blank());
            }
            let start = lines.len();
            for block in &section.blocks {
                layout_block(block, wrap_width, &mut lines);
                lines.push(DocLine::blank());
            }
            anchors.push(AnchorSpan {
                id: section.anchor.clone(),
                start,
                end: lines.len(),
            });
        }

        Self {
            width,
            lines,
            anchors,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn anchor(&self, id: &SectionId) -> Option<&AnchorSpan> {
        self.anchors.iter().find(|a| &a.id == id)
    }

    #[must_use]
    pub fn max_scroll(&self, viewport_height: u16) -> usize {
        self.lines.len().saturating_sub(usize::from(viewport_height))
    }
}

fn layout_block(block: &Block, width: usize, out: &mut Vec<DocLine>) {
    match block {
        Block::Heading { level, text } => {
            let kind = SpanKind::Heading(*level);
            for row in wrap(&[Fragment { text: text.clone(), kind }], width) {
                out.push(DocLine {
                    kind: LineKind::Heading(*level),
                    fragments: row,
                });
            }
            if *level <= 2 {
                let rule = if *level == 1 { "━" } else { "─" };
                out.push(DocLine {
                    kind: LineKind::Heading(*level),
                    fragments: vec![Fragment {
                        text: rule.repeat(width),
                        kind: SpanKind::Rule,
                    }],
                });
            }
        }
        Block::Paragraph { inlines } => {
            for row in wrap(&fragments(inlines), width) {
                out.push(DocLine {
                    kind: LineKind::Body,
                    fragments: row,
                });
            }
        }
        Block::Code { text } => {
            for line in text.lines() {
                out.push(DocLine {
                    kind: LineKind::Code,
                    fragments: vec![Fragment {
                        text: format!("{CODE_INDENT}{line}"),
                        kind: SpanKind::CodeBlock,
                    }],
                });
            }
        }
        Block::Note { inlines } => {
            let inner = width.saturating_sub(NOTE_PREFIX.width()).max(1);
            for mut row in wrap(&fragments(inlines), inner) {
                row.insert(
                    0,
                    Fragment {
                        text: NOTE_PREFIX.to_string(),
                        kind: SpanKind::Note,
                    },
                );
                out.push(DocLine {
                    kind: LineKind::Note,
                    fragments: row,
                });
            }
        }
    }
}

fn fragments(inlines: &[Inline]) -> Vec<Fragment> {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(s) => Fragment {
                text: s.clone(),
                kind: SpanKind::Text,
            },
            Inline::Code(s) => Fragment {
                text: s.clone(),
                kind: SpanKind::Code,
            },
            Inline::Strong(s) => Fragment {
                text: s.clone(),
                kind: SpanKind::Strong,
            },
            Inline::Link(s) => Fragment {
                text: s.clone(),
                kind: SpanKind::Link,
            },
        })
        .collect()
}

enum Piece {
    Word(Vec<Fragment>),
    Space(SpanKind),
}

fn push_char(frags: &mut Vec<Fragment>, c: char, kind: SpanKind) {
    match frags.last_mut() {
        Some(last) if last.kind == kind => last.text.push(c),
        _ => frags.push(Fragment {
            text: c.to_string(),
            kind,
        }),
    }
}

// Words glued across fragment boundaries ("`docs`," etc.) stay unbreakable.
fn pieces(input: &[Fragment]) -> Vec<Piece> {
    let mut out = Vec::new();
    let mut word: Vec<Fragment> = Vec::new();
    for frag in input {
        for c in frag.text.chars() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    out.push(Piece::Word(std::mem::take(&mut word)));
                }
                if !matches!(out.last(), Some(Piece::Space(_))) {
                    out.push(Piece::Space(frag.kind));
                }
            } else {
                push_char(&mut word, c, frag.kind);
            }
        }
    }
    if !word.is_empty() {
        out.push(Piece::Word(word));
    }
    out
}

fn fragments_width(frags: &[Fragment]) -> usize {
    frags.iter().map(|f| f.text.width()).sum()
}

/// Greedy word wrap over styled fragments.
fn wrap(input: &[Fragment], width: usize) -> Vec<Vec<Fragment>> {
    let mut rows: Vec<Vec<Fragment>> = Vec::new();
    let mut line: Vec<Fragment> = Vec::new();
    let mut line_width = 0;
    let mut pending_space: Option<SpanKind> = None;

    for piece in pieces(input) {
        match piece {
            Piece::Space(kind) => {
                if line_width > 0 {
                    pending_space = Some(kind);
                }
            }
            Piece::Word(word) => {
                let w = fragments_width(&word);
                let gap = usize::from(pending_space.is_some());
                if line_width > 0 && line_width + gap + w > width {
                    rows.push(std::mem::take(&mut line));
                    line_width = 0;
                    pending_space = None;
                }
                if let Some(kind) = pending_space.take() {
                    push_char(&mut line, ' ', kind);
                    line_width += 1;
                }
                if w <= width.saturating_sub(line_width) {
                    for frag in word {
                        line_width += frag.text.width();
                        for c in frag.text.chars() {
                            push_char(&mut line, c, frag.kind);
                        }
                    }
                } else {
                    // Longer than a whole row: hard break.
                    for frag in word {
                        for c in frag.text.chars() {
                            let cw = c.width().unwrap_or(0);
                            if line_width + cw > width && line_width > 0 {
                                rows.push(std::mem::take(&mut line));
                                line_width = 0;
                            }
                            push_char(&mut line, c, frag.kind);
                            line_width += cw;
                        }
                    }
                }
            }
        }
    }
    if !line.is_empty() || rows.is_empty() {
        rows.push(line);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::default_content;

    fn text(s: &str) -> Fragment {
        Fragment {
            text: s.to_string(),
            kind: SpanKind::Text,
        }
    }

    fn row_text(row: &[Fragment]) -> String {
        row.iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let rows = wrap(&[text("the quick brown fox jumps")], 10);
        let rows: Vec<String> = rows.iter().map(|r| row_text(r)).collect();
        assert_eq!(rows, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_keeps_glued_fragments_together() {
        let input = [
            text("named "),
            Fragment {
                text: "docs".to_string(),
                kind: SpanKind::Code,
            },
            text(", ok"),
        ];
        let rows = wrap(&input, 8);
        assert_eq!(row_text(&rows[0]), "named");
        assert_eq!(row_text(&rows[1]), "docs, ok");
        assert_eq!(rows[1][0].kind, SpanKind::Code);
        assert_eq!(rows[1][1].text, ", ok");
    }

    #[test]
    fn test_wrap_hard_breaks_long_words() {
        let rows = wrap(&[text("abcdefghij")], 4);
        let rows: Vec<String> = rows.iter().map(|r| row_text(r)).collect();
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_anchor_spans_cover_document_in_order() {
        let content = default_content();
        let layout = DocumentLayout::build(&content.document, 60);

        assert_eq!(layout.anchors.len(), content.document.len());
        assert_eq!(layout.anchors[0].start, 0);
        for pair in layout.anchors.windows(2) {
            assert!(pair[0].end <= pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
        assert_eq!(layout.anchors.last().unwrap().end, layout.len());

        let dev = layout.anchor(&"dev-server".into()).unwrap();
        assert_eq!(layout.lines[dev.start].text(), "Development Server");
        assert!(layout.anchor(&"missing".into()).is_none());
    }

    #[test]
    fn test_narrow_layout_is_longer() {
        let content = default_content();
        let wide = DocumentLayout::build(&content.document, 100);
        let narrow = DocumentLayout::build(&content.document, 30);
        assert!(narrow.len() > wide.len());
        for line in &narrow.lines {
            if line.kind != LineKind::Code {
                assert!(line.text().width() <= 30, "{:?}", line.text());
            }
        }
    }

    #[test]
    fn test_max_scroll() {
        let content = default_content();
        let layout = DocumentLayout::build(&content.document, 60);
        assert_eq!(layout.max_scroll(10), layout.len() - 10);
        assert_eq!(layout.max_scroll(u16::MAX), 0);
    }
}
