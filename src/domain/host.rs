use super::layout::DocumentLayout;
use super::models::SectionId;

/// What the navigation controller needs from whatever renders the document.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollHost {
    /// First row of the anchor, if the anchor is laid out.
    fn anchor_row(&self, id: &SectionId) -> Option<usize>;

    /// Largest scroll offset for a viewport of the given height.
    fn max_scroll(&self, viewport_height: u16) -> usize;
}

impl ScrollHost for DocumentLayout {
    fn anchor_row(&self, id: &SectionId) -> Option<usize> {
        self.anchor(id).map(|a| a.start)
    }

    fn max_scroll(&self, viewport_height: u16) -> usize {
        DocumentLayout::max_scroll(self, viewport_height)
    }
}
