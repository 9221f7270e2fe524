use crate::domain::layout::DocumentLayout;
use crate::domain::models::{Section, SectionId};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Margin {
    Rows(u16),
    Percent(u16),
}

impl Margin {
    fn resolve(self, viewport_height: u16) -> usize {
        match self {
            Margin::Rows(n) => usize::from(n),
            Margin::Percent(p) => usize::from(viewport_height) * usize::from(p.min(100)) / 100,
        }
    }
}

/// Inset applied to the viewport before intersecting. The top inset keeps
/// the header out of the band, the bottom one keeps the band in the upper
/// third of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMargin {
    pub top: Margin,
    pub bottom: Margin,
}

impl Default for RootMargin {
    fn default() -> Self {
        Self {
            top: Margin::Rows(3),
            bottom: Margin::Percent(66),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Target {
    id: SectionId,
    rows: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverEntry {
    pub id: SectionId,
    pub is_intersecting: bool,
}

/// Watches section anchors against the visible band of the document pane.
///
/// `observe` returns the targets whose intersecting state changed since the
/// previous call, in the order they were attached. The first call after
/// attaching reports every target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisibilityObserver {
    margin: RootMargin,
    targets: Vec<Target>,
    last: Option<Vec<bool>>,
}

impl VisibilityObserver {
    /// Observes every section that has an anchor in `layout`. Sections
    /// without an anchor are skipped and stay unobserved.
    #[must_use]
    pub fn attach(sections: &[Section], layout: &DocumentLayout, margin: RootMargin) -> Self {
        let targets = sections
            .iter()
            .filter_map(|s| {
                layout.anchor(&s.id).map(|a| Target {
                    id: s.id.clone(),
                    rows: a.start..a.end,
                })
            })
            .collect();
        Self {
            margin,
            targets,
            last: None,
        }
    }

    pub fn detach(&mut self) {
        self.targets.clear();
        self.last = None;
    }

    /// Refreshes target geometry after the document was re-flowed. The
    /// set of observed targets does not change.
    pub fn relayout(&mut self, layout: &DocumentLayout) {
        for target in &mut self.targets {
            if let Some(a) = layout.anchor(&target.id) {
                target.rows = a.start..a.end;
            }
        }
    }

    #[must_use]
    pub fn observed(&self) -> Vec<&SectionId> {
        self.targets.iter().map(|t| &t.id).collect()
    }

    #[must_use]
    pub fn visible_band(&self, scroll: usize, viewport_height: u16) -> Range<usize> {
        let top = scroll + self.margin.top.resolve(viewport_height);
        let bottom = (scroll + usize::from(viewport_height))
            .saturating_sub(self.margin.bottom.resolve(viewport_height));
        top..bottom.max(top)
    }

    pub fn observe(&mut self, scroll: usize, viewport_height: u16) -> Vec<ObserverEntry> {
        let band = self.visible_band(scroll, viewport_height);
        let now: Vec<bool> = self
            .targets
            .iter()
            .map(|t| !band.is_empty() && t.rows.start < band.end && band.start < t.rows.end)
            .collect();

        let mut entries = Vec::new();
        for (i, (target, &hit)) in self.targets.iter().zip(now.iter()).enumerate() {
            let changed = self
                .last
                .as_ref()
                .and_then(|prev| prev.get(i))
                .map_or(true, |&was| was != hit);
            if changed {
                entries.push(ObserverEntry {
                    id: target.id.clone(),
                    is_intersecting: hit,
                });
            }
        }

        self.last = Some(now);
        entries
    }
}
