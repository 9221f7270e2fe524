use crate::app::observer::VisibilityObserver;
use crate::domain::models::SectionId;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    /// Last clicked or most recently observed-visible section.
    pub active: SectionId,
    pub observer: VisibilityObserver,
}
