/// Geometry and scroll position of the document pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    pub scroll: usize,
    /// Destination of an in-flight smooth scroll.
    pub target: Option<usize>,
    pub width: u16,
    pub height: u16,
}

impl ViewportState {
    /// Advances a smooth scroll by a quarter of the remaining distance.
    /// Returns true if the scroll offset changed.
    pub fn step_animation(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.scroll);
        if distance == 0 {
            self.target = None;
            return false;
        }
        let step = distance.div_ceil(4).max(1);
        if target > self.scroll {
            self.scroll += step;
        } else {
            self.scroll -= step;
        }
        if self.scroll == target {
            self.target = None;
        }
        true
    }
}
