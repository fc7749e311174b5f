// Header shadow depth as a function of the vertical scroll offset
use crate::page::Styled;

pub const RESTING_SHADOW: &str = "0 4px 6px rgba(0, 0, 0, 0.1)";
pub const ELEVATED_SHADOW: &str = "0 4px 6px rgba(0, 0, 0, 0.15)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderDepth {
    Resting,
    Elevated,
}

impl HeaderDepth {
    pub fn for_offset(offset: f64, elevate_after: f64) -> Self {
        if offset > elevate_after {
            HeaderDepth::Elevated
        } else {
            HeaderDepth::Resting
        }
    }

    pub fn shadow(self) -> &'static str {
        match self {
            HeaderDepth::Resting => RESTING_SHADOW,
            HeaderDepth::Elevated => ELEVATED_SHADOW,
        }
    }
}

/// Remembers the depth last written so repeated scroll events at the same
/// depth leave the element alone.
#[derive(Debug, Clone)]
pub struct HeaderBar {
    pub elevate_after: f64,
    pub applied: Option<HeaderDepth>,
}

impl HeaderBar {
    pub fn new(elevate_after: f64) -> Self {
        Self {
            elevate_after,
            applied: None,
        }
    }

    pub fn on_scroll<S: Styled + ?Sized>(&mut self, offset: f64, bar: &S) {
        let depth = HeaderDepth::for_offset(offset, self.elevate_after);
        if self.applied != Some(depth) {
            bar.set_style("box-shadow", depth.shadow());
            self.applied = Some(depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::FakeNode;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(HeaderDepth::for_offset(0.0, 100.0), HeaderDepth::Resting);
        assert_eq!(HeaderDepth::for_offset(100.0, 100.0), HeaderDepth::Resting);
        assert_eq!(HeaderDepth::for_offset(100.5, 100.0), HeaderDepth::Elevated);
        assert_eq!(HeaderDepth::for_offset(4000.0, 100.0), HeaderDepth::Elevated);
    }

    #[test]
    fn style_follows_offset_in_any_direction() {
        let bar = FakeNode::default();
        let mut header = HeaderBar::new(100.0);
        for (offset, expected) in [
            (0.0, RESTING_SHADOW),
            (250.0, ELEVATED_SHADOW),
            (90.0, RESTING_SHADOW),
            (101.0, ELEVATED_SHADOW),
            (100.0, RESTING_SHADOW),
        ] {
            header.on_scroll(offset, &bar);
            assert_eq!(bar.style("box-shadow").as_deref(), Some(expected), "offset {}", offset);
        }
    }

    #[test]
    fn same_depth_writes_once() {
        let bar = FakeNode::default();
        let mut header = HeaderBar::new(100.0);
        header.on_scroll(200.0, &bar);
        header.on_scroll(300.0, &bar);
        header.on_scroll(400.0, &bar);
        assert_eq!(*bar.style_writes.borrow(), 1);
    }
}
