// Per-card reveal bookkeeping. Hidden -> Revealed, never back.
use crate::page::Styled;

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Default)]
pub struct RevealBook {
    states: Vec<RevealState>,
}

impl RevealBook {
    pub fn with_len(n: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; n],
        }
    }

    #[cfg(test)]
    pub fn state(&self, idx: usize) -> Option<RevealState> {
        self.states.get(idx).copied()
    }

    #[cfg(test)]
    pub fn revealed(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    /// Record an observer report. Returns true only on the first
    /// intersecting report for `idx`.
    pub fn report(&mut self, idx: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.states.get_mut(idx) {
            Some(state) if *state == RevealState::Hidden => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

pub fn hide<S: Styled + ?Sized>(card: &S) {
    card.set_style("opacity", HIDDEN_OPACITY);
    card.set_style("transform", HIDDEN_TRANSFORM);
    card.set_style("transition", REVEAL_TRANSITION);
}

pub fn show<S: Styled + ?Sized>(card: &S) {
    card.set_style("opacity", "1");
    card.set_style("transform", "translateY(0)");
}
