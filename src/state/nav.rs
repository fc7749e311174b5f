// Mobile menu open/closed flag, mirrored onto the trigger and the menu
use crate::page::Styled;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Toggle,
    /// A menu link was followed; the menu closes whatever its state.
    Close,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn reduce(&mut self, action: NavAction) {
        self.open = match action {
            NavAction::Toggle => !self.open,
            NavAction::Close => false,
        };
    }

    pub fn apply<S: Styled + ?Sized>(&self, trigger: &S, menu: &S) {
        trigger.set_class(ACTIVE_CLASS, self.open);
        menu.set_class(ACTIVE_CLASS, self.open);
    }
}
