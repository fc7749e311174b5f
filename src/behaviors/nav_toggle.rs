use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::page::PageHandle;
use crate::state::{NavAction, NavState};
use crate::util::listen;

/// Hamburger toggles the menu; following any menu link closes it.
pub fn install(page: &PageHandle) -> Result<()> {
    let trigger = page.nav_trigger()?;
    let menu = page.nav_menu()?;
    let nav = Rc::new(RefCell::new(NavState::default()));

    {
        let nav = nav.clone();
        let trigger_el = trigger.clone();
        let menu = menu.clone();
        listen(&trigger, "click", move |_| {
            let mut nav = nav.borrow_mut();
            nav.reduce(NavAction::Toggle);
            nav.apply(&trigger_el, &menu);
        })?;
    }

    for link in page.menu_links() {
        let nav = nav.clone();
        let trigger = trigger.clone();
        let menu = menu.clone();
        listen(&link, "click", move |_| {
            let mut nav = nav.borrow_mut();
            nav.reduce(NavAction::Close);
            nav.apply(&trigger, &menu);
        })?;
    }
    Ok(())
}
