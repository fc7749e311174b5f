use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::page::PageHandle;
use crate::state::HeaderBar;
use crate::util::listen;

pub fn install(page: &PageHandle, elevate_after: f64) -> Result<()> {
    let bar_el = page.header_bar()?;
    let bar = Rc::new(RefCell::new(HeaderBar::new(elevate_after)));
    let window = page.window.clone();

    // correct before the first scroll event, e.g. after a reload mid-page
    bar.borrow_mut()
        .on_scroll(window.scroll_y().unwrap_or(0.0), &bar_el);

    let target = window.clone();
    listen(&target, "scroll", move |_| {
        let offset = window.scroll_y().unwrap_or(0.0);
        bar.borrow_mut().on_scroll(offset, &bar_el);
    })
}
