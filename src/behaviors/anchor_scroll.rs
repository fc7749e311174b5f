use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::error::Result;
use crate::model::{fragment_id, scroll_destination};
use crate::page::PageHandle;
use crate::util::listen;

/// Where a click on `href` should scroll to, given a lookup from element id
/// to document-relative top. `None` means stay put.
pub fn anchor_target<F>(href: &str, top_of: F, header_offset: f64) -> Option<f64>
where
    F: Fn(&str) -> Option<f64>,
{
    let id = fragment_id(href)?;
    top_of(id).map(|top| scroll_destination(top, header_offset))
}

/// Smooth in-page navigation for every `#fragment` link. Returns how many
/// links were wired.
pub fn install(page: &PageHandle, header_offset: f64) -> Result<usize> {
    let links = page.fragment_links();
    for link in &links {
        let page = page.clone();
        let anchor = link.clone();
        listen(link, "click", move |e| {
            e.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(top) = anchor_target(&href, |id| page.top_of_id(id), header_offset) else {
                return;
            };
            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            page.window.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    Ok(links.len())
}
