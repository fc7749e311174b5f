use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node};

use crate::config::RevealTuning;
use crate::error::Result;
use crate::page::PageHandle;
use crate::state::RevealBook;
use crate::state::reveal::{hide, show};

/// Hide every card and fade each in the first time it scrolls into view.
/// Returns the number of observed cards.
pub fn install(page: &PageHandle, tuning: &RevealTuning) -> Result<usize> {
    let cards = page.cards()?;
    let book = Rc::new(RefCell::new(RevealBook::with_len(cards.len())));

    let callback = {
        let cards = cards.clone();
        Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let mut book = book.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(idx) = cards
                    .iter()
                    .position(|card| card.is_same_node(Some(target.unchecked_ref::<Node>())))
                else {
                    continue;
                };
                if book.report(idx, entry.is_intersecting()) {
                    show(&cards[idx]);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(tuning.threshold));
    init.set_root_margin(&tuning.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for card in &cards {
        hide(card);
        observer.observe(card);
    }
    Ok(cards.len())
}
