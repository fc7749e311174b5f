pub mod header;
pub mod nav;
pub mod reveal;

pub use header::HeaderBar;
pub use nav::{NavAction, NavState};
pub use reveal::RevealBook;
