pub mod anchor_scroll;
pub mod fade_in;
pub mod header_bar;
pub mod map_loader;
pub mod nav_toggle;
pub mod reveal;
