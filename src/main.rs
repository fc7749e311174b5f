mod behaviors;
mod components;
mod config;
mod controller;
mod error;
mod leaflet;
mod model;
mod page;
mod state;
mod util;

fn main() {
    if let Err(e) = controller::start() {
        util::cwarn(&format!("storefront controller did not start: {}", e));
    }
}
