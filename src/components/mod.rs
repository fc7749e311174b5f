pub mod location_card;
