pub mod clock;
pub mod inventory_source;
