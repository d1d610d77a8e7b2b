pub mod availability;
pub mod day;
pub mod inventory;
pub mod range_search;
