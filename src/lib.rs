pub mod adapters;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
pub mod test_helpers;
