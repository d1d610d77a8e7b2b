use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::inventory::{Booking, Hotel, Inventory};
use crate::error::{DataKind, HotelError, Result};
use crate::ports::inventory_source::InventorySource;

/// Reads hotels and bookings from two JSON array files.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    hotels_path: PathBuf,
    bookings_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(hotels_path: impl Into<PathBuf>, bookings_path: impl Into<PathBuf>) -> Self {
        Self {
            hotels_path: hotels_path.into(),
            bookings_path: bookings_path.into(),
        }
    }

    pub fn hotels_path(&self) -> &Path {
        &self.hotels_path
    }

    pub fn bookings_path(&self) -> &Path {
        &self.bookings_path
    }
}

impl InventorySource for JsonFileSource {
    fn load(&self) -> Result<Inventory> {
        let hotels = parse_hotels(&read_data_file(&self.hotels_path, DataKind::Hotels)?)?;
        let bookings = parse_bookings(&read_data_file(&self.bookings_path, DataKind::Bookings)?)?;

        let inventory = Inventory::new(hotels, bookings);
        info!(
            hotels = %self.hotels_path.display(),
            bookings = %self.bookings_path.display(),
            "Loaded inventory: {inventory}"
        );
        Ok(inventory)
    }
}

pub fn parse_hotels(json: &str) -> Result<Vec<Hotel>> {
    serde_json::from_str(json).map_err(|source| HotelError::InvalidJson {
        kind: DataKind::Hotels,
        source,
    })
}

pub fn parse_bookings(json: &str) -> Result<Vec<Booking>> {
    serde_json::from_str(json).map_err(|source| HotelError::InvalidJson {
        kind: DataKind::Bookings,
        source,
    })
}

fn read_data_file(path: &Path, kind: DataKind) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HotelError::DataFileNotFound {
                kind,
                path: path.to_path_buf(),
            }
        } else {
            HotelError::Io(e)
        }
    })
}
