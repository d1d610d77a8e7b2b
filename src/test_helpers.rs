use chrono::NaiveDate;

use crate::domain::inventory::{Booking, Hotel, Inventory, Room};

pub fn hotel(id: &str, rooms: &[(&str, &str)]) -> Hotel {
    Hotel {
        id: id.into(),
        name: None,
        rooms: rooms
            .iter()
            .map(|(room_id, room_type)| Room {
                room_id: (*room_id).into(),
                room_type: (*room_type).into(),
            })
            .collect(),
    }
}

pub fn booking(hotel_id: &str, room_type: &str, arrival: &str, departure: &str) -> Booking {
    Booking {
        hotel_id: hotel_id.into(),
        room_type: room_type.into(),
        arrival: arrival.into(),
        departure: departure.into(),
        room_rate: None,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Two hotels, six rooms, four bookings in September 2024.
///
/// H1 DBL is booked once on 01 Sep, twice on 02 Sep and once on 03-04 Sep.
pub fn sample_inventory() -> Inventory {
    Inventory::new(
        vec![
            hotel(
                "H1",
                &[
                    ("101", "SGL"),
                    ("102", "SGL"),
                    ("201", "DBL"),
                    ("202", "DBL"),
                    ("203", "DBL"),
                ],
            ),
            hotel("H2", &[("301", "SGL")]),
        ],
        vec![
            booking("H1", "DBL", "20240901", "20240903"),
            booking("H1", "DBL", "20240902", "20240905"),
            booking("H1", "SGL", "20240901", "20240902"),
            booking("H2", "SGL", "20240910", "20240912"),
        ],
    )
}

/// Three `standard` rooms at H1 and one two-night booking from 10 Jan 2025.
pub fn standard_inventory() -> Inventory {
    Inventory::new(
        vec![hotel(
            "H1",
            &[("1", "standard"), ("2", "standard"), ("3", "standard")],
        )],
        vec![booking("H1", "standard", "20250110", "20250112")],
    )
}
