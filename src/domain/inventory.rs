use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: String,
    pub room_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub rooms: Vec<Room>,
}

/// A reservation against a room type, not a specific room.
///
/// The stay occupies one unit of capacity on every day in
/// `[arrival, departure)`. Day identifiers are compared as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub hotel_id: String,
    pub room_type: String,
    pub arrival: String,
    pub departure: String,
    #[serde(default)]
    pub room_rate: Option<String>,
}

impl Booking {
    pub fn matches(&self, hotel_id: &str, room_type: &str) -> bool {
        self.hotel_id == hotel_id && self.room_type == room_type
    }

    /// Whether the stay touches the window `[start, end]`.
    ///
    /// Arrival is inclusive and departure exclusive: a booking leaving on
    /// `start` does not overlap, one arriving on `end` does.
    pub fn overlaps(&self, start: &str, end: &str) -> bool {
        !(self.departure.as_str() <= start || self.arrival.as_str() > end)
    }
}

/// Read-only snapshot of every hotel and booking known to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    hotels: Vec<Hotel>,
    bookings: Vec<Booking>,
}

impl Inventory {
    pub fn new(hotels: Vec<Hotel>, bookings: Vec<Booking>) -> Self {
        Self { hotels, bookings }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Number of rooms of `room_type` across every hotel with id `hotel_id`.
    pub fn capacity(&self, hotel_id: &str, room_type: &str) -> usize {
        self.hotels
            .iter()
            .filter(|h| h.id == hotel_id)
            .flat_map(|h| &h.rooms)
            .filter(|r| r.room_type == room_type)
            .count()
    }

    pub fn bookings_for<'a>(
        &'a self,
        hotel_id: &'a str,
        room_type: &'a str,
    ) -> impl Iterator<Item = &'a Booking> + 'a {
        self.bookings
            .iter()
            .filter(move |b| b.matches(hotel_id, room_type))
    }

    pub fn room_count(&self) -> usize {
        self.hotels.iter().map(|h| h.rooms.len()).sum()
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} hotels, {} rooms, {} bookings",
            self.hotels.len(),
            self.room_count(),
            self.bookings.len()
        )
    }
}
