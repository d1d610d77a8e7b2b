use std::collections::HashMap;

use tracing::debug;

use super::day::DayIteration;
use super::inventory::Inventory;

/// Breakdown of a single availability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityReport {
    /// Rooms of the requested type at the hotel.
    pub capacity: usize,
    /// Highest number of overlapping bookings on any day they occupy.
    pub peak_load: usize,
    /// `capacity - peak_load`; negative when the room type is oversold.
    pub available: i64,
}

/// Counts free rooms over an [`Inventory`] snapshot.
///
/// The engine only borrows the snapshot, so any number of engines may query
/// the same inventory from different threads.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityEngine<'a> {
    inventory: &'a Inventory,
    iteration: DayIteration,
}

impl<'a> AvailabilityEngine<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self {
            inventory,
            iteration: DayIteration::default(),
        }
    }

    #[must_use]
    pub fn with_day_iteration(mut self, iteration: DayIteration) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn inventory(&self) -> &'a Inventory {
        self.inventory
    }

    pub fn day_iteration(&self) -> DayIteration {
        self.iteration
    }

    /// Rooms of `room_type` still free at `hotel_id` over `[start, end]`.
    ///
    /// Unknown hotels and room types have zero capacity, so the result is
    /// never an error, only a number that may be zero or negative.
    pub fn availability(&self, hotel_id: &str, start: &str, end: &str, room_type: &str) -> i64 {
        self.check(hotel_id, start, end, room_type).available
    }

    pub fn check(
        &self,
        hotel_id: &str,
        start: &str,
        end: &str,
        room_type: &str,
    ) -> AvailabilityReport {
        let capacity = self.inventory.capacity(hotel_id, room_type);
        let peak_load = self.peak_load(hotel_id, start, end, room_type);
        let available = to_i64(capacity) - to_i64(peak_load);

        debug!(hotel_id, room_type, start, end, capacity, peak_load, available, "availability");

        AvailabilityReport {
            capacity,
            peak_load,
            available,
        }
    }

    // Counters cover every day an overlapping booking occupies, including
    // days outside [start, end].
    fn peak_load(&self, hotel_id: &str, start: &str, end: &str, room_type: &str) -> usize {
        let mut booked: HashMap<i64, usize> = HashMap::new();

        for booking in self
            .inventory
            .bookings_for(hotel_id, room_type)
            .filter(|b| b.overlaps(start, end))
        {
            let Some(days) = self
                .iteration
                .occupied_days(&booking.arrival, &booking.departure)
            else {
                debug!(
                    arrival = %booking.arrival,
                    departure = %booking.departure,
                    mode = %self.iteration,
                    "Skipping booking with unreadable day identifiers"
                );
                continue;
            };
            for day in days {
                *booked.entry(day).or_insert(0) += 1;
            }
        }

        booked.into_values().max().unwrap_or(0)
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
