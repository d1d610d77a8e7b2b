use std::str::FromStr;

use crate::error::CommandError;

/// A console request, parsed from text such as `Search(H1, 30, SGL)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `Availability(hotel, date, type)` or `Availability(hotel, start, end, type)`.
    /// The single-date form uses the date for both ends.
    Availability {
        hotel_id: String,
        start: String,
        end: String,
        room_type: String,
    },
    /// `Search(hotel, days, type)`.
    Search {
        hotel_id: String,
        days: u32,
        room_type: String,
    },
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("Availability(") {
            let args = arguments(rest).ok_or(CommandError::InvalidAvailability)?;
            return match args.as_slice() {
                [hotel_id, date, room_type] => Ok(Self::Availability {
                    hotel_id: (*hotel_id).to_string(),
                    start: (*date).to_string(),
                    end: (*date).to_string(),
                    room_type: (*room_type).to_string(),
                }),
                [hotel_id, start, end, room_type] => Ok(Self::Availability {
                    hotel_id: (*hotel_id).to_string(),
                    start: (*start).to_string(),
                    end: (*end).to_string(),
                    room_type: (*room_type).to_string(),
                }),
                _ => Err(CommandError::InvalidAvailability),
            };
        }

        if let Some(rest) = line.strip_prefix("Search(") {
            let args = arguments(rest).ok_or(CommandError::InvalidSearch)?;
            let [hotel_id, days, room_type] = args.as_slice() else {
                return Err(CommandError::InvalidSearch);
            };
            let days = days.parse().map_err(|_| CommandError::InvalidSearch)?;
            return Ok(Self::Search {
                hotel_id: (*hotel_id).to_string(),
                days,
                room_type: (*room_type).to_string(),
            });
        }

        Err(CommandError::UnknownCommand)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Comma-separated, trimmed arguments of `...)`; `None` without the `)`.
fn arguments(rest: &str) -> Option<Vec<&str>> {
    let inner = rest.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}
