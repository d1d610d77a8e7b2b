use std::io::{BufRead, Write};

use tracing::debug;

use super::command::Command;
use crate::domain::availability::AvailabilityEngine;
use crate::domain::range_search::{format_ranges, search};
use crate::error::Result;
use crate::ports::clock::Clock;

pub const BANNER: &str = "Enter commands (Availability or Search). Press Enter to exit.";
pub const PROMPT: &str = "Enter command: ";

/// Line-oriented command loop over any reader/writer pair.
///
/// Stops on end of input or on an empty line. Rejected commands print their
/// error and the loop carries on.
pub struct Console<'a, R, W> {
    engine: AvailabilityEngine<'a>,
    clock: &'a dyn Clock,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(engine: AvailabilityEngine<'a>, clock: &'a dyn Clock, input: R, output: W) -> Self {
        Self {
            engine,
            clock,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{BANNER}")?;
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let request = line.trim();
            if request.is_empty() {
                break;
            }

            let response = self.respond(request);
            writeln!(self.output, "{response}")?;
        }
        Ok(())
    }

    /// The text printed for one request line.
    pub fn respond(&self, line: &str) -> String {
        match Command::parse(line) {
            Ok(command) => self.execute(&command),
            Err(e) => {
                debug!(line, "Rejected command: {e}");
                e.to_string()
            }
        }
    }

    pub fn execute(&self, command: &Command) -> String {
        match command {
            Command::Availability {
                hotel_id,
                start,
                end,
                room_type,
            } => self
                .engine
                .availability(hotel_id, start, end, room_type)
                .to_string(),
            Command::Search {
                hotel_id,
                days,
                room_type,
            } => {
                let ranges = search(
                    &self.engine,
                    hotel_id,
                    *days,
                    room_type,
                    self.clock.today(),
                );
                format_ranges(&ranges)
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
