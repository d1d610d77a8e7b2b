use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use hotel_availability::adapters::clock::SystemClock;
use hotel_availability::adapters::json_file::JsonFileSource;
use hotel_availability::config::{find_config_path, load_config};
use hotel_availability::console::repl::Console;
use hotel_availability::domain::availability::AvailabilityEngine;
use hotel_availability::ports::inventory_source::InventorySource;

#[derive(StructOpt, Debug)]
#[structopt(name = "hotel-availability")]
struct Opt {
    /// Hotels JSON file (overrides `data.hotels_path`)
    #[structopt(long, parse(from_os_str))]
    hotels: Option<PathBuf>,

    /// Bookings JSON file (overrides `data.bookings_path`)
    #[structopt(long, parse(from_os_str))]
    bookings: Option<PathBuf>,

    /// YAML config file (default: config.yaml)
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout is the console transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let opt = Opt::from_args();

    let config_path = opt.config.unwrap_or_else(find_config_path);
    let config = load_config(&config_path)?;

    let source = JsonFileSource::new(
        opt.hotels.unwrap_or(config.data.hotels_path),
        opt.bookings.unwrap_or(config.data.bookings_path),
    );
    let inventory = match source.load() {
        Ok(inventory) => inventory,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            eprintln!("Exiting due to previous errors.");
            std::process::exit(1);
        }
    };

    tracing::info!(
        day_iteration = %config.engine.day_iteration,
        "Starting console"
    );
    let engine =
        AvailabilityEngine::new(&inventory).with_day_iteration(config.engine.day_iteration);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(engine, &SystemClock, stdin.lock(), stdout.lock());
    console.run()?;

    Ok(())
}
