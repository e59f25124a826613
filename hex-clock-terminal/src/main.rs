//! Shows the hour as a hex character on a Sense HAT, with the background filling up left to right as
//! the hour goes by. Falls back to drawing in the terminal when there's no hat.
//!
//! Run it with something like `nohup hex-clock &` and leave it running forever. SIGINT or SIGTERM
//! fades out a sad face, clears the display, and exits.
use anyhow::{Context, anyhow};
use chrono_tz::Tz;
use env_logger::Env;
use hex_clock_core::config::Config;
use hex_clock_core::device::LedMatrix;
use hex_clock_core::glyphs::GlyphTable;
use hex_clock_terminal::{SenseHat, TerminalMatrix, run_clock, shutdown_channel, zoned_reading};
use log::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_nanos()
        .init();

    info!("hello, world!");

    let config = Config::default();

    let time_zone: Tz = config
        .time_zone
        .parse()
        .map_err(|err| anyhow!("unknown time zone {:?}: {}", config.time_zone, err))?;

    let glyphs = GlyphTable::load(config.letters_path)
        .with_context(|| format!("loading glyphs from {}", config.letters_path))?;

    let shutdown = shutdown_channel().context("installing signal handler")?;

    let mut device: Box<dyn LedMatrix> =
        match SenseHat::open(config.rotation_degrees, config.low_light)? {
            Some(hat) => Box::new(hat),
            None => {
                warn!("no sense hat found. drawing in the terminal instead");
                Box::new(TerminalMatrix::stdout())
            }
        };

    debug!("time zone: {}", time_zone);

    run_clock(
        device.as_mut(),
        &glyphs,
        &config,
        zoned_reading(time_zone),
        &shutdown,
    )?;

    info!("goodbye");

    Ok(())
}
