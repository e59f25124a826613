//! The once a second loop. Single threaded. Signals only ever arrive as a message on a channel.
use chrono::Utc;
use chrono_tz::Tz;
use flume::RecvTimeoutError;
use hex_clock_core::config::Config;
use hex_clock_core::device::LedMatrix;
use hex_clock_core::frame::build_reading_frame;
use hex_clock_core::glyphs::GlyphTable;
use hex_clock_core::logging::{info, trace, warn};
use hex_clock_core::reading::TimeReading;
use hex_clock_core::shutdown::run_shutdown;

/// SIGINT and SIGTERM both end up here.
///
/// The channel only holds one message. Any signal after the first is dropped.
pub fn shutdown_channel() -> anyhow::Result<flume::Receiver<()>> {
    let (tx, rx) = flume::bounded(1);

    ctrlc::set_handler(move || {
        let _ = tx.try_send(());
    })?;

    Ok(rx)
}

/// the current time in `time_zone`
pub fn zoned_reading(time_zone: Tz) -> impl FnMut() -> TimeReading {
    move || TimeReading::from_time(&Utc::now().with_timezone(&time_zone))
}

/// Draw the clock until `shutdown` says to stop, then play the shutdown animation.
///
/// Waiting on `shutdown` is also the sleep between frames, so a signal is noticed straight away but
/// never in the middle of drawing.
pub fn run_clock<D, N>(
    device: &mut D,
    glyphs: &GlyphTable,
    config: &Config,
    mut now: N,
    shutdown: &flume::Receiver<()>,
) -> anyhow::Result<()>
where
    D: LedMatrix + ?Sized,
    N: FnMut() -> TimeReading,
{
    loop {
        let reading = now();

        trace!("{:?}", reading);

        let frame = build_reading_frame(glyphs, &reading, config.sweep_enabled)?;

        device.set_pixels(&frame)?;

        match shutdown.recv_timeout(config.refresh_period) {
            Ok(()) => {
                info!("shutdown requested");
                break;
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("signal handler went away");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    run_shutdown(device, config.shutdown_hold)?;

    Ok(())
}
