//! A sad face that fades out when the clock is asked to stop.
//!
//! The background starts dim grey and each channel drains at its own rate, so it drifts towards red
//! as green and blue run out first.
use crate::compositor::background_if_unlit;
use crate::device::LedMatrix;
use crate::errors::ClockResult;
use crate::frame::Frame;
use crate::geometry::{PIXELS, n_to_xy};
use crate::glyphs::Glyph;
use crate::logging::{debug, info};
use smart_leds::RGB8;
use smart_leds::colors::BLACK;
use std::thread::sleep;
use std::time::Duration;

pub const SAD_FACE: Glyph = Glyph::new([
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [1, 0, 0, 0, 0, 0, 0, 1],
]);

/// starting level of every background channel. also the level of the face itself
pub const INITIAL: f64 = 0.5;

/// higher is a faster fade
pub const SPEED: f64 = 2.0;

/// how much each of r, g, and b drops per frame
pub const DECREMENTS: [f64; 3] = [
    SPEED * INITIAL / 2000.0,
    SPEED * INITIAL / 1000.0,
    SPEED * INITIAL / 1500.0,
];

/// `[0, 1]` -> `[0, 255]`. Truncates.
fn channel(level: f64) -> u8 {
    (level * 255.0) as u8
}

/// the face is drawn at the same level the background starts at
pub fn face_color() -> RGB8 {
    let level = channel(INITIAL);

    RGB8 {
        r: level,
        g: level,
        b: level,
    }
}

/// Enough frames for the fastest channel to reach zero. There is no delay between them.
pub fn fade_frame_count() -> usize {
    let slowest = DECREMENTS.iter().copied().fold(f64::INFINITY, f64::min);

    ((INITIAL / slowest) / SPEED) as usize
}

/// Squaring the clamped level makes the fade look more even to the eye.
pub fn fade_color(levels: [f64; 3]) -> RGB8 {
    let [r, g, b] = levels.map(|x| channel(x.clamp(0.0, 1.0).powi(2)));

    RGB8 { r, g, b }
}

/// the sad face over a solid background
pub fn face_frame(background: RGB8) -> Frame {
    let face = face_color();

    let mut pixels = [BLACK; PIXELS];

    for (n, pixel) in pixels.iter_mut().enumerate() {
        let (x, y) = n_to_xy(n);

        *pixel = background_if_unlit(SAD_FACE.is_lit(x, y), face, background);
    }

    Frame(pixels)
}

/// Every frame of the fade, in order.
pub fn fade_frames() -> impl Iterator<Item = Frame> {
    (0..fade_frame_count()).scan([INITIAL; 3], |levels, _| {
        let frame = face_frame(fade_color(*levels));

        for (level, decrement) in levels.iter_mut().zip(DECREMENTS) {
            *level -= decrement;
        }

        Some(frame)
    })
}

/// Fade the sad face out, hold it, then clear the display.
///
/// This only returns once the display is blank. The caller is expected to exit right after.
pub fn run_shutdown<D: LedMatrix + ?Sized>(device: &mut D, hold: Duration) -> ClockResult<()> {
    info!("shutting down");

    debug!("fading over {} frames", fade_frame_count());

    for frame in fade_frames() {
        device.set_pixels(&frame)?;
    }

    sleep(hold);

    device.set_pixels(&face_frame(BLACK))?;

    sleep(hold);

    device.clear()?;

    info!("display cleared");

    Ok(())
}
