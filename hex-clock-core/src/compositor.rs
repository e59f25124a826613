//! Decides the color of every pixel. Lit pixels are the hour glyph. Unlit pixels are the background,
//! which fills up from left to right as the hour goes by.
use crate::geometry::WIDTH;
use smart_leds::RGB8;

/// Half intensity. 255 is way too bright on the Sense HAT.
pub const GLYPH_COLOR: RGB8 = RGB8 {
    r: 128,
    g: 128,
    b: 128,
};

/// What `time_of_day_color` actually returns.
pub const BACKGROUND_COLOR: RGB8 = RGB8 { r: 10, g: 0, b: 100 };

// Reference colors for a time of day ramp. Nothing blends between them yet.
pub const MIDNIGHT: RGB8 = RGB8 { r: 0, g: 0, b: 128 };
pub const DAWN: RGB8 = RGB8 {
    r: 200,
    g: 150,
    b: 70,
};
pub const MIDDAY: RGB8 = RGB8 {
    r: 40,
    g: 60,
    b: 60,
};
pub const DUSK: RGB8 = RGB8 {
    r: 250,
    g: 150,
    b: 50,
};

const WIDTH_F64: f64 = WIDTH as f64;

const HEX_DIGITS: [char; 12] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b'];

/// 12-hour time as a hex character, except midday is 'c' and midnight is '0'.
pub fn hour_label(hour: u32) -> char {
    if hour == 12 {
        return 'c';
    }

    HEX_DIGITS[(hour % 12) as usize]
}

/// How lit column `x` of the background is, from 0 to 1.
///
/// Half past the hour lights the left half of the matrix. The column the fill edge lands on
/// brightens in proportion to how far through that column the edge is.
///
/// Must stay `f64`. At some fill edges `f32` lands on the other side of a whole number and `dim`
/// truncates to a different step.
pub fn brightness(minute: u32, x: usize) -> f64 {
    let fill_position = minute as f64 / 60.0 * WIDTH_F64;
    let diff = fill_position - x as f64;

    if diff < 0.0 {
        0.0
    } else if diff < 1.0 {
        fill_position.fract()
    } else {
        1.0
    }
}

/// Scale every channel by `level` (0 to 1). Truncates.
pub fn dim(color: RGB8, level: f64) -> RGB8 {
    let scale = |c: u8| (c as f64 * level) as u8;

    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Always [`BACKGROUND_COLOR`]. The reference colors above are for a gradient that doesn't exist.
pub fn time_of_day_color(_hour_label: char, _minute: u32) -> RGB8 {
    BACKGROUND_COLOR
}

/// Lit pixels keep their foreground. Everything else gets the background.
///
/// This goes off the glyph bit, not the color, so a black foreground can't be mistaken for background.
pub fn background_if_unlit(lit: bool, foreground: RGB8, background: RGB8) -> RGB8 {
    if lit { foreground } else { background }
}

/// The final color of one pixel of the clock face.
pub fn pixel_color(x: usize, _y: usize, intensity: u8, hour_label: char, minute: u32) -> RGB8 {
    let background = dim(time_of_day_color(hour_label, minute), brightness(minute, x));

    background_if_unlit(intensity == 1, GLYPH_COLOR, background)
}
