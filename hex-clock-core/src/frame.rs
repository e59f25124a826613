use crate::compositor::pixel_color;
use crate::errors::ClockResult;
use crate::geometry::{Grid, PIXELS, WIDTH, n_to_xy, xy_to_n};
use crate::glyphs::{Glyph, GlyphTable};
use crate::reading::TimeReading;
use itertools::iproduct;
use smart_leds::RGB8;
use smart_leds::colors::BLACK;

/// One full update of the matrix. Row-major, so `n == y * 8 + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame(pub [RGB8; PIXELS]);

impl Default for Frame {
    fn default() -> Self {
        Self::filled(BLACK)
    }
}

impl Frame {
    pub const fn filled(color: RGB8) -> Self {
        Self([color; PIXELS])
    }

    pub fn get(&self, x: usize, y: usize) -> RGB8 {
        self.0[xy_to_n(x, y)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RGB8> {
        self.0.iter()
    }

    pub fn to_grid(&self) -> Grid<RGB8> {
        let mut grid = [[BLACK; WIDTH]; WIDTH];

        for (n, &color) in self.0.iter().enumerate() {
            let (x, y) = n_to_xy(n);
            grid[y][x] = color;
        }

        grid
    }

    pub fn from_grid(grid: &Grid<RGB8>) -> Self {
        let mut pixels = [BLACK; PIXELS];

        for (y, x) in iproduct!(0..WIDTH, 0..WIDTH) {
            pixels[xy_to_n(x, y)] = grid[y][x];
        }

        Self(pixels)
    }
}

/// Build the clock face for one tick.
///
/// With `rotate`, the glyph first turns clockwise by `second` quarter turns. That repeats every 4
/// seconds. It is a sweep effect, not an angle.
pub fn build_frame(glyph: &Glyph, hour_label: char, minute: u32, second: u32, rotate: bool) -> Frame {
    let glyph = if rotate {
        glyph.rotated(-(second as i32))
    } else {
        *glyph
    };

    let mut pixels = [BLACK; PIXELS];

    for (y, x) in iproduct!(0..WIDTH, 0..WIDTH) {
        pixels[xy_to_n(x, y)] = pixel_color(x, y, glyph.intensity(x, y), hour_label, minute);
    }

    Frame(pixels)
}

/// Look up the glyph for `reading` and build its frame.
pub fn build_reading_frame(
    glyphs: &GlyphTable,
    reading: &TimeReading,
    sweep_enabled: bool,
) -> ClockResult<Frame> {
    let glyph = glyphs.get(reading.hour_label)?;

    Ok(build_frame(
        glyph,
        reading.hour_label,
        reading.minute,
        reading.second,
        sweep_enabled,
    ))
}

#[cfg(test)]
mod tests {
    use super::{Frame, build_frame, build_reading_frame};
    use crate::compositor::{BACKGROUND_COLOR, GLYPH_COLOR};
    use crate::errors::ClockError;
    use crate::geometry::{PIXELS, WIDTH};
    use crate::glyphs::{Glyph, GlyphTable};
    use crate::reading::TimeReading;
    use crate::testing::letters_path;
    use proptest::prelude::*;
    use smart_leds::colors::BLACK;

    fn letters() -> GlyphTable {
        GlyphTable::load(letters_path()).unwrap()
    }

    /// a glyph with a single pixel in the top right corner. easy to follow through rotations
    fn corner() -> Glyph {
        let mut rows = [[0; WIDTH]; WIDTH];
        rows[0][7] = 1;
        Glyph::new(rows)
    }

    #[test_log::test]
    fn test_half_past_two_in_the_afternoon() {
        let glyphs = letters();
        let reading = TimeReading::new(14, 30, 0);

        assert_eq!(reading.hour_label, '2');

        let frame = build_reading_frame(&glyphs, &reading, false).unwrap();
        let glyph = glyphs.get('2').unwrap();

        for y in 0..WIDTH {
            for x in 0..WIDTH {
                let expected = if glyph.is_lit(x, y) {
                    GLYPH_COLOR
                } else if x < 4 {
                    BACKGROUND_COLOR
                } else {
                    BLACK
                };

                assert_eq!(frame.get(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_missing_glyph() {
        let glyphs = GlyphTable::from_json("{}").unwrap();

        let err = build_reading_frame(&glyphs, &TimeReading::new(3, 0, 0), false).unwrap_err();

        assert!(matches!(err, ClockError::MissingGlyph('3')));
    }

    #[test]
    fn test_no_rotation_without_sweep() {
        let frame = build_frame(&corner(), '1', 0, 1, false);

        assert_eq!(frame.get(7, 0), GLYPH_COLOR);
    }

    #[test]
    fn test_sweep_turns_clockwise_each_second() {
        let glyph = corner();

        // top right -> bottom right -> bottom left -> top left -> top right
        let corners = [(7, 0), (7, 7), (0, 7), (0, 0), (7, 0)];

        for (second, &(x, y)) in corners.iter().enumerate() {
            let frame = build_frame(&glyph, '1', 0, second as u32, true);

            assert_eq!(frame.get(x, y), GLYPH_COLOR, "second {second}");
            assert_eq!(frame.iter().filter(|&&p| p == GLYPH_COLOR).count(), 1);
        }
    }

    #[test]
    fn test_sweep_aliases_every_four_seconds() {
        let glyph = letters().get('5').copied().unwrap();

        for second in 0..56 {
            assert_eq!(
                build_frame(&glyph, '5', 12, second, true),
                build_frame(&glyph, '5', 12, second + 4, true),
            );
        }
    }

    #[test]
    fn test_grid_round_trip_keeps_layout() {
        let frame = build_frame(&corner(), '1', 45, 0, false);

        let grid = frame.to_grid();

        assert_eq!(grid[0][7], GLYPH_COLOR);
        assert_eq!(Frame::from_grid(&grid), frame);
    }

    proptest! {
        #[test]
        fn lit_pixels_match_the_glyph(
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
            sweep in any::<bool>(),
        ) {
            let glyphs = letters();
            let reading = TimeReading::new(hour, minute, second);
            let glyph = glyphs.get(reading.hour_label).unwrap();

            let frame = build_reading_frame(&glyphs, &reading, sweep).unwrap();

            let shown = if sweep { glyph.rotated(-(second as i32)) } else { *glyph };

            prop_assert_eq!(frame.0.len(), PIXELS);

            for y in 0..WIDTH {
                for x in 0..WIDTH {
                    if shown.is_lit(x, y) {
                        prop_assert_eq!(frame.get(x, y), GLYPH_COLOR);
                    } else {
                        prop_assert_ne!(frame.get(x, y), GLYPH_COLOR);
                    }
                }
            }
        }
    }
}
