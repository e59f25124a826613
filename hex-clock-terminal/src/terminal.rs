//! Draws the matrix with 24-bit ANSI colors. Used when there is no sense hat plugged in.
use hex_clock_core::device::LedMatrix;
use hex_clock_core::errors::ClockResult;
use hex_clock_core::frame::Frame;
use hex_clock_core::geometry::WIDTH;
use std::io::{Stdout, Write, stdout};

pub struct TerminalMatrix<W> {
    out: W,
    /// after the first frame, every frame draws over the last one
    drawn: bool,
}

impl TerminalMatrix<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> TerminalMatrix<W> {
    pub fn new(out: W) -> Self {
        Self { out, drawn: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LedMatrix for TerminalMatrix<W> {
    fn set_pixels(&mut self, frame: &Frame) -> ClockResult<()> {
        if self.drawn {
            write!(self.out, "\x1b[{WIDTH}A")?;
        }

        for row in frame.0.chunks_exact(WIDTH) {
            for color in row {
                // two columns so the pixels come out roughly square
                write!(self.out, "\x1b[48;2;{};{};{}m  ", color.r, color.g, color.b)?;
            }

            writeln!(self.out, "\x1b[0m")?;
        }

        self.out.flush()?;

        self.drawn = true;

        Ok(())
    }

    fn clear(&mut self) -> ClockResult<()> {
        self.set_pixels(&Frame::default())
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalMatrix;
    use hex_clock_core::device::LedMatrix;
    use hex_clock_core::frame::Frame;
    use smart_leds::RGB8;

    #[test]
    fn test_draws_eight_rows() {
        let mut matrix = TerminalMatrix::new(Vec::new());

        matrix.set_pixels(&Frame::filled(RGB8 { r: 10, g: 0, b: 100 })).unwrap();

        let out = String::from_utf8(matrix.into_inner()).unwrap();

        assert_eq!(out.lines().count(), 8);
        assert_eq!(out.matches("\x1b[48;2;10;0;100m").count(), 64);
        assert!(!out.contains("\x1b[8A"));
    }

    #[test]
    fn test_redraws_in_place() {
        let mut matrix = TerminalMatrix::new(Vec::new());

        matrix.set_pixels(&Frame::default()).unwrap();
        matrix.clear().unwrap();

        let out = String::from_utf8(matrix.into_inner()).unwrap();

        assert_eq!(out.matches("\x1b[8A").count(), 1);
        assert_eq!(out.matches("\x1b[48;2;0;0;0m").count(), 128);
    }
}
