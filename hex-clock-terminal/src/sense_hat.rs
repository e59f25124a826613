//! The Raspberry Pi Sense HAT shows up as a tiny linux framebuffer. 64 pixels of RGB565.
use hex_clock_core::compositor::dim;
use hex_clock_core::device::LedMatrix;
use hex_clock_core::errors::ClockResult;
use hex_clock_core::frame::Frame;
use hex_clock_core::geometry::{PIXELS, rotate_quarter_turns};
use hex_clock_core::logging::{debug, info};
use smart_leds::RGB8;
use std::fs::{self, File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// what the sense hat driver calls its framebuffer in sysfs
const FRAMEBUFFER_NAME: &str = "RPi-Sense FB";

/// 2 bytes per pixel
pub const FRAME_BYTES: usize = PIXELS * 2;

/// The hardware low light mode swaps the gamma table. This gets close enough in software.
const LOW_LIGHT_LEVEL: f64 = 0.25;

/// 5 bits of red, 6 of green, 5 of blue
pub fn pack_rgb565(color: RGB8) -> u16 {
    let r = (color.r >> 3) as u16;
    let g = (color.g >> 2) as u16;
    let b = (color.b >> 3) as u16;

    (r << 11) | (g << 5) | b
}

/// Look through `sys_graphics` (usually `/sys/class/graphics`) for the sense hat and return its device under `dev`.
pub fn find_framebuffer(sys_graphics: &Path, dev: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(sys_graphics).ok()?;

    for entry in entries.flatten() {
        let file_name = entry.file_name();

        if !file_name.to_string_lossy().starts_with("fb") {
            continue;
        }

        let Ok(name) = fs::read_to_string(entry.path().join("name")) else {
            continue;
        };

        debug!("{:?} is {:?}", file_name, name.trim());

        if name.trim() == FRAMEBUFFER_NAME {
            return Some(dev.join(file_name));
        }
    }

    None
}

pub struct SenseHat<W> {
    framebuffer: W,
    /// anti-clockwise, like `rotate_quarter_turns`
    quarter_turns: i32,
    low_light: bool,
}

impl SenseHat<File> {
    /// `Ok(None)` if there is no sense hat attached.
    pub fn open(rotation_degrees: u16, low_light: bool) -> anyhow::Result<Option<Self>> {
        let Some(path) = find_framebuffer(Path::new("/sys/class/graphics"), Path::new("/dev"))
        else {
            return Ok(None);
        };

        info!("opening sense hat at {}", path.display());

        let framebuffer = OpenOptions::new().read(true).write(true).open(&path)?;

        Self::new(framebuffer, rotation_degrees, low_light).map(Some)
    }
}

impl<W: Write + Seek> SenseHat<W> {
    /// `rotation_degrees` turns the picture clockwise to match however the pi is mounted.
    pub fn new(framebuffer: W, rotation_degrees: u16, low_light: bool) -> anyhow::Result<Self> {
        if rotation_degrees % 90 != 0 || rotation_degrees >= 360 {
            anyhow::bail!("rotation must be 0, 90, 180, or 270. got {}", rotation_degrees);
        }

        let quarter_turns = -((rotation_degrees / 90) as i32);

        Ok(Self {
            framebuffer,
            quarter_turns,
            low_light,
        })
    }

    pub fn encode(&self, frame: &Frame) -> [u8; FRAME_BYTES] {
        let rotated = Frame::from_grid(&rotate_quarter_turns(&frame.to_grid(), self.quarter_turns));

        let mut bytes = [0; FRAME_BYTES];

        for (chunk, &color) in bytes.chunks_exact_mut(2).zip(rotated.iter()) {
            let color = if self.low_light {
                dim(color, LOW_LIGHT_LEVEL)
            } else {
                color
            };

            chunk.copy_from_slice(&pack_rgb565(color).to_le_bytes());
        }

        bytes
    }

    pub fn into_inner(self) -> W {
        self.framebuffer
    }
}

impl<W: Write + Seek> LedMatrix for SenseHat<W> {
    fn set_pixels(&mut self, frame: &Frame) -> ClockResult<()> {
        let bytes = self.encode(frame);

        self.framebuffer.seek(SeekFrom::Start(0))?;
        self.framebuffer.write_all(&bytes)?;
        self.framebuffer.flush()?;

        Ok(())
    }

    fn clear(&mut self) -> ClockResult<()> {
        self.set_pixels(&Frame::default())
    }
}
