use crate::errors::ClockResult;
use crate::frame::Frame;

/// An 8x8 RGB display. The clock never keeps one of these around. It is owned by whatever runs the loop.
///
/// Failures are passed straight back to the caller. Nothing here retries.
pub trait LedMatrix {
    /// Show a full frame. Frames are always complete before they get here.
    fn set_pixels(&mut self, frame: &Frame) -> ClockResult<()>;

    /// Turn every pixel off.
    fn clear(&mut self) -> ClockResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Frame(Frame),
    Clear,
}

/// Remembers everything it was asked to show. Only used by tests.
#[derive(Debug, Default)]
pub struct RecordingMatrix {
    pub events: Vec<DeviceEvent>,
}

impl RecordingMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.events.iter().filter_map(|event| match event {
            DeviceEvent::Frame(frame) => Some(frame),
            DeviceEvent::Clear => None,
        })
    }

    pub fn last(&self) -> Option<&DeviceEvent> {
        self.events.last()
    }
}

impl LedMatrix for RecordingMatrix {
    fn set_pixels(&mut self, frame: &Frame) -> ClockResult<()> {
        self.events.push(DeviceEvent::Frame(*frame));
        Ok(())
    }

    fn clear(&mut self) -> ClockResult<()> {
        self.events.push(DeviceEvent::Clear);
        Ok(())
    }
}
