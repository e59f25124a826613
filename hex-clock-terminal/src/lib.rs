pub mod driver;
pub mod sense_hat;
pub mod terminal;

pub use driver::{run_clock, shutdown_channel, zoned_reading};
pub use sense_hat::SenseHat;
pub use terminal::TerminalMatrix;
