pub mod compositor;
pub mod config;
pub mod device;
pub mod errors;
pub mod frame;
pub mod geometry;
pub mod glyphs;
pub mod logging;
pub mod reading;
pub mod shutdown;
pub mod testing;
