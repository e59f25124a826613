use std::time::Duration;

/// Fixed settings for the clock. There is intentionally no CLI or config file for these.
pub struct Config {
    /// relative to the working directory
    pub letters_path: &'static str,
    /// IANA name
    pub time_zone: &'static str,
    /// 0, 90, 180, or 270. clockwise on the device
    pub rotation_degrees: u16,
    pub low_light: bool,
    /// spin the hour glyph a quarter turn every second
    pub sweep_enabled: bool,
    pub refresh_period: Duration,
    /// how long the sad face lingers before and after it finishes fading
    pub shutdown_hold: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            letters_path: "letters.json",
            time_zone: "Australia/Sydney",
            rotation_degrees: 180,
            low_light: true,
            sweep_enabled: false,
            refresh_period: Duration::from_secs(1),
            shutdown_hold: Duration::from_millis(500),
        }
    }
}
