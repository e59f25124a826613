use crate::compositor::hour_label;
use chrono::Timelike;

/// The parts of the local time that the clock face cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeReading {
    pub hour_label: char,
    /// 0-59
    pub minute: u32,
    /// 0-59. only used when the glyph sweeps
    pub second: u32,
}

impl TimeReading {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour_label: hour_label(hour),
            minute,
            second,
        }
    }

    /// `time` should already be in the clock's time zone
    pub fn from_time(time: &impl Timelike) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }
}

#[cfg(test)]
mod tests {
    use super::TimeReading;
    use chrono::NaiveTime;

    #[test]
    fn test_from_time() {
        let time = NaiveTime::from_hms_opt(14, 30, 5).unwrap();

        assert_eq!(
            TimeReading::from_time(&time),
            TimeReading {
                hour_label: '2',
                minute: 30,
                second: 5
            }
        );
    }

    #[test]
    fn test_noon_and_midnight() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();

        assert_eq!(TimeReading::from_time(&noon).hour_label, 'c');
        assert_eq!(TimeReading::from_time(&midnight).hour_label, '0');
    }

    #[test]
    fn test_leap_second_stays_in_range() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();

        let reading = TimeReading::from_time(&leap);

        assert_eq!(reading.second, 59);
        assert_eq!(reading.hour_label, 'b');
    }
}
