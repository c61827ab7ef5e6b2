//! Hour and minute text for the two time layers.
//!
//! Both strings are always exactly two ASCII digits, zero padded. Formatting
//! writes into fixed-capacity `heapless` strings, so there is no allocation
//! and no `format!`.

use heapless::String;

use crate::config::TEXT_PLACEHOLDER;

/// Wall-clock time of day, validated on construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Build a time of day. Returns `None` unless `hour < 24` and `minute < 60`.
    pub const fn new(
        hour: u8,
        minute: u8,
    ) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    #[inline]
    pub const fn hour(self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(self) -> u8 { self.minute }

    /// Hour on a 12-hour dial: 1..=12, with midnight and noon shown as 12.
    #[inline]
    pub const fn hour_12(self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

/// The pair of strings shown in the top and bottom text layers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TimeStrings {
    pub hour: String<2>,
    pub minute: String<2>,
}

impl TimeStrings {
    /// Both layers showing the `"00"` placeholder.
    pub fn placeholder() -> Self {
        let mut hour = String::new();
        let mut minute = String::new();
        hour.push_str(TEXT_PLACEHOLDER).ok();
        minute.push_str(TEXT_PLACEHOLDER).ok();
        Self { hour, minute }
    }
}

impl Default for TimeStrings {
    fn default() -> Self { Self::placeholder() }
}

/// Format `time` for display.
///
/// With `use_24h` the hour reads `"00"`-`"23"`, otherwise `"01"`-`"12"`.
/// The minute always reads `"00"`-`"59"`.
pub fn format_time(
    time: ClockTime,
    use_24h: bool,
) -> TimeStrings {
    let hour = if use_24h { time.hour() } else { time.hour_12() };
    TimeStrings {
        hour: two_digits(hour),
        minute: two_digits(time.minute()),
    }
}

/// Zero-padded two-digit rendering of `value` (callers keep it below 100).
fn two_digits(value: u8) -> String<2> {
    let mut s = String::new();
    s.push((b'0' + (value / 10) % 10) as char).ok();
    s.push((b'0' + value % 10) as char).ok();
    s
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn at(
        hour: u8,
        minute: u8,
    ) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_format_24h_afternoon() {
        let text = format_time(at(14, 5), true);
        assert_eq!(text.hour.as_str(), "14");
        assert_eq!(text.minute.as_str(), "05");
    }

    #[test]
    fn test_format_12h_afternoon() {
        let text = format_time(at(14, 5), false);
        assert_eq!(text.hour.as_str(), "02");
        assert_eq!(text.minute.as_str(), "05");
    }

    #[test]
    fn test_format_midnight_and_noon() {
        assert_eq!(format_time(at(0, 0), true).hour.as_str(), "00");
        assert_eq!(format_time(at(0, 0), false).hour.as_str(), "12");
        assert_eq!(format_time(at(12, 30), false).hour.as_str(), "12");
        assert_eq!(format_time(at(23, 59), true).hour.as_str(), "23");
        assert_eq!(format_time(at(23, 59), false).hour.as_str(), "11");
        assert_eq!(format_time(at(23, 59), false).minute.as_str(), "59");
    }

    #[test]
    fn test_clock_time_rejects_out_of_range() {
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(0, 60).is_none());
        assert!(ClockTime::new(23, 59).is_some());
    }

    #[test]
    fn test_placeholder() {
        let text = TimeStrings::default();
        assert_eq!(text.hour.as_str(), "00");
        assert_eq!(text.minute.as_str(), "00");
    }

    proptest! {
        #[test]
        fn prop_strings_are_two_digits(hour in 0u8..24, minute in 0u8..60, use_24h in any::<bool>()) {
            let text = format_time(at(hour, minute), use_24h);
            prop_assert_eq!(text.hour.len(), 2);
            prop_assert_eq!(text.minute.len(), 2);

            let h: u8 = text.hour.parse().unwrap();
            let m: u8 = text.minute.parse().unwrap();
            prop_assert_eq!(m, minute);
            if use_24h {
                prop_assert_eq!(h, hour);
            } else {
                prop_assert!((1..=12).contains(&h));
                prop_assert_eq!(h % 12, hour % 12);
            }
        }
    }
}
