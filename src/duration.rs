//! Fixed-radix duration breakdown for display.
//!
//! This is not a calendar computation: a year is 365.25 days flat, and there
//! is no month or leap-second handling. Largest unit first, floor division,
//! any fractional remainder stays in the seconds field.

use std::fmt;

/// Seconds in a 365.25-day year.
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// An immutable breakdown of a time span into display units.
///
/// All fields except `seconds` are whole quotients; `seconds` carries the
/// final remainder including any fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl Breakdown {
    /// Decompose a non-negative seconds value, largest unit first.
    pub fn from_seconds(t: f64) -> Self {
        let (years, t) = divmod(t, SECONDS_PER_YEAR);
        let (days, t) = divmod(t, SECONDS_PER_DAY);
        let (hours, t) = divmod(t, SECONDS_PER_HOUR);
        let (minutes, seconds) = divmod(t, SECONDS_PER_MINUTE);
        Breakdown {
            years,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Reconstruct the total seconds this breakdown represents.
    pub fn total_seconds(&self) -> f64 {
        self.years as f64 * SECONDS_PER_YEAR
            + self.days as f64 * SECONDS_PER_DAY
            + self.hours as f64 * SECONDS_PER_HOUR
            + self.minutes as f64 * SECONDS_PER_MINUTE
            + self.seconds
    }
}

fn divmod(t: f64, unit: f64) -> (u64, f64) {
    (t.div_euclid(unit) as u64, t.rem_euclid(unit))
}

/// One display cell, e.g. `"33 minutes"`, padded to a fixed column width so
/// table rows line up regardless of which units are present.
const CELL_WIDTH: usize = 10;

fn cell(value: u64, name: &str) -> String {
    format!("{:<CELL_WIDTH$}", format!("{value:>2} {name}"))
}

impl fmt::Display for Breakdown {
    /// Render as space-joined fixed-width columns.
    ///
    /// The years column is omitted entirely when zero; every other zero-valued
    /// field becomes a blank cell of the same width, keeping the remaining
    /// columns aligned.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blank = " ".repeat(CELL_WIDTH);
        let mut cells: Vec<String> = Vec::with_capacity(5);

        if self.years > 0 {
            cells.push(cell(self.years, "years"));
        }
        for (value, name) in [
            (self.days, "days"),
            (self.hours, "hours"),
            (self.minutes, "minutes"),
        ] {
            cells.push(if value > 0 { cell(value, name) } else { blank.clone() });
        }
        // Fraction is kept in the struct but floored for display.
        cells.push(if self.seconds > 0.0 {
            cell(self.seconds as u64, "seconds")
        } else {
            blank
        });

        write!(f, "{}", cells.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bd(years: u64, days: u64, hours: u64, minutes: u64, seconds: f64) -> Breakdown {
        Breakdown {
            years,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn test_single_units() {
        assert_eq!(Breakdown::from_seconds(1.0), bd(0, 0, 0, 0, 1.0));
        assert_eq!(Breakdown::from_seconds(60.0), bd(0, 0, 0, 1, 0.0));
        assert_eq!(Breakdown::from_seconds(3600.0), bd(0, 0, 1, 0, 0.0));
        assert_eq!(Breakdown::from_seconds(86400.0), bd(0, 1, 0, 0, 0.0));
        assert_eq!(Breakdown::from_seconds(31557600.0), bd(1, 0, 0, 0, 0.0));
    }

    #[test]
    fn test_one_of_everything() {
        // 1 year + 1 day + 1 hour + 1 minute + 1 second
        assert_eq!(Breakdown::from_seconds(31647661.0), bd(1, 1, 1, 1, 1.0));
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(Breakdown::from_seconds(2000.0), bd(0, 0, 0, 33, 20.0));
    }

    #[test]
    fn test_fraction_stays_in_seconds() {
        let b = Breakdown::from_seconds(61.5);
        assert_eq!(b.minutes, 1);
        assert!((b.seconds - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_total_seconds_round_trip() {
        for t in [0.0, 1.0, 2000.0, 86400.0, 31557600.0, 31647661.0] {
            assert_eq!(Breakdown::from_seconds(t).total_seconds(), t);
        }
    }

    #[test]
    fn test_display_omits_zero_years() {
        let rendered = Breakdown::from_seconds(2000.0).to_string();
        assert_eq!(rendered, "                      33 minutes 20 seconds");
        assert!(!rendered.contains("years"));
    }

    #[test]
    fn test_display_includes_years_when_present() {
        let rendered = Breakdown::from_seconds(31647661.0).to_string();
        assert_eq!(
            rendered,
            " 1 years    1 days     1 hours    1 minutes  1 seconds"
        );
    }

    #[test]
    fn test_display_zero_is_all_blank_cells() {
        // Four blank 10-char cells joined by single spaces.
        assert_eq!(Breakdown::from_seconds(0.0).to_string(), " ".repeat(43));
    }

    #[test]
    fn test_display_width_is_stable() {
        // Without years every rendering is 4 cells + 3 separators.
        for t in [0.0, 1.0, 2000.0, 86399.0] {
            assert_eq!(Breakdown::from_seconds(t).to_string().len(), 43);
        }
    }
}
