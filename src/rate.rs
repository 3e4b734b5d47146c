//! Rate conversion: how many seconds does a cap last at a given speed.

use crate::error::CaptimeError;

/// One megabyte is 8 megabits.
pub const MEGABYTES_PER_MEGABIT: f64 = 0.125;

/// One gigabyte is 1000 megabytes (decimal units, not 1024).
pub const MEGABYTES_PER_GIGABYTE: f64 = 1000.0;

/// Seconds until `cap_gb` gigabytes have been transferred at `speed_mbit`
/// megabits per second.
///
/// Fails with [`CaptimeError::SpeedNotPositive`] for a zero or negative speed
/// and [`CaptimeError::NegativeCap`] for a negative cap; both would otherwise
/// produce a nonsensical (infinite or negative) duration.
pub fn seconds_to_cap(cap_gb: f64, speed_mbit: f64) -> Result<f64, CaptimeError> {
    if speed_mbit <= 0.0 {
        return Err(CaptimeError::SpeedNotPositive { speed: speed_mbit });
    }
    if cap_gb < 0.0 {
        return Err(CaptimeError::NegativeCap { cap: cap_gb });
    }

    let seconds = (cap_gb * MEGABYTES_PER_GIGABYTE) / (MEGABYTES_PER_MEGABIT * speed_mbit);

    // Cross-check against the same quantity derived through GB/s. The two
    // expressions are algebraically identical but not guaranteed bit-identical
    // under IEEE-754 rounding, so the comparison is relative-epsilon.
    #[cfg(debug_assertions)]
    {
        let speed_gb_per_s = speed_mbit * MEGABYTES_PER_MEGABIT / MEGABYTES_PER_GIGABYTE;
        let seconds_alt = cap_gb / speed_gb_per_s;
        debug_assert!(
            (seconds - seconds_alt).abs() <= f64::EPSILON * seconds.abs().max(1.0) * 4.0,
            "rate derivations diverged: {seconds} vs {seconds_alt}"
        );
    }

    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_gigabyte_at_one_megabit() {
        assert_eq!(seconds_to_cap(1.0, 1.0).unwrap(), 8000.0);
    }

    #[test]
    fn test_gigabit_connection() {
        assert_eq!(seconds_to_cap(250.0, 1000.0).unwrap(), 2000.0);
    }

    #[test]
    fn test_zero_cap_is_instant() {
        assert_eq!(seconds_to_cap(0.0, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_speed_is_rejected() {
        assert!(matches!(
            seconds_to_cap(250.0, 0.0),
            Err(CaptimeError::SpeedNotPositive { .. })
        ));
    }

    #[test]
    fn test_negative_speed_is_rejected() {
        assert!(matches!(
            seconds_to_cap(250.0, -5.0),
            Err(CaptimeError::SpeedNotPositive { .. })
        ));
    }

    #[test]
    fn test_negative_cap_is_rejected() {
        assert!(matches!(
            seconds_to_cap(-1.0, 100.0),
            Err(CaptimeError::NegativeCap { .. })
        ));
    }

    #[test]
    fn test_fractional_inputs() {
        // 0.5 GB at 4 mb/s: 500 MB at 0.5 MB/s = 1000 s
        assert_eq!(seconds_to_cap(0.5, 4.0).unwrap(), 1000.0);
    }
}
