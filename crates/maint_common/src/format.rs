//! Human-readable remaining-time strings.

/// Render remaining seconds the way the maintenance page shows them.
///
/// Zero (or less) is "Complete". Under an hour, whole minutes rounded up.
/// An hour or more prints hours plus a minute tail when one remains; a
/// remainder that rounds up to a full hour carries over instead.
pub fn format_remaining(seconds: f64) -> String {
    if !(seconds > 0.0) {
        return "Complete".to_string();
    }

    let minutes = (seconds / 60.0).ceil() as u64;
    if minutes < 60 {
        return count(minutes, "minute");
    }

    let mut hours = (seconds / 3600.0).floor() as u64;
    let remainder_secs = seconds - (hours as f64) * 3600.0;
    let mut extra_minutes = (remainder_secs / 60.0).ceil() as u64;
    if extra_minutes == 60 {
        hours += 1;
        extra_minutes = 0;
    }

    if extra_minutes == 0 {
        count(hours, "hour")
    } else {
        format!("{} {}", count(hours, "hour"), count(extra_minutes, "minute"))
    }
}

fn count(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::format_remaining;

    #[test]
    fn zero_is_complete() {
        assert_eq!(format_remaining(0.0), "Complete");
        assert_eq!(format_remaining(-3.0), "Complete");
    }

    #[test]
    fn sub_hour_rounds_up_to_minutes() {
        assert_eq!(format_remaining(90.0), "2 minutes");
        assert_eq!(format_remaining(60.0), "1 minute");
        assert_eq!(format_remaining(30.0), "1 minute");
        assert_eq!(format_remaining(599.0), "10 minutes");
    }

    #[test]
    fn exact_hours() {
        assert_eq!(format_remaining(3600.0), "1 hour");
        assert_eq!(format_remaining(7200.0), "2 hours");
    }

    #[test]
    fn hours_with_minute_tail() {
        assert_eq!(format_remaining(3660.0), "1 hour 1 minute");
        assert_eq!(format_remaining(5400.0), "1 hour 30 minutes");
        assert_eq!(format_remaining(7321.0), "2 hours 3 minutes");
    }

    #[test]
    fn remainder_rounding_carries_into_hours() {
        // 59 minutes 59 seconds rounds up to a full hour, never
        // "0 hours 60 minutes".
        assert_eq!(format_remaining(3599.0), "1 hour");
        assert_eq!(format_remaining(7199.0), "2 hours");
    }
}
