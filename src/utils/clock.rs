//! 12-hour clock arithmetic for appointment slots.

use crate::models::Slot;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse `"hh:mm AM/PM"` into minutes since midnight.
///
/// 12 AM maps to 0, 12 PM to 720, other PM hours add 720. Anything that does
/// not look like a 12-hour clock string is an explicit error, never a
/// garbage value.
pub fn time_to_minutes(time: &str) -> Result<u32, String> {
    let mut parts = time.split_whitespace();
    let clock = parts
        .next()
        .ok_or_else(|| "empty time string".to_string())?;
    let period = parts
        .next()
        .ok_or_else(|| format!("missing AM/PM in '{}'", time))?;
    if parts.next().is_some() {
        return Err(format!("trailing input in '{}'", time));
    }

    let (hour_part, minute_part) = clock
        .split_once(':')
        .ok_or_else(|| format!("missing ':' in '{}'", time))?;
    let hours: u32 = hour_part
        .parse()
        .map_err(|_| format!("invalid hour in '{}'", time))?;
    let minutes: u32 = minute_part
        .parse()
        .map_err(|_| format!("invalid minutes in '{}'", time))?;

    if !(1..=12).contains(&hours) {
        return Err(format!("hour out of range in '{}'", time));
    }
    if minutes > 59 {
        return Err(format!("minutes out of range in '{}'", time));
    }

    let hours24 = match period {
        "AM" => hours % 12,
        "PM" => hours % 12 + 12,
        other => return Err(format!("invalid period '{}' in '{}'", other, time)),
    };

    Ok(hours24 * 60 + minutes)
}

/// Render minutes since midnight as `"hh:mm AM/PM"`, wrapping past midnight.
pub fn format_minutes(total: u32) -> String {
    let total = total % MINUTES_PER_DAY;
    let hours = total / 60;
    let minutes = total % 60;
    let period = if hours >= 12 { "PM" } else { "AM" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", hour12, minutes, period)
}

/// End time of a slot that starts at `start` and runs `duration` minutes.
pub fn slot_end_time(start: &str, duration: u32) -> Result<String, String> {
    let start_minutes = time_to_minutes(start)?;
    // Reduce the duration first: both operands stay below one day, so the
    // sum cannot overflow even on a hostile wire value
    Ok(format_minutes(start_minutes + duration % MINUTES_PER_DAY))
}

/// Table cell text for a slot: `"start - end"`, or `"-"` when the start time
/// is unreadable.
pub fn slot_range(slot: &Slot) -> String {
    match slot_end_time(&slot.start_time, slot.duration) {
        Ok(end) => format!("{} - {}", slot.start_time, end),
        Err(e) => {
            log::warn!("⚠️ Unreadable slot start time: {}", e);
            "-".to_string()
        }
    }
}

/// Schedule column text: backend sends RFC 3339, show the plain date. Keeps
/// the raw value when parsing fails rather than hiding the row.
pub fn display_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_and_midnight_edges() {
        assert_eq!(time_to_minutes("12:00 AM").unwrap(), 0);
        assert_eq!(time_to_minutes("12:00 PM").unwrap(), 720);
        assert_eq!(time_to_minutes("11:59 PM").unwrap(), 1439);
        assert_eq!(time_to_minutes("01:05 AM").unwrap(), 65);
    }

    #[test]
    fn round_trip_identity() {
        for time in ["12:00 AM", "12:30 PM", "01:00 AM", "09:15 AM", "11:59 PM", "06:45 PM"] {
            assert_eq!(format_minutes(time_to_minutes(time).unwrap()), time);
        }
    }

    #[test]
    fn zero_duration_is_identity() {
        assert_eq!(slot_end_time("12:00 AM", 0).unwrap(), "12:00 AM");
        assert_eq!(slot_end_time("09:15 AM", 0).unwrap(), "09:15 AM");
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(slot_end_time("11:30 PM", 90).unwrap(), "01:00 AM");
    }

    #[test]
    fn huge_durations_wrap_instead_of_overflowing() {
        // u32::MAX % 1440 == 255 minutes past 11:30 PM
        assert_eq!(slot_end_time("11:30 PM", u32::MAX).unwrap(), "03:45 AM");
        assert_eq!(
            slot_end_time("09:00 AM", 10 * MINUTES_PER_DAY + 30).unwrap(),
            "09:30 AM"
        );
    }

    #[test]
    fn crosses_noon() {
        assert_eq!(slot_end_time("12:00 PM", 60).unwrap(), "01:00 PM");
        assert_eq!(slot_end_time("11:30 AM", 45).unwrap(), "12:15 PM");
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(time_to_minutes("").is_err());
        assert!(time_to_minutes("09:00").is_err());
        assert!(time_to_minutes("ab:cd AM").is_err());
        assert!(time_to_minutes("13:00 PM").is_err());
        assert!(time_to_minutes("09:61 AM").is_err());
        assert!(time_to_minutes("09:00 XM").is_err());
        assert!(time_to_minutes("09:00 AM extra").is_err());
    }

    #[test]
    fn unreadable_slot_renders_as_dash() {
        let slot = Slot {
            start_time: "whenever".to_string(),
            duration: 30,
            therapist_name: "Maya".to_string(),
        };
        assert_eq!(slot_range(&slot), "-");
    }

    #[test]
    fn readable_slot_renders_range() {
        let slot = Slot {
            start_time: "10:00 AM".to_string(),
            duration: 30,
            therapist_name: "Maya".to_string(),
        };
        assert_eq!(slot_range(&slot), "10:00 AM - 10:30 AM");
    }

    #[test]
    fn date_display_falls_back_to_raw() {
        assert_eq!(display_date("2025-03-01T10:00:00Z"), "03/01/2025");
        assert_eq!(display_date("not-a-date"), "not-a-date");
    }
}
