use chrono::{Duration, NaiveTime};

use crate::errors::AppError;

const SLOT_MINUTES: i64 = 30;

/// Half-hour booking slots between an opening and a closing hour.
///
/// The closing hour itself is never bookable. `trim_last` drops the final
/// half hour as well, which is how the shorter form variant ends at 4:00 PM
/// for a 17:00 close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSchedule {
    open_hour: u32,
    close_hour: u32,
    trim_last: bool,
}

impl SlotSchedule {
    pub fn new(open_hour: u32, close_hour: u32, trim_last: bool) -> Result<Self, AppError> {
        if close_hour > 24 {
            return Err(AppError::Config(format!(
                "closing hour out of range: {close_hour}"
            )));
        }
        if open_hour >= close_hour {
            return Err(AppError::Config(format!(
                "opening hour {open_hour} must be before closing hour {close_hour}"
            )));
        }
        Ok(Self {
            open_hour,
            close_hour,
            trim_last,
        })
    }

    pub fn generate(&self) -> Vec<String> {
        let total_minutes = i64::from(self.close_hour - self.open_hour) * 60;
        let count = total_minutes / SLOT_MINUTES;

        let mut slots: Vec<String> = (0..count)
            .map(|i| {
                let minutes = i64::from(self.open_hour) * 60 + i * SLOT_MINUTES;
                format_slot(NaiveTime::default() + Duration::minutes(minutes))
            })
            .collect();

        if self.trim_last {
            slots.pop();
        }
        slots
    }
}

/// `14:30` becomes `2:30 PM`; noon and midnight read as 12.
fn format_slot(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_to_five_has_fourteen_slots() {
        let slots = SlotSchedule::new(10, 17, false).unwrap().generate();
        assert_eq!(slots.len(), 14);
        assert_eq!(slots.first().map(String::as_str), Some("10:00 AM"));
        assert_eq!(slots.last().map(String::as_str), Some("4:30 PM"));
        assert!(!slots.iter().any(|s| s == "5:00 PM"));
    }

    #[test]
    fn test_noon_is_pm() {
        let slots = SlotSchedule::new(10, 17, false).unwrap().generate();
        assert_eq!(slots[3], "11:30 AM");
        assert_eq!(slots[4], "12:00 PM");
        assert_eq!(slots[5], "12:30 PM");
        assert_eq!(slots[6], "1:00 PM");
    }

    #[test]
    fn test_trim_last_ends_at_four() {
        let slots = SlotSchedule::new(10, 17, true).unwrap().generate();
        assert_eq!(slots.len(), 13);
        assert_eq!(slots.last().map(String::as_str), Some("4:00 PM"));
    }

    #[test]
    fn test_midnight_reads_twelve_am() {
        let slots = SlotSchedule::new(0, 1, false).unwrap().generate();
        assert_eq!(slots, vec!["12:00 AM", "12:30 AM"]);
    }

    #[test]
    fn test_full_day() {
        let slots = SlotSchedule::new(0, 24, false).unwrap().generate();
        assert_eq!(slots.len(), 48);
        assert_eq!(slots.last().map(String::as_str), Some("11:30 PM"));
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(SlotSchedule::new(17, 10, false).is_err());
        assert!(SlotSchedule::new(10, 10, false).is_err());
        assert!(SlotSchedule::new(10, 25, false).is_err());
    }
}
