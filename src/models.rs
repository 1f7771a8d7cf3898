use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

/// The alarm setting exchanged between the widget and the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmRecord {
    pub hour: u32,
    pub minute: u32,
    pub enabled: bool,
}

impl Default for AlarmRecord {
    fn default() -> Self {
        Self {
            hour: 7,
            minute: 0,
            enabled: false,
        }
    }
}

impl AlarmRecord {
    pub fn new(hour: u32, minute: u32, enabled: bool) -> Self {
        Self {
            hour,
            minute,
            enabled,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.hour <= 23 && self.minute <= 59
    }

    /// Next local instant strictly after `now` at which the alarm time falls.
    pub fn next_occurrence(&self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        next_occurrence_in(self, now)
    }
}

pub(crate) fn next_occurrence_in<Tz: TimeZone>(
    alarm: &AlarmRecord,
    now: DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    let time = NaiveTime::from_hms_opt(alarm.hour, alarm.minute, 0)?;
    let tz = now.timezone();
    let today = now.date_naive();

    for offset in 0..=2 {
        let date = today + Duration::days(offset);
        // Skips wall-clock times that do not exist on DST transition days.
        if let Some(when) = tz.from_local_datetime(&date.and_time(time)).earliest() {
            if when > now {
                return Some(when);
            }
        }
    }
    None
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
