//! Form handles and the conversions between form state and [`AlarmRecord`].
//!
//! The widget never talks to a concrete UI. It is handed one handle per
//! control and reads or writes them through these traits, so the same
//! synchronizer drives a terminal front-end, a test double or anything else
//! that can hold a time string and a checked flag.

use crate::errors::{SyncError, SyncResult};
use crate::models::AlarmRecord;

/// A time-typed input holding an `H:M` style string.
pub trait TimeInput {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
}

pub trait Checkbox {
    fn checked(&self) -> bool;
    fn set_checked(&mut self, checked: bool);
}

/// A status line that can be hidden and revealed with a fade.
pub trait StatusText {
    fn hide(&mut self);
    fn fade_in(&mut self, text: &str);
}

/// How hour and minute are written back into the time input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// `9:5`
    Plain,
    /// `09:05`
    #[default]
    ZeroPadded,
}

/// Pads single-digit numbers with a leading zero. Wider numbers pass through.
pub fn zero_pad(n: u32) -> String {
    let digits = n.to_string();
    if digits.len() == 1 {
        format!("0{digits}")
    } else {
        digits
    }
}

pub fn format_time(hour: u32, minute: u32, style: RenderStyle) -> String {
    match style {
        RenderStyle::Plain => format!("{hour}:{minute}"),
        RenderStyle::ZeroPadded => format!("{}:{}", zero_pad(hour), zero_pad(minute)),
    }
}

/// Splits a time string into hour and minute. No range check is made.
pub fn parse_time(value: &str) -> SyncResult<(u32, u32)> {
    let invalid = || SyncError::InvalidTimeFormat(value.to_string());

    let mut tokens = value.split(':');
    let (Some(hour), Some(minute), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(invalid());
    };

    let hour = hour.trim().parse::<u32>().map_err(|_| invalid())?;
    let minute = minute.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok((hour, minute))
}

pub fn parse_form(time: &impl TimeInput, enabled: &impl Checkbox) -> SyncResult<AlarmRecord> {
    let (hour, minute) = parse_time(&time.value())?;
    Ok(AlarmRecord {
        hour,
        minute,
        enabled: enabled.checked(),
    })
}

pub fn render_form(
    alarm: &AlarmRecord,
    style: RenderStyle,
    time: &mut impl TimeInput,
    enabled: &mut impl Checkbox,
) {
    time.set_value(&format_time(alarm.hour, alarm.minute, style));
    enabled.set_checked(alarm.enabled);
}

/// In-memory time input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTimeInput(pub String);

impl TimeInput for MemoryTimeInput {
    fn value(&self) -> String {
        self.0.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.0 = value.to_string();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryCheckbox(pub bool);

impl Checkbox for MemoryCheckbox {
    fn checked(&self) -> bool {
        self.0
    }

    fn set_checked(&mut self, checked: bool) {
        self.0 = checked;
    }
}

/// In-memory status line; `text` is kept while hidden so a reveal can be observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStatus {
    pub text: String,
    pub visible: bool,
}

impl StatusText for MemoryStatus {
    fn hide(&mut self) {
        self.visible = false;
    }

    fn fade_in(&mut self, text: &str) {
        self.text = text.to_string();
        self.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pad_single_digits() {
        assert_eq!(zero_pad(0), "00");
        assert_eq!(zero_pad(5), "05");
        assert_eq!(zero_pad(15), "15");
        assert_eq!(zero_pad(100), "100");
    }

    #[test]
    fn plain_style_is_unpadded() {
        assert_eq!(format_time(9, 5, RenderStyle::Plain), "9:5");
        assert_eq!(format_time(9, 5, RenderStyle::ZeroPadded), "09:05");
    }

    #[test]
    fn render_then_parse_is_identity_when_padded() {
        let mut time = MemoryTimeInput::default();
        let mut enabled = MemoryCheckbox::default();
        for hour in 0..=23 {
            for minute in 0..=59 {
                for flag in [true, false] {
                    let alarm = AlarmRecord::new(hour, minute, flag);
                    render_form(&alarm, RenderStyle::ZeroPadded, &mut time, &mut enabled);
                    assert_eq!(parse_form(&time, &enabled).unwrap(), alarm);
                }
            }
        }
    }

    #[test]
    fn parse_reads_checkbox_state() {
        let time = MemoryTimeInput("23:59".into());
        let alarm = parse_form(&time, &MemoryCheckbox(false)).unwrap();
        assert_eq!(alarm, AlarmRecord::new(23, 59, false));
    }

    #[test]
    fn parse_accepts_plain_rendering() {
        assert_eq!(parse_time("9:5").unwrap(), (9, 5));
    }

    #[test]
    fn parse_rejects_malformed_time() {
        for input in ["abc", "", "12", "12:", ":30", "12:3x", "07:30:00", "-1:00"] {
            match parse_time(input) {
                Err(SyncError::InvalidTimeFormat(value)) => assert_eq!(value, input),
                other => panic!("expected InvalidTimeFormat for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_leaves_range_to_the_server() {
        assert_eq!(parse_time("25:75").unwrap(), (25, 75));
        assert_eq!(parse_time("300:00").unwrap(), (300, 0));
        assert_eq!(parse_time("12:256").unwrap(), (12, 256));
    }
}
