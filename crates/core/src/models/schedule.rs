use serde::{Deserialize, Serialize};

use crate::{
    errors::{VetError, VetResult},
    models::clock::{format_clock, parse_clock, MINUTES_PER_DAY},
};

/// A clinic's working day: opening hours with a single lunch break.
///
/// All four fields are minute offsets from midnight. A value of this type
/// always satisfies `open < break_start < break_end < close <= 24:00`; the
/// only way to get one is through [`ClinicSchedule::new`] or one of the
/// `TryFrom` conversions, which all enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicSchedule {
    open: u32,
    close: u32,
    break_start: u32,
    break_end: u32,
}

impl ClinicSchedule {
    pub fn new(open: u32, close: u32, break_start: u32, break_end: u32) -> VetResult<Self> {
        if close > MINUTES_PER_DAY {
            return Err(VetError::Validation(format!(
                "Closing time {} is past the end of the day",
                format_clock(close)
            )));
        }
        if open >= break_start {
            return Err(VetError::Validation(format!(
                "Break must start after opening ({} >= {})",
                format_clock(open),
                format_clock(break_start)
            )));
        }
        if break_start >= break_end {
            return Err(VetError::Validation(format!(
                "Break must end after it starts ({} >= {})",
                format_clock(break_start),
                format_clock(break_end)
            )));
        }
        if break_end >= close {
            return Err(VetError::Validation(format!(
                "Break must end before closing ({} >= {})",
                format_clock(break_end),
                format_clock(close)
            )));
        }

        Ok(Self {
            open,
            close,
            break_start,
            break_end,
        })
    }

    pub fn open(&self) -> u32 {
        self.open
    }

    pub fn close(&self) -> u32 {
        self.close
    }

    pub fn break_start(&self) -> u32 {
        self.break_start
    }

    pub fn break_end(&self) -> u32 {
        self.break_end
    }
}

/// A positive number of minutes a service occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceDuration(u32);

impl ServiceDuration {
    pub fn new(minutes: u32) -> VetResult<Self> {
        if minutes == 0 {
            return Err(VetError::Validation(
                "Service duration must be at least one minute".to_string(),
            ));
        }
        if minutes > MINUTES_PER_DAY {
            return Err(VetError::Validation(format!(
                "Service duration of {} minutes does not fit in a day",
                minutes
            )));
        }
        Ok(Self(minutes))
    }

    /// Durations from the built-in service catalogue, all positive.
    pub(crate) const fn from_catalogue(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

/// Scan granularity for slot generation. Returned start times are aligned to
/// `open + k * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotStep(u32);

impl SlotStep {
    pub const QUARTER_HOUR: SlotStep = SlotStep(15);
    pub const HALF_HOUR: SlotStep = SlotStep(30);

    pub fn new(minutes: u32) -> VetResult<Self> {
        if minutes == 0 {
            return Err(VetError::Validation(
                "Slot step must be at least one minute".to_string(),
            ));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for SlotStep {
    fn default() -> Self {
        Self::HALF_HOUR
    }
}

/// Wire form of a [`ClinicSchedule`], with `"HH:MM"` clock strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDto {
    pub open: String,
    pub close: String,
    pub break_start: String,
    pub break_end: String,
}

impl TryFrom<&ScheduleDto> for ClinicSchedule {
    type Error = VetError;

    fn try_from(dto: &ScheduleDto) -> VetResult<Self> {
        ClinicSchedule::new(
            parse_clock(&dto.open)?,
            parse_clock(&dto.close)?,
            parse_clock(&dto.break_start)?,
            parse_clock(&dto.break_end)?,
        )
    }
}

impl From<&ClinicSchedule> for ScheduleDto {
    fn from(schedule: &ClinicSchedule) -> Self {
        Self {
            open: format_clock(schedule.open),
            close: format_clock(schedule.close),
            break_start: format_clock(schedule.break_start),
            break_end: format_clock(schedule.break_end),
        }
    }
}
