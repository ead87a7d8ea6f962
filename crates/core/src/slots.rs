//! # Slot Availability
//!
//! Computes the start times at which a service of a given length can be
//! booked on one day at one clinic.
//!
//! Candidates are scanned from opening time in fixed steps. A candidate
//! `[s, s + duration)` is kept when it:
//!
//! 1. ends no later than closing time,
//! 2. does not overlap the lunch break,
//! 3. does not overlap any already booked interval.
//!
//! All overlap tests are half-open, so a slot may end exactly when the break
//! or a booking starts, and may start exactly when one ends.

use tracing::debug;

use crate::models::{
    booking::BookedInterval,
    schedule::{ClinicSchedule, ServiceDuration, SlotStep},
};

/// Half-open overlap test: `[a_start, a_end)` and `[b_start, b_end)` share
/// at least one minute.
pub fn overlaps(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether a service starting at `start` fits the schedule and every booking.
///
/// This is the same predicate [`compute_slots`] applies to each candidate,
/// exposed so that a requested start time can be checked without scanning
/// the whole day. `start` does not need to be aligned to any step.
pub fn is_slot_free(
    schedule: &ClinicSchedule,
    start: u32,
    duration: ServiceDuration,
    booked: &[BookedInterval],
) -> bool {
    let end = start + duration.minutes();

    if start < schedule.open() || end > schedule.close() {
        return false;
    }

    if overlaps(start, end, schedule.break_start(), schedule.break_end()) {
        return false;
    }

    !booked
        .iter()
        .any(|interval| overlaps(start, end, interval.start_minute, interval.end_minute()))
}

/// Returns every bookable start time for the day, ascending.
///
/// An empty result means the day has no room for this service.
pub fn compute_slots(
    schedule: &ClinicSchedule,
    duration: ServiceDuration,
    booked: &[BookedInterval],
    step: SlotStep,
) -> Vec<u32> {
    let slots: Vec<u32> = (schedule.open()..schedule.close())
        .step_by(step.minutes() as usize)
        .filter(|&start| is_slot_free(schedule, start, duration, booked))
        .collect();

    debug!(
        duration = duration.minutes(),
        step = step.minutes(),
        booked = booked.len(),
        available = slots.len(),
        "computed slots"
    );

    slots
}
