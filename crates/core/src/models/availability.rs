use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::clock::format_clock;

/// One bookable slot as shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResponse {
    pub start: String,
    pub end: String,
    pub start_minute: u32,
}

impl SlotResponse {
    pub fn new(start_minute: u32, duration_minutes: u32) -> Self {
        Self {
            start: format_clock(start_minute),
            end: format_clock(start_minute + duration_minutes),
            start_minute,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub clinic_id: Uuid,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub step_minutes: u32,
    pub slots: Vec<SlotResponse>,
}
