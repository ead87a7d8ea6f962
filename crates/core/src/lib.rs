//! # VetSlot Core
//!
//! Domain types shared by the database and API crates, plus the slot
//! availability calculator used by every booking flow.
//!
//! - [`models`]: schedules, durations, bookings and the wire DTOs
//! - [`slots`]: the pure slot computation
//! - [`errors`]: the error taxonomy returned across crate boundaries

pub mod errors;
pub mod models;
pub mod slots;
