pub mod availability;
pub mod booking;
pub mod catalogue;
pub mod clinic;
pub mod health;
