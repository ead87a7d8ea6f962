pub mod booking;
pub mod clinic;

use eyre::{Result, WrapErr};

/// Minute values are `u32` in the domain and `INTEGER` in Postgres.
pub(crate) fn minute_column(minute: u32) -> Result<i32> {
    i32::try_from(minute).wrap_err_with(|| format!("minute value {} does not fit a column", minute))
}
