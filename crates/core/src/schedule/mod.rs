//! Payment schedule generation.
//!
//! This module turns agreement terms into the ordered list of payment rows
//! an agreement owes:
//! - Sale terms yield a fixed number of uniform level-payment installments
//! - Rental terms yield monthly periods under one of two horizon strategies
//! - Term validation and error types
//!
//! Generation is pure; persisting the rows (all-or-nothing) is the
//! lifecycle's job.

pub mod error;
pub mod generator;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ScheduleError;
pub use generator::{FIXED_HORIZON_CAP, ROLLING_WINDOW_PERIODS, ScheduleGenerator};
pub use types::{HorizonStrategy, ObligationPeriod, RentalTerms, SaleTerms, ScheduleRow};
