//! Month stepping and French amortization math.
//!
//! Pure functions only. Everything monetary is `Decimal` and is rounded
//! through a single policy ([`amortization::round_money`]) so the whole
//! engine agrees on cents.

pub mod amortization;
pub mod dates;

#[cfg(test)]
mod props;

pub use amortization::{level_payment, monthly_rate, round_money};
pub use dates::add_months;
