//! Core business logic for Parcela.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, schedule math, and reconciliation rules live here.
//!
//! # Modules
//!
//! - `calendar` - Month stepping and French amortization math
//! - `schedule` - Payment schedule generation for sales and rentals
//! - `ledger` - Obligation tracking, payment application, receipts
//! - `agreement` - Agreement lifecycle and asset exclusivity
//! - `portfolio` - Derived per-agreement and per-client rollups
//! - `store` - Storage seam and the in-memory implementation
//! - `clock` - Injected time source

pub mod agreement;
pub mod calendar;
pub mod clock;
pub mod ledger;
pub mod portfolio;
pub mod schedule;
pub mod store;
