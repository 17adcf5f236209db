//! Payment ledger: obligations, settlement, receipts.

pub mod error;
pub mod service;
pub mod types;


pub use error::LedgerError;
pub use service::{LedgerService, PaymentService};
pub use types::{AgreementRef, Obligation, Receipt, Settlement};
