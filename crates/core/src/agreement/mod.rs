//! Clients, assets, and agreement lifecycle.

pub mod error;
pub mod service;
pub mod types;


pub use error::AgreementError;
pub use service::LifecycleService;
pub use types::{
    Client, Lot, PaymentFrequency, Property, RentalAgreement, RentalAgreementStatus,
    SaleAgreement, SaleAgreementStatus,
};
