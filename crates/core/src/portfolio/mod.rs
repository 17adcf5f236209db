//! Client-facing portfolio views.

pub mod error;
pub mod service;
pub mod types;


pub use error::PortfolioError;
pub use service::PortfolioService;
pub use types::{AgreementStanding, AgreementSummary, ClientSummary, ReceiptDetails};
