//! Agreement and asset data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use parcela_shared::types::{ClientId, LotId, PropertyId, RentalAgreementId, SaleAgreementId};

use crate::schedule::{RentalTerms, SaleTerms};

/// A client (buyer or tenant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Client ID.
    pub id: ClientId,
    /// Full name.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A land plot inside a subdivision.
///
/// The sold markers (`buyer`, `purchased_at`) are what display logic
/// branches on; they are kept in lockstep with the active sale agreement by
/// the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    /// Lot ID.
    pub id: LotId,
    /// Name of the subdivision ("loteo") the lot belongs to.
    pub subdivision: String,
    /// Lot number within the subdivision.
    pub number: u32,
    /// Surface area in square meters.
    pub area_m2: Decimal,
    /// Buyer, once sold.
    pub buyer: Option<ClientId>,
    /// Sale date, once sold.
    pub purchased_at: Option<DateTime<Utc>>,
}

impl Lot {
    /// Creates an unsold lot.
    #[must_use]
    pub fn new(id: LotId, subdivision: impl Into<String>, number: u32, area_m2: Decimal) -> Self {
        Self {
            id,
            subdivision: subdivision.into(),
            number,
            area_m2,
            buyer: None,
            purchased_at: None,
        }
    }

    /// True when the lot carries no sold markers.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.buyer.is_none()
    }
}

/// A rental property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Property ID.
    pub id: PropertyId,
    /// Display name.
    pub name: String,
    /// Current tenant, while rented.
    pub rented_by: Option<ClientId>,
    /// Whether an active rental exists.
    pub rental_active: bool,
}

impl Property {
    /// Creates a vacant property.
    #[must_use]
    pub fn new(id: PropertyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rented_by: None,
            rental_active: false,
        }
    }

    /// True when no active rental exists.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.rental_active
    }
}

/// Payment cadence of an agreement. Monthly is the only supported cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    /// One obligation per calendar month.
    Monthly,
}

/// Sale agreement status.
///
/// `Active` moves to `Completed` exactly once, when the last installment is
/// paid, and to `Cancelled` exactly once, when the sale is voided. Both are
/// terminal; neither transition is ever reversed automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleAgreementStatus {
    /// Installments outstanding.
    Active,
    /// Every installment paid.
    Completed,
    /// Sale voided; schedule rows are retained as an audit trail.
    Cancelled,
}

/// Rental agreement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalAgreementStatus {
    /// Rent periods outstanding.
    Active,
    /// Every generated period paid.
    Ended,
}

/// An installment sale agreement for a lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleAgreement {
    /// Agreement ID.
    pub id: SaleAgreementId,
    /// Lot being sold.
    pub lot_id: LotId,
    /// Buyer.
    pub client_id: ClientId,
    /// Total sale price.
    pub total_price: Decimal,
    /// Amount paid up front.
    pub down_payment: Decimal,
    /// Financed amount (price minus down payment, clamped to zero).
    pub financed_amount: Decimal,
    /// Number of installments.
    pub installment_count: u32,
    /// Payment cadence.
    pub frequency: PaymentFrequency,
    /// Due date of installment 1.
    pub first_due_date: NaiveDate,
    /// Simple nominal annual interest rate, in percent.
    pub annual_interest_rate: Decimal,
    /// Current status.
    pub status: SaleAgreementStatus,
}

impl SaleAgreement {
    /// Creates an active agreement from validated terms.
    #[must_use]
    pub fn from_terms(lot_id: LotId, client_id: ClientId, terms: &SaleTerms) -> Self {
        Self {
            id: SaleAgreementId::new(),
            lot_id,
            client_id,
            total_price: terms.total_price,
            down_payment: terms.down_payment,
            financed_amount: terms.financed_amount(),
            installment_count: terms.installment_count,
            frequency: PaymentFrequency::Monthly,
            first_due_date: terms.first_due_date,
            annual_interest_rate: terms.annual_interest_rate,
            status: SaleAgreementStatus::Active,
        }
    }
}

/// A monthly rental agreement for a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// Agreement ID.
    pub id: RentalAgreementId,
    /// Property being rented.
    pub property_id: PropertyId,
    /// Tenant.
    pub client_id: ClientId,
    /// Monthly rent amount.
    pub monthly_rent: Decimal,
    /// Security deposit (recorded, never scheduled).
    pub deposit: Decimal,
    /// First rent period.
    pub start_date: NaiveDate,
    /// Last covered date; `None` for an open-ended lease.
    pub end_date: Option<NaiveDate>,
    /// Current status.
    pub status: RentalAgreementStatus,
}

impl RentalAgreement {
    /// Creates an active agreement from validated terms.
    #[must_use]
    pub fn from_terms(property_id: PropertyId, client_id: ClientId, terms: &RentalTerms) -> Self {
        Self {
            id: RentalAgreementId::new(),
            property_id,
            client_id,
            monthly_rent: terms.monthly_rent,
            deposit: terms.deposit,
            start_date: terms.start_date,
            end_date: terms.end_date,
            status: RentalAgreementStatus::Active,
        }
    }
}
