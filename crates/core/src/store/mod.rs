//! Storage seam.
//!
//! Services receive a [`Store`] by reference and never assume a concrete
//! backend. [`MemoryStore`] is the in-process implementation; it also backs
//! the service tests.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};

use parcela_shared::types::{ClientId, LotId, ObligationId, PropertyId, RentalAgreementId, SaleAgreementId};

use crate::agreement::{
    Client, Lot, Property, RentalAgreement, RentalAgreementStatus, SaleAgreement,
    SaleAgreementStatus,
};
use crate::ledger::{AgreementRef, Obligation, Receipt};

/// Outcome of a compare-and-set settlement attempt.
///
/// Both variants carry the obligation as stored after the call, so callers
/// can issue receipts and run completion checks without a second read.
#[derive(Debug, Clone)]
pub enum MarkPaidOutcome {
    /// The obligation was unpaid and is now settled.
    Updated(Obligation),
    /// The obligation was already settled; nothing changed.
    AlreadyPaid(Obligation),
}

impl MarkPaidOutcome {
    /// The obligation as stored after the attempt.
    #[must_use]
    pub fn obligation(&self) -> &Obligation {
        match self {
            Self::Updated(o) | Self::AlreadyPaid(o) => o,
        }
    }
}

/// Backend-agnostic persistence for agreements, obligations, and receipts.
///
/// Multi-entity operations (`create_sale`, `create_rental`, `cancel_sale`,
/// `try_mark_paid`) must be atomic: concurrent callers observe either the
/// whole effect or none of it, and check-then-act sequences inside them are
/// serialized.
pub trait Store: Send + Sync {
    /// Inserts a client.
    fn insert_client(&self, client: Client) -> Result<(), StoreError>;

    /// Fetches a client by ID.
    fn client(&self, id: ClientId) -> Result<Client, StoreError>;

    /// Inserts a lot.
    fn insert_lot(&self, lot: Lot) -> Result<(), StoreError>;

    /// Fetches a lot by ID.
    fn lot(&self, id: LotId) -> Result<Lot, StoreError>;

    /// Inserts a property.
    fn insert_property(&self, property: Property) -> Result<(), StoreError>;

    /// Fetches a property by ID.
    fn property(&self, id: PropertyId) -> Result<Property, StoreError>;

    /// Fetches a sale agreement by ID.
    fn sale_agreement(&self, id: SaleAgreementId) -> Result<SaleAgreement, StoreError>;

    /// Fetches a rental agreement by ID.
    fn rental_agreement(&self, id: RentalAgreementId) -> Result<RentalAgreement, StoreError>;

    /// Returns the active sale agreement for a lot, if any.
    fn active_sale_for_lot(&self, lot_id: LotId) -> Result<Option<SaleAgreement>, StoreError>;

    /// Returns the active rental agreement for a property, if any.
    fn active_rental_for_property(
        &self,
        property_id: PropertyId,
    ) -> Result<Option<RentalAgreement>, StoreError>;

    /// Returns every sale agreement held by a client, any status.
    fn sale_agreements_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<SaleAgreement>, StoreError>;

    /// Returns every rental agreement held by a client, any status.
    fn rental_agreements_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<RentalAgreement>, StoreError>;

    /// Updates a sale agreement's status.
    fn set_sale_status(
        &self,
        id: SaleAgreementId,
        status: SaleAgreementStatus,
    ) -> Result<(), StoreError>;

    /// Updates a rental agreement's status.
    fn set_rental_status(
        &self,
        id: RentalAgreementId,
        status: RentalAgreementStatus,
    ) -> Result<(), StoreError>;

    /// Atomically records a sale: persists the agreement and its
    /// obligations and marks the lot sold.
    ///
    /// Fails with [`StoreError::AssetUnavailable`] when the lot already
    /// carries sold markers or an active sale agreement; nothing is written
    /// in that case.
    fn create_sale(
        &self,
        agreement: SaleAgreement,
        obligations: Vec<Obligation>,
        purchased_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Atomically records a rental: persists the agreement and its
    /// obligations and marks the property occupied.
    ///
    /// Fails with [`StoreError::AssetUnavailable`] when the property is
    /// already occupied; nothing is written in that case.
    fn create_rental(
        &self,
        agreement: RentalAgreement,
        obligations: Vec<Obligation>,
    ) -> Result<(), StoreError>;

    /// Atomically voids the active sale on a lot: the agreement moves to
    /// `Cancelled` and the lot's sold markers are cleared. Obligations are
    /// left in place.
    ///
    /// Returns the cancelled agreement's ID, or `Ok(None)` when the lot has
    /// no active sale.
    fn cancel_sale(&self, lot_id: LotId) -> Result<Option<SaleAgreementId>, StoreError>;

    /// Fetches an obligation by ID.
    fn obligation(&self, id: ObligationId) -> Result<Obligation, StoreError>;

    /// Returns an agreement's obligations ordered by period.
    fn obligations_for(&self, agreement: AgreementRef) -> Result<Vec<Obligation>, StoreError>;

    /// Compare-and-set settlement of one obligation.
    ///
    /// Flips `paid` and stamps `paid_at` only when the obligation is still
    /// unpaid; an already-settled obligation is reported as
    /// [`MarkPaidOutcome::AlreadyPaid`] without touching its original
    /// timestamp.
    fn try_mark_paid(
        &self,
        id: ObligationId,
        paid_at: DateTime<Utc>,
    ) -> Result<MarkPaidOutcome, StoreError>;

    /// Returns the receipt for an obligation, if one was issued.
    fn receipt_for(&self, obligation_id: ObligationId) -> Result<Option<Receipt>, StoreError>;

    /// Stores a receipt unless the obligation already has one, returning
    /// whichever receipt is on record afterwards.
    fn insert_receipt_if_absent(&self, receipt: Receipt) -> Result<Receipt, StoreError>;
}
