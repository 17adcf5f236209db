//! Registration and agreement lifecycle.

use rust_decimal::Decimal;
use tracing::info;

use parcela_shared::types::{ClientId, LotId, ObligationId, PropertyId, SaleAgreementId};

use crate::clock::Clock;
use crate::ledger::{AgreementRef, Obligation};
use crate::schedule::{RentalTerms, SaleTerms, ScheduleGenerator, ScheduleRow};
use crate::store::{Store, StoreError};

use super::error::AgreementError;
use super::types::{Client, Lot, Property, RentalAgreement, SaleAgreement};

/// Opens, voids, and registers the entities agreements hang off.
///
/// Every operation validates before writing; a failed validation leaves the
/// store untouched.
pub struct LifecycleService;

impl LifecycleService {
    /// Registers a client. Name and phone are trimmed and must be
    /// non-empty.
    pub fn register_client(
        store: &dyn Store,
        clock: &dyn Clock,
        full_name: &str,
        phone: &str,
    ) -> Result<Client, AgreementError> {
        let full_name = full_name.trim();
        let phone = phone.trim();
        if full_name.is_empty() || phone.is_empty() {
            return Err(AgreementError::IncompleteClient);
        }

        let client = Client {
            id: ClientId::new(),
            full_name: full_name.to_owned(),
            phone: phone.to_owned(),
            created_at: clock.now(),
        };
        store.insert_client(client.clone())?;
        info!(client_id = %client.id, "client registered");
        Ok(client)
    }

    /// Registers an unsold lot.
    pub fn register_lot(
        store: &dyn Store,
        subdivision: &str,
        number: u32,
        area_m2: Decimal,
    ) -> Result<Lot, AgreementError> {
        let lot = Lot::new(LotId::new(), subdivision, number, area_m2);
        store.insert_lot(lot.clone())?;
        Ok(lot)
    }

    /// Registers a vacant property.
    pub fn register_property(store: &dyn Store, name: &str) -> Result<Property, AgreementError> {
        let property = Property::new(PropertyId::new(), name);
        store.insert_property(property.clone())?;
        Ok(property)
    }

    /// Opens a sale agreement on a lot.
    ///
    /// Generates the full installment schedule up front and records
    /// agreement, obligations, and sold markers in one atomic write.
    pub fn create_sale_agreement(
        store: &dyn Store,
        clock: &dyn Clock,
        lot_id: LotId,
        client_id: ClientId,
        terms: &SaleTerms,
    ) -> Result<SaleAgreement, AgreementError> {
        let schedule = ScheduleGenerator::sale_schedule(terms)?;
        store.client(client_id)?;

        let agreement = SaleAgreement::from_terms(lot_id, client_id, terms);
        let obligations = materialize(AgreementRef::Sale(agreement.id), schedule);

        store
            .create_sale(agreement.clone(), obligations, clock.now())
            .map_err(|err| match err {
                StoreError::AssetUnavailable { .. } => AgreementError::LotUnavailable(lot_id),
                other => AgreementError::Store(other),
            })?;

        info!(
            agreement_id = %agreement.id,
            lot_id = %lot_id,
            installments = agreement.installment_count,
            "sale agreement opened"
        );
        Ok(agreement)
    }

    /// Opens a rental agreement on a property.
    pub fn create_rental_agreement(
        store: &dyn Store,
        property_id: PropertyId,
        client_id: ClientId,
        terms: &RentalTerms,
    ) -> Result<RentalAgreement, AgreementError> {
        let schedule = ScheduleGenerator::rental_schedule(terms)?;
        store.client(client_id)?;

        let agreement = RentalAgreement::from_terms(property_id, client_id, terms);
        let obligations = materialize(AgreementRef::Rental(agreement.id), schedule);

        store
            .create_rental(agreement.clone(), obligations)
            .map_err(|err| match err {
                StoreError::AssetUnavailable { .. } => {
                    AgreementError::PropertyUnavailable(property_id)
                }
                other => AgreementError::Store(other),
            })?;

        info!(
            agreement_id = %agreement.id,
            property_id = %property_id,
            "rental agreement opened"
        );
        Ok(agreement)
    }

    /// Voids the active sale on a lot.
    ///
    /// The agreement moves to `Cancelled`, the lot becomes available again,
    /// and the schedule rows stay behind as an audit trail. Voiding a lot
    /// with no active sale succeeds and returns `None`.
    pub fn void_sale_agreement(
        store: &dyn Store,
        lot_id: LotId,
    ) -> Result<Option<SaleAgreementId>, AgreementError> {
        let cancelled = store.cancel_sale(lot_id)?;
        if let Some(agreement_id) = cancelled {
            info!(agreement_id = %agreement_id, lot_id = %lot_id, "sale agreement voided");
        }
        Ok(cancelled)
    }
}

fn materialize(agreement: AgreementRef, rows: Vec<ScheduleRow>) -> Vec<Obligation> {
    rows.into_iter()
        .map(|row| Obligation {
            id: ObligationId::new(),
            agreement,
            period: row.period,
            due_date: row.due_date,
            amount: row.amount,
            paid: false,
            paid_at: None,
        })
        .collect()
}
