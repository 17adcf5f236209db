//! In-process [`Store`] backed by a `RwLock`-guarded state map.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use parcela_shared::types::{ClientId, LotId, ObligationId, PropertyId, RentalAgreementId, SaleAgreementId};

use crate::agreement::{
    Client, Lot, Property, RentalAgreement, RentalAgreementStatus, SaleAgreement,
    SaleAgreementStatus,
};
use crate::ledger::{AgreementRef, Obligation, Receipt};

use super::error::StoreError;
use super::{MarkPaidOutcome, Store};

#[derive(Debug, Default)]
struct State {
    clients: HashMap<ClientId, Client>,
    lots: HashMap<LotId, Lot>,
    properties: HashMap<PropertyId, Property>,
    sales: HashMap<SaleAgreementId, SaleAgreement>,
    rentals: HashMap<RentalAgreementId, RentalAgreement>,
    obligations: HashMap<ObligationId, Obligation>,
    // Keyed by obligation, which is what makes receipt issuance idempotent.
    receipts: HashMap<ObligationId, Receipt>,
}

/// In-memory store. A single write lock serializes every multi-entity
/// operation, which is what gives `create_sale` and `try_mark_paid` their
/// atomicity.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn active_sale(state: &State, lot_id: LotId) -> Option<&SaleAgreement> {
    state
        .sales
        .values()
        .find(|a| a.lot_id == lot_id && a.status == SaleAgreementStatus::Active)
}

fn active_rental(state: &State, property_id: PropertyId) -> Option<&RentalAgreement> {
    state
        .rentals
        .values()
        .find(|a| a.property_id == property_id && a.status == RentalAgreementStatus::Active)
}

impl Store for MemoryStore {
    fn insert_client(&self, client: Client) -> Result<(), StoreError> {
        self.write().clients.insert(client.id, client);
        Ok(())
    }

    fn client(&self, id: ClientId) -> Result<Client, StoreError> {
        self.read()
            .clients
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "client",
                id: id.into_inner(),
            })
    }

    fn insert_lot(&self, lot: Lot) -> Result<(), StoreError> {
        self.write().lots.insert(lot.id, lot);
        Ok(())
    }

    fn lot(&self, id: LotId) -> Result<Lot, StoreError> {
        self.read()
            .lots
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "lot",
                id: id.into_inner(),
            })
    }

    fn insert_property(&self, property: Property) -> Result<(), StoreError> {
        self.write().properties.insert(property.id, property);
        Ok(())
    }

    fn property(&self, id: PropertyId) -> Result<Property, StoreError> {
        self.read()
            .properties
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "property",
                id: id.into_inner(),
            })
    }

    fn sale_agreement(&self, id: SaleAgreementId) -> Result<SaleAgreement, StoreError> {
        self.read()
            .sales
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "sale agreement",
                id: id.into_inner(),
            })
    }

    fn rental_agreement(&self, id: RentalAgreementId) -> Result<RentalAgreement, StoreError> {
        self.read()
            .rentals
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "rental agreement",
                id: id.into_inner(),
            })
    }

    fn active_sale_for_lot(&self, lot_id: LotId) -> Result<Option<SaleAgreement>, StoreError> {
        Ok(active_sale(&self.read(), lot_id).cloned())
    }

    fn active_rental_for_property(
        &self,
        property_id: PropertyId,
    ) -> Result<Option<RentalAgreement>, StoreError> {
        Ok(active_rental(&self.read(), property_id).cloned())
    }

    fn sale_agreements_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<SaleAgreement>, StoreError> {
        let state = self.read();
        let mut agreements: Vec<_> = state
            .sales
            .values()
            .filter(|a| a.client_id == client_id)
            .cloned()
            .collect();
        agreements.sort_by_key(|a| a.id.into_inner());
        Ok(agreements)
    }

    fn rental_agreements_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<RentalAgreement>, StoreError> {
        let state = self.read();
        let mut agreements: Vec<_> = state
            .rentals
            .values()
            .filter(|a| a.client_id == client_id)
            .cloned()
            .collect();
        agreements.sort_by_key(|a| a.id.into_inner());
        Ok(agreements)
    }

    fn set_sale_status(
        &self,
        id: SaleAgreementId,
        status: SaleAgreementStatus,
    ) -> Result<(), StoreError> {
        let mut state = self.write();
        let agreement = state.sales.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "sale agreement",
            id: id.into_inner(),
        })?;
        agreement.status = status;
        Ok(())
    }

    fn set_rental_status(
        &self,
        id: RentalAgreementId,
        status: RentalAgreementStatus,
    ) -> Result<(), StoreError> {
        let mut state = self.write();
        let agreement = state.rentals.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "rental agreement",
            id: id.into_inner(),
        })?;
        agreement.status = status;
        Ok(())
    }

    fn create_sale(
        &self,
        agreement: SaleAgreement,
        obligations: Vec<Obligation>,
        purchased_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut state = self.write();

        // All checks run against the locked state before the first write.
        let lot = state.lots.get(&agreement.lot_id).ok_or(StoreError::NotFound {
            entity: "lot",
            id: agreement.lot_id.into_inner(),
        })?;
        if !lot.is_available() || active_sale(&state, agreement.lot_id).is_some() {
            return Err(StoreError::AssetUnavailable {
                id: agreement.lot_id.into_inner(),
            });
        }
        if !state.clients.contains_key(&agreement.client_id) {
            return Err(StoreError::NotFound {
                entity: "client",
                id: agreement.client_id.into_inner(),
            });
        }

        let lot_id = agreement.lot_id;
        let client_id = agreement.client_id;
        for obligation in obligations {
            state.obligations.insert(obligation.id, obligation);
        }
        state.sales.insert(agreement.id, agreement);
        if let Some(lot) = state.lots.get_mut(&lot_id) {
            lot.buyer = Some(client_id);
            lot.purchased_at = Some(purchased_at);
        }
        Ok(())
    }

    fn create_rental(
        &self,
        agreement: RentalAgreement,
        obligations: Vec<Obligation>,
    ) -> Result<(), StoreError> {
        let mut state = self.write();

        let property =
            state
                .properties
                .get(&agreement.property_id)
                .ok_or(StoreError::NotFound {
                    entity: "property",
                    id: agreement.property_id.into_inner(),
                })?;
        if !property.is_available() || active_rental(&state, agreement.property_id).is_some() {
            return Err(StoreError::AssetUnavailable {
                id: agreement.property_id.into_inner(),
            });
        }
        if !state.clients.contains_key(&agreement.client_id) {
            return Err(StoreError::NotFound {
                entity: "client",
                id: agreement.client_id.into_inner(),
            });
        }

        let property_id = agreement.property_id;
        let client_id = agreement.client_id;
        for obligation in obligations {
            state.obligations.insert(obligation.id, obligation);
        }
        state.rentals.insert(agreement.id, agreement);
        if let Some(property) = state.properties.get_mut(&property_id) {
            property.rented_by = Some(client_id);
            property.rental_active = true;
        }
        Ok(())
    }

    fn cancel_sale(&self, lot_id: LotId) -> Result<Option<SaleAgreementId>, StoreError> {
        let mut state = self.write();

        if !state.lots.contains_key(&lot_id) {
            return Err(StoreError::NotFound {
                entity: "lot",
                id: lot_id.into_inner(),
            });
        }

        let Some(agreement_id) = active_sale(&state, lot_id).map(|a| a.id) else {
            return Ok(None);
        };
        if let Some(agreement) = state.sales.get_mut(&agreement_id) {
            agreement.status = SaleAgreementStatus::Cancelled;
        }
        if let Some(lot) = state.lots.get_mut(&lot_id) {
            lot.buyer = None;
            lot.purchased_at = None;
        }
        Ok(Some(agreement_id))
    }

    fn obligation(&self, id: ObligationId) -> Result<Obligation, StoreError> {
        self.read()
            .obligations
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "obligation",
                id: id.into_inner(),
            })
    }

    fn obligations_for(&self, agreement: AgreementRef) -> Result<Vec<Obligation>, StoreError> {
        let state = self.read();
        let mut rows: Vec<_> = state
            .obligations
            .values()
            .filter(|o| o.agreement == agreement)
            .cloned()
            .collect();
        rows.sort_by_key(|o| o.period);
        Ok(rows)
    }

    fn try_mark_paid(
        &self,
        id: ObligationId,
        paid_at: DateTime<Utc>,
    ) -> Result<MarkPaidOutcome, StoreError> {
        let mut state = self.write();
        let obligation = state.obligations.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "obligation",
            id: id.into_inner(),
        })?;

        if obligation.paid {
            return Ok(MarkPaidOutcome::AlreadyPaid(obligation.clone()));
        }
        obligation.paid = true;
        obligation.paid_at = Some(paid_at);
        Ok(MarkPaidOutcome::Updated(obligation.clone()))
    }

    fn receipt_for(&self, obligation_id: ObligationId) -> Result<Option<Receipt>, StoreError> {
        Ok(self.read().receipts.get(&obligation_id).cloned())
    }

    fn insert_receipt_if_absent(&self, receipt: Receipt) -> Result<Receipt, StoreError> {
        let mut state = self.write();
        let stored = state
            .receipts
            .entry(receipt.obligation_id)
            .or_insert(receipt);
        Ok(stored.clone())
    }
}
