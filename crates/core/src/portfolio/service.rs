//! Read-side rollups over agreements and obligations.

use chrono::NaiveDate;

use parcela_shared::types::{ClientId, ObligationId};

use crate::agreement::{RentalAgreementStatus, SaleAgreementStatus};
use crate::clock::Clock;
use crate::ledger::{AgreementRef, LedgerService};
use crate::store::Store;

use super::error::PortfolioError;
use super::types::{AgreementStanding, AgreementSummary, ClientSummary, ReceiptDetails};

/// Assembles client-facing views. Pure reads; nothing here writes to the
/// store.
pub struct PortfolioService;

impl PortfolioService {
    /// Summarizes one agreement's schedule as of the clock's current date.
    pub fn agreement_summary(
        store: &dyn Store,
        clock: &dyn Clock,
        agreement: AgreementRef,
    ) -> Result<AgreementSummary, PortfolioError> {
        // Reject dangling references before reading rows.
        match agreement {
            AgreementRef::Sale(id) => {
                store.sale_agreement(id)?;
            }
            AgreementRef::Rental(id) => {
                store.rental_agreement(id)?;
            }
        }

        let obligations = store.obligations_for(agreement)?;
        Ok(AgreementSummary {
            agreement,
            pending_total: LedgerService::pending_total(&obligations),
            delinquent: LedgerService::is_delinquent(&obligations, clock.today()),
            obligations,
        })
    }

    /// Rolls up a client's active agreements.
    ///
    /// Pending amounts sum across agreements; one delinquent agreement
    /// marks the whole client delinquent. Completed and cancelled
    /// agreements are excluded, so obligations orphaned by a voided sale
    /// never count against the client.
    pub fn client_summary(
        store: &dyn Store,
        clock: &dyn Clock,
        client_id: ClientId,
    ) -> Result<ClientSummary, PortfolioError> {
        store.client(client_id)?;
        let as_of = clock.today();
        let mut agreements = Vec::new();

        for sale in store.sale_agreements_for_client(client_id)? {
            if sale.status != SaleAgreementStatus::Active {
                continue;
            }
            let lot = store.lot(sale.lot_id)?;
            agreements.push(Self::standing(
                store,
                AgreementRef::Sale(sale.id),
                lot_label(&lot.subdivision, lot.number),
                as_of,
            )?);
        }
        for rental in store.rental_agreements_for_client(client_id)? {
            if rental.status != RentalAgreementStatus::Active {
                continue;
            }
            let property = store.property(rental.property_id)?;
            agreements.push(Self::standing(
                store,
                AgreementRef::Rental(rental.id),
                property.name,
                as_of,
            )?);
        }

        Ok(ClientSummary {
            client_id,
            active_agreements: agreements.len(),
            total_pending: agreements.iter().map(|a| a.pending_total).sum(),
            delinquent: agreements.iter().any(|a| a.delinquent),
            agreements,
        })
    }

    /// Gathers everything needed to render the receipt of a settled
    /// obligation.
    pub fn receipt_details(
        store: &dyn Store,
        obligation_id: ObligationId,
    ) -> Result<ReceiptDetails, PortfolioError> {
        let receipt = store
            .receipt_for(obligation_id)?
            .ok_or(PortfolioError::Unsettled(obligation_id))?;
        let obligation = store.obligation(obligation_id)?;

        let (client_id, asset, agreement_total, down_payment) = match obligation.agreement {
            AgreementRef::Sale(id) => {
                let sale = store.sale_agreement(id)?;
                let lot = store.lot(sale.lot_id)?;
                (
                    sale.client_id,
                    lot_label(&lot.subdivision, lot.number),
                    Some(sale.total_price),
                    Some(sale.down_payment),
                )
            }
            AgreementRef::Rental(id) => {
                let rental = store.rental_agreement(id)?;
                let property = store.property(rental.property_id)?;
                (rental.client_id, property.name, None, None)
            }
        };

        Ok(ReceiptDetails {
            receipt,
            obligation,
            client: store.client(client_id)?,
            asset,
            agreement_total,
            down_payment,
        })
    }

    fn standing(
        store: &dyn Store,
        agreement: AgreementRef,
        asset: String,
        as_of: NaiveDate,
    ) -> Result<AgreementStanding, PortfolioError> {
        let obligations = store.obligations_for(agreement)?;
        Ok(AgreementStanding {
            agreement,
            asset,
            pending_total: LedgerService::pending_total(&obligations),
            delinquent: LedgerService::is_delinquent(&obligations, as_of),
        })
    }
}

fn lot_label(subdivision: &str, number: u32) -> String {
    format!("Lote {number} - {subdivision}")
}
