//! Settlement and ledger arithmetic.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use parcela_shared::types::{ObligationId, ReceiptId};

use crate::agreement::{RentalAgreementStatus, SaleAgreementStatus};
use crate::clock::Clock;
use crate::store::{MarkPaidOutcome, Store};

use super::error::LedgerError;
use super::types::{AgreementRef, Obligation, Receipt, Settlement};

/// Pure rollup arithmetic over a slice of obligations.
///
/// These take whatever rows the caller fetched; they never touch storage.
pub struct LedgerService;

impl LedgerService {
    /// Sum of unpaid amounts.
    #[must_use]
    pub fn pending_total(rows: &[Obligation]) -> Decimal {
        rows.iter()
            .filter(|o| !o.paid)
            .map(|o| o.amount)
            .sum()
    }

    /// True when any row is unpaid with a due date strictly before `as_of`.
    #[must_use]
    pub fn is_delinquent(rows: &[Obligation], as_of: NaiveDate) -> bool {
        rows.iter().any(|o| o.is_overdue(as_of))
    }

    /// The unpaid row with the lowest period, if any.
    #[must_use]
    pub fn first_unpaid(rows: &[Obligation]) -> Option<&Obligation> {
        rows.iter().filter(|o| !o.paid).min_by_key(|o| o.period)
    }
}

/// Settlement workflow: mark paid, issue the receipt, complete the
/// agreement when the last obligation clears.
pub struct PaymentService;

impl PaymentService {
    /// Settles one obligation by ID.
    ///
    /// Settling an already-paid obligation succeeds without changing
    /// anything; the original `paid_at` and receipt are returned. `paid_at`
    /// defaults to the clock's current instant.
    pub fn mark_paid(
        store: &dyn Store,
        clock: &dyn Clock,
        id: ObligationId,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<Settlement, LedgerError> {
        let paid_at = paid_at.unwrap_or_else(|| clock.now());
        let outcome = store.try_mark_paid(id, paid_at)?;

        let (obligation, newly_settled) = match outcome {
            MarkPaidOutcome::Updated(o) => (o, true),
            MarkPaidOutcome::AlreadyPaid(o) => {
                warn!(obligation_id = %o.id, "settlement replayed on a paid obligation");
                (o, false)
            }
        };

        let receipt = store.insert_receipt_if_absent(Receipt {
            id: ReceiptId::new(),
            obligation_id: obligation.id,
            issued_at: paid_at,
        })?;

        let completed_agreement = if newly_settled {
            Self::complete_if_settled(store, obligation.agreement)?
        } else {
            false
        };

        info!(
            obligation_id = %obligation.id,
            newly_settled,
            completed_agreement,
            "obligation settled"
        );

        Ok(Settlement {
            obligation,
            receipt,
            newly_settled,
            completed_agreement,
        })
    }

    /// Settles the earliest unpaid obligation of an agreement.
    pub fn pay_next(
        store: &dyn Store,
        clock: &dyn Clock,
        agreement: AgreementRef,
    ) -> Result<Settlement, LedgerError> {
        let rows = store.obligations_for(agreement)?;
        let target = LedgerService::first_unpaid(&rows).ok_or(LedgerError::NothingPending)?;
        Self::mark_paid(store, clock, target.id, None)
    }

    /// Moves an agreement to its completed status when every obligation is
    /// paid. Only `Active` agreements transition; a cancelled sale stays
    /// cancelled no matter what happens to its rows afterwards.
    fn complete_if_settled(
        store: &dyn Store,
        agreement: AgreementRef,
    ) -> Result<bool, LedgerError> {
        let rows = store.obligations_for(agreement)?;
        if rows.iter().any(|o| !o.paid) {
            return Ok(false);
        }

        match agreement {
            AgreementRef::Sale(id) => {
                let sale = store.sale_agreement(id)?;
                if sale.status != SaleAgreementStatus::Active {
                    return Ok(false);
                }
                store.set_sale_status(id, SaleAgreementStatus::Completed)?;
                info!(agreement_id = %id, "sale agreement completed");
            }
            AgreementRef::Rental(id) => {
                let rental = store.rental_agreement(id)?;
                if rental.status != RentalAgreementStatus::Active {
                    return Ok(false);
                }
                store.set_rental_status(id, RentalAgreementStatus::Ended)?;
                info!(agreement_id = %id, "rental agreement ended");
            }
        }
        Ok(true)
    }
}
