//! Portfolio view types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use parcela_shared::types::ClientId;

use crate::agreement::Client;
use crate::ledger::{AgreementRef, Obligation, Receipt};

/// Rollup of a single agreement's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementSummary {
    /// The agreement being summarized.
    pub agreement: AgreementRef,
    /// Sum of unpaid amounts.
    pub pending_total: Decimal,
    /// True when any unpaid obligation is strictly past due.
    pub delinquent: bool,
    /// Full schedule, ordered by period.
    pub obligations: Vec<Obligation>,
}

/// One line of a client summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementStanding {
    /// The agreement.
    pub agreement: AgreementRef,
    /// Display label of the asset, e.g. `"Lote 3 - Las Acacias"`.
    pub asset: String,
    /// Sum of unpaid amounts under this agreement.
    pub pending_total: Decimal,
    /// True when this agreement has an unpaid obligation past due.
    pub delinquent: bool,
}

/// Rollup across every active agreement a client holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSummary {
    /// The client.
    pub client_id: ClientId,
    /// Number of active agreements.
    pub active_agreements: usize,
    /// Pending amounts summed across active agreements.
    pub total_pending: Decimal,
    /// True when any active agreement is delinquent.
    pub delinquent: bool,
    /// Per-agreement lines, sales before rentals.
    pub agreements: Vec<AgreementStanding>,
}

/// Everything an external renderer needs to print one receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptDetails {
    /// The receipt on record.
    pub receipt: Receipt,
    /// The settled obligation.
    pub obligation: Obligation,
    /// The paying client.
    pub client: Client,
    /// Display label of the asset.
    pub asset: String,
    /// Total sale price; `None` for rental receipts.
    pub agreement_total: Option<Decimal>,
    /// Down payment; `None` for rental receipts.
    pub down_payment: Option<Decimal>,
}
