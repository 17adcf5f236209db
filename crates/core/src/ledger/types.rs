//! Ledger data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use parcela_shared::types::{ObligationId, ReceiptId, RentalAgreementId, SaleAgreementId};

use crate::schedule::ObligationPeriod;

/// Reference to the agreement an obligation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementRef {
    /// An installment sale agreement.
    Sale(SaleAgreementId),
    /// A monthly rental agreement.
    Rental(RentalAgreementId),
}

/// One scheduled payment owed under an agreement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    /// Obligation ID.
    pub id: ObligationId,
    /// Owning agreement.
    pub agreement: AgreementRef,
    /// Position within the agreement's schedule.
    pub period: ObligationPeriod,
    /// Due date.
    pub due_date: NaiveDate,
    /// Amount due.
    pub amount: Decimal,
    /// Whether the obligation has been settled.
    pub paid: bool,
    /// Settlement timestamp, set exactly once when `paid` flips.
    pub paid_at: Option<DateTime<Utc>>,
}

impl Obligation {
    /// True when the obligation is unpaid and its due date has passed.
    ///
    /// An obligation due today is not yet delinquent.
    #[must_use]
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        !self.paid && self.due_date < as_of
    }
}

/// Proof of settlement for one obligation. At most one receipt ever exists
/// per obligation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt ID.
    pub id: ReceiptId,
    /// Settled obligation.
    pub obligation_id: ObligationId,
    /// Issue timestamp.
    pub issued_at: DateTime<Utc>,
}

/// Result of settling an obligation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// The obligation after the attempt.
    pub obligation: Obligation,
    /// The receipt on record for the obligation.
    pub receipt: Receipt,
    /// False when the obligation was already paid and the call was a no-op.
    pub newly_settled: bool,
    /// True when this settlement cleared the agreement's last open
    /// obligation and moved it to its completed status.
    pub completed_agreement: bool,
}
