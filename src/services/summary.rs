//! Trip summary service
//!
//! Reads one consistent snapshot of a trip through the [`TripLedger`] port and
//! runs it through the aggregation and settlement engine.

use crate::engine::{
    compute_balances, compute_settlements, daily_breakdown, Aggregates, Balances, DaySummary,
    Settlement,
};
use crate::error::TripResult;
use crate::models::{Participant, TripId};
use crate::storage::TripLedger;

/// Everything computed for a trip
#[derive(Debug, Clone)]
pub struct TripSummary {
    pub participants: Vec<Participant>,
    pub aggregates: Aggregates,
    pub balances: Balances,
    pub settlements: Vec<Settlement>,
    pub daily: Vec<DaySummary>,
}

impl TripSummary {
    pub fn has_expenses(&self) -> bool {
        self.aggregates.expense_count > 0
    }
}

/// Service computing trip summaries
pub struct SummaryService<'a, L: TripLedger + ?Sized> {
    ledger: &'a L,
}

impl<'a, L: TripLedger + ?Sized> SummaryService<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Compute aggregates, balances, settlements and the daily log for a trip
    pub fn summarize(&self, trip_id: TripId) -> TripResult<TripSummary> {
        let participants = self.ledger.list_participants(trip_id)?;
        let expenses = self.ledger.list_expenses(trip_id)?;

        let span = tracing::debug_span!("summarize", trip = %trip_id, expenses = expenses.len());
        let _guard = span.enter();

        let (aggregates, balances) = compute_balances(&expenses, &participants);
        let settlements = compute_settlements(&balances);
        let daily = daily_breakdown(&expenses);

        if !balances.total().is_zero() {
            tracing::debug!(drift = %balances.total(), "balances carry rounding drift");
        }

        Ok(TripSummary {
            participants,
            aggregates,
            balances,
            settlements,
            daily,
        })
    }
}
