//! View-level state for the schedule listing.
//!
//! A view holds the active filter selection; any change to it starts a
//! fresh fetch cycle. Cycles are tagged with a monotonically increasing
//! sequence number and only the latest cycle's outcome is ever applied,
//! so a slow response can never overwrite a newer one.

use agendo_core::agenda::{AgendaItem, FilterMode};
use chrono::NaiveDate;

/// What the view currently displays. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// A fetch cycle is in flight.
    Loading,
    /// The last cycle settled with a displayable list.
    Ready(Vec<AgendaItem>),
    /// The last cycle failed; the reason is shown instead of stale data.
    Failed(String),
}

/// Token tying a fetch cycle's outcome back to the request that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Filter selection plus the display state it drives.
#[derive(Debug)]
pub struct ScheduleView {
    mode: FilterMode,
    reference_day: Option<NaiveDate>,
    seq: u64,
    state: ViewState,
}

impl ScheduleView {
    pub fn new(mode: FilterMode, reference_day: Option<NaiveDate>) -> Self {
        Self {
            mode,
            reference_day,
            seq: 0,
            state: ViewState::Loading,
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn reference_day(&self) -> Option<NaiveDate> {
        self.reference_day
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Change the filter mode. Invalidates any in-flight cycle.
    pub fn set_mode(&mut self, mode: FilterMode) -> FetchTicket {
        self.mode = mode;
        self.begin_refresh()
    }

    /// Change the reference day. Invalidates any in-flight cycle.
    pub fn set_reference_day(&mut self, reference_day: Option<NaiveDate>) -> FetchTicket {
        self.reference_day = reference_day;
        self.begin_refresh()
    }

    /// Start a fetch cycle and return its ticket.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.seq += 1;
        self.state = ViewState::Loading;
        FetchTicket(self.seq)
    }

    /// Apply a cycle's outcome. Returns `false` when the ticket is stale
    /// (a newer cycle was started since); stale outcomes are discarded
    /// without touching the displayed state.
    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<AgendaItem>, String>,
    ) -> bool {
        if ticket.0 != self.seq {
            tracing::debug!(ticket = ticket.0, current = self.seq, "discarding stale fetch cycle");
            return false;
        }

        self.state = match outcome {
            Ok(items) => ViewState::Ready(items),
            Err(reason) => ViewState::Failed(reason),
        };
        true
    }
}
