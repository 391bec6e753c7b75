//! Card state and its transitions.
//!
//! All widget state lives in [`CardState`] and only changes through the
//! methods below. Two axes are tracked independently:
//!
//! ```text
//! fetch axis:      idle --begin_fetch--> loading --complete/cancel--> idle
//! expansion axis:  collapsed <--toggle_expansion--> expanded
//! ```
//!
//! A failed fetch is not a third state: the card goes back to idle with
//! whatever record it already had. The failure is kept in
//! [`CardState::last_failure`] for callers that want to observe it.

use std::collections::BTreeSet;

use crate::actions::{ContactAction, ContactKind};
use crate::error::{FetchError, FetchResult};
use crate::gender::GenderIcon;
use crate::types::Person;

/// Identifies one fetch attempt. Ids only ever increase.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// How overlapping fetches are reconciled.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ApplyPolicy {
    /// Every successful fetch replaces the record as it resolves, so the
    /// last response to arrive wins regardless of request order.
    #[default]
    LastResolved,
    /// A success never replaces a record that came from a newer request.
    /// An older success still lands if nothing newer has succeeded yet.
    LatestIssued,
}

/// What happened to a completed fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The record was replaced
    Applied,
    /// Succeeded, but a newer fetch had already been applied, or the
    /// ticket was cancelled
    Superseded,
    /// Failed; the held record is unchanged
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CardState {
    record: Option<Person>,
    expanded: bool,
    in_flight: BTreeSet<FetchTicket>,
    next_id: u64,
    /// Ticket id behind the held record; 0 before the first success
    applied_id: u64,
    mounted: bool,
    policy: ApplyPolicy,
    last_failure: Option<FetchError>,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ApplyPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn record(&self) -> Option<&Person> {
        self.record.as_ref()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// True exactly while at least one fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn policy(&self) -> ApplyPolicy {
        self.policy
    }

    pub fn last_failure(&self) -> Option<&FetchError> {
        self.last_failure.as_ref()
    }

    /// Number of fetches started so far.
    pub fn issued(&self) -> u64 {
        self.next_id
    }

    /// Mark the card as mounted. True only on the first call, which is the
    /// one that should trigger the initial fetch.
    pub fn claim_mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start a fetch. Re-entry is allowed: earlier tickets stay in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_id += 1;
        let ticket = FetchTicket(self.next_id);
        self.in_flight.insert(ticket);
        ticket
    }

    /// Resolve a fetch. The loading flag clears once nothing is outstanding,
    /// whatever the outcome. The expansion flag is never touched.
    ///
    /// Results for cancelled tickets are dropped as [`FetchOutcome::Superseded`].
    pub fn complete(&mut self, ticket: FetchTicket, result: FetchResult<Person>) -> FetchOutcome {
        if !self.in_flight.remove(&ticket) {
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(person) => {
                let apply = match self.policy {
                    ApplyPolicy::LastResolved => true,
                    ApplyPolicy::LatestIssued => ticket.0 > self.applied_id,
                };
                if apply {
                    self.record = Some(person);
                    self.applied_id = ticket.0;
                    self.last_failure = None;
                    FetchOutcome::Applied
                } else {
                    FetchOutcome::Superseded
                }
            }
            Err(err) => {
                self.last_failure = Some(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Abandon a fetch without applying anything.
    pub fn cancel(&mut self, ticket: FetchTicket) -> bool {
        self.in_flight.remove(&ticket)
    }

    /// Flip the expansion flag. Does nothing until a record is held,
    /// since the control is not shown before then.
    pub fn toggle_expansion(&mut self) -> bool {
        if self.record.is_some() {
            self.expanded = !self.expanded;
        }
        self.expanded
    }

    pub fn gender_icon(&self) -> Option<GenderIcon> {
        self.record
            .as_ref()
            .map(|p| GenderIcon::from_gender(&p.gender))
    }

    /// Contact target for the held record; `None` before the first success.
    pub fn contact_action(&self, kind: ContactKind) -> Option<ContactAction> {
        self.record.as_ref().map(|p| kind.action_for(p))
    }

    pub fn email_action(&self) -> Option<ContactAction> {
        self.contact_action(ContactKind::Email)
    }

    pub fn call_action(&self) -> Option<ContactAction> {
        self.contact_action(ContactKind::Call)
    }

    pub fn map_action(&self) -> Option<ContactAction> {
        self.contact_action(ContactKind::Map)
    }
}
