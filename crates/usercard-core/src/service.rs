//! Async driver around [`CardState`].
//!
//! [`run_fetch`] and [`run_mount`] are the one fetch path for every card:
//! take a ticket, await the source with no borrow of the state held,
//! resolve the ticket and log the outcome. They work against any
//! [`CardStore`], so the desktop card drives them over its signal and
//! [`CardService`] drives them over a lock.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::actions::{ContactAction, ContactKind, Navigator};
use crate::card::{ApplyPolicy, CardState, FetchOutcome};
use crate::source::ProfileSource;

/// Somewhere a card's state lives.
///
/// `update` must not hold its borrow past the closure; the fetch driver
/// calls it on both sides of the network await.
pub trait CardStore {
    fn update<R>(&self, f: impl FnOnce(&mut CardState) -> R) -> R;
}

impl CardStore for Mutex<CardState> {
    fn update<R>(&self, f: impl FnOnce(&mut CardState) -> R) -> R {
        f(&mut *self.lock())
    }
}

/// One fetch. Not guarded against re-entry; overlapping calls are
/// reconciled by the state's [`ApplyPolicy`].
pub async fn run_fetch<T, S>(store: &T, source: &S) -> FetchOutcome
where
    T: CardStore + ?Sized,
    S: ProfileSource + ?Sized,
{
    let ticket = store.update(CardState::begin_fetch);
    debug!(source = source.label(), ticket = ticket.id(), "Fetching profile");

    let result = source.fetch_person().await;
    let outcome = store.update(|state| state.complete(ticket, result));

    match &outcome {
        FetchOutcome::Applied => {
            info!(source = source.label(), ticket = ticket.id(), "Profile loaded")
        }
        FetchOutcome::Superseded => {
            debug!(ticket = ticket.id(), "Discarding response from superseded fetch")
        }
        FetchOutcome::Failed(err) => {
            warn!(source = source.label(), ticket = ticket.id(), "Error fetching user data: {}", err)
        }
    }
    outcome
}

/// First activation: fetch once. Later calls return `None` without
/// touching the network.
pub async fn run_mount<T, S>(store: &T, source: &S) -> Option<FetchOutcome>
where
    T: CardStore + ?Sized,
    S: ProfileSource + ?Sized,
{
    if !store.update(CardState::claim_mount) {
        return None;
    }
    Some(run_fetch(store, source).await)
}

/// Card state behind a lock, paired with the source it fetches from.
pub struct CardService<S: ?Sized> {
    state: Arc<Mutex<CardState>>,
    source: Arc<S>,
}

impl<S: ?Sized> Clone for CardService<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: ProfileSource> CardService<S> {
    pub fn new(source: S) -> Self {
        Self::from_arc(Arc::new(source), ApplyPolicy::default())
    }
}

impl<S: ProfileSource + ?Sized> CardService<S> {
    pub fn from_arc(source: Arc<S>, policy: ApplyPolicy) -> Self {
        Self {
            state: Arc::new(Mutex::new(CardState::with_policy(policy))),
            source,
        }
    }

    pub async fn mount(&self) -> Option<FetchOutcome> {
        run_mount(&*self.state, &*self.source).await
    }

    pub async fn refresh(&self) -> FetchOutcome {
        run_fetch(&*self.state, &*self.source).await
    }

    pub fn toggle_expansion(&self) -> bool {
        self.state.lock().toggle_expansion()
    }

    /// Run a contact action for the held record. No-op without a record.
    pub fn contact(&self, kind: ContactKind, navigator: &dyn Navigator) -> Option<ContactAction> {
        let action = self.state.lock().contact_action(kind)?;
        navigator.navigate(&action);
        Some(action)
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading()
    }

    pub fn policy(&self) -> ApplyPolicy {
        self.state.lock().policy()
    }

    /// Copy of the current state for rendering or inspection.
    pub fn snapshot(&self) -> CardState {
        self.state.lock().clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
