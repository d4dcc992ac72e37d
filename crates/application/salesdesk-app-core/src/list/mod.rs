//! List controllers: each owns the in-memory sequence shown by one list view.
//!
//! A server-backed list is only ever replaced wholesale by a refresh, and
//! every mutation is followed by exactly one refresh whatever its outcome.
//! A mock list is a local demo copy that is edited in place and never talks
//! to the record service.

use crate::domain::ListMode;
use crate::error::ConsoleError;
use salesdesk_infra::{Envelope, GatewayError, RecordGateway};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

mod sales;
mod salespeople;

pub use sales::SalesController;
pub use salespeople::SalespeopleController;

/// Where a list's records come from. Fixed for the controller's lifetime.
#[derive(Clone)]
pub enum Backing {
    Server(Arc<dyn RecordGateway>),
    Mock,
}

impl Backing {
    pub fn mode(&self) -> ListMode {
        match self {
            Backing::Server(_) => ListMode::Server,
            Backing::Mock => ListMode::Mock,
        }
    }

    pub(crate) fn gateway(
        &self,
        operation: &'static str,
    ) -> Result<&Arc<dyn RecordGateway>, ConsoleError> {
        match self {
            Backing::Server(gw) => Ok(gw),
            Backing::Mock => Err(ConsoleError::ModeMismatch {
                operation,
                mode: ListMode::Mock,
            }),
        }
    }

    pub(crate) fn require_mock(&self, operation: &'static str) -> Result<(), ConsoleError> {
        match self {
            Backing::Mock => Ok(()),
            Backing::Server(_) => Err(ConsoleError::ModeMismatch {
                operation,
                mode: ListMode::Server,
            }),
        }
    }
}

/// What a refresh did to the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The sequence was replaced with this many records.
    Replaced(usize),
    /// The service answered without a body; the sequence is unchanged.
    NoBody,
    /// A newer refresh was issued while this one was in flight; its response was dropped.
    Superseded,
}

/// Outcome of a server-backed mutation and of the refresh that followed it.
#[derive(Debug, Clone)]
pub struct Mutation<T> {
    pub result: Result<Envelope<T>, GatewayError>,
    pub refresh: Result<Refresh, GatewayError>,
}

impl<T> Mutation<T> {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

struct ListState<T> {
    records: Vec<T>,
    issued: u64,
    last_error: Option<GatewayError>,
}

/// Record sequence plus the bookkeeping that orders overlapping refreshes.
pub(crate) struct RecordList<T> {
    resource: &'static str,
    inner: Mutex<ListState<T>>,
}

impl<T: Clone> RecordList<T> {
    pub(crate) fn new(resource: &'static str, records: Vec<T>) -> Self {
        Self {
            resource,
            inner: Mutex::new(ListState {
                records,
                issued: 0,
                last_error: None,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn snapshot(&self) -> Vec<T> {
        self.state().records.clone()
    }

    pub(crate) fn last_error(&self) -> Option<GatewayError> {
        self.state().last_error.clone()
    }

    pub(crate) fn with_records_mut<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        f(&mut self.state().records)
    }

    /// Issue a ticket for a new refresh, superseding any in flight.
    fn issue(&self) -> u64 {
        let mut state = self.state();
        state.issued += 1;
        state.issued
    }

    fn settle(
        &self,
        ticket: u64,
        result: Result<Envelope<Vec<T>>, GatewayError>,
    ) -> Result<Refresh, GatewayError> {
        let mut state = self.state();
        if ticket != state.issued {
            debug!(
                resource = self.resource,
                ticket,
                latest = state.issued,
                "dropping superseded refresh"
            );
            return Ok(Refresh::Superseded);
        }

        match result {
            Ok(Envelope {
                body: Some(records),
                ..
            }) => {
                let count = records.len();
                state.records = records;
                state.last_error = None;
                debug!(resource = self.resource, count, "list replaced");
                Ok(Refresh::Replaced(count))
            }
            Ok(Envelope { body: None, status }) => {
                state.last_error = None;
                debug!(resource = self.resource, status, "refresh returned no body");
                Ok(Refresh::NoBody)
            }
            Err(e) => {
                warn!(resource = self.resource, "refresh failed, keeping current list: {e}");
                state.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Run one list fetch and apply it unless a newer refresh was issued meanwhile.
    pub(crate) async fn refresh_from<D, F>(&self, fetch: F) -> Result<Refresh, GatewayError>
    where
        F: Future<Output = Result<Envelope<Vec<D>>, GatewayError>>,
        T: From<D>,
    {
        let ticket = self.issue();
        let result = fetch
            .await
            .map(|env| env.map(|body| body.into_iter().map(T::from).collect()));
        self.settle(ticket, result)
    }
}
