use super::{Backing, Mutation, RecordList, Refresh};
use crate::domain::ListMode;
use crate::error::ConsoleError;
use crate::fixtures;
use crate::row::RowEvent;
use salesdesk_core::{RecordId, Salesperson};
use salesdesk_infra::{GatewayError, RecordGateway};
use std::sync::Arc;
use tracing::{debug, info};

pub struct SalespeopleController {
    backing: Backing,
    list: RecordList<Salesperson>,
}

impl SalespeopleController {
    /// Server-backed list, empty until the first refresh.
    pub fn new(gateway: Arc<dyn RecordGateway>) -> Self {
        Self {
            backing: Backing::Server(gateway),
            list: RecordList::new("salesperson", Vec::new()),
        }
    }

    /// Local demo list seeded with the sample staff.
    pub fn mock() -> Self {
        Self::mock_with(fixtures::mock_salespeople())
    }

    pub fn mock_with(records: Vec<Salesperson>) -> Self {
        Self {
            backing: Backing::Mock,
            list: RecordList::new("salesperson", records),
        }
    }

    pub fn mode(&self) -> ListMode {
        self.backing.mode()
    }

    pub fn records(&self) -> Vec<Salesperson> {
        self.list.snapshot()
    }

    /// Failure of the most recent applied refresh, cleared by the next good one.
    pub fn last_error(&self) -> Option<GatewayError> {
        self.list.last_error()
    }

    pub async fn refresh(&self) -> Result<Refresh, ConsoleError> {
        let gateway = self.backing.gateway("refresh")?;
        Ok(self.refresh_with(gateway).await?)
    }

    async fn refresh_with(&self, gateway: &Arc<dyn RecordGateway>) -> Result<Refresh, GatewayError> {
        self.list.refresh_from(gateway.list_salespeople()).await
    }

    pub async fn delete(&self, id: RecordId) -> Result<Mutation<()>, ConsoleError> {
        let gateway = self.backing.gateway("delete")?;
        info!(id, "deleting salesperson");
        let result = gateway.delete_salesperson(id).await;
        let refresh = self.refresh_with(gateway).await;
        Ok(Mutation { result, refresh })
    }

    /// Remove the matching record from the demo list. Unknown ids are ignored.
    pub fn delete_mock(&self, id: RecordId) -> Result<bool, ConsoleError> {
        self.backing.require_mock("delete_mock")?;
        let removed = self.list.with_records_mut(|records| {
            match records.iter().position(|sp| sp.id == id) {
                Some(ix) => {
                    records.remove(ix);
                    true
                }
                None => false,
            }
        });
        debug!(id, removed, "mock delete");
        Ok(removed)
    }

    /// Give the matching demo record a raise, truncated to a whole amount.
    /// Returns the new salary, or `None` for an unknown id.
    pub fn raise_mock(&self, id: RecordId) -> Result<Option<f64>, ConsoleError> {
        self.backing.require_mock("raise_mock")?;
        let raised = self.list.with_records_mut(|records| {
            records.iter_mut().find(|sp| sp.id == id).map(|sp| {
                sp.salary = (sp.salary * salesdesk_config::RAISE_FACTOR).floor();
                sp.salary
            })
        });
        debug!(id, ?raised, "mock raise");
        Ok(raised)
    }

    /// React to an event emitted by one of this list's rows.
    ///
    /// Delete follows the list's mode; raises only exist for the demo list.
    pub async fn handle_row_event(&self, event: RowEvent) -> Result<(), ConsoleError> {
        match event {
            RowEvent::DeleteRequested(id) => match self.backing.mode() {
                ListMode::Server => {
                    let mutation = self.delete(id).await?;
                    mutation.result.map(|_| ()).map_err(ConsoleError::from)
                }
                ListMode::Mock => self.delete_mock(id).map(|_| ()),
            },
            RowEvent::RaiseRequested(id) => self.raise_mock(id).map(|_| ()),
            RowEvent::FavoriteSelected { id, .. } => {
                debug!(id, "favorite picked from row");
                Ok(())
            }
        }
    }
}
