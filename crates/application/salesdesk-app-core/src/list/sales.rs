use super::{Backing, Mutation, RecordList, Refresh};
use crate::domain::ListMode;
use crate::error::ConsoleError;
use crate::fixtures;
use salesdesk_core::{RecordId, Sale, SaleDto};
use salesdesk_infra::{GatewayError, RecordGateway};
use std::sync::Arc;
use tracing::{debug, info};

pub struct SalesController {
    backing: Backing,
    list: RecordList<Sale>,
}

impl SalesController {
    pub fn new(gateway: Arc<dyn RecordGateway>) -> Self {
        Self {
            backing: Backing::Server(gateway),
            list: RecordList::new("sale", Vec::new()),
        }
    }

    pub fn mock() -> Self {
        Self {
            backing: Backing::Mock,
            list: RecordList::new("sale", fixtures::mock_sales()),
        }
    }

    pub fn mode(&self) -> ListMode {
        self.backing.mode()
    }

    pub fn records(&self) -> Vec<Sale> {
        self.list.snapshot()
    }

    pub fn last_error(&self) -> Option<GatewayError> {
        self.list.last_error()
    }

    pub async fn refresh(&self) -> Result<Refresh, ConsoleError> {
        let gateway = self.backing.gateway("refresh")?;
        Ok(self.refresh_with(gateway).await?)
    }

    async fn refresh_with(&self, gateway: &Arc<dyn RecordGateway>) -> Result<Refresh, GatewayError> {
        self.list.refresh_from(gateway.list_sales()).await
    }

    /// Send `draft` to the service (its id is ignored there), then re-read the list.
    pub async fn create(&self, draft: &Sale) -> Result<Mutation<Sale>, ConsoleError> {
        let gateway = self.backing.gateway("create")?;
        info!(customer = %draft.customer_last_name, "creating sale");
        let result = gateway
            .create_sale(&SaleDto::from(draft))
            .await
            .map(|env| env.map(Sale::from));
        let refresh = self.refresh_with(gateway).await;
        Ok(Mutation { result, refresh })
    }

    pub async fn update(&self, id: RecordId, draft: &Sale) -> Result<Mutation<Sale>, ConsoleError> {
        let gateway = self.backing.gateway("update")?;
        info!(id, "updating sale");
        let result = gateway
            .update_sale(id, &SaleDto::from(draft))
            .await
            .map(|env| env.map(Sale::from));
        let refresh = self.refresh_with(gateway).await;
        Ok(Mutation { result, refresh })
    }

    pub async fn delete(&self, id: RecordId) -> Result<Mutation<()>, ConsoleError> {
        let gateway = self.backing.gateway("delete")?;
        info!(id, "deleting sale");
        let result = gateway.delete_sale(id).await;
        let refresh = self.refresh_with(gateway).await;
        Ok(Mutation { result, refresh })
    }

    /// Append the sample sale to the demo list.
    pub fn add_mock(&self) -> Result<Sale, ConsoleError> {
        self.backing.require_mock("add_mock")?;
        let sale = fixtures::extra_mock_sale();
        self.list.with_records_mut(|records| records.push(sale.clone()));
        debug!(id = sale.id, "mock sale added");
        Ok(sale)
    }
}
