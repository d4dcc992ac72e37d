#![allow(dead_code)]

use salesdesk_core::{RecordId, SaleDto, SalespersonDto};
use salesdesk_infra::{Envelope, GatewayError, RecordGateway};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted answer for one list call.
pub struct Scripted<T> {
    pub delay: Duration,
    pub result: Result<Vec<T>, GatewayError>,
}

/// In-memory record service that counts calls and can be told to fail.
#[derive(Default)]
pub struct FakeGateway {
    pub calls: Mutex<Vec<String>>,
    pub sales: Mutex<Vec<SaleDto>>,
    pub salespeople: Mutex<Vec<SalespersonDto>>,
    pub scripted_salespeople: Mutex<VecDeque<Scripted<SalespersonDto>>>,
    pub fail_lists: Mutex<Option<GatewayError>>,
    pub fail_mutations: Mutex<Option<GatewayError>>,
    pub received: Mutex<Vec<SaleDto>>,
}

pub fn person(id: RecordId, first: &str, last: &str, salary: f64) -> SalespersonDto {
    SalespersonDto {
        id,
        first_name: first.into(),
        last_name: last.into(),
        department: "Sales".into(),
        hire_date: "2020-01-01".into(),
        salary,
    }
}

pub fn sale(id: RecordId, first: &str, total: f64) -> SaleDto {
    SaleDto {
        id,
        customer_first_name: first.into(),
        customer_last_name: "Customer".into(),
        date: "2023-10-01".into(),
        total,
        salesperson_id: 1,
    }
}

impl FakeGateway {
    pub fn with_salespeople(people: Vec<SalespersonDto>) -> Self {
        let gw = Self::default();
        *gw.salespeople.lock().unwrap() = people;
        gw
    }

    pub fn with_sales(sales: Vec<SaleDto>) -> Self {
        let gw = Self::default();
        *gw.sales.lock().unwrap() = sales;
        gw
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == name).count()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn list_failure(&self) -> Option<GatewayError> {
        self.fail_lists.lock().unwrap().clone()
    }

    fn mutation_failure(&self) -> Option<GatewayError> {
        self.fail_mutations.lock().unwrap().clone()
    }
}

fn ok<T>(status: u16, body: Option<T>) -> Result<Envelope<T>, GatewayError> {
    Ok(Envelope { status, body })
}

#[async_trait::async_trait]
impl RecordGateway for FakeGateway {
    async fn list_sales(&self) -> Result<Envelope<Vec<SaleDto>>, GatewayError> {
        self.record("list_sales");
        if let Some(e) = self.list_failure() {
            return Err(e);
        }
        ok(200, Some(self.sales.lock().unwrap().clone()))
    }

    async fn list_salespeople(&self) -> Result<Envelope<Vec<SalespersonDto>>, GatewayError> {
        self.record("list_salespeople");
        let scripted = self.scripted_salespeople.lock().unwrap().pop_front();
        if let Some(step) = scripted {
            tokio::time::sleep(step.delay).await;
            return step.result.map(|body| Envelope {
                status: 200,
                body: Some(body),
            });
        }
        if let Some(e) = self.list_failure() {
            return Err(e);
        }
        ok(200, Some(self.salespeople.lock().unwrap().clone()))
    }

    async fn fetch_salesperson(&self, id: &str) -> Result<Envelope<SalespersonDto>, GatewayError> {
        self.record(format!("fetch_salesperson:{id}"));
        let found = id.parse::<RecordId>().ok().and_then(|id| {
            self.salespeople
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
        });
        match found {
            Some(p) => ok(200, Some(p)),
            None => Err(GatewayError::Status { status: 404 }),
        }
    }

    async fn create_sale(&self, sale: &SaleDto) -> Result<Envelope<SaleDto>, GatewayError> {
        self.record("create_sale");
        self.received.lock().unwrap().push(sale.clone());
        if let Some(e) = self.mutation_failure() {
            return Err(e);
        }
        let mut created = sale.clone();
        let mut sales = self.sales.lock().unwrap();
        created.id = sales.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        sales.push(created.clone());
        ok(201, Some(created))
    }

    async fn update_sale(
        &self,
        id: RecordId,
        sale: &SaleDto,
    ) -> Result<Envelope<SaleDto>, GatewayError> {
        self.record(format!("update_sale:{id}"));
        self.received.lock().unwrap().push(sale.clone());
        if let Some(e) = self.mutation_failure() {
            return Err(e);
        }
        let mut sales = self.sales.lock().unwrap();
        match sales.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                *existing = SaleDto { id, ..sale.clone() };
                ok(200, Some(existing.clone()))
            }
            None => Err(GatewayError::Status { status: 404 }),
        }
    }

    async fn delete_sale(&self, id: RecordId) -> Result<Envelope<()>, GatewayError> {
        self.record(format!("delete_sale:{id}"));
        if let Some(e) = self.mutation_failure() {
            return Err(e);
        }
        self.sales.lock().unwrap().retain(|s| s.id != id);
        ok(200, None)
    }

    async fn delete_salesperson(&self, id: RecordId) -> Result<Envelope<()>, GatewayError> {
        self.record(format!("delete_salesperson:{id}"));
        if let Some(e) = self.mutation_failure() {
            return Err(e);
        }
        self.salespeople.lock().unwrap().retain(|p| p.id != id);
        ok(200, None)
    }
}
