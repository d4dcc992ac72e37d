//! Record shapes as the record service sends and accepts them (snake_case fields).

use crate::{RecordId, Sale, Salesperson};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SaleDto {
    // Ignored by the service on create.
    #[serde(default)]
    pub id: RecordId,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub date: String,
    pub total: f64,
    pub salesperson_id: RecordId,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SalespersonDto {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub hire_date: String,
    pub salary: f64,
}

impl From<SaleDto> for Sale {
    fn from(s: SaleDto) -> Sale {
        Sale {
            id: s.id,
            customer_first_name: s.customer_first_name,
            customer_last_name: s.customer_last_name,
            date: s.date,
            total: s.total,
            salesperson_id: s.salesperson_id,
        }
    }
}

impl From<&Sale> for SaleDto {
    fn from(s: &Sale) -> SaleDto {
        SaleDto {
            id: s.id,
            customer_first_name: s.customer_first_name.clone(),
            customer_last_name: s.customer_last_name.clone(),
            date: s.date.clone(),
            total: s.total,
            salesperson_id: s.salesperson_id,
        }
    }
}

impl From<SalespersonDto> for Salesperson {
    fn from(p: SalespersonDto) -> Salesperson {
        Salesperson {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            department: p.department,
            hire_date: p.hire_date,
            salary: p.salary,
        }
    }
}

impl From<&Salesperson> for SalespersonDto {
    fn from(p: &Salesperson) -> SalespersonDto {
        SalespersonDto {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            department: p.department.clone(),
            hire_date: p.hire_date.clone(),
            salary: p.salary,
        }
    }
}
