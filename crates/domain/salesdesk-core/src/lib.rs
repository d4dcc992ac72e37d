use serde::{Deserialize, Serialize};

pub mod formats;
pub mod text;

pub use formats::{SaleDto, SalespersonDto};
pub use text::alternate_case;

/// Server-assigned record identifier. `0` marks a record that has not been saved yet.
pub type RecordId = i64;

pub const UNSAVED_ID: RecordId = 0;

/// A sales transaction as the console models it.
///
/// `total` is the authoritative amount; nothing in the console derives it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: RecordId,
    pub customer_first_name: String,
    pub customer_last_name: String,
    /// ISO-8601 calendar date, kept as the server sent it.
    pub date: String,
    pub total: f64,
    pub salesperson_id: RecordId,
}

impl Sale {
    pub fn new(
        id: RecordId,
        customer_first_name: impl Into<String>,
        customer_last_name: impl Into<String>,
        date: impl Into<String>,
        total: f64,
        salesperson_id: RecordId,
    ) -> Self {
        Self {
            id,
            customer_first_name: customer_first_name.into(),
            customer_last_name: customer_last_name.into(),
            date: date.into(),
            total,
            salesperson_id,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_ID
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Salesperson {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub hire_date: String,
    pub salary: f64,
}

impl Salesperson {
    pub fn new(
        id: RecordId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        hire_date: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
            hire_date: hire_date.into(),
            salary,
        }
    }

    /// Placeholder shown while a lookup is still pending.
    pub fn blank() -> Self {
        Self::new(UNSAVED_ID, "", "", "", "", 0.0)
    }

    /// Name published when this salesperson is picked as the favorite.
    pub fn favorite_name(&self) -> &str {
        &self.first_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Default for Salesperson {
    fn default() -> Self {
        Self::blank()
    }
}

/// Identifier and status code captured from a failed single-record lookup.
///
/// Both fields are empty until a lookup fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchFailure {
    pub id: String,
    pub status: String,
}

impl FetchFailure {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.id.is_empty() && self.status.is_empty()
    }
}
