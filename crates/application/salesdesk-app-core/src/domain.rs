use crate::error::ConsoleError;
use std::fmt;

/// Navigation targets of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Salespeople,
    Sales,
    /// The id is the raw path segment; it is not checked to be numeric.
    SalespersonDetail(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Route, ConsoleError> {
        let trimmed = path.trim().trim_matches('/');
        let mut parts = trimmed.splitn(2, '/');
        match (parts.next(), parts.next()) {
            (Some("salespeople"), None) => Ok(Route::Salespeople),
            (Some("sales"), None) => Ok(Route::Sales),
            (Some("salesperson"), Some(id)) if !id.is_empty() && !id.contains('/') => {
                Ok(Route::SalespersonDetail(id.to_string()))
            }
            _ => Err(ConsoleError::UnknownRoute(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Salespeople => f.write_str("salespeople"),
            Route::Sales => f.write_str("sales"),
            Route::SalespersonDetail(id) => write!(f, "salesperson/{id}"),
        }
    }
}

/// Whether a list is synchronized with the record service or is a local demo copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Server,
    Mock,
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMode::Server => f.write_str("server-backed"),
            ListMode::Mock => f.write_str("mock"),
        }
    }
}
