//! Sample records used by mock-mode lists.

use salesdesk_core::{Sale, Salesperson};

pub fn mock_salespeople() -> Vec<Salesperson> {
    vec![
        Salesperson::new(1, "John", "Doe", "Electronics", "2020-01-15", 60000.0),
        Salesperson::new(2, "Jane", "Smith", "Furniture", "2019-03-22", 55000.0),
        Salesperson::new(3, "Emily", "Johnson", "Clothing", "2021-07-30", 50000.0),
        Salesperson::new(4, "Michael", "Brown", "Sports", "2018-11-12", 65000.0),
    ]
}

pub fn mock_sales() -> Vec<Sale> {
    vec![
        Sale::new(1, "Alice B.", "TechCorp", "2023-10-01", 100000.0, 3000),
        Sale::new(2, "Bob C.", "InnovateLtd", "2023-10-05", 150000.0, 4500),
        Sale::new(3, "Charlie D.", "SolutionsInc", "2023-10-10", 200000.0, 6000),
        Sale::new(4, "Diana E.", "FutureWorks", "2023-10-12", 175000.0, 5250),
        Sale::new(5, "Ethan F.", "NextGen", "2023-10-14", 225000.0, 6750),
        Sale::new(6, "Gloria N.", "Excelsis", "2023-10-15", 250000.0, 7500),
    ]
}

/// The sale appended by the demo "add sale" action.
pub fn extra_mock_sale() -> Sale {
    Sale::new(7, "Hank G.", "AlphaBeta", "2023-10-20", 300000.0, 9000)
}
