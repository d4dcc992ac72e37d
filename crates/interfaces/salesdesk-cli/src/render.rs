//! Terminal rendering of records.

use salesdesk_core::{alternate_case, Sale, Salesperson};

/// How names are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameStyle {
    pub alternate: bool,
    pub lower_first: bool,
}

impl NameStyle {
    pub fn name(&self, value: &str) -> String {
        if self.alternate {
            alternate_case(value, self.lower_first)
        } else {
            value.to_string()
        }
    }
}

pub fn sale_line(sale: &Sale, style: NameStyle) -> String {
    format!(
        "#{:<4} {:<24} {}  {:>12.2}  salesperson {}",
        sale.id,
        style.name(&format!(
            "{} {}",
            sale.customer_first_name, sale.customer_last_name
        )),
        sale.date,
        sale.total,
        sale.salesperson_id
    )
}

pub fn salesperson_line(sp: &Salesperson, style: NameStyle, favorite: bool) -> String {
    format!(
        "{} #{:<4} {:<24} {:<14} hired {}  {:>10.0}",
        if favorite { "*" } else { " " },
        sp.id,
        style.name(&sp.full_name()),
        sp.department,
        sp.hire_date,
        sp.salary
    )
}
