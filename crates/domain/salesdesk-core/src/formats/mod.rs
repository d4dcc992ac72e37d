mod wire;

pub use wire::{SaleDto, SalespersonDto};
