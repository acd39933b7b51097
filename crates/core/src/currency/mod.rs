//! Currency symbol resolution.

pub mod table;

pub use table::CurrencyTable;
