// src/normalize/mod.rs
pub mod address;
pub mod columns;
pub mod county;
pub mod currency;
pub mod datetime;
pub mod text;

pub use address::{split_address, Address};
pub use columns::{standardize, ColumnName, Table};
pub use county::{allowed_display_name, canonicalize};
pub use currency::parse_bid;
pub use datetime::split_datetime;
pub use text::{clean_cell, clean_text};
