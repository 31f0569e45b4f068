// src/process/mod.rs
pub mod date_parser;
pub mod line;
pub mod table;

pub use date_parser::{format_long_fr, month_short_fr, parse_date};
pub use line::split_line;
pub use table::{parse_table, Record, Table};
