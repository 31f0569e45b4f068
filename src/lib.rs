// src/lib.rs
pub mod config;
pub mod fetch;
pub mod process;
pub mod render;
pub mod sections;
pub mod site;
pub mod slider;

pub use config::Config;
pub use fetch::{load_table, Source};
pub use process::{parse_table, split_line, Record, Table};
pub use sections::Section;
