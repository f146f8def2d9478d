//! Raw numeric tables: reading whitespace-separated text files into
//! rectangular f64 tables.

pub mod reader;

pub use reader::{read_table, Table};
