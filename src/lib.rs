pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod runner;
pub mod table;

#[cfg(test)]
mod testutil;

pub use config::Config;
pub use error::Error;
pub use extract::extract_table;
pub use runner::run;
pub use table::CodeTable;
