pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod producers;
pub mod reporting;
pub mod scanner;

pub use errors::ScanboardError;
