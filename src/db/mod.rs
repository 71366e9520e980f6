pub mod connection;
pub mod scans;
pub mod schema;
pub mod statistics;
pub mod vulnerabilities;

pub use connection::Database;
