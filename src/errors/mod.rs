pub mod types;

pub use types::ScanboardError;
