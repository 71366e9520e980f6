pub mod orchestrator;
pub mod target;

pub use orchestrator::{ScanOrchestrator, ScanOutcome};
pub use target::validate_target;
