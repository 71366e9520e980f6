pub mod finding;
pub mod scan;
pub mod statistics;
pub mod timestamp;

pub use finding::*;
pub use scan::*;
pub use statistics::*;
