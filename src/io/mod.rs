//! IO modules - loading snapshots and writing results
//!
//! - `snapshot` - floor plan, zone and camera snapshot (JSON)
//! - `egress` - recommendation output to file (JSONL format)

pub mod egress;
pub mod snapshot;

pub use egress::{Egress, EgressRecord};
pub use snapshot::Snapshot;
