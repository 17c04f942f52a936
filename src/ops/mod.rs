//! Rename pipeline stages: scan, plan, execute.

pub mod execute;
pub mod name;
pub mod plan;
pub mod scan;

pub use execute::{ExecutionContext, ExecutionReport, execute};
pub use plan::{Rename, RenamePlan, new_name, plan};
pub use scan::{EntryKind, MatchEntry, ScanOptions, Visit, scan, walk};
