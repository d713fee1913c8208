pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod report;
pub mod spatial;
pub mod symmetry;

pub use config::SymmetryConfig;
pub use engine::SymmetryEngine;
pub use error::{MirrorError, Result};
pub use report::{Counts, OperationReport, Severity, Status};
