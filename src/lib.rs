pub mod checker;
pub mod cli;
pub mod error;
pub mod loader;
pub mod message;
pub mod output;
pub mod report;
pub mod rules;

pub use checker::{Finding, Severity, run_checks, validate_message};
pub use error::{CdmGuardError, Result};
pub use message::{ConjunctionMessage, ObjectState, ReferenceFrame};
pub use report::{Summary, ValidationReport};
pub use rules::RuleThresholds;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
