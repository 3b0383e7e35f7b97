//! Test-side helpers shared by the mock capabilities

pub mod messages;
pub mod reporter;

// Re-export commonly used items
pub use messages::{expected_error, mismatch_error, unexpected_error};
pub use reporter::{FailureRecorder, TestReporter};
