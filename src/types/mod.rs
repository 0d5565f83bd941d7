//! Core domain types for the healthcare assistant.
//!
//! These are the values that flow between the HTTP layer, the responder, the
//! test case generator and the mock user store.

pub mod ids;
pub mod priority;
pub mod test_case;

// Re-export commonly used types at the module level
pub use ids::Username;
pub use priority::{InvalidPriority, Priority};
pub use test_case::TestCase;
