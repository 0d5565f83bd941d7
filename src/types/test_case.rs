//! Generated test case records.

use serde::{Deserialize, Serialize};

use super::Priority;

/// A single generated test case.
///
/// Produced fresh on every generator call; the caller owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Compliance tags, in the order the caller supplied them.
    pub compliance: Vec<String>,
    pub test_steps: Vec<String>,
}
