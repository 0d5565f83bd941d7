//! Test case generation endpoint.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ApiError;
use crate::generator::{default_compliance, generate};
use crate::types::{Priority, TestCase};
use crate::validation::{REQUIREMENT_LEN, SYSTEM_TYPE_LEN, ValidationError, check_len};

#[derive(Debug, Clone, Deserialize)]
pub struct TestCaseRequest {
    pub requirement: String,
    pub system_type: String,
    /// Unknown priority names fail deserialization and come back as 422.
    pub priority: Priority,
    #[serde(default = "default_compliance")]
    pub compliance: Vec<String>,
}

impl TestCaseRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_len("requirement", &self.requirement, REQUIREMENT_LEN)?;
        check_len("system_type", &self.system_type, SYSTEM_TYPE_LEN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseResponse {
    pub test_cases: Vec<TestCase>,
    pub requirement: String,
    pub generated_at: DateTime<Utc>,
}

/// `POST /api/testcase/generate`
///
/// - 200 with four test cases and the echoed requirement
/// - 422 for out-of-bounds fields or an unknown priority
pub async fn generate_handler(
    payload: Result<Json<TestCaseRequest>, JsonRejection>,
) -> Result<Json<TestCaseResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    info!(system_type = %request.system_type, "Test case generation request");
    let test_cases = generate(
        &request.requirement,
        &request.system_type,
        request.priority,
        &request.compliance,
    );
    info!(count = test_cases.len(), "Generated test cases");

    Ok(Json(TestCaseResponse {
        test_cases,
        requirement: request.requirement,
        generated_at: Utc::now(),
    }))
}
