//! Validation of the homework statuses payload.

use crate::error::Error;
use crate::time::Timestamp;
use serde_json::Value;

/// Checks the shape of a homework statuses response and returns its homeworks, most recent
/// first. An empty list is not an error.
pub fn check_response(response: &Value) -> Result<&[Value], Error> {
    let response = response.as_object()
        .ok_or(Error::UnexpectedType {
            key: "response",
            expected: "an object",
        })?;
    let homeworks = response.get("homeworks")
        .ok_or(Error::MissingKey("homeworks"))?
        .as_array()
        .ok_or(Error::UnexpectedType {
            key: "homeworks",
            expected: "a list",
        })?;

    Ok(homeworks)
}

/// The server time of the response, used as `from_date` for the next request.
pub fn current_date(response: &Value) -> Option<Timestamp> {
    response.get("current_date").and_then(Value::as_i64)
}
