use crate::enums::HomeworkStatus;
use crate::error::Error;
use crate::types::HomeworkId;
use std::str::FromStr;
use serde_json::Value;

/// A homework as returned by the homework statuses API.
#[derive(Debug, PartialEq, Clone)]
pub struct Homework {
    /// The ID of the homework. Not every response includes it.
    pub id: Option<HomeworkId>,
    /// The name of the homework, usually the repository name.
    pub homework_name: String,
    /// The review status.
    pub status: HomeworkStatus,
}

impl TryFrom<&Value> for Homework {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let homework_name = value.get("homework_name")
            .and_then(Value::as_str)
            .ok_or(Error::MissingField("homework_name"))?;
        let status = value.get("status")
            .and_then(Value::as_str)
            .ok_or(Error::MissingField("status"))?;
        let status = HomeworkStatus::from_str(status)
            .map_err(|_| Error::UnknownStatus(status.into()))?;

        Ok(Self {
            id: value.get("id").and_then(Value::as_u64),
            homework_name: homework_name.into(),
            status,
        })
    }
}
