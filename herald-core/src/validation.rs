//! Status API payload validation
//!
//! Validation is shallow on purpose: it checks the container shape of the
//! payload and hands back the `homeworks` list untouched. Individual records
//! are checked only when translated (see [`crate::verdict`]).

use serde_json::Value;
use tracing::error;

use crate::error::SchemaError;

const HOMEWORKS_KEY: &str = "homeworks";
const CURRENT_DATE_KEY: &str = "current_date";

/// Checks the payload shape and returns the homework records
///
/// # Errors
/// - [`SchemaError::NotAnObject`] if the payload is not a JSON object
/// - [`SchemaError::MissingKey`] if `current_date` or `homeworks` is absent
/// - [`SchemaError::HomeworksNotAList`] if `homeworks` is not an array
pub fn check_response(response: &Value) -> Result<&[Value], SchemaError> {
    let Some(object) = response.as_object() else {
        error!("API response is not a JSON object");
        return Err(SchemaError::NotAnObject(json_kind(response)));
    };

    for key in [CURRENT_DATE_KEY, HOMEWORKS_KEY] {
        if !object.contains_key(key) {
            error!("API response is missing the `{}` key", key);
            return Err(SchemaError::MissingKey(key));
        }
    }

    match &object[HOMEWORKS_KEY] {
        Value::Array(homeworks) => Ok(homeworks),
        other => {
            error!("API response `homeworks` has unexpected type");
            Err(SchemaError::HomeworksNotAList(json_kind(other)))
        }
    }
}

/// Server-reported timestamp of the payload, if present and integral
pub fn current_date(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
