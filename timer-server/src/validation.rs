use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

pub type JsonObject = Map<String, Value>;

fn reject(message: String) -> ApiError {
    tracing::error!("{}", message);
    ApiError::Validation(message)
}

/// Parses a request body that must be a JSON object.
pub fn parse_object(body: &[u8]) -> Result<JsonObject, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        _ => Err(reject("Request body must be a JSON object".to_string())),
    }
}

/// Checks field presence in order and reports the first one missing.
pub fn require_fields(body: &JsonObject, fields: &[&str]) -> Result<(), ApiError> {
    match fields.iter().find(|field| !body.contains_key(**field)) {
        Some(field) => Err(reject(format!("Missing {} field in request body", field))),
        None => Ok(()),
    }
}

/// Deserializes a checked object into a typed request.
pub fn into_request<T: DeserializeOwned>(body: JsonObject) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(body))
        .map_err(|err| reject(format!("Invalid request body: {}", err)))
}

/// The body `id` must equal the id in the path.
pub fn require_matching_id(body: &JsonObject, path_id: &str) -> Result<(), ApiError> {
    match body.get("id").and_then(Value::as_str) {
        Some(id) if id == path_id => Ok(()),
        _ => Err(reject(
            "Request id in body must match with id in params".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(object) => object,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_parse_object_rejects_non_objects() {
        assert!(parse_object(br#"{"time": 1.0}"#).is_ok());
        for body in [&b"[1, 2]"[..], b"\"time\"", b"not json", b""] {
            let err = parse_object(body).unwrap_err();
            assert_eq!(err.to_string(), "Request body must be a JSON object");
        }
    }

    #[test]
    fn test_require_fields_reports_first_missing() {
        let body = object(json!({ "notes": "ok" }));

        let err = require_fields(&body, &["time", "notes", "scrambleAlg"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing time field in request body");

        let body = object(json!({ "time": 1.0, "notes": null, "scrambleAlg": "R" }));
        assert!(require_fields(&body, &["time", "notes", "scrambleAlg"]).is_ok());
    }

    #[test]
    fn test_require_matching_id() {
        let body = object(json!({ "id": "abc" }));
        assert!(require_matching_id(&body, "abc").is_ok());
        assert!(require_matching_id(&body, "abd").is_err());
        assert!(require_matching_id(&object(json!({})), "abc").is_err());
        assert!(require_matching_id(&object(json!({ "id": 7 })), "7").is_err());
    }
}
