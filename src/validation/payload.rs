use crate::core::error::ApiError;
use crate::models::user::{NewUser, UserPatch};
use axum::http::{header, HeaderMap};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Body fields accepted by `POST /users`
///
/// Kept as raw JSON so that a wrongly typed `name` or `email` is reported the
/// same way as a missing one.
#[derive(Debug, Deserialize)]
pub struct CreateUserParams {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub age: Option<Value>,
    pub bio: Option<Value>,
}

/// Body fields accepted by `PUT /users/{id}`
///
/// Outer `None` means the key was absent, `Some(None)` an explicit `null`.
/// Keys other than these four (including `id`) are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateUserParams {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present")]
    pub bio: Option<Option<String>>,
}

// Only called when the key exists, so any value (null included) is `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// True for `application/json` and `application/*+json`, parameters ignored
pub fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Decode a request body that must be a JSON object
///
/// A non-JSON content type, unparseable bytes, and non-object JSON are all
/// reported as `BodyNotJson`.
pub fn decode_object(headers: &HeaderMap, body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if !is_json_content(headers) {
        return Err(ApiError::BodyNotJson);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) | Err(_) => Err(ApiError::BodyNotJson),
    }
}

impl CreateUserParams {
    pub fn from_object(object: Map<String, Value>) -> Result<Self, ApiError> {
        serde_json::from_value(Value::Object(object))
            .map_err(|e| ApiError::InvalidField(e.to_string()))
    }

    /// Require non-empty string `name` and `email`, then a string or null
    /// `bio`
    pub fn validate(self) -> Result<NewUser, ApiError> {
        let (Some(name), Some(email)) = (non_empty_string(self.name), non_empty_string(self.email))
        else {
            return Err(ApiError::MissingRequiredFields);
        };

        let bio = match self.bio {
            None | Some(Value::Null) => None,
            Some(Value::String(bio)) => Some(bio),
            Some(_) => {
                return Err(ApiError::InvalidField("'bio' must be a string or null".to_string()))
            }
        };

        Ok(NewUser {
            name,
            email,
            age: self.age,
            bio,
        })
    }
}

impl UpdateUserParams {
    pub fn from_object(object: Map<String, Value>) -> Result<Self, ApiError> {
        serde_json::from_value(Value::Object(object))
            .map_err(|e| ApiError::InvalidField(e.to_string()))
    }

    /// Require at least one updatable field. `name` and `email` may not be
    /// set to `null`.
    pub fn validate(self) -> Result<UserPatch, ApiError> {
        let patch = UserPatch {
            name: non_null("name", self.name)?,
            email: non_null("email", self.email)?,
            age: self.age,
            bio: self.bio,
        };

        if patch.is_empty() {
            return Err(ApiError::NoValidFields);
        }

        Ok(patch)
    }
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(value)) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn non_null(field: &str, value: Option<Option<String>>) -> Result<Option<String>, ApiError> {
    match value {
        Some(None) => Err(ApiError::InvalidField(format!("'{field}' must not be null"))),
        Some(Some(value)) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parse the `{id}` path segment
///
/// Only plain ASCII digits are accepted; signs, whitespace and values that
/// overflow `u64` yield `None`.
pub fn parse_user_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(object) => object,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_json_content_types() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content(&headers));

        for (content_type, expected) in [
            ("application/json", true),
            ("application/json; charset=utf-8", true),
            ("Application/JSON", true),
            ("application/merge-patch+json", true),
            ("text/plain", false),
            ("application/x-www-form-urlencoded", false),
            ("text/json", false),
        ] {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
            assert_eq!(is_json_content(&headers), expected, "{content_type}");
        }
    }

    #[test]
    fn test_decode_requires_json_content_type() {
        let result = decode_object(&HeaderMap::new(), br#"{"name":"Ann"}"#);
        assert_eq!(result, Err(ApiError::BodyNotJson));
    }

    #[test]
    fn test_decode_rejects_malformed_and_non_objects() {
        let headers = json_headers();

        for body in ["{not json", "", "[1,2]", "\"Ann\"", "42", "null"] {
            assert_eq!(decode_object(&headers, body.as_bytes()), Err(ApiError::BodyNotJson));
        }
    }

    #[test]
    fn test_decode_object() {
        let decoded = decode_object(&json_headers(), br#"{"name":"Ann"}"#).unwrap();
        assert_eq!(decoded.get("name"), Some(&json!("Ann")));
    }

    #[test]
    fn test_create_valid() {
        let params = CreateUserParams::from_object(object(json!({
            "name": "Ann",
            "email": "a@x.com",
            "age": 30,
        })))
        .unwrap();

        let new_user = params.validate().unwrap();
        assert_eq!(new_user.name, "Ann");
        assert_eq!(new_user.email, "a@x.com");
        assert_eq!(new_user.age, Some(json!(30)));
        assert_eq!(new_user.bio, None);
    }

    #[test]
    fn test_create_missing_empty_or_null_fields() {
        for body in [
            json!({"name": "Bob"}),
            json!({"email": "b@x.com"}),
            json!({"name": "", "email": "b@x.com"}),
            json!({"name": "Bob", "email": null}),
            json!({}),
        ] {
            let result = CreateUserParams::from_object(object(body)).and_then(|p| p.validate());
            assert_eq!(result, Err(ApiError::MissingRequiredFields));
        }
    }

    #[test]
    fn test_create_non_string_name_counts_as_missing() {
        for body in [
            json!({"name": 5}),
            json!({"name": 5, "email": "a@x.com"}),
            json!({"name": "Ann", "email": false}),
            json!({"name": ["Ann"], "email": "a@x.com"}),
        ] {
            let result = CreateUserParams::from_object(object(body)).and_then(|p| p.validate());
            assert_eq!(result, Err(ApiError::MissingRequiredFields));
        }
    }

    #[test]
    fn test_create_required_fields_checked_before_bio_type() {
        let result = CreateUserParams::from_object(object(json!({"name": "Bob", "bio": 5})))
            .and_then(|p| p.validate());
        assert_eq!(result, Err(ApiError::MissingRequiredFields));

        let result = CreateUserParams::from_object(object(json!({
            "name": "Bob",
            "email": "b@x.com",
            "bio": 5,
        })))
        .and_then(|p| p.validate());
        assert_eq!(
            result,
            Err(ApiError::InvalidField("'bio' must be a string or null".to_string()))
        );
    }

    #[test]
    fn test_create_null_bio() {
        let new_user = CreateUserParams::from_object(object(json!({
            "name": "Ann",
            "email": "a@x.com",
            "bio": null,
        })))
        .and_then(|p| p.validate())
        .unwrap();

        assert_eq!(new_user.bio, None);
    }

    #[test]
    fn test_update_distinguishes_absent_and_null() {
        let params = UpdateUserParams::from_object(object(json!({"bio": null}))).unwrap();

        assert_eq!(params.bio, Some(None));
        assert_eq!(params.age, None);

        let patch = params.validate().unwrap();
        assert_eq!(patch.bio, Some(None));
        assert_eq!(patch.name, None);
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let result = UpdateUserParams::from_object(object(json!({"id": 9, "role": "admin"})))
            .and_then(|p| p.validate());

        assert_eq!(result, Err(ApiError::NoValidFields));
    }

    #[test]
    fn test_update_rejects_null_name() {
        let result = UpdateUserParams::from_object(object(json!({"name": null})))
            .and_then(|p| p.validate());

        assert!(matches!(result, Err(ApiError::InvalidField(_))));
    }

    #[test]
    fn test_update_all_fields() {
        let patch = UpdateUserParams::from_object(object(json!({
            "name": "B",
            "email": "b@x.com",
            "age": "unknown",
            "bio": "hey",
        })))
        .and_then(|p| p.validate())
        .unwrap();

        assert_eq!(patch.name.as_deref(), Some("B"));
        assert_eq!(patch.email.as_deref(), Some("b@x.com"));
        assert_eq!(patch.age, Some(Some(json!("unknown"))));
        assert_eq!(patch.bio, Some(Some("hey".to_string())));
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("1"), Some(1));
        assert_eq!(parse_user_id("0"), Some(0));
        assert_eq!(parse_user_id("007"), Some(7));
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id("-1"), None);
        assert_eq!(parse_user_id("+1"), None);
        assert_eq!(parse_user_id("1.5"), None);
        assert_eq!(parse_user_id("99999999999999999999999"), None);
    }
}
