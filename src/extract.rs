use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;

use crate::error::{AppError, LocSegment, ValidationIssue};

/// JSON request body. A missing `Content-Type` is read as JSON; every
/// decoding failure becomes a 422 with a located [`ValidationIssue`].
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejected(rejection.status(), rejection.body_text()))?;

        if bytes.is_empty() {
            return Err(ValidationIssue::missing_body().into());
        }
        if !json {
            return Err(ValidationIssue::not_an_object().into());
        }
        parse_body(&bytes).map(Payload)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

/// Decodes a JSON object body into `T`.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| ValidationIssue::invalid_json(byte_offset(bytes, err.line(), err.column())))?;

    match value {
        Value::Object(_) => {}
        Value::Null => return Err(ValidationIssue::missing_body().into()),
        _ => return Err(ValidationIssue::not_an_object().into()),
    }

    serde_path_to_error::deserialize(value).map_err(|err| data_issue(err).into())
}

/// serde_json reports 1-based line and column.
fn byte_offset(bytes: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = bytes
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(bytes.len())
}

fn data_issue(err: serde_path_to_error::Error<serde_json::Error>) -> ValidationIssue {
    let mut loc: Vec<LocSegment> = vec!["body".into()];
    loc.extend(err.path().iter().filter_map(|segment| match segment {
        Segment::Map { key } => Some(LocSegment::Field(key.clone())),
        Segment::Seq { index } => Some(LocSegment::Index(*index)),
        Segment::Enum { variant } => Some(LocSegment::Field(variant.clone())),
        Segment::Unknown => None,
    }));

    let msg = err.inner().to_string();
    if let Some(field) = msg
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
    {
        loc.push(LocSegment::Field(field.to_string()));
        return ValidationIssue::new(loc, "Field required", "missing");
    }
    if msg.ends_with("expected a string") {
        return ValidationIssue::new(loc, "Input should be a valid string", "string_type");
    }
    ValidationIssue::new(loc, msg, "value_error")
}
