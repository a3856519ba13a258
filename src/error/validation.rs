use serde::Serialize;
use utoipa::ToSchema;

/// One step of the location of a validation failure, e.g. `["body", "foo"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LocSegment {
    Field(String),
    Index(usize),
}

impl From<&str> for LocSegment {
    fn from(s: &str) -> Self {
        LocSegment::Field(s.to_string())
    }
}

impl From<usize> for LocSegment {
    fn from(i: usize) -> Self {
        LocSegment::Index(i)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(as = ValidationError)]
pub struct ValidationIssue {
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn new(loc: Vec<LocSegment>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        ValidationIssue {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// No body at all where one is required.
    pub fn missing_body() -> Self {
        Self::new(vec!["body".into()], "Field required", "missing")
    }

    /// Body present but not a JSON object (wrong content type, array, scalar).
    pub fn not_an_object() -> Self {
        Self::new(
            vec!["body".into()],
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        )
    }

    /// `offset` is the byte position the JSON parser stopped at.
    pub fn invalid_json(offset: usize) -> Self {
        Self::new(
            vec!["body".into(), offset.into()],
            "JSON decode error",
            "json_invalid",
        )
    }
}

/// 422 body, listing every failure found in the request.
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = HTTPValidationError)]
pub struct ValidationErrorBody {
    pub detail: Vec<ValidationIssue>,
}
