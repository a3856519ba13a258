mod app;
mod validation;

pub use app::{AppError, ErrorBody};
pub use validation::{LocSegment, ValidationErrorBody, ValidationIssue};
