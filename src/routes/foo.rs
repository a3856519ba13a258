use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ValidationErrorBody, extract::Payload};

const ECHO_PREFIX: &str = "echo:";

pub fn router() -> axum::Router {
    axum::Router::new().route("/foo", axum::routing::post(create_foo))
}

/// Demo request: the client sends a single `foo` string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct FooRequest {
    pub foo: String,
}

/// Demo response: `bar` is derived from the request's `foo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct FooResponse {
    pub bar: String,
}

pub fn echo(payload: &FooRequest) -> FooResponse {
    FooResponse {
        bar: format!("{ECHO_PREFIX}{}", payload.foo),
    }
}

#[utoipa::path(
    post,
    path = "/foo",
    request_body = FooRequest,
    responses(
        (status = 200, body = [FooResponse]),
        (status = 422, description = "Validation Error", body = ValidationErrorBody)
    ),
    tag = "demo"
)]
pub async fn create_foo(Payload(payload): Payload<FooRequest>) -> Json<Vec<FooResponse>> {
    Json(vec![echo(&payload)])
}
