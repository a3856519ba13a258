use utoipa::OpenApi;

use crate::{error, routes};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kilo Backend",
        version = "0.1.0",
        description = "Health check plus a demo /foo endpoint whose shapes feed client type generation."
    ),
    paths(
        routes::health::health,
        routes::foo::create_foo,
    ),
    components(schemas(
        routes::health::HealthResponse,
        routes::foo::FooRequest,
        routes::foo::FooResponse,
        error::ErrorBody,
        error::ValidationErrorBody,
        error::ValidationIssue,
        error::LocSegment,
    )),
    tags(
        (name = "internal", description = "Operational endpoints"),
        (name = "demo", description = "Schema round-trip demo"),
    )
)]
pub struct ApiDoc;
