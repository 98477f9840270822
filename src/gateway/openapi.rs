//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:5000/docs`
//! - OpenAPI JSON: `http://localhost:5000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::bench::{BenchmarkRequest, BenchmarkResult};
use crate::gateway::error::ErrorResponse;
use crate::gateway::handlers::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crypto Bench Function API",
        version = "1.0.0",
        description = "AES-128-CTR encrypt/decrypt round trip latency benchmark.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::invoke::invoke,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            BenchmarkRequest,
            BenchmarkResult,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Benchmark", description = "Function invocation"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
