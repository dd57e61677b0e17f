//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the school CRUD paths, the health probes, and the
//! shared schemas. The generated document is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{School, SchoolRecord};
use crate::inbound::http::response::Envelope;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shuttle backend API",
        description = "CRUD surface for school records plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::schools::list_schools,
        crate::inbound::http::schools::get_school,
        crate::inbound::http::schools::create_school,
        crate::inbound::http::schools::update_school,
        crate::inbound::http::schools::delete_school,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(School, SchoolRecord, Envelope)),
    tags(
        (name = "schools", description = "School resource CRUD"),
        (name = "health", description = "Probe endpoints")
    )
)]
pub struct ApiDoc;
