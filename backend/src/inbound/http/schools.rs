//! School resource HTTP handlers.
//!
//! ```text
//! GET    /schools
//! GET    /schools/{id}
//! POST   /schools
//! PUT    /schools/{id}
//! DELETE /schools/{id}
//! ```
//!
//! Create and update share the same pipeline: decode the raw body, run the
//! field validation, then delegate to the store. Store failures (including
//! lookups of unknown ids) are logged and answered with the generic 500
//! envelope so persistence detail never reaches the caller.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use tracing::error;

use crate::domain::{School, SchoolRecord, validate_school};
use crate::inbound::http::response::{self, Envelope};
use crate::inbound::http::state::HttpState;

/// Message returned whenever the store fails, regardless of cause.
const GENERIC_FAILURE: &str = "Something went wrong, please try again later";
/// Message returned when the request body cannot be decoded.
const INVALID_BODY: &str = "Invalid request data";

/// Path parameters for id-addressed school routes.
///
/// The id stays an opaque string here; the store parses it and fails on
/// malformed input.
#[derive(Debug, Deserialize)]
struct SchoolPath {
    id: String,
}

/// Decode and validate a request body.
///
/// Returns the ready-to-send response on failure: a generic 400 for decode
/// errors, the specific rule message for validation errors. Validation
/// failures are logged before being surfaced.
fn parse_school_body(body: &web::Bytes) -> Result<SchoolRecord, HttpResponse> {
    let record: SchoolRecord = match serde_json::from_slice(body) {
        Ok(record) => record,
        Err(_) => return Err(response::bad_request(INVALID_BODY, None)),
    };

    if let Err(err) = validate_school(&record) {
        error!(error = %err, "school payload failed validation");
        return Err(response::bad_request(err.to_string(), None));
    }

    Ok(record)
}

/// List every school record.
#[utoipa::path(
    get,
    path = "/schools",
    responses(
        (status = 200, description = "All school records in store order", body = [School]),
        (status = 500, description = "Store failure", body = Envelope)
    ),
    tags = ["schools"],
    operation_id = "listSchools"
)]
#[get("/schools")]
pub async fn list_schools(state: web::Data<HttpState>) -> HttpResponse {
    match state.schools.fetch_all().await {
        Ok(schools) => HttpResponse::Ok().json(schools),
        Err(err) => {
            error!(error = %err, "failed to fetch all schools");
            response::internal_server_error(GENERIC_FAILURE, None)
        }
    }
}

/// Fetch one school by id.
#[utoipa::path(
    get,
    path = "/schools/{id}",
    params(("id" = String, Path, description = "Opaque school identifier")),
    responses(
        (status = 200, description = "The school record", body = School),
        (
            status = 500,
            description = "Store failure, including unknown or malformed ids",
            body = Envelope
        )
    ),
    tags = ["schools"],
    operation_id = "getSchool"
)]
#[get("/schools/{id}")]
pub async fn get_school(
    state: web::Data<HttpState>,
    path: web::Path<SchoolPath>,
) -> HttpResponse {
    let SchoolPath { id } = path.into_inner();
    match state.schools.fetch_by_id(&id).await {
        Ok(school) => HttpResponse::Ok().json(school),
        Err(err) => {
            error!(error = %err, id = %id, "failed to fetch specific school");
            response::internal_server_error(GENERIC_FAILURE, None)
        }
    }
}

/// Create a school from the request body.
#[utoipa::path(
    post,
    path = "/schools",
    request_body = SchoolRecord,
    responses(
        (status = 200, description = "School created", body = Envelope),
        (status = 400, description = "Malformed body or failed validation", body = Envelope),
        (status = 500, description = "Store failure", body = Envelope)
    ),
    tags = ["schools"],
    operation_id = "createSchool"
)]
#[post("/schools")]
pub async fn create_school(state: web::Data<HttpState>, body: web::Bytes) -> HttpResponse {
    let record = match parse_school_body(&body) {
        Ok(record) => record,
        Err(failure) => return failure,
    };

    match state.schools.insert(record).await {
        Ok(()) => response::success("School created successfully", None),
        Err(err) => {
            error!(error = %err, "failed to create school");
            response::internal_server_error(GENERIC_FAILURE, None)
        }
    }
}

/// Replace the school stored under the path id with the request body.
#[utoipa::path(
    put,
    path = "/schools/{id}",
    params(("id" = String, Path, description = "Opaque school identifier")),
    request_body = SchoolRecord,
    responses(
        (status = 200, description = "School updated", body = Envelope),
        (status = 400, description = "Malformed body or failed validation", body = Envelope),
        (status = 500, description = "Store failure", body = Envelope)
    ),
    tags = ["schools"],
    operation_id = "updateSchool"
)]
#[put("/schools/{id}")]
pub async fn update_school(
    state: web::Data<HttpState>,
    path: web::Path<SchoolPath>,
    body: web::Bytes,
) -> HttpResponse {
    let SchoolPath { id } = path.into_inner();
    let record = match parse_school_body(&body) {
        Ok(record) => record,
        Err(failure) => return failure,
    };

    match state.schools.replace_by_id(&id, record).await {
        Ok(()) => response::success("School updated successfully", None),
        Err(err) => {
            error!(error = %err, id = %id, "failed to update school");
            response::internal_server_error(GENERIC_FAILURE, None)
        }
    }
}

/// Delete the school stored under the path id.
#[utoipa::path(
    delete,
    path = "/schools/{id}",
    params(("id" = String, Path, description = "Opaque school identifier")),
    responses(
        (status = 200, description = "School deleted", body = Envelope),
        (status = 500, description = "Store failure", body = Envelope)
    ),
    tags = ["schools"],
    operation_id = "deleteSchool"
)]
#[delete("/schools/{id}")]
pub async fn delete_school(
    state: web::Data<HttpState>,
    path: web::Path<SchoolPath>,
) -> HttpResponse {
    let SchoolPath { id } = path.into_inner();
    match state.schools.delete_by_id(&id).await {
        Ok(()) => response::success("School deleted successfully", None),
        Err(err) => {
            error!(error = %err, id = %id, "failed to delete school");
            response::internal_server_error(GENERIC_FAILURE, None)
        }
    }
}

/// Register the five school routes on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_schools)
        .service(get_school)
        .service(create_school)
        .service(update_school)
        .service(delete_school);
}

#[cfg(test)]
#[path = "schools_tests.rs"]
mod tests;
