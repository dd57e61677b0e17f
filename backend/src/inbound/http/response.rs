//! Standard `{message, data}` response envelope.
//!
//! Mutations and every error path answer with this envelope; read endpoints
//! return the raw record JSON. Internal failures carry a sanitised message
//! so no store detail leaks to the caller.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Response wrapper with an outcome message and an optional payload.
///
/// `data` is always present in the body and is `null` unless the operation
/// attaches a payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    /// Human-readable outcome description.
    #[schema(example = "School created successfully")]
    pub message: String,
    /// Optional payload.
    pub data: Option<Value>,
}

impl Envelope {
    fn new(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// 200 response with a confirmation message.
pub fn success(message: impl Into<String>, data: Option<Value>) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::new(message, data))
}

/// 400 response for decode and validation failures.
pub fn bad_request(message: impl Into<String>, data: Option<Value>) -> HttpResponse {
    HttpResponse::BadRequest().json(Envelope::new(message, data))
}

/// 500 response with a generic message; the detail stays in the logs.
pub fn internal_server_error(message: impl Into<String>, data: Option<Value>) -> HttpResponse {
    HttpResponse::InternalServerError().json(Envelope::new(message, data))
}
