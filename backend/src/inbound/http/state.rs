//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend
//! only on domain ports and stay testable without real I/O.

use std::sync::Arc;

use crate::domain::ports::SchoolStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Persistence port for school records.
    pub schools: Arc<dyn SchoolStore>,
}

impl HttpState {
    /// Bundle the given store implementation for handler injection.
    pub fn new(schools: Arc<dyn SchoolStore>) -> Self {
        Self { schools }
    }
}
