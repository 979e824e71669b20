//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Standard `{ "message": ... }` confirmation envelope for state
/// transitions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
