use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::{ResolvedError, RestError};

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl IntoResponse for ResolvedError {
    fn into_response(self) -> Response {
        self.into_error().into_response()
    }
}
