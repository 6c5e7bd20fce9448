use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use resterror_core::Exception;

use crate::ExceptionMapper;

impl ExceptionMapper {
    /// HTTP response for a failure
    ///
    /// A matched failure becomes its JSON error body under the mapped
    /// status. An unmatched one becomes a bare `500` with no body.
    pub fn to_response(&self, exception: Arc<dyn Exception>) -> Response {
        if let Some(resolved) = self.build_error_for(Arc::clone(&exception)) {
            return resolved.into_response();
        }

        tracing::debug!(
            exception_type = exception.type_name().unwrap_or_default(),
            "no exception mapping matched, responding with bare 500"
        );

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Failure returned from an axum handler, rendered through a mapper
#[derive(Debug, Clone)]
pub struct MappedError {
    mapper: Arc<ExceptionMapper>,
    exception: Arc<dyn Exception>,
}

impl MappedError {
    /// Pair a failure with the mapper that renders it
    pub fn new(mapper: Arc<ExceptionMapper>, exception: impl Exception + 'static) -> Self {
        Self {
            mapper,
            exception: Arc::new(exception),
        }
    }

    /// The underlying failure
    pub fn exception(&self) -> &dyn Exception {
        self.exception.as_ref()
    }
}

impl IntoResponse for MappedError {
    fn into_response(self) -> Response {
        self.mapper.to_response(self.exception)
    }
}

#[cfg(test)]
mod tests {
    use http::header;
    use resterror_core::RaisedError;

    use super::*;

    async fn body_of(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn mapped_failure_renders_json() {
        let mapper = ExceptionMapper::parse("IllegalArgument = 400|_exmsg").unwrap();
        let exception = RaisedError::new(["java.lang.IllegalArgumentException"]).with_message("Unknown file type");

        let response = mapper.to_response(Arc::new(exception));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": 400, "code": 400, "message": "Unknown file type"})
        );
    }

    #[tokio::test]
    async fn unmapped_failure_is_bare_500() {
        let mapper = ExceptionMapper::new();

        let response = mapper.to_response(Arc::new(RaisedError::new(["java.lang.ReflectiveOperationException"])));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn mapped_error_uses_its_mapper() {
        let mapper = Arc::new(ExceptionMapper::parse("NotFound = 404").unwrap());
        let error = MappedError::new(mapper, RaisedError::new(["javax.ws.rs.NotFoundException"]));

        assert_eq!(error.exception().type_name(), Some("javax.ws.rs.NotFoundException"));
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }
}
