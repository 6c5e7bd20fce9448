//! Test server wrapper that serves failing routes on a random port

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use resterror_mapper::{ExceptionMapper, MappedError, RaisedError};
use tokio_util::sync::CancellationToken;

use super::config::{illegal_argument, not_found, reflective_operation};

const KNOWN_FILE_TYPES: [&str; 2] = ["txt", "csv"];

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
    mapper: Arc<ExceptionMapper>,
}

impl TestServer {
    /// Start a test server whose failures render through `mapper`
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(mapper: Arc<ExceptionMapper>) -> anyhow::Result<Self> {
        let router = app(Arc::clone(&mapper));
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self {
            addr,
            shutdown,
            client,
            mapper,
        })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Mapper shared with the running server
    pub fn mapper(&self) -> &ExceptionMapper {
        &self.mapper
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn app(mapper: Arc<ExceptionMapper>) -> Router {
    Router::new()
        .route("/files/{kind}", get(open_file))
        .route("/resources/{id}", get(find_resource))
        .route("/numbers/{raw}", get(parse_number))
        .route("/reflect", get(reflect))
        .with_state(mapper)
}

async fn open_file(
    State(mapper): State<Arc<ExceptionMapper>>,
    Path(kind): Path<String>,
) -> Result<String, MappedError> {
    if KNOWN_FILE_TYPES.contains(&kind.as_str()) {
        return Ok(format!("opened {kind}"));
    }
    Err(MappedError::new(mapper, illegal_argument("Unknown file type")))
}

async fn find_resource(
    State(mapper): State<Arc<ExceptionMapper>>,
    Path(_id): Path<String>,
) -> Result<String, MappedError> {
    Err(MappedError::new(
        mapper,
        not_found("The specified resource does not exist."),
    ))
}

async fn parse_number(
    State(mapper): State<Arc<ExceptionMapper>>,
    Path(raw): Path<String>,
) -> Result<String, MappedError> {
    raw.parse::<i64>()
        .map(|n| n.to_string())
        .map_err(|e| MappedError::new(mapper, RaisedError::from_error(&e)))
}

async fn reflect(State(mapper): State<Arc<ExceptionMapper>>) -> Result<String, MappedError> {
    Err(MappedError::new(mapper, reflective_operation()))
}
