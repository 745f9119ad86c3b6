//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the analysis handler on every path
//! - Wire up middleware (request ID, tracing)
//! - Serve on a local listener, or hand the router to the Lambda runtime

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::analysis::{handle_body, FaceAnalysisConnector};
use crate::config::AnalyzerConfig;
use crate::http::request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
use crate::http::response::analysis_response;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn FaceAnalysisConnector>,
}

/// HTTP front end for the analyzer.
pub struct HttpServer {
    router: Router,
    config: AnalyzerConfig,
}

impl HttpServer {
    /// Create a new HTTP server backed by the given connector.
    pub fn new(config: AnalyzerConfig, connector: Arc<dyn FaceAnalysisConnector>) -> Self {
        let router = Self::build_router(AppState { connector });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id(request.headers()),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID));

        Router::new()
            .route("/", any(analyze_handler))
            .route("/{*path}", any(analyze_handler))
            .with_state(state)
            .layer(middleware)
    }

    /// The router, for hosting runtimes that drive it themselves.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            region = %self.config.rekognition.region,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

/// Analysis handler. Method and path are ignored; only the body matters.
async fn analyze_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let started = Instant::now();

    match handle_body(state.connector.as_ref(), &body).await {
        Ok(encoded) => {
            metrics::record_request("success", started);
            tracing::info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "KYC analysis completed"
            );
            analysis_response(encoded)
        }
        Err(err) => {
            metrics::record_request(err.outcome(), started);
            err.into_response()
        }
    }
}
