//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request log, id guard, limits, CORS, request ID)
//! - Own the project store for the lifetime of the server
//! - Serve until the shutdown signal fires

use axum::{
    handler::Handler,
    middleware,
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{create_project, delete_project, hello, list_projects, update_project};
use crate::http::middleware::{log_requests, record_metrics, validate_project_id};
use crate::lifecycle::shutdown;
use crate::projects::ProjectStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProjectStore>,
}

/// HTTP server for the projects API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: Arc<ProjectStore>,
}

impl HttpServer {
    /// Create a server with a fresh, empty store.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, Arc::new(ProjectStore::new()))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<ProjectStore>) -> Self {
        let router = build_router(&config, store.clone());
        Self {
            router,
            config,
            store,
        }
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown_rx` fires. In-flight requests are allowed to finish.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            cors = self.config.cors.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!(
            discarded_projects = self.store.len(),
            "HTTP server stopped"
        );
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layers added later wrap the ones added earlier, so the request log sits
/// closest to the handlers and the request ID is assigned first.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, store: Arc<ProjectStore>) -> Router {
    let state = AppState { store };

    let by_id: Router<AppState> = Router::new()
        .route("/projects/{id}", put(update_project).delete(delete_project))
        .route_layer(middleware::from_fn(validate_project_id));

    let mut router = Router::new()
        .route("/", get(hello))
        .route(
            "/projects",
            // The listing is timed a second time on top of the global log.
            get(list_projects.layer(middleware::from_fn(log_requests))).post(create_project),
        )
        .merge(by_id)
        .with_state(state)
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn(record_metrics))
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

    if config.cors.enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
