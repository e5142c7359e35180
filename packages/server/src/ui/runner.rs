//! Server assembly and main loop.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    http::Request,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::{ServerConfig, ServiceKind},
    domain::Calculator,
    error::ServerError,
    infrastructure::seed::build_room_repository,
    usecase::{CalculatorUseCase, RoomDirectoryUseCase},
};

use super::{
    handler::{get_service, health_check, invoke_method, list_services},
    registry::ServiceRegistry,
    service::{CalcServiceEndpoint, RoomServiceEndpoint},
    signal::shutdown_signal,
    state::AppState,
};

/// Header carrying the caller's request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the registry with the services enabled in `config`.
pub fn build_registry(config: &ServerConfig) -> Result<ServiceRegistry, ServerError> {
    let mut registry = ServiceRegistry::new();

    for kind in config.enabled_services() {
        match kind {
            ServiceKind::Calc => {
                let usecase = CalculatorUseCase::new(Calculator::new());
                registry.bind(Arc::new(CalcServiceEndpoint::new(usecase)));
            }
            ServiceKind::Room => {
                let repository = Arc::new(build_room_repository(config.rooms_file.as_deref())?);
                let usecase = RoomDirectoryUseCase::new(repository);
                registry.bind(Arc::new(RoomServiceEndpoint::new(usecase)));
            }
        }
    }

    Ok(registry)
}

/// Create the axum application for a registry.
pub fn create_app(registry: ServiceRegistry) -> Router {
    let state = Arc::new(AppState::new(registry));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/services", get(list_services))
        .route("/api/services/{name}", get(get_service))
        .route("/rpc/{service}/{method}", post(invoke_method))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<axum::body::Body>| {
                let request_id = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");
                tracing::info_span!(
                    "rpc_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %request_id,
                )
            }),
        )
        .with_state(state)
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Bind the configured services and serve them until Ctrl-C / SIGTERM.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let registry = build_registry(&config)?;
    let names: Vec<String> = registry.bindings().into_iter().map(|b| b.name).collect();
    let app = create_app(registry);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("RPC registry listening on {}", addr);
    tracing::info!("Bound services: {}", names.join(", "));
    tracing::info!("Waiting for client requests... Press Ctrl+C to stop the server");

    serve(listener, app, shutdown_signal()).await
}
