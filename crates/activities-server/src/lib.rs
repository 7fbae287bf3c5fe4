pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use activities_core::config::Config;
use activities_core::Directory;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router around a fresh directory.
/// Used by `serve()` and available for integration testing.
pub fn build_router(directory: Directory) -> Router {
    build_router_with_state(state::AppState::new(directory))
}

/// Build the Router over existing state, e.g. to inspect the directory
/// after requests in tests.
pub fn build_router_with_state(app_state: state::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(embed::index))
        .route("/static/{*path}", get(embed::static_handler))
        .route(
            "/activities",
            get(routes::activities::list_activities),
        )
        .route(
            "/activities/{name}/signup",
            post(routes::activities::signup),
        )
        .route(
            "/activities/{name}/unregister",
            delete(routes::activities::unregister),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the server on the host and port from `config`.
pub async fn serve(config: &Config, open_browser: bool) -> anyhow::Result<()> {
    let directory = config.directory()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(listener, directory, open_browser).await
}

/// Start the server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    listener: tokio::net::TcpListener,
    directory: Directory,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let activity_count = directory.list_activities().len();
    let app = build_router(directory);

    tracing::info!(
        activities = activity_count,
        "activities server listening on http://localhost:{actual_port}"
    );

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open browser: {e}");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("activities server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
