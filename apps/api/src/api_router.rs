use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use gateview_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

use cors::build_cors_layer;

pub fn build_router(
    app_state: AppState,
    api_prefix: &str,
    frontend_url: &str,
) -> Result<Router, AppError> {
    let cors_layer = build_cors_layer(frontend_url)?;

    let api_routes = Router::new()
        .route("/ping", get(handlers::system::ping_handler))
        .route("/token", post(handlers::system::issue_token_handler))
        .route(
            "/error-logs/mediamtx",
            post(handlers::error_logs::record_error_log_handler),
        )
        .route(
            "/error-logs/mediamtx/latest",
            get(handlers::error_logs::latest_error_logs_handler),
        )
        .route("/stations", get(handlers::catalog::list_stations_handler))
        .route(
            "/stations/{station_id}",
            get(handlers::catalog::get_station_handler),
        )
        .route(
            "/stations/{station_id}/gates",
            get(handlers::catalog::list_station_gates_handler),
        )
        .route("/gates/{gate_id}", get(handlers::catalog::get_gate_handler))
        .route(
            "/gates/{gate_id}/streams",
            get(handlers::catalog::list_gate_streams_handler),
        )
        .route(
            "/streams/{stream_id}",
            get(handlers::catalog::get_stream_handler),
        )
        .route(
            "/streams/{stream_id}/play-ticket",
            post(handlers::tickets::issue_play_ticket_handler),
        );

    Ok(Router::new()
        .route("/", get(handlers::system::root_handler))
        .nest(api_prefix, api_routes)
        .layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_api_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
