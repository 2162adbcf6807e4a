use std::sync::Arc;

use gateview_application::{AuthGate, AuthGatePolicy, CatalogService, ErrorLogService, TicketService};
use gateview_core::AppError;
use gateview_infrastructure::{
    JsonlErrorLogRepository, SharedSecretTokenVerifier, StaticCatalogRepository,
};
use tracing::warn;

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let token_verifier = SharedSecretTokenVerifier::new(config.dev_auth_token.clone());
    if !token_verifier.is_configured() {
        warn!("DEV_AUTH_TOKEN is not set; every protected API route will answer 401");
    }

    let error_log_repository = Arc::new(JsonlErrorLogRepository::new(
        config.error_log_dir.clone(),
    ));
    let catalog_repository = Arc::new(StaticCatalogRepository::new()?);

    Ok(AppState {
        error_log_service: ErrorLogService::new(error_log_repository, config.error_log_settings),
        auth_gate: AuthGate::new(
            AuthGatePolicy::new(config.api_prefix.clone())?,
            Arc::new(token_verifier),
        ),
        catalog_service: CatalogService::new(catalog_repository),
        ticket_service: TicketService::default(),
        app_name: config.app_name.clone(),
        dev_auth_token: config.dev_auth_token.clone(),
    })
}
