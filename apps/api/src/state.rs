use gateview_application::{AuthGate, CatalogService, ErrorLogService, TicketService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub error_log_service: ErrorLogService,
    pub auth_gate: AuthGate,
    pub catalog_service: CatalogService,
    pub ticket_service: TicketService,
    pub app_name: String,
    pub dev_auth_token: String,
}
