use turnstile_core::{Config, SanitizedConfig, TicketService};

/// Shared application state
pub struct AppState {
    config: Config,
    tickets: TicketService,
}

impl AppState {
    pub fn new(config: Config, tickets: TicketService) -> Self {
        Self { config, tickets }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn tickets(&self) -> &TicketService {
        &self.tickets
    }
}
