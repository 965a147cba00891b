pub mod config;
pub mod metrics;
pub mod payment;
pub mod seatbooking;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, LogFormat,
    LoggingConfig, SanitizedConfig, ServerConfig,
};
pub use payment::{LoggingTicketPaymentService, TicketPaymentService};
pub use seatbooking::{LoggingSeatReservationService, SeatReservationService};
pub use ticket::{
    validate, PurchaseError, PurchaseOutcome, RejectionReason, TicketAggregate, TicketService,
    TicketType, TicketTypeRequest, ADULT_PRICE, CHILD_PRICE, INFANT_PRICE,
    MAX_TICKETS_PER_PURCHASE,
};
