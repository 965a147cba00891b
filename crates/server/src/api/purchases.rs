//! Purchase API handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use turnstile_core::{
    PurchaseError, PurchaseOutcome, RejectionReason, TicketAggregate, TicketTypeRequest,
};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for purchasing (or quoting) tickets
#[derive(Debug, Deserialize)]
pub struct PurchaseBody {
    /// Account to reserve seats for and charge
    pub account_id: u64,
    /// Ticket requests; the same type may appear more than once
    #[serde(default)]
    pub tickets: Vec<TicketTypeRequest>,
}

/// Response for a fulfilled purchase
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub account_id: u64,
    pub seats_reserved: u32,
    pub amount_paid: u32,
    pub tickets: TicketAggregate,
}

impl From<PurchaseOutcome> for PurchaseResponse {
    fn from(outcome: PurchaseOutcome) -> Self {
        Self {
            account_id: outcome.account_id,
            seats_reserved: outcome.seats_to_reserve,
            amount_paid: outcome.amount_due,
            tickets: outcome.tickets,
        }
    }
}

/// Response for a quote: what a purchase would reserve and charge
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub account_id: u64,
    pub seats_to_reserve: u32,
    pub amount_due: u32,
    pub tickets: TicketAggregate,
}

impl From<PurchaseOutcome> for QuoteResponse {
    fn from(outcome: PurchaseOutcome) -> Self {
        Self {
            account_id: outcome.account_id,
            seats_to_reserve: outcome.seats_to_reserve,
            amount_due: outcome.amount_due,
            tickets: outcome.tickets,
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct PurchaseErrorResponse {
    pub error: String,
    pub reason: RejectionReason,
}

type PurchaseRejection = (StatusCode, Json<PurchaseErrorResponse>);

fn reject(err: PurchaseError) -> PurchaseRejection {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(PurchaseErrorResponse {
            error: "invalid purchase".to_string(),
            reason: err.reason().clone(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Purchase tickets: reserve seats, then take payment
pub async fn purchase_tickets(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PurchaseBody>,
) -> Result<(StatusCode, Json<PurchaseResponse>), PurchaseRejection> {
    state
        .tickets()
        .purchase_tickets(body.account_id, &body.tickets)
        .map(|outcome| (StatusCode::CREATED, Json(PurchaseResponse::from(outcome))))
        .map_err(reject)
}

/// Price a purchase without reserving or charging anything
pub async fn quote_tickets(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PurchaseBody>,
) -> Result<Json<QuoteResponse>, PurchaseRejection> {
    state
        .tickets()
        .quote(body.account_id, &body.tickets)
        .map(|outcome| Json(QuoteResponse::from(outcome)))
        .map_err(reject)
}
