// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use stay_ledger::{
    BookingStore, InMemoryGuestDirectory, Ledger, MemoryStore, StoreError,
};
use stay_ledger_api::{
    ApiError, ApiResult, AssignRoomRequest, AuthenticatedActor, BookingResponse,
    CancelBookingRequest, CreateBookingRequest, ListBookingsResponse, OccupancyResponse,
    RecordPaymentRequest, SearchBookingsRequest, SearchBookingsResponse, assign_room,
    authenticate_stub, cancel_booking, check_in, check_out, confirm_booking, create_booking,
    list_bookings, occupancy, record_payment, search_bookings,
};
use stay_ledger_audit::Cause;
use stay_ledger_domain::{DomainError, PropertyId, ReferencePrefix};

/// Stay Ledger Server - HTTP server for the booking ledger
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The property this ledger instance is scoped to
    #[arg(long, default_value = "default")]
    property: String,

    /// Total number of rooms, used for occupancy calculation
    #[arg(long, default_value_t = 20)]
    total_rooms: u32,

    /// Two-letter prefix for generated booking references
    #[arg(long, default_value = "BK")]
    reference_prefix: String,
}

/// Application state shared across handlers.
///
/// The ledger is an immutable snapshot behind a mutex: handlers apply a
/// command against the current snapshot and swap in the replacement on
/// success, so a failed command never leaves partial state behind.
#[derive(Clone)]
struct AppState {
    /// The current booking ledger.
    ledger: Arc<Mutex<Ledger>>,
    /// The persisted booking store, kept in step with the ledger.
    store: Arc<Mutex<MemoryStore>>,
    /// Guest contact lookup for free-text search.
    directory: Arc<InMemoryGuestDirectory>,
    /// The configured total room count.
    total_rooms: u32,
}

/// API request for a state change with no operation-specific fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorActionRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
}

/// API request for creating a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The guest identifier.
    guest_id: String,
    /// Optional room to pre-assign.
    room: Option<String>,
    /// The check-in date.
    check_in: NaiveDate,
    /// The check-out date (exclusive).
    check_out: NaiveDate,
    /// The total charge in minor currency units.
    total_amount: i64,
    /// The booking source channel.
    source: String,
}

/// API request for cancelling a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The reason for cancellation.
    reason: String,
}

/// API request for recording a payment.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RecordPaymentApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The payment amount in minor currency units.
    amount: i64,
}

/// API request for assigning a room.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignRoomApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The room identifier to assign.
    room: String,
}

/// Query parameters for searching bookings.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    /// Free-text term matched against reference and guest contact fields.
    text: Option<String>,
    /// Derived payment status filter.
    payment_status: Option<String>,
    /// Booking source filter.
    source: Option<String>,
    /// Booking status filter.
    status: Option<String>,
}

/// API response for the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
    status: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "Store error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Store error: {err}"),
        }
    }
}

/// Authenticates the actor fields common to every state-changing request.
fn authenticate(actor_id: &str, actor_role: &str) -> Result<AuthenticatedActor, HttpError> {
    authenticate_stub(actor_id, actor_role)
        .map_err(ApiError::from)
        .map_err(HttpError::from)
}

/// Commits a successful transition: persists the changed booking, swaps
/// in the replacement ledger, and logs the audit event.
async fn commit(
    state: &AppState,
    ledger: &mut Ledger,
    result: ApiResult<BookingResponse>,
) -> Result<Json<BookingResponse>, HttpError> {
    let mut store = state.store.lock().await;
    if let Some(booking) = result
        .new_ledger
        .list()
        .iter()
        .find(|b| b.reference.value() == result.response.booking.reference)
    {
        store.save_booking(&result.new_ledger.property_id, booking)?;
    }
    info!(
        actor = %result.audit_event.actor.id,
        action = %result.audit_event.action.name,
        reference = %result.audit_event.booking_reference.value(),
        before = %result.audit_event.before.data,
        after = %result.audit_event.after.data,
        "recorded audit event"
    );
    *ledger = result.new_ledger;
    Ok(Json(result.response))
}

/// Handler for POST `/bookings`.
async fn handle_create_booking(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(actor_id = %req.actor_id, guest = %req.guest_id, "Handling create_booking request");
    let actor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause = Cause::new(req.cause_id, req.cause_description);
    let request = CreateBookingRequest {
        guest_id: req.guest_id,
        room: req.room,
        check_in: req.check_in,
        check_out: req.check_out,
        total_amount: req.total_amount,
        source: req.source,
    };
    let mut ledger = state.ledger.lock().await;
    let result = create_booking(&ledger, request, &actor, cause)?;
    commit(&state, &mut ledger, result).await
}

/// Handler for POST `/bookings/{reference}/confirm`.
async fn handle_confirm_booking(
    AxumState(state): AxumState<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<ActorActionRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(actor_id = %req.actor_id, reference = %reference, "Handling confirm_booking request");
    let actor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause = Cause::new(req.cause_id, req.cause_description);
    let mut ledger = state.ledger.lock().await;
    let result = confirm_booking(&ledger, &reference, &actor, cause)?;
    commit(&state, &mut ledger, result).await
}

/// Handler for POST `/bookings/{reference}/cancel`.
async fn handle_cancel_booking(
    AxumState(state): AxumState<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<CancelBookingApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(actor_id = %req.actor_id, reference = %reference, "Handling cancel_booking request");
    let actor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause = Cause::new(req.cause_id, req.cause_description);
    let request = CancelBookingRequest { reason: req.reason };
    let mut ledger = state.ledger.lock().await;
    let result = cancel_booking(&ledger, &reference, request, &actor, cause)?;
    commit(&state, &mut ledger, result).await
}

/// Handler for POST `/bookings/{reference}/check-in`.
async fn handle_check_in(
    AxumState(state): AxumState<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<ActorActionRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(actor_id = %req.actor_id, reference = %reference, "Handling check_in request");
    let actor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause = Cause::new(req.cause_id, req.cause_description);
    let mut ledger = state.ledger.lock().await;
    let result = check_in(&ledger, &reference, &actor, cause)?;
    commit(&state, &mut ledger, result).await
}

/// Handler for POST `/bookings/{reference}/check-out`.
async fn handle_check_out(
    AxumState(state): AxumState<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<ActorActionRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(actor_id = %req.actor_id, reference = %reference, "Handling check_out request");
    let actor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause = Cause::new(req.cause_id, req.cause_description);
    let mut ledger = state.ledger.lock().await;
    let result = check_out(&ledger, &reference, &actor, cause)?;
    commit(&state, &mut ledger, result).await
}

/// Handler for POST `/bookings/{reference}/payments`.
async fn handle_record_payment(
    AxumState(state): AxumState<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<RecordPaymentApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        reference = %reference,
        amount = req.amount,
        "Handling record_payment request"
    );
    let actor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause = Cause::new(req.cause_id, req.cause_description);
    let request = RecordPaymentRequest { amount: req.amount };
    let mut ledger = state.ledger.lock().await;
    let result = record_payment(&ledger, &reference, request, &actor, cause)?;
    commit(&state, &mut ledger, result).await
}

/// Handler for POST `/bookings/{reference}/room`.
async fn handle_assign_room(
    AxumState(state): AxumState<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<AssignRoomApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(actor_id = %req.actor_id, reference = %reference, room = %req.room, "Handling assign_room request");
    let actor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause = Cause::new(req.cause_id, req.cause_description);
    let request = AssignRoomRequest { room: req.room };
    let mut ledger = state.ledger.lock().await;
    let result = assign_room(&ledger, &reference, request, &actor, cause)?;
    commit(&state, &mut ledger, result).await
}

/// Handler for GET `/bookings`.
async fn handle_list_bookings(
    AxumState(state): AxumState<AppState>,
) -> Json<ListBookingsResponse> {
    let ledger = state.ledger.lock().await;
    Json(list_bookings(&ledger))
}

/// Handler for GET `/bookings/search`.
async fn handle_search_bookings(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchBookingsResponse>, HttpError> {
    let request = SearchBookingsRequest {
        text: query.text,
        payment_status: query.payment_status,
        source: query.source,
        status: query.status,
    };
    let ledger = state.ledger.lock().await;
    let response = search_bookings(&ledger, state.directory.as_ref(), request)?;
    Ok(Json(response))
}

/// Handler for GET `/occupancy`.
async fn handle_occupancy(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<OccupancyResponse>, HttpError> {
    let ledger = state.ledger.lock().await;
    let response = occupancy(&ledger, state.total_rooms)?;
    Ok(Json(response))
}

/// Handler for GET `/health`.
#[allow(clippy::unused_async)]
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/bookings", post(handle_create_booking))
        .route("/bookings", get(handle_list_bookings))
        .route("/bookings/search", get(handle_search_bookings))
        .route("/bookings/{reference}/confirm", post(handle_confirm_booking))
        .route("/bookings/{reference}/cancel", post(handle_cancel_booking))
        .route("/bookings/{reference}/check-in", post(handle_check_in))
        .route("/bookings/{reference}/check-out", post(handle_check_out))
        .route("/bookings/{reference}/payments", post(handle_record_payment))
        .route("/bookings/{reference}/room", post(handle_assign_room))
        .route("/occupancy", get(handle_occupancy))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Stay Ledger Server");

    if args.total_rooms == 0 {
        return Err(Box::new(DomainError::InvalidRoomCount { count: 0 }) as Box<dyn std::error::Error>);
    }

    let property_id = PropertyId::new(&args.property);
    let reference_prefix = ReferencePrefix::new(&args.reference_prefix)?;

    let store = MemoryStore::new();
    let bookings = store.load_bookings(&property_id)?;
    let ledger = Ledger::from_bookings(property_id, reference_prefix, bookings);
    info!(
        property = %args.property,
        total_rooms = args.total_rooms,
        "Ledger initialized"
    );

    let app_state = AppState {
        ledger: Arc::new(Mutex::new(ledger)),
        store: Arc::new(Mutex::new(store)),
        directory: Arc::new(InMemoryGuestDirectory::new()),
        total_rooms: args.total_rooms,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
