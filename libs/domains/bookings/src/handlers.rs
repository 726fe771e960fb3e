use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use axum_helpers::{
    ActorId, IdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::directory::{ItemDirectory, UserDirectory};
use crate::error::BookingResult;
use crate::models::{BookingDto, CreateBooking, ListParams, Viewpoint};
use crate::repository::BookingRepository;
use crate::service::BookingService;

const TAG: &str = "Bookings";

/// OpenAPI documentation for the Bookings API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_booking,
        set_booking_status,
        get_booking,
        list_bookings,
        list_owner_bookings,
    ),
    components(
        schemas(BookingDto, CreateBooking, ListParams),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Booking lifecycle and listing endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Debug, Deserialize)]
struct ApprovedParam {
    approved: bool,
}

/// Create the booking router with all HTTP endpoints
pub fn router<R, U, I>(service: BookingService<R, U, I>) -> Router
where
    R: BookingRepository + 'static,
    U: UserDirectory + 'static,
    I: ItemDirectory + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_booking).get(list_bookings))
        .route("/owner", get(list_owner_bookings))
        .route("/{booking_id}", patch(set_booking_status).get(get_booking))
        .with_state(shared_service)
}

/// Request a new booking of an item
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created, awaiting the owner's decision", body = BookingDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_booking<R, U, I>(
    State(service): State<Arc<BookingService<R, U, I>>>,
    ActorId(actor_id): ActorId,
    ValidatedJson(input): ValidatedJson<CreateBooking>,
) -> BookingResult<impl IntoResponse>
where
    R: BookingRepository,
    U: UserDirectory,
    I: ItemDirectory,
{
    let booking = service.create(actor_id, input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Approve or reject a waiting booking (item owner only)
#[utoipa::path(
    patch,
    path = "/{booking_id}",
    tag = TAG,
    params(
        ("booking_id" = i64, Path, description = "Booking ID"),
        ("approved" = bool, Query, description = "true to approve, false to reject")
    ),
    responses(
        (status = 200, description = "Booking decided", body = BookingDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn set_booking_status<R, U, I>(
    State(service): State<Arc<BookingService<R, U, I>>>,
    ActorId(actor_id): ActorId,
    IdPath(booking_id): IdPath,
    Query(params): Query<ApprovedParam>,
) -> BookingResult<Json<BookingDto>>
where
    R: BookingRepository,
    U: UserDirectory,
    I: ItemDirectory,
{
    let booking = service
        .set_status(actor_id, booking_id, params.approved)
        .await?;
    Ok(Json(booking))
}

/// Get a booking by ID (booker or item owner only)
#[utoipa::path(
    get,
    path = "/{booking_id}",
    tag = TAG,
    params(
        ("booking_id" = i64, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking found", body = BookingDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_booking<R, U, I>(
    State(service): State<Arc<BookingService<R, U, I>>>,
    ActorId(actor_id): ActorId,
    IdPath(booking_id): IdPath,
) -> BookingResult<Json<BookingDto>>
where
    R: BookingRepository,
    U: UserDirectory,
    I: ItemDirectory,
{
    let booking = service.find_by_id(actor_id, booking_id).await?;
    Ok(Json(booking))
}

/// List the actor's own booking requests, filtered by temporal bucket
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Bookings made by the actor", body = Vec<BookingDto>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_bookings<R, U, I>(
    State(service): State<Arc<BookingService<R, U, I>>>,
    ActorId(actor_id): ActorId,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> BookingResult<Json<Vec<BookingDto>>>
where
    R: BookingRepository,
    U: UserDirectory,
    I: ItemDirectory,
{
    let bookings = service
        .find_all_by_state(
            actor_id,
            Viewpoint::Booker,
            &params.state,
            params.from,
            params.size,
        )
        .await?;
    Ok(Json(bookings))
}

/// List bookings made on the actor's items, filtered by temporal bucket
#[utoipa::path(
    get,
    path = "/owner",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Bookings on the actor's items", body = Vec<BookingDto>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_owner_bookings<R, U, I>(
    State(service): State<Arc<BookingService<R, U, I>>>,
    ActorId(actor_id): ActorId,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> BookingResult<Json<Vec<BookingDto>>>
where
    R: BookingRepository,
    U: UserDirectory,
    I: ItemDirectory,
{
    let bookings = service
        .find_all_by_state(
            actor_id,
            Viewpoint::Owner,
            &params.state,
            params.from,
            params.size,
        )
        .await?;
    Ok(Json(bookings))
}
