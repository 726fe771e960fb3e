use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ActorId, IdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use domain_bookings::{BookingRepository, UserDirectory};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{
    CommentDto, CreateComment, CreateItem, Item, ItemDetails, ListParams, SearchParams, UpdateItem,
};
use crate::repository::{CommentRepository, ItemRepository};
use crate::service::ItemService;

const TAG: &str = "Items";

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_item,
        get_item,
        list_items,
        update_item,
        delete_item,
        search_items,
        add_comment,
    ),
    components(
        schemas(
            Item,
            ItemDetails,
            CreateItem,
            UpdateItem,
            CreateComment,
            CommentDto,
            ListParams,
            SearchParams
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Item listing, search, and comment endpoints")
    )
)]
pub struct ApiDoc;

/// Create the item router with all HTTP endpoints
pub fn router<R, C, B, U>(service: ItemService<R, C, B, U>) -> Router
where
    R: ItemRepository + 'static,
    C: CommentRepository + 'static,
    B: BookingRepository + 'static,
    U: UserDirectory + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/search", get(search_items))
        .route(
            "/{item_id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .route("/{item_id}/comment", post(add_comment))
        .with_state(shared_service)
}

/// List a new item for lending
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R, C, B, U>(
    State(service): State<Arc<ItemService<R, C, B, U>>>,
    ActorId(actor_id): ActorId,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    let item = service.create(actor_id, input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item with comments; the owner also sees the last/next bookings
#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = TAG,
    params(
        ("item_id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDetails),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R, C, B, U>(
    State(service): State<Arc<ItemService<R, C, B, U>>>,
    ActorId(actor_id): ActorId,
    IdPath(item_id): IdPath,
) -> ItemResult<Json<ItemDetails>>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    let item = service.find_by_id(actor_id, item_id).await?;
    Ok(Json(item))
}

/// List the actor's own items with booking annotations
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "The actor's items", body = Vec<ItemDetails>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R, C, B, U>(
    State(service): State<Arc<ItemService<R, C, B, U>>>,
    ActorId(actor_id): ActorId,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> ItemResult<Json<Vec<ItemDetails>>>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    let items = service
        .find_all_by_owner(actor_id, params.from, params.size)
        .await?;
    Ok(Json(items))
}

/// Partially update an item (owner only)
#[utoipa::path(
    patch,
    path = "/{item_id}",
    tag = TAG,
    params(
        ("item_id" = i64, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R, C, B, U>(
    State(service): State<Arc<ItemService<R, C, B, U>>>,
    ActorId(actor_id): ActorId,
    IdPath(item_id): IdPath,
    ValidatedJson(changes): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    let item = service.update(actor_id, item_id, changes).await?;
    Ok(Json(item))
}

/// Delete an item (owner only)
#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = TAG,
    params(
        ("item_id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R, C, B, U>(
    State(service): State<Arc<ItemService<R, C, B, U>>>,
    ActorId(actor_id): ActorId,
    IdPath(item_id): IdPath,
) -> ItemResult<StatusCode>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    service.delete(actor_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search available items by text
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching items", body = Vec<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_items<R, C, B, U>(
    State(service): State<Arc<ItemService<R, C, B, U>>>,
    ActorId(_actor_id): ActorId,
    ValidatedQuery(params): ValidatedQuery<SearchParams>,
) -> ItemResult<Json<Vec<Item>>>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    let items = service
        .search(&params.text, params.from, params.size)
        .await?;
    Ok(Json(items))
}

/// Comment on an item after a finished rental
#[utoipa::path(
    post,
    path = "/{item_id}/comment",
    tag = TAG,
    params(
        ("item_id" = i64, Path, description = "Item ID")
    ),
    request_body = CreateComment,
    responses(
        (status = 200, description = "Comment created", body = CommentDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_comment<R, C, B, U>(
    State(service): State<Arc<ItemService<R, C, B, U>>>,
    ActorId(actor_id): ActorId,
    IdPath(item_id): IdPath,
    ValidatedJson(input): ValidatedJson<CreateComment>,
) -> ItemResult<Json<CommentDto>>
where
    R: ItemRepository,
    C: CommentRepository,
    B: BookingRepository,
    U: UserDirectory,
{
    let comment = service.add_comment(actor_id, item_id, input).await?;
    Ok(Json(comment))
}
