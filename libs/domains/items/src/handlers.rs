use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ObjectIdPath, ValidatedJson,
    errors::responses::{
        BadRequestObjectIdResponse, InternalServerErrorResponse, JsonExtractionResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, replace_item, delete_item),
    components(
        schemas(Item, ItemInput),
        responses(
            NotFoundResponse,
            BadRequestObjectIdResponse,
            JsonExtractionResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Item CRUD endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Routes `/items` and `/items/{id}` over `service`.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(replace_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List every item
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "All items, possibly empty", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create an item
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created with its assigned id", body = Item),
        (status = 400, response = JsonExtractionResponse),
        (status = 415, response = JsonExtractionResponse),
        (status = 422, response = JsonExtractionResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<ItemInput>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by id
///
/// An id with no stored item answers 404 `NOT_FOUND`, not a 500 store error.
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item id, 24 hex characters")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Replace an item
///
/// Every field is overwritten; omitted ones become `""` / `0`. An id with no
/// stored item still answers 200.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item id, 24 hex characters")
    ),
    request_body = ItemInput,
    responses(
        (status = 200, description = "The submitted item under the path id", body = Item),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 422, response = JsonExtractionResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    ValidatedJson(input): ValidatedJson<ItemInput>,
) -> ItemResult<Json<Item>> {
    let item = service.replace_item(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item id, 24 hex characters")
    ),
    responses(
        (status = 204, description = "Item deleted, or already absent"),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
