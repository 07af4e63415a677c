use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::errors::responses::{
    BadRequestMultipartResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    NotFoundResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::form::{ItemForm, ItemMultipart};
use crate::models::{DeleteItemResponse, Item, UpdateItemResponse};
use crate::repository::ItemRepository;
use crate::service::ItemService;
use crate::storage::ImageStore;

pub const WELCOME_MESSAGE: &str = "welcome to Item Management System";

/// Largest accepted request body (uploads included)
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(welcome, list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, ItemMultipart, UpdateItemResponse, DeleteItemResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestMultipartResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Inventory items with optional images")
    )
)]
pub struct ApiDoc;

type SharedService<R, S> = Arc<ItemService<R, S>>;

/// Create the items router with all HTTP endpoints
pub fn router<R, S>(service: ItemService<R, S>) -> Router
where
    R: ItemRepository + 'static,
    S: ImageStore + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(welcome))
        .route(
            "/items",
            get(list_items::<R, S>).post(create_item::<R, S>),
        )
        .route(
            "/item/{id}",
            get(get_item::<R, S>)
                .put(update_item::<R, S>)
                .delete(delete_item::<R, S>),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(shared_service)
}

/// A malformed id cannot name a stored item
fn parse_item_id(raw: &str) -> ItemResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ItemError::not_found(raw))
}

/// Greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Items",
    responses(
        (status = 201, description = "Greeting", body = String)
    )
)]
async fn welcome() -> impl IntoResponse {
    (StatusCode::CREATED, Json(WELCOME_MESSAGE))
}

/// List all items; images are returned as signed URLs
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository, S: ImageStore>(
    State(service): State<SharedService<R, S>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create an item, optionally uploading its image
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body(content = ItemMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Item created; image holds the object key", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository, S: ImageStore>(
    State(service): State<SharedService<R, S>>,
    form: ItemForm,
) -> ItemResult<impl IntoResponse> {
    let (input, image) = form.into_create()?;
    let item = service.create_item(input, image).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID; the image is returned as a signed URL
#[utoipa::path(
    get,
    path = "/item/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository, S: ImageStore>(
    State(service): State<SharedService<R, S>>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(parse_item_id(&id)?).await?;
    Ok(Json(item))
}

/// Update an item; a new image replaces and deletes the previous one
#[utoipa::path(
    put,
    path = "/item/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body(content = ItemMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Item updated", body = UpdateItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository, S: ImageStore>(
    State(service): State<SharedService<R, S>>,
    Path(id): Path<String>,
    form: ItemForm,
) -> ItemResult<Json<UpdateItemResponse>> {
    let id = parse_item_id(&id)?;
    let (input, image) = form.into_update();
    let updated_item = service.update_item(id, input, image).await?;

    Ok(Json(UpdateItemResponse {
        success: true,
        updated_item,
    }))
}

/// Delete an item and its image
#[utoipa::path(
    delete,
    path = "/item/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteItemResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository, S: ImageStore>(
    State(service): State<SharedService<R, S>>,
    Path(id): Path<String>,
) -> ItemResult<Json<DeleteItemResponse>> {
    service.delete_item(parse_item_id(&id)?).await?;

    Ok(Json(DeleteItemResponse {
        message: "Item deleted successfully".to_string(),
    }))
}
