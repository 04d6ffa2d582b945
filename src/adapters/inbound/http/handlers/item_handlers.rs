use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::{bad_request, store_error_response, ErrorResponse};
use crate::{
    adapters::inbound::http::{
        dto::{
            CreateItemDto, ErrorResponseDto, ItemDto, MessageResponseDto, UpdateItemDto,
            UpdateResponseDto,
        },
        router::AppState,
    },
    domain::models::{ItemPatch, NewItem},
    domain::value_objects::ItemId,
};

/// Handle item creation
pub async fn create_item(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponseDto>), ErrorResponse> {
    let Json(dto) = payload.map_err(bad_request)?;

    let new_item =
        NewItem::try_from(dto).map_err(|e| store_error_response(e.into(), "Could not create item"))?;

    app_state
        .item_service
        .create_item(new_item)
        .await
        .map_err(|e| store_error_response(e, "Could not create item"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponseDto::new("Item created")),
    ))
}

/// Handle item listing
pub async fn get_all_items(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ItemDto>>, ErrorResponse> {
    let items = app_state
        .item_service
        .get_all_items()
        .await
        .map_err(|e| store_error_response(e, "Could not retrieve items"))?;

    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// Handle single-item retrieval
pub async fn get_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemDto>, ErrorResponse> {
    let id =
        ItemId::new(id).map_err(|e| store_error_response(e.into(), "Could not retrieve item"))?;

    let item = app_state
        .item_service
        .get_item(&id)
        .await
        .map_err(|e| store_error_response(e, "Could not retrieve item"))?;

    match item {
        Some(item) => Ok(Json(item.into())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponseDto::new("Item not found")),
        )),
    }
}

/// Handle item updates
pub async fn update_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateItemDto>, JsonRejection>,
) -> Result<Json<UpdateResponseDto>, ErrorResponse> {
    let Json(dto) = payload.map_err(bad_request)?;

    let id =
        ItemId::new(id).map_err(|e| store_error_response(e.into(), "Could not update item"))?;
    let patch =
        ItemPatch::try_from(dto).map_err(|e| store_error_response(e.into(), "Could not update item"))?;

    let updated = app_state
        .item_service
        .update_item(&id, patch)
        .await
        .map_err(|e| store_error_response(e, "Could not update item"))?;

    match updated {
        Some(attrs) => Ok(Json(UpdateResponseDto {
            message: "Item updated".to_string(),
            updated_attributes: attrs.into(),
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponseDto::new("Item not found")),
        )),
    }
}

/// Handle item deletion
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponseDto>, ErrorResponse> {
    let id =
        ItemId::new(id).map_err(|e| store_error_response(e.into(), "Could not delete item"))?;

    app_state
        .item_service
        .delete_item(&id)
        .await
        .map_err(|e| store_error_response(e, "Could not delete item"))?;

    Ok(Json(MessageResponseDto::new("Item deleted")))
}
