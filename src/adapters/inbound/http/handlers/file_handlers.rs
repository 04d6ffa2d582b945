use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use super::{store_error_response, ErrorResponse};
use crate::{
    adapters::inbound::http::{
        dto::{ErrorResponseDto, FileEntryDto, FileUrlDto, MessageResponseDto, UploadResponseDto},
        router::AppState,
    },
    domain::models::FileUpload,
    domain::value_objects::ObjectKey,
};

/// Handle file upload from a multipart form.
/// The object key is taken from the uploaded file's original name.
pub async fn upload_file(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponseDto>), ErrorResponse> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::new(&err.to_string())),
        )
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(|ct| ct.to_string());
        let data = field.bytes().await.map_err(|err| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponseDto::new(&err.to_string())),
            )
        })?;

        let key = ObjectKey::new(file_name)
            .map_err(|e| store_error_response(e.into(), "Could not upload file"))?;

        upload = Some(FileUpload {
            key,
            data,
            content_type,
        });
        break;
    }

    let Some(upload) = upload else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::new("No file uploaded")),
        ));
    };

    let key = app_state
        .file_service
        .upload_file(upload)
        .await
        .map_err(|e| store_error_response(e, "Could not upload file"))?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponseDto {
            message: "File uploaded".to_string(),
            key: key.into_string(),
        }),
    ))
}

/// Handle file listing with resolved URLs
pub async fn get_all_files(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<FileEntryDto>>, ErrorResponse> {
    let entries = app_state
        .file_service
        .get_all_files()
        .await
        .map_err(|e| store_error_response(e, "Could not retrieve files"))?;

    Ok(Json(entries.into_iter().map(FileEntryDto::from).collect()))
}

/// Handle URL resolution for a single file
pub async fn get_file_url(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<FileUrlDto>, ErrorResponse> {
    let key = ObjectKey::new(key)
        .map_err(|e| store_error_response(e.into(), "Could not retrieve file"))?;

    let url = app_state
        .file_service
        .get_file_url(&key)
        .await
        .map_err(|e| store_error_response(e, "Could not retrieve file"))?;

    Ok(Json(FileUrlDto { url }))
}

/// Handle file deletion
pub async fn delete_file(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponseDto>, ErrorResponse> {
    let key = ObjectKey::new(key)
        .map_err(|e| store_error_response(e.into(), "Could not delete file"))?;

    app_state
        .file_service
        .delete_file(&key)
        .await
        .map_err(|e| store_error_response(e, "Could not delete file"))?;

    Ok(Json(MessageResponseDto::new("File deleted")))
}
