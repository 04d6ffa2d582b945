use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::dto::ErrorResponseDto;
use super::handlers::{
    create_item, delete_file, delete_item, get_all_files, get_all_items, get_file_url, get_item,
    update_item, upload_file,
};
use crate::ports::services::{FileService, ItemService};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<dyn ItemService>,
    pub file_service: Arc<dyn FileService>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/items", create_item_router())
        .nest("/files", create_file_router())
        .fallback(page_not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create a router with just item operations
pub fn create_item_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_item).get(get_all_items))
        .route(
            "/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// Create a router with just file operations
pub fn create_file_router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_file).get(get_all_files))
        .route("/{key}", get(get_file_url).delete(delete_file))
}

async fn root() -> &'static str {
    "Hello World!"
}

async fn page_not_found() -> (StatusCode, Json<ErrorResponseDto>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponseDto::new("Page Not Found")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::{
            persistence::InMemoryItemRepository, storage::BucketStoreAdapter,
        },
        services::{FileServiceImpl, ItemServiceImpl},
    };
    use axum_test::TestServer;
    use object_store::memory::InMemory;

    fn create_test_app_state() -> AppState {
        let repository = Arc::new(InMemoryItemRepository::new());
        let store = Arc::new(
            BucketStoreAdapter::new(Arc::new(InMemory::new()))
                .with_public_base_url("http://localhost:3000/files"),
        );

        AppState {
            item_service: Arc::new(ItemServiceImpl::new(repository.clone())),
            file_service: Arc::new(FileServiceImpl::new(store, repository)),
        }
    }

    #[tokio::test]
    async fn test_root_route() {
        let server = TestServer::new(create_router(create_test_app_state())).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Hello World!");
    }

    #[tokio::test]
    async fn test_unmatched_route_returns_404_envelope() {
        let server = TestServer::new(create_router(create_test_app_state())).unwrap();

        let response = server.get("/nope").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let body: ErrorResponseDto = response.json();
        assert_eq!(body.error, "Page Not Found");
    }
}
