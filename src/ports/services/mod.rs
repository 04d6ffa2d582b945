mod file_service;
mod item_service;

pub use file_service::FileService;
pub use item_service::ItemService;
