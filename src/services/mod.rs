mod file_service_impl;
mod item_service_impl;

pub use file_service_impl::FileServiceImpl;
pub use item_service_impl::ItemServiceImpl;
