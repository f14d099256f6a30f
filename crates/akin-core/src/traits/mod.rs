pub mod catalog_source;
pub mod play_history_sink;
pub mod session_repository;

pub use catalog_source::{CatalogSource, StaticCatalogSource};
pub use play_history_sink::PlayHistorySink;
pub use session_repository::SessionRepository;
