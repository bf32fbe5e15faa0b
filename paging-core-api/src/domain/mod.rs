pub mod page;
pub mod page_event;
pub mod pagination;
pub mod sort;

// Re-exports
pub use page::*;
pub use page_event::*;
pub use pagination::*;
pub use sort::*;
