pub mod paged_list;

// Re-exports
pub use paged_list::*;
