pub mod memory_source;

pub use memory_source::InMemorySource;

#[cfg(test)]
pub mod test_helper;
