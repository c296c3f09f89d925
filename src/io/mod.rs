pub mod json_store;
pub mod memory_store;
pub mod reader;
pub mod store;
pub mod writer;
