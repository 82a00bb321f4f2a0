pub mod json_file_store;
pub mod memory_store;
pub mod redis_store;

pub use json_file_store::JsonFileClientStore;
pub use memory_store::InMemoryClientStore;
pub use redis_store::RedisClientStore;
