pub mod cache;

pub use cache::{cache_key, cached, ComputationCache, InMemoryCache};
