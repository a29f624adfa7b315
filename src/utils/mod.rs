pub mod cache_keys;
pub mod clock;
pub mod errors;
pub mod pagination;
