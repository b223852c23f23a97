pub mod cache_backend;
