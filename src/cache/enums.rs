pub mod cache_engine;
