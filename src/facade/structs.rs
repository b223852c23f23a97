pub mod cache_facade;
