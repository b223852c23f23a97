pub mod local_fallback_cache;
