pub mod ttl_local_cache;
