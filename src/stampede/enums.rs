pub mod hot_read_state;
