//! Core utilities for the FPL Draft CLI
//!
//! - `cache`: file system helpers and the in-memory LRU cache

pub mod cache;

// Re-export commonly used items for convenience
pub use cache::{
    backup_path, default_data_dir, stage_string, staging_path, try_read_to_string, write_string,
    MemoryCache,
};
