//! Utility modules

pub mod paths;
mod text;

pub use paths::{config_path, data_dir, database_path, init_data_dir, log_file_path, logs_dir};
pub use text::{sanitize_cell, truncate_to_width};
