pub mod config;
pub mod errors;
mod fs_util;
pub mod materializer;
pub mod prompt;

// Re-export key types at crate root for convenience.
pub use config::{init_config, load_config, load_config_from, Config, CONFIG_FILE_NAME};
pub use errors::{CgError, Result};
pub use materializer::{
    materialize, preview, substitute, validate_component_name, Materialized, PlannedFile,
};
pub use prompt::prompt_component_name;
