//! Dashboard configuration loaded from `.turnos.toml`.

mod core;
mod loader;
pub mod validation;

pub use self::core::{
    DashboardConfig, DisplayConfig, EndpointsConfig, HttpConfig, DEFAULT_CONFIG_TOML,
    TURNOS_API_URL_ENV, TURNOS_VIEWS_URL_ENV,
};
pub use loader::{
    candidate_paths, directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, user_config_path, write_default_config, CONFIG_FILE_NAME,
};
pub use validation::{validate_config, validation_errors};
