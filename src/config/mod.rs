//! `.userdash.toml` configuration.

mod core;
mod loader;

pub use self::core::{DataConfig, LoggingConfig, RevealConfig, UserdashConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};

/// Contents written by `userdash init`.
pub const DEFAULT_CONFIG: &str = r#"# Userdash Configuration

[data]
# path = "users.json"

[reveal]
initial = 5
batch = 5
threshold = 10
row_threshold = 1

[logging]
# file = "userdash.log"
"#;
