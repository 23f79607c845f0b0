//! Common constants used throughout compose-generator.

/// Compose file produced in the destination directory
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Environment file produced in the destination directory
pub const ENV_FILE: &str = "environment.env";

/// Volumes directory produced in the destination directory
pub const VOLUMES_DIR: &str = "volumes";

/// Supported template descriptor file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["config.json", "config.yml", "config.yaml"];

/// Authoring artifacts that are never copied into the destination.
/// Descriptors only match at the template root, the rest match at any depth.
pub const IGNORED_PATTERNS: [&str; 5] =
    ["config.json", "config.yml", "config.yaml", "**/README.md", "**/.gitkeep"];

/// Opening delimiter of a placeholder token
pub const TOKEN_OPEN: &str = "${{";

/// Closing delimiter of a placeholder token
pub const TOKEN_CLOSE: &str = "}}";

/// Intrinsic variable holding the project name as entered
pub const PROJECT_NAME_VAR: &str = "PROJECT_NAME";

/// Intrinsic variable holding the container-safe project name
pub const PROJECT_NAME_CONTAINER_VAR: &str = "PROJECT_NAME_CONTAINER";

/// Bundled catalog location used when no templates directory is configured
pub const DEFAULT_TEMPLATES_DIR: &str = "/usr/lib/compose-generator/templates";

/// Executable used to bring the generated stack up
pub const COMPOSE_COMMAND: &str = "docker-compose";
