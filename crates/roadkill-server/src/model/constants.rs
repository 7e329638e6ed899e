//! Configuration property names and defaults for the Roadkill server

// Application properties
pub const ROADKILL_VERSION: &str = "roadkill.version";
pub const ROADKILL_INSTALLED: &str = "roadkill.installed";

// Database properties
pub const DB_URL_PROPERTY: &str = "roadkill.database.url";
pub const DB_CONNECT_TIMEOUT_MS: &str = "roadkill.database.connect-timeout-ms";
pub const DB_SERVER_SELECTION_TIMEOUT_MS: &str = "roadkill.database.server-selection-timeout-ms";

// Server properties
pub const SERVER_ADDRESS_PROPERTY: &str = "server.address";
pub const SERVER_PORT_PROPERTY: &str = "server.port";

// Logging properties
pub const LOGS_PATH_PROPERTY: &str = "roadkill.logs.path";
pub const LOGS_LEVEL_PROPERTY: &str = "roadkill.logs.level";
pub const LOGS_CONSOLE_PROPERTY: &str = "roadkill.logs.console";
pub const LOGS_FILE_PROPERTY: &str = "roadkill.logs.file";

// Defaults
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_DB_URL: &str = "mongodb://localhost/roadkill";
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 30_000;
