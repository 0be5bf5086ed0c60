// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "loginstats";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "loginstats.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "LOGINSTATS_CONFIG";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "LOGINSTATS_LOG";

// =============================================================================
// Environment Variables - InfluxDB
// =============================================================================

/// Environment variable for the InfluxDB base URL
pub const ENV_INFLUX_URL: &str = "LOGINSTATS_INFLUX_URL";

/// Environment variable for the target database name
pub const ENV_INFLUX_DATABASE: &str = "LOGINSTATS_INFLUX_DATABASE";

/// Environment variable for the InfluxDB user
pub const ENV_INFLUX_USER: &str = "LOGINSTATS_INFLUX_USER";

/// Environment variable for the InfluxDB password
pub const ENV_INFLUX_PASSWORD: &str = "LOGINSTATS_INFLUX_PASSWORD";

// =============================================================================
// Environment Variables - Backfill
// =============================================================================

/// Environment variable to skip the post-build indexing cooldown
pub const ENV_NO_WAIT: &str = "LOGINSTATS_NO_WAIT";

// =============================================================================
// InfluxDB Defaults
// =============================================================================

/// Default InfluxDB base URL
pub const DEFAULT_INFLUX_URL: &str = "http://127.0.0.1:8086";

/// Default target database name
pub const DEFAULT_DATABASE: &str = "loginstats";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Raw Log Source Defaults
// =============================================================================

/// Default raw login measurement name
pub const DEFAULT_LOG_MEASUREMENT: &str = "eb_logins";

/// Default service-provider tag on the raw log
pub const DEFAULT_SP_TAG: &str = "sp_entity_id";

/// Default identity-provider tag on the raw log
pub const DEFAULT_IDP_TAG: &str = "idp_entity_id";
