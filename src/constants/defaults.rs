use std::time::Duration;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const LOG_LEVEL: &str = "INFO";

pub const RAW_CONTENT_BASE_URL: &str = "https://raw.githubusercontent.com";
pub const BLOB_BASE_URL: &str = "https://github.com";
pub const GITHUB_PROJECT: &str = "zwave-js/node-zwave-js";
pub const BRANCH_NAME: &str = "master";
pub const SENSOR_TYPES_FILE_PATH: &str = "packages/config/config/sensorTypes.json";
pub const DEFAULT_SCALES_FILE_PATH: &str = "packages/config/config/scales.json";

// Relative to the crate root
pub const CONST_FILE_PATH: &str = "generated/multilevel_sensor.rs";

// Sensor types whose disambiguating text lives inside parentheses
pub const PARENTHESIS_PRESERVING_SENSOR_IDS: &[u8] = &[0x57, 0x58];

pub const SCALES_REF_PREFIX: &str = "$SCALES:";

pub const FORMATTER: &str = "rustfmt";
pub const FORMATTER_EDITION: &str = "2021";
pub const VCS: &str = "git";
