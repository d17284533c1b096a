use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::constants::defaults;
use crate::helpers::base_path;

/// Where the two upstream documents live.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    pub raw_base_url: String,
    pub blob_base_url: String,
    pub project: String,
    pub branch: String,
    pub sensor_types_path: String,
    pub scales_path: String,
}

impl SourceConfig {
    pub fn raw_url(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&self.raw_base_url)?.join(&format!(
            "{}/{}/{}",
            self.project, self.branch, path
        ))
    }

    /// Human-facing link to a document, as referenced in the generated file.
    pub fn blob_url(&self, path: &str) -> String {
        format!(
            "{}/{}/blob/{}/{}",
            self.blob_base_url.trim_end_matches('/'),
            self.project,
            self.branch,
            path
        )
    }

    pub fn sensor_types_url(&self) -> Result<Url, url::ParseError> {
        self.raw_url(&self.sensor_types_path)
    }

    pub fn scales_url(&self) -> Result<Url, url::ParseError> {
        self.raw_url(&self.scales_path)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            raw_base_url: defaults::RAW_CONTENT_BASE_URL.into(),
            blob_base_url: defaults::BLOB_BASE_URL.into(),
            project: defaults::GITHUB_PROJECT.into(),
            branch: defaults::BRANCH_NAME.into(),
            sensor_types_path: defaults::SENSOR_TYPES_FILE_PATH.into(),
            scales_path: defaults::DEFAULT_SCALES_FILE_PATH.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub source: SourceConfig,
    pub destination: PathBuf,
    pub fetch_timeout: Duration,
    pub parenthesis_preserving_ids: Vec<u8>,
    pub run_formatter: bool,
    pub run_vcs_check: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            source: SourceConfig::default(),
            destination: base_path::CONST_FILE.clone(),
            fetch_timeout: defaults::FETCH_TIMEOUT,
            parenthesis_preserving_ids: defaults::PARENTHESIS_PRESERVING_SENSOR_IDS.to_vec(),
            run_formatter: true,
            run_vcs_check: true,
        }
    }
}
