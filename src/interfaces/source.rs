use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Agent;
use url::Url;

use crate::config::SourceConfig;
use crate::model::raw::{RawScaleDocument, RawSensorDocument};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not build document URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("could not parse {document} document: {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw text of both upstream documents, comments already stripped.
#[derive(Clone, Debug)]
pub struct SourceDocuments {
    pub sensor_types: String,
    pub scales: String,
}

impl SourceDocuments {
    pub fn parse(&self) -> Result<(RawSensorDocument, RawScaleDocument), FetchError> {
        Ok((
            parse_document("sensor types", &self.sensor_types)?,
            parse_document("scales", &self.scales)?,
        ))
    }
}

pub fn remove_comments(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn parse_document<T: DeserializeOwned>(document: &str, text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|source| FetchError::Parse {
        document: document.into(),
        source,
    })
}

fn get_ureq_agent(timeout: Duration) -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(timeout))
        .tls_config(TlsConfig::builder().provider(TlsProvider::NativeTls).build())
        .build();
    Agent::new_with_config(config)
}

fn fetch_text(agent: &Agent, url: &Url) -> Result<String, FetchError> {
    log::debug!("Fetching {url}");
    let request_error = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };
    let mut resp = agent.get(url.as_str()).call().map_err(request_error)?;
    let text = resp.body_mut().read_to_string().map_err(request_error)?;
    Ok(remove_comments(&text))
}

pub fn fetch_documents(
    source: &SourceConfig,
    timeout: Duration,
) -> Result<SourceDocuments, FetchError> {
    let agent = get_ureq_agent(timeout);
    let sensor_types = fetch_text(&agent, &source.sensor_types_url()?)?;
    let scales = fetch_text(&agent, &source.scales_url()?)?;
    log::info!(
        "Fetched {} and {} from {}@{}",
        source.sensor_types_path,
        source.scales_path,
        source.project,
        source.branch
    );
    Ok(SourceDocuments {
        sensor_types,
        scales,
    })
}
