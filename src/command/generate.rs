use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::helpers::{self, base_path, StepOutcome};
use crate::interfaces::source::{self, FetchError, SourceDocuments};
use crate::model::{self, BuildError, SensorNameRules};
use crate::render;
use crate::splice::{self, SpliceError};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Splice(#[from] SpliceError),
    #[error("could not read previous file {}: {source}", .path.display())]
    ReadPrevious {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub formatter: StepOutcome,
    pub vcs: StepOutcome,
}

impl RunReport {
    /// The checked-in file differed from what was generated, or that could not be checked.
    pub fn fails_run(&self) -> bool {
        self.vcs.is_fatal()
    }
}

/// Full contents of the regenerated file; no I/O.
pub fn render_file(
    docs: &SourceDocuments,
    previous: &str,
    config: &GeneratorConfig,
) -> Result<String, GenerateError> {
    let (raw_sensors, raw_scales) = docs.parse()?;
    let rules = SensorNameRules::new(config.parenthesis_preserving_ids.clone());
    let model = model::build(&raw_scales, &raw_sensors, &rules)?;
    let units = model::build_unit_index(model.scale_groups.values());
    log::info!(
        "Rendering {} sensor types, {} scale groups and {} units",
        model.sensor_types.len(),
        model.scale_groups.len(),
        units.len()
    );
    let lines = splice::splice(render::render(&model, &units, &config.source), previous)?;
    Ok(splice::to_file_text(&lines))
}

/// Fetches, renders and writes the constants file. Nothing is written on error.
pub fn generate_file(config: &GeneratorConfig) -> Result<(), GenerateError> {
    let path = &config.destination;
    let docs = source::fetch_documents(&config.source, config.fetch_timeout)?;
    let previous = fs::read_to_string(path).map_err(|source| GenerateError::ReadPrevious {
        path: path.clone(),
        source,
    })?;
    let text = render_file(&docs, &previous, config)?;
    fs::write(path, text).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

pub fn generate(config: &GeneratorConfig) -> Result<RunReport, GenerateError> {
    generate_file(config)?;

    let formatter = if config.run_formatter {
        helpers::run_formatter(&config.destination)
    } else {
        StepOutcome::SkippedUnavailable
    };
    let vcs = if config.run_vcs_check {
        helpers::check_repo_clean(base_path::working_dir_for(&config.destination))
    } else {
        StepOutcome::SkippedUnavailable
    };
    Ok(RunReport { formatter, vcs })
}
