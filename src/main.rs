use std::process::ExitCode;

use anyhow::Result;
use env_logger::Env;

use multilevel_sensor_gen::command;
use multilevel_sensor_gen::constants::{defaults, envvars};
use multilevel_sensor_gen::GeneratorConfig;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let report = command::generate(&GeneratorConfig::default())?;
    if report.fails_run() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
