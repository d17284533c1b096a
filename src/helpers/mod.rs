mod commands;

pub use commands::{
    check_repo_clean, check_repo_clean_with, run_formatter, run_formatter_with, StepOutcome,
};

pub mod base_path;
