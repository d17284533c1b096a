use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use crate::constants::defaults;

pub static ROOT_DIR: Lazy<PathBuf> = Lazy::new(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));

pub static CONST_FILE: Lazy<PathBuf> = Lazy::new(|| ROOT_DIR.join(defaults::CONST_FILE_PATH));

/// Directory that external tools should run in for a given generated file.
pub fn working_dir_for(file: &Path) -> &Path {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
