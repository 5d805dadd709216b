//! Input file resolution

use std::path::{Path, PathBuf};

pub const GO_FILE_NAME: &str = "main.go";
pub const STEP_YML_NAME: &str = "step.yml";

/// The two files one check run consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckPaths {
    pub go_file: PathBuf,
    pub step_yml: PathBuf,
}

impl CheckPaths {
    /// Resolve both paths under `root`, the current directory when absent.
    pub fn resolve(root: Option<&Path>) -> Self {
        let root = root.unwrap_or_else(|| Path::new(""));
        Self {
            go_file: root.join(GO_FILE_NAME),
            step_yml: root.join(STEP_YML_NAME),
        }
    }
}
