//! Orchestration glue
//!
//! Runs the strict stage sequence: parse source → extract keys → decode
//! manifest → extract keys → reconcile. Precondition failures abort with an
//! error; mismatches travel on the returned verdict.

use tracing::info;

use crate::config::CheckPaths;
use crate::errors::Result;
use crate::reconcile::{self, Verdict};
use crate::{parsing, stepyml};

/// Run one end-to-end check over the resolved file pair.
pub fn run_check(paths: &CheckPaths) -> Result<Verdict> {
    info!("analyzing {}", paths.go_file.display());
    let source_keys = parsing::analyze_go_file(&paths.go_file)?;
    info!("found {} inputs", source_keys.len());

    info!("analyzing {}", paths.step_yml.display());
    let step = stepyml::load_step(&paths.step_yml)?;
    let manifest_keys = stepyml::input_keys(&step)?;
    info!("found {} inputs", manifest_keys.len());

    Ok(reconcile::reconcile(&source_keys, &manifest_keys))
}
