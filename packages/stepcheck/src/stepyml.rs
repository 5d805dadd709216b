//! step.yml manifest reading
//!
//! Decodes the declarative side of the check. An input is one entry of the
//! manifest's `inputs` sequence: a mapping holding the input key with its
//! default value, plus an optional `opts` mapping that is never a key.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::errors::{CheckError, Result};
use crate::InputKey;

const OPTS_KEY: &str = "opts";

/// The slice of a step manifest this tool cares about. Everything else in
/// the document (title, summary, run conditions, ...) is ignored.
#[derive(Debug, Deserialize)]
pub struct StepModel {
    #[serde(default)]
    pub inputs: Vec<EnvItem>,
}

/// One declared input: `{ KEY: default, opts: {...} }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct EnvItem(Mapping);

impl EnvItem {
    /// The input key and its default value.
    ///
    /// Exactly one key beside `opts` must be present; anything else is a
    /// malformed manifest and a fatal decode failure.
    pub fn key_value_pair(&self) -> Result<(&str, &Value)> {
        let mut pair = None;
        for (key, value) in &self.0 {
            let Some(key) = key.as_str() else {
                return Err(CheckError::manifest_error("input key is not a string"));
            };
            if key == OPTS_KEY {
                continue;
            }
            if pair.is_some() {
                return Err(CheckError::manifest_error(format!(
                    "input declares more than one key: {key}"
                )));
            }
            pair = Some((key, value));
        }
        pair.ok_or_else(|| CheckError::manifest_error("input declares no key"))
    }
}

/// Decode a step manifest from disk.
pub fn load_step(path: &Path) -> Result<StepModel> {
    let file = File::open(path)
        .map_err(|e| CheckError::manifest_error(format!("could not open {}: {e}", path.display())))?;
    serde_yaml::from_reader(file)
        .map_err(|e| CheckError::manifest_error(format!("could not parse {}: {e}", path.display())))
}

/// Input keys in document order.
pub fn input_keys(step: &StepModel) -> Result<Vec<InputKey>> {
    step.inputs
        .iter()
        .map(|item| item.key_value_pair().map(|(key, _)| key.to_string()))
        .collect()
}
