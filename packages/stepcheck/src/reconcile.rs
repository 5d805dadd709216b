//! Key reconciliation
//!
//! Pure comparison of the two extracted key lists. Membership is
//! set-semantic while report order follows the input lists, so output stays
//! deterministic without deduplicating anything. Both directions are always
//! computed in full; a mismatch is data on the verdict, never an early
//! exit.

use std::collections::HashSet;

use crate::InputKey;

/// One key's classification against the opposite list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub key: InputKey,
    pub matched: bool,
}

/// Aggregate result of reconciling both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Source-file view: every source key, matched iff the manifest declares it.
    pub source_view: Vec<KeyMatch>,
    /// Manifest view: every manifest key, matched iff the source tags it.
    pub manifest_view: Vec<KeyMatch>,
}

impl Verdict {
    /// True iff every key in both directions matched.
    pub fn passed(&self) -> bool {
        self.source_view
            .iter()
            .chain(&self.manifest_view)
            .all(|entry| entry.matched)
    }

    /// Source keys the manifest does not declare.
    pub fn missing_from_manifest(&self) -> Vec<&str> {
        missing(&self.source_view)
    }

    /// Manifest keys the source does not tag.
    pub fn missing_from_source(&self) -> Vec<&str> {
        missing(&self.manifest_view)
    }
}

fn missing(entries: &[KeyMatch]) -> Vec<&str> {
    entries
        .iter()
        .filter(|entry| !entry.matched)
        .map(|entry| entry.key.as_str())
        .collect()
}

/// Classify every key of `keys` by membership in `other`.
///
/// Duplicates in `other` are irrelevant; a single occurrence matches.
/// Output order equals the order of `keys`.
pub fn classify(keys: &[InputKey], other: &[InputKey]) -> Vec<KeyMatch> {
    let present: HashSet<&str> = other.iter().map(String::as_str).collect();
    keys.iter()
        .map(|key| KeyMatch {
            key: key.clone(),
            matched: present.contains(key.as_str()),
        })
        .collect()
}

/// Reconcile both directions. Pure over its inputs.
pub fn reconcile(source: &[InputKey], manifest: &[InputKey]) -> Verdict {
    Verdict {
        source_view: classify(source, manifest),
        manifest_view: classify(manifest, source),
    }
}
