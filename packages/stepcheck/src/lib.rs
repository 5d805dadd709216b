/*
 * stepcheck - step input drift checker
 *
 * Verifies that a step's Go config struct and its step.yml manifest declare
 * the same set of configurable inputs:
 * - parsing/   : Go source analysis (tree-sitter walk + struct tag parser)
 * - stepyml    : step.yml manifest decoding
 * - reconcile  : two-direction key comparison
 * - report     : terminal rendering of the verdict
 * - pipeline   : orchestration glue
 */

pub mod config;
pub mod errors;
pub mod parsing;
pub mod pipeline;
pub mod reconcile;
pub mod report;
pub mod stepyml;

pub use errors::{CheckError, Result};
pub use reconcile::{classify, reconcile, KeyMatch, Verdict};

/// Canonical name of one configurable input, shared by the source-code view
/// and the manifest view.
pub type InputKey = String;
