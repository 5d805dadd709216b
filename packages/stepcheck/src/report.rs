//! Terminal report for a reconciliation verdict

use std::path::Path;

use crate::reconcile::{KeyMatch, Verdict};

pub struct TerminalReporter;

impl TerminalReporter {
    /// Print both directions, source view first, one marker per key.
    pub fn print(verdict: &Verdict, go_file: &Path, step_yml: &Path) {
        println!("- {}:", go_file.display());
        Self::print_direction(&verdict.source_view);

        println!("- {}:", step_yml.display());
        Self::print_direction(&verdict.manifest_view);
    }

    fn print_direction(entries: &[KeyMatch]) {
        for entry in entries {
            let marker = if entry.matched { '✓' } else { '✗' };
            println!(" - {} {}", marker, entry.key);
        }
    }
}
