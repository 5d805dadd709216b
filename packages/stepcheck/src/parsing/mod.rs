//! Go source analysis
//!
//! Wraps tree-sitter with the Go grammar and exposes the one operation the
//! checker needs: the ordered list of `env`-tagged input keys declared by a
//! source file's config struct.

mod tag;
mod visitor;

pub use tag::FieldTag;
pub use visitor::InputVisitor;

use std::fs;
use std::path::Path;

use tree_sitter::{Parser, Tree};

use crate::errors::{CheckError, Result};
use crate::InputKey;

/// Parse Go source text into a syntax tree.
///
/// tree-sitter is error-tolerant and will happily hand back a tree full of
/// error nodes; a root carrying errors is rejected here so broken source is
/// a fatal precondition failure, never a silent empty result.
pub fn parse_go(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::language())
        .map_err(|e| CheckError::parse_error(format!("failed to load Go grammar: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| CheckError::parse_error("Go parser produced no tree"))?;

    if tree.root_node().has_error() {
        return Err(CheckError::parse_error("Go source has syntax errors"));
    }

    Ok(tree)
}

/// Input keys of the first struct-shaped type declaration, in field order.
pub fn extract_input_keys(tree: &Tree, source: &str) -> Vec<InputKey> {
    InputVisitor::new(source).walk(tree.root_node())
}

/// Read, parse and extract one Go source file.
pub fn analyze_go_file(path: &Path) -> Result<Vec<InputKey>> {
    let source = fs::read_to_string(path)
        .map_err(|e| CheckError::parse_error(format!("could not read {}: {e}", path.display())))?;
    let tree = parse_go(&source)?;
    Ok(extract_input_keys(&tree, &source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_broken_source() {
        let err = parse_go("package main\n\nfunc {").unwrap_err();
        assert!(matches!(err, CheckError::Parse(_)));
    }

    #[test]
    fn parse_accepts_valid_source() {
        assert!(parse_go("package main\n\nfunc main() {}\n").is_ok());
    }

    #[test]
    fn analyze_missing_file_is_fatal() {
        let err = analyze_go_file(Path::new("does/not/exist/main.go")).unwrap_err();
        assert!(matches!(err, CheckError::Parse(_)));
    }
}
