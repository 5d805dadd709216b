//! Tree-walking input extractor
//!
//! Walks a parsed Go syntax tree depth-first, pre-order, and collects the
//! `env` tag value of every field of the first struct-shaped type
//! declaration. Later structs in the same file are not inspected, and a
//! grouped `type (...)` declaration is judged by its first spec only.
//!
//! The walk always visits every node exactly once; finding the target
//! struct flips an explicit flag instead of cutting the traversal short.

use tree_sitter::Node;

use crate::parsing::tag::FieldTag;
use crate::InputKey;

/// The annotation key marking a field as a configurable input.
const ENV_MARKER: &str = "env";

/// Collects input keys from one syntax tree.
///
/// Owns its accumulator; [`InputVisitor::walk`] consumes the visitor and
/// hands the ordered key list back.
pub struct InputVisitor<'s> {
    source: &'s str,
    keys: Vec<InputKey>,
    struct_seen: bool,
}

impl<'s> InputVisitor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            keys: Vec::new(),
            struct_seen: false,
        }
    }

    /// Walk the tree rooted at `root` and return the collected keys in
    /// field declaration order.
    pub fn walk(mut self, root: Node<'_>) -> Vec<InputKey> {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            self.visit(&node);
            // Children pushed in reverse so the leftmost pops first.
            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }
        self.keys
    }

    fn visit(&mut self, node: &Node<'_>) {
        if self.struct_seen || node.kind() != "type_declaration" {
            return;
        }
        let Some(spec) = first_type_spec(node) else {
            return;
        };
        let Some(struct_node) = spec
            .child_by_field_name("type")
            .filter(|t| t.kind() == "struct_type")
        else {
            return;
        };

        self.struct_seen = true;
        self.collect_fields(&struct_node);
    }

    /// Append the `env` key of every tagged field, declaration order
    /// preserved. Untagged fields, tags without the marker, malformed tags
    /// and empty values all contribute nothing.
    fn collect_fields(&mut self, struct_node: &Node<'_>) {
        let mut cursor = struct_node.walk();
        for child in struct_node.children(&mut cursor) {
            if child.kind() != "field_declaration_list" {
                continue;
            }
            let mut field_cursor = child.walk();
            for field in child.children(&mut field_cursor) {
                if field.kind() != "field_declaration" {
                    continue;
                }
                if let Some(tag_node) = field.child_by_field_name("tag") {
                    self.collect_tag(&tag_node);
                }
            }
        }
    }

    fn collect_tag(&mut self, tag_node: &Node<'_>) {
        let raw = &self.source[tag_node.start_byte()..tag_node.end_byte()];
        let tag = FieldTag::parse(raw);
        if let Some(value) = tag.get(ENV_MARKER) {
            // Only the first comma-separated token names the input; the
            // rest are option flags.
            let key = value.split(',').next().unwrap_or_default();
            if !key.is_empty() {
                self.keys.push(key.to_string());
            }
        }
    }
}

/// First `type_spec` child of a type declaration, if any.
fn first_type_spec<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let spec = node.children(&mut cursor).find(|c| c.kind() == "type_spec");
    spec
}
