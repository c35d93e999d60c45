//! Depth-first discovery of include directives.
//!
//! Every mapping's own `include` key is intercepted at any depth. Siblings are
//! visited before the mapping's include entries are emitted, so an include
//! nested inside a job is reported before the include of its parent mapping.
//! Callers must not rely on that ordering across depths.
//!
//! The traversal uses an explicit work stack so arbitrarily deep documents
//! cannot exhaust the native call stack.

use super::{IncludeEntry, ProjectInclude};
use crate::constants::INCLUDE_KEY;
use crate::document::Node;

enum Task<'a> {
    Visit(&'a Node),
    Emit(&'a Node),
}

/// Collect every classified include entry in the document.
///
/// ```rust
/// use cidep_cli::document::parse_document;
/// use cidep_cli::include::collect_include_entries;
///
/// let doc = parse_document("include:\n  - local: a.yml\n  - project: g/r\n").unwrap();
/// let entries = collect_include_entries(&doc);
/// assert!(entries[0].is_local());
/// assert!(entries[1].is_project());
/// ```
pub fn collect_include_entries(node: &Node) -> Vec<IncludeEntry> {
    let mut entries = Vec::new();
    let mut stack = vec![Task::Visit(node)];

    while let Some(task) = stack.pop() {
        match task {
            Task::Visit(Node::Null | Node::Scalar(_)) => {}
            Task::Visit(Node::Sequence(items)) => {
                stack.extend(items.iter().rev().map(Task::Visit));
            }
            Task::Visit(Node::Mapping(mapping)) => {
                if mapping.is_empty() {
                    continue;
                }
                // pushed first so it runs after every sibling subtree
                if let Some(include) = mapping.get(INCLUDE_KEY) {
                    stack.push(Task::Emit(include));
                }
                stack.extend(
                    mapping
                        .iter()
                        .rev()
                        .filter(|(key, _)| *key != INCLUDE_KEY)
                        .map(|(_, value)| Task::Visit(value)),
                );
            }
            Task::Emit(include) => {
                entries.extend(include_items(include).iter().map(IncludeEntry::classify));
            }
        }
    }

    entries
}

/// Collect the project includes of a document, the only entries that name
/// another repository.
pub fn collect_project_includes(node: &Node) -> Vec<ProjectInclude> {
    let projects: Vec<ProjectInclude> = collect_include_entries(node)
        .into_iter()
        .filter_map(IncludeEntry::into_project)
        .collect();
    tracing::trace!("Found {} project include(s)", projects.len());
    projects
}

/// A bare include value is treated as a one-element list.
fn include_items(include: &Node) -> &[Node] {
    match include {
        Node::Sequence(items) => items,
        Node::Null => &[],
        other => std::slice::from_ref(other),
    }
}
