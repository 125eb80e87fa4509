//! Diagnostic rendering of qualified property name sets.

use std::collections::BTreeMap;

use termtree::Tree;
use tracing::instrument;

use crate::errors::NameResult;
use crate::node::ROOT_DISPLAY;
use crate::segment::parse_qualified;

#[derive(Default)]
struct Level {
    children: BTreeMap<String, Level>,
}

impl Level {
    fn insert(&mut self, segments: &[String]) {
        if let Some((first, rest)) = segments.split_first() {
            self.children.entry(first.clone()).or_default().insert(rest);
        }
    }

    fn to_tree(&self, label: String) -> Tree<String> {
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(|(name, level)| level.to_tree(name.clone()))
            .collect();
        Tree::new(label).with_leaves(leaves)
    }
}

/// Builds an indented tree from a set of qualified property names, rooted at
/// the root sentinel.
///
/// Shared prefixes merge into one branch and children are ordered
/// lexicographically, so the output is stable regardless of discovery order.
#[instrument(level = "debug", skip(names))]
pub fn render_property_tree<S: AsRef<str>>(names: &[S]) -> NameResult<Tree<String>> {
    let mut root = Level::default();
    for name in names {
        let segments: Vec<String> = parse_qualified(name.as_ref())?
            .iter()
            .map(|segment| segment.local_name())
            .collect();
        root.insert(&segments);
    }
    Ok(root.to_tree(ROOT_DISPLAY.to_string()))
}
