//! Node identity for the bean property tree.

use std::fmt;

use tracing::instrument;

use crate::class::BeanClass;

/// Display form of a root node.
pub const ROOT_DISPLAY: &str = "<root>";

/// Identity shared by every node in a bean property tree.
///
/// A node knows the runtime type it stands for and the fully qualified
/// property name that led to it; the root carries no name. Nodes hold no
/// parent or child references: a child's qualified name is derived from its
/// parent's at discovery time and stored on the child, so answering "what is
/// my path" never walks the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    property_name: Option<String>,
    bean_class: BeanClass,
}

impl NodeData {
    /// Node for the originally supplied bean, with no enclosing property.
    pub fn root(bean_class: BeanClass) -> Self {
        Self {
            property_name: None,
            bean_class,
        }
    }

    /// Node reached through `property_name`, which must already be fully
    /// qualified (the parent's `qualified_property_name` output).
    pub fn nested(property_name: impl Into<String>, bean_class: BeanClass) -> Self {
        Self {
            property_name: Some(property_name.into()),
            bean_class,
        }
    }

    pub fn is_root(&self) -> bool {
        self.property_name.is_none()
    }

    pub fn bean_class(&self) -> BeanClass {
        self.bean_class
    }

    pub fn property_name(&self) -> Option<&str> {
        self.property_name.as_deref()
    }

    /// Qualified name for a child reached through `child_name`.
    ///
    /// The root contributes no prefix; any other node prefixes its own
    /// already-qualified name. Well-formedness of `child_name` is the
    /// discovering caller's concern.
    #[instrument(level = "trace")]
    pub fn qualified_property_name(&self, child_name: &str) -> String {
        match &self.property_name {
            None => child_name.to_string(),
            Some(name) => format!("{}.{}", name, child_name),
        }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property_name {
            None => f.write_str(ROOT_DISPLAY),
            Some(name) => f.write_str(name),
        }
    }
}

/// Capability set every node kind in the property tree supports.
///
/// Concrete node kinds embed a [`NodeData`] and implement `node_data`; the
/// rest of the contract is provided.
pub trait BeanNode {
    fn node_data(&self) -> &NodeData;

    /// True iff this node is the entry point of the whole tree.
    fn is_root(&self) -> bool {
        self.node_data().is_root()
    }

    fn bean_class(&self) -> BeanClass {
        self.node_data().bean_class()
    }

    /// The qualified property name leading to this node, `None` for the root.
    fn property_name(&self) -> Option<&str> {
        self.node_data().property_name()
    }

    fn qualified_property_name(&self, child_name: &str) -> String {
        self.node_data().qualified_property_name(child_name)
    }
}

impl BeanNode for NodeData {
    fn node_data(&self) -> &NodeData {
        self
    }
}
