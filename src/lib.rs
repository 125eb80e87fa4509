//! Primitives for nodes in a bean property tree.
//!
//! A "bean" is a plain data-holding object with declared properties. When a
//! build tool decomposes such an object to register its nested properties,
//! every position in that decomposition needs a stable identity: the runtime
//! type of the value it holds and the dotted path ("qualified property
//! name") that led to it from the root bean. This crate models exactly that
//! identity. Property discovery, traversal, and cycle detection live in the
//! collaborators that construct the nodes.

pub mod class;
pub mod errors;
pub mod node;
pub mod render;
pub mod segment;
pub mod util;

pub use class::BeanClass;
pub use errors::{NameError, NameResult};
pub use node::{BeanNode, NodeData, ROOT_DISPLAY};
pub use render::render_property_tree;
pub use segment::{parse_qualified, Segment};
