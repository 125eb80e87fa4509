//! Runtime type token for bean values.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies the runtime type of the value a node represents.
///
/// Two tokens are equal exactly when they were created for the same Rust
/// type; the captured type name is carried for diagnostics only.
#[derive(Debug, Clone, Copy)]
pub struct BeanClass {
    id: TypeId,
    name: &'static str,
}

impl BeanClass {
    /// Token for the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Token for the type of `value`.
    pub fn of_val<T: 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type name, as produced by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True when this token identifies `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for BeanClass {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BeanClass {}

impl Hash for BeanClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for BeanClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
