use std::sync::Arc;

use crate::types::{ClassReflection, DynError};

/// The introspection seam
///
/// Supplies, for a class name, the constructor signature, its raw doc text
/// and the construction primitive. How that information is obtained is up
/// to the provider - the engine only consumes the descriptors.
pub trait Introspect {
    /// Look up the reflection for `class`
    ///
    /// Fails when the class is unknown or not instantiable.
    fn reflect(&self, class: &str) -> Result<Arc<ClassReflection>, DynError>;
}

impl<P: Introspect> Introspect for &P {
    fn reflect(&self, class: &str) -> Result<Arc<ClassReflection>, DynError> {
        (**self).reflect(class)
    }
}
