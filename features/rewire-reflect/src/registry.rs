use std::{collections::HashMap, sync::Arc};

use rewire_di::{ClassReflection, DynError, Introspect};

use crate::errors::ReflectError;

/// A registry of class reflections, keyed by class name.
///
/// Filled once at startup and handed to the engine as its introspection
/// provider. Entries are shared, so cloning the registry is cheap.
#[derive(Default, Clone, Debug)]
pub struct ReflectionRegistry {
    classes: HashMap<String, Arc<ClassReflection>>,
}

impl ReflectionRegistry {
    /// Initializes an empty registry
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Add a class reflection to the registry.
    ///
    /// If the class name is already taken, it will return a
    /// [`ReflectError`] and leave the existing entry untouched
    pub fn add_class(&mut self, reflection: ClassReflection) -> Result<&mut Self, ReflectError> {
        let name = reflection.name().to_string();

        if self.classes.contains_key(&name) {
            return Err(ReflectError::AlreadyRegistered(name));
        }

        self.classes.insert(name, Arc::new(reflection));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Introspect for ReflectionRegistry {
    fn reflect(&self, class: &str) -> Result<Arc<ClassReflection>, DynError> {
        match self.classes.get(class) {
            Some(reflection) => Ok(reflection.clone()),
            None => Err(ReflectError::ClassMissing(class.to_string()).into()),
        }
    }
}
