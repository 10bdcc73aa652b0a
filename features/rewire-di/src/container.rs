use std::collections::HashMap;

use crate::{
    errors::RequireError,
    types::{DynError, Instance},
};

/// The dependency-lookup seam
///
/// The engine never assumes a concrete service behind it - anything mapping
/// string keys to instances satisfies the contract.
pub trait Container {
    /// Whether a value is registered under `key`
    fn has(&self, key: &str) -> bool;

    /// Fetch the value registered under `key`
    ///
    /// Fails if the key is absent. That failure belongs to the lookup
    /// service and reaches the caller untranslated.
    fn get(&self, key: &str) -> Result<Instance, DynError>;
}

impl<C: Container> Container for &C {
    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> Result<Instance, DynError> {
        (**self).get(key)
    }
}

/// The simplest lookup service there is
impl Container for HashMap<String, Instance> {
    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<Instance, DynError> {
        match HashMap::get(self, key) {
            Some(instance) => Ok(instance.clone()),
            None => Err(RequireError::KeyMissing(key.to_string()).into()),
        }
    }
}
