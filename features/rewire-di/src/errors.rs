use thiserror::Error;

use crate::types::DynError;

/// Errors when a class doesn't lend itself to autowiring
#[derive(Error, Debug)]
pub enum AutowireError {
    /// The class could not be introspected at all
    #[error("Unable to autowire {class}")]
    ClassUnresolvable {
        class: String,
        #[source]
        source: DynError,
    },
    /// A parameter declares no type and carries no annotated key
    #[error("Unable to autowire {class}: unknown type for parameter '{param}'")]
    UnknownParamType { class: String, param: String },
    /// A builtin type name is no meaningful lookup key
    #[error("Unable to autowire {class}: builtin type '{builtin}' for parameter '{param}' can't be used as a lookup key. Annotate the parameter with an explicit key instead")]
    BuiltinKey {
        class: String,
        builtin: String,
        param: String,
    },
    /// The lookup service failed to supply a required key
    ///
    /// That failure belongs to the service and passes through untranslated
    #[error(transparent)]
    Lookup(DynError),
    /// The constructor itself failed
    #[error("Constructor of {class} failed")]
    Construction {
        class: String,
        #[source]
        source: DynError,
    },
}

/// Errors when requiring a value from the map-backed lookup service
#[derive(Error, Debug, Clone)]
pub enum RequireError {
    /// Nothing is registered under the requested key
    #[error("No entry for key '{0}'")]
    KeyMissing(String),

    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}
