use thiserror::Error;

/// Errors when registering or looking up class reflections
#[derive(Error, Debug, Clone)]
pub enum ReflectError {
    /// The requested class is not registered
    #[error("The class '{0}' is not registered")]
    ClassMissing(String),
    /// The class is already registered
    #[error("The class '{0}' is already registered")]
    AlreadyRegistered(String),
}
