//! Rewire Reflect supplies the class reflections the autowiring engine
//! consumes.
//!
//! Rust has no runtime reflection, so classes are registered up front: each
//! entry pairs a class name with its constructor signature, raw doc text and
//! a closure that actually builds the object. The registry then serves as
//! the engine's introspection provider.
//!
//! Rewire Reflect consists of the following components:
//!
//! 1. Registry - a name-keyed registry of class reflections
//! 2. Builtins - the builtin type name table and a parameter helper
//! 3. Errors - for registry errors

pub mod builtins;
pub mod errors;
pub mod registry;

pub use builtins::{is_builtin, param};
pub use errors::ReflectError;
pub use registry::ReflectionRegistry;
