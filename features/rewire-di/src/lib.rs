//! Rewire DI instantiates classes by autowiring their constructors against a
//! key/value lookup service.
//!
//! The engine introspects a class's constructor, determines one lookup key
//! per parameter and splices the fetched values after any explicitly supplied
//! leading arguments. Keys come from the parameter's declared type name, or
//! from a quoted `@param` doc annotation which always takes precedence:
//!
//! ```text
//! /**
//!  * @param ColorInterface $color
//!  * @param int|string     $hue    "config.hue"
//!  */
//! ```
//!
//! Builtin type names are rejected as lookup keys, optional (nullable)
//! parameters degrade to the absent value when the service does not have
//! their key, and every failure surfaces as an [`AutowireError`].
//!
//! Rewire DI consists of the following components:
//!
//! 1. Annotations - for extracting override keys from raw doc text
//! 2. Resolver - for turning a constructor signature into ordered lookup keys
//! 3. Autowire - for orchestrating introspection, lookup and construction
//! 4. Container / Introspect - the two seams the engine consumes
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use rewire_di::{
//!     Autowire, ClassReflection, ConstructorInfo, DynError, Instance, Introspect, ParamInfo,
//!     ReflectionAutowire,
//! };
//!
//! struct Mailer {
//!     transport: Arc<String>,
//! }
//!
//! // Introspection provider over a single known class.
//! struct OneClass(Arc<ClassReflection>);
//! impl Introspect for OneClass {
//!     fn reflect(&self, _class: &str) -> Result<Arc<ClassReflection>, DynError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! let reflection = ClassReflection::new("Mailer", |args: Vec<Option<Instance>>| {
//!     let transport = args
//!         .into_iter()
//!         .next()
//!         .flatten()
//!         .ok_or("transport is required")?
//!         .downcast::<String>()?;
//!     Ok(Instance::new(Mailer { transport }))
//! })
//! .with_constructor(ConstructorInfo::new(vec![ParamInfo::typed(
//!     "transport",
//!     "SmtpTransport",
//! )]));
//!
//! let mut services = HashMap::new();
//! services.insert(
//!     "SmtpTransport".to_string(),
//!     Instance::new("smtp://localhost:2525".to_string()),
//! );
//!
//! let autowire = ReflectionAutowire::new(services, OneClass(Arc::new(reflection)));
//! let mailer = autowire.instantiate("Mailer", Vec::new()).unwrap();
//! assert!(mailer.downcast::<Mailer>().is_ok());
//! ```

pub mod annotations;
pub mod autowire;
pub mod container;
pub mod errors;
pub mod introspect;
pub mod resolver;
pub mod types;

pub use autowire::{Autowire, ReflectionAutowire};
pub use container::Container;
pub use errors::{AutowireError, RequireError};
pub use introspect::Introspect;
pub use types::{
    ClassReflection, ConstructorInfo, DependencyInfo, DynError, Injectable, Instance, ParamInfo,
    ProducerFn, TypeInfo,
};
