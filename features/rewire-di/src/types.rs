use std::{
    any::{Any, TypeId},
    sync::Arc,
};

use crate::errors::RequireError;

/// All errors must be Send + Sync so they can cross the lookup seam
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Anything crossing the lookup seam needs to be shareable between threads
/// So it has to be Send + Sync + 'static
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// Dynamically typed value passed between the lookup service and constructors
#[derive(Clone)]
pub struct Instance {
    pub info: TypeInfo,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    pub fn new<T: Injectable>(value: T) -> Self {
        Instance {
            info: TypeInfo::of::<T>(),
            inner: Arc::new(value),
        }
    }

    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>, RequireError> {
        match Arc::downcast::<T>(self.inner.clone()) {
            Ok(downcasted) => Ok(downcasted),
            Err(_) => Err(RequireError::DowncastFailed {
                required_type: std::any::type_name::<T>(),
                actual_type: self.info.type_name,
            }),
        }
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Instance").field(&self.info.type_name).finish()
    }
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}

/// One constructor parameter, as supplied by the introspection provider
#[derive(Debug, Clone)]
pub struct ParamInfo {
    pub name: String,
    /// The declared type name, if the parameter declares one
    pub type_name: Option<String>,
    /// Whether the declared type is built into the language
    pub builtin: bool,
    /// Whether the parameter accepts an absent value
    pub nullable: bool,
}

impl ParamInfo {
    /// A parameter without a declared type
    pub fn untyped(name: impl Into<String>) -> Self {
        ParamInfo {
            name: name.into(),
            type_name: None,
            builtin: false,
            nullable: false,
        }
    }

    /// A parameter with a declared non-builtin type
    pub fn typed(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        ParamInfo {
            name: name.into(),
            type_name: Some(type_name.into()),
            builtin: false,
            nullable: false,
        }
    }

    /// A parameter whose declared type is built into the language
    pub fn builtin(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        ParamInfo {
            name: name.into(),
            type_name: Some(type_name.into()),
            builtin: true,
            nullable: false,
        }
    }

    /// Mark the parameter as accepting an absent value
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Constructor signature and raw doc text of a class
#[derive(Debug, Clone, Default)]
pub struct ConstructorInfo {
    pub params: Vec<ParamInfo>,
    pub doc: Option<String>,
}

impl ConstructorInfo {
    pub fn new(params: Vec<ParamInfo>) -> Self {
        ConstructorInfo { params, doc: None }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// The construction primitive of a class
///
/// Receives the full ordered argument list, `None` standing in for the
/// absent value of an optional dependency the lookup service did not have
pub type ProducerFn = Box<dyn Fn(Vec<Option<Instance>>) -> Result<Instance, DynError> + Send + Sync>;

/// Everything the engine needs to know about a class: its constructor
/// signature plus the primitive that actually builds it
pub struct ClassReflection {
    name: String,
    constructor: Option<ConstructorInfo>,
    produce: ProducerFn,
}

impl ClassReflection {
    /// Reflection of a class without a declared constructor
    pub fn new<F>(name: impl Into<String>, produce: F) -> Self
    where
        F: Fn(Vec<Option<Instance>>) -> Result<Instance, DynError> + Send + Sync + 'static,
    {
        ClassReflection {
            name: name.into(),
            constructor: None,
            produce: Box::new(produce),
        }
    }

    /// Attach the constructor signature
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constructor(&self) -> Option<&ConstructorInfo> {
        self.constructor.as_ref()
    }

    /// Invoke the construction primitive with the full argument list
    pub fn construct(&self, args: Vec<Option<Instance>>) -> Result<Instance, DynError> {
        (self.produce)(args)
    }
}

impl std::fmt::Debug for ClassReflection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassReflection")
            .field("name", &self.name)
            .field("constructor", &self.constructor)
            .finish()
    }
}

/// A resolved lookup key for one constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyInfo {
    /// The key to request from the lookup service
    pub key: String,
    /// If the parameter accepts the absent value when the key is not there
    pub optional: bool,
}
