use crate::{
    annotations::extract_param_annotations,
    container::Container,
    errors::AutowireError,
    introspect::Introspect,
    resolver::determine_dependencies,
    types::{ClassReflection, DependencyInfo, Instance},
};

/// The autowiring seam
pub trait Autowire {
    /// Instantiate `class`, resolving every constructor parameter not
    /// covered by `explicit` from the lookup service.
    ///
    /// Explicit arguments always occupy the leading constructor positions
    /// and are never looked up.
    fn instantiate(&self, class: &str, explicit: Vec<Instance>) -> Result<Instance, AutowireError>;

    /// Alias of [`Autowire::instantiate`]
    fn call(&self, class: &str, explicit: Vec<Instance>) -> Result<Instance, AutowireError> {
        self.instantiate(class, explicit)
    }
}

/// Autowiring using class reflections and doc annotations
pub struct ReflectionAutowire<C, P> {
    container: C,
    introspector: P,
}

impl<C: Container, P: Introspect> ReflectionAutowire<C, P> {
    pub fn new(container: C, introspector: P) -> Self {
        ReflectionAutowire {
            container,
            introspector,
        }
    }

    /// The lookup service dependencies are loaded from
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Determine the lookup key of every parameter not covered by an
    /// explicit argument
    fn dependency_ids(
        &self,
        reflection: &ClassReflection,
        skip: usize,
    ) -> Result<Vec<DependencyInfo>, AutowireError> {
        let Some(constructor) = reflection.constructor() else {
            return Ok(Vec::new());
        };

        let annotations = match &constructor.doc {
            Some(doc) => extract_param_annotations(doc),
            None => Vec::new(),
        };

        determine_dependencies(reflection.name(), &constructor.params, &annotations, skip)
    }

    /// Fetch one dependency, substituting the absent value for optional
    /// keys the service does not have
    fn fetch(&self, dependency: &DependencyInfo) -> Result<Option<Instance>, AutowireError> {
        if dependency.optional && !self.container.has(&dependency.key) {
            tracing::debug!(
                "Optional dependency '{}' is not registered, passing absent",
                dependency.key
            );
            return Ok(None);
        }

        self.container
            .get(&dependency.key)
            .map(Some)
            .map_err(AutowireError::Lookup)
    }
}

impl<C: Container, P: Introspect> Autowire for ReflectionAutowire<C, P> {
    fn instantiate(&self, class: &str, explicit: Vec<Instance>) -> Result<Instance, AutowireError> {
        let reflection = self.introspector.reflect(class).map_err(|error| {
            tracing::error!("Failed to reflect '{}': {}", class, error);
            AutowireError::ClassUnresolvable {
                class: class.to_string(),
                source: error,
            }
        })?;

        let dependency_ids = self.dependency_ids(&reflection, explicit.len())?;
        tracing::debug!(
            "Resolving {} dependencies for {} [{} explicit]",
            dependency_ids.len(),
            class,
            explicit.len()
        );

        let mut args: Vec<Option<Instance>> = explicit.into_iter().map(Some).collect();
        for dependency in &dependency_ids {
            args.push(self.fetch(dependency)?);
        }

        let instance = reflection
            .construct(args)
            .map_err(|error| AutowireError::Construction {
                class: class.to_string(),
                source: error,
            })?;

        tracing::debug!("Constructed instance of {}", class);
        Ok(instance)
    }
}
