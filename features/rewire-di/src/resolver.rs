use crate::{
    errors::AutowireError,
    types::{DependencyInfo, ParamInfo},
};

/// Turn a constructor signature into the ordered list of lookup keys.
///
/// An annotated key always wins over the declared type and skips the builtin
/// check entirely - an explicit key is taken at face value. Parameters below
/// `skip` are satisfied by explicit arguments upstream and are not resolved,
/// while the remaining ones keep their declared position so annotations stay
/// aligned.
pub fn determine_dependencies(
    class: &str,
    params: &[ParamInfo],
    annotations: &[Option<String>],
    skip: usize,
) -> Result<Vec<DependencyInfo>, AutowireError> {
    let mut dependencies = Vec::with_capacity(params.len().saturating_sub(skip));

    for (index, param) in params.iter().enumerate().skip(skip) {
        let key = match annotations.get(index).and_then(Option::as_deref) {
            Some(annotated) => annotated.to_string(),
            None => declared_key(class, param)?,
        };

        dependencies.push(DependencyInfo {
            key,
            optional: param.nullable,
        });
    }

    Ok(dependencies)
}

/// Fall back to the declared type of a parameter
fn declared_key(class: &str, param: &ParamInfo) -> Result<String, AutowireError> {
    let type_name = match &param.type_name {
        Some(type_name) => type_name,
        None => {
            return Err(AutowireError::UnknownParamType {
                class: class.to_string(),
                param: param.name.clone(),
            })
        }
    };

    if param.builtin {
        return Err(AutowireError::BuiltinKey {
            class: class.to_string(),
            builtin: type_name.clone(),
            param: param.name.clone(),
        });
    }

    Ok(type_name.clone())
}
