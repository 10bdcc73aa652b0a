use std::sync::LazyLock;

use regex::Regex;

/// Grammar of a single doc entry: a type token, a `$name` token and a quoted
/// override key, each optional, in that order
static PARAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@param(?:\s+([^$"\s]\S*))?(?:\s+\$(\w+))?(?:\s+"([^"]+)")?"#)
        .expect("param annotation pattern is valid")
});

/// Extract override keys from a constructor's raw doc text.
///
/// One entry per `@param` annotation, in order of appearance - alignment to
/// the right parameter position is the resolver's job. Entries without a
/// quoted key yield `None` and fall through to the declared type. Annotated
/// type tokens are not considered as keys.
///
/// Never fails: a malformed or empty comment just yields no overrides.
pub fn extract_param_annotations(doc: &str) -> Vec<Option<String>> {
    PARAM_PATTERN
        .captures_iter(doc)
        .map(|entry| entry.get(3).map(|key| key.as_str().to_string()))
        .collect()
}
