use crate::ast::Param;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

#[allow(clippy::expect_used)]
static PATH_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid path variable regex"));

/// Full route of an endpoint: ancestor segments followed by the local path.
///
/// Plain concatenation. No separators are inserted and duplicate slashes are
/// kept, so segments must be authored to compose cleanly.
pub fn route_path(prefix: &[&str], local: &str) -> String {
    let mut route = prefix.concat();
    route.push_str(local);
    route
}

/// Names of every `{var}` found in the ancestor segments and the local path.
///
/// Segments are scanned one by one, so a variable can never be formed across
/// a segment boundary.
pub fn path_variables<'a>(prefix: &[&'a str], local: &'a str) -> HashSet<&'a str> {
    prefix
        .iter()
        .copied()
        .chain(std::iter::once(local))
        .flat_map(|segment| {
            PATH_VARIABLE
                .captures_iter(segment)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        })
        .collect()
}

/// How a declared parameter is bound in the generated signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamBinding {
    /// Name appears as a route variable
    Path,
    /// Bound from the query string; `required` is false for optional params
    Query { required: bool },
}

impl ParamBinding {
    /// Classify `param` against the route variables of its endpoint.
    pub fn classify(param: &Param, vars: &HashSet<&str>) -> Self {
        if vars.contains(param.name.as_str()) {
            ParamBinding::Path
        } else {
            ParamBinding::Query {
                required: !param.optional,
            }
        }
    }

    /// Framework marker placed in front of the parameter.
    pub fn marker(&self) -> &'static str {
        match self {
            ParamBinding::Path => "@PathVariable",
            ParamBinding::Query { required: true } => "@RequestParam",
            ParamBinding::Query { required: false } => "@RequestParam(required = false)",
        }
    }
}
