use super::paths::{path_variables, route_path, ParamBinding};
use super::render::{doc_lines, method_name, render_annotations};
use super::templates::MethodBlock;
use crate::ast::{Endpoint, HttpVerb, Modifier};

/// Marker line for a modifier. `Expects` has none; it becomes the body parameter.
pub fn modifier_marker(modifier: &Modifier) -> Option<String> {
    match modifier {
        Modifier::Tx => Some("@Transactional".to_string()),
        Modifier::Secure(role) => Some(format!("@PreAuthorize(\"hasRole('{role}')\")")),
        Modifier::Status(code) => Some(format!("@ResponseStatus(HttpStatus.valueOf({code}))")),
        Modifier::Expects(_) => None,
    }
}

/// Verb-specific route marker carrying the full route.
pub fn route_marker(verb: HttpVerb, route: &str) -> String {
    let mapping = match verb {
        HttpVerb::Get => "@GetMapping".to_string(),
        HttpVerb::Post => "@PostMapping".to_string(),
        HttpVerb::Put => "@PutMapping".to_string(),
        HttpVerb::Patch => "@PatchMapping".to_string(),
        HttpVerb::Delete => "@DeleteMapping".to_string(),
        HttpVerb::Head | HttpVerb::Options => {
            format!("@RequestMapping(method = RequestMethod.{verb})")
        }
    };
    format!("{mapping}(\"{route}\")")
}

/// Parameter list entries: optional `body` first, then declared params in order.
pub fn render_parameters(ep: &Endpoint, prefix: &[&str]) -> Vec<String> {
    let vars = path_variables(prefix, ep.primary_path());
    let body = ep
        .expected_body()
        .map(|ty| format!("@RequestBody {ty} body"));
    body.into_iter()
        .chain(ep.params.iter().map(|p| {
            let binding = ParamBinding::classify(p, &vars);
            format!("{} {} {}", binding.marker(), p.ty, p.name)
        }))
        .collect()
}

/// Render one endpoint under the given ancestor path prefix.
///
/// Emits, in order: doc comment, annotations, modifier markers (declaration
/// order, not deduplicated), route marker, signature and placeholder body.
/// Alias paths past the first are ignored.
pub fn render_endpoint(ep: &Endpoint, prefix: &[&str]) -> MethodBlock {
    let path = ep.primary_path();
    let route = route_path(prefix, path);

    let mut markers = render_annotations(&ep.annotations);
    markers.extend(ep.modifiers.iter().filter_map(modifier_marker));
    markers.push(route_marker(ep.verb, &route));

    let return_type = ep
        .returns
        .as_ref()
        .map_or_else(|| "void".to_string(), |ty| ty.to_string());
    let body = if ep.returns.is_none() {
        "// TODO".to_string()
    } else {
        "return null; // TODO".to_string()
    };
    let signature = format!(
        "public {return_type} {}({})",
        method_name(path),
        render_parameters(ep, prefix).join(", ")
    );

    tracing::debug!(verb = %ep.verb, route = %route, "Rendered endpoint");

    MethodBlock {
        doc_lines: doc_lines(&ep.annotations),
        markers,
        signature,
        body,
    }
}
