use crate::ast::{Annotation, Literal, TypeRef};
use std::fmt;

/// Canonical text of a type reference.
///
/// Generic arguments are joined by a bare comma and never reordered;
/// wildcards render as `?`, `? extends T` or `? super T`.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Simple(name) => write!(f, "{name}"),
            TypeRef::Array(of) => write!(f, "{of}[]"),
            TypeRef::Generic { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            TypeRef::Wild { bound: None, .. } => write!(f, "?"),
            TypeRef::Wild {
                bound: Some(bound),
                plus: true,
            } => write!(f, "? extends {bound}"),
            TypeRef::Wild {
                bound: Some(bound),
                plus: false,
            } => write!(f, "? super {bound}"),
        }
    }
}

/// Integers as decimal digits, strings quoted verbatim (no escaping).
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{value}"),
            Literal::String(value) => write!(f, "\"{value}\""),
        }
    }
}

impl Literal {
    /// The literal's content without quoting.
    pub fn raw(&self) -> String {
        match self {
            Literal::Int(value) => value.to_string(),
            Literal::String(value) => value.clone(),
        }
    }
}

/// Render one annotation as a marker line (without indentation).
///
/// `Doc` annotations are never rendered this way; callers filter them with
/// [`Annotation::is_doc`] and emit [`doc_lines`] instead.
pub fn render_annotation(ann: &Annotation) -> String {
    if ann.args.is_empty() {
        return format!("@{}", ann.name);
    }
    if ann.args.len() == 1 {
        if let Some(value) = ann.positional_arg() {
            return format!("@{}(\"{}\")", ann.name, value.raw());
        }
    }
    let args = ann
        .args
        .iter()
        .map(|(key, value)| {
            if key.is_empty() {
                value.to_string()
            } else {
                format!("{key}={value}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("@{}({args})", ann.name)
}

/// Marker lines for every non-`Doc` annotation, in declaration order.
pub fn render_annotations(anns: &[Annotation]) -> Vec<String> {
    anns.iter()
        .filter(|a| !a.is_doc())
        .map(render_annotation)
        .collect()
}

/// Lines of the first `Doc` annotation carrying a positional string.
///
/// Returns an empty vector when there is no such annotation. Trailing empty
/// lines are dropped; an empty doc string still yields one (empty) line.
pub fn doc_lines(anns: &[Annotation]) -> Vec<String> {
    let Some(text) = anns.iter().filter(|a| a.is_doc()).find_map(|a| {
        match a.positional_arg() {
            Some(Literal::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }) else {
        return Vec::new();
    };
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.into_iter().map(str::to_string).collect()
}

/// Make `s` a valid identifier: every character outside `[A-Za-z0-9]`
/// becomes `_`, and a leading digit (or empty input) gets a `_` prefix.
pub fn to_identifier(s: &str) -> String {
    let mut id: String = s
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if !id.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_') {
        id.insert(0, '_');
    }
    id
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Text after the last `/`, or the whole path when there is none.
pub fn last_segment(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, last)| last)
}

/// Controller class name for a resource path, e.g. `/users` → `UsersController`.
pub fn controller_class_name(path: &str) -> String {
    format!("{}Controller", to_identifier(&capitalize(last_segment(path))))
}

/// Handler method name for an endpoint path, e.g. `/{id}` → `__id_`.
pub fn method_name(path: &str) -> String {
    to_identifier(&path.replace('/', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wild(bound: Option<TypeRef>, plus: bool) -> TypeRef {
        TypeRef::Wild {
            bound: bound.map(Box::new),
            plus,
        }
    }

    #[test]
    fn test_render_nested_generics() {
        let ty = TypeRef::generic(
            "java.util.Map",
            vec![
                TypeRef::simple("String"),
                TypeRef::generic("List", vec![wild(Some(TypeRef::simple("Number")), true)]),
            ],
        );
        assert_eq!(
            ty.to_string(),
            "java.util.Map<String,List<? extends Number>>"
        );
    }

    #[test]
    fn test_render_wildcards_and_arrays() {
        assert_eq!(wild(None, true).to_string(), "?");
        assert_eq!(wild(None, false).to_string(), "?");
        assert_eq!(
            wild(Some(TypeRef::simple("Integer")), false).to_string(),
            "? super Integer"
        );
        assert_eq!(
            TypeRef::array(TypeRef::array(TypeRef::simple("byte"))).to_string(),
            "byte[][]"
        );
        assert_eq!(
            TypeRef::array(TypeRef::generic("List", vec![TypeRef::simple("A")])).to_string(),
            "List<A>[]"
        );
    }

    #[test]
    fn test_render_literals() {
        assert_eq!(Literal::Int(-42).to_string(), "-42");
        assert_eq!(
            Literal::String("say \"hi\"".to_string()).to_string(),
            "\"say \"hi\"\""
        );
    }

    #[test]
    fn test_render_annotation_shapes() {
        assert_eq!(render_annotation(&Annotation::marker("Deprecated")), "@Deprecated");
        assert_eq!(
            render_annotation(&Annotation::positional(
                "Tag",
                Literal::String("users".to_string())
            )),
            "@Tag(\"users\")"
        );
        assert_eq!(
            render_annotation(&Annotation::positional("Version", Literal::Int(2))),
            "@Version(\"2\")"
        );

        let mut named = Annotation::marker("Cache");
        named.args.insert("ttl".to_string(), Literal::Int(60));
        named
            .args
            .insert("region".to_string(), Literal::String("eu".to_string()));
        assert_eq!(render_annotation(&named), "@Cache(region=\"eu\", ttl=60)");

        named
            .args
            .insert(String::new(), Literal::String("main".to_string()));
        assert_eq!(
            render_annotation(&named),
            "@Cache(\"main\", region=\"eu\", ttl=60)"
        );
    }

    #[test]
    fn test_doc_never_rendered_as_annotation() {
        let anns = vec![
            Annotation::doc("Hello"),
            Annotation::marker("RestController"),
        ];
        assert_eq!(render_annotations(&anns), vec!["@RestController".to_string()]);
    }

    #[test]
    fn test_doc_lines() {
        assert_eq!(
            doc_lines(&[Annotation::doc("first\nsecond\n")]),
            vec!["first".to_string(), "second".to_string()]
        );
        assert_eq!(doc_lines(&[Annotation::doc("")]), vec![String::new()]);
        assert!(doc_lines(&[Annotation::marker("Doc")]).is_empty());
        assert!(doc_lines(&[Annotation::positional("Doc", Literal::Int(1))]).is_empty());
        assert_eq!(
            doc_lines(&[Annotation::marker("Doc"), Annotation::doc("later")]),
            vec!["later".to_string()]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(to_identifier("users"), "users");
        assert_eq!(to_identifier("user-profiles"), "user_profiles");
        assert_eq!(to_identifier("2fa"), "_2fa");
        assert_eq!(to_identifier(""), "_");
        assert_eq!(to_identifier("café"), "caf_");
    }

    #[test]
    fn test_class_and_method_names() {
        assert_eq!(controller_class_name("users"), "UsersController");
        assert_eq!(controller_class_name("/api/orders"), "OrdersController");
        assert_eq!(controller_class_name("/{id}"), "_id_Controller");
        assert_eq!(controller_class_name("/v1/2fa"), "_2faController");
        assert_eq!(method_name("/{id}"), "__id_");
        assert_eq!(method_name("/search/by-name"), "_search_by_name");
        assert_eq!(method_name(""), "_");
    }
}
