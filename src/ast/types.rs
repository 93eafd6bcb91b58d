use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Root of one parsed RDL document.
///
/// Owns every trait and resource for the lifetime of a generation run. The
/// generator only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Target package, e.g. `com.example.api`
    #[serde(default)]
    pub package: Option<String>,
    /// Import strings emitted verbatim, in declaration order
    #[serde(default)]
    pub imports: Vec<String>,
    /// Trait declarations; names are unique within a unit
    #[serde(default)]
    pub traits: Vec<Trait>,
    /// Top-level resources, in declaration order
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// A path segment that groups endpoints, nested resources and trait uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Path segment appended to every ancestor segment, e.g. `/users`
    pub path: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Resource-scoped parameters, inherited by nested content
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub content: Vec<RcContent>,
}

/// One entry of a resource body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RcContent {
    Endpoint(Endpoint),
    Resource(Resource),
    Use(TraitUse),
}

/// A named, reusable bundle of endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub name: String,
    /// Generic parameter names. Preserved from the source, unused by codegen.
    #[serde(default)]
    pub generics: Vec<String>,
    #[serde(default)]
    pub members: Vec<TraitMember>,
    #[serde(default)]
    pub doc: Option<String>,
}

/// An endpoint declared inside a trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitMember {
    pub endpoint: Endpoint,
    /// Whether a use site may supersede this member
    #[serde(default, rename = "override")]
    pub is_override: bool,
}

/// Reference to a trait by name, expanded at emission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitUse {
    pub name: String,
}

/// HTTP verbs an endpoint can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Head => "HEAD",
            HttpVerb::Options => "OPTIONS",
        };
        write!(f, "{s}")
    }
}

/// One verb/path handler declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub verb: HttpVerb,
    /// Alias paths. Only the first one is rendered; the rest are kept for
    /// future use and deliberately ignored by this generator.
    pub paths: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub returns: Option<TypeRef>,
    #[serde(default, rename = "override")]
    pub is_override: bool,
}

impl Endpoint {
    /// Create an endpoint with a single path and nothing else declared.
    pub fn new(verb: HttpVerb, path: impl Into<String>) -> Self {
        Self {
            verb,
            paths: vec![path.into()],
            annotations: Vec::new(),
            params: Vec::new(),
            modifiers: Vec::new(),
            returns: None,
            is_override: false,
        }
    }

    /// The first declared alias path, or `""` when none was declared.
    pub fn primary_path(&self) -> &str {
        self.paths.first().map(String::as_str).unwrap_or_default()
    }

    /// Request body type from the first `Expects` modifier, if any.
    pub fn expected_body(&self) -> Option<&TypeRef> {
        self.modifiers.iter().find_map(|m| match m {
            Modifier::Expects(ty) => Some(ty),
            _ => None,
        })
    }
}

/// Endpoint-level behavioral annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Request body type
    Expects(TypeRef),
    /// Response status code, taken as declared (no range check)
    Status(i32),
    /// Required role
    Secure(String),
    /// Transactional handler
    Tx,
}

/// A declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            optional: true,
            ..Self::new(name, ty)
        }
    }
}

/// Reference to a target-language type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// Simple or fully-qualified name, taken verbatim
    Simple(String),
    /// Raw type applied to ordered type arguments
    Generic { raw: String, args: Vec<TypeRef> },
    Array(Box<TypeRef>),
    /// Wildcard; `plus` selects an upper bound over a lower bound
    Wild {
        #[serde(default)]
        bound: Option<Box<TypeRef>>,
        #[serde(default)]
        plus: bool,
    },
}

impl TypeRef {
    pub fn simple(name: impl Into<String>) -> Self {
        TypeRef::Simple(name.into())
    }

    pub fn generic(raw: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Generic {
            raw: raw.into(),
            args,
        }
    }

    pub fn array(of: TypeRef) -> Self {
        TypeRef::Array(Box::new(of))
    }
}

/// Annotation argument value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    String(String),
}

/// Name of the annotation that carries documentation text.
pub const DOC_ANNOTATION: &str = "Doc";

/// An annotation with named or positional arguments.
///
/// The positional argument is stored under the empty key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub args: BTreeMap<String, Literal>,
}

impl Annotation {
    /// Annotation without arguments.
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: BTreeMap::new(),
        }
    }

    /// Annotation with a single positional argument.
    pub fn positional(name: impl Into<String>, value: Literal) -> Self {
        let mut args = BTreeMap::new();
        args.insert(String::new(), value);
        Self {
            name: name.into(),
            args,
        }
    }

    /// `Doc` annotation with the given text.
    pub fn doc(text: impl Into<String>) -> Self {
        Self::positional(DOC_ANNOTATION, Literal::String(text.into()))
    }

    pub fn is_doc(&self) -> bool {
        self.name == DOC_ANNOTATION
    }

    pub fn positional_arg(&self) -> Option<&Literal> {
        self.args.get("")
    }
}
