use crate::ast::{Endpoint, Trait, TraitMember, TraitUse};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Failure to resolve a trait reference. Fatal for the whole generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A trait-use names a trait that was never declared
    UnknownTrait {
        /// The unresolved trait name
        name: String,
    },
    /// Two traits in one compilation unit share a name
    DuplicateTrait {
        /// The repeated trait name
        name: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownTrait { name } => write!(f, "No such trait: '{name}'"),
            ResolveError::DuplicateTrait { name } => {
                write!(f, "Trait '{name}' is declared more than once")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Read-only lookup of traits by name for one compilation unit.
///
/// Built per run and passed by reference, so repeated or concurrent runs in
/// one process never share trait state.
#[derive(Debug, Default)]
pub struct TraitTable<'a> {
    traits: HashMap<&'a str, &'a Trait>,
}

impl<'a> TraitTable<'a> {
    /// Index `traits` by name, rejecting duplicate names.
    pub fn new(traits: &'a [Trait]) -> Result<Self, ResolveError> {
        let mut table = HashMap::with_capacity(traits.len());
        for t in traits {
            if table.insert(t.name.as_str(), t).is_some() {
                return Err(ResolveError::DuplicateTrait {
                    name: t.name.clone(),
                });
            }
        }
        Ok(Self { traits: table })
    }

    pub fn get(&self, name: &str) -> Option<&'a Trait> {
        self.traits.get(name).copied()
    }

    /// Expand a trait-use into the trait's member endpoints, in member order.
    pub fn resolve(&self, use_site: &TraitUse) -> Result<Vec<Cow<'a, Endpoint>>, ResolveError> {
        let tr = self
            .get(&use_site.name)
            .ok_or_else(|| ResolveError::UnknownTrait {
                name: use_site.name.clone(),
            })?;
        tracing::debug!(
            name = %tr.name,
            members = tr.members.len(),
            "Expanding trait use"
        );
        Ok(tr.members.iter().map(apply_override).collect())
    }
}

/// Endpoint produced by a trait member.
///
/// An `override` member yields a copy of its endpoint stamped with
/// `is_override = true`; nothing else is taken from the use site. Other
/// members are passed through untouched.
pub fn apply_override(member: &TraitMember) -> Cow<'_, Endpoint> {
    if member.is_override {
        Cow::Owned(Endpoint {
            is_override: true,
            ..member.endpoint.clone()
        })
    } else {
        Cow::Borrowed(&member.endpoint)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::ast::{HttpVerb, Modifier};

    fn member(verb: HttpVerb, path: &str, is_override: bool) -> TraitMember {
        TraitMember {
            endpoint: Endpoint::new(verb, path),
            is_override,
        }
    }

    fn crud() -> Trait {
        Trait {
            name: "Crud".to_string(),
            generics: vec!["T".to_string()],
            members: vec![
                member(HttpVerb::Get, "/", false),
                member(HttpVerb::Post, "/", true),
                member(HttpVerb::Delete, "/{id}", false),
            ],
            doc: None,
        }
    }

    #[test]
    fn test_resolve_preserves_member_order() {
        let traits = vec![crud()];
        let table = TraitTable::new(&traits).unwrap();
        let eps = table
            .resolve(&TraitUse {
                name: "Crud".to_string(),
            })
            .unwrap();
        let verbs: Vec<_> = eps.iter().map(|e| e.verb).collect();
        assert_eq!(verbs, vec![HttpVerb::Get, HttpVerb::Post, HttpVerb::Delete]);
    }

    #[test]
    fn test_override_only_stamps_flag() {
        let mut tr = crud();
        tr.members[1].endpoint.modifiers.push(Modifier::Status(201));
        let traits = vec![tr];
        let table = TraitTable::new(&traits).unwrap();
        let eps = table
            .resolve(&TraitUse {
                name: "Crud".to_string(),
            })
            .unwrap();

        assert!(matches!(eps[0], Cow::Borrowed(_)));
        assert!(!eps[0].is_override);

        let stamped = &eps[1];
        assert!(matches!(stamped, Cow::Owned(_)));
        assert!(stamped.is_override);
        let original = &traits[0].members[1].endpoint;
        assert!(!original.is_override);
        assert_eq!(
            Endpoint {
                is_override: false,
                ..stamped.clone().into_owned()
            },
            *original
        );
    }

    #[test]
    fn test_unknown_trait_fails() {
        let traits = vec![crud()];
        let table = TraitTable::new(&traits).unwrap();
        let err = table
            .resolve(&TraitUse {
                name: "Audit".to_string(),
            })
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownTrait {
                name: "Audit".to_string()
            }
        );
        assert_eq!(err.to_string(), "No such trait: 'Audit'");
    }

    #[test]
    fn test_duplicate_trait_names_rejected() {
        let traits = vec![crud(), crud()];
        let err = TraitTable::new(&traits).unwrap_err();
        assert_eq!(
            err,
            ResolveError::DuplicateTrait {
                name: "Crud".to_string()
            }
        );
    }

    #[test]
    fn test_empty_trait_expands_to_nothing() {
        let traits = vec![Trait {
            name: "Empty".to_string(),
            generics: Vec::new(),
            members: Vec::new(),
            doc: Some("nothing here".to_string()),
        }];
        let table = TraitTable::new(&traits).unwrap();
        assert!(table.get("Empty").is_some());
        assert!(table
            .resolve(&TraitUse {
                name: "Empty".to_string()
            })
            .unwrap()
            .is_empty());
    }
}
