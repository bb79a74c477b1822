//! Static type mapping table
//!
//! Translates abstract attribute type tags into the token written to the
//! schema document and the symbol fragment spliced into generated source
//! (`schema.Type<fragment>`). Defined once at first use, never mutated,
//! consulted read-only by all emitters.
//!
//! Lookup is exact-match on the tag. Unknown tags are a hard error surfaced
//! to the caller; silently defaulting would corrupt both the schema and the
//! source scaffold.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Resolved mapping for one attribute type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// Token written into `schema.json` property types
    pub schema_token: &'static str,
    /// Symbol-safe fragment for generated source (`schema.Type<fragment>`)
    pub symbol_fragment: &'static str,
}

/// Error raised for a type tag with no entry in the mapping table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownType(pub String);

impl fmt::Display for UnknownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown attribute type tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownType {}

// The parameterised tags collapse to TypeList/TypeMap in generated source;
// a naive per-word capitalization of "list(string)" is not a valid SDK type.
static TYPE_MAPPINGS: Lazy<HashMap<&'static str, TypeMapping>> = Lazy::new(|| {
    HashMap::from([
        (
            "string",
            TypeMapping {
                schema_token: "string",
                symbol_fragment: "String",
            },
        ),
        (
            "bool",
            TypeMapping {
                schema_token: "bool",
                symbol_fragment: "Bool",
            },
        ),
        (
            "number",
            TypeMapping {
                schema_token: "number",
                symbol_fragment: "Int",
            },
        ),
        (
            "list(string)",
            TypeMapping {
                schema_token: "list(string)",
                symbol_fragment: "List",
            },
        ),
        (
            "list(object)",
            TypeMapping {
                schema_token: "list(object)",
                symbol_fragment: "List",
            },
        ),
        (
            "map(string)",
            TypeMapping {
                schema_token: "map(string)",
                symbol_fragment: "Map",
            },
        ),
    ])
});

/// Resolve a type tag to its schema token and symbol fragment
///
/// # Errors
///
/// Returns [`UnknownType`] when the tag has no table entry. Callers must
/// propagate this; it is fatal for the resource being emitted.
pub fn resolve(tag: &str) -> Result<TypeMapping, UnknownType> {
    TYPE_MAPPINGS
        .get(tag)
        .copied()
        .ok_or_else(|| UnknownType(tag.to_string()))
}
