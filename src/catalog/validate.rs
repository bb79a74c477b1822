use std::collections::HashSet;
use std::fmt;

use super::types::{is_identifier, ProviderCatalog};

/// Catalog invariant violation
///
/// Returned by [`validate_catalog`] before any artifact is written. Each
/// variant names the offending resource so the caller can report which
/// provider failed and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Resource or attribute name is not a valid identifier
    InvalidIdentifier { resource: String, name: String },
    /// Two attributes of the same resource share a name
    DuplicateAttribute { resource: String, attribute: String },
    /// `required` or `optional` references an attribute that is not declared
    UndeclaredAttribute { resource: String, attribute: String },
    /// An attribute appears in both `required` and `optional`
    RequiredOptionalOverlap { resource: String, attribute: String },
    /// Two resources share a wire type within one generation run
    DuplicateWireType { resource: String, wire_type: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidIdentifier { resource, name } => {
                write!(f, "resource '{resource}': '{name}' is not a valid identifier")
            }
            ValidationError::DuplicateAttribute {
                resource,
                attribute,
            } => {
                write!(f, "resource '{resource}': duplicate attribute '{attribute}'")
            }
            ValidationError::UndeclaredAttribute {
                resource,
                attribute,
            } => {
                write!(
                    f,
                    "resource '{resource}': '{attribute}' is listed as required/optional but not declared"
                )
            }
            ValidationError::RequiredOptionalOverlap {
                resource,
                attribute,
            } => {
                write!(
                    f,
                    "resource '{resource}': attribute '{attribute}' is both required and optional"
                )
            }
            ValidationError::DuplicateWireType {
                resource,
                wire_type,
            } => {
                write!(f, "resource '{resource}': duplicate wire type '{wire_type}'")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check every catalog invariant before any emitter runs
///
/// Pure check, no side effects. Fail-fast: the first violation found is
/// returned and nothing is written for a catalog known to be malformed.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in resource order.
pub fn validate_catalog(catalog: &ProviderCatalog) -> Result<(), ValidationError> {
    let mut wire_types = HashSet::new();
    for resource in &catalog.resources {
        if !is_identifier(&resource.name) {
            return Err(ValidationError::InvalidIdentifier {
                resource: resource.name.clone(),
                name: resource.name.clone(),
            });
        }
        if !wire_types.insert(resource.wire_type.as_str()) {
            return Err(ValidationError::DuplicateWireType {
                resource: resource.name.clone(),
                wire_type: resource.wire_type.clone(),
            });
        }

        let mut attr_names = HashSet::new();
        for attr in &resource.attributes {
            if !is_identifier(&attr.name) {
                return Err(ValidationError::InvalidIdentifier {
                    resource: resource.name.clone(),
                    name: attr.name.clone(),
                });
            }
            if !attr_names.insert(attr.name.as_str()) {
                return Err(ValidationError::DuplicateAttribute {
                    resource: resource.name.clone(),
                    attribute: attr.name.clone(),
                });
            }
        }

        for attribute in resource.required.iter().chain(resource.optional.iter()) {
            if !attr_names.contains(attribute.as_str()) {
                return Err(ValidationError::UndeclaredAttribute {
                    resource: resource.name.clone(),
                    attribute: attribute.clone(),
                });
            }
        }
        for attribute in &resource.required {
            if resource.optional.contains(attribute) {
                return Err(ValidationError::RequiredOptionalOverlap {
                    resource: resource.name.clone(),
                    attribute: attribute.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Register a catalog's wire types in a run-scoped uniqueness set
///
/// Wire types become schema/document keys and must be unique across every
/// resource handled in one generation run, not just within one catalog. The
/// orchestrator owns the set; the later provider loses on collision.
///
/// # Errors
///
/// Returns [`ValidationError::DuplicateWireType`] on the first collision.
pub fn claim_wire_types(
    catalog: &ProviderCatalog,
    seen: &mut HashSet<String>,
) -> Result<(), ValidationError> {
    for resource in &catalog.resources {
        if !seen.insert(resource.wire_type.clone()) {
            return Err(ValidationError::DuplicateWireType {
                resource: resource.name.clone(),
                wire_type: resource.wire_type.clone(),
            });
        }
    }
    Ok(())
}
