/// One typed attribute of a resource definition
///
/// `type_tag` is an abstract tag (`string`, `bool`, `number`, `list(object)`, ...)
/// resolved through the type mapping table at emit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Attribute name (must be a valid identifier, unique within its resource)
    pub name: String,
    /// Abstract type tag, resolved via [`crate::typemap::resolve`]
    pub type_tag: String,
    /// Human-readable description, copied into schema and scaffold output
    pub description: String,
}

impl AttributeSpec {
    pub fn new(name: &str, type_tag: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            type_tag: type_tag.to_string(),
            description: description.to_string(),
        }
    }
}

/// Declarative description of one infrastructure resource kind
///
/// `required` and `optional` are kept in declaration order because the schema
/// document emits `required` as written; consumers compare it as a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDefinition {
    /// Resource identifier in snake_case (e.g. `cloudpods_instance`)
    pub name: String,
    /// Schema/document key, globally unique within one generation run
    pub wire_type: String,
    pub description: String,
    pub attributes: Vec<AttributeSpec>,
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

impl ResourceDefinition {
    pub fn is_required(&self, attribute: &str) -> bool {
        self.required.iter().any(|a| a == attribute)
    }

    pub fn is_optional(&self, attribute: &str) -> bool {
        self.optional.iter().any(|a| a == attribute)
    }

    /// Symbol name used in generated source (`cloudpods_instance → CloudpodsInstance`)
    pub fn symbol_name(&self) -> String {
        to_symbol(&self.name)
    }
}

/// Named, ordered collection of resource definitions generated as one unit
///
/// Built fresh in memory per generation run and discarded afterwards; the
/// orchestrator owns it, emitters borrow it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCatalog {
    pub name: String,
    pub resources: Vec<ResourceDefinition>,
}

/// Convert a snake_case identifier to a CamelCase symbol
///
/// Splits on `_`, capitalizes each segment, concatenates. Pure and total over
/// valid identifiers; the same name always yields the same symbol.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(to_symbol("cloudpods_instance"), "CloudpodsInstance");
/// ```
pub fn to_symbol(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Check that a string is a valid identifier
///
/// Nonempty ASCII, first char alphabetic or `_`, rest alphanumeric or `_`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
