use anyhow::Context;
use askama::Template;
use std::fs;
use std::path::Path;

use crate::catalog::{ProviderCatalog, ResourceDefinition};
use crate::typemap::{self, UnknownType};

/// Per-attribute view for the provider source template
#[derive(Debug, Clone)]
pub struct AttributeGoView {
    pub name: String,
    /// Fragment after `schema.Type` (e.g. `String`, `Int`, `List`)
    pub go_type: String,
    /// Membership test against the resource's `required` set
    pub required: bool,
    /// Members of `optional` carry an explicit `Optional: true` marker
    pub optional: bool,
    pub description: String,
}

/// Per-resource view for the provider source template
#[derive(Debug, Clone)]
pub struct ResourceGoView {
    /// CamelCase symbol derived from the resource name (`NetRule`)
    pub symbol: String,
    pub wire_type: String,
    pub attributes: Vec<AttributeGoView>,
}

/// Template data for the generated provider source file
///
/// Renders the provider bootstrap (plugin serve, provider schema, resource
/// map, client configuration) plus one schema block and four CRUD scaffold
/// entry points per resource. The entry points establish structural shape
/// only; they perform no remote calls.
#[derive(Template)]
#[template(path = "provider.go.txt", escape = "none")]
pub struct ProviderGoTemplateData {
    pub resources: Vec<ResourceGoView>,
}

pub(crate) fn resource_view(resource: &ResourceDefinition) -> Result<ResourceGoView, UnknownType> {
    let attributes = resource
        .attributes
        .iter()
        .map(|attr| {
            let mapping = typemap::resolve(&attr.type_tag)?;
            Ok(AttributeGoView {
                name: attr.name.clone(),
                go_type: mapping.symbol_fragment.to_string(),
                required: resource.is_required(&attr.name),
                optional: resource.is_optional(&attr.name),
                description: attr.description.clone(),
            })
        })
        .collect::<Result<Vec<_>, UnknownType>>()?;
    Ok(ResourceGoView {
        symbol: resource.symbol_name(),
        wire_type: resource.wire_type.clone(),
        attributes,
    })
}

/// Write the provider source scaffold (`main.go`) into the output directory
///
/// # Errors
///
/// Returns an error if a type tag cannot be resolved, template rendering
/// fails, or the file write fails.
pub fn write_provider_go(dir: &Path, catalog: &ProviderCatalog) -> anyhow::Result<()> {
    let resources = catalog
        .resources
        .iter()
        .map(resource_view)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("provider '{}'", catalog.name))?;
    let rendered = ProviderGoTemplateData { resources }.render()?;
    let path = dir.join("main.go");
    fs::write(&path, rendered).with_context(|| format!("failed to write {path:?}"))?;
    println!("✅ Generated provider scaffold → {path:?}");
    Ok(())
}
