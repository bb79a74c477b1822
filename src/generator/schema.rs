use anyhow::Context;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

use crate::catalog::ProviderCatalog;
use crate::typemap;

/// Structured schema document emitted as `schema.json`
///
/// Field order matters: serde serializes in declaration order and the inner
/// maps preserve insertion order, so the same catalog always renders to
/// byte-identical output.
#[derive(Debug, Serialize)]
pub struct SchemaDocument {
    /// Provider metadata keyed by provider name
    pub provider: Map<String, Value>,
    /// One object schema per resource, keyed by wire type in catalog order
    pub resource: Map<String, Value>,
    /// Reserved; the generator defines no data sources
    pub data_source: Map<String, Value>,
}

/// Build the schema document for one provider catalog
///
/// Every attribute type goes through the type mapping table; `required` is
/// emitted exactly as declared (downstream consumers compare it as a set).
///
/// # Errors
///
/// Returns [`typemap::UnknownType`] for an attribute type tag with no table
/// entry. Fatal for the resource being emitted, never silently defaulted.
pub fn build_schema_document(catalog: &ProviderCatalog) -> anyhow::Result<SchemaDocument> {
    let mut provider = Map::new();
    provider.insert(
        catalog.name.clone(),
        json!({
            "version": "~> 1.0",
            "source": format!("local/{}", catalog.name),
            "configuration_aliases": [format!("{}.alias", catalog.name)],
        }),
    );

    let mut resource = Map::new();
    for res in &catalog.resources {
        let mut properties = Map::new();
        for attr in &res.attributes {
            let mapping = typemap::resolve(&attr.type_tag).with_context(|| {
                format!("resource '{}', attribute '{}'", res.name, attr.name)
            })?;
            properties.insert(
                attr.name.clone(),
                json!({
                    "type": mapping.schema_token,
                    "description": attr.description,
                }),
            );
        }
        resource.insert(
            res.wire_type.clone(),
            json!({
                "type": "object",
                "properties": properties,
                "required": res.required,
            }),
        );
    }

    Ok(SchemaDocument {
        provider,
        resource,
        data_source: Map::new(),
    })
}

/// Write `schema.json` into the provider output directory
///
/// # Errors
///
/// Returns an error if a type tag cannot be resolved or the file write fails.
pub fn write_schema_json(dir: &Path, catalog: &ProviderCatalog) -> anyhow::Result<()> {
    let document = build_schema_document(catalog)?;
    let rendered = serde_json::to_string_pretty(&document)?;
    let path = dir.join("schema.json");
    fs::write(&path, rendered).with_context(|| format!("failed to write {path:?}"))?;
    println!("✅ Generated schema → {path:?}");
    Ok(())
}
