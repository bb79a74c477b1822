//! # Generator Module
//!
//! Turns a validated [`crate::catalog::ProviderCatalog`] into three
//! consistent artifacts per provider:
//!
//! - **Schema document** (`schema.json`) — provider metadata plus one object
//!   schema per resource, rendered from typed serde structures.
//! - **Source scaffold** (`main.go`) — provider bootstrap and one CRUD
//!   scaffold block per resource, rendered from Askama templates.
//! - **Examples** (`examples/main.tf`, `variables.tf`, `outputs.tf`) —
//!   placeholder configuration instantiating every resource.
//!
//! ```text
//! ProviderCatalog → validate → {schema, scaffold, examples} → filesystem
//! ```
//!
//! The three emitters are independent and order-insensitive; they share only
//! read-only access to the catalog and the type mapping table, so the same
//! catalog always produces byte-identical output. The orchestrator in
//! [`project`] drives the per-provider pipeline and collects a
//! [`GenerationReport`] per requested provider.
//!
//! Templates live in `templates/` and are compiled in by Askama:
//!
//! - `provider.go.txt` — provider bootstrap + per-resource CRUD scaffolds
//! - `main.tf.txt` — example configuration
//! - `variables.tf.txt` / `outputs.tf.txt` — example companion files

mod examples;
mod project;
mod scaffold;
mod schema;


pub use examples::{
    write_examples, MainTfTemplateData, OutputsTfTemplate, ResourceExampleView,
    VariablesTfTemplate, DEFAULT_OPTIONAL_EXAMPLE_CAP,
};
pub use project::{generate_provider, generate_providers, GenerationReport, ProviderOutcome};
pub use scaffold::{write_provider_go, AttributeGoView, ProviderGoTemplateData, ResourceGoView};
pub use schema::{build_schema_document, write_schema_json, SchemaDocument};
