//! # tfprovider-gen
//!
//! A declarative Terraform provider generator. Given an in-memory catalog of
//! infrastructure resource descriptions (name, typed attributes,
//! required/optional split), it deterministically emits three consistent
//! artifacts per provider:
//!
//! - `schema.json` — machine-readable schema document for every resource
//! - `main.go` — provider source scaffolding with CRUD entry points
//! - `examples/{main.tf, variables.tf, outputs.tf}` — usage examples
//!
//! ## Architecture
//!
//! ```text
//! CLI → Orchestrator → validate(catalog)
//!                        ├── Schema Emitter   → <out>/<provider>/schema.json
//!                        ├── Scaffold Emitter → <out>/<provider>/main.go
//!                        └── Example Emitter  → <out>/<provider>/examples/*.tf
//! ```
//!
//! - **[`catalog`]** — attribute/resource model, invariant validation, and
//!   the built-in catalogs (`cloudpods`, `aviatrix`, `router_sim`)
//! - **[`typemap`]** — static table mapping abstract type tags to schema
//!   tokens and symbol fragments
//! - **[`generator`]** — the three emitters and the per-provider
//!   orchestrator
//! - **[`cli`]** — `generate` / `check` / `list` subcommands
//!
//! ## Guarantees
//!
//! - **Deterministic**: the same catalog and mapping table always produce
//!   byte-identical artifacts; regeneration is idempotent.
//! - **Fail-fast validation**: a catalog is checked in full before its first
//!   write, so a malformed catalog leaves zero artifacts.
//! - **Partial success**: unknown provider names and per-provider failures
//!   are reported and skipped; the remaining providers still generate.
//! - **Consistent naming**: the snake_case → CamelCase symbol transform is
//!   pure and total, so schema and source always reference a resource the
//!   same way.
//!
//! Writes are not transactional: if a later emitter fails, artifacts already
//! written for that provider remain on disk and regenerating the provider is
//! the prescribed recovery.
//!
//! ## Usage
//!
//! ```bash
//! tfprovider-gen generate --output terraform --providers cloudpods,aviatrix
//! ```
//!
//! ```rust,ignore
//! use tfprovider_gen::generator::generate_providers;
//!
//! let names = vec!["cloudpods".to_string(), "router_sim".to_string()];
//! let reports = generate_providers(&names, std::path::Path::new("terraform"))?;
//! ```

pub mod catalog;
pub mod cli;
pub mod generator;
pub mod typemap;

pub use catalog::{
    builtin_catalog, validate_catalog, AttributeSpec, ProviderCatalog, ResourceDefinition,
    ValidationError, BUILTIN_PROVIDERS,
};
pub use generator::{generate_provider, generate_providers, GenerationReport, ProviderOutcome};
pub use typemap::{TypeMapping, UnknownType};
