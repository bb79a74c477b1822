//! # Catalog Module
//!
//! The resource model behind every generated artifact: typed attribute and
//! resource descriptions, the provider catalogs that group them, and the
//! invariant checks that run before any emitter touches the filesystem.
//!
//! A [`ProviderCatalog`] is built fresh in memory for each generation run and
//! discarded once the artifacts are written. The orchestrator owns it for the
//! duration of the run; emitters only ever borrow it.
//!
//! Validation is fail-fast: [`validate_catalog`] checks every invariant
//! (identifier validity, attribute uniqueness, required/optional disjointness,
//! required/optional referring to declared attributes, wire-type uniqueness)
//! and a malformed catalog produces zero output files.

mod builtin;
mod types;
mod validate;


pub use builtin::{
    aviatrix_catalog, builtin_catalog, cloudpods_catalog, router_sim_catalog, BUILTIN_PROVIDERS,
};
pub use types::{is_identifier, to_symbol, AttributeSpec, ProviderCatalog, ResourceDefinition};
pub use validate::{claim_wire_types, validate_catalog, ValidationError};
