use anyhow::Context;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{builtin_catalog, claim_wire_types, validate_catalog, ProviderCatalog, ValidationError};

use super::examples::{write_examples, DEFAULT_OPTIONAL_EXAMPLE_CAP};
use super::scaffold::write_provider_go;
use super::schema::write_schema_json;

/// Terminal state of one requested provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    /// All three artifacts written
    Complete,
    /// Name did not resolve to a built-in catalog; skipped
    UnknownProvider,
    /// Catalog rejected before any write; zero artifacts on disk
    ValidationFailed(ValidationError),
    /// Emit-stage failure (type resolution or filesystem); partial artifacts
    /// may remain on disk, regeneration is the recovery path
    Failed(String),
}

/// Per-provider result of one generation run, in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub provider: String,
    pub outcome: ProviderOutcome,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.outcome == ProviderOutcome::Complete
    }
}

/// Validate one catalog and write its artifacts under `output_root`
///
/// Library entry point for a single, caller-supplied catalog. Validation
/// runs fully before the provider directory is created, so a rejected
/// catalog leaves nothing behind. Returns the provider directory.
///
/// # Errors
///
/// Returns an error on invariant violations, unknown type tags, or
/// filesystem failures. Writes are not transactional: an error mid-emit can
/// leave earlier artifacts for this provider on disk.
pub fn generate_provider(catalog: &ProviderCatalog, output_root: &Path) -> anyhow::Result<PathBuf> {
    validate_catalog(catalog)?;
    emit_provider(catalog, output_root)
}

fn emit_provider(catalog: &ProviderCatalog, output_root: &Path) -> anyhow::Result<PathBuf> {
    let provider_dir = output_root.join(&catalog.name);
    let examples_dir = provider_dir.join("examples");
    fs::create_dir_all(&examples_dir)
        .with_context(|| format!("failed to create output directory {examples_dir:?}"))?;

    // The three emitters are independent; order is not significant.
    write_schema_json(&provider_dir, catalog)?;
    write_provider_go(&provider_dir, catalog)?;
    write_examples(&examples_dir, catalog, DEFAULT_OPTIONAL_EXAMPLE_CAP)?;
    Ok(provider_dir)
}

/// Generate artifacts for each requested provider name
///
/// Resolves each name against the built-in catalogs, validates, and writes
/// the schema document, source scaffold, and examples into an isolated
/// per-provider directory under `output_root` (created once up front).
///
/// Unknown names and per-provider failures do not abort the run; the
/// remaining providers are still generated and the report carries one entry
/// per requested name in request order.
///
/// # Errors
///
/// Returns an error only if `output_root` itself cannot be created.
pub fn generate_providers(
    names: &[String],
    output_root: &Path,
) -> anyhow::Result<Vec<GenerationReport>> {
    fs::create_dir_all(output_root)
        .with_context(|| format!("failed to create output directory {output_root:?}"))?;

    let mut seen_wire_types: HashSet<String> = HashSet::new();
    let mut reports = Vec::with_capacity(names.len());
    for name in names {
        let Some(catalog) = builtin_catalog(name) else {
            println!("⚠️  Unknown provider: {name} (skipping)");
            reports.push(GenerationReport {
                provider: name.clone(),
                outcome: ProviderOutcome::UnknownProvider,
            });
            continue;
        };

        println!("Generating {name} provider...");
        let validated = validate_catalog(&catalog)
            .and_then(|()| claim_wire_types(&catalog, &mut seen_wire_types));
        if let Err(err) = validated {
            println!("❌ Validation failed for {name}: {err}");
            reports.push(GenerationReport {
                provider: name.clone(),
                outcome: ProviderOutcome::ValidationFailed(err),
            });
            continue;
        }

        match emit_provider(&catalog, output_root) {
            Ok(dir) => {
                println!("✅ {name} provider generated → {dir:?}");
                reports.push(GenerationReport {
                    provider: name.clone(),
                    outcome: ProviderOutcome::Complete,
                });
            }
            Err(err) => {
                println!("❌ Generation failed for {name}: {err:#}");
                reports.push(GenerationReport {
                    provider: name.clone(),
                    outcome: ProviderOutcome::Failed(format!("{err:#}")),
                });
            }
        }
    }
    Ok(reports)
}
