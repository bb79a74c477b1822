use anyhow::Context;
use askama::Template;
use std::fs;
use std::path::Path;

use crate::catalog::{ProviderCatalog, ResourceDefinition};

/// How many optional attributes an example resource block shows
///
/// The cap is a bound on the declared-order prefix, not a selection: the
/// first N optional attributes appear, keeping output deterministic.
pub const DEFAULT_OPTIONAL_EXAMPLE_CAP: usize = 3;

/// Per-resource view for the example configuration template
#[derive(Debug, Clone)]
pub struct ResourceExampleView {
    pub wire_type: String,
    /// Attribute names assigned placeholder values, in emission order
    pub attributes: Vec<String>,
}

/// Template data for `examples/main.tf`
#[derive(Template)]
#[template(path = "main.tf.txt", escape = "none")]
pub struct MainTfTemplateData {
    pub provider: String,
    pub resources: Vec<ResourceExampleView>,
}

/// Template for `examples/variables.tf` (provider-level configuration)
#[derive(Template)]
#[template(path = "variables.tf.txt", escape = "none")]
pub struct VariablesTfTemplate;

/// Template for `examples/outputs.tf` (provider metadata output)
#[derive(Template)]
#[template(path = "outputs.tf.txt", escape = "none")]
pub struct OutputsTfTemplate;

/// Attributes an example block assigns: every required attribute, then the
/// first `optional_cap` optional attributes in declared order.
pub(crate) fn example_attributes(
    resource: &ResourceDefinition,
    optional_cap: usize,
) -> Vec<String> {
    resource
        .required
        .iter()
        .chain(resource.optional.iter().take(optional_cap))
        .cloned()
        .collect()
}

/// Write the three example companion files into the examples directory
///
/// Placeholder values are synthesized deterministically as
/// `"example-<attribute-name>"`.
///
/// # Errors
///
/// Returns an error if template rendering or a file write fails.
pub fn write_examples(
    dir: &Path,
    catalog: &ProviderCatalog,
    optional_cap: usize,
) -> anyhow::Result<()> {
    let resources = catalog
        .resources
        .iter()
        .map(|r| ResourceExampleView {
            wire_type: r.wire_type.clone(),
            attributes: example_attributes(r, optional_cap),
        })
        .collect();
    let main_tf = MainTfTemplateData {
        provider: catalog.name.clone(),
        resources,
    }
    .render()?;
    let variables_tf = VariablesTfTemplate.render()?;
    let outputs_tf = OutputsTfTemplate.render()?;

    for (file, rendered) in [
        ("main.tf", main_tf),
        ("variables.tf", variables_tf),
        ("outputs.tf", outputs_tf),
    ] {
        let path = dir.join(file);
        fs::write(&path, rendered).with_context(|| format!("failed to write {path:?}"))?;
        println!("✅ Generated example → {path:?}");
    }
    Ok(())
}
