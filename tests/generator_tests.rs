use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tfprovider_gen::catalog::{AttributeSpec, ProviderCatalog, ResourceDefinition, BUILTIN_PROVIDERS};
use tfprovider_gen::generator::{generate_provider, generate_providers, ProviderOutcome};
use walkdir::WalkDir;

fn requested(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn net_rule_catalog() -> ProviderCatalog {
    ProviderCatalog {
        name: "netsec".to_string(),
        resources: vec![ResourceDefinition {
            name: "net_rule".to_string(),
            wire_type: "net_rule".to_string(),
            description: "Network rule resource".to_string(),
            attributes: vec![
                AttributeSpec::new("cidr", "string", "Rule CIDR"),
                AttributeSpec::new("action", "string", "Rule action"),
                AttributeSpec::new("priority", "number", "Rule priority"),
            ],
            required: vec!["cidr".to_string(), "action".to_string()],
            optional: vec!["priority".to_string()],
        }],
    }
}

#[test]
fn test_full_run_produces_expected_layout() {
    let out = tempfile::tempdir().unwrap();
    let reports = generate_providers(&requested(&BUILTIN_PROVIDERS), out.path()).unwrap();
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.outcome == ProviderOutcome::Complete));

    for provider in BUILTIN_PROVIDERS {
        let dir = out.path().join(provider);
        assert!(dir.join("schema.json").is_file());
        assert!(dir.join("main.go").is_file());
        for example in ["main.tf", "variables.tf", "outputs.tf"] {
            assert!(dir.join("examples").join(example).is_file(), "{provider}/{example}");
        }
    }
}

#[test]
fn test_schema_json_required_sets() {
    let out = tempfile::tempdir().unwrap();
    generate_providers(&requested(&["cloudpods"]), out.path()).unwrap();

    let raw = fs::read_to_string(out.path().join("cloudpods/schema.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let expected: HashMap<&str, HashSet<&str>> = HashMap::from([
        (
            "yunionio_cloudpods_instance",
            HashSet::from(["name", "image_id", "flavor_id"]),
        ),
        ("yunionio_cloudpods_network", HashSet::from(["name", "cidr"])),
        (
            "yunionio_cloudpods_loadbalancer",
            HashSet::from(["name", "network_id"]),
        ),
    ]);
    for (wire_type, required) in expected {
        let actual: HashSet<&str> = doc["resource"][wire_type]["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(actual, required, "{wire_type}");
        assert_eq!(doc["resource"][wire_type]["type"], "object");
    }
}

#[test]
fn test_scaffold_references_resources_consistently() {
    let out = tempfile::tempdir().unwrap();
    generate_providers(&requested(&["aviatrix"]), out.path()).unwrap();

    let main_go = fs::read_to_string(out.path().join("aviatrix/main.go")).unwrap();
    for symbol in ["AviatrixGateway", "AviatrixTransitGateway", "AviatrixSpokeGateway"] {
        assert!(main_go.contains(&format!("func resource{symbol}() *schema.Resource {{")));
        for op in ["Create", "Read", "Update", "Delete"] {
            assert!(main_go.contains(&format!("func resource{symbol}{op}(")), "{symbol}{op}");
        }
    }
    // cloud_type is a number attribute
    assert!(main_go.contains("Type:        schema.TypeInt,"));
    assert!(main_go.contains("\"aviatrix_gateway\": resourceAviatrixGateway(),"));
}

#[test]
fn test_example_caps_optional_attributes_at_three() {
    let out = tempfile::tempdir().unwrap();
    generate_providers(&requested(&["cloudpods"]), out.path()).unwrap();

    let main_tf = fs::read_to_string(out.path().join("cloudpods/examples/main.tf")).unwrap();
    // instance has 4 optional attributes; only the first 3 in declared order appear
    let expected_block = "resource \"yunionio_cloudpods_instance\" \"example\" {\n  \
        name = \"example-name\"\n  \
        image_id = \"example-image_id\"\n  \
        flavor_id = \"example-flavor_id\"\n  \
        network_id = \"example-network_id\"\n  \
        security_group_ids = \"example-security_group_ids\"\n  \
        keypair = \"example-keypair\"\n}";
    assert!(main_tf.contains(expected_block), "instance block mismatch:\n{main_tf}");
}

#[test]
fn test_regeneration_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    generate_providers(&requested(&BUILTIN_PROVIDERS), first.path()).unwrap();
    generate_providers(&requested(&BUILTIN_PROVIDERS), second.path()).unwrap();

    let collect = |root: &Path| -> Vec<(String, Vec<u8>)> {
        let mut files: Vec<(String, Vec<u8>)> = WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e
                    .path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                (rel, fs::read(e.path()).unwrap())
            })
            .collect();
        files.sort();
        files
    };
    assert_eq!(collect(first.path()), collect(second.path()));
}

#[test]
fn test_unknown_provider_is_skipped_not_fatal() {
    let out = tempfile::tempdir().unwrap();
    let reports = generate_providers(&requested(&["cloudpods", "bogus"]), out.path()).unwrap();

    assert_eq!(reports[0].provider, "cloudpods");
    assert_eq!(reports[0].outcome, ProviderOutcome::Complete);
    assert_eq!(reports[1].provider, "bogus");
    assert_eq!(reports[1].outcome, ProviderOutcome::UnknownProvider);

    assert!(out.path().join("cloudpods/schema.json").is_file());
    assert!(!out.path().join("bogus").exists());
}

#[test]
fn test_net_rule_catalog_end_to_end() {
    let out = tempfile::tempdir().unwrap();
    let dir = generate_provider(&net_rule_catalog(), out.path()).unwrap();

    let raw = fs::read_to_string(dir.join("schema.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let required: HashSet<&str> = doc["resource"]["net_rule"]["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(required, HashSet::from(["cidr", "action"]));

    let main_go = fs::read_to_string(dir.join("main.go")).unwrap();
    assert!(main_go.contains("func resourceNetRule() *schema.Resource {"));

    let main_tf = fs::read_to_string(dir.join("examples/main.tf")).unwrap();
    assert!(main_tf.contains("  cidr = \"example-cidr\""));
    assert!(main_tf.contains("  action = \"example-action\""));
    // priority is within the optional cap of 3
    assert!(main_tf.contains("  priority = \"example-priority\""));
}

#[test]
fn test_malformed_catalog_leaves_zero_artifacts() {
    let out = tempfile::tempdir().unwrap();
    let mut catalog = net_rule_catalog();
    catalog.resources[0].optional.push("cidr".to_string());

    let err = generate_provider(&catalog, out.path()).unwrap_err();
    assert!(err.to_string().contains("both required and optional"));
    assert!(!out.path().join("netsec").exists());
    assert_eq!(
        fs::read_dir(out.path()).unwrap().count(),
        0,
        "no artifacts may exist for a rejected provider"
    );
}
