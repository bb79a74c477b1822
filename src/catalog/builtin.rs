//! Built-in provider catalogs
//!
//! The three fixed catalogs the generator ships with. Each is built fresh in
//! memory on every call; nothing here is persisted or mutated.

use super::types::{AttributeSpec, ProviderCatalog, ResourceDefinition};

/// Names of the built-in provider catalogs, in default generation order
pub const BUILTIN_PROVIDERS: [&str; 3] = ["cloudpods", "aviatrix", "router_sim"];

/// Resolve a provider name to its built-in catalog
///
/// Returns `None` for unknown names; the orchestrator reports and skips those.
pub fn builtin_catalog(name: &str) -> Option<ProviderCatalog> {
    match name {
        "cloudpods" => Some(cloudpods_catalog()),
        "aviatrix" => Some(aviatrix_catalog()),
        "router_sim" => Some(router_sim_catalog()),
        _ => None,
    }
}

fn attr(name: &str, type_tag: &str, description: &str) -> AttributeSpec {
    AttributeSpec::new(name, type_tag, description)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// CloudPods integration catalog: instance, network, load balancer
pub fn cloudpods_catalog() -> ProviderCatalog {
    ProviderCatalog {
        name: "cloudpods".to_string(),
        resources: vec![
            ResourceDefinition {
                name: "cloudpods_instance".to_string(),
                wire_type: "yunionio_cloudpods_instance".to_string(),
                description: "CloudPods instance resource".to_string(),
                attributes: vec![
                    attr("name", "string", "Instance name"),
                    attr("image_id", "string", "Image ID"),
                    attr("flavor_id", "string", "Flavor ID"),
                    attr("network_id", "string", "Network ID"),
                    attr("security_group_ids", "list(string)", "Security group IDs"),
                    attr("keypair", "string", "SSH keypair name"),
                    attr("tags", "map(string)", "Resource tags"),
                ],
                required: names(&["name", "image_id", "flavor_id"]),
                optional: names(&["network_id", "security_group_ids", "keypair", "tags"]),
            },
            ResourceDefinition {
                name: "cloudpods_network".to_string(),
                wire_type: "yunionio_cloudpods_network".to_string(),
                description: "CloudPods network resource".to_string(),
                attributes: vec![
                    attr("name", "string", "Network name"),
                    attr("cidr", "string", "Network CIDR"),
                    attr("vpc_id", "string", "VPC ID"),
                    attr("zone_id", "string", "Zone ID"),
                    attr("tags", "map(string)", "Resource tags"),
                ],
                required: names(&["name", "cidr"]),
                optional: names(&["vpc_id", "zone_id", "tags"]),
            },
            ResourceDefinition {
                name: "cloudpods_loadbalancer".to_string(),
                wire_type: "yunionio_cloudpods_loadbalancer".to_string(),
                description: "CloudPods load balancer resource".to_string(),
                attributes: vec![
                    attr("name", "string", "Load balancer name"),
                    attr("network_id", "string", "Network ID"),
                    attr("listeners", "list(object)", "Load balancer listeners"),
                    attr("backend_groups", "list(object)", "Backend groups"),
                    attr("tags", "map(string)", "Resource tags"),
                ],
                required: names(&["name", "network_id"]),
                optional: names(&["listeners", "backend_groups", "tags"]),
            },
        ],
    }
}

/// Aviatrix integration catalog: gateway, transit gateway, spoke gateway
pub fn aviatrix_catalog() -> ProviderCatalog {
    ProviderCatalog {
        name: "aviatrix".to_string(),
        resources: vec![
            ResourceDefinition {
                name: "aviatrix_gateway".to_string(),
                wire_type: "aviatrix_gateway".to_string(),
                description: "Aviatrix gateway resource".to_string(),
                attributes: vec![
                    attr("gw_name", "string", "Gateway name"),
                    attr("cloud_type", "number", "Cloud type"),
                    attr("account_name", "string", "Account name"),
                    attr("region", "string", "Region"),
                    attr("vpc_id", "string", "VPC ID"),
                    attr("subnet", "string", "Subnet CIDR"),
                    attr("gw_size", "string", "Gateway size"),
                    attr("enable_vpn_access", "bool", "Enable VPN access"),
                    attr("enable_elb", "bool", "Enable ELB"),
                    attr("tags", "map(string)", "Resource tags"),
                ],
                required: names(&[
                    "gw_name",
                    "cloud_type",
                    "account_name",
                    "region",
                    "vpc_id",
                    "subnet",
                    "gw_size",
                ]),
                optional: names(&["enable_vpn_access", "enable_elb", "tags"]),
            },
            ResourceDefinition {
                name: "aviatrix_transit_gateway".to_string(),
                wire_type: "aviatrix_transit_gateway".to_string(),
                description: "Aviatrix transit gateway resource".to_string(),
                attributes: vec![
                    attr("gw_name", "string", "Gateway name"),
                    attr("cloud_type", "number", "Cloud type"),
                    attr("account_name", "string", "Account name"),
                    attr("region", "string", "Region"),
                    attr("vpc_id", "string", "VPC ID"),
                    attr("subnet", "string", "Subnet CIDR"),
                    attr("gw_size", "string", "Gateway size"),
                    attr("enable_hybrid_connection", "bool", "Enable hybrid connection"),
                    attr("enable_firenet", "bool", "Enable FireNet"),
                    attr("tags", "map(string)", "Resource tags"),
                ],
                required: names(&[
                    "gw_name",
                    "cloud_type",
                    "account_name",
                    "region",
                    "vpc_id",
                    "subnet",
                    "gw_size",
                ]),
                optional: names(&["enable_hybrid_connection", "enable_firenet", "tags"]),
            },
            ResourceDefinition {
                name: "aviatrix_spoke_gateway".to_string(),
                wire_type: "aviatrix_spoke_gateway".to_string(),
                description: "Aviatrix spoke gateway resource".to_string(),
                attributes: vec![
                    attr("gw_name", "string", "Gateway name"),
                    attr("cloud_type", "number", "Cloud type"),
                    attr("account_name", "string", "Account name"),
                    attr("region", "string", "Region"),
                    attr("vpc_id", "string", "VPC ID"),
                    attr("subnet", "string", "Subnet CIDR"),
                    attr("gw_size", "string", "Gateway size"),
                    attr("transit_gw", "string", "Transit gateway name"),
                    attr("enable_vpn_access", "bool", "Enable VPN access"),
                    attr("tags", "map(string)", "Resource tags"),
                ],
                required: names(&[
                    "gw_name",
                    "cloud_type",
                    "account_name",
                    "region",
                    "vpc_id",
                    "subnet",
                    "gw_size",
                ]),
                optional: names(&["transit_gw", "enable_vpn_access", "tags"]),
            },
        ],
    }
}

/// Router simulator catalog: interface, protocol, traffic shaping, impairment
pub fn router_sim_catalog() -> ProviderCatalog {
    ProviderCatalog {
        name: "router_sim".to_string(),
        resources: vec![
            ResourceDefinition {
                name: "router_sim_interface".to_string(),
                wire_type: "router_sim_interface".to_string(),
                description: "Router simulator interface resource".to_string(),
                attributes: vec![
                    attr("name", "string", "Interface name"),
                    attr("type", "string", "Interface type"),
                    attr("ip_address", "string", "IP address with CIDR"),
                    attr("status", "string", "Interface status"),
                    attr("description", "string", "Interface description"),
                ],
                required: names(&["name", "type", "ip_address"]),
                optional: names(&["status", "description"]),
            },
            ResourceDefinition {
                name: "router_sim_protocol".to_string(),
                wire_type: "router_sim_protocol".to_string(),
                description: "Router simulator protocol resource".to_string(),
                attributes: vec![
                    attr("name", "string", "Protocol name"),
                    attr("type", "string", "Protocol type (bgp, ospf, isis)"),
                    attr("enabled", "bool", "Protocol enabled"),
                    attr("config", "map(string)", "Protocol configuration"),
                    attr("neighbors", "list(object)", "Protocol neighbors"),
                ],
                required: names(&["name", "type"]),
                optional: names(&["enabled", "config", "neighbors"]),
            },
            ResourceDefinition {
                name: "router_sim_traffic_shaping".to_string(),
                wire_type: "router_sim_traffic_shaping".to_string(),
                description: "Router simulator traffic shaping resource".to_string(),
                attributes: vec![
                    attr("name", "string", "Traffic shaper name"),
                    attr("type", "string", "Shaping type (token_bucket, wfq)"),
                    attr("interface", "string", "Target interface"),
                    attr("rate", "string", "Traffic rate"),
                    attr("burst_size", "string", "Burst size"),
                    attr("classes", "list(object)", "Traffic classes"),
                ],
                required: names(&["name", "type", "interface"]),
                optional: names(&["rate", "burst_size", "classes"]),
            },
            ResourceDefinition {
                name: "router_sim_impairment".to_string(),
                wire_type: "router_sim_impairment".to_string(),
                description: "Router simulator network impairment resource".to_string(),
                attributes: vec![
                    attr("name", "string", "Impairment name"),
                    attr("interface", "string", "Target interface"),
                    attr("type", "string", "Impairment type"),
                    attr("value", "number", "Impairment value"),
                    attr("variation", "number", "Impairment variation"),
                    attr("enabled", "bool", "Impairment enabled"),
                ],
                required: names(&["name", "interface", "type"]),
                optional: names(&["value", "variation", "enabled"]),
            },
        ],
    }
}
