#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::commands::requested_providers;
use super::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_generate_defaults() {
    let cli = Cli::try_parse_from(["tfprovider-gen", "generate"]).unwrap();
    match cli.command {
        Commands::Generate { output, providers } => {
            assert_eq!(output, PathBuf::from("terraform"));
            assert!(providers.is_none());
        }
        _ => panic!("expected generate"),
    }
}

#[test]
fn test_generate_provider_list_is_comma_delimited() {
    let cli = Cli::try_parse_from([
        "tfprovider-gen",
        "generate",
        "--output",
        "out",
        "--providers",
        "cloudpods,bogus",
    ])
    .unwrap();
    match cli.command {
        Commands::Generate { output, providers } => {
            assert_eq!(output, PathBuf::from("out"));
            assert_eq!(
                providers.unwrap(),
                vec!["cloudpods".to_string(), "bogus".to_string()]
            );
        }
        _ => panic!("expected generate"),
    }
}

#[test]
fn test_requested_providers_defaults_to_builtins() {
    let defaults = requested_providers(None);
    assert_eq!(defaults, vec!["cloudpods", "aviatrix", "router_sim"]);

    let explicit = requested_providers(Some(&["aviatrix".to_string()]));
    assert_eq!(explicit, vec!["aviatrix"]);

    // empty list falls back to the defaults
    assert_eq!(requested_providers(Some(&[])).len(), 3);
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["tfprovider-gen", "serve"]).is_err());
}
