use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{builtin_catalog, validate_catalog, BUILTIN_PROVIDERS};
use crate::generator::generate_providers;

/// Command-line interface for the provider generator
#[derive(Parser)]
#[command(name = "tfprovider-gen")]
#[command(about = "Terraform provider artifact generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate provider artifacts (schema document, source scaffold, examples)
    Generate {
        /// Output directory for generated providers
        #[arg(short, long, default_value = "terraform")]
        output: PathBuf,

        /// Providers to generate (comma-separated or repeated; default: all built-ins)
        #[arg(short, long, num_args = 1.., value_delimiter = ',')]
        providers: Option<Vec<String>>,
    },
    /// Validate provider catalogs without writing any files
    Check {
        /// Providers to check (default: all built-ins)
        #[arg(short, long, num_args = 1.., value_delimiter = ',')]
        providers: Option<Vec<String>>,
    },
    /// List the built-in provider catalogs
    List,
}

/// Execute the CLI command provided by the user
///
/// Per-provider failures are reported in the run summary rather than through
/// the exit status; partial success is allowed.
///
/// # Errors
///
/// Returns an error if the output root cannot be created.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate { output, providers } => {
            let requested = requested_providers(providers.as_deref());
            let reports = generate_providers(&requested, output)?;
            let complete = reports.iter().filter(|r| r.is_complete()).count();
            println!();
            println!(
                "{complete}/{} providers generated in {}/",
                reports.len(),
                output.display()
            );
            if complete > 0 {
                println!("To use the providers:");
                println!("  1. Copy the generated files into your Terraform configuration");
                println!("  2. Run `terraform init` to initialize the providers");
                println!("  3. Run `terraform plan`, then `terraform apply`");
            }
            Ok(())
        }
        Commands::Check { providers } => {
            for name in requested_providers(providers.as_deref()) {
                match builtin_catalog(&name) {
                    None => println!("⚠️  Unknown provider: {name}"),
                    Some(catalog) => match validate_catalog(&catalog) {
                        Ok(()) => {
                            println!("✅ {name}: {} resources OK", catalog.resources.len())
                        }
                        Err(err) => println!("❌ {name}: {err}"),
                    },
                }
            }
            Ok(())
        }
        Commands::List => {
            for name in BUILTIN_PROVIDERS {
                println!("{name}");
            }
            Ok(())
        }
    }
}

/// Requested provider names, defaulting to all built-in catalogs
pub(crate) fn requested_providers(providers: Option<&[String]>) -> Vec<String> {
    match providers {
        Some(list) if !list.is_empty() => list.to_vec(),
        _ => BUILTIN_PROVIDERS.iter().map(|s| s.to_string()).collect(),
    }
}
