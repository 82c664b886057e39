//! CLI module for the model accessors
//!
//! Provides subcommands over the catalog configured in `AppConfig`:
//! - `accept-types`: supported and default accept types
//! - `instance-types`: supported and default instance types, volume-size check

pub mod accept_types;
pub mod instance_types;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::ModelQuery;
use crate::infrastructure::catalog::StaticArtifactResolver;

/// Model accessors - deployment metadata for catalog models
#[derive(Parser)]
#[command(name = "model-accessors")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up response content types
    #[command(subcommand)]
    AcceptTypes(accept_types::AcceptTypesCommand),

    /// Look up compute instance types
    #[command(subcommand)]
    InstanceTypes(instance_types::InstanceTypesCommand),
}

/// Model selection shared by every lookup
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Catalog model ID
    #[arg(long)]
    pub model_id: Option<String>,

    /// Catalog model version
    #[arg(long)]
    pub model_version: Option<String>,

    /// Region to resolve in; the catalog default applies when omitted
    #[arg(long)]
    pub region: Option<String>,

    /// Accept model versions with known vulnerable dependencies
    #[arg(long)]
    pub tolerate_vulnerable: bool,

    /// Accept deprecated model versions
    #[arg(long)]
    pub tolerate_deprecated: bool,
}

impl From<ModelArgs> for ModelQuery {
    fn from(args: ModelArgs) -> Self {
        Self {
            region: args.region,
            model_id: args.model_id,
            model_version: args.model_version,
            tolerate_vulnerable_model: args.tolerate_vulnerable,
            tolerate_deprecated_model: args.tolerate_deprecated,
        }
    }
}

/// Run a parsed command against the configured catalog
pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let resolver = StaticArtifactResolver::from_config(&config.catalog);
    tracing::debug!(models = resolver.len(), "Catalog loaded");

    match cli.command {
        Command::AcceptTypes(cmd) => accept_types::run(cmd, &resolver).await,
        Command::InstanceTypes(cmd) => instance_types::run(cmd, &resolver).await,
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accept_types_command() {
        let cli = Cli::try_parse_from([
            "model-accessors",
            "accept-types",
            "options",
            "--model-id",
            "huggingface-llm-falcon-7b",
            "--model-version",
            "1.0.0",
            "--tolerate-deprecated",
        ])
        .unwrap();

        let Command::AcceptTypes(accept_types::AcceptTypesCommand::Options(args)) = cli.command
        else {
            panic!("unexpected command");
        };

        let query = ModelQuery::from(args);
        assert_eq!(query.model_id(), Some("huggingface-llm-falcon-7b"));
        assert!(query.tolerate_deprecated_model);
        assert!(!query.tolerate_vulnerable_model);
        assert!(query.region().is_none());
    }

    #[test]
    fn test_rejects_unknown_scope() {
        let result = Cli::try_parse_from([
            "model-accessors",
            "instance-types",
            "list",
            "--model-id",
            "m",
            "--model-version",
            "1",
            "--scope",
            "serving",
        ]);
        assert!(result.is_err());
    }
}
