//! `instance-types` subcommands

use clap::{Args, Subcommand};
use serde_json::json;

use super::{print_json, ModelArgs};
use crate::domain::{instance_types, ArtifactResolver, InstanceTypeScope};

#[derive(Subcommand)]
pub enum InstanceTypesCommand {
    /// List the instance types the model supports for a scope
    List(ScopedArgs),

    /// Show the model's default instance type for a scope
    Default(ScopedArgs),

    /// Check whether a volume size can be set for an instance type
    VolumeSizeSupported {
        /// Instance type, e.g. ml.m5.large
        instance_type: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ScopedArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// training or inference
    #[arg(long)]
    pub scope: Option<InstanceTypeScope>,
}

pub async fn run(
    cmd: InstanceTypesCommand,
    resolver: &dyn ArtifactResolver,
) -> anyhow::Result<()> {
    match cmd {
        InstanceTypesCommand::List(args) => {
            let types =
                instance_types::retrieve(resolver, &args.model.into(), args.scope).await?;
            print_json(&types)
        }
        InstanceTypesCommand::Default(args) => {
            let default =
                instance_types::retrieve_default(resolver, &args.model.into(), args.scope)
                    .await?;
            print_json(&default)
        }
        InstanceTypesCommand::VolumeSizeSupported { instance_type } => {
            let supported = instance_types::volume_size_supported(&instance_type)?;
            print_json(&json!({
                "instance_type": instance_type,
                "volume_size_supported": supported,
            }))
        }
    }
}
