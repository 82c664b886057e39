//! `accept-types` subcommands

use clap::Subcommand;

use super::{print_json, ModelArgs};
use crate::domain::{accept_types, ArtifactResolver};

#[derive(Subcommand)]
pub enum AcceptTypesCommand {
    /// List the accept types the model supports
    Options(ModelArgs),

    /// Show the model's default accept type
    Default(ModelArgs),
}

pub async fn run(cmd: AcceptTypesCommand, resolver: &dyn ArtifactResolver) -> anyhow::Result<()> {
    match cmd {
        AcceptTypesCommand::Options(args) => {
            let types = accept_types::retrieve_options(resolver, &args.into()).await?;
            print_json(&types)
        }
        AcceptTypesCommand::Default(args) => {
            let default = accept_types::retrieve_default(resolver, &args.into()).await?;
            print_json(&default)
        }
    }
}
