use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ProviderConfig;
use crate::graph::Cloud;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub struct GlobalArgs {
    /// Microsoft cloud to target: public, gcc, gcchigh, china, dod, ex, rx.
    #[arg(long, global = true, env = "M365_CLOUD", default_value = "public")]
    pub cloud: Cloud,

    #[arg(long, global = true, env = "M365_TENANT_ID")]
    pub tenant_id: Option<String>,

    #[arg(long, global = true, env = "M365_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Log request bodies and resolved endpoints.
    #[arg(long, global = true, env = "M365_DEBUG_MODE")]
    pub debug_mode: bool,

    #[arg(long, global = true, env = "M365_STATE_FILE", default_value = "m365.tfstate.json")]
    pub state: PathBuf,
}

impl From<&GlobalArgs> for ProviderConfig {
    fn from(args: &GlobalArgs) -> Self {
        ProviderConfig {
            cloud: args.cloud,
            tenant_id: args.tenant_id.clone(),
            access_token: args.access_token.clone(),
            debug_mode: args.debug_mode,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the registered resource types.
    Resources,
    /// Print the attribute tree of a resource type.
    Schema { resource_type: String },
    /// Create the instance, or update it when it is already in state.
    Apply(ApplyArgs),
    /// Re-read the instance and store the result.
    Refresh(InstanceArgs),
    /// Delete the instance and drop it from state.
    Destroy(InstanceArgs),
    /// Adopt an existing object by id.
    Import(ImportArgs),
}

#[derive(clap::Args, Debug)]
pub struct InstanceArgs {
    pub resource_type: String,
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub instance: InstanceArgs,

    /// JSON file with the desired attributes.
    #[arg(long, short)]
    pub config: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    #[command(flatten)]
    pub instance: InstanceArgs,

    pub id: String,
}
