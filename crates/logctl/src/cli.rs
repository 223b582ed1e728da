//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use logctl_admin::DefaultGroup;

/// Manage repositories on a log platform
#[derive(Debug, Parser)]
#[command(name = "logctl", version, about)]
pub struct Cli {
    /// Configuration file (default: logctl.yml in the working directory, if present)
    #[arg(long, global = true, env = "LOGCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Server address, overrides the configuration file and environment
    #[arg(long, global = true)]
    pub address: Option<String>,

    /// API token, overrides the configuration file and environment
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage repositories
    #[command(subcommand)]
    Repos(ReposCommand),
    /// Print the username bound to the API token
    Whoami,
}

#[derive(Debug, Subcommand)]
pub enum ReposCommand {
    /// List repositories
    List,
    /// Show a repository
    Show { name: String },
    /// Create a repository
    Create { name: String },
    /// Delete a repository
    Delete {
        name: String,
        /// Reason recorded with the deletion
        reason: String,
        /// Delete even when the repository contains data
        #[arg(long)]
        allow_data_deletion: bool,
    },
    /// Update description and retention settings
    Update {
        name: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Time-based retention in days; 0 removes the limit
        #[arg(long, value_name = "DAYS")]
        retention_time: Option<f64>,
        /// Storage-size-based retention in GB; 0 removes the limit
        #[arg(long, value_name = "GB")]
        retention_size: Option<f64>,
        /// Ingest-size-based retention in GB; 0 removes the limit
        #[arg(long, value_name = "GB")]
        ingest_size: Option<f64>,
        /// Allow changes that may delete data already stored
        #[arg(long)]
        allow_data_deletion: bool,
    },
    /// Set a user's default groups in a repository
    UpdateUserGroup {
        name: String,
        username: String,
        /// Member, Admin or Eliminator; repeat for several groups
        #[arg(long = "group", value_name = "GROUP")]
        groups: Vec<DefaultGroup>,
    },
}
