//! Configuration loading
//!
//! Sources are layered, later ones winning: configuration file, `LOGCTL_*`
//! environment variables, then `--address`/`--token` flags.

use std::path::PathBuf;

use ::config::{Config, Environment, File};
use logctl_admin::AdminClientConfig;

use crate::cli::Cli;

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "logctl.yml";

pub fn load(cli: &Cli) -> anyhow::Result<AdminClientConfig> {
    load_with_environment(cli, environment())
}

/// Values are kept as strings so tokens are never reinterpreted as numbers;
/// numeric fields are converted when deserializing.
fn environment() -> Environment {
    Environment::with_prefix("LOGCTL")
        .list_separator(",")
        .with_list_parse_key("server_addrs")
}

fn load_with_environment(cli: &Cli, env: Environment) -> anyhow::Result<AdminClientConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut builder = Config::builder()
        .add_source(File::from(path).required(cli.config.is_some()))
        .add_source(env);

    if let Some(address) = &cli.address {
        builder = builder.set_override("server_addrs", vec![address.clone()])?;
    }
    if let Some(token) = &cli.token {
        builder = builder.set_override("token", token.clone())?;
    }

    Ok(builder.build()?.try_deserialize()?)
}
