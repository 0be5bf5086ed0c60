use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{
    ENV_CONFIG, ENV_INFLUX_DATABASE, ENV_INFLUX_PASSWORD, ENV_INFLUX_URL, ENV_INFLUX_USER,
    ENV_NO_WAIT,
};

#[derive(Parser)]
#[command(name = "loginstats")]
#[command(version, about = "Login statistics rollup service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// InfluxDB base URL
    #[arg(long, global = true, env = ENV_INFLUX_URL)]
    pub influx_url: Option<String>,

    /// Target database name
    #[arg(long, short = 'd', global = true, env = ENV_INFLUX_DATABASE)]
    pub database: Option<String>,

    /// InfluxDB user
    #[arg(long, global = true, env = ENV_INFLUX_USER)]
    pub influx_user: Option<String>,

    /// InfluxDB password
    #[arg(long, global = true, env = ENV_INFLUX_PASSWORD)]
    pub influx_password: Option<String>,

    /// Skip the post-build indexing cooldown (for tests and small datasets)
    #[arg(long, global = true, env = ENV_NO_WAIT)]
    pub no_wait: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop and recreate every rollup measurement and continuous query,
    /// then backfill the rollups from existing history
    Backfill,

    /// Write raw login points from a line-protocol file, then backfill
    Seed {
        /// Path to the seed file (InfluxDB line protocol)
        file: PathBuf,

        /// Drop and recreate the target database before writing
        #[arg(long)]
        reset_database: bool,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub influx_url: Option<String>,
    pub database: Option<String>,
    pub influx_user: Option<String>,
    pub influx_password: Option<String>,
    pub no_wait: bool,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        config: cli.config,
        influx_url: cli.influx_url,
        database: cli.database,
        influx_user: cli.influx_user,
        influx_password: cli.influx_password,
        no_wait: cli.no_wait,
    };
    (config, cli.command)
}
