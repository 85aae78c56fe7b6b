pub mod client;
pub mod commands;
pub mod exit;
pub mod global;
pub mod input;
pub mod kvstore;
pub mod types;

use std::io;

use clap::{ArgMatches, Args, FromArgMatches, Parser, Subcommand};

use self::global::GlobalFlags;
use self::types::KvCtlError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct KvCtl {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags inherited by every subcommand.
///
/// Read back through `ArgMatches` so an explicitly empty value can be told
/// apart from an absent one.
#[derive(Args)]
pub struct GlobalArgs {
    /// gRPC endpoint of the store (host:port or URI)
    #[arg(long, global = true, default_value = "127.0.0.1:2378")]
    pub endpoint: String,

    /// Client TLS certificate file
    #[arg(long, global = true)]
    pub cert: Option<String>,

    /// Client TLS key file
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// CA bundle used to verify the server
    #[arg(long, global = true)]
    pub cacert: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a value under a key
    Put(commands::put::PutArgs),

    /// Print the value of a key
    Get(commands::get::GetArgs),

    /// Delete a key
    Del(commands::del::DelArgs),
}

impl KvCtl {
    pub async fn run(self, flags: GlobalFlags) -> Result<(), KvCtlError> {
        let mut client = global::connect_client(&flags).await?;

        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        match self.command {
            Commands::Put(args) => commands::put::run(args, &mut client, stdin, stdout).await,
            Commands::Get(args) => commands::get::run(args, &mut client, stdin, stdout).await,
            Commands::Del(args) => commands::del::run(args, &mut client, stdin, stdout).await,
        }
    }
}

/// Builds the global flag snapshot from `matches` and runs the subcommand.
pub async fn run(matches: &ArgMatches) -> Result<(), KvCtlError> {
    let cli = KvCtl::from_arg_matches(matches)
        .map_err(|e| KvCtlError::InvalidArgument(e.to_string()))?;
    let flags = GlobalFlags::from_flags(matches)?;
    cli.run(flags).await
}
