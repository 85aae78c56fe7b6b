use std::io::{Read, Write};

use clap::Args;

use crate::ctl::client::KvStoreClient;
use crate::ctl::input::arg_or_stdin;
use crate::ctl::types::KvCtlError;

#[derive(Args)]
pub struct PutArgs {
    /// Key, then value (read from stdin when omitted)
    #[arg(num_args = 1..=2, required = true, value_names = ["KEY", "VALUE"])]
    pub args: Vec<String>,

    /// Time to live in seconds (0 = no expiry)
    #[arg(long, default_value_t = 0)]
    pub ttl: u64,
}

pub async fn run<R: Read, W: Write>(
    args: PutArgs,
    client: &mut KvStoreClient,
    stdin: R,
    mut out: W,
) -> Result<(), KvCtlError> {
    // clap guarantees at least the key
    let key = args.args[0].clone();
    let value = put_value(&args.args, stdin)?;

    client.set(&key, value, args.ttl).await?;
    writeln!(out, "OK")?;
    Ok(())
}

/// Value for `put`: the second argument, or stdin.
fn put_value<R: Read>(args: &[String], stdin: R) -> Result<Vec<u8>, KvCtlError> {
    arg_or_stdin(args, stdin, 1).map_err(|e| {
        KvCtlError::InvalidArgument(format!(
            "put command needs 1 argument and input from stdin or 2 arguments ({})",
            e
        ))
    })
}
