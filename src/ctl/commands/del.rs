use std::io::{Read, Write};

use clap::Args;

use crate::ctl::client::KvStoreClient;
use crate::ctl::commands::get::key_arg;
use crate::ctl::types::KvCtlError;

#[derive(Args)]
pub struct DelArgs {
    /// Key to delete (read from stdin when omitted)
    #[arg(id = "key_arg", value_name = "KEY")]
    pub key: Option<String>,
}

pub async fn run<R: Read, W: Write>(
    args: DelArgs,
    client: &mut KvStoreClient,
    stdin: R,
    mut out: W,
) -> Result<(), KvCtlError> {
    let key = key_arg(args.key, stdin)?;

    let response = client.delete(&key).await?;
    if !response.success {
        return Err(KvCtlError::KeyNotFound(key));
    }

    writeln!(out, "OK")?;
    Ok(())
}
