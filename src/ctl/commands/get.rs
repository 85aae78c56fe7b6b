use std::io::{Read, Write};

use clap::Args;

use crate::ctl::client::KvStoreClient;
use crate::ctl::input::arg_or_stdin;
use crate::ctl::types::KvCtlError;

#[derive(Args)]
pub struct GetArgs {
    /// Key to read (read from stdin when omitted)
    #[arg(id = "key_arg", value_name = "KEY")]
    pub key: Option<String>,
}

pub async fn run<R: Read, W: Write>(
    args: GetArgs,
    client: &mut KvStoreClient,
    stdin: R,
    mut out: W,
) -> Result<(), KvCtlError> {
    let key = key_arg(args.key, stdin)?;

    let response = client.get(&key).await?;
    if !response.found {
        return Err(KvCtlError::KeyNotFound(key));
    }

    out.write_all(&response.value)?;
    writeln!(out)?;
    Ok(())
}

/// Key from the optional positional, or stdin. Shared by `get` and `del`.
pub(crate) fn key_arg<R: Read>(key: Option<String>, stdin: R) -> Result<String, KvCtlError> {
    let args: Vec<String> = key.into_iter().collect();
    let bytes = arg_or_stdin(&args, stdin, 0)?;
    String::from_utf8(bytes)
        .map(|key| key.trim_end_matches(['\r', '\n']).to_string())
        .map_err(|_| KvCtlError::InvalidArgument("key is not valid UTF-8".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_positional() {
        assert_eq!(key_arg(Some("user:1".to_string()), std::io::empty()).unwrap(), "user:1");
    }

    #[test]
    fn test_key_from_stdin_drops_trailing_newline() {
        assert_eq!(key_arg(None, &b"user:2\n"[..]).unwrap(), "user:2");
    }

    #[test]
    fn test_missing_key_is_no_input() {
        assert!(matches!(
            key_arg(None, std::io::empty()).unwrap_err(),
            KvCtlError::NoInput
        ));
    }

    #[test]
    fn test_non_utf8_key_rejected() {
        let err = key_arg(None, &[0xff, 0xfe][..]).unwrap_err();
        assert!(matches!(err, KvCtlError::InvalidArgument(_)));
    }
}
