use std::path::PathBuf;

use thiserror::Error;

use crate::ctl::exit::ExitStatusCode;

#[derive(Error, Debug)]
pub enum KvCtlError {
    #[error("failed to read --{name} flag: {reason}")]
    FlagRead { name: &'static str, reason: String },

    #[error("empty string is passed to --{0} option")]
    EmptyFlag(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no available argument and stdin")]
    NoInput,

    #[error("gRPC error: {0}")]
    Grpc(#[from] tonic::transport::Error),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("failed to read TLS file {path:?}: {source}")]
    TlsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("RPC error: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KvCtlError {
    /// Exit category the dispatch layer terminates with.
    pub fn exit_code(&self) -> ExitStatusCode {
        match self {
            KvCtlError::FlagRead { .. } => ExitStatusCode::Error,
            KvCtlError::EmptyFlag(_) => ExitStatusCode::BadArgs,
            KvCtlError::InvalidArgument(_) => ExitStatusCode::BadArgs,
            KvCtlError::NoInput => ExitStatusCode::BadArgs,
            KvCtlError::Grpc(_) => ExitStatusCode::BadConnection,
            KvCtlError::Tls(_) => ExitStatusCode::BadConnection,
            KvCtlError::TlsFile { .. } => ExitStatusCode::BadConnection,
            KvCtlError::Rpc(_) => ExitStatusCode::Error,
            KvCtlError::KeyNotFound(_) => ExitStatusCode::Error,
            KvCtlError::Io(_) => ExitStatusCode::Error,
        }
    }
}
