use std::path::PathBuf;
use std::time::Duration;

use clap::parser::ValueSource;
use clap::ArgMatches;
use tracing::debug;

use crate::ctl::client::KvStoreClient;
use crate::ctl::types::KvCtlError;

/// How long the client may spend establishing its connection.
pub const DIAL_TIMEOUT: Duration = Duration::from_secs(20);

/// Read access to parsed command-line flags.
pub trait FlagSource {
    /// Value of a string flag. `Err` means the flag could not be read at all.
    fn get_string(&self, name: &'static str) -> Result<Option<String>, KvCtlError>;

    /// Whether the user supplied the flag on the command line.
    fn changed(&self, name: &'static str) -> bool;
}

impl FlagSource for ArgMatches {
    fn get_string(&self, name: &'static str) -> Result<Option<String>, KvCtlError> {
        self.try_get_one::<String>(name)
            .map(|value| value.cloned())
            .map_err(|e| KvCtlError::FlagRead {
                name,
                reason: e.to_string(),
            })
    }

    fn changed(&self, name: &'static str) -> bool {
        // value_source panics on unknown ids in debug builds
        self.try_contains_id(name).is_ok()
            && self.value_source(name) == Some(ValueSource::CommandLine)
    }
}

/// State of one TLS credential flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialFlag {
    Unset,
    InvalidEmpty,
    Value(PathBuf),
}

impl CredentialFlag {
    pub fn read<F: FlagSource + ?Sized>(flags: &F, name: &'static str) -> Self {
        let value = match flags.get_string(name) {
            Ok(value) => value,
            Err(err) => {
                debug!(flag = name, %err, "credential flag unreadable, treating as unset");
                None
            }
        };

        match value {
            Some(path) if !path.is_empty() => CredentialFlag::Value(PathBuf::from(path)),
            _ if flags.changed(name) => CredentialFlag::InvalidEmpty,
            _ => CredentialFlag::Unset,
        }
    }
}

/// Certificate, key and CA paths. `None` fields are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsInfo {
    pub cert_file: Option<PathBuf>,
    pub key_file: Option<PathBuf>,
    pub ca_file: Option<PathBuf>,
}

/// Snapshot of the flags shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalFlags {
    pub endpoint: String,
    pub cert: CredentialFlag,
    pub key: CredentialFlag,
    pub cacert: CredentialFlag,
}

impl GlobalFlags {
    pub fn from_flags<F: FlagSource + ?Sized>(flags: &F) -> Result<Self, KvCtlError> {
        Ok(Self {
            endpoint: resolve_endpoint(flags)?,
            cert: CredentialFlag::read(flags, "cert"),
            key: CredentialFlag::read(flags, "key"),
            cacert: CredentialFlag::read(flags, "cacert"),
        })
    }

    /// Builds the TLS bundle. `None` when no credential flag was given.
    pub fn resolve_tls(&self) -> Result<Option<TlsInfo>, KvCtlError> {
        let mut tls = TlsInfo::default();
        let mut active = false;

        let fields = [
            ("cert", &self.cert, &mut tls.cert_file),
            ("key", &self.key, &mut tls.key_file),
            ("cacert", &self.cacert, &mut tls.ca_file),
        ];
        for (name, flag, slot) in fields {
            match flag {
                CredentialFlag::Value(path) => {
                    *slot = Some(path.clone());
                    active = true;
                }
                CredentialFlag::InvalidEmpty => return Err(KvCtlError::EmptyFlag(name)),
                CredentialFlag::Unset => {}
            }
        }

        Ok(active.then_some(tls))
    }
}

/// Reads `--endpoint`. An empty endpoint is rejected here rather than left
/// for the dial to trip over.
pub fn resolve_endpoint<F: FlagSource + ?Sized>(flags: &F) -> Result<String, KvCtlError> {
    match flags.get_string("endpoint")? {
        Some(endpoint) if endpoint.is_empty() => Err(KvCtlError::EmptyFlag("endpoint")),
        Some(endpoint) => Ok(endpoint),
        None => Err(KvCtlError::FlagRead {
            name: "endpoint",
            reason: "flag has no value".to_string(),
        }),
    }
}

/// Everything the store client needs to dial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoints: Vec<String>,
    pub tls: Option<TlsInfo>,
    pub dial_timeout: Duration,
}

impl ClientConfig {
    pub fn from_global(flags: &GlobalFlags) -> Result<Self, KvCtlError> {
        let tls = flags.resolve_tls()?;

        debug!(
            endpoint = %flags.endpoint,
            tls = tls.is_some(),
            "resolved client config"
        );

        Ok(Self {
            endpoints: vec![flags.endpoint.clone()],
            tls,
            dial_timeout: DIAL_TIMEOUT,
        })
    }
}

/// Validates the global flags and dials the store.
pub async fn connect_client(flags: &GlobalFlags) -> Result<KvStoreClient, KvCtlError> {
    let config = ClientConfig::from_global(flags)?;
    KvStoreClient::connect(config).await
}
