use std::path::Path;

use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint, Identity};
use tracing::{debug, info};

use crate::ctl::global::{ClientConfig, TlsInfo};
use crate::ctl::kvstore;
use crate::ctl::types::KvCtlError;

/// Connected session to the store.
pub struct KvStoreClient {
    inner: tonic::client::Grpc<Channel>,
}

impl KvStoreClient {
    pub async fn connect(config: ClientConfig) -> Result<Self, KvCtlError> {
        let addr = config
            .endpoints
            .first()
            .ok_or_else(|| KvCtlError::InvalidArgument("no endpoint configured".to_string()))?;
        let uri = endpoint_uri(addr, config.tls.is_some());

        let mut endpoint = Endpoint::from_shared(uri.clone())?.connect_timeout(config.dial_timeout);
        if let Some(tls) = &config.tls {
            endpoint = endpoint.tls_config(client_tls_config(tls)?)?;
        }

        debug!(%uri, timeout = ?config.dial_timeout, "dialing store");
        let channel = endpoint.connect().await?;
        info!(%uri, "connected");

        Ok(Self {
            inner: tonic::client::Grpc::new(channel),
        })
    }

    pub async fn get(&mut self, key: &str) -> Result<kvstore::GetResponse, tonic::Status> {
        let request = kvstore::GetRequest {
            key: key.to_string(),
        };
        self.unary("/kvstore.KvStore/Get", request).await
    }

    pub async fn set(
        &mut self,
        key: &str,
        value: Vec<u8>,
        ttl_seconds: u64,
    ) -> Result<kvstore::SetResponse, tonic::Status> {
        let request = kvstore::SetRequest {
            key: key.to_string(),
            value,
            ttl_seconds,
        };
        self.unary("/kvstore.KvStore/Set", request).await
    }

    pub async fn delete(&mut self, key: &str) -> Result<kvstore::DeleteResponse, tonic::Status> {
        let request = kvstore::DeleteRequest {
            key: key.to_string(),
        };
        self.unary("/kvstore.KvStore/Delete", request).await
    }

    async fn unary<Req, Resp>(&mut self, path: &'static str, request: Req) -> Result<Resp, tonic::Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("service was not ready: {}", e)))?;

        let codec = ProstCodec::<Req, Resp>::default();
        let response = self
            .inner
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await?;
        Ok(response.into_inner())
    }
}

/// Adds a scheme to bare `host:port` endpoints.
pub fn endpoint_uri(endpoint: &str, tls: bool) -> String {
    if endpoint.contains("://") {
        return endpoint.to_string();
    }
    let scheme = if tls { "https" } else { "http" };
    format!("{}://{}", scheme, endpoint)
}

/// Loads the PEM files named by `tls`.
///
/// A client identity needs both the certificate and the key; a CA file on
/// its own only configures server verification.
pub fn client_tls_config(tls: &TlsInfo) -> Result<ClientTlsConfig, KvCtlError> {
    let mut config = ClientTlsConfig::new();

    match (&tls.cert_file, &tls.key_file) {
        (Some(cert), Some(key)) => {
            config = config.identity(Identity::from_pem(read_pem(cert)?, read_pem(key)?));
        }
        (None, None) => {}
        (cert, key) => {
            return Err(KvCtlError::Tls(format!(
                "cert and key must both be present (cert: {:?}, key: {:?})",
                cert, key
            )));
        }
    }

    if let Some(ca) = &tls.ca_file {
        config = config.ca_certificate(Certificate::from_pem(read_pem(ca)?));
    }

    Ok(config)
}

fn read_pem(path: &Path) -> Result<Vec<u8>, KvCtlError> {
    std::fs::read(path).map_err(|source| KvCtlError::TlsFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_endpoint_uri_scheme() {
        assert_eq!(endpoint_uri("127.0.0.1:2378", false), "http://127.0.0.1:2378");
        assert_eq!(endpoint_uri("db:2379", true), "https://db:2379");
        assert_eq!(endpoint_uri("http://db:2379", true), "http://db:2379");
    }

    #[test]
    fn test_cert_without_key_is_rejected() {
        let tls = TlsInfo {
            cert_file: Some(PathBuf::from("client.pem")),
            ..TlsInfo::default()
        };
        let err = client_tls_config(&tls).unwrap_err();
        assert!(matches!(err, KvCtlError::Tls(_)));
    }

    #[test]
    fn test_key_without_cert_is_rejected() {
        let tls = TlsInfo {
            key_file: Some(PathBuf::from("client.key")),
            ..TlsInfo::default()
        };
        assert!(matches!(
            client_tls_config(&tls).unwrap_err(),
            KvCtlError::Tls(_)
        ));
    }

    #[test]
    fn test_missing_ca_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let ca = dir.path().join("missing-ca.pem");
        let tls = TlsInfo {
            ca_file: Some(ca.clone()),
            ..TlsInfo::default()
        };

        match client_tls_config(&tls).unwrap_err() {
            KvCtlError::TlsFile { path, .. } => assert_eq!(path, ca),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_ca_only_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let ca = dir.path().join("ca.pem");
        std::fs::write(&ca, b"-----BEGIN CERTIFICATE-----\n-----END CERTIFICATE-----\n").unwrap();
        let tls = TlsInfo {
            ca_file: Some(ca),
            ..TlsInfo::default()
        };
        assert!(client_tls_config(&tls).is_ok());
    }
}
