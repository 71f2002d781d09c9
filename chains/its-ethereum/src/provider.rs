use std::sync::Arc;
use std::time::Duration;

use ethers::prelude::{Http, LocalWallet, Middleware, Provider, Signer, SignerMiddleware};
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use its_core::{Address, ChainCommunicationError, ChainResult};

const HTTP_CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

/// Ethereum connection configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConnectionConf {
    /// HTTP connection details
    Http {
        /// Fully qualified string to connect to
        url: String,
    },
}

impl Default for ConnectionConf {
    fn default() -> Self {
        Self::Http {
            url: Default::default(),
        }
    }
}

/// An error when connecting to an ethereum provider.
#[derive(Error, Debug)]
pub enum EthereumProviderConnectionError {
    /// Underlying reqwest lib threw an error
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// A URL string could not be parsed
    #[error("Failed to parse url {1:?}: {0}")]
    InvalidUrl(url::ParseError, String),
}

impl From<EthereumProviderConnectionError> for ChainCommunicationError {
    fn from(e: EthereumProviderConnectionError) -> Self {
        ChainCommunicationError::from_other(e)
    }
}

/// A provider that signs every transaction with the configured wallet
pub type SigningProvider = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Connect to the node and bind `wallet` to the chain id it reports.
pub async fn build_signing_provider(
    conn: &ConnectionConf,
    wallet: LocalWallet,
) -> ChainResult<Arc<SigningProvider>> {
    let provider = match conn {
        ConnectionConf::Http { url } => {
            let http_client = Client::builder()
                .timeout(HTTP_CLIENT_TIMEOUT)
                .build()
                .map_err(EthereumProviderConnectionError::from)?;
            let parsed_url = url
                .parse::<Url>()
                .map_err(|e| EthereumProviderConnectionError::InvalidUrl(e, url.clone()))?;
            Provider::new(Http::new_with_client(parsed_url, http_client))
        }
    };

    let chain_id = provider.get_chainid().await?;
    let wallet = wallet.with_chain_id(chain_id.as_u64());
    let signer: Address = wallet.address();
    info!(chain_id = %chain_id, ?signer, "Connected signing provider");

    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_http_connection() {
        let conf: ConnectionConf =
            serde_json::from_str(r#"{"type": "http", "url": "http://localhost:8545"}"#).unwrap();
        let ConnectionConf::Http { url } = conf;
        assert_eq!(url, "http://localhost:8545");
    }

    #[tokio::test]
    async fn rejects_malformed_url() {
        let conf = ConnectionConf::Http {
            url: "not a url".into(),
        };
        let wallet = LocalWallet::new(&mut ethers::core::rand::thread_rng());
        let err = build_signing_provider(&conf, wallet).await.unwrap_err();
        assert!(matches!(err, ChainCommunicationError::Other(_)));
        assert!(err.to_string().contains("not a url"));
    }
}
