//! Client for the Axelar GMP API, used to price the relay of interchain
//! messages before paying for them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use its_core::{GasEstimator, GasEstimatorError, GasFeeRequest, GasQuote};

use crate::estimate_gas_fee::{parse_fee, EstimateGasFeeArgs, EstimateGasFeeResponse};

/// GMP API endpoint of the Axelar testnet
pub const TESTNET_GMP_API_URL: &str = "https://testnet.api.gmp.axelarscan.io";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

mod estimate_gas_fee;

/// Client configuration
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct GmpApiConf {
    /// Base URL of the API
    pub url: String,
    /// Seconds to wait for an answer
    pub timeout_secs: u64,
}

impl Default for GmpApiConf {
    fn default() -> Self {
        Self {
            url: TESTNET_GMP_API_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Configuration errors for the client
#[derive(Debug, thiserror::Error)]
pub enum GmpClientError {
    /// The base URL could not be parsed
    #[error("Failed to parse GMP API url {1:?}: {0}")]
    InvalidUrl(url::ParseError, String),
    /// The HTTP client could not be built
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

/// Queries the Axelar GMP API
#[derive(Debug, Clone)]
pub struct AxelarGmpClient {
    http: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl AxelarGmpClient {
    /// Build a client from its configuration
    pub fn new(conf: &GmpApiConf) -> Result<Self, GmpClientError> {
        let url = conf
            .url
            .parse::<Url>()
            .map_err(|e| GmpClientError::InvalidUrl(e, conf.url.clone()))?;
        let timeout = Duration::from_secs(conf.timeout_secs);
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url, timeout })
    }

    fn map_reqwest_err(&self, err: reqwest::Error) -> GasEstimatorError {
        if err.is_timeout() {
            GasEstimatorError::Timeout(self.timeout)
        } else {
            GasEstimatorError::from_other(err)
        }
    }
}

#[async_trait]
impl GasEstimator for AxelarGmpClient {
    #[instrument(err, skip(self), fields(url = %self.url))]
    async fn estimate_gas_fee(
        &self,
        request: &GasFeeRequest,
    ) -> Result<GasQuote, GasEstimatorError> {
        let args = EstimateGasFeeArgs::from(request);
        let res = self
            .http
            .post(self.url.clone())
            .json(&args)
            .send()
            .await
            .map_err(|e| self.map_reqwest_err(e))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| self.map_reqwest_err(e))?;
        if !status.is_success() {
            return Err(GasEstimatorError::Status {
                status: status.as_u16(),
                body,
            });
        }
        debug!(%body, "Gas estimation response");

        let response: EstimateGasFeeResponse =
            serde_json::from_str(&body).map_err(GasEstimatorError::from_other)?;
        parse_fee(response).map(GasQuote)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    fn request() -> GasFeeRequest {
        GasFeeRequest::new("avalanche".into(), "polygon".into(), 700_000, 1.5)
    }

    /// Serve one connection: read the query, answer with `response` (or
    /// nothing at all), then hold the socket until the client lets go.
    async fn serve_once(response: Option<&'static str>) -> GmpApiConf {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;
            if let Some(response) = response {
                socket.write_all(response.as_bytes()).await.unwrap();
            }
            let mut rest = Vec::new();
            let _ = socket.read_to_end(&mut rest).await;
        });
        GmpApiConf {
            url: format!("http://{addr}"),
            timeout_secs: 1,
        }
    }

    #[test]
    fn default_conf_targets_testnet() {
        let client = AxelarGmpClient::new(&GmpApiConf::default()).unwrap();
        assert_eq!(client.url.as_str(), "https://testnet.api.gmp.axelarscan.io/");
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[test]
    fn rejects_bad_url() {
        let conf = GmpApiConf {
            url: "::".into(),
            ..Default::default()
        };
        assert!(matches!(
            AxelarGmpClient::new(&conf),
            Err(GmpClientError::InvalidUrl(_, url)) if url == "::"
        ));
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        let conf = GmpApiConf {
            url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
        };
        let client = AxelarGmpClient::new(&conf).unwrap();
        assert!(client.estimate_gas_fee(&request()).await.is_err());
    }

    #[tokio::test]
    async fn silent_service_times_out() {
        let client = AxelarGmpClient::new(&serve_once(None).await).unwrap();
        assert!(matches!(
            client.estimate_gas_fee(&request()).await,
            Err(GasEstimatorError::Timeout(timeout)) if timeout == Duration::from_secs(1)
        ));
    }

    #[tokio::test]
    async fn error_status_is_reported_with_body() {
        let conf = serve_once(Some(
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 11\r\nconnection: close\r\n\r\nunavailable",
        ))
        .await;
        let client = AxelarGmpClient::new(&conf).unwrap();
        assert!(matches!(
            client.estimate_gas_fee(&request()).await,
            Err(GasEstimatorError::Status { status: 503, body }) if body == "unavailable"
        ));
    }

    #[tokio::test]
    async fn numeric_fee_becomes_quote() {
        let conf = serve_once(Some(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 16\r\nconnection: close\r\n\r\n1000000000000000",
        ))
        .await;
        let client = AxelarGmpClient::new(&conf).unwrap();
        assert_eq!(
            client.estimate_gas_fee(&request()).await.unwrap(),
            GasQuote(its_core::U256::exp10(15))
        );
    }
}
