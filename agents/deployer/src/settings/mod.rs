//! Settings of the deployer.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. every `*.json` file in `./config`, in file name order;
//! 2. the comma separated files listed in the `CONFIG_FILES` env var;
//! 3. `ITS_*` environment variables, nested keys separated by `__`
//!    (`ITS_SIGNER__TYPE=hex_key`, `ITS_SIGNER__KEY=0x...`,
//!    `ITS_CHAIN__CONNECTION__URL=...`).

use std::path::Path;
use std::sync::Arc;

use ethers::prelude::Signer as _;
use ethers::utils::parse_units;
use eyre::{Context, Result};
use serde::Deserialize;

use axelar_gmp::{AxelarGmpClient, GmpApiConf};
use its_core::{Address, GasFeeRequest, ManagerType, RandomSalt, U256};
use its_ethereum::{
    build_signing_provider, ConfirmationConf, ConnectionConf, EthereumInterchainTokenService,
    EthereumMintableToken,
};

use crate::workflow::{Workflow, WorkflowConfig};

pub use signers::SignerConf;
pub use trace::TracingConfig;

mod loader;
mod signers;
mod trace;

/// Directory holding the default config files
pub const CONFIG_DIR: &str = "./config";

/// The chain the workflow starts on
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConf {
    /// Display name
    pub name: String,
    /// RPC connection
    pub connection: ConnectionConf,
}

/// Where and how to fetch gas quotes
#[derive(Debug, Clone, Deserialize)]
pub struct GasEstimatorConf {
    /// GMP API base url
    #[serde(default = "default_gmp_url")]
    pub url: String,
    /// Seconds to wait for a quote
    #[serde(default = "default_gmp_timeout")]
    pub timeout_secs: u64,
    /// Source chain of the quoted relay
    pub source_chain: String,
    /// Destination chain of the quoted relay
    pub destination_chain: String,
    /// Execution gas limit hint
    pub gas_limit: u64,
    /// Safety multiplier applied by the estimator
    pub multiplier: f64,
}

fn default_gmp_url() -> String {
    GmpApiConf::default().url
}

fn default_gmp_timeout() -> u64 {
    GmpApiConf::default().timeout_secs
}

impl GasEstimatorConf {
    fn api_conf(&self) -> GmpApiConf {
        GmpApiConf {
            url: self.url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    fn request(&self) -> GasFeeRequest {
        GasFeeRequest::new(
            self.source_chain.clone(),
            self.destination_chain.clone(),
            self.gas_limit,
            self.multiplier,
        )
    }
}

/// The smoke-test transfer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransferConf {
    /// Human readable amount, e.g. "0.001"
    pub amount: String,
    /// Decimals of the token
    pub decimals: u32,
}

impl Default for TransferConf {
    fn default() -> Self {
        Self {
            amount: "0.001".to_owned(),
            decimals: 18,
        }
    }
}

impl TransferConf {
    /// The amount in base units
    pub fn base_units(&self) -> Result<U256> {
        let units = parse_units(&self.amount, self.decimals)
            .with_context(|| format!("Invalid transfer amount {:?}", self.amount))?;
        Ok(units.into())
    }
}

/// Settings for the deployer
#[derive(Debug, Deserialize)]
pub struct DeployerSettings {
    /// The chain deployments start from
    pub chain: ChainConf,
    /// Signer used for every transaction
    #[serde(default)]
    pub signer: SignerConf,
    /// Interchain token service contract
    pub token_service: Address,
    /// Token the manager is deployed for
    pub token: Address,
    /// Operating policy of the manager
    #[serde(default)]
    pub manager_type: ManagerType,
    /// Chain the remote manager is deployed on and the test transfer is sent to
    pub destination_chain: String,
    /// Gas quote source
    pub gas_estimator: GasEstimatorConf,
    /// Test transfer
    #[serde(default)]
    pub transfer: TransferConf,
    /// Transaction confirmation
    #[serde(default)]
    pub confirmation: ConfirmationConf,
    /// Logging
    #[serde(default)]
    pub tracing: TracingConfig,
}

impl DeployerSettings {
    /// Load settings from the default locations
    pub fn new() -> Result<Self> {
        loader::load_settings_object(Path::new(CONFIG_DIR))
    }

    /// The explicit configuration handed to the workflow
    pub fn workflow_config(&self) -> Result<WorkflowConfig> {
        Ok(WorkflowConfig {
            token: self.token,
            manager_type: self.manager_type,
            destination_chain: self.destination_chain.clone(),
            gas_quote: self.gas_estimator.request(),
            transfer_amount: self.transfer.base_units()?,
        })
    }

    /// Resolve the signer, connect to the chain and wire the collaborators.
    pub async fn build_workflow(&self) -> Result<Workflow> {
        let config = self.workflow_config()?;
        let wallet = self.signer.build()?;
        let provider = build_signing_provider(&self.chain.connection, wallet)
            .await
            .with_context(|| format!("Failed to connect to {}", self.chain.name))?;
        let signer = provider.signer().address();

        let token_service = EthereumInterchainTokenService::new(
            provider.clone(),
            self.token_service,
            self.confirmation,
        );
        let token = EthereumMintableToken::new(provider, self.token, self.confirmation);
        let gas_estimator = AxelarGmpClient::new(&self.gas_estimator.api_conf())?;

        Ok(Workflow::new(
            config,
            signer,
            Arc::new(token_service),
            Arc::new(token),
            Arc::new(gas_estimator),
            Arc::new(RandomSalt),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    const TESTNET_CONFIG: &str = include_str!("../../../../config/testnet.json");

    fn load(env: &[(&str, &str)]) -> Result<DeployerSettings> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("testnet.json"), TESTNET_CONFIG)?;
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        loader::load_from_sources(dir.path(), &[], env)
    }

    #[test]
    fn shipped_config_carries_the_deployment_constants() {
        let settings = load(&[]).unwrap();
        assert_eq!(
            settings.token_service,
            "0xB5FB4BE02232B1bBA4dC8f81dc24C26980dE9e3C"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(
            settings.token,
            "0x949185D3BE66775Ea648F4a306740EA9eFF9C567"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(settings.manager_type, ManagerType::MintBurn);
        assert_eq!(settings.destination_chain, "Polygon");

        let config = settings.workflow_config().unwrap();
        assert_eq!(config.transfer_amount, U256::exp10(15));
        assert_eq!(
            config.gas_quote,
            GasFeeRequest::new("avalanche".into(), "polygon".into(), 700_000, 1.5)
        );
        assert!(matches!(settings.signer, SignerConf::Node));
    }

    #[test]
    fn environment_overrides_files() {
        let settings = load(&[
            ("ITS_DESTINATION_CHAIN", "Fantom"),
            ("ITS_GAS_ESTIMATOR__GAS_LIMIT", "900000"),
            ("ITS_SIGNER__TYPE", "hex_key"),
            (
                "ITS_SIGNER__KEY",
                "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            ),
            ("UNRELATED_VAR", "ignored"),
        ])
        .unwrap();
        assert_eq!(settings.destination_chain, "Fantom");
        assert_eq!(settings.gas_estimator.gas_limit, 900_000);
        assert!(matches!(settings.signer, SignerConf::HexKey { .. }));
        assert!(settings.signer.build().is_ok());
    }

    #[test]
    fn malformed_address_fails_to_load() {
        let err = load(&[("ITS_TOKEN", "0x1234")]).unwrap_err();
        assert!(format!("{err:?}").contains("testnet.json"));
    }

    #[test]
    fn mistyped_signer_type_fails_to_load() {
        let err = load(&[("ITS_SIGNER__TYPE", "hexkey")]).unwrap_err();
        assert!(format!("{err:?}").contains("testnet.json"));
    }

    #[test]
    fn transfer_amount_in_base_units() {
        let conf = TransferConf {
            amount: "1.5".into(),
            decimals: 6,
        };
        assert_eq!(conf.base_units().unwrap(), U256::from(1_500_000));

        let conf = TransferConf {
            amount: "lots".into(),
            decimals: 18,
        };
        assert!(conf.base_units().is_err());
    }
}
