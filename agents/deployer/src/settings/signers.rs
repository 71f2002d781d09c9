use ethers::signers::LocalWallet;
use eyre::{bail, Report};
use tracing::instrument;

use its_core::utils::HexString;

/// Ethereum signer types
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignerConf {
    /// A local hex key
    HexKey {
        /// Hex string of private key, with or without 0x prefix
        key: HexString<64>,
    },
    /// No key configured
    #[default]
    Node,
}

impl SignerConf {
    /// Resolve the identity every transaction of the run is signed with.
    #[instrument(err)]
    pub fn build(&self) -> Result<LocalWallet, Report> {
        match self {
            SignerConf::HexKey { key } => Ok(key.as_ref().parse::<LocalWallet>()?),
            SignerConf::Node => {
                bail!("No signer configured; set `signer.type = hex_key` and `signer.key` (ITS_SIGNER__KEY)")
            }
        }
    }
}
