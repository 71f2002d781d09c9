use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use ethers::providers::Middleware;
use tracing::instrument;

use its_core::{Address, ChainResult, MintableToken, TxOutcome, H256};

use crate::contracts::MinterAccessControl;
use crate::tx::{report_tx, ConfirmationConf};

/// A role-gated mintable token on some Ethereum chain
pub struct EthereumMintableToken<M>
where
    M: Middleware,
{
    contract: Arc<MinterAccessControl<M>>,
    confirmation: ConfirmationConf,
}

impl<M> EthereumMintableToken<M>
where
    M: Middleware + 'static,
{
    /// Create a reference to the token at a specific Ethereum address
    pub fn new(provider: Arc<M>, address: Address, confirmation: ConfirmationConf) -> Self {
        Self {
            contract: Arc::new(MinterAccessControl::new(address, provider)),
            confirmation,
        }
    }
}

impl<M> Debug for EthereumMintableToken<M>
where
    M: Middleware,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthereumMintableToken")
            .field("address", &self.contract.address())
            .finish()
    }
}

#[async_trait]
impl<M> MintableToken for EthereumMintableToken<M>
where
    M: Middleware + 'static,
{
    fn address(&self) -> Address {
        self.contract.address()
    }

    #[instrument(err, ret, skip(self))]
    async fn minter_role(&self) -> ChainResult<H256> {
        Ok(self.contract.minter_role().call().await?.into())
    }

    #[instrument(err, ret, skip(self))]
    async fn role_admin(&self, role: H256) -> ChainResult<H256> {
        Ok(self.contract.get_role_admin(role.0).call().await?.into())
    }

    #[instrument(err, ret, skip(self))]
    async fn has_role(&self, role: H256, account: Address) -> ChainResult<bool> {
        Ok(self.contract.has_role(role.0, account).call().await?)
    }

    #[instrument(err, skip(self))]
    async fn grant_role(&self, role: H256, account: Address) -> ChainResult<TxOutcome> {
        let tx = self.contract.grant_role(role.0, account);
        report_tx(tx, &self.confirmation).await
    }
}
