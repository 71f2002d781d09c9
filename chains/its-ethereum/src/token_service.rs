#![allow(missing_docs)]

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use ethers::providers::Middleware;
use tracing::instrument;

use its_core::{
    Address, ChainResult, EncodedParams, InterchainTokenService, InterchainTransfer, ManagerType,
    Salt, TokenId, TxOutcome, U256,
};

use crate::contracts::IInterchainTokenService as EthereumInterchainTokenServiceInternal;
use crate::tx::{report_tx, ConfirmationConf};

/// A reference to an InterchainTokenService contract on some Ethereum chain
pub struct EthereumInterchainTokenService<M>
where
    M: Middleware,
{
    contract: Arc<EthereumInterchainTokenServiceInternal<M>>,
    confirmation: ConfirmationConf,
}

impl<M> EthereumInterchainTokenService<M>
where
    M: Middleware + 'static,
{
    /// Create a reference to the token service at a specific Ethereum address
    pub fn new(provider: Arc<M>, address: Address, confirmation: ConfirmationConf) -> Self {
        Self {
            contract: Arc::new(EthereumInterchainTokenServiceInternal::new(
                address, provider,
            )),
            confirmation,
        }
    }
}

impl<M> Debug for EthereumInterchainTokenService<M>
where
    M: Middleware,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthereumInterchainTokenService")
            .field("address", &self.contract.address())
            .finish()
    }
}

#[async_trait]
impl<M> InterchainTokenService for EthereumInterchainTokenService<M>
where
    M: Middleware + 'static,
{
    fn address(&self) -> Address {
        self.contract.address()
    }

    #[instrument(err, skip(self, params))]
    async fn deploy_token_manager(
        &self,
        salt: Salt,
        destination_chain: &str,
        manager_type: ManagerType,
        params: &EncodedParams,
        payment: U256,
    ) -> ChainResult<TxOutcome> {
        // The relay fee rides on the call value; the explicit gas value argument stays zero.
        let tx = self
            .contract
            .deploy_token_manager(
                salt.to_fixed_bytes(),
                destination_chain.to_owned(),
                manager_type.into(),
                params.bytes().clone(),
                U256::zero(),
            )
            .value(payment);
        report_tx(tx, &self.confirmation).await
    }

    #[instrument(err, ret, skip(self))]
    async fn interchain_token_id(&self, deployer: Address, salt: Salt) -> ChainResult<TokenId> {
        let id = self
            .contract
            .interchain_token_id(deployer, salt.to_fixed_bytes())
            .call()
            .await?;
        Ok(TokenId::from(id))
    }

    #[instrument(err, ret, skip(self))]
    async fn token_manager_address(&self, token_id: TokenId) -> ChainResult<Address> {
        Ok(self
            .contract
            .token_manager_address(token_id.to_fixed_bytes())
            .call()
            .await?)
    }

    #[instrument(err, skip(self, transfer), fields(token_id = %transfer.token_id, destination = %transfer.destination_chain))]
    async fn interchain_transfer(
        &self,
        transfer: &InterchainTransfer,
        payment: U256,
    ) -> ChainResult<TxOutcome> {
        let tx = self
            .contract
            .interchain_transfer(
                transfer.token_id.to_fixed_bytes(),
                transfer.destination_chain.clone(),
                transfer.destination_address.clone(),
                transfer.amount,
                transfer.metadata.clone(),
                transfer.gas_value,
            )
            .value(payment);
        report_tx(tx, &self.confirmation).await
    }
}
