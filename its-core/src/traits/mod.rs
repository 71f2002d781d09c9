use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    Address, ChainResult, EncodedParams, GasEstimatorError, GasFeeRequest, GasQuote,
    InterchainTransfer, ManagerType, Salt, TokenId, TxOutcome, H256, U256,
};

/// Interface of the interchain token service contract, as consumed by the
/// deployment workflow.
#[async_trait]
pub trait InterchainTokenService: Debug + Send + Sync {
    /// Address of the service contract
    fn address(&self) -> Address;

    /// Register a token manager. An empty `destination_chain` deploys on the
    /// local chain; otherwise a deployment message is sent to the named chain
    /// and `payment` is attached to cover its relay.
    async fn deploy_token_manager(
        &self,
        salt: Salt,
        destination_chain: &str,
        manager_type: ManagerType,
        params: &EncodedParams,
        payment: U256,
    ) -> ChainResult<TxOutcome>;

    /// Token id the service assigns to `deployer` deploying with `salt`
    async fn interchain_token_id(&self, deployer: Address, salt: Salt) -> ChainResult<TokenId>;

    /// Address at which the manager of `token_id` lives (or will live)
    async fn token_manager_address(&self, token_id: TokenId) -> ChainResult<Address>;

    /// Send tokens to another chain, attaching `payment` for the relay
    async fn interchain_transfer(
        &self,
        transfer: &InterchainTransfer,
        payment: U256,
    ) -> ChainResult<TxOutcome>;
}

/// A token contract using role based access control for minting.
#[async_trait]
pub trait MintableToken: Debug + Send + Sync {
    /// Address of the token contract
    fn address(&self) -> Address;

    /// Identifier of the role allowed to mint
    async fn minter_role(&self) -> ChainResult<H256>;

    /// Role whose holders may grant and revoke `role`
    async fn role_admin(&self, role: H256) -> ChainResult<H256>;

    /// Whether `account` holds `role`
    async fn has_role(&self, role: H256, account: Address) -> ChainResult<bool>;

    /// Grant `role` to `account`
    async fn grant_role(&self, role: H256, account: Address) -> ChainResult<TxOutcome>;
}

/// A service quoting the fee for relaying a message between two chains.
#[async_trait]
pub trait GasEstimator: Debug + Send + Sync {
    /// Fetch a fresh quote. Implementations must not cache.
    async fn estimate_gas_fee(&self, request: &GasFeeRequest)
        -> Result<GasQuote, GasEstimatorError>;
}

/// Source of deployment salts
pub trait SaltSource: Debug + Send + Sync {
    /// Produce the salt for the next deployment
    fn next_salt(&self) -> Salt;
}

/// Draws every salt from the thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSalt;

impl SaltSource for RandomSalt {
    fn next_salt(&self) -> Salt {
        Salt::random()
    }
}
