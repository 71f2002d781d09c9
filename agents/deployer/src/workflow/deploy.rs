use serde::Serialize;
use tracing::{info, instrument};

use its_core::{Address, ChainResult, EncodedParams, GasQuote, Salt, TokenId, TxOutcome, U256};

use super::{Workflow, WorkflowError};

/// The service deploys on its own chain when no destination is named.
const LOCAL_CHAIN: &str = "";

/// Result of deploying the manager on the local chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalDeployment {
    /// Salt the manager was deployed with
    pub salt: Salt,
    /// Id assigned to the token
    pub token_id: TokenId,
    /// Address of the deployed manager
    pub token_manager: Address,
    /// Deployment transaction
    pub tx: TxOutcome,
}

/// Result of dispatching the remote deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemoteDeployment {
    /// Token id re-derived after the dispatch
    pub token_id: TokenId,
    /// Manager address re-derived after the dispatch
    pub token_manager: Address,
    /// Dispatch transaction
    pub tx: TxOutcome,
    /// Relay fee attached to the dispatch
    pub fee: GasQuote,
}

impl Workflow {
    fn deploy_params(&self) -> EncodedParams {
        EncodedParams::new(self.signer, self.config.token)
    }

    async fn derive_manager(&self, salt: Salt) -> ChainResult<(TokenId, Address)> {
        let token_id = self
            .token_service
            .interchain_token_id(self.signer, salt)
            .await?;
        let token_manager = self.token_service.token_manager_address(token_id).await?;
        Ok((token_id, token_manager))
    }

    /// Deploy a token manager on the local chain under a fresh salt.
    #[instrument(skip(self), fields(token = ?self.config.token, manager_type = %self.config.manager_type))]
    pub async fn deploy_local(&self) -> Result<LocalDeployment, WorkflowError> {
        let salt = self.salts.next_salt();
        let params = self.deploy_params();

        let tx = self
            .token_service
            .deploy_token_manager(
                salt,
                LOCAL_CHAIN,
                self.config.manager_type,
                &params,
                U256::zero(),
            )
            .await?;
        let (token_id, token_manager) = self.derive_manager(salt).await?;

        info!(%salt, %token_id, ?token_manager, txid = ?tx.txid, "Deployed local token manager");
        Ok(LocalDeployment {
            salt,
            token_id,
            token_manager,
            tx,
        })
    }

    /// Deploy the counterpart manager on the destination chain, paying the
    /// relay with a fresh quote.
    #[instrument(skip(self), fields(destination = %self.config.destination_chain))]
    pub async fn deploy_remote(&self, salt: Salt) -> Result<RemoteDeployment, WorkflowError> {
        let params = self.deploy_params();
        let fee = self.fresh_gas_quote().await?;

        let tx = self
            .token_service
            .deploy_token_manager(
                salt,
                &self.config.destination_chain,
                self.config.manager_type,
                &params,
                fee.fee(),
            )
            .await?;
        let (token_id, token_manager) = self.derive_manager(salt).await?;

        info!(%token_id, ?token_manager, txid = ?tx.txid, %fee, "Dispatched remote token manager deployment");
        Ok(RemoteDeployment {
            token_id,
            token_manager,
            tx,
            fee,
        })
    }
}
