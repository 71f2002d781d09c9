//! The token manager deployment workflow.
//!
//! A run moves through [`Stage::DeployLocal`], [`Stage::DeployRemote`],
//! [`Stage::GrantAccess`] and [`Stage::Transfer`] strictly in order. The salt
//! chosen by the local deployment, the token id and the manager address it
//! derives are the only values carried between stages. The first failure
//! ends the run; transactions already confirmed stay on chain.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use its_core::{
    Address, GasEstimator, GasFeeRequest, InterchainTokenService, ManagerType, MintableToken,
    SaltSource, U256,
};

pub use access::AccessGrant;
pub use deploy::{LocalDeployment, RemoteDeployment};
pub use error::{StageFailure, WorkflowError};
pub use transfer::TransferReceipt;

mod access;
mod deploy;
mod error;
mod gas;
mod transfer;

/// Values the workflow is parameterised with
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowConfig {
    /// Token the manager is deployed for
    pub token: Address,
    /// Operating policy of the manager
    pub manager_type: ManagerType,
    /// Chain of the remote deployment and of the test transfer
    pub destination_chain: String,
    /// Quote requested before each paying call
    pub gas_quote: GasFeeRequest,
    /// Test transfer amount in base units
    pub transfer_amount: U256,
}

/// Stages of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Deploy the manager on the local chain
    DeployLocal,
    /// Deploy the counterpart on the destination chain
    DeployRemote,
    /// Grant the minter role to the manager
    GrantAccess,
    /// Send the test transfer
    Transfer,
    /// All stages succeeded
    Done,
}

/// Everything a successful run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowReport {
    /// Local deployment, including the salt, token id and manager address
    pub local: LocalDeployment,
    /// Remote deployment dispatch
    pub remote: RemoteDeployment,
    /// Whether the remote step re-derived the local token id and manager
    pub remote_matches_local: bool,
    /// Minter role grant
    pub access: AccessGrant,
    /// Test transfer
    pub transfer: TransferReceipt,
}

/// Deploys a token manager locally and remotely, lets it mint and sends a
/// test transfer through it.
pub struct Workflow {
    config: WorkflowConfig,
    signer: Address,
    token_service: Arc<dyn InterchainTokenService>,
    token: Arc<dyn MintableToken>,
    gas_estimator: Arc<dyn GasEstimator>,
    salts: Arc<dyn SaltSource>,
}

impl Debug for Workflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workflow")
            .field("config", &self.config)
            .field("signer", &self.signer)
            .field("token_service", &self.token_service.address())
            .field("token", &self.token.address())
            .finish()
    }
}

fn failed_at(stage: Stage) -> impl FnOnce(WorkflowError) -> StageFailure {
    move |error| {
        error!(%stage, ?error, "Workflow stage failed");
        StageFailure { stage, error }
    }
}

impl Workflow {
    /// Wire a workflow run by `signer`
    pub fn new(
        config: WorkflowConfig,
        signer: Address,
        token_service: Arc<dyn InterchainTokenService>,
        token: Arc<dyn MintableToken>,
        gas_estimator: Arc<dyn GasEstimator>,
        salts: Arc<dyn SaltSource>,
    ) -> Self {
        Self {
            config,
            signer,
            token_service,
            token,
            gas_estimator,
            salts,
        }
    }

    /// Execute every stage in order, stopping at the first failure.
    #[instrument(skip(self), fields(signer = ?self.signer, destination = %self.config.destination_chain))]
    pub async fn run(&self) -> Result<WorkflowReport, StageFailure> {
        info!(
            token_service = ?self.token_service.address(),
            token = ?self.token.address(),
            "Starting token manager deployment"
        );

        let local = self
            .deploy_local()
            .await
            .map_err(failed_at(Stage::DeployLocal))?;

        let remote = self
            .deploy_remote(local.salt)
            .await
            .map_err(failed_at(Stage::DeployRemote))?;
        let remote_matches_local =
            remote.token_id == local.token_id && remote.token_manager == local.token_manager;
        if !remote_matches_local {
            warn!(
                local_token_id = %local.token_id,
                remote_token_id = %remote.token_id,
                local_manager = ?local.token_manager,
                remote_manager = ?remote.token_manager,
                "Remote deployment derived a different token manager than the local one"
            );
        }

        let access = self
            .grant_access(local.token_manager)
            .await
            .map_err(failed_at(Stage::GrantAccess))?;

        let transfer = self
            .transfer(local.token_id)
            .await
            .map_err(failed_at(Stage::Transfer))?;

        info!(stage = %Stage::Done, token_id = %local.token_id, "Workflow complete");
        Ok(WorkflowReport {
            local,
            remote,
            remote_matches_local,
            access,
            transfer,
        })
    }
}
