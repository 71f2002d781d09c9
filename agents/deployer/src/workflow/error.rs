use its_core::{Address, ChainCommunicationError, GasEstimatorError, H256};

use super::Stage;

/// Errors a workflow step can fail with
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// A contract call or transaction failed
    #[error(transparent)]
    Chain(#[from] ChainCommunicationError),
    /// No usable gas quote could be obtained
    #[error("Gas estimation failed: {0}")]
    GasEstimation(#[from] GasEstimatorError),
    /// The signer may not grant the role
    #[error("Signer {signer:?} does not hold {admin_role:?}, the admin role of {role:?}")]
    MissingRoleAdmin {
        /// Signer of the run
        signer: Address,
        /// Role that was to be granted
        role: H256,
        /// Role required to grant it
        admin_role: H256,
    },
}

/// Terminal failure of a run
#[derive(Debug, thiserror::Error)]
#[error("Workflow failed at stage {stage}")]
pub struct StageFailure {
    /// Stage that failed
    pub stage: Stage,
    /// What went wrong
    #[source]
    pub error: WorkflowError,
}
