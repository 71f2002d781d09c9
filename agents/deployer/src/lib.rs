//! Deploys an interchain token manager on a local and a remote chain, grants
//! it the token's minter role and sends a test transfer through it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod settings;
pub mod workflow;

pub use settings::DeployerSettings;
pub use workflow::{Stage, StageFailure, Workflow, WorkflowConfig, WorkflowError, WorkflowReport};
