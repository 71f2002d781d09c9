//! Mocks of the remote collaborators driven by the deployment workflow.

#![allow(missing_docs)]

pub mod mocks;
