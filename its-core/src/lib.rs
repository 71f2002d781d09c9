//! Core types and traits shared by the interchain token service deployment
//! tooling. Chain and API specific crates implement the traits defined here so
//! the deployment workflow can be driven against any of them, or against mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use ethers_core::types::{Address, Bytes, H160, H256, U256};

pub use error::*;
pub use traits::*;
pub use types::*;

mod error;
mod traits;
mod types;

/// Parsing helpers
pub mod utils;
