//! Interfaces to the interchain token service contracts on Ethereum-compatible
//! chains.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub use crate::{provider::*, token::*, token_service::*, tx::ConfirmationConf};

mod tx;

/// InterchainTokenService abi
mod token_service;

/// Minter access control abi
mod token;

mod provider;

/// Generated contract bindings.
mod contracts;
