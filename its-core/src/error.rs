use std::any::Any;
use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::time::Duration;

use ethers_contract::ContractError;
use ethers_providers::{Middleware, ProviderError};

use crate::H256;

/// The result of interacting with a chain.
pub type ChainResult<T> = Result<T, ChainCommunicationError>;

/// An "Any"-typed error.
pub trait ItsCustomError: StdError + Send + Sync + Any {}

impl<E: StdError + Send + Sync + Any> ItsCustomError for E {}

/// Thin wrapper around a boxed ItsCustomError so foreign errors can be carried
/// by the enums below without leaking their types.
#[repr(transparent)]
pub struct ItsCustomErrorWrapper(Box<dyn ItsCustomError>);

impl Debug for ItsCustomErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", AsRef::<dyn ItsCustomError>::as_ref(&self))
    }
}

impl Display for ItsCustomErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", AsRef::<dyn ItsCustomError>::as_ref(&self))
    }
}

impl StdError for ItsCustomErrorWrapper {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl AsRef<dyn ItsCustomError> for ItsCustomErrorWrapper {
    fn as_ref(&self) -> &dyn ItsCustomError {
        self.0.as_ref()
    }
}

impl Deref for ItsCustomErrorWrapper {
    type Target = Box<dyn ItsCustomError>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// ChainCommunicationError contains errors returned when attempting to
/// call a chain or dispatch a transaction
#[derive(Debug, thiserror::Error)]
pub enum ChainCommunicationError {
    /// An error with a contract call, including reverts caught while
    /// estimating or sending the transaction
    #[error(transparent)]
    ContractError(ItsCustomErrorWrapper),
    /// Provider Error
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// A transaction was dropped from the mempool
    #[error("Transaction dropped from mempool {0:?}")]
    TransactionDropped(H256),
    /// A transaction was mined but its execution reverted
    #[error("Transaction reverted {0:?}")]
    TransactionReverted(H256),
    /// No receipt arrived within the confirmation window
    #[error("Transaction {tx_hash:?} not confirmed within {timeout:?}")]
    TransactionTimeout {
        /// Hash of the transaction being waited on
        tx_hash: H256,
        /// The confirmation window
        timeout: Duration,
    },
    /// Any other error; does not implement `From` to prevent
    /// conflicting/absorbing other errors.
    #[error(transparent)]
    Other(ItsCustomErrorWrapper),
}

impl ChainCommunicationError {
    /// Create a chain communication error from any other existing error
    pub fn from_other<E: ItsCustomError>(err: E) -> Self {
        Self::Other(ItsCustomErrorWrapper(Box::new(err)))
    }
}

impl<M> From<ContractError<M>> for ChainCommunicationError
where
    M: Middleware + 'static,
{
    fn from(e: ContractError<M>) -> Self {
        Self::ContractError(ItsCustomErrorWrapper(Box::new(e)))
    }
}

/// Errors returned by a gas fee estimation service
#[derive(Debug, thiserror::Error)]
pub enum GasEstimatorError {
    /// The service did not answer within the allotted time
    #[error("Gas estimation timed out after {0:?}")]
    Timeout(Duration),
    /// The service answered with a non-success status
    #[error("Gas estimation service returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnosis
        body: String,
    },
    /// The service answered with something that is not a usable fee
    #[error("Gas estimation service returned an invalid fee: {0:?}")]
    InvalidFee(String),
    /// Transport or decoding failure
    #[error(transparent)]
    Other(ItsCustomErrorWrapper),
}

impl GasEstimatorError {
    /// Create a gas estimator error from any other existing error
    pub fn from_other<E: ItsCustomError>(err: E) -> Self {
        Self::Other(ItsCustomErrorWrapper(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_errors_keep_their_message() {
        let cause = hex::decode("zz").unwrap_err();
        let message = cause.to_string();

        let err = ChainCommunicationError::from_other(cause.clone());
        assert!(matches!(err, ChainCommunicationError::Other(_)));
        assert_eq!(err.to_string(), message);

        let err = GasEstimatorError::from_other(cause);
        assert!(matches!(err, GasEstimatorError::Other(_)));
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn timeout_names_the_transaction() {
        let err = ChainCommunicationError::TransactionTimeout {
            tx_hash: H256::repeat_byte(0xab),
            timeout: Duration::from_secs(300),
        };
        let msg = err.to_string();
        assert!(msg.contains("abab"));
        assert!(msg.contains("300s"));
    }
}
