use std::time::Duration;

use ethers::abi::Detokenize;
use ethers::contract::builders::ContractCall;
use ethers::providers::Middleware;
use ethers::types::{NameOrAddress, TransactionReceipt, U64};
use serde::Deserialize;
use tracing::{error, info, warn};

use its_core::{ChainCommunicationError, ChainResult, TxOutcome, H256};

const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 300;

/// How long, and for how many blocks, to wait on a dispatched transaction
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ConfirmationConf {
    /// Seconds to wait for the receipt before giving up
    pub timeout_secs: u64,
    /// Blocks to wait after inclusion
    pub confirmations: usize,
}

impl Default for ConfirmationConf {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_CONFIRMATION_TIMEOUT_SECS,
            confirmations: 1,
        }
    }
}

impl ConfirmationConf {
    /// The confirmation window
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Dispatches a transaction, logs the tx id, and waits (bounded) for it to be
/// confirmed. A mined but reverted transaction is an error.
pub(crate) async fn report_tx<M, D>(
    tx: ContractCall<M, D>,
    conf: &ConfirmationConf,
) -> ChainResult<TxOutcome>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    // "0x..."
    let data = format!(
        "0x{}",
        hex::encode(tx.tx.data().map(|b| b.to_vec()).unwrap_or_default())
    );

    let to = tx
        .tx
        .to()
        .cloned()
        .unwrap_or_else(|| NameOrAddress::Address(Default::default()));
    let value = tx.tx.value().cloned().unwrap_or_default();

    info!(?to, %data, %value, "Dispatching transaction");
    let dispatched = tx.send().await?;

    let tx_hash: H256 = *dispatched;

    info!(?to, ?tx_hash, "Dispatched tx");

    let timeout = conf.timeout();
    match tokio::time::timeout(timeout, dispatched.confirmations(conf.confirmations)).await {
        Ok(Ok(Some(receipt))) => outcome_from_receipt(receipt),
        // ethers-rs will return None if it can no longer poll for the tx in the mempool
        Ok(Ok(None)) => {
            warn!(?tx_hash, "transaction dropped from the mempool");
            Err(ChainCommunicationError::TransactionDropped(tx_hash))
        }
        Ok(Err(x)) => {
            error!(?tx_hash, error = ?x, "encountered error when waiting for receipt");
            Err(x.into())
        }
        Err(_) => {
            error!(?tx_hash, ?timeout, "waiting for receipt timed out");
            Err(ChainCommunicationError::TransactionTimeout { tx_hash, timeout })
        }
    }
}

fn outcome_from_receipt(receipt: TransactionReceipt) -> ChainResult<TxOutcome> {
    let tx_hash = receipt.transaction_hash;
    if receipt.status == Some(U64::zero()) {
        error!(?tx_hash, "transaction reverted");
        return Err(ChainCommunicationError::TransactionReverted(tx_hash));
    }
    info!(?tx_hash, block = ?receipt.block_number, "confirmed transaction");
    Ok(receipt.into())
}
