use serde::Serialize;
use tracing::{info, instrument};

use its_core::{Bytes, GasQuote, InterchainTransfer, TokenId, TxOutcome, U256};

use super::{Workflow, WorkflowError};

/// Result of the smoke-test transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    /// Amount sent, in base units
    pub amount: U256,
    /// Transfer transaction
    pub tx: TxOutcome,
    /// Relay fee attached to the transfer
    pub fee: GasQuote,
}

impl Workflow {
    /// The transfer sent for `token_id`: the signer pays itself on the
    /// destination chain.
    fn smoke_transfer(&self, token_id: TokenId) -> InterchainTransfer {
        InterchainTransfer {
            token_id,
            destination_chain: self.config.destination_chain.clone(),
            destination_address: Bytes::from(self.signer.as_bytes().to_vec()),
            amount: self.config.transfer_amount,
            metadata: Bytes::default(),
            gas_value: U256::zero(),
        }
    }

    /// Send the configured amount of `token_id` to the signer's own address
    /// on the destination chain.
    #[instrument(skip(self), fields(destination = %self.config.destination_chain))]
    pub async fn transfer(&self, token_id: TokenId) -> Result<TransferReceipt, WorkflowError> {
        let fee = self.fresh_gas_quote().await?;
        let transfer = self.smoke_transfer(token_id);

        let tx = self
            .token_service
            .interchain_transfer(&transfer, fee.fee())
            .await?;

        info!(amount = %transfer.amount, txid = ?tx.txid, %fee, "Sent interchain transfer");
        Ok(TransferReceipt {
            amount: transfer.amount,
            tx,
            fee,
        })
    }
}
