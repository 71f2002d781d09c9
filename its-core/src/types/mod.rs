use std::fmt::{Display, Formatter};

use derive_new::new;
use ethers_core::abi::{self, Token};
use ethers_core::types::TransactionReceipt;
use serde::{Deserialize, Serialize};

use crate::{Address, Bytes, H256, U256};

pub use salt::Salt;

mod salt;

/// Cross-chain identifier of a token registered with the interchain token
/// service. Derived on chain from the deployer address and a salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TokenId(pub H256);

impl TokenId {
    /// Raw bytes, as passed to the `bytes32 tokenId` contract arguments
    pub fn to_fixed_bytes(self) -> [u8; 32] {
        self.0 .0
    }
}

impl From<[u8; 32]> for TokenId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(H256(bytes))
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Operating policy of a token manager. The discriminants are the values of
/// the token service's `TokenManagerType` enum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ManagerType {
    /// Manager deployed alongside a token created by the service itself
    NativeInterchainToken = 0,
    /// Mints and burns, pulling tokens with `transferFrom` before burning
    MintBurnFrom = 1,
    /// Locks and unlocks existing supply
    LockUnlock = 2,
    /// Locks and unlocks a fee-on-transfer token
    LockUnlockFee = 3,
    /// Mints on arrival and burns on departure
    #[default]
    MintBurn = 4,
}

impl From<ManagerType> for u8 {
    fn from(t: ManagerType) -> Self {
        t as u8
    }
}

/// The `(bytes operator, address token)` tuple expected by
/// `deployTokenManager`, ABI encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedParams(Bytes);

impl EncodedParams {
    /// Encode the operator and token addresses. The operator travels as raw
    /// `bytes` so it can name accounts on non-EVM chains.
    pub fn new(operator: Address, token: Address) -> Self {
        let encoded = abi::encode(&[
            Token::Bytes(operator.as_bytes().to_vec()),
            Token::Address(token),
        ]);
        Self(encoded.into())
    }

    /// The encoded bytes
    pub fn bytes(&self) -> &Bytes {
        &self.0
    }
}

/// A fee quoted for relaying one message and executing it in the destination
/// environment. The estimator converts that cost into the native gas token of
/// the paying (source) chain, since it is attached as the value of the source
/// transaction. Quotes go stale quickly and are never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GasQuote(pub U256);

impl GasQuote {
    /// The quoted fee
    pub fn fee(&self) -> U256 {
        self.0
    }
}

impl Display for GasQuote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Parameters of a gas fee quote for relaying between two chains
#[derive(Debug, Clone, PartialEq, new)]
pub struct GasFeeRequest {
    /// Chain the message is sent from
    pub source_chain: String,
    /// Chain the message is executed on
    pub destination_chain: String,
    /// Gas expected to be spent executing the message on the destination
    pub gas_limit: u64,
    /// Safety factor applied by the estimator to its own quote
    pub multiplier: f64,
}

/// The arguments of an `interchainTransfer` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterchainTransfer {
    /// Token being sent
    pub token_id: TokenId,
    /// Name of the chain the tokens are sent to
    pub destination_chain: String,
    /// Receiver on the destination chain, raw bytes
    pub destination_address: Bytes,
    /// Amount in the token's base units
    pub amount: U256,
    /// Opaque data forwarded to the receiver
    pub metadata: Bytes,
    /// Gas value passed explicitly to the service
    pub gas_value: U256,
}

/// The result of a confirmed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TxOutcome {
    /// The txid
    pub txid: H256,
    /// Amount of gas used on this transaction.
    pub gas_used: U256,
    /// Price paid for the gas
    pub gas_price: U256,
}

impl From<TransactionReceipt> for TxOutcome {
    fn from(t: TransactionReceipt) -> Self {
        Self {
            txid: t.transaction_hash,
            gas_used: t.gas_used.unwrap_or_default(),
            gas_price: t.effective_gas_price.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn manager_type_matches_service_enum() {
        assert_eq!(u8::from(ManagerType::MintBurn), 4);
        assert_eq!(u8::from(ManagerType::LockUnlock), 2);
        assert_eq!(ManagerType::default(), ManagerType::MintBurn);
        assert_eq!(
            ManagerType::from_str("mint_burn_from").unwrap(),
            ManagerType::MintBurnFrom
        );
        let parsed: ManagerType = serde_json::from_str("\"lock_unlock_fee\"").unwrap();
        assert_eq!(parsed, ManagerType::LockUnlockFee);
    }

    #[test]
    fn params_encode_operator_as_bytes() {
        let operator = Address::repeat_byte(0xaa);
        let token = Address::repeat_byte(0xbb);
        let params = EncodedParams::new(operator, token);

        // head: offset of the bytes, token address; tail: length, padded bytes
        let raw = params.bytes().to_vec();
        assert_eq!(raw.len(), 4 * 32);
        assert_eq!(U256::from_big_endian(&raw[..32]), U256::from(64));
        assert_eq!(&raw[44..64], token.as_bytes());
        assert_eq!(U256::from_big_endian(&raw[64..96]), U256::from(20));
        assert_eq!(&raw[96..116], operator.as_bytes());
        assert!(raw[116..].iter().all(|b| *b == 0));

        let decoded = abi::decode(
            &[abi::ParamType::Bytes, abi::ParamType::Address],
            &raw,
        )
        .unwrap();
        assert_eq!(decoded[0], Token::Bytes(operator.as_bytes().to_vec()));
        assert_eq!(decoded[1], Token::Address(token));
    }

    #[test]
    fn params_are_deterministic() {
        let operator = Address::repeat_byte(0x11);
        let token = Address::repeat_byte(0x22);
        assert_eq!(
            EncodedParams::new(operator, token),
            EncodedParams::new(operator, token)
        );
    }

    #[test]
    fn outcome_from_receipt() {
        let receipt = TransactionReceipt {
            transaction_hash: H256::repeat_byte(0x01),
            gas_used: Some(U256::from(21_000)),
            effective_gas_price: None,
            ..Default::default()
        };
        let outcome = TxOutcome::from(receipt);
        assert_eq!(outcome.txid, H256::repeat_byte(0x01));
        assert_eq!(outcome.gas_used, U256::from(21_000));
        assert_eq!(outcome.gas_price, U256::zero());
    }
}
