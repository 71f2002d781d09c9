use serde::{Deserialize, Serialize};

use its_core::{GasEstimatorError, GasFeeRequest, U256};

/// Body of an `estimateGasFee` query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EstimateGasFeeArgs {
    method: &'static str,
    source_chain: String,
    destination_chain: String,
    // The API takes the limit as a decimal string
    gas_limit: String,
    gas_multiplier: f64,
    show_detailed_fees: bool,
}

impl From<&GasFeeRequest> for EstimateGasFeeArgs {
    fn from(request: &GasFeeRequest) -> Self {
        Self {
            method: "estimateGasFee",
            source_chain: request.source_chain.clone(),
            destination_chain: request.destination_chain.clone(),
            gas_limit: request.gas_limit.to_string(),
            gas_multiplier: request.multiplier,
            show_detailed_fees: false,
        }
    }
}

/// The API answers either with the bare fee or with the fee wrapped in a
/// `result` field, depending on the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum EstimateGasFeeResponse {
    Wrapped { result: FeeValue },
    Bare(FeeValue),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum FeeValue {
    Decimal(String),
    Number(serde_json::Number),
}

/// Extract the fee in wei from the response
pub(crate) fn parse_fee(response: EstimateGasFeeResponse) -> Result<U256, GasEstimatorError> {
    let value = match response {
        EstimateGasFeeResponse::Wrapped { result } => result,
        EstimateGasFeeResponse::Bare(value) => value,
    };
    match value {
        FeeValue::Decimal(s) => {
            U256::from_dec_str(s.trim()).map_err(|_| GasEstimatorError::InvalidFee(s))
        }
        FeeValue::Number(n) => {
            let s = n.to_string();
            U256::from_dec_str(&s).map_err(|_| GasEstimatorError::InvalidFee(s))
        }
    }
}
