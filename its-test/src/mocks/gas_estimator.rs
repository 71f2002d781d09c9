#![allow(non_snake_case)]

use async_trait::async_trait;
use mockall::*;

use its_core::*;

mock! {
    pub GasEstimatorApi {
        pub fn _estimate_gas_fee(
            &self,
            request: &GasFeeRequest,
        ) -> Result<GasQuote, GasEstimatorError> {}
    }
}

pub type MockGasEstimator = MockGasEstimatorApi;

impl std::fmt::Debug for MockGasEstimatorApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockGasEstimator")
    }
}

#[async_trait]
impl GasEstimator for MockGasEstimatorApi {
    async fn estimate_gas_fee(
        &self,
        request: &GasFeeRequest,
    ) -> Result<GasQuote, GasEstimatorError> {
        self._estimate_gas_fee(request)
    }
}
