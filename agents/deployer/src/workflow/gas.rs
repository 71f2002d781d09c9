use tracing::{debug, instrument, warn};

use its_core::{GasEstimatorError, GasQuote};

use super::{Workflow, WorkflowError};

impl Workflow {
    /// Request a quote for the next paying call. Quotes are never reused
    /// between calls.
    #[instrument(skip(self), fields(
        source = %self.config.gas_quote.source_chain,
        destination = %self.config.gas_quote.destination_chain,
    ))]
    pub(crate) async fn fresh_gas_quote(&self) -> Result<GasQuote, WorkflowError> {
        let request = &self.config.gas_quote;
        if !request
            .destination_chain
            .eq_ignore_ascii_case(&self.config.destination_chain)
        {
            warn!(
                quoted = %request.destination_chain,
                destination = %self.config.destination_chain,
                "Gas is quoted for a different chain than the one the message is sent to"
            );
        }

        let quote = self.gas_estimator.estimate_gas_fee(request).await?;
        if quote.fee().is_zero() {
            return Err(GasEstimatorError::InvalidFee("0".to_owned()).into());
        }
        debug!(fee = %quote, "Fetched gas quote");
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use its_core::U256;

    use super::super::test_utils::{config, WorkflowMocks};
    use super::*;

    #[tokio::test]
    async fn every_call_fetches_a_new_quote() {
        let mut mocks = WorkflowMocks::default();
        let mut fee = 0u64;
        mocks
            .gas_estimator
            .expect__estimate_gas_fee()
            .times(2)
            .returning(move |_| {
                fee += 10;
                Ok(GasQuote(U256::from(fee)))
            });
        let workflow = mocks.into_workflow(config());

        assert_eq!(workflow.fresh_gas_quote().await.unwrap().fee(), U256::from(10u64));
        assert_eq!(workflow.fresh_gas_quote().await.unwrap().fee(), U256::from(20u64));
    }

    #[tokio::test]
    async fn quotes_the_configured_pair_even_when_it_differs() {
        let mut mocks = WorkflowMocks::default();
        mocks
            .gas_estimator
            .expect__estimate_gas_fee()
            .withf(|request| {
                request.source_chain == "avalanche" && request.destination_chain == "polygon"
            })
            .times(1)
            .returning(|_| Ok(GasQuote(U256::one())));
        let mut config = config();
        config.destination_chain = "Fantom".to_owned();
        let workflow = mocks.into_workflow(config);

        assert!(workflow.fresh_gas_quote().await.is_ok());
    }

    #[tokio::test]
    async fn zero_fee_is_rejected() {
        let mut mocks = WorkflowMocks::default();
        mocks
            .gas_estimator
            .expect__estimate_gas_fee()
            .returning(|_| Ok(GasQuote(U256::zero())));
        let workflow = mocks.into_workflow(config());

        assert!(matches!(
            workflow.fresh_gas_quote().await,
            Err(WorkflowError::GasEstimation(GasEstimatorError::InvalidFee(_)))
        ));
    }

    #[tokio::test]
    async fn estimator_errors_surface_unchanged() {
        let mut mocks = WorkflowMocks::default();
        mocks
            .gas_estimator
            .expect__estimate_gas_fee()
            .returning(|_| Err(GasEstimatorError::Timeout(Duration::from_secs(30))));
        let workflow = mocks.into_workflow(config());

        assert!(matches!(
            workflow.fresh_gas_quote().await,
            Err(WorkflowError::GasEstimation(GasEstimatorError::Timeout(_)))
        ));
    }
}
