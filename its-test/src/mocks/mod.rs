pub use gas_estimator::MockGasEstimator;
pub use salt::MockSaltSource;
pub use token::MockMintableToken;
pub use token_service::MockInterchainTokenService;

mod gas_estimator;
mod salt;
mod token;
mod token_service;
