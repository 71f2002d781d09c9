#![allow(non_snake_case)]

use async_trait::async_trait;
use mockall::*;

use its_core::*;

mock! {
    pub InterchainTokenServiceContract {
        pub fn _address(&self) -> Address {}

        pub fn _deploy_token_manager(
            &self,
            salt: Salt,
            destination_chain: &str,
            manager_type: ManagerType,
            params: &EncodedParams,
            payment: U256,
        ) -> ChainResult<TxOutcome> {}

        pub fn _interchain_token_id(
            &self,
            deployer: Address,
            salt: Salt,
        ) -> ChainResult<TokenId> {}

        pub fn _token_manager_address(&self, token_id: TokenId) -> ChainResult<Address> {}

        pub fn _interchain_transfer(
            &self,
            transfer: &InterchainTransfer,
            payment: U256,
        ) -> ChainResult<TxOutcome> {}
    }
}

pub type MockInterchainTokenService = MockInterchainTokenServiceContract;

impl std::fmt::Debug for MockInterchainTokenServiceContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockInterchainTokenService")
    }
}

#[async_trait]
impl InterchainTokenService for MockInterchainTokenServiceContract {
    fn address(&self) -> Address {
        self._address()
    }

    async fn deploy_token_manager(
        &self,
        salt: Salt,
        destination_chain: &str,
        manager_type: ManagerType,
        params: &EncodedParams,
        payment: U256,
    ) -> ChainResult<TxOutcome> {
        self._deploy_token_manager(salt, destination_chain, manager_type, params, payment)
    }

    async fn interchain_token_id(&self, deployer: Address, salt: Salt) -> ChainResult<TokenId> {
        self._interchain_token_id(deployer, salt)
    }

    async fn token_manager_address(&self, token_id: TokenId) -> ChainResult<Address> {
        self._token_manager_address(token_id)
    }

    async fn interchain_transfer(
        &self,
        transfer: &InterchainTransfer,
        payment: U256,
    ) -> ChainResult<TxOutcome> {
        self._interchain_transfer(transfer, payment)
    }
}
