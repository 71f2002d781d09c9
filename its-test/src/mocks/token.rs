#![allow(non_snake_case)]

use async_trait::async_trait;
use mockall::*;

use its_core::*;

mock! {
    pub MintableTokenContract {
        pub fn _address(&self) -> Address {}

        pub fn _minter_role(&self) -> ChainResult<H256> {}

        pub fn _role_admin(&self, role: H256) -> ChainResult<H256> {}

        pub fn _has_role(&self, role: H256, account: Address) -> ChainResult<bool> {}

        pub fn _grant_role(&self, role: H256, account: Address) -> ChainResult<TxOutcome> {}
    }
}

pub type MockMintableToken = MockMintableTokenContract;

impl std::fmt::Debug for MockMintableTokenContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockMintableToken")
    }
}

#[async_trait]
impl MintableToken for MockMintableTokenContract {
    fn address(&self) -> Address {
        self._address()
    }

    async fn minter_role(&self) -> ChainResult<H256> {
        self._minter_role()
    }

    async fn role_admin(&self, role: H256) -> ChainResult<H256> {
        self._role_admin(role)
    }

    async fn has_role(&self, role: H256, account: Address) -> ChainResult<bool> {
        self._has_role(role, account)
    }

    async fn grant_role(&self, role: H256, account: Address) -> ChainResult<TxOutcome> {
        self._grant_role(role, account)
    }
}
