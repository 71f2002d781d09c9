use serde::Serialize;
use tracing::{info, instrument};

use its_core::{Address, TxOutcome, H256};

use super::{Workflow, WorkflowError};

/// Minter role granted to a token manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessGrant {
    /// Role id read from the token
    pub role: H256,
    /// Account the role was granted to
    pub grantee: Address,
    /// Grant transaction
    pub tx: TxOutcome,
}

impl Workflow {
    /// Grant the token's minter role to `token_manager`. Fails without
    /// sending anything when the signer does not hold the role's admin role.
    #[instrument(skip(self))]
    pub async fn grant_access(&self, token_manager: Address) -> Result<AccessGrant, WorkflowError> {
        let role = self.token.minter_role().await?;
        let admin_role = self.token.role_admin(role).await?;
        if !self.token.has_role(admin_role, self.signer).await? {
            return Err(WorkflowError::MissingRoleAdmin {
                signer: self.signer,
                role,
                admin_role,
            });
        }

        let tx = self.token.grant_role(role, token_manager).await?;
        info!(?role, grantee = ?token_manager, txid = ?tx.txid, "Granted minter role");
        Ok(AccessGrant {
            role,
            grantee: token_manager,
            tx,
        })
    }
}

#[cfg(test)]
mod tests {
    use its_core::ChainCommunicationError;

    use super::super::test_utils::{config, outcome, WorkflowMocks, SIGNER};
    use super::*;

    const MINTER: H256 = H256::repeat_byte(0x4d);
    const ADMIN: H256 = H256::zero();

    fn token_mocks(signer_is_admin: bool) -> WorkflowMocks {
        let mut mocks = WorkflowMocks::default();
        mocks.token.expect__minter_role().returning(|| Ok(MINTER));
        mocks
            .token
            .expect__role_admin()
            .withf(|role| *role == MINTER)
            .returning(|_| Ok(ADMIN));
        mocks
            .token
            .expect__has_role()
            .withf(|role, account| *role == ADMIN && *account == SIGNER)
            .returning(move |_, _| Ok(signer_is_admin));
        mocks
    }

    #[tokio::test]
    async fn grants_minter_role_to_the_manager() {
        let manager = Address::repeat_byte(0x22);
        let mut mocks = token_mocks(true);
        mocks
            .token
            .expect__grant_role()
            .withf(move |role, account| *role == MINTER && *account == manager)
            .times(1)
            .returning(|_, _| Ok(outcome(3)));

        let grant = mocks.into_workflow(config()).grant_access(manager).await.unwrap();
        assert_eq!(
            grant,
            AccessGrant {
                role: MINTER,
                grantee: manager,
                tx: outcome(3),
            }
        );
    }

    #[tokio::test]
    async fn missing_admin_role_sends_nothing() {
        let mut mocks = token_mocks(false);
        mocks.token.expect__grant_role().never();

        let err = mocks
            .into_workflow(config())
            .grant_access(Address::repeat_byte(0x22))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::MissingRoleAdmin { signer, role, admin_role }
                if signer == SIGNER && role == MINTER && admin_role == ADMIN
        ));
    }

    #[tokio::test]
    async fn reverted_grant_is_reported() {
        let mut mocks = token_mocks(true);
        mocks
            .token
            .expect__grant_role()
            .returning(|_, _| Err(ChainCommunicationError::TransactionReverted(H256::zero())));

        assert!(matches!(
            mocks
                .into_workflow(config())
                .grant_access(Address::repeat_byte(0x22))
                .await,
            Err(WorkflowError::Chain(_))
        ));
    }
}
