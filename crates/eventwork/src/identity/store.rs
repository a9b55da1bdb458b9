use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use super::credentials::{hash_credential, verify_credential, CredentialError};
use super::domain::{Account, AccountCandidate, AccountId, AccountKind};
use crate::storage::{
    load_collection, save_collection, KeyValueStore, StorageError, ACCOUNTS_KEY, SESSION_KEY,
};

/// Account registry plus the single signed-in session.
pub struct IdentityStore<S: ?Sized> {
    storage: Arc<S>,
    accounts: Vec<Account>,
    session: Option<Account>,
}

impl<S> IdentityStore<S>
where
    S: KeyValueStore + ?Sized,
{
    /// Load the registry and any persisted session from `storage`.
    pub fn open(storage: Arc<S>) -> Result<Self, IdentityError> {
        let accounts: Vec<Account> =
            load_collection(&*storage, ACCOUNTS_KEY)?.unwrap_or_default();
        let session: Option<Account> = load_collection(&*storage, SESSION_KEY)?;

        info!(
            accounts = accounts.len(),
            session = session.is_some(),
            "identity store opened"
        );

        Ok(Self {
            storage,
            accounts,
            session,
        })
    }

    /// Create an account, persist it, and sign it in.
    pub fn register(&mut self, candidate: AccountCandidate) -> Result<Account, IdentityError> {
        let AccountCandidate {
            name,
            phone,
            credential,
            location,
            kind,
            company_name,
            profile_photo,
        } = candidate;

        if self
            .accounts
            .iter()
            .any(|account| account.phone == phone && account.kind == kind)
        {
            warn!(kind = kind.label(), "signup rejected, phone already registered");
            return Err(IdentityError::DuplicateAccount { kind });
        }

        let account = Account {
            id: AccountId::generate(),
            name,
            phone,
            credential_hash: hash_credential(&credential)?,
            location,
            kind,
            company_name: match kind {
                AccountKind::Authoriser => company_name,
                AccountKind::Worker => None,
            },
            profile_photo,
            created_at: Utc::now(),
        };

        let mut accounts = self.accounts.clone();
        accounts.push(account.clone());
        save_collection(&*self.storage, ACCOUNTS_KEY, &accounts)?;
        if let Err(err) = self.start_session(&account) {
            if let Err(rollback) = save_collection(&*self.storage, ACCOUNTS_KEY, &self.accounts) {
                error!(error = %rollback, "failed to roll back account registry");
            }
            return Err(err);
        }
        self.accounts = accounts;

        info!(account_id = %account.id, kind = kind.label(), "account registered");
        Ok(account)
    }

    /// Sign in the account matching phone, credential, and kind.
    pub fn authenticate(
        &mut self,
        phone: &str,
        credential: &str,
        kind: AccountKind,
    ) -> Result<Account, IdentityError> {
        let candidate = self
            .accounts
            .iter()
            .find(|account| account.phone == phone && account.kind == kind);

        let verified = candidate.filter(|account| {
            verify_credential(credential, &account.credential_hash).unwrap_or_else(|err| {
                warn!(account_id = %account.id, error = %err, "stored credential unreadable");
                false
            })
        });

        let account = match verified {
            Some(account) => account.clone(),
            None => {
                warn!(kind = kind.label(), "login rejected");
                return Err(IdentityError::InvalidCredentials);
            }
        };

        self.start_session(&account)?;
        info!(account_id = %account.id, kind = kind.label(), "session started");
        Ok(account)
    }

    /// Clear the active session. Calling this without a session is a no-op.
    pub fn end_session(&mut self) -> Result<(), IdentityError> {
        self.storage.remove(SESSION_KEY)?;
        if let Some(account) = self.session.take() {
            info!(account_id = %account.id, "session ended");
        }
        Ok(())
    }

    pub fn current_session(&self) -> Option<&Account> {
        self.session.as_ref()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find_account(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| &account.id == id)
    }

    fn start_session(&mut self, account: &Account) -> Result<(), IdentityError> {
        save_collection(&*self.storage, SESSION_KEY, account)?;
        self.session = Some(account.clone());
        Ok(())
    }
}

/// Error raised by the identity store.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("phone number already registered as a {}", .kind.label())]
    DuplicateAccount { kind: AccountKind },
    #[error("invalid phone number or credential")]
    InvalidCredentials,
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
