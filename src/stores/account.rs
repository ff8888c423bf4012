//! Defines the account store trait.

use crate::{
    Error,
    account::{Account, AccountId, NewAccount},
};

/// Creates, retrieves, replaces and deletes [Account]s.
///
/// Implementations must be safe to share between concurrently handled requests.
pub trait AccountStore {
    /// Get every account in storage order.
    fn get_all(&self) -> Result<Vec<Account>, Error>;

    /// Get an account by its ID.
    ///
    /// Returns [Error::NotFound] if no account has the given ID.
    fn get(&self, id: AccountId) -> Result<Account, Error>;

    /// Store a new account and return it as it was persisted, including its ID.
    ///
    /// Returns [Error::DuplicateAccountName] if the user already has an account with the same name.
    fn create(&self, account: NewAccount) -> Result<Account, Error>;

    /// Replace the fields of the account with the given ID.
    ///
    /// Succeeds without changing anything if no account has the given ID.
    fn update(&self, id: AccountId, account: &NewAccount) -> Result<(), Error>;

    /// Delete the account with the given ID.
    ///
    /// Returns [Error::NotFound] if no account has the given ID.
    fn delete(&self, id: AccountId) -> Result<(), Error>;
}
