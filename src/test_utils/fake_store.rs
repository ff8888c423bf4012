use std::sync::{Arc, Mutex};

use crate::{
    Error,
    account::{Account, AccountId, NewAccount},
    stores::{AccountStore, UserStore},
    user::{NewUser, User, UserId},
};

/// An in-memory store that can be switched into a mode where every call fails like a broken
/// database connection.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeStore {
    accounts: Arc<Mutex<Vec<Account>>>,
    users: Arc<Mutex<Vec<User>>>,
    fail: bool,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store where every operation returns [Error::SqlError].
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), Error> {
        if self.fail {
            Err(Error::SqlError(rusqlite::Error::InvalidQuery))
        } else {
            Ok(())
        }
    }
}

impl AccountStore for FakeStore {
    fn get_all(&self) -> Result<Vec<Account>, Error> {
        self.check()?;

        Ok(self.accounts.lock().unwrap().clone())
    }

    fn get(&self, id: AccountId) -> Result<Account, Error> {
        self.check()?;

        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|account| account.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn create(&self, account: NewAccount) -> Result<Account, Error> {
        self.check()?;
        let mut accounts = self.accounts.lock().unwrap();

        if accounts
            .iter()
            .any(|other| other.user_id == account.user_id && other.name == account.name)
        {
            return Err(Error::DuplicateAccountName);
        }

        let id = accounts.iter().map(|other| other.id).max().unwrap_or(0) + 1;
        let account = account.with_id(id);
        accounts.push(account.clone());

        Ok(account)
    }

    fn update(&self, id: AccountId, account: &NewAccount) -> Result<(), Error> {
        self.check()?;
        let mut accounts = self.accounts.lock().unwrap();

        if accounts.iter().any(|other| {
            other.id != id && other.user_id == account.user_id && other.name == account.name
        }) {
            return Err(Error::DuplicateAccountName);
        }

        if let Some(existing) = accounts.iter_mut().find(|other| other.id == id) {
            *existing = account.clone().with_id(id);
        }

        Ok(())
    }

    fn delete(&self, id: AccountId) -> Result<(), Error> {
        self.check()?;
        let mut accounts = self.accounts.lock().unwrap();

        let count_before = accounts.len();
        accounts.retain(|account| account.id != id);

        if accounts.len() == count_before {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

impl UserStore for FakeStore {
    fn get_all(&self) -> Result<Vec<User>, Error> {
        self.check()?;

        Ok(self.users.lock().unwrap().clone())
    }

    fn get(&self, id: UserId) -> Result<User, Error> {
        self.check()?;

        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn create(&self, user: NewUser) -> Result<User, Error> {
        self.check()?;
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|other| other.email == user.email) {
            return Err(Error::DuplicateEmail);
        }

        let id = users.iter().map(|other| other.id).max().unwrap_or(0) + 1;
        let user = user.with_id(id);
        users.push(user.clone());

        Ok(user)
    }

    fn update(&self, id: UserId, user: &NewUser) -> Result<(), Error> {
        self.check()?;
        let mut users = self.users.lock().unwrap();

        if users
            .iter()
            .any(|other| other.id != id && other.email == user.email)
        {
            return Err(Error::DuplicateEmail);
        }

        if let Some(existing) = users.iter_mut().find(|other| other.id == id) {
            *existing = user.clone().with_id(id);
        }

        Ok(())
    }
}
