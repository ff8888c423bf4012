//! Defines the user store trait.

use crate::{
    Error,
    user::{NewUser, User, UserId},
};

/// Creates, retrieves and replaces [User]s.
pub trait UserStore {
    /// Get every user in storage order.
    fn get_all(&self) -> Result<Vec<User>, Error>;

    /// Get a user by their ID.
    ///
    /// Returns [Error::NotFound] if no user has the given ID.
    fn get(&self, id: UserId) -> Result<User, Error>;

    /// Store a new user and return them as they were persisted, including their ID.
    ///
    /// Returns [Error::DuplicateEmail] if the email is already in use.
    fn create(&self, user: NewUser) -> Result<User, Error>;

    /// Replace the fields of the user with the given ID.
    ///
    /// Succeeds without changing anything if no user has the given ID.
    fn update(&self, id: UserId, user: &NewUser) -> Result<(), Error>;
}
