//! RegisterUserHandler - command handler for account creation.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::foundation::{DomainError, UserId, UserRole};
use crate::domain::user::User;
use crate::ports::{AuthProvider, DynRecordStore};

/// Command to register a new user account.
#[derive(Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub contact: String,
    pub role: UserRole,
    pub secret: SecretString,
}

/// Handler for registering users.
///
/// The contact address doubles as the login key, so it must be unique
/// across all accounts; a collision fails with `DuplicateContact`
/// before anything is hashed or stored.
pub struct RegisterUserHandler {
    users: DynRecordStore<User>,
    auth: Arc<dyn AuthProvider>,
}

impl RegisterUserHandler {
    pub fn new(users: DynRecordStore<User>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { users, auth }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, DomainError> {
        let taken = self
            .users
            .list()
            .await?
            .iter()
            .any(|u| u.contact() == cmd.contact);
        if taken {
            return Err(DomainError::duplicate_contact(cmd.contact));
        }

        let credential = self.auth.hash_credential(&cmd.secret).await?;
        let user = User::new(UserId::new(), cmd.name, cmd.contact, cmd.role, credential)?;
        self.users.insert(user.clone()).await?;

        Ok(user)
    }
}
