//! UpdateUserHandler - command handler for patching a user account.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{User, UserPatch};
use crate::ports::DynRecordStore;

/// Command to patch a user's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub patch: UserPatch,
}

/// Handler for updating users.
///
/// A contact change re-checks uniqueness against every other account.
pub struct UpdateUserHandler {
    users: DynRecordStore<User>,
}

impl UpdateUserHandler {
    pub fn new(users: DynRecordStore<User>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, DomainError> {
        let mut user = self.users.get(&cmd.user_id).await?;

        if let Some(contact) = &cmd.patch.contact {
            let taken = self
                .users
                .list()
                .await?
                .iter()
                .any(|other| other.id() != &cmd.user_id && other.contact() == contact.as_str());
            if taken {
                return Err(DomainError::duplicate_contact(contact.clone()));
            }
        }

        user.apply_patch(cmd.patch)?;
        self.users.update(user.clone()).await?;

        Ok(user)
    }
}
