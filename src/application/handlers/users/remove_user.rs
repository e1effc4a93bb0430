//! RemoveUserHandler - command handler for deleting an account.

use crate::domain::foundation::{Caller, DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::DynRecordStore;

/// Command to delete a user account.
#[derive(Debug, Clone)]
pub struct RemoveUserCommand {
    pub caller: Caller,
    pub user_id: UserId,
}

/// Handler for removing users.
///
/// Allowed for admins and for the account holder themself. Records
/// referencing the user (pets, requests, donations) are left in place.
pub struct RemoveUserHandler {
    users: DynRecordStore<User>,
}

impl RemoveUserHandler {
    pub fn new(users: DynRecordStore<User>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: RemoveUserCommand) -> Result<(), DomainError> {
        let permitted = cmd.caller.role.can_remove_users() || cmd.caller.is_user(&cmd.user_id);
        if !permitted {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Only admins may remove other users",
            ));
        }

        self.users.remove(&cmd.user_id).await
    }
}
