//! LoginUserHandler - command handler for credential login.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::foundation::{Caller, DomainError, ErrorCode};
use crate::domain::user::User;
use crate::ports::{AuthProvider, DynRecordStore};

/// Command to log in with contact + secret.
#[derive(Clone)]
pub struct LoginUserCommand {
    pub contact: String,
    pub secret: SecretString,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// Handler for logging users in.
///
/// Unknown contact and wrong secret produce the same error, so a
/// caller cannot probe which contacts are registered.
pub struct LoginUserHandler {
    users: DynRecordStore<User>,
    auth: Arc<dyn AuthProvider>,
}

impl LoginUserHandler {
    pub fn new(users: DynRecordStore<User>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { users, auth }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoginResult, DomainError> {
        let user = self
            .users
            .list()
            .await?
            .into_iter()
            .find(|u| u.contact() == cmd.contact)
            .ok_or_else(rejected)?;

        let verified = self.auth.verify_credential(&cmd.secret, user.credential()).await?;
        if !verified {
            return Err(rejected());
        }

        let caller = Caller::new(*user.id(), user.role());
        let token = self.auth.issue_token(&caller).await?;

        Ok(LoginResult { token, user })
    }
}

fn rejected() -> DomainError {
    DomainError::new(ErrorCode::Unauthenticated, "Invalid contact or secret")
}
